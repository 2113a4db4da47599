use derive_more::{
    Display,
    From,
    Into,
};
use serde::{
    Deserialize,
    Serialize,
};

/// Record identifier, assigned by the service. The client never produces or
/// mutates one.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
    Into,
)]
#[serde(transparent)]
pub struct StarId(pub i64);

/// One catalog entry. `distance` is in light-years.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub id: StarId,
    pub name: String,
    pub magnitude: f64,
    pub distance: f64,
    pub spectral_type: String,
}

/// Body of a create request: a [`Star`] minus the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateStar {
    pub name: String,
    pub magnitude: f64,
    pub distance: f64,
    pub spectral_type: String,
}

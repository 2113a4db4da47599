pub mod model;

use chrono::{
    DateTime,
    Utc,
};
use semver::Version;
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct ServerStatus {
    pub server_version: Version,
    pub up_since: DateTime<Utc>,
}

use astrodata_client::ApiClient;
use astrodata_protocol::model::star::{
    CreateStar,
    Star,
};
use tokio::sync::watch;

/// Form fields staged as text until submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StarDraft {
    pub name: String,
    pub magnitude: String,
    pub distance: String,
    pub spectral_type: String,
}

impl StarDraft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.magnitude.is_empty()
            && self.distance.is_empty()
            && self.spectral_type.is_empty()
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn to_create_star(&self) -> CreateStar {
        CreateStar {
            name: self.name.clone(),
            magnitude: parse_or_nan(&self.magnitude),
            distance: parse_or_nan(&self.distance),
            spectral_type: self.spectral_type.clone(),
        }
    }
}

// Unparseable text becomes NaN and is forwarded uninspected. serde_json
// writes non-finite floats as `null`, which the service rejects, so the
// submission fails and the draft survives for retry.
fn parse_or_nan(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Everything the page renders from. Owned by [`StarsPage`], mutated only
/// through its operations, observed as snapshots.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub stars: Vec<Star>,
    pub status: LoadStatus,
    pub submitting: bool,
    pub error: Option<String>,
    pub draft: StarDraft,
}

impl ViewState {
    pub fn list_view(&self) -> ListView<'_> {
        match self.status {
            LoadStatus::Loading => ListView::Loading,
            _ if self.stars.is_empty() => ListView::Empty,
            _ => ListView::Rows(&self.stars),
        }
    }
}

/// What the list area shows: a loading indicator, the "no records" empty
/// state, or the rows themselves.
#[derive(Debug, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Empty,
    Rows(&'a [Star]),
}

/// Controller for the stars page.
///
/// `load` and `submit` are not serialized against each other and are never
/// cancelled; a response is applied whenever it arrives, so a stale reply
/// can overwrite a fresher one (last-response-wins).
pub struct StarsPage {
    api: ApiClient,
    state: watch::Sender<ViewState>,
}

impl StarsPage {
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self { api, state }
    }

    /// Snapshot of the current view state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Watch the view state for changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Mutate the draft in place. The per-keystroke hook.
    pub fn edit_draft(&self, edit: impl FnOnce(&mut StarDraft)) {
        self.state.send_modify(|state| edit(&mut state.draft));
    }

    /// Fetch the full collection and replace the local one wholesale.
    ///
    /// On failure the previously displayed collection is left untouched.
    pub async fn load(&self) {
        self.state.send_modify(|state| {
            state.status = LoadStatus::Loading;
            state.error = None;
        });

        match self.api.get_stars().await {
            Ok(stars) => {
                self.state.send_modify(|state| {
                    state.stars = stars;
                    state.status = LoadStatus::Loaded;
                });
            }
            Err(error) => {
                tracing::error!(%error, "failed to fetch stars");
                self.state.send_modify(|state| {
                    state.status = LoadStatus::Failed;
                    state.error = Some(error_message(&error));
                });
            }
        }
    }

    /// Send the current draft as a create request.
    ///
    /// On success the draft is cleared and [`load`](Self::load) runs again to
    /// resynchronize with the service; there is no optimistic insert. On
    /// failure the draft is left intact so the user can retry.
    pub async fn submit(&self) {
        let create = self.state.borrow().draft.to_create_star();

        self.state.send_modify(|state| {
            state.submitting = true;
        });

        match self.api.create_star(&create).await {
            Ok(_) => {
                self.state.send_modify(|state| {
                    state.draft.clear();
                    state.submitting = false;
                });
                self.load().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to add star");
                self.state.send_modify(|state| {
                    state.submitting = false;
                    state.error = Some(error_message(&error));
                });
            }
        }
    }
}

// Errors are flattened to one display string for the inline banner; the
// source chain is appended so a transport failure stays distinguishable by
// text, not by type.
fn error_message(error: &astrodata_client::Error) -> String {
    let mut message = error.to_string();
    let mut source: &dyn std::error::Error = error;
    while let Some(next) = source.source() {
        message.push_str(": ");
        message.push_str(&next.to_string());
        source = next;
    }
    message
}

mod api;

use std::fmt::Display;

use url::Url;

pub use crate::api::ApiClient;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http error")]
    Reqwest(#[from] reqwest::Error),
}

trait UrlExt {
    fn joined(self, segment: impl Display) -> Url;
}

impl UrlExt for Url {
    fn joined(mut self, segment: impl Display) -> Url {
        let mut segments = self.path_segments_mut().unwrap();
        segments.push(&segment.to_string());
        drop(segments);
        self
    }
}

use std::sync::Arc;

use astrodata_protocol::{
    model::star::{
        CreateStar,
        Star,
        StarId,
    },
    ServerStatus,
};
use url::Url;

use crate::{
    Error,
    UrlExt,
};

/// Client for the star catalog API. The base address is fixed at
/// construction.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    api_url: Arc<Url>,
}

impl ApiClient {
    pub fn new(api_url: Url) -> Self {
        tracing::debug!(%api_url, "creating api client");
        let client = reqwest::Client::new();
        Self {
            client,
            api_url: Arc::new(api_url),
        }
    }

    pub async fn status(&self) -> Result<ServerStatus, Error> {
        let status: ServerStatus = self
            .client
            .get(Url::clone(&self.api_url).joined("status"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(status)
    }

    pub async fn get_stars(&self) -> Result<Vec<Star>, Error> {
        let stars: Vec<Star> = self
            .client
            .get(Url::clone(&self.api_url).joined("stars"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(stars)
    }

    pub async fn get_star(&self, id: StarId) -> Result<Star, Error> {
        let star: Star = self
            .client
            .get(Url::clone(&self.api_url).joined("stars").joined(id))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(star)
    }

    pub async fn create_star(&self, star: &CreateStar) -> Result<Star, Error> {
        let star: Star = self
            .client
            .post(Url::clone(&self.api_url).joined("stars"))
            .json(star)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(star)
    }

    pub async fn delete_star(&self, id: StarId) -> Result<(), Error> {
        self.client
            .delete(Url::clone(&self.api_url).joined("stars").joined(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

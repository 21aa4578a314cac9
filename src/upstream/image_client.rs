use crate::{
    config::PexelsConfig,
    error::{DeckError, Result},
    models::PhotoSearchResponse,
    upstream::traits::ImageSearch,
};
use async_trait::async_trait;
use reqwest::Client;

/// Stock-photo search client for the Pexels API.
#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    config: PexelsConfig,
}

impl ImageClient {
    pub fn new(client: Client, config: PexelsConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }

    pub async fn search(&self, query: &str) -> Result<Option<String>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| DeckError::ConfigError("Pexels API key is required".into()))?;

        log::debug!("Searching photos for '{}'", query);

        let response = self
            .client
            .get(self.endpoint())
            .header(reqwest::header::AUTHORIZATION, api_key)
            .query(&[("query", query), ("per_page", "1")])
            .send()
            .await
            .map_err(|e| DeckError::RequestError(format!("Photo search request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Photo search for '{}' returned {}", query, status);
            return Ok(None);
        }

        let body: PhotoSearchResponse = response
            .json()
            .await
            .map_err(|e| DeckError::ResponseError(e.to_string()))?;

        let url = body.best_url();
        if url.is_none() {
            log::debug!("No photo found for '{}'", query);
        }
        Ok(url)
    }
}

#[async_trait]
impl ImageSearch for ImageClient {
    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    async fn find_image(&self, query: &str) -> Result<Option<String>> {
        self.search(query).await
    }
}

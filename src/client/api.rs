use crate::{
    error::{DeckError, Result},
    models::{Deck, GenerateRequest, GenerateResponse},
};
use async_trait::async_trait;
use reqwest::Client;

/// The generate endpoint as seen from the presentation client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeckApi: Send + Sync {
    async fn generate(&self, brief: &str) -> Result<Deck>;
}

pub struct HttpDeckApi {
    client: Client,
    base_url: String,
}

impl HttpDeckApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl DeckApi for HttpDeckApi {
    async fn generate(&self, brief: &str) -> Result<Deck> {
        let request = GenerateRequest {
            brief: Some(brief.to_string()),
        };

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeckError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DeckError::ResponseError(e.to_string()))?;
        Ok(body.deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        assert_eq!(
            HttpDeckApi::new("http://localhost:8080/").endpoint(),
            "http://localhost:8080/api/generate"
        );
    }
}

use crate::{
    config::OpenAiConfig,
    error::{DeckError, Result},
    models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ResponseFormat},
    prompt,
    upstream::traits::ContentGenerator,
};
use async_trait::async_trait;
use reqwest::Client;

/// Chat-completion client for OpenAI-compatible endpoints.
#[derive(Clone)]
pub struct TextClient {
    client: Client,
    config: OpenAiConfig,
}

impl TextClient {
    pub fn new(client: Client, config: OpenAiConfig) -> Self {
        Self { client, config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    pub async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| DeckError::ConfigError("OpenAI API key is required".into()))?;

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            messages,
            response_format: Some(ResponseFormat::json_object()),
        };

        log::info!("Invoking model: {}", self.config.model);
        log::debug!(
            "Chat completion request payload: {}",
            serde_json::to_string(&request).unwrap_or_default()
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                log::error!("Chat completion transport error: {:?}", e);
                DeckError::RequestError(format!("Chat completion request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Chat completion returned {}: {}", status, body);
            return Err(DeckError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| DeckError::ResponseError(e.to_string()))?;

        Ok(completion.into_text())
    }
}

#[async_trait]
impl ContentGenerator for TextClient {
    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    async fn draft_deck(&self, brief: &str) -> Result<String> {
        self.complete(prompt::deck_messages(brief)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = TextClient::new(
            Client::new(),
            OpenAiConfig::new().with_base_url("http://localhost:9000/v1/"),
        );
        assert_eq!(client.endpoint(), "http://localhost:9000/v1/chat/completions");
        assert!(!client.is_configured());
    }

    #[tokio::test]
    async fn test_missing_key_is_config_error() {
        let client = TextClient::new(Client::new(), OpenAiConfig::new());
        let err = client.draft_deck("brief").await.unwrap_err();
        assert!(matches!(err, DeckError::ConfigError(_)));
    }
}

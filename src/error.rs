use thiserror::Error;

/// Public message for precondition failures.
pub const MISSING_INPUT_MESSAGE: &str = "Missing brief or API keys";
/// Public message for every other failure of the generate endpoint.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate";

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("{}", MISSING_INPUT_MESSAGE)]
    MissingInput,
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Upstream error: {status} - {body}")]
    UpstreamError { status: u16, body: String },
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DeckError {
    /// Message safe to return to callers; upstream details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            DeckError::MissingInput => MISSING_INPUT_MESSAGE,
            _ => GENERATION_FAILED_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for DeckError {
    fn from(e: reqwest::Error) -> Self {
        DeckError::RequestError(e.to_string())
    }
}

impl From<serde_json::Error> for DeckError {
    fn from(e: serde_json::Error) -> Self {
        DeckError::SerializationError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;

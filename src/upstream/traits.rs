use crate::error::Result;
use async_trait::async_trait;

/// Drafts deck JSON from a brief.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Whether the credential needed to call the service is present.
    fn is_configured(&self) -> bool;

    /// Returns the raw completion text. Non-success statuses are errors.
    async fn draft_deck(&self, brief: &str) -> Result<String>;
}

/// Resolves an image keyword to a single photo URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageSearch: Send + Sync {
    fn is_configured(&self) -> bool;

    /// `Ok(None)` when the search has no usable result or the service
    /// answers with a non-success status.
    async fn find_image(&self, query: &str) -> Result<Option<String>>;
}

pub mod image_client;
pub mod text_client;
pub mod traits;

use crate::{config::Config, error::Result};
use reqwest::Client;
use std::sync::Arc;

pub use image_client::ImageClient;
pub use text_client::TextClient;
pub use traits::{ContentGenerator, ImageSearch};

/// Both upstream clients, sharing one connection pool.
#[derive(Clone)]
pub struct UpstreamClients {
    text_client: Arc<TextClient>,
    image_client: Arc<ImageClient>,
}

impl UpstreamClients {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("deckgen/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            text_client: Arc::new(TextClient::new(client.clone(), config.openai.clone())),
            image_client: Arc::new(ImageClient::new(client, config.pexels.clone())),
        })
    }

    pub fn text(&self) -> Arc<TextClient> {
        Arc::clone(&self.text_client)
    }

    pub fn image(&self) -> Arc<ImageClient> {
        Arc::clone(&self.image_client)
    }
}

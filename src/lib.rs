//! Deckgen turns a free-text brief into a reveal.js slide deck.
//!
//! The [`generator::DeckGenerator`] asks a chat-completion model for the
//! deck as JSON, coerces whatever comes back into a [`models::Deck`], and
//! resolves one stock photo per slide concurrently. The [`client`] module
//! holds the presentation side: sanitized markup, theme selection and the
//! slideshow lifecycle.

pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod logger;
pub mod models;
pub mod normalize;
pub mod prompt;
#[cfg(feature = "server")]
pub mod server;
pub mod upstream;

pub use config::{Config, OpenAiConfig, PexelsConfig};
pub use error::{DeckError, Result};
pub use generator::DeckGenerator;
pub use models::{Deck, Ratio, Slide, Theme};
pub use upstream::{ContentGenerator, ImageClient, ImageSearch, TextClient};

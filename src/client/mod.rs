//! The presentation client: submits briefs, renders decks to sanitized
//! reveal.js markup, selects theme stylesheets and owns the slideshow
//! lifecycle.

pub mod api;
pub mod document;
pub mod export;
pub mod render;
pub mod session;
pub mod slideshow;
pub mod theme;

pub use api::{DeckApi, HttpDeckApi};
pub use document::render_document;
pub use export::{DocumentPrint, PrintTarget};
pub use render::{render_sections, sanitize};
pub use session::{Notifier, PresentationSession, ALERT_MESSAGE};
pub use slideshow::{SlideshowController, SlideshowFactory, SlideshowHost, SlideshowOptions};
pub use theme::{stylesheet_href, ThemeSwitcher};

pub mod api;
pub mod chat;
pub mod deck;
pub mod photo;

pub use api::*;
pub use chat::*;
pub use deck::*;
pub use photo::*;

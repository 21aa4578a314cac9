//! Coercion of untrusted model output into a [`Deck`].
//!
//! The completion text is whatever the model produced. Nothing here fails:
//! unparsable text becomes an empty deck, and every field is kept only when
//! it has the expected JSON type.

use serde_json::{Map, Value};

use crate::models::{Deck, Ratio, Slide, Theme};

/// Parses completion text, degrading to an empty object on invalid JSON.
pub fn parse_completion(text: &str) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Model output is not valid JSON, using an empty deck: {}", e);
            Value::Object(Map::new())
        }
    }
}

/// Builds a deck from the parsed completion. Images are not resolved yet.
pub fn deck_from_value(value: &Value) -> Deck {
    let deck = value.get("deck");
    let field = |key: &str| deck.and_then(|d| d.get(key)).cloned().unwrap_or(Value::Null);

    let slides = match deck.and_then(|d| d.get("slides")) {
        Some(Value::Array(items)) => items.iter().map(slide_from_value).collect(),
        Some(_) => {
            log::warn!("Model output has non-array deck.slides, ignoring it");
            Vec::new()
        }
        None => Vec::new(),
    };

    Deck {
        theme: Theme::from(field("theme")),
        ratio: Ratio::from(field("ratio")),
        slides,
    }
}

pub fn deck_from_completion(text: &str) -> Deck {
    deck_from_value(&parse_completion(text))
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Non-object entries become empty slides so positions are preserved.
fn slide_from_value(value: &Value) -> Slide {
    let Some(object) = value.as_object() else {
        return Slide::default();
    };

    let bullets = object.get("bullets").and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    });

    Slide {
        title: string_field(object, "title"),
        subtitle: string_field(object, "subtitle"),
        bullets,
        image_query: string_field(object, "imageQuery"),
        notes: string_field(object, "notes"),
        image_url: None,
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Presentation theme. Unknown or mistyped values resolve to `Night`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Value")]
pub enum Theme {
    Black,
    White,
    League,
    Beige,
    #[default]
    Night,
    Serif,
    Simple,
    Solarized,
}

impl Theme {
    pub const ALL: [Theme; 8] = [
        Theme::Black,
        Theme::White,
        Theme::League,
        Theme::Beige,
        Theme::Night,
        Theme::Serif,
        Theme::Simple,
        Theme::Solarized,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Black => "black",
            Theme::White => "white",
            Theme::League => "league",
            Theme::Beige => "beige",
            Theme::Night => "night",
            Theme::Serif => "serif",
            Theme::Simple => "simple",
            Theme::Solarized => "solarized",
        }
    }

    /// Resolves any name, falling back to the default theme.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Theme::ALL
            .iter()
            .copied()
            .find(|theme| theme.as_str() == s)
            .ok_or(())
    }
}

impl From<Value> for Theme {
    fn from(value: Value) -> Self {
        value
            .as_str()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slide aspect ratio. Unknown or mistyped values resolve to `Wide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Value")]
pub enum Ratio {
    #[default]
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "4:3")]
    Standard,
}

impl Ratio {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ratio::Wide => "16:9",
            Ratio::Standard => "4:3",
        }
    }

    /// Slideshow canvas size in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Ratio::Wide => (1280, 720),
            Ratio::Standard => (1024, 768),
        }
    }
}

impl FromStr for Ratio {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "16:9" => Ok(Ratio::Wide),
            "4:3" => Ok(Ratio::Standard),
            _ => Err(()),
        }
    }
}

impl From<Value> for Ratio {
    fn from(value: Value) -> Self {
        value
            .as_str()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Slide {
    /// The image keyword, trimmed, when it is worth searching for.
    pub fn search_query(&self) -> Option<&str> {
        self.image_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub ratio: Ratio,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

//! Standalone HTML documents for decks rendered outside the browser shell.

use crate::{
    client::{
        render::render_sections,
        slideshow::SlideshowOptions,
        theme::{cdn_stylesheet_url, REVEAL_CDN},
    },
    error::Result,
    models::Deck,
};

pub fn render_document(deck: &Deck, title: &str) -> Result<String> {
    let options = serde_json::to_string(&SlideshowOptions::for_ratio(deck.ratio))?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<title>{title}</title>
<link rel="stylesheet" href="{cdn}/dist/reveal.css" />
<link rel="stylesheet" href="{theme}" />
</head>
<body>
<div class="reveal">
<div class="slides">
{sections}
</div>
</div>
<script src="{cdn}/dist/reveal.js"></script>
<script src="{cdn}/plugin/notes/notes.js"></script>
<script>
const options = {options};
options.plugins = [RevealNotes];
new Reveal(document.querySelector(".reveal"), options).initialize();
</script>
</body>
</html>
"#,
        title = html_escape::encode_text(title),
        cdn = REVEAL_CDN,
        theme = cdn_stylesheet_url(deck.theme),
        sections = render_sections(deck),
        options = options,
    ))
}

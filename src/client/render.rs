//! Slide markup for the reveal.js `.slides` container.

use crate::models::{Deck, Slide};

const IMAGE_STYLE: &str = "width:100%;border-radius:12px;margin-top:12px";

/// Neutralizes markup in model- or search-sourced text.
pub fn sanitize(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn render_slide(index: usize, slide: &Slide) -> String {
    let mut html = format!(r#"<section data-index="{}">"#, index);

    if let Some(title) = present(&slide.title) {
        html.push_str(&format!("<h2>{}</h2>", sanitize(title)));
    }
    if let Some(subtitle) = present(&slide.subtitle) {
        html.push_str(&format!(
            r#"<p style="opacity:.85">{}</p>"#,
            sanitize(subtitle)
        ));
    }
    if let Some(bullets) = slide.bullets.as_ref().filter(|b| !b.is_empty()) {
        html.push_str("<ul>");
        for bullet in bullets {
            html.push_str(&format!("<li>{}</li>", sanitize(bullet)));
        }
        html.push_str("</ul>");
    }
    if let Some(url) = present(&slide.image_url) {
        html.push_str(&format!(
            r#"<img src="{}" alt="" style="{}" />"#,
            html_escape::encode_double_quoted_attribute(url),
            IMAGE_STYLE
        ));
    }
    if let Some(notes) = present(&slide.notes) {
        html.push_str(&format!(r#"<aside class="notes">{}</aside>"#, sanitize(notes)));
    }

    html.push_str("</section>");
    html
}

/// One `<section>` per slide, in deck order, joined by newlines.
pub fn render_sections(deck: &Deck) -> String {
    deck.slides
        .iter()
        .enumerate()
        .map(|(index, slide)| render_slide(index, slide))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(title: &str) -> Slide {
        Slide {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_slide_markup() {
        let slide = Slide {
            title: Some("Market".into()),
            subtitle: Some("TAM".into()),
            bullets: Some(vec!["$4B".into(), "Growing 12%".into()]),
            image_url: Some("https://img/market.jpg".into()),
            ..Default::default()
        };
        assert_eq!(
            render_slide(2, &slide),
            concat!(
                r#"<section data-index="2"><h2>Market</h2><p style="opacity:.85">TAM</p>"#,
                "<ul><li>$4B</li><li>Growing 12%</li></ul>",
                r#"<img src="https://img/market.jpg" alt="" style="width:100%;border-radius:12px;margin-top:12px" />"#,
                "</section>"
            )
        );
    }

    #[test]
    fn test_script_is_neutralized() {
        let slide = Slide {
            title: Some("<script>alert(1)</script>".into()),
            bullets: Some(vec![r#"<img src=x onerror="steal()">"#.into()]),
            ..Default::default()
        };
        let html = render_slide(0, &slide);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img src=x"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_image_url_cannot_break_attribute() {
        let slide = Slide {
            image_url: Some(r#"https://img/a.jpg" onload="x()"#.into()),
            ..Default::default()
        };
        let html = render_slide(0, &slide);
        assert!(html.contains(r#"src="https://img/a.jpg&quot; onload=&quot;x()""#));
    }

    #[test]
    fn test_no_image_without_url() {
        let html = render_slide(0, &slide("Team"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_sections_follow_deck_order() {
        let deck = Deck {
            slides: vec![slide("one"), slide("two"), slide("three")],
            ..Default::default()
        };
        let html = render_sections(&deck);
        let lines: Vec<_> = html.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(r#"<section data-index="0"><h2>one</h2>"#));
        assert!(lines[2].starts_with(r#"<section data-index="2"><h2>three</h2>"#));
        assert_eq!(render_sections(&Deck::default()), "");
    }

    #[test]
    fn test_notes_rendered_as_aside() {
        let slide = Slide {
            notes: Some("Pause for <questions>".into()),
            ..Default::default()
        };
        assert!(render_slide(0, &slide)
            .contains(r#"<aside class="notes">Pause for &lt;questions&gt;</aside>"#));
    }
}

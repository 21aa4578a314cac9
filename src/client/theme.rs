use crate::models::Theme;

pub const REVEAL_CDN: &str = "https://cdn.jsdelivr.net/npm/reveal.js@5.1.0";

/// Local stylesheet reference for any theme name; unknown names map to `night`.
pub fn stylesheet_href(name: &str) -> String {
    format!("/reveal-theme-{}.css", Theme::from_name(name))
}

/// Stylesheet name from a `reveal-theme-{name}.css` resource, if it is one of ours.
pub fn theme_from_resource(resource: &str) -> Option<Theme> {
    resource
        .strip_prefix("reveal-theme-")?
        .strip_suffix(".css")?
        .parse()
        .ok()
}

pub fn cdn_stylesheet_url(theme: Theme) -> String {
    format!("{}/dist/theme/{}.css", REVEAL_CDN, theme)
}

/// Tracks the active stylesheet and reports when it has to be swapped.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSwitcher {
    href: String,
}

impl Default for ThemeSwitcher {
    fn default() -> Self {
        Self {
            href: stylesheet_href(Theme::default().as_str()),
        }
    }
}

impl ThemeSwitcher {
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns the new href when it differs from the active one.
    pub fn apply(&mut self, theme: Theme) -> Option<&str> {
        let href = stylesheet_href(theme.as_str());
        if href == self.href {
            return None;
        }
        self.href = href;
        Some(&self.href)
    }
}

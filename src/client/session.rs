use std::sync::Arc;

use crate::{
    client::{
        api::DeckApi,
        export::PrintTarget,
        render::render_sections,
        slideshow::{SlideshowFactory, SlideshowHost, SlideshowOptions},
        theme::ThemeSwitcher,
    },
    models::Deck,
};

pub const ALERT_MESSAGE: &str = "Generation failed. Check API keys and try again.";

/// User-visible alerts.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// UI state of the presentation client: the brief, the loading flag and
/// the current deck, plus everything derived from the deck.
pub struct PresentationSession {
    api: Arc<dyn DeckApi>,
    notifier: Arc<dyn Notifier>,
    printer: Arc<dyn PrintTarget>,
    slideshow: SlideshowHost,
    theme: ThemeSwitcher,
    brief: String,
    loading: bool,
    deck: Deck,
    markup: String,
}

impl PresentationSession {
    pub fn new(
        api: Arc<dyn DeckApi>,
        notifier: Arc<dyn Notifier>,
        printer: Arc<dyn PrintTarget>,
        slideshow: Box<dyn SlideshowFactory>,
    ) -> Self {
        let mut session = Self {
            api,
            notifier,
            printer,
            slideshow: SlideshowHost::new(slideshow),
            theme: ThemeSwitcher::default(),
            brief: String::new(),
            loading: false,
            deck: Deck::default(),
            markup: String::new(),
        };
        session.refresh();
        session
    }

    pub fn set_brief(&mut self, brief: impl Into<String>) {
        self.brief = brief.into();
    }

    pub fn brief(&self) -> &str {
        &self.brief
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn theme_href(&self) -> &str {
        self.theme.href()
    }

    /// Submits the brief. Returns whether a new deck was received.
    ///
    /// Blank briefs are ignored. Failures raise an alert and keep the
    /// current deck.
    pub async fn submit(&mut self) -> bool {
        if self.brief.trim().is_empty() {
            return false;
        }

        self.loading = true;
        let outcome = self.api.generate(&self.brief).await;
        self.loading = false;

        match outcome {
            Ok(deck) => {
                self.deck = deck;
                self.refresh();
                true
            }
            Err(e) => {
                log::warn!("Deck generation failed: {}", e);
                self.notifier.alert(ALERT_MESSAGE);
                false
            }
        }
    }

    pub fn export_pdf(&self) {
        self.printer.print();
    }

    fn refresh(&mut self) {
        if let Some(href) = self.theme.apply(self.deck.theme) {
            log::debug!("Switching theme stylesheet to {}", href);
        }
        self.markup = render_sections(&self.deck);
        self.slideshow
            .mount(&self.markup, &SlideshowOptions::for_ratio(self.deck.ratio));
    }
}

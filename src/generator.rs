use futures::future::join_all;
use std::sync::Arc;

use crate::{
    config::Config,
    error::{DeckError, Result},
    logger,
    models::{Deck, Slide},
    normalize,
    upstream::{ContentGenerator, ImageSearch, UpstreamClients},
};

/// Runs the brief → draft → normalize → enrich pipeline for one request.
#[derive(Clone)]
pub struct DeckGenerator {
    content: Arc<dyn ContentGenerator>,
    images: Arc<dyn ImageSearch>,
}

impl DeckGenerator {
    pub fn new(content: Arc<dyn ContentGenerator>, images: Arc<dyn ImageSearch>) -> Self {
        Self { content, images }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let upstream = UpstreamClients::new(config)?;
        Ok(Self::new(upstream.text(), upstream.image()))
    }

    pub fn is_configured(&self) -> bool {
        self.content.is_configured() && self.images.is_configured()
    }

    /// Blank briefs and missing credentials are rejected before any
    /// upstream call is made.
    pub async fn generate(&self, brief: Option<&str>) -> Result<Deck> {
        let brief = brief.map(str::trim).unwrap_or_default();
        if brief.is_empty() || !self.is_configured() {
            log::warn!("Rejecting generate request: missing brief or credentials");
            return Err(DeckError::MissingInput);
        }

        let completion = {
            let _timer = logger::timer("Deck draft");
            self.content.draft_deck(brief).await?
        };

        let draft = normalize::deck_from_completion(&completion);
        log::info!(
            "Model drafted {} slides (theme: {}, ratio: {})",
            draft.slides.len(),
            draft.theme,
            draft.ratio
        );

        let slides = {
            let _timer = logger::timer("Image enrichment");
            self.enrich(draft.slides).await
        };

        Ok(Deck {
            theme: draft.theme,
            ratio: draft.ratio,
            slides,
        })
    }

    /// Resolves every slide's image concurrently, keeping slide order.
    pub async fn enrich(&self, slides: Vec<Slide>) -> Vec<Slide> {
        join_all(slides.into_iter().map(|slide| self.resolve_image(slide))).await
    }

    async fn resolve_image(&self, slide: Slide) -> Slide {
        let image_url = match slide.search_query() {
            Some(query) => match self.images.find_image(query).await {
                Ok(url) => url,
                Err(e) => {
                    log::warn!("Image lookup for '{}' failed: {}", query, e);
                    None
                }
            },
            None => None,
        };
        slide.with_image_url(image_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ratio, Theme};
    use crate::upstream::traits::{MockContentGenerator, MockImageSearch};
    use mockall::predicate::eq;

    fn configured_images() -> MockImageSearch {
        let mut images = MockImageSearch::new();
        images.expect_is_configured().return_const(true);
        images
    }

    fn configured_content(completion: &'static str) -> MockContentGenerator {
        let mut content = MockContentGenerator::new();
        content.expect_is_configured().return_const(true);
        content
            .expect_draft_deck()
            .times(1)
            .returning(move |_| Ok(completion.to_string()));
        content
    }

    fn generator(content: MockContentGenerator, images: MockImageSearch) -> DeckGenerator {
        DeckGenerator::new(Arc::new(content), Arc::new(images))
    }

    #[tokio::test]
    async fn test_blank_brief_makes_no_upstream_call() {
        for brief in [None, Some(""), Some("   \n\t")] {
            let mut content = MockContentGenerator::new();
            content.expect_is_configured().return_const(true);
            content.expect_draft_deck().never();
            let mut images = configured_images();
            images.expect_find_image().never();

            let err = generator(content, images).generate(brief).await.unwrap_err();
            assert!(matches!(err, DeckError::MissingInput));
        }
    }

    #[tokio::test]
    async fn test_missing_credentials_rejected() {
        let mut content = MockContentGenerator::new();
        content.expect_is_configured().return_const(true);
        content.expect_draft_deck().never();
        let mut images = MockImageSearch::new();
        images.expect_is_configured().return_const(false);

        let err = generator(content, images)
            .generate(Some("a real brief"))
            .await
            .unwrap_err();
        assert!(matches!(err, DeckError::MissingInput));
    }

    #[tokio::test]
    async fn test_brief_is_trimmed_before_drafting() {
        let mut content = MockContentGenerator::new();
        content.expect_is_configured().return_const(true);
        content
            .expect_draft_deck()
            .with(eq("pitch deck"))
            .times(1)
            .returning(|_| Ok("{}".to_string()));

        let deck = generator(content, configured_images())
            .generate(Some("  pitch deck \n"))
            .await
            .unwrap();
        assert!(deck.slides.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let mut content = MockContentGenerator::new();
        content.expect_is_configured().return_const(true);
        content.expect_draft_deck().returning(|_| {
            Err(DeckError::UpstreamError {
                status: 429,
                body: "rate limited".into(),
            })
        });

        let err = generator(content, configured_images())
            .generate(Some("brief"))
            .await
            .unwrap_err();
        assert_eq!(err.public_message(), "Failed to generate");
    }

    #[tokio::test]
    async fn test_invalid_json_degrades_to_empty_deck() {
        let content = configured_content("not json at all");
        let deck = generator(content, configured_images())
            .generate(Some("brief"))
            .await
            .unwrap();
        assert_eq!(deck, Deck::default());
        assert_eq!(deck.theme, Theme::Night);
        assert_eq!(deck.ratio, Ratio::Wide);
    }

    #[tokio::test]
    async fn test_images_resolved_per_slide_in_order() {
        let content = configured_content(
            r#"{"deck":{"theme":"white","ratio":"4:3","slides":[
                {"title":"A","imageQuery":"alpha"},
                {"title":"B","imageQuery":"   "},
                {"title":"C"},
                {"title":"D","imageQuery":"broken"},
                {"title":"E","imageQuery":"nothing"}
            ]}}"#,
        );
        let mut images = configured_images();
        images
            .expect_find_image()
            .with(eq("alpha"))
            .returning(|_| Ok(Some("https://img/alpha.jpg".to_string())));
        images
            .expect_find_image()
            .with(eq("broken"))
            .returning(|_| Err(DeckError::RequestError("connection reset".into())));
        images
            .expect_find_image()
            .with(eq("nothing"))
            .returning(|_| Ok(None));

        let deck = generator(content, images)
            .generate(Some("brief"))
            .await
            .unwrap();

        assert_eq!(deck.theme, Theme::White);
        assert_eq!(deck.ratio, Ratio::Standard);
        let titles: Vec<_> = deck.slides.iter().map(|s| s.title.as_deref()).collect();
        assert_eq!(titles, vec![Some("A"), Some("B"), Some("C"), Some("D"), Some("E")]);
        let urls: Vec<_> = deck.slides.iter().map(|s| s.image_url.as_deref()).collect();
        assert_eq!(urls, vec![Some("https://img/alpha.jpg"), None, None, None, None]);
    }

    #[tokio::test]
    async fn test_coffee_app_scenario() {
        let content = configured_content(
            r#"{"deck":{"theme":"beige","slides":[
                {"title":"Problem","bullets":["Lines are long","Orders get lost"],"imageQuery":"coffee queue"},
                {"title":"Solution","bullets":["Order ahead","Skip the line"],"imageQuery":"phone coffee order"},
                {"title":"Ask","bullets":["Raise $1M","18 months runway"],"imageQuery":"coffee beans"}
            ]}}"#,
        );
        let mut images = configured_images();
        images
            .expect_find_image()
            .times(3)
            .returning(|query| Ok(Some(format!("https://images.example/{}/landscape.jpg", query.replace(' ', "-")))));

        let deck = generator(content, images)
            .generate(Some("3-slide demo for a coffee app"))
            .await
            .unwrap();

        assert_eq!(deck.theme, Theme::Beige);
        assert_eq!(deck.ratio, Ratio::Wide);
        assert_eq!(deck.slides.len(), 3);
        assert_eq!(deck.slides[0].title.as_deref(), Some("Problem"));
        assert_eq!(deck.slides[2].title.as_deref(), Some("Ask"));
        assert_eq!(
            deck.slides[1].image_url.as_deref(),
            Some("https://images.example/phone-coffee-order/landscape.jpg")
        );
        assert!(deck.slides.iter().all(|s| s.image_url.is_some()));
    }
}

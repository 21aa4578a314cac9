use serde::{Deserialize, Serialize};

use crate::models::Ratio;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    None,
    Fade,
    Slide,
}

/// reveal.js initialization options, serialized as its config object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideshowOptions {
    pub hash: bool,
    pub slide_number: bool,
    pub width: u32,
    pub height: u32,
    pub margin: f32,
    pub transition: Transition,
}

impl SlideshowOptions {
    pub fn for_ratio(ratio: Ratio) -> Self {
        let (width, height) = ratio.dimensions();
        Self {
            hash: true,
            slide_number: true,
            width,
            height,
            margin: 0.06,
            transition: Transition::Fade,
        }
    }
}

/// A live slideshow bound to rendered markup.
pub trait SlideshowController: Send {
    fn destroy(&mut self);
}

/// Builds controllers; implemented by whatever hosts the renderer.
pub trait SlideshowFactory: Send + Sync {
    fn create(&self, markup: &str, options: &SlideshowOptions) -> Box<dyn SlideshowController>;
}

/// Keeps at most one controller alive, rebuilding it on every mount.
pub struct SlideshowHost {
    factory: Box<dyn SlideshowFactory>,
    active: Option<Box<dyn SlideshowController>>,
}

impl SlideshowHost {
    pub fn new(factory: Box<dyn SlideshowFactory>) -> Self {
        Self {
            factory,
            active: None,
        }
    }

    pub fn mount(&mut self, markup: &str, options: &SlideshowOptions) {
        self.teardown();
        self.active = Some(self.factory.create(markup, options));
    }

    pub fn teardown(&mut self) {
        if let Some(mut controller) = self.active.take() {
            controller.destroy();
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

impl Drop for SlideshowHost {
    fn drop(&mut self) {
        self.teardown();
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingFactory;
    use super::*;

    #[test]
    fn test_options_per_ratio() {
        let wide = SlideshowOptions::for_ratio(Ratio::Wide);
        assert_eq!((wide.width, wide.height), (1280, 720));
        let standard = SlideshowOptions::for_ratio(Ratio::Standard);
        assert_eq!((standard.width, standard.height), (1024, 768));

        let json = serde_json::to_value(&wide).unwrap();
        assert_eq!(json["slideNumber"], true);
        assert_eq!(json["hash"], true);
        assert_eq!(json["transition"], "fade");
    }

    #[test]
    fn test_remount_destroys_previous_controller() {
        let factory = RecordingFactory::default();
        let mut host = SlideshowHost::new(Box::new(factory.clone()));

        host.mount("", &SlideshowOptions::for_ratio(Ratio::Wide));
        host.mount("<section></section>", &SlideshowOptions::for_ratio(Ratio::Standard));
        assert!(host.is_active());
        drop(host);

        assert_eq!(
            factory.events(),
            vec![
                "create:0:1280x720",
                "destroy:0",
                "create:1:1024x768",
                "destroy:1",
            ]
        );
    }
}

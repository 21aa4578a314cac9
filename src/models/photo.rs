use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct PhotoSearchResponse {
    #[serde(default)]
    pub photos: Option<Vec<Photo>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub src: Option<PhotoSource>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PhotoSource {
    #[serde(default)]
    pub landscape: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

impl PhotoSearchResponse {
    /// Landscape variant of the first photo, then the large one.
    pub fn best_url(self) -> Option<String> {
        let src = self.photos?.into_iter().next()?.src?;
        src.landscape
            .filter(|url| !url.is_empty())
            .or(src.large.filter(|url| !url.is_empty()))
    }
}

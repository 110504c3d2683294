use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Illustration a challenge can be decorated with
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ImageAsset {
    /// Asset path relative to the site root
    pub src: String,

    /// Accessible description (also the asset's key)
    pub alt: String,
}

impl ImageAsset {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

const DEFAULT_IMAGES: &[(&str, &str)] = &[
    ("images/burger.png", "A burger"),
    ("images/camping.png", "A tent in the woods at night"),
    ("images/coding.png", "A laptop with code on the screen"),
    ("images/healthy-food.png", "A bowl of healthy food"),
    ("images/meditate.png", "A person meditating"),
    ("images/running.png", "A person running"),
];

/// Fixed set of images offered by the creation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCatalog {
    images: Vec<ImageAsset>,
}

impl ImageCatalog {
    pub fn new(images: Vec<ImageAsset>) -> Self {
        Self { images }
    }

    pub fn images(&self) -> &[ImageAsset] {
        &self.images
    }

    /// Look up an asset by its alt text
    pub fn find(&self, alt: &str) -> Option<&ImageAsset> {
        self.images.iter().find(|image| image.alt == alt)
    }

    pub fn contains(&self, image: &ImageAsset) -> bool {
        self.images.contains(image)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl Default for ImageCatalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_IMAGES
                .iter()
                .map(|(src, alt)| ImageAsset::new(*src, *alt))
                .collect(),
        )
    }
}

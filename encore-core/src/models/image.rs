//! Image variant selection.
//!
//! Catalog objects carry a list of image variants ordered largest first,
//! normally three of them (640, 300 and 64 pixels wide).

use serde::{Deserialize, Serialize};

/// One image variant of a catalog object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageVariant {
    /// Image URL.
    pub url: String,
    /// Width in pixels, when known.
    #[serde(default)]
    pub width: Option<u32>,
    /// Height in pixels, when known.
    #[serde(default)]
    pub height: Option<u32>,
}

/// Which variant to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    /// The largest variant.
    #[default]
    Large,
    /// The middle variant.
    Medium,
    /// The smallest variant.
    Small,
}

impl ImageSize {
    fn index(self) -> usize {
        match self {
            Self::Large => 0,
            Self::Medium => 1,
            Self::Small => 2,
        }
    }

    /// Picks the URL of this size from `images`.
    ///
    /// No images gives `None`. A list that is not the usual three variants
    /// falls back to its first entry.
    pub fn select(self, images: &[ImageVariant]) -> Option<String> {
        let chosen = if images.len() == 3 {
            images.get(self.index())
        } else {
            images.first()
        };
        chosen.map(|image| image.url.clone())
    }
}

// Static asset types: RGBA sprites for the progress canvas and audio clip
// identifiers resolved by the audio backend

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Identifier for a short audio cue
///
/// Opaque to the visualizer; the audio backend resolves it (the bundled
/// backend treats it as a file path).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClipId(pub String);

impl ClipId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A sprite with RGBA channels used on the progress canvas
#[derive(Debug, Clone)]
pub struct SpriteAsset {
    image: RgbaImage,
}

impl SpriteAsset {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Error types for asset loading
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Sprite not found: {0}")]
    SpriteNotFound(String),

    #[error("Failed to decode sprite {0}: {1}")]
    SpriteDecodeFailed(String, String),

    #[error("Audio clip not found: {0}")]
    ClipNotFound(String),

    #[error("Feedback clip list is empty")]
    NoFeedbackClips,
}

pub type AssetResult<T> = Result<T, AssetError>;

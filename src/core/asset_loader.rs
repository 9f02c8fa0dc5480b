// Eager loading of the static assets the Act stage needs
//
// Everything is resolved at construction so a missing sprite or clip fails
// fast at startup instead of surfacing mid-session. Paths come from the
// caller; nothing is hardcoded.

use crate::models::asset::{AssetError, AssetResult, ClipId, SpriteAsset};
use std::path::{Path, PathBuf};

/// Filesystem locations of the bundled assets
#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub primary_sprite: PathBuf,
    pub secondary_sprite: PathBuf,
    pub feedback_clips: Vec<PathBuf>,
    pub completion_clip: PathBuf,
    pub background_track: Option<PathBuf>,
}

/// All static assets, fully loaded
#[derive(Debug, Clone)]
pub struct AssetLibrary {
    primary: SpriteAsset,
    secondary: SpriteAsset,
    feedback_clips: Vec<ClipId>,
    completion_clip: ClipId,
    background_track: Option<ClipId>,
}

impl AssetLibrary {
    /// Load every asset from disk
    pub fn load(paths: &AssetPaths) -> AssetResult<Self> {
        if paths.feedback_clips.is_empty() {
            return Err(AssetError::NoFeedbackClips);
        }

        let primary = load_sprite(&paths.primary_sprite)?;
        let secondary = load_sprite(&paths.secondary_sprite)?;

        let feedback_clips = paths
            .feedback_clips
            .iter()
            .map(|path| clip_id(path))
            .collect::<AssetResult<Vec<_>>>()?;
        let completion_clip = clip_id(&paths.completion_clip)?;
        let background_track = match &paths.background_track {
            Some(path) => Some(clip_id(path)?),
            None => None,
        };

        log::info!(
            "Loaded assets: 2 sprites, {} feedback clips",
            feedback_clips.len()
        );

        Ok(Self {
            primary,
            secondary,
            feedback_clips,
            completion_clip,
            background_track,
        })
    }

    /// Assemble a library from already-loaded parts (used by tests and
    /// embedders that bundle assets themselves)
    pub fn from_parts(
        primary: SpriteAsset,
        secondary: SpriteAsset,
        feedback_clips: Vec<ClipId>,
        completion_clip: ClipId,
        background_track: Option<ClipId>,
    ) -> AssetResult<Self> {
        if feedback_clips.is_empty() {
            return Err(AssetError::NoFeedbackClips);
        }

        Ok(Self {
            primary,
            secondary,
            feedback_clips,
            completion_clip,
            background_track,
        })
    }

    /// Sprite for a repetition count: primary below the threshold,
    /// secondary from the threshold up
    pub fn sprite_for(&self, repetition_count: u32, secondary_threshold: u32) -> &SpriteAsset {
        if repetition_count < secondary_threshold {
            &self.primary
        } else {
            &self.secondary
        }
    }

    pub fn feedback_clips(&self) -> &[ClipId] {
        &self.feedback_clips
    }

    pub fn completion_clip(&self) -> &ClipId {
        &self.completion_clip
    }

    pub fn background_track(&self) -> Option<&ClipId> {
        self.background_track.as_ref()
    }

    /// Every short cue the audio backend should preload
    pub fn all_clips(&self) -> Vec<ClipId> {
        let mut clips = self.feedback_clips.clone();
        clips.push(self.completion_clip.clone());
        clips
    }
}

fn load_sprite(path: &Path) -> AssetResult<SpriteAsset> {
    if !path.exists() {
        return Err(AssetError::SpriteNotFound(path.display().to_string()));
    }

    let image = image::open(path)
        .map_err(|e| AssetError::SpriteDecodeFailed(path.display().to_string(), e.to_string()))?;
    Ok(SpriteAsset::new(image.to_rgba8()))
}

fn clip_id(path: &Path) -> AssetResult<ClipId> {
    if !path.exists() {
        return Err(AssetError::ClipNotFound(path.display().to_string()));
    }
    Ok(ClipId::new(path.display().to_string()))
}

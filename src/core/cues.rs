// Round-robin cursor over the motivational feedback clips

use crate::models::asset::{AssetError, AssetResult, ClipId};

/// Ordered feedback clips cycled on each repetition, plus the distinct
/// completion cue played when a round finishes
#[derive(Debug, Clone)]
pub struct FeedbackCues {
    clips: Vec<ClipId>,
    cursor: usize,
    completion: ClipId,
}

impl FeedbackCues {
    pub fn new(clips: Vec<ClipId>, completion: ClipId) -> AssetResult<Self> {
        if clips.is_empty() {
            return Err(AssetError::NoFeedbackClips);
        }

        Ok(Self {
            clips,
            cursor: 0,
            completion,
        })
    }

    /// Next clip in the cycle; the cursor always advances, whether or not
    /// the dispatch is later dropped by a busy backend
    pub fn next_repetition_clip(&mut self) -> ClipId {
        let clip = self.clips[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.clips.len();
        clip
    }

    pub fn completion_clip(&self) -> &ClipId {
        &self.completion
    }

    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }
}

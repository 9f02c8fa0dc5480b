// Collaborator ports for the Act stage
//
// The visualizer never constructs or owns its audio and display backends;
// it talks to them through these traits so tests can substitute fakes.

pub mod audio;
pub mod display;

use crate::models::asset::ClipId;
use crate::models::frame::VideoFrame;

/// Error types for audio playback
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("No audio output device available")]
    NoOutputDevice,

    #[error("Unsupported output sample format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to decode clip {0}: {1}")]
    DecodeFailed(String, String),

    #[error("Audio stream failed: {0}")]
    StreamFailed(String),

    #[error("Clip not preloaded: {0}")]
    ClipNotLoaded(String),
}

pub type AudioResult<T> = Result<T, AudioError>;

/// Error types for display presentation
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("Failed to encode frame: {0}")]
    EncodeFailed(String),

    #[error("Failed to write frame: {0}")]
    WriteFailed(String),
}

pub type DisplayResult<T> = Result<T, DisplayError>;

/// Audio output port
///
/// Clip dispatch is fire-and-forget with an at-most-one-concurrent-clip
/// policy: `play` returns false when a clip is already in flight and the
/// request was dropped. No queueing, no retry.
pub trait AudioSink {
    /// Whether the backend is ready for a new clip
    fn is_idle(&self) -> bool;

    /// Request playback; returns false when the request was dropped
    fn play(&mut self, clip: &ClipId) -> bool;

    /// Start the looping background track, once at initialization
    fn start_background(&mut self, track: &ClipId) -> AudioResult<()>;
}

/// Display output port: one call per frame per titled surface
pub trait DisplaySink {
    fn present(&mut self, window_title: &str, frame: &VideoFrame) -> DisplayResult<()>;
}

/// Audio sink that discards every request, for headless runs
#[derive(Debug, Default)]
pub struct NullAudioSink;

impl AudioSink for NullAudioSink {
    fn is_idle(&self) -> bool {
        true
    }

    fn play(&mut self, _clip: &ClipId) -> bool {
        true
    }

    fn start_background(&mut self, _track: &ClipId) -> AudioResult<()> {
        Ok(())
    }
}

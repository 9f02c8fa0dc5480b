// Act stage of the exercise-coaching toy: given a classified exercise state
// and a pose-landmark frame from the external Sense/Think stages, renders the
// skeleton overlay and the gamified progress canvas, and dispatches short
// motivational audio cues.

pub mod core;
pub mod models;
pub mod platform;

pub use crate::core::asset_loader::{AssetLibrary, AssetPaths};
pub use crate::core::config::{ActConfig, CaptionMode, ConfigError};
pub use crate::core::progress::ProgressState;
pub use crate::core::session::{CoachSession, SessionSummary};
pub use crate::core::visualizer::{
    ProgressVisualizer, VisualizerError, FEEDBACK_WINDOW_TITLE, PROGRESS_WINDOW_TITLE,
};
pub use crate::models::asset::{AssetError, ClipId, SpriteAsset};
pub use crate::models::decision::Decision;
pub use crate::models::frame::{Color, VideoFrame};
pub use crate::models::pose::{BodyLandmark, Keypoint, LandmarkFrame, POSE_CONNECTIONS};
pub use crate::platform::{
    AudioError, AudioSink, DisplayError, DisplaySink, NullAudioSink,
};
pub use crate::platform::audio::{build_clip_player, BlockingClipPlayer, CpalClipPlayer};
pub use crate::platform::display::FrameDumpDisplay;

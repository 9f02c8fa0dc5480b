// ProgressVisualizer: the Act stage entry point
//
// Consumes classifier decisions and pose-landmark frames, keeps the
// repetition/round counters, and drives the audio and display ports. It is
// the only writer of ProgressState.

use crate::core::asset_loader::AssetLibrary;
use crate::core::canvas;
use crate::core::config::ActConfig;
use crate::core::cues::FeedbackCues;
use crate::core::progress::ProgressState;
use crate::core::skeleton;
use crate::models::asset::AssetError;
use crate::models::decision::Decision;
use crate::models::frame::VideoFrame;
use crate::models::pose::LandmarkFrame;
use crate::platform::{AudioError, AudioSink, DisplayResult, DisplaySink};

pub const FEEDBACK_WINDOW_TITLE: &str = "Sport Coaching Program";
pub const PROGRESS_WINDOW_TITLE: &str = "Flex and bend your left elbow!";

#[derive(Debug, thiserror::Error)]
pub enum VisualizerError {
    #[error(transparent)]
    Config(#[from] crate::core::config::ConfigError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Audio(#[from] AudioError),
}

pub struct ProgressVisualizer {
    config: ActConfig,
    assets: AssetLibrary,
    progress: ProgressState,
    cues: FeedbackCues,
    audio: Box<dyn AudioSink>,
    display: Box<dyn DisplaySink>,
}

impl ProgressVisualizer {
    /// Build the visualizer around injected audio/display ports
    ///
    /// Validates the configuration, sets up the clip cycle, and starts the
    /// looping background track if the asset library carries one.
    pub fn new(
        config: ActConfig,
        assets: AssetLibrary,
        audio: Box<dyn AudioSink>,
        display: Box<dyn DisplaySink>,
    ) -> Result<Self, VisualizerError> {
        config.validate()?;

        let cues = FeedbackCues::new(
            assets.feedback_clips().to_vec(),
            assets.completion_clip().clone(),
        )?;

        let mut audio = audio;
        if let Some(track) = assets.background_track() {
            audio.start_background(track)?;
        }

        log::info!(
            "Act stage ready: threshold {}, {} feedback clips",
            config.explosion_threshold,
            cues.clip_count()
        );

        Ok(Self {
            progress: ProgressState::new(config.explosion_threshold),
            config,
            assets,
            cues,
            audio,
            display,
        })
    }

    /// Record one successful repetition reported by the classifier
    ///
    /// Advances the counters and the clip cycle, then requests playback of
    /// the next motivational clip. The request is fire-and-forget: a busy
    /// backend drops it and the cursor still advances.
    pub fn register_repetition(&mut self) {
        self.progress.register_repetition();

        let clip = self.cues.next_repetition_clip();
        log::info!(
            "Repetition {} (total {})",
            self.progress.repetition_count(),
            self.progress.total_repetitions()
        );

        if !self.audio.play(&clip) {
            log::debug!("Audio busy, dropped clip {}", clip.as_str());
        }
    }

    /// Wrap the counter after a completed round; called before each render
    ///
    /// Returns true when an explosion happened. Dispatches the completion
    /// cue exactly once per boundary crossing.
    pub fn maybe_reset(&mut self) -> bool {
        if !self.progress.needs_reset() {
            return false;
        }

        self.progress.reset();
        log::info!("Round {} complete, progress reset", self.progress.round_count());

        let completion = self.cues.completion_clip().clone();
        if !self.audio.play(&completion) {
            log::debug!("Audio busy, dropped completion clip");
        }
        true
    }

    /// Render the progress canvas for the current counters
    ///
    /// Pure with respect to visualizer state; repeated calls without an
    /// intervening event produce pixel-identical output.
    pub fn render_progress_canvas(&self) -> VideoFrame {
        let sprite = self.assets.sprite_for(
            self.progress.repetition_count(),
            self.config.secondary_sprite_threshold,
        );
        canvas::render_progress(
            &self.config,
            sprite,
            self.progress.repetition_count(),
            self.progress.round_count(),
        )
    }

    /// Apply the wrap rule, render the progress canvas, and present it
    pub fn show_progress(&mut self) -> DisplayResult<()> {
        self.maybe_reset();
        let frame = self.render_progress_canvas();
        self.display.present(PROGRESS_WINDOW_TITLE, &frame)
    }

    /// Draw the skeleton overlay and caption onto `frame` and present it
    pub fn render_feedback_overlay(
        &mut self,
        decision: Decision,
        frame: &mut VideoFrame,
        landmarks: &LandmarkFrame,
        angle_value: f32,
    ) -> DisplayResult<()> {
        skeleton::draw_overlay(&self.config, frame, landmarks, decision, angle_value);
        self.display.present(FEEDBACK_WINDOW_TITLE, frame)
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    pub fn config(&self) -> &ActConfig {
        &self.config
    }
}

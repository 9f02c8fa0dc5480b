// Act stage configuration
//
// The values the two source revisions of this component disagreed on
// (explosion threshold, canvas color, scale coefficients, caption behavior)
// are all tunable here instead of hardcoded.

use crate::models::frame::Color;
use serde::{Deserialize, Serialize};

/// How the feedback overlay caption is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptionMode {
    /// A constant instructional caption
    Fixed,
    /// Caption branches on the classifier decision and shows the angle
    ByDecision,
}

/// Error type for configuration validation
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for the Act stage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActConfig {
    /// Repetitions per round; the progress visual resets after this many
    pub explosion_threshold: u32,
    /// Repetition count at which the secondary sprite replaces the primary
    pub secondary_sprite_threshold: u32,
    /// Progress canvas width in pixels
    pub canvas_width: u32,
    /// Progress canvas height in pixels
    pub canvas_height: u32,
    /// Flat background color of the progress canvas
    pub canvas_background: Color,
    /// Sprite scale at repetition count 0
    pub scale_base: f32,
    /// Sprite scale increase per repetition
    pub scale_slope: f32,
    /// Caption behavior of the feedback overlay
    pub caption_mode: CaptionMode,
    /// Keypoints below this visibility are not drawn
    pub visibility_threshold: f32,
    /// Wait for each clip to finish instead of fire-and-forget
    pub blocking_audio: bool,
}

impl Default for ActConfig {
    fn default() -> Self {
        Self {
            explosion_threshold: 6,
            secondary_sprite_threshold: 4,
            canvas_width: 500,
            canvas_height: 500,
            canvas_background: Color::BLACK,
            scale_base: 0.03,
            scale_slope: 0.05,
            caption_mode: CaptionMode::Fixed,
            visibility_threshold: 0.5,
            blocking_audio: false,
        }
    }
}

impl ActConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.explosion_threshold == 0 {
            return Err(ConfigError::Invalid(
                "explosion threshold must be at least 1".to_string(),
            ));
        }

        if self.secondary_sprite_threshold >= self.explosion_threshold {
            return Err(ConfigError::Invalid(format!(
                "secondary sprite threshold {} must be below explosion threshold {}",
                self.secondary_sprite_threshold, self.explosion_threshold
            )));
        }

        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas dimensions must be non-zero, got {}x{}",
                self.canvas_width, self.canvas_height
            )));
        }

        if self.scale_base < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "scale base must not be negative, got {}",
                self.scale_base
            )));
        }

        if self.scale_slope <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "scale slope must be positive, got {}",
                self.scale_slope
            )));
        }

        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(ConfigError::Invalid(format!(
                "visibility threshold must be between 0.0 and 1.0, got {}",
                self.visibility_threshold
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ActConfig::default();
        assert_eq!(config.explosion_threshold, 6);
        assert_eq!(config.secondary_sprite_threshold, 4);
        assert_eq!(config.canvas_width, 500);
        assert_eq!(config.canvas_height, 500);
        assert_eq!(config.canvas_background, Color::BLACK);
        assert_eq!(config.scale_base, 0.03);
        assert_eq!(config.scale_slope, 0.05);
        assert_eq!(config.caption_mode, CaptionMode::Fixed);
        assert!(!config.blocking_audio);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ActConfig::default();

        config.explosion_threshold = 0;
        assert!(config.validate().is_err());
        config.explosion_threshold = 6;

        // Secondary threshold must stay below the explosion threshold
        config.secondary_sprite_threshold = 6;
        assert!(config.validate().is_err());
        config.secondary_sprite_threshold = 4;

        config.canvas_width = 0;
        assert!(config.validate().is_err());
        config.canvas_width = 500;

        config.scale_slope = 0.0;
        assert!(config.validate().is_err());
        config.scale_slope = 0.05;

        config.visibility_threshold = 1.5;
        assert!(config.validate().is_err());
        config.visibility_threshold = 0.5;

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = ActConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ActConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

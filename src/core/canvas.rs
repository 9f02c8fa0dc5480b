// Progress canvas compositor: scales the reward sprite with the repetition
// count and alpha-blends it onto a flat background with counter labels

use crate::core::config::ActConfig;
use crate::core::font;
use crate::models::asset::SpriteAsset;
use crate::models::frame::{Color, VideoFrame};
use image::imageops::{self, FilterType};

const LABEL_X: i64 = 20;
const REPS_LABEL_Y: i64 = 40;
const ROUNDS_LABEL_Y: i64 = 64;
const LABEL_SCALE: u32 = 2;
const LABEL_COLOR: Color = Color::YELLOW;

/// Scaled sprite dimensions for a repetition count
///
/// The scale is affine in the count; width and height are each clamped to
/// the canvas dimension independently, which can distort the aspect ratio
/// once one axis saturates. That distortion is intended behavior.
pub fn scaled_sprite_size(config: &ActConfig, sprite: &SpriteAsset, repetition_count: u32) -> (u32, u32) {
    let scale = config.scale_base + repetition_count as f32 * config.scale_slope;

    let width = (sprite.width() as f32 * scale) as u32;
    let height = (sprite.height() as f32 * scale) as u32;

    (
        width.clamp(1, config.canvas_width),
        height.clamp(1, config.canvas_height),
    )
}

/// Render the progress canvas
///
/// Pure function of the counters and config: the same inputs always produce
/// a pixel-identical canvas, and the sprite is never mutated.
pub fn render_progress(
    config: &ActConfig,
    sprite: &SpriteAsset,
    repetition_count: u32,
    round_count: u32,
) -> VideoFrame {
    let mut canvas = VideoFrame::filled(
        config.canvas_width,
        config.canvas_height,
        config.canvas_background,
    );

    let (new_width, new_height) = scaled_sprite_size(config, sprite, repetition_count);
    let resized = imageops::resize(sprite.image(), new_width, new_height, FilterType::Triangle);

    // Center placement
    let x_offset = (config.canvas_width - new_width) / 2;
    let y_offset = (config.canvas_height - new_height) / 2;

    for (sprite_x, sprite_y, pixel) in resized.enumerate_pixels() {
        let alpha = pixel[3] as f32 / 255.0;
        let x = x_offset + sprite_x;
        let y = y_offset + sprite_y;

        let (bg_r, bg_g, bg_b) = match canvas.get_pixel(x, y) {
            Some(background) => background,
            None => continue,
        };

        canvas.put_pixel(
            x as i64,
            y as i64,
            Color::new(
                (alpha * pixel[0] as f32 + (1.0 - alpha) * bg_r as f32) as u8,
                (alpha * pixel[1] as f32 + (1.0 - alpha) * bg_g as f32) as u8,
                (alpha * pixel[2] as f32 + (1.0 - alpha) * bg_b as f32) as u8,
            ),
        );
    }

    draw_label(
        &mut canvas,
        &format!("REPETITIONS: {}", repetition_count),
        REPS_LABEL_Y,
    );
    draw_label(&mut canvas, &format!("ROUNDS: {}", round_count), ROUNDS_LABEL_Y);

    canvas
}

fn draw_label(canvas: &mut VideoFrame, text: &str, y: i64) {
    font::draw_text(text, LABEL_X, y, LABEL_SCALE, |x, y| {
        canvas.put_pixel(x, y, LABEL_COLOR);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use crate::models::asset::SpriteAsset;

    fn opaque_sprite(width: u32, height: u32, color: [u8; 3]) -> SpriteAsset {
        SpriteAsset::new(RgbaImage::from_pixel(
            width,
            height,
            Rgba([color[0], color[1], color[2], 255]),
        ))
    }

    fn transparent_sprite(width: u32, height: u32) -> SpriteAsset {
        SpriteAsset::new(RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 0])))
    }

    #[test]
    fn test_canvas_dimensions_constant() {
        let config = ActConfig::default();
        let sprite = opaque_sprite(100, 100, [200, 50, 50]);

        for count in 0..6 {
            let canvas = render_progress(&config, &sprite, count, 0);
            assert_eq!(canvas.width, config.canvas_width);
            assert_eq!(canvas.height, config.canvas_height);
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let config = ActConfig::default();
        let sprite = opaque_sprite(80, 120, [10, 200, 30]);

        let first = render_progress(&config, &sprite, 3, 1);
        let second = render_progress(&config, &sprite, 3, 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scaled_width_clamped_to_canvas() {
        let config = ActConfig::default();
        // 20000 * 0.33 at count 6 would far exceed a 500px canvas
        let sprite = opaque_sprite(20000, 100, [1, 2, 3]);

        let (width, height) = scaled_sprite_size(&config, &sprite, 6);
        assert_eq!(width, config.canvas_width);
        assert!(height < config.canvas_height);

        // The rendered sprite really spans the full canvas width
        let canvas = render_progress(&config, &sprite, 6, 1);
        let mid_row = config.canvas_height / 2;
        assert_eq!(canvas.get_pixel(0, mid_row), Some((1, 2, 3)));
        assert_eq!(
            canvas.get_pixel(config.canvas_width - 1, mid_row),
            Some((1, 2, 3))
        );
    }

    #[test]
    fn test_scale_grows_with_count() {
        let config = ActConfig::default();
        let sprite = opaque_sprite(100, 100, [1, 2, 3]);

        let (w0, h0) = scaled_sprite_size(&config, &sprite, 0);
        let (w5, h5) = scaled_sprite_size(&config, &sprite, 5);
        assert!(w5 > w0);
        assert!(h5 > h0);
    }

    #[test]
    fn test_opaque_sprite_replaces_background_at_center() {
        let config = ActConfig::default();
        let sprite = opaque_sprite(100, 100, [200, 40, 40]);

        let canvas = render_progress(&config, &sprite, 5, 0);
        let center = canvas
            .get_pixel(config.canvas_width / 2, config.canvas_height / 2)
            .unwrap();
        // Triangle filtering of a flat sprite keeps the flat color
        assert_eq!(center, (200, 40, 40));
    }

    #[test]
    fn test_transparent_sprite_leaves_background() {
        let mut config = ActConfig::default();
        config.canvas_background = Color::new(7, 8, 9);
        let sprite = transparent_sprite(100, 100);

        let canvas = render_progress(&config, &sprite, 5, 0);
        let center = canvas
            .get_pixel(config.canvas_width / 2, config.canvas_height / 2)
            .unwrap();
        assert_eq!(center, (7, 8, 9));
    }

    #[test]
    fn test_pixels_outside_sprite_keep_background() {
        let mut config = ActConfig::default();
        config.canvas_background = Color::new(30, 30, 30);
        let sprite = opaque_sprite(10, 10, [255, 255, 255]);

        let canvas = render_progress(&config, &sprite, 0, 0);
        // Far corner is outside both the sprite box and the labels
        let corner = canvas
            .get_pixel(config.canvas_width - 1, config.canvas_height - 1)
            .unwrap();
        assert_eq!(corner, (30, 30, 30));
    }
}

// Feedback overlay: skeleton connection graph, joint markers, and caption
// drawn over the incoming camera frame

use crate::core::config::{ActConfig, CaptionMode};
use crate::core::font;
use crate::models::decision::Decision;
use crate::models::frame::{Color, VideoFrame};
use crate::models::pose::{LandmarkFrame, POSE_CONNECTIONS};

const CONNECTION_COLOR: Color = Color::YELLOW;
const JOINT_COLOR: Color = Color::GREEN;
const JOINT_RADIUS: i64 = 3;
const CAPTION_POSITION: (i64, i64) = (50, 50);
const CAPTION_SCALE: u32 = 2;
const CAPTION_COLOR: Color = Color::BLUE;

pub const FIXED_CAPTION: &str = "FLEX AND BEND YOUR LEFT ELBOW!";

/// Draw the skeleton and caption over `frame`
///
/// Landmarks below the configured visibility threshold are skipped, as is
/// any connection touching one. Coordinates are normalized [0, 1]; anything
/// mapping outside the frame is clipped pixel by pixel.
pub fn draw_overlay(
    config: &ActConfig,
    frame: &mut VideoFrame,
    landmarks: &LandmarkFrame,
    decision: Decision,
    angle_value: f32,
) {
    for (from, to) in POSE_CONNECTIONS {
        let (a, b) = match (landmarks.keypoints.get(from), landmarks.keypoints.get(to)) {
            (Some(a), Some(b)) => (a, b),
            _ => continue,
        };

        if !a.is_visible(config.visibility_threshold) || !b.is_visible(config.visibility_threshold) {
            continue;
        }

        draw_line(
            frame,
            to_pixel(a.x, frame.width),
            to_pixel(a.y, frame.height),
            to_pixel(b.x, frame.width),
            to_pixel(b.y, frame.height),
            CONNECTION_COLOR,
        );
    }

    for keypoint in &landmarks.keypoints {
        if !keypoint.is_visible(config.visibility_threshold) {
            continue;
        }
        draw_joint(
            frame,
            to_pixel(keypoint.x, frame.width),
            to_pixel(keypoint.y, frame.height),
        );
    }

    let caption = caption_text(config.caption_mode, decision, angle_value);
    let (x, y) = CAPTION_POSITION;
    font::draw_text(&caption, x, y, CAPTION_SCALE, |px, py| {
        frame.put_pixel(px, py, CAPTION_COLOR);
    });
}

/// Caption for the current frame, per the configured mode
pub fn caption_text(mode: CaptionMode, decision: Decision, angle_value: f32) -> String {
    match mode {
        CaptionMode::Fixed => FIXED_CAPTION.to_string(),
        CaptionMode::ByDecision => match decision {
            Decision::Flexion => {
                format!("YOU ARE FLEXING YOUR ELBOW! {:.1}", angle_value)
            }
            Decision::Extension => {
                format!("YOU ARE EXTENDING YOUR ELBOW! {:.1}", angle_value)
            }
            Decision::Unknown => String::new(),
        },
    }
}

fn to_pixel(normalized: f32, extent: u32) -> i64 {
    (normalized * extent as f32) as i64
}

/// Bresenham line with per-pixel clipping
fn draw_line(frame: &mut VideoFrame, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let step_x = if x0 < x1 { 1 } else { -1 };
    let step_y = if y0 < y1 { 1 } else { -1 };

    let mut error = dx + dy;
    let mut x = x0;
    let mut y = y0;

    loop {
        frame.put_pixel(x, y, color);
        if x == x1 && y == y1 {
            break;
        }

        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            x += step_x;
        }
        if doubled <= dx {
            error += dx;
            y += step_y;
        }
    }
}

fn draw_joint(frame: &mut VideoFrame, cx: i64, cy: i64) {
    for dy in -JOINT_RADIUS..=JOINT_RADIUS {
        for dx in -JOINT_RADIUS..=JOINT_RADIUS {
            if dx * dx + dy * dy <= JOINT_RADIUS * JOINT_RADIUS {
                frame.put_pixel(cx + dx, cy + dy, JOINT_COLOR);
            }
        }
    }
}

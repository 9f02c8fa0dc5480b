// Pixel buffer types for frames handed in by the capture pipeline and
// canvases produced by the progress renderer

use serde::{Deserialize, Serialize};

/// An RGBA color used for canvas backgrounds and draw calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const YELLOW: Color = Color { r: 255, g: 255, b: 0 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A video frame as an RGBA8 pixel buffer
///
/// Frames arrive from the external capture pipeline already decoded; the Act
/// stage only draws on top of them. `data` holds `width * height * 4` bytes
/// in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFrame {
    pub timestamp: i64,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl VideoFrame {
    /// Create a frame filled with a flat color
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * 4);
        for _ in 0..pixel_count {
            data.extend_from_slice(&[color.r, color.g, color.b, 255]);
        }

        Self {
            timestamp: 0,
            width,
            height,
            data,
        }
    }

    /// Set a single pixel, ignoring coordinates outside the frame
    pub fn put_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }

        let index = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.data[index] = color.r;
        self.data[index + 1] = color.g;
        self.data[index + 2] = color.b;
        self.data[index + 3] = 255;
    }

    /// Read back a pixel as (r, g, b), or None when out of bounds
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = ((y * self.width + x) * 4) as usize;
        Some((self.data[index], self.data[index + 1], self.data[index + 2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_frame_dimensions() {
        let frame = VideoFrame::filled(10, 8, Color::BLACK);
        assert_eq!(frame.width, 10);
        assert_eq!(frame.height, 8);
        assert_eq!(frame.data.len(), 10 * 8 * 4);
    }

    #[test]
    fn test_put_pixel_in_bounds() {
        let mut frame = VideoFrame::filled(4, 4, Color::BLACK);
        frame.put_pixel(2, 1, Color::YELLOW);
        assert_eq!(frame.get_pixel(2, 1), Some((255, 255, 0)));
        assert_eq!(frame.get_pixel(1, 2), Some((0, 0, 0)));
    }

    #[test]
    fn test_put_pixel_out_of_bounds_ignored() {
        let mut frame = VideoFrame::filled(4, 4, Color::BLACK);
        let before = frame.clone();
        frame.put_pixel(-1, 0, Color::GREEN);
        frame.put_pixel(0, -1, Color::GREEN);
        frame.put_pixel(4, 0, Color::GREEN);
        frame.put_pixel(0, 4, Color::GREEN);
        assert_eq!(frame, before);
    }
}

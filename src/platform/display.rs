// Frame presentation without a windowing stack
//
// Real windowing belongs to the host application; this sink stands in for it
// by writing each presented frame to disk as a PNG, one numbered sequence
// per window title.

use crate::models::frame::VideoFrame;
use crate::platform::{DisplayError, DisplayResult, DisplaySink};
use image::RgbaImage;
use std::collections::HashMap;
use std::path::PathBuf;

pub struct FrameDumpDisplay {
    output_dir: PathBuf,
    frame_indices: HashMap<String, u64>,
}

impl FrameDumpDisplay {
    pub fn new(output_dir: impl Into<PathBuf>) -> DisplayResult<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| DisplayError::WriteFailed(e.to_string()))?;

        Ok(Self {
            output_dir,
            frame_indices: HashMap::new(),
        })
    }

    fn slug(window_title: &str) -> String {
        window_title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
            .collect()
    }
}

impl DisplaySink for FrameDumpDisplay {
    fn present(&mut self, window_title: &str, frame: &VideoFrame) -> DisplayResult<()> {
        let image = RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
            .ok_or_else(|| {
                DisplayError::EncodeFailed(format!(
                    "frame buffer does not match {}x{}",
                    frame.width, frame.height
                ))
            })?;

        let index = self
            .frame_indices
            .entry(window_title.to_string())
            .or_insert(0);
        let path = self
            .output_dir
            .join(format!("{}-{:06}.png", Self::slug(window_title), index));
        *index += 1;

        image
            .save(&path)
            .map_err(|e| DisplayError::WriteFailed(e.to_string()))?;
        Ok(())
    }
}

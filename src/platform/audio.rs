// Audio clip playback through the default output device
//
// Clips are WAV files decoded with hound at startup and streamed with cpal.
// A shared atomic busy flag enforces the at-most-one-concurrent-clip policy;
// the stream callback runs on the audio thread and is the only other writer.

use crate::models::asset::ClipId;
use crate::platform::{AudioError, AudioResult, AudioSink};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream, StreamConfig};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Clip player backed by cpal
///
/// Not Send: streams belong to the thread that created them, which matches
/// the single-threaded call model of the visualizer.
pub struct CpalClipPlayer {
    device: cpal::Device,
    config: StreamConfig,
    clips: HashMap<ClipId, Arc<Vec<f32>>>,
    busy: Arc<AtomicBool>,
    clip_stream: Option<Stream>,
    background_stream: Option<Stream>,
}

impl CpalClipPlayer {
    pub fn new() -> AudioResult<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;

        let supported = device
            .default_output_config()
            .map_err(|e| AudioError::StreamFailed(e.to_string()))?;

        if supported.sample_format() != SampleFormat::F32 {
            return Err(AudioError::UnsupportedFormat(format!(
                "{:?}",
                supported.sample_format()
            )));
        }

        Ok(Self {
            device,
            config: supported.into(),
            clips: HashMap::new(),
            busy: Arc::new(AtomicBool::new(false)),
            clip_stream: None,
            background_stream: None,
        })
    }

    /// Decode every clip up front so missing or corrupt files fail at
    /// startup instead of mid-session
    pub fn preload(&mut self, clips: &[ClipId]) -> AudioResult<()> {
        for clip in clips {
            let samples = decode_wav_mono(Path::new(clip.as_str()))?;
            log::debug!("Preloaded clip {} ({} samples)", clip.as_str(), samples.len());
            self.clips.insert(clip.clone(), Arc::new(samples));
        }
        Ok(())
    }

    fn start_clip_stream(&mut self, samples: Arc<Vec<f32>>) -> AudioResult<Stream> {
        let channels = self.config.channels as usize;
        let busy = self.busy.clone();
        let mut position = 0usize;

        let stream = self
            .device
            .build_output_stream(
                &self.config,
                move |data: &mut [f32], _| {
                    for frame in data.chunks_mut(channels) {
                        let sample = if position < samples.len() {
                            let s = samples[position];
                            position += 1;
                            s
                        } else {
                            busy.store(false, Ordering::Release);
                            0.0
                        };
                        for out in frame.iter_mut() {
                            *out = sample;
                        }
                    }
                },
                |err| log::warn!("Clip stream error: {}", err),
                None,
            )
            .map_err(|e| AudioError::StreamFailed(e.to_string()))?;

        stream
            .play()
            .map_err(|e| AudioError::StreamFailed(e.to_string()))?;

        Ok(stream)
    }
}

impl AudioSink for CpalClipPlayer {
    fn is_idle(&self) -> bool {
        !self.busy.load(Ordering::Acquire)
    }

    fn play(&mut self, clip: &ClipId) -> bool {
        if !self.is_idle() {
            return false;
        }

        let samples = match self.clips.get(clip) {
            Some(samples) => samples.clone(),
            None => {
                log::warn!("Dropping unloaded clip {}", clip.as_str());
                return false;
            }
        };

        self.busy.store(true, Ordering::Release);
        match self.start_clip_stream(samples) {
            Ok(stream) => {
                // Replacing the previous stream drops it and frees the device slot
                self.clip_stream = Some(stream);
                true
            }
            Err(e) => {
                log::warn!("Failed to start clip {}: {}", clip.as_str(), e);
                self.busy.store(false, Ordering::Release);
                false
            }
        }
    }

    fn start_background(&mut self, track: &ClipId) -> AudioResult<()> {
        let samples = Arc::new(decode_wav_mono(Path::new(track.as_str()))?);
        if samples.is_empty() {
            return Err(AudioError::DecodeFailed(
                track.as_str().to_string(),
                "track contains no samples".to_string(),
            ));
        }

        let channels = self.config.channels as usize;
        let mut position = 0usize;
        let looped = samples.clone();

        let stream = self
            .device
            .build_output_stream(
                &self.config,
                move |data: &mut [f32], _| {
                    for frame in data.chunks_mut(channels) {
                        let sample = looped[position];
                        position = (position + 1) % looped.len();
                        for out in frame.iter_mut() {
                            *out = sample;
                        }
                    }
                },
                |err| log::warn!("Background stream error: {}", err),
                None,
            )
            .map_err(|e| AudioError::StreamFailed(e.to_string()))?;

        stream
            .play()
            .map_err(|e| AudioError::StreamFailed(e.to_string()))?;

        self.background_stream = Some(stream);
        Ok(())
    }
}

/// Blocking playback strategy behind the same port: waits for the device to
/// go idle, dispatches, then waits for the clip to finish
pub struct BlockingClipPlayer {
    inner: CpalClipPlayer,
    poll_interval: Duration,
}

impl BlockingClipPlayer {
    pub fn new(inner: CpalClipPlayer) -> Self {
        Self {
            inner,
            poll_interval: Duration::from_millis(10),
        }
    }

    pub fn preload(&mut self, clips: &[ClipId]) -> AudioResult<()> {
        self.inner.preload(clips)
    }

    fn wait_until_idle(&self) {
        while !self.inner.is_idle() {
            std::thread::sleep(self.poll_interval);
        }
    }
}

impl AudioSink for BlockingClipPlayer {
    fn is_idle(&self) -> bool {
        self.inner.is_idle()
    }

    fn play(&mut self, clip: &ClipId) -> bool {
        self.wait_until_idle();
        let dispatched = self.inner.play(clip);
        if dispatched {
            self.wait_until_idle();
        }
        dispatched
    }

    fn start_background(&mut self, track: &ClipId) -> AudioResult<()> {
        self.inner.start_background(track)
    }
}

/// Build the clip player for the configured playback strategy, with every
/// cue preloaded
pub fn build_clip_player(blocking: bool, clips: &[ClipId]) -> AudioResult<Box<dyn AudioSink>> {
    let mut player = CpalClipPlayer::new()?;
    player.preload(clips)?;

    if blocking {
        Ok(Box::new(BlockingClipPlayer::new(player)))
    } else {
        Ok(Box::new(player))
    }
}

/// Decode a WAV file into mono f32 samples
///
/// Multi-channel clips are averaged down to mono; the player duplicates the
/// mono signal across all device channels.
// TODO: resample when the clip rate differs from the device rate
fn decode_wav_mono(path: &Path) -> AudioResult<Vec<f32>> {
    let name = path.display().to_string();
    let mut reader = hound::WavReader::open(path)
        .map_err(|e| AudioError::DecodeFailed(name.clone(), e.to_string()))?;

    let spec = reader.spec();
    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(|e| AudioError::DecodeFailed(name.clone(), e.to_string()))?,
        hound::SampleFormat::Int => {
            let max = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max))
                .collect::<Result<_, _>>()
                .map_err(|e| AudioError::DecodeFailed(name.clone(), e.to_string()))?
        }
    };

    let channels = spec.channels.max(1) as usize;
    if channels == 1 {
        return Ok(interleaved);
    }

    let mono = interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect();
    Ok(mono)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_test_wav(name: &str, channels: u16, samples_per_channel: usize) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("coach_act_audio_{}", name));

        let spec = hound::WavSpec {
            channels,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for i in 0..samples_per_channel {
            for _ in 0..channels {
                writer.write_sample((i as i16).wrapping_mul(64)).unwrap();
            }
        }
        writer.finalize().unwrap();
        path
    }

    #[test]
    fn test_decode_mono_wav() {
        let path = write_test_wav("mono.wav", 1, 100);
        let samples = decode_wav_mono(&path).unwrap();
        assert_eq!(samples.len(), 100);
        assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_decode_stereo_downmixes() {
        let path = write_test_wav("stereo.wav", 2, 80);
        let samples = decode_wav_mono(&path).unwrap();
        assert_eq!(samples.len(), 80);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_decode_missing_file_fails() {
        let result = decode_wav_mono(Path::new("/nonexistent/clip.wav"));
        assert!(matches!(result, Err(AudioError::DecodeFailed(_, _))));
    }
}

//! Frame-sequence playback settings.

use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Settings for the flip-book frame sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaybackOptions {
    /// Directory containing the numbered frame images.
    pub frames_dir: String,
    /// File extension of the frame images.
    pub extension: String,
    /// Number of frames in the sequence.
    pub frame_count: usize,
    /// Zero-padding width of the numeric file names ("007.png" at width 3).
    pub pad_width: usize,
    /// Target playback rate in frames per second (0 = draw every tick).
    pub fps: u32,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            frames_dir: String::from("assets/frames"),
            extension: String::from("png"),
            frame_count: 300,
            pad_width: 3,
            fps: 60,
        }
    }
}

impl PlaybackOptions {
    /// Minimum interval between two drawn frames.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        if self.fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / f64::from(self.fps))
        }
    }
}

//! Audio sink for headless runs
//!
//! Nothing is played; each request is logged and counted.

use std::collections::HashMap;

use walkcam_core::{AudioSink, FootstepClip, ServiceError};

/// Logs footstep requests instead of playing them
#[derive(Debug, Default)]
pub struct LogAudio {
    counts: HashMap<FootstepClip, usize>,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `clip` was requested
    pub fn count(&self, clip: FootstepClip) -> usize {
        self.counts.get(&clip).copied().unwrap_or(0)
    }

    /// Total requests across all clips
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl AudioSink for LogAudio {
    fn play_2d(&mut self, volume: f32, clip: FootstepClip) -> Result<(), ServiceError> {
        log::info!("play2d {} at volume {:.2}", clip, volume);
        *self.counts.entry(clip).or_insert(0) += 1;
        Ok(())
    }
}

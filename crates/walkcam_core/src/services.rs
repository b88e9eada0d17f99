//! Collaborators the host provides to an update

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::error::ServiceError;

/// Terrain elevation source
///
/// Queries are read-only and must return before the update continues.
pub trait Terrain {
    /// Ground height at world `(x, y)`
    fn elevation_at(&self, x: f32, y: f32) -> f32;
}

/// Fire-and-forget 2D audio playback
pub trait AudioSink {
    /// Start playing `clip` at `volume`. Must not block until playback ends.
    fn play_2d(&mut self, volume: f32, clip: FootstepClip) -> Result<(), ServiceError>;
}

/// Footstep sound variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FootstepClip {
    Dirt1,
    Dirt2,
    Dirt3,
    Dirt4,
}

impl FootstepClip {
    /// All variants in index order
    pub const ALL: [FootstepClip; 4] = [
        FootstepClip::Dirt1,
        FootstepClip::Dirt2,
        FootstepClip::Dirt3,
        FootstepClip::Dirt4,
    ];

    /// Variant for `index`, wrapping modulo 4
    pub fn from_index(index: u64) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    /// Sound file name for this clip
    pub fn file_name(self) -> &'static str {
        match self {
            FootstepClip::Dirt1 => "pl_dirt1.wav",
            FootstepClip::Dirt2 => "pl_dirt2.wav",
            FootstepClip::Dirt3 => "pl_dirt3.wav",
            FootstepClip::Dirt4 => "pl_dirt4.wav",
        }
    }
}

impl fmt::Display for FootstepClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Collaborator bundle handed to [`Updatable::update`](crate::Updatable::update)
pub struct Services<'a> {
    pub terrain: &'a dyn Terrain,
    pub audio: &'a mut dyn AudioSink,
}

impl<'a> Services<'a> {
    pub fn new(terrain: &'a dyn Terrain, audio: &'a mut dyn AudioSink) -> Self {
        Self { terrain, audio }
    }
}

//! Core types for walkcam
//!
//! This crate provides what a camera entity shares with its host:
//!
//! - [`EntityPose`] - position and orientation of an entity
//! - [`Updatable`] - per-frame update contract
//! - [`FrameContext`] / [`AnalogInput`] - input and timing for one frame
//! - [`Services`] - collaborators handed to an update ([`Terrain`], [`AudioSink`])
//! - [`FlatTerrain`] / [`HeightmapTerrain`] - terrain elevation sources
//! - [`ServiceError`] / [`TerrainError`] - error types

mod entity;
mod frame;
mod services;
mod error;
pub mod terrain;

pub use entity::{EntityPose, Updatable};
pub use frame::{AnalogInput, FrameContext};
pub use services::{AudioSink, FootstepClip, Services, Terrain};
pub use error::{ServiceError, TerrainError};
pub use terrain::{FlatTerrain, Heightmap, HeightmapTerrain};

// Re-export commonly used types from walkcam_math for convenience
pub use walkcam_math::{Elementwise, Orientation3, Vector3};

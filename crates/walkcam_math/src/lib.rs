//! Camera Mathematics Library
//!
//! This crate provides the 3-component value types and the movement-axis
//! derivation used by the walkcam controller.
//!
//! ## Core Types
//!
//! - [`Vector3`] - spatial vector with x, y, z components
//! - [`Orientation3`] - pitch/roll/yaw angles in degrees
//! - [`Elementwise`] - chained elementwise arithmetic shared by both
//! - [`MovementAxes`] - forward/left/up basis derived from an orientation

mod elementwise;
mod vec3;
mod orientation;
pub mod axes;

pub use elementwise::Elementwise;
pub use vec3::Vector3;
pub use orientation::Orientation3;
pub use axes::{movement_axes, MovementAxes};

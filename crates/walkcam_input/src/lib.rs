//! Camera Input Handling
//!
//! This crate turns per-frame analog input into camera motion, with a fly
//! mode and a terrain-following walk mode.

mod camera_controller;
mod edge_detector;
mod keyboard;

pub use camera_controller::{
    footstep_clip, CameraController, CameraMode, ControllerSettings, FrameOutcome,
    ANALOG_DEAD_ZONE, EYE_HEIGHT, FLY_SPEED, FOOTSTEP_STRIDE, FOOTSTEP_VOLUME, KMH_TO_SCENE_UNITS,
    LOOK_SPEED, WALK_PITCH, WALK_SPEED,
};
pub use edge_detector::EdgeDetector;
pub use keyboard::KeyboardAnalog;

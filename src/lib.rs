//! walkcam - fly/walk camera controller
//!
//! Library half of the `walkcam` binary: configuration loading, the frame
//! loop that drives an [`Updatable`](walkcam_core::Updatable) entity, a
//! logging audio sink and the scripted key presses for headless runs.

pub mod audio;
pub mod config;
pub mod demo;
pub mod systems;

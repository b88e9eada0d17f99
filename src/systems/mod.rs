//! Application systems
//!
//! Frame-loop pieces kept out of main.rs so they can be tested.

mod simulation;

pub use simulation::{SimulationSystem, DEFAULT_MAX_DELTA};

//! Frame simulation system
//!
//! Owns frame timing for the host:
//! - Delta time calculation (capped)
//! - Frame counting
//! - One update of the driven entity per frame

use std::time::Instant;

use walkcam_core::{AnalogInput, FrameContext, ServiceError, Services, Updatable};

/// Default cap on a single frame's delta in seconds
pub const DEFAULT_MAX_DELTA: f32 = 0.25;

/// Drives an [`Updatable`] once per frame
pub struct SimulationSystem {
    last_frame: Instant,
    frame: u64,
    max_delta: f32,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            frame: 0,
            max_delta: DEFAULT_MAX_DELTA,
        }
    }

    /// Builder: set the delta cap
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Index the next frame will run with
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one frame using wall-clock time since the previous call
    pub fn update<U: Updatable>(
        &mut self,
        entity: &mut U,
        input: AnalogInput,
        toggle: bool,
        services: &mut Services<'_>,
    ) -> Result<U::Outcome, ServiceError> {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.step(entity, input, toggle, raw_dt, services)
    }

    /// Run one frame with an explicit delta
    ///
    /// The delta is still capped. The frame counter advances even if the
    /// entity returns an error.
    pub fn step<U: Updatable>(
        &mut self,
        entity: &mut U,
        input: AnalogInput,
        toggle: bool,
        delta: f32,
        services: &mut Services<'_>,
    ) -> Result<U::Outcome, ServiceError> {
        // Cap dt to prevent a huge jump on the first frame or after a stall
        let dt = delta.min(self.max_delta);
        let frame = FrameContext::new(input, toggle, dt, self.frame);
        self.frame += 1;
        entity.update(&frame, services)
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

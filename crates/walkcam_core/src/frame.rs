//! Per-frame input and timing

use serde::{Serialize, Deserialize};

/// Analog axes sampled once per frame, each nominally in `[-1, 1]`
///
/// Naming follows a gamepad: `la_*` is the left stick, `ra_*` the right
/// stick, `*_t` the triggers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalogInput {
    /// Left stick vertical (forward/backward)
    pub la_v: f32,
    /// Left stick horizontal (strafe)
    pub la_h: f32,
    /// Left trigger (descend)
    pub la_t: f32,
    /// Right trigger (ascend)
    pub ra_t: f32,
    /// Right stick vertical (look up/down)
    pub ra_v: f32,
    /// Right stick horizontal (look left/right)
    pub ra_h: f32,
}

/// Everything an entity reads from the host for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameContext {
    /// Analog axes
    pub input: AnalogInput,
    /// Raw held state of the mode-toggle button
    pub toggle: bool,
    /// Elapsed frame time in seconds
    pub delta: f32,
    /// Monotonically increasing frame index
    pub frame: u64,
}

impl FrameContext {
    pub fn new(input: AnalogInput, toggle: bool, delta: f32, frame: u64) -> Self {
        Self { input, toggle, delta, frame }
    }
}

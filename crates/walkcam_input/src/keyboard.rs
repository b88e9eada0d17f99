//! Keyboard to analog mapping
//!
//! Controls:
//! - W/S: Forward/backward (`la_v`)
//! - A/D: Strafe (`la_h`)
//! - Shift/Q: Descend (`la_t`)
//! - Space/E: Ascend (`ra_t`)
//! - Up/Down arrows: Look up/down (`ra_v`)
//! - Left/Right arrows: Turn (`ra_h`)
//! - Tab: Toggle fly/walk mode

use walkcam_core::AnalogInput;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Keyboard state presented as full-deflection analog axes
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyboardAnalog {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    descend: bool,
    ascend: bool,
    look_up: bool,
    look_down: bool,
    turn_left: bool,
    turn_right: bool,
    toggle: bool,
}

impl KeyboardAnalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is one of the mapped controls.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::KeyW => { self.forward = pressed; true }
            KeyCode::KeyS => { self.backward = pressed; true }
            KeyCode::KeyA => { self.left = pressed; true }
            KeyCode::KeyD => { self.right = pressed; true }
            KeyCode::ShiftLeft | KeyCode::ShiftRight | KeyCode::KeyQ => { self.descend = pressed; true }
            KeyCode::Space | KeyCode::KeyE => { self.ascend = pressed; true }
            KeyCode::ArrowUp => { self.look_up = pressed; true }
            KeyCode::ArrowDown => { self.look_down = pressed; true }
            KeyCode::ArrowLeft => { self.turn_left = pressed; true }
            KeyCode::ArrowRight => { self.turn_right = pressed; true }
            KeyCode::Tab => { self.toggle = pressed; true }
            _ => false,
        }
    }

    /// Current axes
    ///
    /// The controller moves against `la_v`, so forward is negative.
    /// Pitch grows towards looking straight down, so looking up is negative `ra_v`.
    pub fn analog(&self) -> AnalogInput {
        AnalogInput {
            la_v: axis(self.backward, self.forward),
            la_h: axis(self.right, self.left),
            la_t: axis(self.descend, false),
            ra_t: axis(self.ascend, false),
            ra_v: axis(self.look_down, self.look_up),
            ra_h: axis(self.turn_right, self.turn_left),
        }
    }

    /// Raw held state of the mode-toggle key
    pub fn toggle_held(&self) -> bool {
        self.toggle
    }
}

#[inline]
fn axis(positive: bool, negative: bool) -> f32 {
    (positive as i32 - negative as i32) as f32
}

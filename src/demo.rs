//! Scripted key presses for the headless run
//!
//! The run flies forward while looking up, taps Tab halfway through to start
//! walking, walks forward while turning, then strafes right for the last
//! quarter.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Key events delivered before `frame` of a run lasting `frames` frames
pub fn key_events(frame: u64, frames: u64) -> Vec<(KeyCode, ElementState)> {
    use ElementState::{Pressed, Released};

    let half = frames / 2;
    let mut events = Vec::new();

    if frame == 0 {
        events.extend([(KeyCode::KeyW, Pressed), (KeyCode::ArrowUp, Pressed)]);
    }
    if frame == half / 2 {
        events.push((KeyCode::ArrowUp, Released));
    }
    if frame == half {
        events.extend([(KeyCode::KeyW, Released), (KeyCode::Tab, Pressed)]);
    }
    if frame == half + 1 {
        events.extend([
            (KeyCode::Tab, Released),
            (KeyCode::KeyW, Pressed),
            (KeyCode::ArrowRight, Pressed),
        ]);
    }
    if frame == half + half / 2 {
        events.extend([
            (KeyCode::KeyW, Released),
            (KeyCode::ArrowRight, Released),
            (KeyCode::KeyD, Pressed),
        ]);
    }

    events
}

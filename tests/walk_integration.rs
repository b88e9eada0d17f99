//! Integration tests for the frame loop driving the camera controller
//!
//! These run the controller through the simulation system with real terrain
//! and check the walk-mode guarantees over many frames:
//! 1. The camera sits exactly at eye height above the terrain
//! 2. Footsteps follow the stride and the deterministic clip choice
//! 3. Mode toggles respond to presses, not to held buttons

use walkcam::audio::LogAudio;
use walkcam::demo;
use walkcam::systems::SimulationSystem;
use walkcam_core::{
    AnalogInput, AudioSink, EntityPose, FlatTerrain, FootstepClip, Heightmap, HeightmapTerrain, Orientation3,
    ServiceError, Services, Terrain, Updatable, Vector3,
};
use walkcam_input::{
    footstep_clip, CameraController, CameraMode, KeyboardAnalog, EYE_HEIGHT, FLY_SPEED, WALK_SPEED,
};

#[derive(Default)]
struct RecordingAudio {
    played: Vec<(f32, FootstepClip)>,
}

impl AudioSink for RecordingAudio {
    fn play_2d(&mut self, volume: f32, clip: FootstepClip) -> Result<(), ServiceError> {
        self.played.push((volume, clip));
        Ok(())
    }
}

fn hills() -> HeightmapTerrain {
    HeightmapTerrain::new(
        64.0,
        10.0,
        Heightmap {
            width: 3,
            height: 3,
            samples: vec![0.0, 0.2, 0.0, 0.2, 1.0, 0.2, 0.0, 0.2, 0.0],
        },
    )
    .unwrap()
}

fn start_controller() -> CameraController {
    CameraController::new().with_pose(EntityPose::new(
        Vector3::new(8.0, 8.0, 100.0),
        Orientation3::new(-67.5, 0.0, 45.0),
    ))
}

// ==================== Terrain Following ====================

#[test]
fn test_walk_stays_at_eye_height_over_hills() {
    let terrain = hills();
    let mut audio = RecordingAudio::default();
    let mut sim = SimulationSystem::new();
    let mut controller = start_controller();

    let walk = AnalogInput { la_v: -1.0, la_h: 0.4, ra_h: 0.6, ..AnalogInput::default() };

    for frame in 0..400u64 {
        let mut services = Services::new(&terrain, &mut audio);
        sim.step(&mut controller, walk, frame == 0, 0.05, &mut services).unwrap();

        let p = controller.position();
        assert_eq!(
            p.z,
            terrain.elevation_at(p.x, p.y) + EYE_HEIGHT,
            "frame {} off the ground",
            frame
        );
    }
    assert_eq!(controller.mode(), CameraMode::Walk);
}

#[test]
fn test_fly_ignores_terrain() {
    let terrain = hills();
    let mut audio = RecordingAudio::default();
    let mut sim = SimulationSystem::new();
    let mut controller = start_controller();

    let climb = AnalogInput { ra_t: 1.0, ..AnalogInput::default() };
    for _ in 0..10 {
        let mut services = Services::new(&terrain, &mut audio);
        sim.step(&mut controller, climb, false, 0.1, &mut services).unwrap();
    }

    assert_eq!(controller.mode(), CameraMode::Fly);
    assert!(controller.position().z > 100.0);
    assert!(audio.played.is_empty());
}

// ==================== Footsteps ====================

#[test]
fn test_footsteps_follow_stride() {
    let terrain = hills();
    let mut audio = RecordingAudio::default();
    let mut sim = SimulationSystem::new();
    let mut controller = start_controller();

    // Enter walk mode without moving
    let mut services = Services::new(&terrain, &mut audio);
    sim.step(&mut controller, AnalogInput::default(), true, 0.1, &mut services).unwrap();

    let strafe = AnalogInput { la_h: 0.5, ..AnalogInput::default() };
    let per_frame = (0.5f32 * 0.1 * WALK_SPEED).abs();
    let mut distance = 0.0f32;
    let mut expected = Vec::new();

    for _ in 0..60 {
        let frame = sim.frame();
        distance += per_frame;
        let mut services = Services::new(&terrain, &mut audio);
        let outcome = sim.step(&mut controller, strafe, false, 0.1, &mut services).unwrap();

        if distance > 0.8 {
            let clip = footstep_clip(distance, frame);
            assert_eq!(outcome.footstep, Some(clip));
            expected.push((0.3, clip));
            distance = 0.0;
        } else {
            assert_eq!(outcome.footstep, None);
        }
    }

    assert_eq!(audio.played, expected);
    assert!(expected.len() >= 5);
}

#[test]
fn test_same_script_same_footsteps() {
    fn run() -> Vec<(f32, FootstepClip)> {
        let terrain = hills();
        let mut audio = RecordingAudio::default();
        let mut sim = SimulationSystem::new();
        let mut controller = start_controller();
        let walk = AnalogInput { la_v: -0.9, la_h: 0.3, ..AnalogInput::default() };
        for frame in 0..300u64 {
            let mut services = Services::new(&terrain, &mut audio);
            sim.step(&mut controller, walk, frame == 0, 1.0 / 60.0, &mut services).unwrap();
        }
        audio.played
    }

    let first = run();
    assert!(!first.is_empty());
    assert_eq!(first, run());
}

#[test]
fn test_log_audio_counts_footsteps() {
    let terrain = hills();
    let mut audio = LogAudio::new();
    let mut sim = SimulationSystem::new();
    let mut controller = start_controller();

    let walk = AnalogInput { la_v: -1.0, ..AnalogInput::default() };
    let mut footsteps = 0;
    for frame in 0..120u64 {
        let mut services = Services::new(&terrain, &mut audio);
        let outcome = sim.step(&mut controller, walk, frame == 0, 0.1, &mut services).unwrap();
        if outcome.footstep.is_some() {
            footsteps += 1;
        }
    }

    assert!(footsteps > 0);
    assert_eq!(audio.total(), footsteps);
}

// ==================== Mode Switching ====================

#[test]
fn test_toggle_requires_release() {
    let terrain = hills();
    let mut audio = RecordingAudio::default();
    let mut sim = SimulationSystem::new();
    let mut controller = start_controller();

    let presses = [false, true, true, false, true, true, true, false];
    let mut modes = Vec::new();
    for toggle in presses {
        let mut services = Services::new(&terrain, &mut audio);
        sim.step(&mut controller, AnalogInput::default(), toggle, 0.1, &mut services).unwrap();
        modes.push(controller.mode());
    }

    use CameraMode::{Fly, Walk};
    assert_eq!(modes, vec![Fly, Walk, Walk, Walk, Fly, Fly, Fly, Fly]);
    assert_eq!(controller.movement_speed(), FLY_SPEED);
}

#[test]
fn test_pose_through_trait() {
    let controller = start_controller();
    let pose = Updatable::pose(&controller);
    assert_eq!(pose.position, Vector3::new(8.0, 8.0, 100.0));
    assert_eq!(pose.orientation.pitch, -67.5);
}

// ==================== Keyboard Driven Run ====================

#[test]
fn test_scripted_keys_fly_then_walk() {
    let terrain = FlatTerrain::new(3.0);
    let mut audio = LogAudio::new();
    let mut sim = SimulationSystem::new();
    let mut controller = start_controller();
    let mut keys = KeyboardAnalog::new();

    let frames = 600;
    let mut switches = Vec::new();
    for frame in 0..frames {
        for (key, state) in demo::key_events(frame, frames) {
            keys.process_keyboard(key, state);
        }
        let mut services = Services::new(&terrain, &mut audio);
        let outcome = sim
            .step(&mut controller, keys.analog(), keys.toggle_held(), 1.0 / 60.0, &mut services)
            .unwrap();
        if let Some(mode) = outcome.mode_changed {
            switches.push((frame, mode));
        }
    }

    assert_eq!(switches, vec![(300, CameraMode::Walk)]);
    assert_eq!(controller.position().z, 3.0 + EYE_HEIGHT);
    assert!(audio.total() > 0);
}

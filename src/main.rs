//! walkcam - headless fly/walk camera run
//!
//! Loads configuration, builds the terrain, and drives the camera controller
//! from scripted key presses at a fixed frame rate, logging mode switches and
//! footsteps as it goes.

use walkcam::audio::LogAudio;
use walkcam::config::AppConfig;
use walkcam::demo;
use walkcam::systems::SimulationSystem;
use walkcam_core::Services;
use walkcam_input::{CameraController, KeyboardAnalog};

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting walkcam");

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }

    let terrain = match config.terrain.build() {
        Ok(terrain) => terrain,
        Err(e) => {
            log::error!("Failed to build terrain: {}", e);
            std::process::exit(1);
        }
    };
    let mut audio = LogAudio::new();

    let mut controller = CameraController::new()
        .with_settings(config.controller.to_settings())
        .with_pose(config.camera.start_pose());
    let mut sim = SimulationSystem::new().with_max_delta(config.simulation.max_delta);
    let mut keys = KeyboardAnalog::new();

    let frames = config.simulation.frames;
    let delta = config.simulation.fixed_delta;

    for frame in 0..frames {
        for (key, state) in demo::key_events(frame, frames) {
            keys.process_keyboard(key, state);
        }

        let mut services = Services::new(&*terrain, &mut audio);
        if let Err(e) = sim.step(&mut controller, keys.analog(), keys.toggle_held(), delta, &mut services) {
            log::error!("Frame {} failed: {}", frame, e);
            std::process::exit(1);
        }
    }

    let position = controller.position();
    let orientation = controller.orientation();
    log::info!(
        "Finished {} frames in {:?} mode at ({:.2}, {:.2}, {:.2}), pitch {:.2} yaw {:.2}",
        frames,
        controller.mode(),
        position.x,
        position.y,
        position.z,
        orientation.pitch,
        orientation.yaw
    );
    log::info!("{} footsteps played", audio.total());
}


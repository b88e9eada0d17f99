//! Fly/walk camera controller
//!
//! Each frame the controller:
//! 1. derives forward/left/up axes from its orientation (pitch forced to
//!    [`WALK_PITCH`] while walking),
//! 2. moves along those axes for every analog channel past the dead zone,
//! 3. applies look input (pitch clamped to `[-180, 0]`, yaw unbounded),
//! 4. flips between fly and walk on each press of the toggle button,
//! 5. while walking, snaps to terrain height plus eye height and plays a
//!    footstep every [`FOOTSTEP_STRIDE`] units of horizontal travel.

use serde::{Serialize, Deserialize};
use walkcam_core::{
    AudioSink, EntityPose, FootstepClip, FrameContext, ServiceError, Services, Terrain, Updatable,
};
use walkcam_math::{movement_axes, Elementwise, Orientation3, Vector3};

use crate::edge_detector::EdgeDetector;

/// Analog magnitude at or below which a channel is ignored
pub const ANALOG_DEAD_ZONE: f32 = 0.2;

/// Look rate in degrees per second at full deflection
pub const LOOK_SPEED: f32 = 3.0;

/// One scene unit is one metre, so km/h → units/s is × 1000 / 3600
pub const KMH_TO_SCENE_UNITS: f32 = 1000.0 / 3600.0;

/// Walking speed, 8 km/h
pub const WALK_SPEED: f32 = 8.0 * KMH_TO_SCENE_UNITS;

/// Flying speed, 180 km/h
pub const FLY_SPEED: f32 = 180.0 * KMH_TO_SCENE_UNITS;

/// Camera height above the terrain while walking
pub const EYE_HEIGHT: f32 = 1.67;

/// Horizontal travel between footsteps
pub const FOOTSTEP_STRIDE: f32 = 0.8;

/// Footstep playback volume
pub const FOOTSTEP_VOLUME: f32 = 0.3;

/// Pitch used for the movement axes while walking (looking at the horizon)
pub const WALK_PITCH: f32 = -90.0;

/// Navigation mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraMode {
    /// Free movement along the camera axes
    #[default]
    Fly,
    /// First person, held at eye height above the terrain
    Walk,
}

impl CameraMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::Fly => CameraMode::Walk,
            CameraMode::Walk => CameraMode::Fly,
        }
    }

    pub fn is_walking(self) -> bool {
        matches!(self, CameraMode::Walk)
    }
}

/// Tunables for [`CameraController`]
///
/// Speeds are in scene units per second. The defaults are the module constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerSettings {
    pub dead_zone: f32,
    pub look_speed: f32,
    pub walk_speed: f32,
    pub fly_speed: f32,
    pub eye_height: f32,
    pub footstep_stride: f32,
    pub footstep_volume: f32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            dead_zone: ANALOG_DEAD_ZONE,
            look_speed: LOOK_SPEED,
            walk_speed: WALK_SPEED,
            fly_speed: FLY_SPEED,
            eye_height: EYE_HEIGHT,
            footstep_stride: FOOTSTEP_STRIDE,
            footstep_volume: FOOTSTEP_VOLUME,
        }
    }
}

impl ControllerSettings {
    /// Movement speed for `mode`
    pub fn speed(&self, mode: CameraMode) -> f32 {
        match mode {
            CameraMode::Fly => self.fly_speed,
            CameraMode::Walk => self.walk_speed,
        }
    }
}

/// What happened during one update
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// New mode, if the toggle fired this frame
    pub mode_changed: Option<CameraMode>,
    /// Footstep requested this frame
    pub footstep: Option<FootstepClip>,
}

/// Footstep variant for a stride that ended with `distance` travelled on `frame`
///
/// `round(distance * frame) mod 4`. Deterministic, so replays pick the same clips.
pub fn footstep_clip(distance: f32, frame: u64) -> FootstepClip {
    let index = (f64::from(distance) * frame as f64).round() as u64;
    FootstepClip::from_index(index)
}

/// Per-frame camera state machine
#[derive(Clone, Debug)]
pub struct CameraController {
    position: Vector3,
    orientation: Orientation3,
    mode: CameraMode,
    movement_speed: f32,
    /// Horizontal travel since the last footstep
    walked_distance: f32,
    toggle_edge: EdgeDetector,
    settings: ControllerSettings,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    /// Controller at the origin, flying
    pub fn new() -> Self {
        let settings = ControllerSettings::default();
        Self {
            position: Vector3::ZERO,
            orientation: Orientation3::ZERO,
            mode: CameraMode::Fly,
            movement_speed: settings.speed(CameraMode::Fly),
            walked_distance: 0.0,
            toggle_edge: EdgeDetector::new(),
            settings,
        }
    }

    /// Builder: set the starting pose
    pub fn with_pose(mut self, pose: EntityPose) -> Self {
        self.position = pose.position;
        self.orientation = pose.orientation;
        self
    }

    /// Builder: replace the tunables
    pub fn with_settings(mut self, settings: ControllerSettings) -> Self {
        self.settings = settings;
        self.movement_speed = settings.speed(self.mode);
        self
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn orientation(&self) -> Orientation3 {
        self.orientation
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Current speed in scene units per second
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn walked_distance(&self) -> f32 {
        self.walked_distance
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Advance one frame
    ///
    /// Audio failures are returned as-is; the pose changes made earlier in
    /// the frame are kept.
    pub fn update(
        &mut self,
        frame: &FrameContext,
        terrain: &dyn Terrain,
        audio: &mut dyn AudioSink,
    ) -> Result<FrameOutcome, ServiceError> {
        let mut outcome = FrameOutcome::default();
        let input = frame.input;
        let delta = frame.delta;

        // Walking moves on the ground plane regardless of where we look
        let reference = if self.mode.is_walking() {
            self.orientation.with_pitch(WALK_PITCH)
        } else {
            self.orientation
        };
        let axes = movement_axes(&reference);

        // Forward, backward
        if self.past_dead_zone(input.la_v) {
            let amount = input.la_v * delta * self.movement_speed;
            self.translate(axes.forward, amount * -1.0);
            self.walked_distance += amount.abs();
        }

        // Stride left, right
        if self.past_dead_zone(input.la_h) {
            let amount = input.la_h * delta * self.movement_speed;
            self.translate(axes.left, amount);
            self.walked_distance += amount.abs();
        }

        // Down
        if self.past_dead_zone(input.la_t) {
            self.translate(axes.up, input.la_t * delta * self.movement_speed * -1.0);
        }

        // Up
        if self.past_dead_zone(input.ra_t) {
            self.translate(axes.up, input.ra_t * delta * self.movement_speed);
        }

        // Look up, down
        if self.past_dead_zone(input.ra_v) {
            self.orientation.pitch += input.ra_v * delta * self.settings.look_speed;
            self.orientation.clamp_pitch();
        }

        // Look left, right
        if self.past_dead_zone(input.ra_h) {
            self.orientation.yaw += input.ra_h * delta * self.settings.look_speed;
        }

        if self.toggle_edge.update(frame.toggle) {
            self.mode = self.mode.toggled();
            self.movement_speed = self.settings.speed(self.mode);
            log::info!("First person mode: {}", self.mode.is_walking());
            outcome.mode_changed = Some(self.mode);
        }

        if self.mode.is_walking() {
            self.position.z =
                terrain.elevation_at(self.position.x, self.position.y) + self.settings.eye_height;

            if self.walked_distance > self.settings.footstep_stride {
                let clip = footstep_clip(self.walked_distance, frame.frame);
                self.walked_distance = 0.0;
                log::debug!("Footstep {} on frame {}", clip, frame.frame);
                audio.play_2d(self.settings.footstep_volume, clip)?;
                outcome.footstep = Some(clip);
            }
        }

        Ok(outcome)
    }

    #[inline]
    fn past_dead_zone(&self, value: f32) -> bool {
        value.abs() > self.settings.dead_zone
    }

    #[inline]
    fn translate(&mut self, axis: Vector3, amount: f32) {
        let mut step = axis.copy();
        step.scale(amount);
        self.position.add(&step);
    }
}

impl Updatable for CameraController {
    type Outcome = FrameOutcome;

    fn update(
        &mut self,
        frame: &FrameContext,
        services: &mut Services<'_>,
    ) -> Result<FrameOutcome, ServiceError> {
        CameraController::update(self, frame, services.terrain, &mut *services.audio)
    }

    fn pose(&self) -> EntityPose {
        EntityPose::new(self.position, self.orientation)
    }
}

//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`WALKCAM_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use walkcam_core::{EntityPose, FlatTerrain, HeightmapTerrain, Orientation3, Terrain, TerrainError, Vector3};
use walkcam_input::{
    ControllerSettings, ANALOG_DEAD_ZONE, EYE_HEIGHT, FOOTSTEP_STRIDE, FOOTSTEP_VOLUME,
    KMH_TO_SCENE_UNITS, LOOK_SPEED,
};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Camera start pose
    #[serde(default)]
    pub camera: CameraConfig,
    /// Controller tunables
    #[serde(default)]
    pub controller: ControllerConfig,
    /// Terrain source
    #[serde(default)]
    pub terrain: TerrainConfig,
    /// Frame loop settings
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`WALKCAM_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // WALKCAM_CONTROLLER__DEAD_ZONE=0.3 -> controller.dead_zone = 0.3
        figment = figment.merge(Env::prefixed("WALKCAM_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Starting position [x, y, z]
    pub start_position: [f32; 3],
    /// Starting orientation [pitch, roll, yaw] in degrees
    pub start_orientation: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: [128.0, 128.0, 256.0],
            start_orientation: [-67.5, 0.0, 45.0],
        }
    }
}

impl CameraConfig {
    pub fn start_pose(&self) -> EntityPose {
        EntityPose::new(
            Vector3::from_array(self.start_position),
            Orientation3::from_array(self.start_orientation),
        )
    }
}

/// Controller configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Analog magnitude at or below which input is ignored
    pub dead_zone: f32,
    /// Look rate in degrees per second
    pub look_speed: f32,
    /// Walking speed in km/h
    pub walk_speed_kmh: f32,
    /// Flying speed in km/h
    pub fly_speed_kmh: f32,
    /// Camera height above terrain while walking
    pub eye_height: f32,
    /// Horizontal distance between footsteps
    pub footstep_stride: f32,
    /// Footstep volume
    pub footstep_volume: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            dead_zone: ANALOG_DEAD_ZONE,
            look_speed: LOOK_SPEED,
            walk_speed_kmh: 8.0,
            fly_speed_kmh: 180.0,
            eye_height: EYE_HEIGHT,
            footstep_stride: FOOTSTEP_STRIDE,
            footstep_volume: FOOTSTEP_VOLUME,
        }
    }
}

impl ControllerConfig {
    /// Convert to controller settings (speeds from km/h to scene units per second)
    pub fn to_settings(&self) -> ControllerSettings {
        ControllerSettings {
            dead_zone: self.dead_zone,
            look_speed: self.look_speed,
            walk_speed: self.walk_speed_kmh * KMH_TO_SCENE_UNITS,
            fly_speed: self.fly_speed_kmh * KMH_TO_SCENE_UNITS,
            eye_height: self.eye_height,
            footstep_stride: self.footstep_stride,
            footstep_volume: self.footstep_volume,
        }
    }
}

/// Where terrain heights come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainKind {
    #[default]
    Flat,
    Heightmap,
}

/// Terrain configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Terrain source
    pub kind: TerrainKind,
    /// Height of flat terrain
    pub flat_elevation: f32,
    /// RON heightmap file, required for `heightmap`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heightmap_path: Option<String>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            kind: TerrainKind::Flat,
            flat_elevation: 0.0,
            heightmap_path: None,
        }
    }
}

impl TerrainConfig {
    /// Build the configured terrain
    pub fn build(&self) -> Result<Box<dyn Terrain>, TerrainError> {
        match self.kind {
            TerrainKind::Flat => Ok(Box::new(FlatTerrain::new(self.flat_elevation))),
            TerrainKind::Heightmap => {
                let path = self.heightmap_path.as_deref().ok_or_else(|| {
                    TerrainError::InvalidHeightmap("terrain.heightmap_path is not set".to_string())
                })?;
                Ok(Box::new(HeightmapTerrain::load(path)?))
            }
        }
    }
}

/// Frame loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Upper bound on a single frame's delta in seconds
    pub max_delta: f32,
    /// Fixed delta used by the headless demo
    pub fixed_delta: f32,
    /// Number of frames the headless demo runs
    pub frames: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_delta: 0.25,
            fixed_delta: 1.0 / 60.0,
            frames: 600,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use walkcam_input::{FLY_SPEED, WALK_SPEED};

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.camera.start_position, [128.0, 128.0, 256.0]);
        assert_eq!(config.controller.dead_zone, 0.2);
        assert_eq!(config.terrain.kind, TerrainKind::Flat);
        assert_eq!(config.simulation.max_delta, 0.25);
    }

    #[test]
    fn test_default_settings_match_controller_constants() {
        let settings = ControllerConfig::default().to_settings();
        assert_eq!(settings.walk_speed, WALK_SPEED);
        assert_eq!(settings.fly_speed, FLY_SPEED);
        assert_eq!(settings, ControllerSettings::default());
    }

    #[test]
    fn test_start_pose() {
        let pose = CameraConfig::default().start_pose();
        assert_eq!(pose.position, Vector3::new(128.0, 128.0, 256.0));
        assert_eq!(pose.orientation, Orientation3::new(-67.5, 0.0, 45.0));
    }

    #[test]
    fn test_flat_terrain_build() {
        let config = TerrainConfig {
            flat_elevation: 4.0,
            ..TerrainConfig::default()
        };
        let terrain = config.build().unwrap();
        assert_eq!(terrain.elevation_at(10.0, -3.0), 4.0);
    }

    #[test]
    fn test_heightmap_without_path_fails() {
        let config = TerrainConfig {
            kind: TerrainKind::Heightmap,
            ..TerrainConfig::default()
        };
        assert!(matches!(config.build(), Err(TerrainError::InvalidHeightmap(_))));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("dead_zone"));
        assert!(toml.contains("walk_speed_kmh"));
        assert!(toml.contains("kind = \"flat\""));
    }
}

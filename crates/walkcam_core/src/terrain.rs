//! Terrain elevation sources
//!
//! [`FlatTerrain`] returns a constant height. [`HeightmapTerrain`] samples a
//! square grid of heights with bilinear filtering and is loaded from RON:
//!
//! ```text
//! (
//!     dimension: 256.0,
//!     elevation: 40.0,
//!     heightmap: (
//!         width: 2,
//!         height: 2,
//!         samples: [0.0, 0.5, 0.5, 1.0],
//!     ),
//! )
//! ```

use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::error::TerrainError;
use crate::services::Terrain;

/// Constant-height ground
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatTerrain {
    pub elevation: f32,
}

impl FlatTerrain {
    pub fn new(elevation: f32) -> Self {
        Self { elevation }
    }
}

impl Terrain for FlatTerrain {
    fn elevation_at(&self, _x: f32, _y: f32) -> f32 {
        self.elevation
    }
}

/// Row-major grid of normalized heights
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Heightmap {
    pub width: usize,
    pub height: usize,
    pub samples: Vec<f32>,
}

impl Heightmap {
    /// Check the grid is at least 2x2 and the sample count matches
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.width < 2 || self.height < 2 {
            return Err(TerrainError::InvalidHeightmap(format!(
                "grid must be at least 2x2, got {}x{}",
                self.width, self.height
            )));
        }
        if self.samples.len() != self.width * self.height {
            return Err(TerrainError::InvalidHeightmap(format!(
                "{}x{} grid with {} samples",
                self.width,
                self.height,
                self.samples.len()
            )));
        }
        Ok(())
    }

    #[inline]
    fn at(&self, col: usize, row: usize) -> f32 {
        self.samples.get(col + self.width * row).copied().unwrap_or(0.0)
    }

    /// Bilinear sample at normalized `(u, v)`, each clamped to `[0, 1]`
    ///
    /// An axis with a single sample is constant along that axis. Missing
    /// samples read as 0.0.
    pub fn sample(&self, u: f32, v: f32) -> f32 {
        let (col, next_col, u_ratio) = cell(u, self.width);
        let (row, next_row, v_ratio) = cell(v, self.height);
        let u_opposite = 1.0 - u_ratio;
        let v_opposite = 1.0 - v_ratio;

        (self.at(col, row) * u_opposite + self.at(next_col, row) * u_ratio) * v_opposite
            + (self.at(col, next_row) * u_opposite + self.at(next_col, next_row) * u_ratio) * v_ratio
    }
}

/// Grid cell containing normalized `t` on an axis of `count` samples:
/// `(index, next index, ratio between them)`
#[inline]
fn cell(t: f32, count: usize) -> (usize, usize, f32) {
    if count < 2 {
        return (0, 0, 0.0);
    }
    let t = t.clamp(0.0, 1.0) * (count - 1) as f32;
    let index = (t.floor() as usize).min(count - 2);
    (index, index + 1, t - index as f32)
}

/// Heightmap stretched over a `dimension` x `dimension` square starting at the origin
///
/// Positions outside the square take the height of the nearest edge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeightmapTerrain {
    /// Side length of the covered square in world units
    pub dimension: f32,
    /// World height of a sample value of 1.0
    pub elevation: f32,
    pub heightmap: Heightmap,
}

impl HeightmapTerrain {
    pub fn new(dimension: f32, elevation: f32, heightmap: Heightmap) -> Result<Self, TerrainError> {
        let terrain = Self { dimension, elevation, heightmap };
        terrain.validate()?;
        Ok(terrain)
    }

    /// Load from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TerrainError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Parse from a RON string
    pub fn from_ron_str(contents: &str) -> Result<Self, TerrainError> {
        let terrain: Self = ron::from_str(contents)?;
        terrain.validate()?;
        log::debug!(
            "Loaded {}x{} heightmap over {} units",
            terrain.heightmap.width,
            terrain.heightmap.height,
            terrain.dimension
        );
        Ok(terrain)
    }

    fn validate(&self) -> Result<(), TerrainError> {
        if self.dimension.is_nan() || self.dimension <= 0.0 {
            return Err(TerrainError::InvalidHeightmap(format!(
                "dimension must be positive, got {}",
                self.dimension
            )));
        }
        self.heightmap.validate()
    }
}

impl Terrain for HeightmapTerrain {
    fn elevation_at(&self, x: f32, y: f32) -> f32 {
        self.heightmap.sample(x / self.dimension, y / self.dimension) * self.elevation
    }
}

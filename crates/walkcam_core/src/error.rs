//! Error types
//!
//! [`ServiceError`] covers collaborator failures during a frame update;
//! [`TerrainError`] covers loading terrain data.

use std::fmt;
use std::io;

/// A collaborator failed while an entity was updating
///
/// Returned straight to the host. There is no fallback path.
#[derive(Debug)]
pub enum ServiceError {
    /// Audio playback could not be started
    Audio(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Audio(msg) => write!(f, "Audio service error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

/// Error loading terrain data
#[derive(Debug)]
pub enum TerrainError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax or shape)
    Parse(ron::error::SpannedError),
    /// Heightmap parsed but is unusable
    InvalidHeightmap(String),
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainError::Io(err) => write!(f, "Terrain IO error: {}", err),
            TerrainError::Parse(err) => write!(f, "Terrain parse error: {}", err),
            TerrainError::InvalidHeightmap(msg) => write!(f, "Invalid heightmap: {}", msg),
        }
    }
}

impl std::error::Error for TerrainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerrainError::Io(err) => Some(err),
            TerrainError::Parse(err) => Some(err),
            TerrainError::InvalidHeightmap(_) => None,
        }
    }
}

impl From<io::Error> for TerrainError {
    fn from(err: io::Error) -> Self {
        TerrainError::Io(err)
    }
}

impl From<ron::error::SpannedError> for TerrainError {
    fn from(err: ron::error::SpannedError) -> Self {
        TerrainError::Parse(err)
    }
}

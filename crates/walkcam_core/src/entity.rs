//! Entity pose and the per-frame update contract

use serde::{Serialize, Deserialize};
use walkcam_math::{Orientation3, Vector3};

use crate::error::ServiceError;
use crate::frame::FrameContext;
use crate::services::Services;

/// Position and orientation shared by every entity
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityPose {
    /// World-space position (z is up)
    pub position: Vector3,
    /// Pitch/roll/yaw in degrees
    pub orientation: Orientation3,
}

impl EntityPose {
    pub fn new(position: Vector3, orientation: Orientation3) -> Self {
        Self { position, orientation }
    }
}

/// Something the host advances once per frame
///
/// Collaborators are passed in explicitly; implementors must not reach for
/// global services.
pub trait Updatable {
    /// Per-frame report returned to the host
    type Outcome;

    /// Advance one frame
    fn update(
        &mut self,
        frame: &FrameContext,
        services: &mut Services<'_>,
    ) -> Result<Self::Outcome, ServiceError>;

    /// Current pose
    fn pose(&self) -> EntityPose;
}

/// A bare pose doesn't move on its own
impl Updatable for EntityPose {
    type Outcome = ();

    fn update(&mut self, _frame: &FrameContext, _services: &mut Services<'_>) -> Result<(), ServiceError> {
        Ok(())
    }

    fn pose(&self) -> EntityPose {
        *self
    }
}

//! Orientation angles

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::elementwise::Elementwise;
use crate::vec3::Vector3;

/// Pitch, roll and yaw in degrees
///
/// Same layout as [`Vector3`] (pitch in x, roll in y, yaw in z) and the same
/// elementwise arithmetic, but kept as a separate type so angles are never
/// added to positions by accident.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Orientation3 {
    pub pitch: f32,
    pub roll: f32,
    pub yaw: f32,
}

impl Elementwise for Orientation3 {}

impl Orientation3 {
    pub const ZERO: Self = Self { pitch: 0.0, roll: 0.0, yaw: 0.0 };

    /// Lower bound applied to pitch after look updates
    pub const PITCH_MIN: f32 = -180.0;
    /// Upper bound applied to pitch after look updates
    pub const PITCH_MAX: f32 = 0.0;

    #[inline]
    pub const fn new(pitch: f32, roll: f32, yaw: f32) -> Self {
        Self { pitch, roll, yaw }
    }

    /// Create from a `[pitch, roll, yaw]` array
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self { pitch: a[0], roll: a[1], yaw: a[2] }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.pitch, self.roll, self.yaw]
    }

    /// Copy with pitch replaced
    #[inline]
    pub fn with_pitch(self, pitch: f32) -> Self {
        Self { pitch, ..self }
    }

    /// Clamp pitch into `[PITCH_MIN, PITCH_MAX]`. Yaw and roll are left alone.
    #[inline]
    pub fn clamp_pitch(&mut self) -> &mut Self {
        self.pitch = self.pitch.clamp(Self::PITCH_MIN, Self::PITCH_MAX);
        self
    }

    /// Reinterpret as a raw vector (pitch→x, roll→y, yaw→z)
    #[inline]
    pub fn into_vector(self) -> Vector3 {
        Vector3::new(self.pitch, self.roll, self.yaw)
    }
}

impl From<[f32; 3]> for Orientation3 {
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vector3> for Orientation3 {
    fn from(v: Vector3) -> Self {
        v.into_orientation()
    }
}

impl From<Orientation3> for Vector3 {
    fn from(o: Orientation3) -> Self {
        o.into_vector()
    }
}

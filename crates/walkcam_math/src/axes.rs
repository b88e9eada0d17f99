//! Movement axes derived from an orientation
//!
//! The basis is built straight from the sines and cosines of the three
//! angles (pitch in x, roll in y, yaw in z, all in degrees). It is not the
//! textbook Euler-to-matrix construction and is not orthonormal once roll is
//! non-zero. Callers depend on these exact numbers, so keep the formulas as
//! they are.

use serde::{Serialize, Deserialize};

use crate::orientation::Orientation3;
use crate::vec3::Vector3;

/// Local movement frame of a camera
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementAxes {
    pub forward: Vector3,
    pub left: Vector3,
    pub up: Vector3,
}

/// Derive the forward/left/up axes for `angle`
///
/// ```text
/// forward = ( sz*-sx,              cz*-sx,              -cx    )
/// left    = ( sz*sy*sx + cy*cz,    cz*sy*sx + cy*-sz,    sx*sy )
/// up      = ( sz*cy*cx - sy*cz,    cz*cy*cx - sy*-sz,   -sx*cy )
/// ```
pub fn movement_axes(angle: &Orientation3) -> MovementAxes {
    let (sx, cx) = angle.pitch.to_radians().sin_cos();
    // TODO: roll terms in `left`/`up` look wrong for non-zero roll; needs a decision before anyone relies on roll
    let (sy, cy) = angle.roll.to_radians().sin_cos();
    let (sz, cz) = angle.yaw.to_radians().sin_cos();

    let forward = Vector3::new(sz * -sx, cz * -sx, -cx);
    let left = Vector3::new((sz * sy * sx) + (cy * cz), (cz * sy * sx) + (cy * -sz), sx * sy);
    let up = Vector3::new((sz * cy * cx) + -(sy * cz), (cz * cy * cx) + -(sy * -sz), -sx * cy);

    MovementAxes { forward, left, up }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_vec_near(actual: Vector3, expected: Vector3) {
        assert!(
            (actual - expected).length() < EPSILON,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_zero_orientation() {
        let axes = movement_axes(&Orientation3::ZERO);
        assert_vec_near(axes.forward, Vector3::new(0.0, 0.0, -1.0));
        assert_vec_near(axes.left, Vector3::new(1.0, 0.0, 0.0));
        assert_vec_near(axes.up, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_walking_reference_pitch() {
        // Pitch -90 looks along +Y at yaw 0
        let axes = movement_axes(&Orientation3::new(-90.0, 0.0, 0.0));
        assert_vec_near(axes.forward, Vector3::new(0.0, 1.0, 0.0));
        assert_vec_near(axes.left, Vector3::new(1.0, 0.0, 0.0));
        assert_vec_near(axes.up, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_yaw_rotates_forward_in_ground_plane() {
        let axes = movement_axes(&Orientation3::new(-90.0, 0.0, 90.0));
        assert_vec_near(axes.forward, Vector3::new(1.0, 0.0, 0.0));
        assert_vec_near(axes.left, Vector3::new(0.0, -1.0, 0.0));
        assert_vec_near(axes.up, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_matches_formula_for_arbitrary_angles() {
        let angle = Orientation3::new(-67.5, 12.0, 45.0);
        let (sx, cx) = (-67.5f32).to_radians().sin_cos();
        let (sy, cy) = 12.0f32.to_radians().sin_cos();
        let (sz, cz) = 45.0f32.to_radians().sin_cos();

        let axes = movement_axes(&angle);
        assert_eq!(axes.forward, Vector3::new(sz * -sx, cz * -sx, -cx));
        assert_eq!(axes.left.z, sx * sy);
        assert_eq!(axes.up.z, -sx * cy);
    }

    #[test]
    fn test_non_zero_roll_is_not_orthonormal() {
        let axes = movement_axes(&Orientation3::new(-45.0, 30.0, 0.0));
        // left and up are no longer perpendicular once roll is involved
        assert!(axes.left.dot(axes.up).abs() > 0.5);
    }

    #[test]
    fn test_deterministic() {
        let angle = Orientation3::new(-120.0, 3.5, 1234.5);
        assert_eq!(movement_axes(&angle), movement_axes(&angle));
    }
}

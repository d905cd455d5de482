//! # Rotation matrix and angular error metrics
//!
//! The two angular error measures reported after a flight both come from the
//! rotation matrix of a pose sample, compared against the identity (level,
//! yaw-zero) orientation:
//!
//! * [`RotationMatrix::angle_from_identity`]: the full rotation angle,
//!   yaw included.
//! * [`RotationMatrix::tilt_angle`]: how far the body up-axis leans away
//!   from world-up, ignoring yaw entirely. This is the "leveling" error: a
//!   quad spinning on the spot is tilted by nothing.

use crate::math::clamp_unit;

/// A 3×3 row-major rotation matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix {
    rows: [[f64; 3]; 3],
}

impl RotationMatrix {
    /// The identity rotation.
    pub const IDENTITY: RotationMatrix = RotationMatrix::from_rows([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Build a matrix from its rows.
    ///
    /// The angular error methods assume a proper rotation matrix; they are
    /// well-defined for the matrices produced by
    /// [`Quaternion::rotation_matrix`](crate::Quaternion::rotation_matrix)
    /// from a unit quaternion.
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Entry at `row`, `col` (zero-based).
    pub fn entry(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> f64 {
        self.rows[0][0] + self.rows[1][1] + self.rows[2][2]
    }

    /// Rotation angle relative to the identity orientation, in `[0, π]`.
    ///
    /// Computed from the trace: `acos((trace - 1) / 2)`. The argument is
    /// clamped to `[-1, 1]` first, since for near-identity matrices the trace
    /// regularly overshoots 3 by a few ulps.
    pub fn angle_from_identity(&self) -> f64 {
        clamp_unit((self.trace() - 1.0) / 2.0).acos()
    }

    /// Angle between the body up-axis and world-up, in `[0, π]`.
    ///
    /// The last matrix entry is the z-component of the rotated z-axis, i.e.
    /// the cosine of the sought angle, so this is `acos(R22)` (clamped).
    /// Yaw does not move the up-axis and therefore does not contribute.
    pub fn tilt_angle(&self) -> f64 {
        clamp_unit(self.rows[2][2]).acos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Quaternion;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn identity_has_zero_errors() {
        assert_relative_eq!(
            RotationMatrix::IDENTITY.angle_from_identity(),
            0.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(RotationMatrix::IDENTITY.tilt_angle(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn pure_yaw_rotates_but_does_not_tilt() {
        let r = Quaternion::new(0.0, 0.0, FRAC_PI_4.sin(), FRAC_PI_4.cos()).rotation_matrix();
        assert_relative_eq!(r.angle_from_identity(), FRAC_PI_2, epsilon = 1e-9);
        assert_relative_eq!(r.tilt_angle(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn pure_roll_rotates_and_tilts_equally() {
        let r = Quaternion::new(FRAC_PI_4.sin(), 0.0, 0.0, FRAC_PI_4.cos()).rotation_matrix();
        assert_relative_eq!(r.angle_from_identity(), FRAC_PI_2, epsilon = 1e-9);
        assert_relative_eq!(r.tilt_angle(), FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn trace_overshoot_clamps_to_zero_angle() {
        // trace - 1 = 2.0000001, slightly past the acos domain.
        let r = RotationMatrix::from_rows([
            [1.00000005, 0.0, 0.0],
            [0.0, 1.00000005, 0.0],
            [0.0, 0.0, 1.0],
        ]);
        let angle = r.angle_from_identity();
        assert!(angle.is_finite());
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn r22_overshoot_clamps_to_zero_tilt() {
        let r = RotationMatrix::from_rows([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0000001],
        ]);
        assert_eq!(r.tilt_angle(), 0.0);
    }

    #[test]
    fn half_turn_reaches_pi() {
        // 180° about x: trace = 1 + cos + cos = -1.
        let r = Quaternion::new(1.0, 0.0, 0.0, 0.0).rotation_matrix();
        assert_relative_eq!(r.angle_from_identity(), std::f64::consts::PI, epsilon = 1e-9);
        assert_relative_eq!(r.tilt_angle(), std::f64::consts::PI, epsilon = 1e-9);
    }
}

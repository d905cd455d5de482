//! # Orientation quaternion
//!
//! Recorded orientations come in as `(x, y, z, w)` quaternions, one per pose
//! sample. Every derived quantity (rotation matrix, Euler angles) requires a
//! unit quaternion, and logged values are close to unit norm but rarely exact,
//! so the entry point into any analysis is [`Quaternion::normalized`].
//!
//! A zero-norm quaternion carries no orientation at all: normalizing it is
//! reported as [`Error::DegenerateQuaternion`](crate::Error) instead of letting
//! a NaN drift into the computed statistics.

use crate::math::{clamp_unit, RotationMatrix};
use crate::{Error, Result};

/// An orientation in the world frame as a `(x, y, z, w)` quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    /// X component of the vector part.
    pub x: f64,
    /// Y component of the vector part.
    pub y: f64,
    /// Z component of the vector part.
    pub z: f64,
    /// Scalar part.
    pub w: f64,
}

impl Quaternion {
    /// The identity orientation.
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    /// Create a quaternion from its components, vector part first.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Euclidean norm of the four components.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Return the unit quaternion with the same orientation.
    ///
    /// Logged quaternions drift away from unit norm (the estimator quantizes,
    /// the radio truncates), so they are re-normalized before any rotation
    /// matrix or Euler angles are derived from them.
    ///
    /// Returns [`Error::DegenerateQuaternion`] if the norm is zero or not
    /// finite; such input cannot be repaired and the caller must treat the
    /// sample as invalid.
    pub fn normalized(&self) -> Result<Quaternion> {
        let norm = self.norm();
        if norm == 0.0 || !norm.is_finite() {
            return Err(Error::DegenerateQuaternion);
        }
        Ok(Quaternion::new(
            self.x / norm,
            self.y / norm,
            self.z / norm,
            self.w / norm,
        ))
    }

    /// Derive the rotation matrix for this orientation.
    ///
    /// Uses the standard quaternion-to-matrix formula:
    ///
    /// ```text
    /// | 1-2y²-2z²   2xy-2zw     2xz+2yw   |
    /// | 2xy+2zw     1-2x²-2z²   2yz-2xw   |
    /// | 2xz-2yw     2yz+2xw     1-2x²-2y² |
    /// ```
    ///
    /// The result is orthonormal (up to floating-point error) only when `self`
    /// is unit-norm; call [`Quaternion::normalized`] first.
    pub fn rotation_matrix(&self) -> RotationMatrix {
        let Quaternion { x, y, z, w } = *self;

        RotationMatrix::from_rows([
            [
                1.0 - 2.0 * y * y - 2.0 * z * z,
                2.0 * x * y - 2.0 * z * w,
                2.0 * x * z + 2.0 * y * w,
            ],
            [
                2.0 * x * y + 2.0 * z * w,
                1.0 - 2.0 * x * x - 2.0 * z * z,
                2.0 * y * z - 2.0 * x * w,
            ],
            [
                2.0 * x * z - 2.0 * y * w,
                2.0 * y * z + 2.0 * x * w,
                1.0 - 2.0 * x * x - 2.0 * y * y,
            ],
        ])
    }

    /// Decompose this orientation into aerospace (Z-Y-X, yaw-pitch-roll)
    /// Euler angles, in radians.
    ///
    /// The `asin` argument for pitch is clamped to `[-1, 1]`: at the
    /// gimbal-lock boundary (pitch = ±90°) floating-point overshoot would
    /// otherwise produce a NaN.
    ///
    /// Only meaningful for unit quaternions; call [`Quaternion::normalized`]
    /// first.
    pub fn euler_angles(&self) -> EulerAngles {
        let Quaternion { x, y, z, w } = *self;

        EulerAngles {
            roll: (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y)),
            pitch: clamp_unit(2.0 * (w * y - x * z)).asin(),
            yaw: (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z)),
        }
    }
}

/// An orientation decomposed into aerospace Euler angles, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    /// Rotation about the body x-axis.
    pub roll: f64,
    /// Rotation about the body y-axis.
    pub pitch: f64,
    /// Rotation about the world z-axis.
    pub yaw: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn yaw_90() -> Quaternion {
        Quaternion::new(0.0, 0.0, FRAC_PI_4.sin(), FRAC_PI_4.cos())
    }

    fn roll_90() -> Quaternion {
        Quaternion::new(FRAC_PI_4.sin(), 0.0, 0.0, FRAC_PI_4.cos())
    }

    #[test]
    fn normalized_returns_unit_norm() {
        let q = Quaternion::new(1.0, -2.0, 3.0, -4.0).normalized().unwrap();
        assert_relative_eq!(q.norm(), 1.0, epsilon = 1e-9);

        let tiny = Quaternion::new(1e-8, 0.0, 0.0, 1e-8).normalized().unwrap();
        assert_relative_eq!(tiny.norm(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn normalized_preserves_orientation() {
        let q = Quaternion::new(0.0, 0.0, 2.0, 2.0).normalized().unwrap();
        let expected = yaw_90();
        assert_relative_eq!(q.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(q.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(q.z, expected.z, epsilon = 1e-12);
        assert_relative_eq!(q.w, expected.w, epsilon = 1e-12);
    }

    #[test]
    fn normalized_rejects_zero_norm() {
        let err = Quaternion::new(0.0, 0.0, 0.0, 0.0).normalized().unwrap_err();
        assert!(matches!(err, Error::DegenerateQuaternion));

        let err = Quaternion::new(f64::NAN, 0.0, 0.0, 1.0)
            .normalized()
            .unwrap_err();
        assert!(matches!(err, Error::DegenerateQuaternion));
    }

    #[test]
    fn identity_maps_to_identity_matrix() {
        let r = Quaternion::IDENTITY.rotation_matrix();
        for row in 0..3 {
            for col in 0..3 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_relative_eq!(r.entry(row, col), expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn rotation_matrix_is_orthonormal_for_unit_input() {
        let quaternions = [
            yaw_90(),
            roll_90(),
            Quaternion::new(0.1, -0.4, 0.2, 0.8).normalized().unwrap(),
            Quaternion::new(-0.5, 0.5, -0.5, 0.5),
        ];

        for q in quaternions {
            let r = q.rotation_matrix();
            // Rᵀ·R must be the identity.
            for i in 0..3 {
                for j in 0..3 {
                    let dot: f64 = (0..3).map(|k| r.entry(k, i) * r.entry(k, j)).sum();
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert_relative_eq!(dot, expected, epsilon = 1e-6);
                }
            }
        }
    }

    #[test]
    fn euler_angles_of_pure_yaw() {
        let angles = yaw_90().euler_angles();
        assert_relative_eq!(angles.roll, 0.0, epsilon = 1e-9);
        assert_relative_eq!(angles.pitch, 0.0, epsilon = 1e-9);
        assert_relative_eq!(angles.yaw, FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn euler_angles_of_pure_roll() {
        let angles = roll_90().euler_angles();
        assert_relative_eq!(angles.roll, FRAC_PI_2, epsilon = 1e-9);
        assert_relative_eq!(angles.pitch, 0.0, epsilon = 1e-9);
        assert_relative_eq!(angles.yaw, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn euler_pitch_survives_gimbal_lock() {
        // Pure 90° pitch puts the asin argument exactly at the domain edge;
        // rounding may push it past 1.
        let q = Quaternion::new(0.0, FRAC_PI_4.sin(), 0.0, FRAC_PI_4.cos());
        let angles = q.euler_angles();
        assert!(angles.pitch.is_finite());
        assert_relative_eq!(angles.pitch, FRAC_PI_2, epsilon = 1e-6);
    }
}

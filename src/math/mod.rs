//! # Pose math
//!
//! Small, pure building blocks for working with recorded poses: a position
//! vector, an orientation quaternion and the rotation matrix derived from it.
//! All operations work on one sample at a time; mapping them over a whole
//! recording is the job of the [analysis](crate::analysis) module.
//!
//! Angles are in radians. The world frame is the usual flight-arena frame with
//! the z-axis pointing up; a quaternion is stored `(x, y, z, w)` as the
//! motion-capture recorder writes it.

mod quaternion;
mod rotation;
mod vector;

pub use quaternion::{EulerAngles, Quaternion};
pub use rotation::RotationMatrix;
pub use vector::Vector3;

/// Clamp a value to `[-1, 1]` before feeding it to `acos`/`asin`.
///
/// The trace sums and matrix entries used for the angular error metrics can
/// drift a few ulps outside the valid domain; that drift is expected numerical
/// noise and must not turn into a NaN.
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

//! # Pose error analysis
//!
//! Answers the post-flight question "how well did the quad hold its pose":
//! every recorded sample is compared against a fixed position setpoint and
//! the level orientation, and the resulting error series are summarized.
//!
//! Three scalar errors are derived per sample:
//!
//! * **euclidean**: distance between the measured position and the setpoint.
//! * **rotation**: the full angle between the measured attitude and level,
//!   yaw included.
//! * **leveling**: the tilt of the body up-axis away from world-up. A quad
//!   that holds altitude but slowly spins has a growing rotation error and a
//!   leveling error of zero.
//!
//! The per-sample Euler angle series is derived alongside so a report can
//! show which axis misbehaved.

use crate::analysis::stats::SeriesStats;
use crate::flightlog::PoseSample;
use crate::math::{EulerAngles, Vector3};
use crate::{Error, Result};

/// The scalar errors of one pose sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorMetrics {
    /// Distance between measured position and setpoint, in meters.
    pub euclidean_error: f64,
    /// Rotation angle away from the level orientation, in radians, `[0, π]`.
    pub rotation_error: f64,
    /// Tilt of the body up-axis away from world-up, in radians, `[0, π]`.
    pub leveling_error: f64,
}

impl ErrorMetrics {
    /// Computes the errors of a single sample against a position setpoint.
    ///
    /// The sample's quaternion is normalized before the rotation matrix is
    /// derived; a degenerate quaternion is an error.
    pub fn compute(sample: &PoseSample, setpoint: Vector3) -> Result<ErrorMetrics> {
        analyze_sample(sample, setpoint).map(|(metrics, _)| metrics)
    }
}

/// Full analysis of one recorded pose series.
#[derive(Debug, Clone)]
pub struct PoseReport {
    /// Per-sample errors, in log order.
    pub metrics: Vec<ErrorMetrics>,
    /// Per-sample attitude as Z-Y-X Euler angles, in log order.
    pub attitude: Vec<EulerAngles>,
    /// Summary of the Euclidean position error series.
    pub euclidean: SeriesStats,
    /// Summary of the rotation error series.
    pub rotation: SeriesStats,
    /// Summary of the leveling error series.
    pub leveling: SeriesStats,
}

fn analyze_sample(sample: &PoseSample, setpoint: Vector3) -> Result<(ErrorMetrics, EulerAngles)> {
    let attitude = sample.attitude.normalized()?;
    let rotation = attitude.rotation_matrix();

    let metrics = ErrorMetrics {
        euclidean_error: sample.position.distance_to(setpoint),
        rotation_error: rotation.angle_from_identity(),
        leveling_error: rotation.tilt_angle(),
    };

    Ok((metrics, attitude.euler_angles()))
}

/// Analyzes a recorded pose series against a fixed position setpoint.
///
/// Fails on an empty series and stops at the first invalid sample; the error
/// carries the zero-based index of the sample that failed.
pub fn analyze(samples: &[PoseSample], setpoint: Vector3) -> Result<PoseReport> {
    if samples.is_empty() {
        return Err(Error::EmptyLog);
    }

    let mut metrics = Vec::with_capacity(samples.len());
    let mut attitude = Vec::with_capacity(samples.len());

    for (index, sample) in samples.iter().enumerate() {
        let (sample_metrics, euler) = analyze_sample(sample, setpoint)
            .map_err(|cause| Error::InvalidSample(index, Box::new(cause)))?;
        metrics.push(sample_metrics);
        attitude.push(euler);
    }

    let euclidean: Vec<f64> = metrics.iter().map(|m| m.euclidean_error).collect();
    let rotation: Vec<f64> = metrics.iter().map(|m| m.rotation_error).collect();
    let leveling: Vec<f64> = metrics.iter().map(|m| m.leveling_error).collect();

    // The unwraps are guaranteed to succeed (one series value per sample).
    Ok(PoseReport {
        euclidean: SeriesStats::of(&euclidean).unwrap(),
        rotation: SeriesStats::of(&rotation).unwrap(),
        leveling: SeriesStats::of(&leveling).unwrap(),
        metrics,
        attitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Quaternion;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};

    fn sample(position: Vector3, attitude: Quaternion) -> PoseSample {
        PoseSample {
            time: 0.0,
            position,
            attitude,
        }
    }

    #[test]
    fn level_hover_at_setpoint_has_zero_errors() {
        let setpoint = Vector3::new(0.0, 0.0, 1.0);
        let metrics =
            ErrorMetrics::compute(&sample(setpoint, Quaternion::IDENTITY), setpoint).unwrap();

        assert_relative_eq!(metrics.euclidean_error, 0.0, epsilon = 1e-12);
        assert_relative_eq!(metrics.rotation_error, 0.0, epsilon = 1e-9);
        assert_relative_eq!(metrics.leveling_error, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn offset_position_yields_euclidean_distance() {
        let setpoint = Vector3::new(0.0, 0.0, 1.0);
        let metrics = ErrorMetrics::compute(
            &sample(Vector3::new(1.0, 1.0, 1.0), Quaternion::IDENTITY),
            setpoint,
        )
        .unwrap();

        assert_relative_eq!(metrics.euclidean_error, SQRT_2, epsilon = 1e-12);
    }

    #[test]
    fn yawed_sample_rotates_without_tilting() {
        let yaw_90 = Quaternion::new(0.0, 0.0, FRAC_PI_4.sin(), FRAC_PI_4.cos());
        let metrics =
            ErrorMetrics::compute(&sample(Vector3::ZERO, yaw_90), Vector3::ZERO).unwrap();

        assert_relative_eq!(metrics.rotation_error, FRAC_PI_2, epsilon = 1e-9);
        assert_relative_eq!(metrics.leveling_error, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn scaled_quaternion_is_normalized_before_analysis() {
        // Same orientation as identity, stored with norm 2.
        let metrics = ErrorMetrics::compute(
            &sample(Vector3::ZERO, Quaternion::new(0.0, 0.0, 0.0, 2.0)),
            Vector3::ZERO,
        )
        .unwrap();

        assert_relative_eq!(metrics.rotation_error, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn series_statistics_match_known_values() {
        let setpoint = Vector3::ZERO;
        let samples: Vec<PoseSample> = (0..5)
            .map(|i| sample(Vector3::new(0.0, 0.0, i as f64), Quaternion::IDENTITY))
            .collect();

        let report = analyze(&samples, setpoint).unwrap();

        assert_eq!(report.metrics.len(), 5);
        assert_eq!(report.attitude.len(), 5);
        assert_relative_eq!(report.euclidean.mean, 2.0, epsilon = 1e-12);
        assert_relative_eq!(report.euclidean.std_dev, 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(report.rotation.mean, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn degenerate_sample_reports_its_index() {
        let samples = vec![
            sample(Vector3::ZERO, Quaternion::IDENTITY),
            sample(Vector3::ZERO, Quaternion::new(0.0, 0.0, 0.0, 0.0)),
        ];

        match analyze(&samples, Vector3::ZERO) {
            Err(Error::InvalidSample(1, cause)) => {
                assert!(matches!(*cause, Error::DegenerateQuaternion));
            }
            other => panic!("expected InvalidSample(1, _), got {:?}", other),
        }
    }

    #[test]
    fn empty_series_is_rejected() {
        assert!(matches!(
            analyze(&[], Vector3::ZERO),
            Err(Error::EmptyLog)
        ));
    }
}

//! # Controller tracking analysis
//!
//! Compares the position the controller was asked to reach against the
//! on-board state estimate, sample by sample. Unlike the pose analysis this
//! needs no fixed setpoint; the target moves and is part of every sample.

use crate::analysis::stats::SeriesStats;
use crate::flightlog::PositionSample;
use crate::{Error, Result};

/// Tracking performance over one recorded series.
#[derive(Debug, Clone)]
pub struct TrackingReport {
    /// Per-sample distance between target and estimate, in meters, log order.
    pub errors: Vec<f64>,
    /// Summary of the error series.
    pub stats: SeriesStats,
}

/// Analyzes how closely the state estimate tracked the commanded target.
///
/// The whole slice is analyzed. Telemetry logs usually start before the
/// controller does; discarding that transient is the caller's cut to make
/// (`&samples[100..]` or similar).
pub fn analyze(samples: &[PositionSample]) -> Result<TrackingReport> {
    let errors: Vec<f64> = samples
        .iter()
        .map(|sample| sample.target.distance_to(sample.actual))
        .collect();

    let stats = SeriesStats::of(&errors).ok_or(Error::EmptyLog)?;

    Ok(TrackingReport { errors, stats })
}

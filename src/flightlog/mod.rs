//! # Flight log model
//!
//! The CSV formats the flight tools exchange, a reader for analysis and a
//! recorder for producing new logs.
//!
//! Two layouts exist:
//!
//! * **Pose log**: `time,x,y,z,qx,qy,qz,qw`, one row per motion-capture
//!   frame, written with a header row by [`PoseLogWriter`].
//! * **Position log**: six columns, controller target followed by on-board
//!   state estimate (`ctrltarget.*`, `stateEstimate.*`). The telemetry
//!   logger writes it without a header.
//!
//! The reader accepts both logs with or without their header row: the first
//! line is taken as a header exactly when its first field is not a number.

mod reader;
mod recorder;

pub use reader::{read_pose_log, read_position_log};
pub use recorder::{record_stream, PoseLogWriter, RecordingInfo};

use crate::math::{Quaternion, Vector3};

/// Header row of a pose log.
pub const POSE_LOG_HEADER: &str = "time,x,y,z,qx,qy,qz,qw";

/// One motion-capture pose sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseSample {
    /// Seconds since the recording started.
    pub time: f64,
    /// Position in the world frame, meters.
    pub position: Vector3,
    /// Attitude quaternion, `x, y, z, w` component order as recorded.
    pub attitude: Quaternion,
}

/// One telemetry sample pairing controller target and state estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    /// Position the controller was steering towards.
    pub target: Vector3,
    /// On-board position estimate at the same instant.
    pub actual: Vector3,
}

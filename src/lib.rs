//! # Crazyflie post-flight toolkit
//!
//! This crate covers the ground side of flight-testing a Crazyflie: generating
//! the waypoint sequences a test flies, handling gamepad teleoperation,
//! recording the motion-capture pose stream to CSV, and analyzing the recorded
//! logs once the props stop. Flying itself (radio link, setpoints, trajectory
//! upload) stays in the flight stack; this crate produces its inputs and
//! consumes its outputs.
//!
//! ## Components
//!
//! | Module | Role |
//! |--------|------|
//! | [math] | Quaternions, rotation matrices and the angular error metrics |
//! | [analysis] | Pose error and tracking reports over recorded series |
//! | [flightlog] | The CSV log model: sample types, reader, recorder |
//! | [sequence] | Waypoint sequence generation for hover tests |
//! | [teleop] | Gamepad button handling and the flight command seam |
//!
//! ## Usage
//!
//! The flow around one flight test is:
//!  - Generate a waypoint [sequence] for the test (or fly it by hand through
//!    [teleop]).
//!  - While flying, record the pose stream into a CSV log with
//!    [flightlog::record_stream].
//!  - Afterwards, load the log and run the [analysis] against the hover
//!    setpoint to get the error statistics.
//!
//! Analysis is synchronous and pure. Recording and teleoperation are async
//! but executor agnostic; the demo binaries run them under tokio.
//!
//! For example, the post-flight half:
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! use crazyflie_postflight::{analysis::pose_error, flightlog, Vector3};
//!
//! let log = File::open("hover.csv")?;
//! let samples = flightlog::read_pose_log(BufReader::new(log))?;
//!
//! let report = pose_error::analyze(&samples, Vector3::new(0.0, 0.0, 1.0))?;
//! println!(
//!     "avg. euclidean error: {:.3} m, stddev: {:.3}",
//!     report.euclidean.mean, report.euclidean.std_dev
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;

pub mod analysis;
pub mod flightlog;
pub mod math;
pub mod sequence;
pub mod teleop;

pub use crate::error::{Error, Result};
pub use crate::flightlog::{PoseSample, PositionSample};
pub use crate::math::{EulerAngles, Quaternion, RotationMatrix, Vector3};

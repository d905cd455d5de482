//! # Post-flight analysis
//!
//! Everything that turns a recorded flight log into numbers: per-sample pose
//! errors against a hover setpoint, controller tracking errors against a
//! moving target, and the series statistics both reports are built from.
//!
//! All analysis is synchronous and pure. Callers load a log (see
//! [`crate::flightlog`]), slice it as they see fit, and get a typed report
//! back in one call.

pub mod pose_error;
pub mod stats;
pub mod tracking;

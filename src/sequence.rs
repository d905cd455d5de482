//! # Flight-test waypoint sequences
//!
//! The hover tests analyzed by this crate are flown as waypoint sequences:
//! the quad is repeatedly sent away from its hover point and called back, so
//! the recorded log exercises the controller in every direction around the
//! setpoint. This module generates those sequences; flying them is the job
//! of the external flight stack.

use std::ops::Range;

use rand::Rng;

/// A position setpoint with yaw, in the units the flight stack flies
/// (`f32`, meters and radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// X position, meters.
    pub x: f32,
    /// Y position, meters.
    pub y: f32,
    /// Z position, meters.
    pub z: f32,
    /// Yaw, radians.
    pub yaw: f32,
}

impl Waypoint {
    /// Waypoint with explicit yaw.
    pub const fn new(x: f32, y: f32, z: f32, yaw: f32) -> Self {
        Waypoint { x, y, z, yaw }
    }

    /// Waypoint facing yaw zero, the attitude every hover test holds.
    pub const fn hover_at(x: f32, y: f32, z: f32) -> Self {
        Waypoint::new(x, y, z, 0.0)
    }
}

/// The box random deviations are drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviationBounds {
    /// X range, meters.
    pub x: Range<f32>,
    /// Y range, meters.
    pub y: Range<f32>,
    /// Z range, meters.
    pub z: Range<f32>,
}

/// The box flown around a 1 m hover: ±0.3 m sideways, ±0.2 m vertically.
impl Default for DeviationBounds {
    fn default() -> Self {
        DeviationBounds {
            x: -0.3..0.3,
            y: -0.3..0.3,
            z: 0.8..1.2,
        }
    }
}

/// Generates the deviate-and-return hover test.
///
/// Each pair is one uniformly random waypoint inside `bounds` followed by
/// `home`, so the quad keeps getting pushed off its hover point and pulled
/// back. The returned list has `2 * pairs` waypoints.
pub fn deviate_and_return(
    rng: &mut impl Rng,
    pairs: usize,
    bounds: &DeviationBounds,
    home: Waypoint,
) -> Vec<Waypoint> {
    let mut waypoints = Vec::with_capacity(pairs * 2);

    for _ in 0..pairs {
        waypoints.push(Waypoint::hover_at(
            rng.gen_range(bounds.x.clone()),
            rng.gen_range(bounds.y.clone()),
            rng.gen_range(bounds.z.clone()),
        ));
        waypoints.push(home);
    }

    waypoints
}

/// An ordered waypoint list flown with a fixed per-leg travel time.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    /// Waypoints in flight order.
    pub waypoints: Vec<Waypoint>,
    /// Seconds the flight stack gets to reach each waypoint.
    pub leg_duration: f32,
}

impl Sequence {
    /// Total flight time of the sequence, seconds.
    pub fn duration(&self) -> f32 {
        self.waypoints.len() as f32 * self.leg_duration
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}

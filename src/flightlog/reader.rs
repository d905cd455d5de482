//! # Log file parsing
//!
//! Both log layouts are plain comma-separated numbers, so records are split
//! and parsed by hand. Parse errors point at the log line (1-based) and the
//! field by name; a flight log is usually inspected in an editor right after
//! the error, so the message has to say where to look.

use std::io::BufRead;

use crate::flightlog::{PoseSample, PositionSample};
use crate::math::{Quaternion, Vector3};
use crate::{Error, Result};

const POSE_FIELDS: [&str; 8] = ["time", "x", "y", "z", "qx", "qy", "qz", "qw"];
const POSITION_FIELDS: [&str; 6] = [
    "ctrltarget.x",
    "ctrltarget.y",
    "ctrltarget.z",
    "stateEstimate.x",
    "stateEstimate.y",
    "stateEstimate.z",
];

/// Reads a complete pose log (`time,x,y,z,qx,qy,qz,qw`).
///
/// Blank lines are skipped. A header row, if present, must be the first
/// non-blank line. Samples are returned in file order; nothing is validated
/// beyond the record format (a degenerate quaternion surfaces later, during
/// analysis, with its sample index).
pub fn read_pose_log(reader: impl BufRead) -> Result<Vec<PoseSample>> {
    read_records(reader, parse_pose_record)
}

/// Reads a complete position log (`ctrltarget.*` then `stateEstimate.*`).
pub fn read_position_log(reader: impl BufRead) -> Result<Vec<PositionSample>> {
    read_records(reader, parse_position_record)
}

fn read_records<T>(
    reader: impl BufRead,
    parse: impl Fn(usize, &str) -> Result<T>,
) -> Result<Vec<T>> {
    let mut records = Vec::new();
    let mut seen_content = false;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let first = !seen_content;
        seen_content = true;
        if first && looks_like_header(line) {
            continue;
        }

        records.push(parse(index + 1, line)?);
    }

    Ok(records)
}

/// A line is a header when its first field is not a number.
fn looks_like_header(line: &str) -> bool {
    let first_field = line.split(',').next().unwrap_or("");
    first_field.trim().parse::<f64>().is_err()
}

fn parse_pose_record(line_number: usize, line: &str) -> Result<PoseSample> {
    let v = parse_fields(line_number, line, &POSE_FIELDS)?;

    Ok(PoseSample {
        time: v[0],
        position: Vector3::new(v[1], v[2], v[3]),
        attitude: Quaternion::new(v[4], v[5], v[6], v[7]),
    })
}

fn parse_position_record(line_number: usize, line: &str) -> Result<PositionSample> {
    let v = parse_fields(line_number, line, &POSITION_FIELDS)?;

    Ok(PositionSample {
        target: Vector3::new(v[0], v[1], v[2]),
        actual: Vector3::new(v[3], v[4], v[5]),
    })
}

fn parse_fields<const N: usize>(
    line_number: usize,
    line: &str,
    names: &[&str; N],
) -> Result<[f64; N]> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != N {
        return Err(Error::MalformedRecord(format!(
            "line {}: expected {} comma-separated fields, found {}",
            line_number,
            N,
            fields.len()
        )));
    }

    let mut values = [0.0; N];
    for ((value, field), name) in values.iter_mut().zip(&fields).zip(names) {
        *value = field.parse().map_err(|_| {
            Error::MalformedRecord(format!(
                "line {}: field '{}' is not a number: '{}'",
                line_number, name, field
            ))
        })?;
    }

    Ok(values)
}

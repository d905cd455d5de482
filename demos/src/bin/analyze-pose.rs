// -*- coding: utf-8 -*-
//
//     ||          ____  _ __
//  +------+      / __ )(_) /_______________ _____  ___
//  | 0xBC |     / __  / / __/ ___/ ___/ __ `/_  / / _ \
//  +------+    / /_/ / / /_/ /__/ /  / /_/ / / /_/  __/
//   ||  ||    /_____/_/\__/\___/_/   \__,_/ /___/\___/
//
//  Copyright (C) 2025 Bitcraze AB
//
//  This program is free software; you can redistribute it and/or
//  modify it under the terms of the GNU General Public License
//  as published by the Free Software Foundation; either version 2
//  of the License, or (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//  You should have received a copy of the GNU General Public License
//  along with this program. If not, see <https://www.gnu.org/licenses/>.


// Post-flight pose error report for a recorded hover test.
// Reads a pose log (time,x,y,z,qx,qy,qz,qw) and prints the error statistics
// against the hover setpoint.

use std::env;
use std::fs::File;
use std::io::BufReader;

use crazyflie_postflight::analysis::pose_error::{self, PoseReport};
use crazyflie_postflight::analysis::stats::SeriesStats;
use crazyflie_postflight::{flightlog, Vector3};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct Config {
    log_path: String,
    setpoint: Vector3,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut log_path = None;
    let mut setpoint = Vector3::new(0.0, 0.0, 1.0);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--setpoint" | "-s" => {
                i += 1;
                let value = args.get(i).ok_or("--setpoint needs a value")?;
                setpoint = parse_setpoint(value)?;
            }
            "--help" | "-h" => {
                return Err("Help requested".to_string());
            }
            arg if !arg.starts_with('-') => {
                if log_path.is_some() {
                    return Err("Multiple log files specified".to_string());
                }
                log_path = Some(arg.to_string());
            }
            _ => {
                return Err(format!("Unknown argument: {}", args[i]));
            }
        }
        i += 1;
    }

    let log_path = log_path.ok_or("Missing log file argument")?;

    Ok(Config { log_path, setpoint })
}

fn parse_setpoint(value: &str) -> Result<Vector3, String> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("Setpoint must be X,Y,Z: {}", value));
    }

    let mut components = [0.0; 3];
    for (component, part) in components.iter_mut().zip(&parts) {
        *component = part
            .trim()
            .parse()
            .map_err(|_| format!("Setpoint component is not a number: {}", part))?;
    }

    Ok(Vector3::new(components[0], components[1], components[2]))
}

fn print_usage(program: &str) {
    eprintln!(
        r#"
Usage: {} [OPTIONS] <POSE_LOG>

Print pose error statistics of a recorded hover test.

OPTIONS:
    -s, --setpoint X,Y,Z   Hover setpoint in meters (default 0,0,1)
    -h, --help             Show this help message

EXAMPLES:
    {} hover.csv
    {} --setpoint 0,0,0.75 hover.csv
"#,
        program, program, program
    );
}

fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let log = File::open(&config.log_path)?;
    let samples = flightlog::read_pose_log(BufReader::new(log))?;

    let report = pose_error::analyze(&samples, config.setpoint)?;

    let span = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => last.time - first.time,
        _ => 0.0,
    };
    println!(
        "{}: {} samples over {:.1} s",
        config.log_path,
        samples.len(),
        span
    );

    println!(
        "avg. euclidean error: {:.3} m, stddev: {:.3}",
        report.euclidean.mean, report.euclidean.std_dev
    );
    println!(
        "avg. rotation error (no yaw): {:.3} deg, stddev: {:.3}",
        report.leveling.mean.to_degrees(),
        report.leveling.std_dev.to_degrees()
    );
    println!(
        "avg. rotation error (with yaw): {:.3} deg, stddev: {:.3}",
        report.rotation.mean.to_degrees(),
        report.rotation.std_dev.to_degrees()
    );

    print_attitude_summary(&report);

    Ok(())
}

fn print_attitude_summary(report: &PoseReport) {
    let roll: Vec<f64> = report.attitude.iter().map(|e| e.roll).collect();
    let pitch: Vec<f64> = report.attitude.iter().map(|e| e.pitch).collect();
    let yaw: Vec<f64> = report.attitude.iter().map(|e| e.yaw).collect();

    for (name, series) in [("roll", roll), ("pitch", pitch), ("yaw", yaw)] {
        if let Some(stats) = SeriesStats::of(&series) {
            println!(
                "avg. {}: {:.3} deg, stddev: {:.3}",
                name,
                stats.mean.to_degrees(),
                stats.std_dev.to_degrees()
            );
        }
    }
}

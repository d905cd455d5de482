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


// Dry run of a hover test without a quad or a mocap system.
// Generates a deviate-and-return waypoint sequence, synthesizes noisy pose
// samples along it and records them through the async recording pipeline.
// The resulting log is a valid input for analyze-pose.

use std::env;

use crazyflie_postflight::flightlog::{self, PoseLogWriter, PoseSample};
use crazyflie_postflight::sequence::{deviate_and_return, DeviationBounds, Sequence, Waypoint};
use crazyflie_postflight::{Quaternion, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Simulated motion-capture frame rate.
const MOCAP_RATE: f64 = 50.0;
// Travel time per leg, as flown on the real range.
const LEG_DURATION: f32 = 0.6;

const HOME: Waypoint = Waypoint::hover_at(0.0, 0.0, 1.0);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
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

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let sequence = Sequence {
        waypoints: deviate_and_return(&mut rng, config.pairs, &DeviationBounds::default(), HOME),
        leg_duration: LEG_DURATION,
    };
    println!(
        "flight plan: {} waypoints, {:.1} s",
        sequence.waypoints.len(),
        sequence.duration()
    );

    let (tx, rx) = flume::unbounded();
    let producer = tokio::spawn(async move {
        let mut time = 0.0;
        let mut position = waypoint_position(&HOME);

        for waypoint in &sequence {
            let target = waypoint_position(waypoint);
            let steps = (f64::from(sequence.leg_duration) * MOCAP_RATE) as usize;

            for step in 0..steps {
                let progress = (step + 1) as f64 / steps as f64;
                let sample = PoseSample {
                    time,
                    position: Vector3::new(
                        lerp(position.x, target.x, progress) + rng.gen_range(-0.02..0.02),
                        lerp(position.y, target.y, progress) + rng.gen_range(-0.02..0.02),
                        lerp(position.z, target.z, progress) + rng.gen_range(-0.02..0.02),
                    ),
                    attitude: wobble(&mut rng),
                };

                if tx.send_async(sample).await.is_err() {
                    return;
                }
                time += 1.0 / MOCAP_RATE;
            }

            position = target;
        }
    });

    let writer = PoseLogWriter::create(&config.output)?;
    let info = flightlog::record_stream(rx.into_stream(), writer).await?;
    producer.await?;

    println!(
        "recorded {} samples over {:.1} s to {}",
        info.samples, info.duration, config.output
    );

    Ok(())
}

struct Config {
    output: String,
    pairs: usize,
    seed: Option<u64>,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut output = None;
    let mut pairs = 100;
    let mut seed = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--pairs" | "-p" => {
                i += 1;
                let value = args.get(i).ok_or("--pairs needs a value")?;
                pairs = value
                    .parse()
                    .map_err(|_| format!("Pair count is not a number: {}", value))?;
            }
            "--seed" => {
                i += 1;
                let value = args.get(i).ok_or("--seed needs a value")?;
                seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Seed is not a number: {}", value))?,
                );
            }
            "--help" | "-h" => {
                return Err("Help requested".to_string());
            }
            arg if !arg.starts_with('-') => {
                if output.is_some() {
                    return Err("Multiple output files specified".to_string());
                }
                output = Some(arg.to_string());
            }
            _ => {
                return Err(format!("Unknown argument: {}", args[i]));
            }
        }
        i += 1;
    }

    let output = output.ok_or("Missing output file argument")?;

    Ok(Config {
        output,
        pairs,
        seed,
    })
}

fn print_usage(program: &str) {
    eprintln!(
        r#"
Usage: {} [OPTIONS] <OUT_CSV>

Simulate a deviate-and-return hover test and record it as a pose log.

OPTIONS:
    -p, --pairs N   Deviate-and-return pairs to fly (default 100)
        --seed N    Seed the simulation for a reproducible log
    -h, --help      Show this help message

EXAMPLES:
    {} hover.csv
    {} --pairs 10 --seed 42 hover.csv
"#,
        program, program, program
    );
}

fn waypoint_position(waypoint: &Waypoint) -> Vector3 {
    Vector3::new(
        f64::from(waypoint.x),
        f64::from(waypoint.y),
        f64::from(waypoint.z),
    )
}

fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * progress
}

// Small random tilt around level, the way a hovering quad sits in mocap.
fn wobble(rng: &mut StdRng) -> Quaternion {
    Quaternion::new(
        rng.gen_range(-0.02..0.02),
        rng.gen_range(-0.02..0.02),
        rng.gen_range(-0.02..0.02),
        1.0,
    )
}

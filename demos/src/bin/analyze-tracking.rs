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


// Controller tracking report for a telemetry position log.
// Reads the six-column target/estimate log and prints how closely the
// on-board estimate followed the commanded target.

use std::env;
use std::fs::File;
use std::io::BufReader;

use crazyflie_postflight::analysis::tracking;
use crazyflie_postflight::flightlog;

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
    skip: usize,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut log_path = None;
    let mut skip = 100;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--skip" | "-s" => {
                i += 1;
                let value = args.get(i).ok_or("--skip needs a value")?;
                skip = value
                    .parse()
                    .map_err(|_| format!("Skip count is not a number: {}", value))?;
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

    Ok(Config { log_path, skip })
}

fn print_usage(program: &str) {
    eprintln!(
        r#"
Usage: {} [OPTIONS] <POSITION_LOG>

Print tracking error statistics of a telemetry position log.

OPTIONS:
    -s, --skip N   Samples to discard from the start of the log, before the
                   controller has engaged (default 100)
    -h, --help     Show this help message

EXAMPLES:
    {} positions.csv
    {} --skip 0 positions.csv
"#,
        program, program, program
    );
}

fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let log = File::open(&config.log_path)?;
    let samples = flightlog::read_position_log(BufReader::new(log))?;
    let analyzed = samples.get(config.skip..).unwrap_or(&[]);

    let report = tracking::analyze(analyzed)?;

    println!(
        "{}: {} samples analyzed ({} skipped)",
        config.log_path,
        analyzed.len(),
        samples.len() - analyzed.len()
    );
    println!(
        "avg. error: {:.3} m, stddev: {:.3}",
        report.stats.mean, report.stats.std_dev
    );

    Ok(())
}

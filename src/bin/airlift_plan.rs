// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Airlift Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI front end for the allocation engine.
//!
//! Reads a JSON manifest and fleet availability, runs [`airlift::allocate`]
//! and prints the resulting `AllocationResult` as JSON. Exit codes mirror
//! §6: 0 feasible, 1 partial, 2 infeasible, 3 invalid input.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use airlift::allocate::{AllocationPolicy, AllocationStatus, FleetAvailability, Mode};
use airlift::idgen::IncrementingIdGen;
use airlift::manifest::{classify, normalize, RawRecord};
use airlift::profile::{AircraftTypeId, ProfileRegistry};

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum CliMode {
    PreferredFirst,
    OptimizeCost,
    MinAircraft,
    UserLocked,
}

impl From<CliMode> for Mode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::PreferredFirst => Mode::PreferredFirst,
            CliMode::OptimizeCost => Mode::OptimizeCost,
            CliMode::MinAircraft => Mode::MinAircraft,
            CliMode::UserLocked => Mode::UserLocked,
        }
    }
}

/// Plans cargo load-outs across a fleet of C-17 and C-130 aircraft.
#[derive(Parser, Debug)]
#[command(name = "airlift-plan", version, about)]
struct Cli {
    /// Path to a JSON array of raw manifest records.
    #[arg(long)]
    manifest: PathBuf,

    /// Path to a JSON array of `FleetAvailability` entries.
    #[arg(long)]
    availability: PathBuf,

    /// Allocation policy mode.
    #[arg(long, value_enum, default_value_t = CliMode::PreferredFirst)]
    mode: CliMode,

    /// Preferred aircraft type id, e.g. "C-17".
    #[arg(long)]
    preferred: Option<String>,

    /// 0-100, reserved tuning knob for the preference component.
    #[arg(long, default_value_t = 100)]
    preference_strength: u8,

    /// Pretty-print the resulting JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let manifest_raw = match fs::read_to_string(&cli.manifest) {
        Ok(text) => text,
        Err(err) => {
            log::error!("reading manifest {}: {err}", cli.manifest.display());
            return ExitCode::from(3);
        }
    };
    let records: Vec<RawRecord> = match serde_json::from_str(&manifest_raw) {
        Ok(records) => records,
        Err(err) => {
            log::error!("parsing manifest JSON: {err}");
            return ExitCode::from(3);
        }
    };

    let availability_raw = match fs::read_to_string(&cli.availability) {
        Ok(text) => text,
        Err(err) => {
            log::error!("reading availability {}: {err}", cli.availability.display());
            return ExitCode::from(3);
        }
    };
    let availability: Vec<FleetAvailability> = match serde_json::from_str(&availability_raw) {
        Ok(availability) => availability,
        Err(err) => {
            log::error!("parsing availability JSON: {err}");
            return ExitCode::from(3);
        }
    };

    let normalized = normalize(&records);
    let classified = classify(&normalized);

    let mut policy = match AllocationPolicy::new(cli.mode.into()).preference_strength(cli.preference_strength) {
        Ok(policy) => policy,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::from(3);
        }
    };
    if let Some(preferred) = cli.preferred {
        policy = policy.preferred(AircraftTypeId::new(preferred));
    }

    let registry = ProfileRegistry::standard();
    let id_gen = IncrementingIdGen::new();
    let result = airlift::allocate(&classified, &registry, &availability, &policy, &id_gen);

    let status = result.status;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    match rendered {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("serializing allocation result: {err}");
            return ExitCode::from(3);
        }
    }

    ExitCode::from(match status {
        AllocationStatus::Feasible => 0,
        AllocationStatus::Partial => 1,
        AllocationStatus::Infeasible => 2,
    })
}

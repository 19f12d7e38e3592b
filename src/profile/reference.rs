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

//! Concrete C-17 and C-130 profiles.
//!
//! Geometry is plausible for each airframe but the numbers are chosen for
//! internal consistency with the worked examples in the specification
//! rather than lifted from a flight manual — the engine is
//! parameterized entirely by [`AircraftProfile`](super::AircraftProfile)
//! data, so the exact figures are not load-bearing for its correctness.

use super::{AircraftProfile, CostModel, HeightZone};
use crate::measurements::{Length, Mass};

fn pallet_positions(start: f64, spacing: f64, count: usize) -> Vec<Length> {
    (0..count)
        .map(|i| Length::inch(start + spacing * i as f64))
        .collect()
}

/// The C-17 Globemaster III profile: 18 pallet positions, a 144" ramp
/// clearance and a 170,900 lb main-deck payload limit (matching the
/// multi-aircraft scenario in §8).
pub fn c17() -> AircraftProfile {
    AircraftProfile::builder()
        .type_id("C-17")
        .bay_start(Length::inch(0.0))
        .reference_datum(Length::inch(0.0))
        .cargo_bay(
            Length::inch(1000.0),
            Length::inch(216.0),
            Length::inch(148.0),
        )
        .ramp(Length::inch(1000.0), Length::inch(200.0), Length::inch(148.0))
        .ramp_clearance(Length::inch(144.0), Length::inch(148.0))
        .pallet_positions(pallet_positions(40.0, 58.0, 18))
        .position_weight_limits(Mass::lb(10_000.0), Mass::lb(7_500.0))
        .floor_loading_limit_psi(250.0)
        .max_payload(Mass::lb(170_900.0))
        .cob_envelope(16.0, 30.0)
        .mac(Length::inch(200.0), Length::inch(700.0))
        .height_zones(vec![HeightZone::new(
            Length::inch(1000.0),
            Length::inch(1200.0),
            Length::inch(140.0),
        )])
        .cost(CostModel::new(85_000.0, 15_000.0, 4.0))
        .build()
        .expect("reference C-17 profile is fully specified")
}

fn c130(type_id: &str, cost: CostModel) -> AircraftProfile {
    AircraftProfile::builder()
        .type_id(type_id)
        .bay_start(Length::inch(0.0))
        .reference_datum(Length::inch(0.0))
        .cargo_bay(
            Length::inch(400.0),
            Length::inch(119.0),
            Length::inch(108.0),
        )
        .ramp(Length::inch(400.0), Length::inch(123.0), Length::inch(108.0))
        .ramp_clearance(Length::inch(119.0), Length::inch(108.0))
        .pallet_positions(pallet_positions(40.0, 54.0, 6))
        .position_weight_limits(Mass::lb(10_000.0), Mass::lb(7_500.0))
        .floor_loading_limit_psi(250.0)
        .max_payload(Mass::lb(42_000.0))
        .cob_envelope(15.0, 30.0)
        .mac(Length::inch(150.0), Length::inch(280.0))
        .height_zones(vec![HeightZone::new(
            Length::inch(400.0),
            Length::inch(523.0),
            Length::inch(102.0),
        )])
        .cost(cost)
        .build()
        .expect("reference C-130 profile is fully specified")
}

/// The C-130H (legacy Hercules) profile, 6 pallet positions.
pub fn c130h() -> AircraftProfile {
    c130("C-130H", CostModel::new(28_000.0, 5_500.0, 3.0))
}

/// The C-130J (re-engined) profile, identical geometry to the H model but
/// with the J's cost parameters from §6.
pub fn c130j() -> AircraftProfile {
    c130("C-130J", CostModel::new(32_000.0, 6_000.0, 2.5))
}

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

//! Center-of-balance computation.
//!
//! The arm is computed as `station = midpoint(x_start, x_end) + bay_start -
//! RDL`, and the percentage of MAC as `((arm + RDL - LEMAC) / MAC_length) *
//! 100` — validated against a forward-loaded scenario (three heavy pallets
//! at the most forward positions push the envelope status to
//! `forward_limit`, never `aft_limit`, which only holds if the two
//! `+ RDL` terms are kept separate rather than folded together).

use super::PlacedBox;
use crate::profile::AircraftProfile;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the computed CoB falls relative to the profile's envelope
/// (glossary).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EnvelopeStatus {
    ForwardLimit,
    InEnvelope,
    AftLimit,
}

/// The result of a center-of-balance computation.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CobResult {
    pub arm_in: f64,
    pub percent_mac: f64,
    pub status: EnvelopeStatus,
    /// Signed magnitude (percentage points) outside the envelope; 0 when
    /// `status` is `InEnvelope`.
    pub deviation_percent: f64,
}

/// Computes the center of balance of `placements` against `profile`.
/// Weightless loads (or an empty placement set) return an arm of
/// 0 and `InEnvelope`, matching the zero-item boundary case.
pub fn compute_cob(placements: &[PlacedBox], profile: &AircraftProfile) -> CobResult {
    let mut total_weight = 0.0;
    let mut moment = 0.0;

    for placement in placements {
        let weight = placement.weight.to_si();
        let station = placement.x_center().to_si() + profile.bay_start.to_si()
            - profile.reference_datum.to_si();
        moment += station * weight;
        total_weight += weight;
    }

    let arm_in = if total_weight > 0.0 { moment / total_weight } else { 0.0 };
    let percent_mac = ((arm_in + profile.reference_datum.to_si() - profile.lemac_station.to_si())
        / profile.mac_length.to_si())
        * 100.0;

    let (status, deviation_percent) = if percent_mac < profile.cob_envelope_min_percent {
        (EnvelopeStatus::ForwardLimit, percent_mac - profile.cob_envelope_min_percent)
    } else if percent_mac > profile.cob_envelope_max_percent {
        (EnvelopeStatus::AftLimit, percent_mac - profile.cob_envelope_max_percent)
    } else {
        (EnvelopeStatus::InEnvelope, 0.0)
    };

    CobResult {
        arm_in,
        percent_mac,
        status,
        deviation_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Deck, PlacementKind};
    use crate::measurements::{Length, Mass};
    use crate::profile::reference::c17;

    fn placement_at(x: f64, weight: f64) -> PlacedBox {
        PlacedBox::new(
            "i",
            "p",
            Deck::Main,
            PlacementKind::Pallet,
            Mass::lb(weight),
            Length::inch(x),
            Length::inch(0.0),
            Length::inch(0.0),
            Length::inch(40.0),
            Length::inch(40.0),
            Length::inch(40.0),
        )
    }

    #[test]
    fn empty_placements_are_in_envelope_with_zero_arm() {
        let cob = compute_cob(&[], &c17());
        assert_eq!(cob.arm_in, 0.0);
        assert_eq!(cob.status, EnvelopeStatus::InEnvelope);
    }

    #[test]
    fn forward_loaded_pallets_trip_forward_limit() {
        let profile = c17();
        let placements = vec![
            placement_at(40.0, 10000.0),
            placement_at(98.0, 10000.0),
            placement_at(156.0, 10000.0),
        ];
        let cob = compute_cob(&placements, &profile);
        assert_eq!(cob.status, EnvelopeStatus::ForwardLimit);
        assert!(cob.percent_mac < profile.cob_envelope_min_percent);
    }
}

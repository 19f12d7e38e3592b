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

//! Aircraft profiles: the one and only place behavioral differences
//! between aircraft types live.
//!
//! C-17 and C-130 are never modeled as subclasses — every distinction
//! (bay geometry, pallet positions, clearances, envelope,
//! cost) is a data field of [`AircraftProfile`]. Profiles are immutable,
//! process-wide, read-only data; the engine never mutates one after
//! construction.

mod builder;
mod cost_model;
mod height_zone;
pub mod reference;
mod registry;
mod type_id;

pub use builder::AircraftProfileBuilder;
pub use cost_model::CostModel;
pub use height_zone::HeightZone;
pub use registry::ProfileRegistry;
pub use type_id::AircraftTypeId;

use crate::measurements::{Length, Mass};

/// Immutable geometric, weight and cost characteristics of one aircraft
/// type, keyed by [`AircraftTypeId`].
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AircraftProfile {
    pub type_id: AircraftTypeId,

    /// Offset of the cargo-bay-local frame's origin from the reference
    /// datum line, used to compute CoB stations.
    pub bay_start: Length,
    pub cargo_length: Length,
    pub cargo_width: Length,
    pub cargo_height: Length,

    pub ramp_start: Length,
    pub ramp_length: Length,
    pub ramp_height: Length,
    pub ramp_clearance_width: Length,
    pub ramp_clearance_height: Length,

    /// X coordinates of the fixed pallet positions along the bay.
    pub pallet_positions: Vec<Length>,

    pub main_deck_position_weight_limit: Mass,
    pub ramp_position_weight_limit: Mass,
    pub floor_loading_limit_psi: f64,

    pub max_payload: Mass,

    pub cob_envelope_min_percent: f64,
    pub cob_envelope_max_percent: f64,
    pub mac_length: Length,
    pub lemac_station: Length,
    pub reference_datum: Length,

    pub height_zones: Vec<HeightZone>,

    pub cost: CostModel,
}

impl AircraftProfile {
    pub fn builder() -> AircraftProfileBuilder {
        AircraftProfileBuilder::new()
    }

    /// Total longitudinal extent of the loadable bay, main deck plus ramp.
    pub fn total_length(&self) -> Length {
        self.cargo_length + self.ramp_length
    }

    /// Number of fixed pallet positions this profile defines (18 for the
    /// C-17, 6 for the C-130 per the glossary).
    pub fn pallet_position_count(&self) -> usize {
        self.pallet_positions.len()
    }

    /// The maximum cargo height allowed at longitudinal station `x`,
    /// accounting for any height zone that covers it; falls back to the
    /// bay's nominal height outside all zones.
    pub fn max_height_at(&self, x: Length) -> Length {
        self.height_zones
            .iter()
            .find(|zone| zone.contains_x(x))
            .map(|zone| zone.max_height)
            .unwrap_or(if x >= self.ramp_start {
                self.ramp_height
            } else {
                self.cargo_height
            })
    }

    /// `true` if `x` lies within the ramp's longitudinal extent.
    pub fn is_ramp_x(&self, x: Length) -> bool {
        x >= self.ramp_start
    }

    /// Half the spacing between adjacent pallet positions, used to decide
    /// which (if any) fixed position a placement's X-center falls into
    ///.
    pub fn half_position_spacing(&self) -> Length {
        if self.pallet_positions.len() < 2 {
            return Length::inch(54.0);
        }

        let mut min_gap = Length::inch(f64::MAX);
        for pair in self.pallet_positions.windows(2) {
            let gap = pair[1] - pair[0];
            if gap < min_gap {
                min_gap = gap;
            }
        }
        min_gap / 2.0
    }

    /// The fixed pallet-position index whose X coordinate is within half the
    /// position spacing of `x_center`, if any.
    pub fn position_index_for(&self, x_center: Length) -> Option<usize> {
        let half = self.half_position_spacing();
        self.pallet_positions
            .iter()
            .position(|&pos| x_center.approx_eq(&pos, half.to_si()))
    }
}

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

use super::{AircraftProfile, AircraftTypeId, CostModel, HeightZone};
use crate::error::{EngineError, Result};
use crate::measurements::{Length, Mass};

/// Factory for an [`AircraftProfile`], mirroring the reference crate's
/// aircraft builder: every field is staged as `Option`, and `.build()`
/// checks that the geometrically load-bearing fields were actually set
/// before handing back an immutable profile.
#[derive(Clone, Default, Debug)]
pub struct AircraftProfileBuilder {
    type_id: Option<AircraftTypeId>,
    bay_start: Length,
    cargo_length: Option<Length>,
    cargo_width: Option<Length>,
    cargo_height: Option<Length>,
    ramp_start: Option<Length>,
    ramp_length: Length,
    ramp_height: Length,
    ramp_clearance_width: Option<Length>,
    ramp_clearance_height: Option<Length>,
    pallet_positions: Vec<Length>,
    main_deck_position_weight_limit: Option<Mass>,
    ramp_position_weight_limit: Option<Mass>,
    floor_loading_limit_psi: f64,
    max_payload: Option<Mass>,
    cob_envelope_min_percent: f64,
    cob_envelope_max_percent: f64,
    mac_length: Option<Length>,
    lemac_station: Length,
    reference_datum: Length,
    height_zones: Vec<HeightZone>,
    cost: Option<CostModel>,
}

impl AircraftProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_id(mut self, type_id: impl Into<AircraftTypeId>) -> Self {
        self.type_id = Some(type_id.into());
        self
    }

    pub fn bay_start(mut self, bay_start: Length) -> Self {
        self.bay_start = bay_start;
        self
    }

    pub fn cargo_bay(mut self, length: Length, width: Length, height: Length) -> Self {
        self.cargo_length = Some(length);
        self.cargo_width = Some(width);
        self.cargo_height = Some(height);
        self
    }

    pub fn ramp(mut self, start: Length, length: Length, height: Length) -> Self {
        self.ramp_start = Some(start);
        self.ramp_length = length;
        self.ramp_height = height;
        self
    }

    pub fn ramp_clearance(mut self, width: Length, height: Length) -> Self {
        self.ramp_clearance_width = Some(width);
        self.ramp_clearance_height = Some(height);
        self
    }

    pub fn pallet_positions(mut self, positions: Vec<Length>) -> Self {
        self.pallet_positions = positions;
        self
    }

    pub fn position_weight_limits(mut self, main_deck: Mass, ramp: Mass) -> Self {
        self.main_deck_position_weight_limit = Some(main_deck);
        self.ramp_position_weight_limit = Some(ramp);
        self
    }

    pub fn floor_loading_limit_psi(mut self, psi: f64) -> Self {
        self.floor_loading_limit_psi = psi;
        self
    }

    pub fn max_payload(mut self, max_payload: Mass) -> Self {
        self.max_payload = Some(max_payload);
        self
    }

    pub fn cob_envelope(mut self, min_percent: f64, max_percent: f64) -> Self {
        self.cob_envelope_min_percent = min_percent;
        self.cob_envelope_max_percent = max_percent;
        self
    }

    pub fn mac(mut self, mac_length: Length, lemac_station: Length) -> Self {
        self.mac_length = Some(mac_length);
        self.lemac_station = lemac_station;
        self
    }

    pub fn reference_datum(mut self, reference_datum: Length) -> Self {
        self.reference_datum = reference_datum;
        self
    }

    pub fn height_zones(mut self, zones: Vec<HeightZone>) -> Self {
        self.height_zones = zones;
        self
    }

    pub fn cost(mut self, cost: CostModel) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn build(self) -> Result<AircraftProfile> {
        let type_id = self
            .type_id
            .ok_or(EngineError::IncompleteProfile("type_id"))?;

        Ok(AircraftProfile {
            cargo_length: self
                .cargo_length
                .ok_or(EngineError::IncompleteProfile("cargo_length"))?,
            cargo_width: self
                .cargo_width
                .ok_or(EngineError::IncompleteProfile("cargo_width"))?,
            cargo_height: self
                .cargo_height
                .ok_or(EngineError::IncompleteProfile("cargo_height"))?,
            ramp_start: self
                .ramp_start
                .ok_or(EngineError::IncompleteProfile("ramp_start"))?,
            ramp_clearance_width: self
                .ramp_clearance_width
                .ok_or(EngineError::IncompleteProfile("ramp_clearance_width"))?,
            ramp_clearance_height: self
                .ramp_clearance_height
                .ok_or(EngineError::IncompleteProfile("ramp_clearance_height"))?,
            main_deck_position_weight_limit: self
                .main_deck_position_weight_limit
                .ok_or(EngineError::IncompleteProfile("main_deck_position_weight_limit"))?,
            ramp_position_weight_limit: self
                .ramp_position_weight_limit
                .ok_or(EngineError::IncompleteProfile("ramp_position_weight_limit"))?,
            max_payload: self
                .max_payload
                .ok_or(EngineError::IncompleteProfile("max_payload"))?,
            mac_length: self
                .mac_length
                .ok_or(EngineError::IncompleteProfile("mac_length"))?,
            cost: self.cost.ok_or(EngineError::IncompleteProfile("cost"))?,
            type_id,
            bay_start: self.bay_start,
            ramp_length: self.ramp_length,
            ramp_height: self.ramp_height,
            pallet_positions: self.pallet_positions,
            floor_loading_limit_psi: self.floor_loading_limit_psi,
            cob_envelope_min_percent: self.cob_envelope_min_percent,
            cob_envelope_max_percent: self.cob_envelope_max_percent,
            lemac_station: self.lemac_station,
            reference_datum: self.reference_datum,
            height_zones: self.height_zones,
        })
    }
}

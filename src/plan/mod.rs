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

//! The `LoadPlan` entity and its state machine.

mod planner;

pub use planner::plan_aircraft;

use crate::geom::{CobResult, PlacedBox};
use crate::manifest::CargoItem;
use crate::pallet::Pallet;
use crate::placement::PalletPlacement;
use crate::profile::AircraftTypeId;
use crate::measurements::Mass;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The deployment wave a [`LoadPlan`] belongs to (glossary).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    Advance,
    Main,
}

/// `LoadPlan`'s state machine: transitions are monotonic except the
/// overweight recovery path, which reopens `PalletsPlaced` by popping the
/// most recently placed pallet.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlanState {
    Empty,
    VehiclesPlaced,
    PalletsPlaced,
    Balanced,
    Finalized,
}

/// A placed vehicle within a [`LoadPlan`].
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedVehicle {
    pub item: CargoItem,
    pub placed_box: PlacedBox,
}

/// Totals summarized after placement and CoB computation.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Totals {
    pub weight: Mass,
    pub positions_used: usize,
    pub positions_available: usize,
    pub utilization: f64,
}

/// A complete, or partially-complete, single-aircraft load plan.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadPlan {
    pub id: String,
    pub aircraft_type_id: AircraftTypeId,
    pub sequence: u32,
    pub phase: Phase,
    pub pallets: Vec<PalletPlacement>,
    pub vehicles: Vec<PlacedVehicle>,
    pub passenger_count: u32,
    pub totals: Totals,
    pub cob: Option<CobResult>,
    pub state: PlanState,
}

impl LoadPlan {
    pub fn new(aircraft_type_id: AircraftTypeId, sequence: u32, phase: Phase) -> Self {
        Self {
            id: format!("{aircraft_type_id}-{sequence}"),
            aircraft_type_id,
            sequence,
            phase,
            pallets: Vec::new(),
            vehicles: Vec::new(),
            passenger_count: 0,
            totals: Totals::default(),
            cob: None,
            state: PlanState::Empty,
        }
    }

    /// Every placement (vehicles and pallets) owned by this plan, for
    /// collision/CoB computation over the whole aircraft.
    pub fn all_placements(&self) -> Vec<PlacedBox> {
        let mut boxes: Vec<PlacedBox> = self.vehicles.iter().map(|v| v.placed_box.clone()).collect();
        boxes.extend(self.pallets.iter().map(|p| p.placed_box.clone()));
        boxes
    }

    pub fn pallet_items(&self) -> impl Iterator<Item = &CargoItem> {
        self.pallets.iter().flat_map(|p| p.pallet.items.iter())
    }

    pub fn unplaced_pallets_as_items(pallets: &[Pallet]) -> Vec<CargoItem> {
        pallets.iter().flat_map(|p| p.items.clone()).collect()
    }
}

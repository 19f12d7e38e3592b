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

//! The Fleet Allocator.

mod fleet;

pub use fleet::allocate;

use std::collections::HashMap;

use crate::error::{EngineError, Result};
use crate::manifest::CargoItem;
use crate::plan::LoadPlan;
use crate::profile::{AircraftTypeId, CostModel};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which policy drives candidate-mix scoring.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    PreferredFirst,
    OptimizeCost,
    MinAircraft,
    UserLocked,
}

impl Mode {
    /// The `(preference, cost, aircraft)` weight triple for this mode,
    /// always summing to 1.
    pub fn weights(&self) -> (f64, f64, f64) {
        match self {
            Mode::PreferredFirst => (0.5, 0.3, 0.2),
            Mode::OptimizeCost => (0.1, 0.6, 0.3),
            Mode::MinAircraft => (0.1, 0.4, 0.5),
            Mode::UserLocked => (1.0, 0.0, 0.0),
        }
    }
}

/// The allocation configuration a caller assembles before invoking
/// [`allocate`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationPolicy {
    pub mode: Mode,
    pub preferred_type_id: Option<AircraftTypeId>,
    /// 0-100, reserved per §6/§9(c): multiplies the raw preference
    /// component before the weighted dot product. Defaults to 100 (no
    /// change).
    pub preference_strength: u8,
    pub cost_models: HashMap<AircraftTypeId, CostModel>,
}

impl AllocationPolicy {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            preferred_type_id: None,
            preference_strength: 100,
            cost_models: HashMap::new(),
        }
    }

    pub fn preferred(mut self, type_id: impl Into<AircraftTypeId>) -> Self {
        self.preferred_type_id = Some(type_id.into());
        self
    }

    /// Sets the reserved preference-strength knob (§6/§9(c)). Returns
    /// [`EngineError::InvalidPreferenceStrength`] if `strength` is outside
    /// `0..=100`.
    pub fn preference_strength(mut self, strength: u8) -> Result<Self> {
        if strength > 100 {
            return Err(EngineError::InvalidPreferenceStrength(strength));
        }
        self.preference_strength = strength;
        Ok(self)
    }

    pub fn cost_model(mut self, type_id: impl Into<AircraftTypeId>, cost: CostModel) -> Self {
        self.cost_models.insert(type_id.into(), cost);
        self
    }
}

/// One aircraft type's availability for this allocation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FleetAvailability {
    pub type_id: AircraftTypeId,
    pub count: u32,
    pub locked: bool,
}

impl FleetAvailability {
    pub fn new(type_id: impl Into<AircraftTypeId>, count: u32) -> Self {
        Self {
            type_id: type_id.into(),
            count,
            locked: false,
        }
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn unlocked_count(&self) -> u32 {
        if self.locked {
            0
        } else {
            self.count
        }
    }
}

/// Overall feasibility of an [`AllocationResult`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AllocationStatus {
    Feasible,
    Partial,
    Infeasible,
}

/// Aggregate metrics reported alongside an [`AllocationResult`].
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Metrics {
    pub total_cost: f64,
    pub total_aircraft: u32,
    pub utilization: f64,
    pub cob_average: f64,
}

/// A preferred-type-only counterfactual used to explain the winning mix's
/// cost/aircraft tradeoff.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComparisonData {
    pub preferred_only_cost: f64,
    pub preferred_only_aircraft: u32,
    pub cost_delta: f64,
    pub aircraft_delta: i64,
}

/// The result of [`allocate`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationResult {
    pub status: AllocationStatus,
    pub aircraft_used: HashMap<AircraftTypeId, u32>,
    pub unplaced_items: Vec<CargoItem>,
    pub load_plans: Vec<LoadPlan>,
    pub metrics: Metrics,
    pub explanation: String,
    pub comparison_data: Option<ComparisonData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preference_strength_within_range_is_accepted() {
        let policy = AllocationPolicy::new(Mode::PreferredFirst).preference_strength(75);
        assert!(policy.is_ok());
        assert_eq!(policy.unwrap().preference_strength, 75);
    }

    #[test]
    fn preference_strength_above_100_is_rejected() {
        let err = AllocationPolicy::new(Mode::PreferredFirst)
            .preference_strength(101)
            .unwrap_err();
        assert_eq!(err, EngineError::InvalidPreferenceStrength(101));
    }
}

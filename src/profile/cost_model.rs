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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-sortie cost parameters for an aircraft type.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CostModel {
    pub cost_per_sortie: f64,
    pub cost_per_hour: f64,
    pub hours_per_leg: f64,
}

impl CostModel {
    pub fn new(cost_per_sortie: f64, cost_per_hour: f64, hours_per_leg: f64) -> Self {
        Self {
            cost_per_sortie,
            cost_per_hour,
            hours_per_leg,
        }
    }

    /// The total cost of flying one sortie: the flat per-sortie cost plus
    /// the hourly cost for the leg's duration.
    pub fn sortie_cost(&self) -> f64 {
        self.cost_per_sortie + self.cost_per_hour * self.hours_per_leg
    }
}

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

use super::{constants, Measurement, UnitOfMeasure};

/// Mass unit with the pound as SI unit — the engine works exclusively in
/// pounds, but kilograms are kept for callers translating from a
/// metric manifest source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum MassUnit {
    Pounds,
    Kilograms,
}

impl UnitOfMeasure<f64> for MassUnit {
    fn si() -> Self {
        Self::Pounds
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Pounds => "lb",
            Self::Kilograms => "kg",
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Pounds => value,
            Self::Kilograms => value / constants::POUNDS_PER_KILOGRAM,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Pounds => *value,
            Self::Kilograms => value * constants::POUNDS_PER_KILOGRAM,
        }
    }
}

/// A mass, internally tracked in pounds.
pub type Mass = Measurement<f64, MassUnit>;

impl Mass {
    pub fn lb(value: f64) -> Self {
        Self {
            value,
            unit: MassUnit::Pounds,
        }
    }

    pub fn kg(value: f64) -> Self {
        Self {
            value,
            unit: MassUnit::Kilograms,
        }
    }

    pub const ZERO: Self = Self {
        value: 0.0,
        unit: MassUnit::Pounds,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_kg_to_lb() {
        assert_eq!(Mass::kg(1.0), Mass::lb(constants::POUNDS_PER_KILOGRAM));
    }

    #[test]
    fn zero_is_additive_identity() {
        assert_eq!(Mass::ZERO + Mass::lb(10.0), Mass::lb(10.0));
    }
}

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

/// Length unit with the inch as SI unit.
///
/// Cargo manifests and aircraft profiles are specified in inches; feet and meters are kept as convenience units
/// for callers that receive dimensions in another system.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum LengthUnit {
    Inches,
    Feet,
    Meters,
}

impl UnitOfMeasure<f64> for LengthUnit {
    fn si() -> Self {
        Self::Inches
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Inches => "in",
            Self::Feet => "ft",
            Self::Meters => "m",
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Inches => value,
            Self::Feet => value / constants::INCHES_PER_FOOT,
            Self::Meters => value / constants::INCHES_PER_METER,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Inches => *value,
            Self::Feet => value * constants::INCHES_PER_FOOT,
            Self::Meters => value * constants::INCHES_PER_METER,
        }
    }
}

/// A length, internally tracked in inches.
pub type Length = Measurement<f64, LengthUnit>;

impl Length {
    pub fn inch(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Inches,
        }
    }

    pub fn ft(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Feet,
        }
    }

    pub fn m(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Meters,
        }
    }

    /// `true` if the two lengths are within `tolerance` inches of each other.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.to_si() - other.to_si()).abs() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_shows_symbol() {
        assert_eq!(Length::inch(0.0).symbol(), "in");
        assert_eq!(Length::ft(0.0).symbol(), "ft");
    }

    #[test]
    fn convert_feet_to_inches() {
        assert_eq!(Length::ft(1.0), Length::inch(12.0));
    }

    #[test]
    fn approx_eq_within_tolerance() {
        assert!(Length::inch(100.0).approx_eq(&Length::inch(100.05), 0.1));
        assert!(!Length::inch(100.0).approx_eq(&Length::inch(100.2), 0.1));
    }
}

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

//! The 463L pallet entity and the Pallet Builder.

mod builder;

pub use builder::{build_pallets, BuildResult};

use crate::manifest::CargoItem;
use crate::measurements::{Length, Mass};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outer 88"x108" envelope and 84"x104" usable footprint of a standard
/// 463L pallet, and its tare weight with nets (glossary).
pub const PALLET_OUTER_LENGTH_IN: f64 = 108.0;
pub const PALLET_OUTER_WIDTH_IN: f64 = 88.0;
pub const PALLET_USABLE_LENGTH_IN: f64 = 104.0;
pub const PALLET_USABLE_WIDTH_IN: f64 = 84.0;
pub const PALLET_TARE_WITH_NETS_LB: f64 = 355.0;
pub const PALLET_HEIGHT_TIER_IN: f64 = 96.0;
pub const PALLET_MAX_HEIGHT_IN: f64 = 100.0;
pub const PALLET_PAYLOAD_LOW_TIER_LB: f64 = 10_000.0;
pub const PALLET_PAYLOAD_HIGH_TIER_LB: f64 = 8_000.0;

/// A built 463L pallet: a closed group of items, or a pass-through of a
/// single PREBUILT_PALLET item.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pallet {
    pub id: String,
    pub items: Vec<CargoItem>,
    pub length: Length,
    pub width: Length,
    pub height: Length,
    pub gross_weight: Mass,
    pub hazmat: bool,
}

impl Pallet {
    /// The maximum gross weight this pallet's current height tier allows
    ///: 10,000 lb at or below 96", 8,000 lb up to the 100" hard
    /// maximum.
    pub fn weight_limit(&self) -> Mass {
        weight_limit_for_height(self.height)
    }

    pub fn is_overweight(&self) -> bool {
        self.gross_weight > self.weight_limit()
    }

    pub fn footprint_area(&self) -> f64 {
        self.length.to_si() * self.width.to_si()
    }
}

/// The payload limit for a pallet of the given stack height.
pub fn weight_limit_for_height(height: Length) -> Mass {
    if height.to_si() <= PALLET_HEIGHT_TIER_IN {
        Mass::lb(PALLET_PAYLOAD_LOW_TIER_LB)
    } else {
        Mass::lb(PALLET_PAYLOAD_HIGH_TIER_LB)
    }
}

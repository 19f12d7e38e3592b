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

//! The manifest domain model: raw records in, classified
//! [`CargoItem`]s out.

mod classify;
mod normalizer;

pub use classify::{classify, ClassifiedManifest, PhaseManifest};
pub use normalizer::{normalize, NormalizedManifest, Summary};

use crate::measurements::{Length, Mass};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four-way cargo taxonomy every item is classified into.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Category {
    RollingStock,
    Palletizable,
    PrebuiltPallet,
    Passenger,
}

/// Either a number or a string, matching the permissive typing of the
/// `RawSource` collaborator fields.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawValue {
    Text(String),
    Number(f64),
}

impl RawValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(n) => Some(*n),
            RawValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s.as_str()),
            RawValue::Number(_) => None,
        }
    }
}

/// One record as produced by the injected `RawSource` collaborator:
/// loosely typed, every field optional.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawRecord {
    pub item_id: Option<String>,
    pub description: Option<String>,
    pub length_in: Option<RawValue>,
    pub width_in: Option<RawValue>,
    pub height_in: Option<RawValue>,
    pub weight_lb: Option<RawValue>,
    pub lead_tcn: Option<String>,
    pub pax: Option<RawValue>,
    pub quantity: Option<RawValue>,
    pub r#type: Option<String>,
    pub advon_flag: Option<bool>,
    pub hazmat_flag: Option<bool>,
    pub axle_weights: Option<Vec<f64>>,
}

/// A fully normalized, classified cargo item.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoItem {
    pub id: String,
    pub description: String,
    pub category: Category,
    pub quantity: u32,
    pub length: Length,
    pub width: Length,
    pub height: Length,
    pub weight: Mass,
    pub axle_weights: Option<Vec<Mass>>,
    pub advance_party: bool,
    pub hazmat: bool,
    pub lead_tcn: Option<String>,
    pub passenger_count: Option<u32>,
}

impl CargoItem {
    /// The item's footprint area (length × width), used for sorting in the
    /// Pallet Builder and Pallet Placer.
    pub fn footprint_area(&self) -> f64 {
        self.length.to_si() * self.width.to_si()
    }
}

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

//! Classification and phase splitting.

use super::{CargoItem, Category, NormalizedManifest};
use crate::measurements::Mass;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every item belonging to one deployment wave, split by category.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhaseManifest {
    pub rolling_stock: Vec<CargoItem>,
    pub palletizable: Vec<CargoItem>,
    pub prebuilt_pallets: Vec<CargoItem>,
    pub passenger_count: u32,
    pub passenger_weight: Mass,
}

impl PhaseManifest {
    fn push(&mut self, item: CargoItem) {
        match item.category {
            Category::RollingStock => self.rolling_stock.push(item),
            Category::Palletizable => self.palletizable.push(item),
            Category::PrebuiltPallet => self.prebuilt_pallets.push(item),
            Category::Passenger => {
                self.passenger_count += item.passenger_count.unwrap_or(1);
                self.passenger_weight = self.passenger_weight + item.weight;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rolling_stock.is_empty()
            && self.palletizable.is_empty()
            && self.prebuilt_pallets.is_empty()
            && self.passenger_count == 0
    }
}

/// The normalized manifest split by deployment wave.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassifiedManifest {
    pub advance: PhaseManifest,
    pub main: PhaseManifest,
}

/// Splits a normalized manifest into ADVANCE and MAIN phase buckets, each
/// further split by the four-way category taxonomy.
///
/// This function is pure and deterministic, so calling it twice on the
/// same manifest is trivially idempotent.
pub fn classify(manifest: &NormalizedManifest) -> ClassifiedManifest {
    let mut classified = ClassifiedManifest::default();

    for item in &manifest.items {
        if item.advance_party {
            classified.advance.push(item.clone());
        } else {
            classified.main.push(item.clone());
        }
    }

    classified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{normalize, RawRecord, RawValue};

    #[test]
    fn splits_advance_party_items_into_their_own_phase() {
        let mut advance_rec = RawRecord {
            item_id: Some("adv".to_string()),
            advon_flag: Some(true),
            ..Default::default()
        };
        advance_rec.length_in = Some(RawValue::Number(40.0));
        advance_rec.width_in = Some(RawValue::Number(40.0));
        advance_rec.height_in = Some(RawValue::Number(40.0));
        advance_rec.weight_lb = Some(RawValue::Number(500.0));

        let main_rec = RawRecord {
            item_id: Some("main".to_string()),
            advon_flag: Some(false),
            ..advance_rec.clone()
        };

        let manifest = normalize(&[advance_rec, main_rec]);
        let classified = classify(&manifest);

        assert_eq!(classified.advance.palletizable.len(), 1);
        assert_eq!(classified.main.palletizable.len(), 1);
    }

    #[test]
    fn classify_is_idempotent() {
        let manifest = normalize(&[RawRecord {
            item_id: Some("a".to_string()),
            ..Default::default()
        }]);
        assert_eq!(classify(&manifest), classify(&manifest));
    }
}

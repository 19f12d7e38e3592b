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

//! Greedy first-fit-decreasing pallet construction.

use super::{
    weight_limit_for_height, Pallet, PALLET_TARE_WITH_NETS_LB, PALLET_USABLE_LENGTH_IN,
    PALLET_USABLE_WIDTH_IN,
};
use crate::idgen::IdGen;
use crate::issue::Issue;
use crate::manifest::CargoItem;
use crate::measurements::{Length, Mass};

const MAX_ITEM_HEIGHT_IN: f64 = 100.0;
const USABLE_AREA_SQIN: f64 = PALLET_USABLE_LENGTH_IN * PALLET_USABLE_WIDTH_IN;

/// The result of building pallets out of a phase's loose palletizable and
/// prebuilt-pallet items.
#[derive(Clone, Debug, Default)]
pub struct BuildResult {
    pub pallets: Vec<Pallet>,
    /// Items too tall (>100") to ever join a pallet — diverted straight to
    /// the caller's unplaced set.
    pub unbuildable: Vec<CargoItem>,
    pub issues: Vec<Issue>,
}

struct OpenPallet {
    items: Vec<CargoItem>,
    used_area: f64,
    max_height: Length,
    hazmat: bool,
}

impl OpenPallet {
    fn new(item: CargoItem, hazmat: bool) -> Self {
        let used_area = item.footprint_area();
        let max_height = item.height;
        Self {
            items: vec![item],
            used_area,
            max_height,
            hazmat,
        }
    }

    fn weight(&self) -> Mass {
        self.items.iter().fold(Mass::lb(PALLET_TARE_WITH_NETS_LB), |acc, i| acc + i.weight)
    }

    fn can_fit(&self, item: &CargoItem) -> bool {
        if item.hazmat != self.hazmat {
            return false;
        }
        if self.used_area + item.footprint_area() > USABLE_AREA_SQIN {
            return false;
        }
        if !fits_pallet_footprint(item.length, item.width) {
            return false;
        }
        let new_height = if item.height > self.max_height {
            item.height
        } else {
            self.max_height
        };
        let new_weight = self.weight() + item.weight;
        new_weight <= weight_limit_for_height(new_height)
    }

    fn add(&mut self, item: CargoItem) {
        self.used_area += item.footprint_area();
        if item.height > self.max_height {
            self.max_height = item.height;
        }
        self.items.push(item);
    }

    fn close(self, id: String) -> Pallet {
        let gross_weight = self.weight();
        Pallet {
            id,
            items: self.items,
            length: Length::inch(PALLET_USABLE_LENGTH_IN),
            width: Length::inch(PALLET_USABLE_WIDTH_IN),
            height: self.max_height,
            gross_weight,
            hazmat: self.hazmat,
        }
    }
}

fn fits_pallet_footprint(length: Length, width: Length) -> bool {
    let l = length.to_si();
    let w = width.to_si();
    (l <= PALLET_USABLE_LENGTH_IN && w <= PALLET_USABLE_WIDTH_IN)
        || (w <= PALLET_USABLE_LENGTH_IN && l <= PALLET_USABLE_WIDTH_IN)
}

/// Builds closed pallets out of loose `palletizable` items and passes
/// `prebuilt` items through as already-closed pallets.
pub fn build_pallets(
    mut palletizable: Vec<CargoItem>,
    prebuilt: Vec<CargoItem>,
    id_gen: &dyn IdGen,
) -> BuildResult {
    let mut result = BuildResult::default();

    // Hazmat and non-hazmat items are never combined on the same pallet.
    palletizable.sort_by(|a, b| {
        b.footprint_area()
            .partial_cmp(&a.footprint_area())
            .unwrap()
            .then_with(|| b.weight.partial_cmp(&a.weight).unwrap())
    });

    let mut open: Vec<OpenPallet> = Vec::new();

    for item in palletizable {
        if item.height.to_si() > MAX_ITEM_HEIGHT_IN {
            result.issues.push(
                crate::issue!(
                    Error,
                    OverheightPallet,
                    "item {} height {:.1}\" exceeds the 100\" pallet stack limit, cannot be palletized",
                    item.id,
                    item.height.to_si()
                )
                .with_item_ref(&item.id),
            );
            result.unbuildable.push(item);
            continue;
        }

        if let Some(open_pallet) = open.iter_mut().find(|p| p.can_fit(&item)) {
            open_pallet.add(item);
            continue;
        }

        if !fits_pallet_footprint(item.length, item.width) {
            result.issues.push(
                crate::issue!(
                    Error,
                    OverheightPallet,
                    "item {} footprint {:.0}x{:.0} exceeds a single pallet's usable area",
                    item.id,
                    item.length.to_si(),
                    item.width.to_si()
                )
                .with_item_ref(&item.id),
            );
            result.unbuildable.push(item);
            continue;
        }

        let hazmat = item.hazmat;
        open.push(OpenPallet::new(item, hazmat));
    }

    for open_pallet in open {
        let id = format!("PLT{:04}", id_gen.next_id());
        result.pallets.push(open_pallet.close(id));
    }

    for item in prebuilt {
        let gross_weight = item.weight;
        let height = item.height;
        let limit = weight_limit_for_height(height);
        if gross_weight > limit {
            result.issues.push(
                crate::issue!(
                    Warning,
                    OverweightPallet,
                    "prebuilt pallet {} weighs {:.0} lb, over the {:.0} lb limit for {:.1}\" height",
                    item.id,
                    gross_weight.to_si(),
                    limit.to_si(),
                    height.to_si()
                )
                .with_item_ref(&item.id),
            );
        }
        if height.to_si() > MAX_ITEM_HEIGHT_IN {
            result.issues.push(
                crate::issue!(
                    Warning,
                    OverheightPallet,
                    "prebuilt pallet {} height {:.1}\" exceeds the 100\" limit",
                    item.id,
                    height.to_si()
                )
                .with_item_ref(&item.id),
            );
        }
        let hazmat = item.hazmat;
        let length = item.length;
        let width = item.width;
        result.pallets.push(Pallet {
            id: item.id.clone(),
            items: vec![item],
            length,
            width,
            height,
            gross_weight,
            hazmat,
        });
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idgen::IncrementingIdGen;
    use crate::manifest::Category;

    fn item(id: &str, l: f64, w: f64, h: f64, wt: f64, hazmat: bool) -> CargoItem {
        CargoItem {
            id: id.to_string(),
            description: id.to_string(),
            category: Category::Palletizable,
            quantity: 1,
            length: Length::inch(l),
            width: Length::inch(w),
            height: Length::inch(h),
            weight: Mass::lb(wt),
            axle_weights: None,
            advance_party: false,
            hazmat,
            lead_tcn: None,
            passenger_count: None,
        }
    }

    #[test]
    fn small_items_combine_on_one_pallet() {
        let items = vec![
            item("a", 40.0, 40.0, 30.0, 500.0, false),
            item("b", 30.0, 30.0, 30.0, 400.0, false),
        ];
        let id_gen = IncrementingIdGen::new();
        let result = build_pallets(items, vec![], &id_gen);
        assert_eq!(result.pallets.len(), 1);
        assert_eq!(result.pallets[0].items.len(), 2);
    }

    #[test]
    fn hazmat_never_shares_a_pallet_with_non_hazmat() {
        let items = vec![
            item("h", 30.0, 30.0, 20.0, 200.0, true),
            item("n", 30.0, 30.0, 20.0, 200.0, false),
        ];
        let id_gen = IncrementingIdGen::new();
        let result = build_pallets(items, vec![], &id_gen);
        assert_eq!(result.pallets.len(), 2);
        assert!(result.pallets.iter().any(|p| p.hazmat));
        assert!(result.pallets.iter().any(|p| !p.hazmat));
    }

    #[test]
    fn overheight_item_is_unbuildable() {
        let items = vec![item("tall", 40.0, 40.0, 101.0, 500.0, false)];
        let id_gen = IncrementingIdGen::new();
        let result = build_pallets(items, vec![], &id_gen);
        assert!(result.pallets.is_empty());
        assert_eq!(result.unbuildable.len(), 1);
    }

    #[test]
    fn height_exactly_96_keeps_low_tier_limit() {
        let items = vec![item("border", 40.0, 40.0, 96.0, 9900.0, false)];
        let id_gen = IncrementingIdGen::new();
        let result = build_pallets(items, vec![], &id_gen);
        assert_eq!(result.pallets.len(), 1);
        assert!(!result.pallets[0].is_overweight());
    }

    #[test]
    fn overweight_for_tier_opens_new_pallet() {
        let items = vec![
            item("heavy1", 50.0, 50.0, 50.0, 9500.0, false),
            item("heavy2", 50.0, 50.0, 50.0, 9500.0, false),
        ];
        let id_gen = IncrementingIdGen::new();
        let result = build_pallets(items, vec![], &id_gen);
        assert_eq!(result.pallets.len(), 2);
    }
}

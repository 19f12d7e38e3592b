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

//! The Manifest Normalizer: raw records in, classified
//! [`CargoItem`]s out, with every issue surfaced as a structured [`Issue`]
//! rather than a call failure.

use std::collections::HashSet;

use super::{CargoItem, Category, RawRecord, RawValue};
use crate::issue::{Issue, IssueCode, Severity};
use crate::measurements::{Length, Mass};

const DEFAULT_DIMENSION_IN: f64 = 24.0;
const DEFAULT_WEIGHT_LB: f64 = 100.0;
const LB_PER_PASSENGER: f64 = 225.0;
const MAX_PASSENGER_COUNT: f64 = 500.0;

const USABLE_PALLET_LENGTH_IN: f64 = 104.0;
const USABLE_PALLET_WIDTH_IN: f64 = 84.0;
const OUTER_PALLET_LENGTH_IN: f64 = 108.0;
const OUTER_PALLET_WIDTH_IN: f64 = 88.0;
const PREBUILT_PALLET_TOLERANCE_IN: f64 = 5.0;
const MAX_PALLET_HEIGHT_IN: f64 = 100.0;
const PALLET_HEIGHT_TIER_IN: f64 = 96.0;
const PALLET_PAYLOAD_LOW_TIER_LB: f64 = 10_000.0;
const PALLET_PAYLOAD_HIGH_TIER_LB: f64 = 8_000.0;

/// Widest ramp clearance among the engine's reference profiles (the C-17's,
/// §6) and the narrower clearance shared by the C-130 variants — used only
/// to pre-flag oversize rolling stock at normalization time; the Vehicle
/// Placer re-checks against the actual profile a vehicle is offered
/// to.
const C17_RAMP_CLEARANCE_IN: f64 = 144.0;
const C130_RAMP_CLEARANCE_IN: f64 = 119.0;

const ROLLING_STOCK_KEYWORDS: &[&str] = &[
    "TRACTOR", "LOADER", "VEHICLE", "TRUCK", "TRAILER", "FORKLIFT", "TOW",
];

/// The normalized manifest returned by [`normalize`].
#[derive(Clone, Debug, Default)]
pub struct NormalizedManifest {
    pub items: Vec<CargoItem>,
    pub warnings: Vec<Issue>,
    pub errors: Vec<Issue>,
    pub summary: Summary,
}

/// Item counts by category and total manifest weight.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Summary {
    pub rolling_stock_count: u32,
    pub palletizable_count: u32,
    pub prebuilt_pallet_count: u32,
    pub passenger_count: u32,
    pub total_weight: Mass,
}

impl Summary {
    fn record(&mut self, item: &CargoItem) {
        match item.category {
            Category::RollingStock => self.rolling_stock_count += 1,
            Category::Palletizable => self.palletizable_count += 1,
            Category::PrebuiltPallet => self.prebuilt_pallet_count += 1,
            Category::Passenger => self.passenger_count += 1,
        }
        self.total_weight = self.total_weight + item.weight;
    }
}

/// Normalizes a sequence of loosely-typed [`RawRecord`]s into
/// [`CargoItem`]s.
///
/// No raw record ever aborts this call: every defect becomes a structured
/// [`Issue`] attached to the still-returned manifest.
pub fn normalize(records: &[RawRecord]) -> NormalizedManifest {
    let mut manifest = NormalizedManifest::default();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (position, record) in records.iter().enumerate() {
        let mut issues = Vec::new();

        let item_id = resolve_id(record, position, &mut seen_ids, &mut issues);

        if let Some(item) = classify_record(record, &item_id, &mut issues) {
            log::debug!(
                "normalized {} -> {:?} ({} issue(s))",
                item.id,
                item.category,
                issues.len()
            );
            expand_and_push(item, &mut manifest, &mut issues);
        }

        for issue in issues {
            issue.log();
            if issue.is_error() {
                manifest.errors.push(issue);
            } else {
                manifest.warnings.push(issue);
            }
        }
    }

    manifest
}

fn resolve_id(
    record: &RawRecord,
    position: usize,
    seen_ids: &mut HashSet<String>,
    issues: &mut Vec<Issue>,
) -> String {
    let candidate = record
        .item_id
        .clone()
        .unwrap_or_else(|| position.to_string());

    if seen_ids.contains(&candidate) {
        let deduped = format!("{candidate}_dup{}", seen_ids.len());
        issues.push(
            crate::issue!(
                Error,
                DuplicateItemId,
                "item id {:?} already used, renamed to {:?}",
                candidate,
                deduped
            )
            .with_field("item_id")
            .with_suggestion("assign unique item_id values upstream"),
        );
        seen_ids.insert(deduped.clone());
        deduped
    } else {
        seen_ids.insert(candidate.clone());
        candidate
    }
}

/// Builds a single [`CargoItem`] from `record`, or `None` if the record is
/// a passenger-count entry exceeding the plausible range and no cargo
/// classification applies either.
fn classify_record(record: &RawRecord, item_id: &str, issues: &mut Vec<Issue>) -> Option<CargoItem> {
    if let Some(passenger_count) = passenger_count(record, issues) {
        return Some(CargoItem {
            id: item_id.to_string(),
            description: description_of(record, item_id, issues),
            category: Category::Passenger,
            quantity: 1,
            length: Length::inch(0.0),
            width: Length::inch(0.0),
            height: Length::inch(0.0),
            weight: Mass::lb(LB_PER_PASSENGER * passenger_count as f64),
            axle_weights: None,
            advance_party: record.advon_flag.unwrap_or(false),
            hazmat: false,
            lead_tcn: record.lead_tcn.clone(),
            passenger_count: Some(passenger_count),
        });
    }

    let description = description_of(record, item_id, issues);
    let (length, width, height) = dimensions_of(record, item_id, issues);
    let weight = weight_of(record, item_id, issues);
    let quantity = record
        .quantity
        .as_ref()
        .and_then(RawValue::as_number)
        .filter(|q| *q >= 1.0)
        .map(|q| q as u32)
        .unwrap_or(1);

    let mut hazmat = record.hazmat_flag.unwrap_or(false);
    let category = category_of(record, &description, length, width, issues);

    if category == Category::Passenger {
        // A description-only "PAX" match with no numeric field; hazmat
        // makes no sense on a passenger entry.
        if hazmat {
            issues.push(
                crate::issue!(
                    Error,
                    PaxHazmatMix,
                    "item {} classified as passengers cannot carry hazmat",
                    item_id
                )
                .with_item_ref(item_id),
            );
            hazmat = false;
        }
        return Some(CargoItem {
            id: item_id.to_string(),
            description,
            category,
            quantity: 1,
            length: Length::inch(0.0),
            width: Length::inch(0.0),
            height: Length::inch(0.0),
            weight: Mass::lb(LB_PER_PASSENGER),
            axle_weights: None,
            advance_party: record.advon_flag.unwrap_or(false),
            hazmat: false,
            lead_tcn: record.lead_tcn.clone(),
            passenger_count: Some(1),
        });
    }

    apply_limit_checks(item_id, category, width, height, weight, issues);

    let axle_weights = record
        .axle_weights
        .as_ref()
        .map(|axles| axles.iter().map(|w| Mass::lb(*w)).collect());

    Some(CargoItem {
        id: item_id.to_string(),
        description,
        category,
        quantity,
        length,
        width,
        height,
        weight,
        axle_weights,
        advance_party: record.advon_flag.unwrap_or(false),
        hazmat,
        lead_tcn: record.lead_tcn.clone(),
        passenger_count: None,
    })
}

/// Interprets the passenger field per §4.1 step 2. Returns `None` when the
/// record is not a passenger entry at all.
fn passenger_count(record: &RawRecord, issues: &mut Vec<Issue>) -> Option<u32> {
    if let Some(raw) = &record.pax {
        if let Some(n) = raw.as_number() {
            if n >= 1.0 && n <= MAX_PASSENGER_COUNT {
                return Some(n as u32);
            }
            issues.push(crate::issue!(
                Warning,
                MissingField,
                "pax count {} out of plausible range (1..=500), falling back to cargo classification",
                n
            ).with_field("pax"));
            return None;
        }
    } else if let Some(description) = &record.description {
        if description.to_uppercase().contains("PAX") {
            return Some(1);
        }
    }
    None
}

fn description_of(record: &RawRecord, item_id: &str, issues: &mut Vec<Issue>) -> String {
    match &record.description {
        Some(d) if !d.trim().is_empty() => d.clone(),
        _ => {
            issues.push(
                crate::issue!(Warning, MissingField, "item {} has no description", item_id)
                    .with_field("description")
                    .with_item_ref(item_id)
                    .with_suggestion("provide a description for manifest readability"),
            );
            format!("Unknown Item {item_id}")
        }
    }
}

fn dimensions_of(
    record: &RawRecord,
    item_id: &str,
    issues: &mut Vec<Issue>,
) -> (Length, Length, Length) {
    let mut dim = |value: &Option<RawValue>, field: &'static str| -> Length {
        let parsed = value.as_ref().and_then(RawValue::as_number);
        match parsed {
            Some(v) if v > 0.0 => Length::inch(v),
            _ => {
                issues.push(
                    crate::issue!(
                        Warning,
                        ZeroDimensions,
                        "item {} missing or non-positive {}, defaulted to {}\"",
                        item_id,
                        field,
                        DEFAULT_DIMENSION_IN
                    )
                    .with_field(field)
                    .with_item_ref(item_id)
                    .with_suggestion("supply a positive dimension"),
                );
                Length::inch(DEFAULT_DIMENSION_IN)
            }
        }
    };

    (
        dim(&record.length_in, "length_in"),
        dim(&record.width_in, "width_in"),
        dim(&record.height_in, "height_in"),
    )
}

fn weight_of(record: &RawRecord, item_id: &str, issues: &mut Vec<Issue>) -> Mass {
    let parsed = record.weight_lb.as_ref().and_then(RawValue::as_number);
    match parsed {
        Some(v) if v > 0.0 => Mass::lb(v),
        _ => {
            issues.push(
                crate::issue!(
                    Warning,
                    ZeroWeight,
                    "item {} missing or non-positive weight, defaulted to {} lb",
                    item_id,
                    DEFAULT_WEIGHT_LB
                )
                .with_field("weight_lb")
                .with_item_ref(item_id)
                .with_suggestion("supply a positive weight"),
            );
            Mass::lb(DEFAULT_WEIGHT_LB)
        }
    }
}

fn category_of(
    record: &RawRecord,
    description: &str,
    length: Length,
    width: Length,
    issues: &mut Vec<Issue>,
) -> Category {
    if let Some(explicit) = &record.r#type {
        match explicit.to_uppercase().replace(['-', ' '], "_").as_str() {
            "ROLLING_STOCK" => return Category::RollingStock,
            "PALLETIZABLE" => return Category::Palletizable,
            "PREBUILT_PALLET" => return Category::PrebuiltPallet,
            "PASSENGER" => return Category::Passenger,
            other => {
                issues.push(
                    crate::issue!(Error, InvalidType, "unrecognized type token {:?}", other)
                        .with_field("type")
                        .with_suggestion(
                            "use one of ROLLING_STOCK, PALLETIZABLE, PREBUILT_PALLET, PASSENGER",
                        ),
                );
                // fall through to inference below
            }
        }
    }

    let upper = description.to_uppercase();
    if ROLLING_STOCK_KEYWORDS.iter().any(|kw| upper.contains(kw)) {
        return Category::RollingStock;
    }

    let l = length.to_si();
    let w = width.to_si();
    if is_prebuilt_pallet_footprint(l, w) {
        return Category::PrebuiltPallet;
    }
    if exceeds_usable_pallet_area(l, w) {
        return Category::RollingStock;
    }
    Category::Palletizable
}

fn is_prebuilt_pallet_footprint(length_in: f64, width_in: f64) -> bool {
    let matches = |a: f64, b: f64| {
        (a - OUTER_PALLET_WIDTH_IN).abs() <= PREBUILT_PALLET_TOLERANCE_IN
            && (b - OUTER_PALLET_LENGTH_IN).abs() <= PREBUILT_PALLET_TOLERANCE_IN
    };
    matches(length_in, width_in) || matches(width_in, length_in)
}

fn exceeds_usable_pallet_area(length_in: f64, width_in: f64) -> bool {
    let fits = |a: f64, b: f64| a <= USABLE_PALLET_LENGTH_IN && b <= USABLE_PALLET_WIDTH_IN;
    !(fits(length_in, width_in) || fits(width_in, length_in))
}

fn apply_limit_checks(
    item_id: &str,
    category: Category,
    width: Length,
    height: Length,
    weight: Mass,
    issues: &mut Vec<Issue>,
) {
    match category {
        Category::Palletizable | Category::PrebuiltPallet => {
            let h = height.to_si();
            if h > MAX_PALLET_HEIGHT_IN {
                issues.push(
                    crate::issue!(
                        Warning,
                        OverheightPallet,
                        "item {} height {:.1}\" exceeds the 100\" pallet stack limit",
                        item_id,
                        h
                    )
                    .with_item_ref(item_id)
                    .with_field("height_in"),
                );
            } else {
                let tier_limit = if h <= PALLET_HEIGHT_TIER_IN {
                    PALLET_PAYLOAD_LOW_TIER_LB
                } else {
                    PALLET_PAYLOAD_HIGH_TIER_LB
                };
                if weight.to_si() > tier_limit {
                    issues.push(
                        crate::issue!(
                            Warning,
                            OverweightPallet,
                            "item {} weight {:.0} lb exceeds the {:.0} lb limit for {:.1}\" stack height",
                            item_id,
                            weight.to_si(),
                            tier_limit,
                            h
                        )
                        .with_item_ref(item_id)
                        .with_field("weight_lb"),
                    );
                }
            }
        }
        Category::RollingStock => {
            let w = width.to_si();
            if w > C17_RAMP_CLEARANCE_IN {
                issues.push(
                    crate::issue!(
                        Warning,
                        RollingStockTooWide,
                        "item {} width {:.1}\" exceeds every known ramp clearance",
                        item_id,
                        w
                    )
                    .with_item_ref(item_id)
                    .with_field("width_in")
                    .with_suggestion("no aircraft accepts this item"),
                );
            } else if w > C130_RAMP_CLEARANCE_IN {
                issues.push(
                    crate::issue!(
                        Warning,
                        RollingStockTooWide,
                        "item {} width {:.1}\" exceeds the C-130 ramp clearance",
                        item_id,
                        w
                    )
                    .with_item_ref(item_id)
                    .with_field("width_in")
                    .with_suggestion("C-17 only"),
                );
            }
        }
        Category::Passenger => {}
    }
}

fn expand_and_push(item: CargoItem, manifest: &mut NormalizedManifest, issues: &mut Vec<Issue>) {
    if item.category == Category::Passenger || item.quantity <= 1 {
        manifest.summary.record(&item);
        manifest.items.push(item);
        return;
    }

    let quantity = item.quantity;
    for k in 1..=quantity {
        let mut copy = item.clone();
        copy.id = format!("{}_{}", item.id, k);
        copy.quantity = 1;
        manifest.summary.record(&copy);
        manifest.items.push(copy);
    }
    let _ = issues;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> RawRecord {
        RawRecord {
            item_id: Some(id.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn missing_dimensions_and_weight_default_with_warnings() {
        let manifest = normalize(&[record("a")]);
        assert_eq!(manifest.items.len(), 1);
        let item = &manifest.items[0];
        assert_eq!(item.length, Length::inch(24.0));
        assert_eq!(item.weight, Mass::lb(100.0));
        assert!(!manifest.warnings.is_empty());
    }

    #[test]
    fn numeric_pax_in_range_becomes_passenger() {
        let mut rec = record("p1");
        rec.pax = Some(RawValue::Number(40.0));
        let manifest = normalize(&[rec]);
        assert_eq!(manifest.items[0].category, Category::Passenger);
        assert_eq!(manifest.items[0].weight, Mass::lb(40.0 * LB_PER_PASSENGER));
    }

    #[test]
    fn pax_above_five_hundred_falls_back_to_cargo() {
        let mut rec = record("p2");
        rec.pax = Some(RawValue::Number(900.0));
        rec.length_in = Some(RawValue::Number(40.0));
        rec.width_in = Some(RawValue::Number(40.0));
        rec.height_in = Some(RawValue::Number(40.0));
        rec.weight_lb = Some(RawValue::Number(500.0));
        let manifest = normalize(&[rec]);
        assert_ne!(manifest.items[0].category, Category::Passenger);
    }

    #[test]
    fn quantity_expands_into_suffixed_items() {
        let mut rec = record("x");
        rec.quantity = Some(RawValue::Number(3.0));
        rec.weight_lb = Some(RawValue::Number(50.0));
        rec.length_in = Some(RawValue::Number(30.0));
        rec.width_in = Some(RawValue::Number(30.0));
        rec.height_in = Some(RawValue::Number(30.0));
        let manifest = normalize(&[rec]);
        assert_eq!(manifest.items.len(), 3);
        assert_eq!(manifest.items[0].id, "x_1");
        assert_eq!(manifest.items[2].id, "x_3");
        let total: f64 = manifest.items.iter().map(|i| i.weight.to_si()).sum();
        assert_eq!(total, 150.0);
    }

    #[test]
    fn keyword_description_classifies_rolling_stock() {
        let mut rec = record("v1");
        rec.description = Some("10k FORKLIFT".to_string());
        rec.length_in = Some(RawValue::Number(180.0));
        rec.width_in = Some(RawValue::Number(96.0));
        rec.height_in = Some(RawValue::Number(90.0));
        rec.weight_lb = Some(RawValue::Number(15000.0));
        let manifest = normalize(&[rec]);
        assert_eq!(manifest.items[0].category, Category::RollingStock);
    }

    #[test]
    fn footprint_near_463l_is_prebuilt_pallet() {
        let mut rec = record("pp1");
        rec.length_in = Some(RawValue::Number(88.0));
        rec.width_in = Some(RawValue::Number(108.0));
        rec.height_in = Some(RawValue::Number(60.0));
        rec.weight_lb = Some(RawValue::Number(4000.0));
        let manifest = normalize(&[rec]);
        assert_eq!(manifest.items[0].category, Category::PrebuiltPallet);
    }

    #[test]
    fn footprint_4_inches_off_463l_is_still_prebuilt_pallet() {
        let mut rec = record("pp2");
        rec.length_in = Some(RawValue::Number(84.0));
        rec.width_in = Some(RawValue::Number(104.0));
        rec.height_in = Some(RawValue::Number(60.0));
        rec.weight_lb = Some(RawValue::Number(4000.0));
        let manifest = normalize(&[rec]);
        assert_eq!(manifest.items[0].category, Category::PrebuiltPallet);
    }

    #[test]
    fn duplicate_ids_are_renamed_and_flagged() {
        let manifest = normalize(&[record("dup"), record("dup")]);
        assert_eq!(manifest.items.len(), 2);
        assert_ne!(manifest.items[0].id, manifest.items[1].id);
        assert!(manifest
            .errors
            .iter()
            .any(|i| i.code == IssueCode::DuplicateItemId));
    }

    #[test]
    fn idempotent_on_already_normalized_records() {
        let first = normalize(&[record("idem")]);
        let second_records: Vec<RawRecord> = first
            .items
            .iter()
            .map(|item| RawRecord {
                item_id: Some(item.id.clone()),
                description: Some(item.description.clone()),
                length_in: Some(RawValue::Number(item.length.to_si())),
                width_in: Some(RawValue::Number(item.width.to_si())),
                height_in: Some(RawValue::Number(item.height.to_si())),
                weight_lb: Some(RawValue::Number(item.weight.to_si())),
                ..Default::default()
            })
            .collect();
        let second = normalize(&second_records);
        assert_eq!(first.items.len(), second.items.len());
        assert!(second.warnings.is_empty());
    }
}

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

//! Black-box scenarios exercising the public entry points end to end.

use airlift::allocate::{AllocationPolicy, AllocationStatus, FleetAvailability, Mode};
use airlift::geom::EnvelopeStatus;
use airlift::idgen::IncrementingIdGen;
use airlift::issue::IssueCode;
use airlift::manifest::{classify, normalize, ClassifiedManifest, PhaseManifest, RawRecord, RawValue};
use airlift::plan::{plan_aircraft, Phase, PlanState};
use airlift::profile::reference::c17;
use airlift::profile::{AircraftTypeId, ProfileRegistry};

fn raw(id: &str, l: f64, w: f64, h: f64, weight: f64) -> RawRecord {
    RawRecord {
        item_id: Some(id.to_string()),
        length_in: Some(RawValue::Number(l)),
        width_in: Some(RawValue::Number(w)),
        height_in: Some(RawValue::Number(h)),
        weight_lb: Some(RawValue::Number(weight)),
        ..Default::default()
    }
}

fn classify_records(records: &[RawRecord]) -> ClassifiedManifest {
    let normalized = normalize(records);
    classify(&normalized)
}

#[test]
fn minimal_feasible_single_pallet_on_one_c17() {
    let registry = ProfileRegistry::standard();
    let manifest = classify_records(&[raw("crate1", 40.0, 40.0, 40.0, 1000.0)]);
    let availability = vec![FleetAvailability::new("C-17", 1)];
    let policy = AllocationPolicy::new(Mode::PreferredFirst);
    let id_gen = IncrementingIdGen::new();

    let result = airlift::allocate(&manifest, &registry, &availability, &policy, &id_gen);

    assert_eq!(result.status, AllocationStatus::Feasible);
    assert_eq!(result.load_plans.len(), 1);
    assert_eq!(result.load_plans[0].pallets.len(), 1);
    assert!(result.unplaced_items.is_empty());
    assert!(result.metrics.utilization < 0.05);
}

#[test]
fn heavy_pallet_is_kept_off_the_ramp() {
    let profile = c17();
    let mut subset = PhaseManifest::default();
    let records = classify_records(&[raw("heavy", 84.0, 60.0, 80.0, 9000.0)]);
    subset.palletizable = records.main.palletizable;
    let id_gen = IncrementingIdGen::new();

    let (plan, unplaced, _issues) = plan_aircraft(&profile, &subset, 1, Phase::Main, &id_gen);

    assert!(unplaced.is_empty());
    assert_eq!(plan.pallets.len(), 1);
    assert!(!plan.pallets[0].is_ramp);
}

#[test]
fn forward_loaded_pallets_drift_the_cob_forward_and_warn() {
    let profile = c17();
    let mut subset = PhaseManifest::default();
    for i in 0..3 {
        let records = classify_records(&[raw(&format!("p{i}"), 104.0, 84.0, 40.0, 9500.0)]);
        subset.palletizable.extend(records.main.palletizable);
    }
    let id_gen = IncrementingIdGen::new();

    let (plan, unplaced, issues) = plan_aircraft(&profile, &subset, 1, Phase::Main, &id_gen);

    assert!(unplaced.is_empty());
    assert_eq!(plan.pallets.len(), 3);
    let cob = plan.cob.expect("balanced plan always records CoB");
    assert_eq!(cob.status, EnvelopeStatus::ForwardLimit);
    assert!(issues.iter().any(|i| i.code == IssueCode::CobViolation));
    assert_eq!(plan.state, PlanState::Finalized);
}

#[test]
fn multi_aircraft_fleet_splits_the_manifest_and_clears_residual() {
    let registry = ProfileRegistry::standard();
    let mut records = Vec::new();
    for i in 0..25 {
        records.push(raw(&format!("item{i}"), 40.0, 40.0, 40.0, 8000.0));
    }
    let manifest = classify_records(&records);
    let availability = vec![FleetAvailability::new("C-17", 3)];
    let policy = AllocationPolicy::new(Mode::MinAircraft);
    let id_gen = IncrementingIdGen::new();

    let result = airlift::allocate(&manifest, &registry, &availability, &policy, &id_gen);

    assert_eq!(result.status, AllocationStatus::Feasible);
    assert!(result.load_plans.len() >= 2);
    assert!(result.unplaced_items.is_empty());
    for plan in &result.load_plans {
        assert!(plan.totals.weight.to_si() <= 170_900.0);
    }
}

#[test]
fn mixed_fleet_optimize_cost_reports_a_comparison_against_the_preferred_type() {
    let registry = ProfileRegistry::standard();
    let mut records = Vec::new();
    for i in 0..12 {
        records.push(raw(&format!("cargo{i}"), 40.0, 40.0, 40.0, 8000.0));
    }
    let manifest = classify_records(&records);
    let availability = vec![
        FleetAvailability::new("C-17", 2),
        FleetAvailability::new("C-130J", 4),
    ];
    let policy = AllocationPolicy::new(Mode::OptimizeCost).preferred(AircraftTypeId::new("C-17"));
    let id_gen = IncrementingIdGen::new();

    let result = airlift::allocate(&manifest, &registry, &availability, &policy, &id_gen);

    assert_ne!(result.status, AllocationStatus::Infeasible);
    assert!(result.comparison_data.is_some());
    assert!(result.explanation.contains("OptimizeCost"));
}

#[test]
fn oversize_vehicle_is_flagged_and_lands_in_the_residual() {
    let registry = ProfileRegistry::standard();
    let mut oversize = raw("rig", 200.0, 150.0, 90.0, 20000.0);
    oversize.description = Some("HEAVY TRACTOR".to_string());
    let manifest = classify_records(&[oversize]);

    assert_eq!(manifest.main.rolling_stock.len(), 1);

    let availability = vec![FleetAvailability::new("C-17", 1)];
    let policy = AllocationPolicy::new(Mode::PreferredFirst);
    let id_gen = IncrementingIdGen::new();

    let result = airlift::allocate(&manifest, &registry, &availability, &policy, &id_gen);

    assert_eq!(result.status, AllocationStatus::Partial);
    assert_eq!(result.unplaced_items.len(), 1);
    assert_eq!(result.unplaced_items[0].id, "rig");
}

#[test]
fn zero_item_manifest_is_trivially_feasible() {
    let registry = ProfileRegistry::standard();
    let manifest = classify_records(&[]);
    let availability = vec![FleetAvailability::new("C-17", 1)];
    let policy = AllocationPolicy::new(Mode::PreferredFirst);
    let id_gen = IncrementingIdGen::new();

    let result = airlift::allocate(&manifest, &registry, &availability, &policy, &id_gen);

    assert_eq!(result.status, AllocationStatus::Feasible);
    assert!(result.load_plans.is_empty());
    assert_eq!(result.metrics.total_aircraft, 0);
}

#[test]
fn all_locked_availability_is_infeasible() {
    let registry = ProfileRegistry::standard();
    let manifest = classify_records(&[raw("a", 40.0, 40.0, 40.0, 1000.0)]);
    let availability = vec![FleetAvailability::new("C-17", 2).locked()];
    let policy = AllocationPolicy::new(Mode::PreferredFirst);
    let id_gen = IncrementingIdGen::new();

    let result = airlift::allocate(&manifest, &registry, &availability, &policy, &id_gen);

    assert_eq!(result.status, AllocationStatus::Infeasible);
}

#[test]
fn allocate_is_deterministic_across_identical_runs() {
    let registry = ProfileRegistry::standard();
    let mut records = Vec::new();
    for i in 0..10 {
        records.push(raw(&format!("x{i}"), 40.0, 40.0, 40.0, 3000.0));
    }
    let manifest = classify_records(&records);
    let availability = vec![FleetAvailability::new("C-17", 2)];
    let policy = AllocationPolicy::new(Mode::MinAircraft);

    let first = airlift::allocate(&manifest, &registry, &availability, &policy, &IncrementingIdGen::new());
    let second = airlift::allocate(&manifest, &registry, &availability, &policy, &IncrementingIdGen::new());

    assert_eq!(first.status, second.status);
    assert_eq!(first.aircraft_used, second.aircraft_used);
    assert_eq!(first.load_plans.len(), second.load_plans.len());
    assert_eq!(first.metrics.total_cost, second.metrics.total_cost);
}

#[test]
fn classify_is_idempotent_over_the_same_normalized_manifest() {
    let normalized = normalize(&[raw("only", 40.0, 40.0, 40.0, 1000.0)]);
    assert_eq!(classify(&normalized), classify(&normalized));
}

#[test]
fn quantity_expansion_produces_n_suffixed_items_with_matching_total_weight() {
    let mut record = raw("batch", 30.0, 30.0, 30.0, 500.0);
    record.quantity = Some(RawValue::Number(4.0));

    let normalized = normalize(&[record]);

    assert_eq!(normalized.items.len(), 4);
    for k in 1..=4 {
        assert!(normalized.items.iter().any(|i| i.id == format!("batch_{k}")));
    }
    let total: f64 = normalized.items.iter().map(|i| i.weight.to_si()).sum();
    assert_eq!(total, 2000.0);
}

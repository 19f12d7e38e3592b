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

//! Per-aircraft load planning.

use super::{LoadPlan, Phase, PlacedVehicle, PlanState, Totals};
use crate::geom::compute_cob;
use crate::idgen::IdGen;
use crate::issue::Issue;
use crate::manifest::{CargoItem, PhaseManifest};
use crate::pallet::build_pallets;
use crate::placement::{place_pallets, place_vehicles};
use crate::profile::AircraftProfile;

const UNDERUTILIZED_THRESHOLD: f64 = 0.10;
const PASSENGER_WEIGHT_LB: f64 = 225.0;

/// Plans a single aircraft's load: vehicles, then pallets, then CoB.
///
/// Returns the finalized [`LoadPlan`] together with every item that could
/// not be placed and every [`Issue`] raised along the way. Nothing here
/// fails the call outright — infeasibility is expressed entirely
/// through the unplaced set and the plan's own warnings.
pub fn plan_aircraft(
    profile: &AircraftProfile,
    subset: &PhaseManifest,
    sequence: u32,
    phase: Phase,
    id_gen: &dyn IdGen,
) -> (LoadPlan, Vec<CargoItem>, Vec<Issue>) {
    let mut plan = LoadPlan::new(profile.type_id.clone(), sequence, phase);
    let mut issues = Vec::new();
    let mut unplaced: Vec<CargoItem> = Vec::new();

    log::info!(
        "planning {} sequence {} phase {:?}: {} vehicles, {} palletizable, {} prebuilt",
        profile.type_id,
        sequence,
        phase,
        subset.rolling_stock.len(),
        subset.palletizable.len(),
        subset.prebuilt_pallets.len()
    );

    let vehicle_result = place_vehicles(subset.rolling_stock.clone(), profile, &plan.id);
    issues.extend(vehicle_result.issues);
    unplaced.extend(vehicle_result.unplaced);
    plan.vehicles = vehicle_result
        .placed
        .into_iter()
        .map(|placed_box| {
            let item = subset
                .rolling_stock
                .iter()
                .find(|i| i.id == placed_box.item_id)
                .cloned()
                .expect("placed vehicle must reference an item from this subset");
            PlacedVehicle { item, placed_box }
        })
        .collect();
    plan.state = PlanState::VehiclesPlaced;

    let build_result = build_pallets(
        subset.palletizable.clone(),
        subset.prebuilt_pallets.clone(),
        id_gen,
    );
    issues.extend(build_result.issues);
    unplaced.extend(build_result.unbuildable);

    let vehicle_boxes: Vec<_> = plan.vehicles.iter().map(|v| v.placed_box.clone()).collect();
    let pallet_result = place_pallets(build_result.pallets, profile, &vehicle_boxes, &plan.id);
    issues.extend(pallet_result.issues);
    unplaced.extend(LoadPlan::unplaced_pallets_as_items(&pallet_result.unplaced));
    plan.pallets = pallet_result.placed;
    plan.state = PlanState::PalletsPlaced;

    plan.passenger_count = subset.passenger_count;

    // §4.6 step 6: pop the most recently placed pallet and retry until the
    // aggregate weight clears max_payload or no pallets remain.
    while total_weight(&plan) > profile.max_payload && !plan.pallets.is_empty() {
        let popped = plan.pallets.pop().expect("checked non-empty above");
        issues.push(
            crate::issue!(
                Warning,
                OverweightPosition,
                "plan {} over max payload, popping pallet {} back to unplaced",
                plan.id,
                popped.pallet.id
            )
            .with_item_ref(&popped.pallet.id),
        );
        unplaced.extend(popped.pallet.items);
        plan.state = PlanState::PalletsPlaced;
    }

    for pallet_placement in &plan.pallets {
        if pallet_placement.is_ramp
            && pallet_placement.pallet.gross_weight > profile.ramp_position_weight_limit
        {
            issues.push(
                crate::issue!(
                    Warning,
                    OverweightRamp,
                    "pallet {} on ramp position exceeds the {:.0} lb ramp limit",
                    pallet_placement.pallet.id,
                    profile.ramp_position_weight_limit.to_si()
                )
                .with_item_ref(&pallet_placement.pallet.id),
            );
        } else if !pallet_placement.is_ramp
            && pallet_placement.pallet.gross_weight > profile.main_deck_position_weight_limit
        {
            issues.push(
                crate::issue!(
                    Warning,
                    OverweightPosition,
                    "pallet {} exceeds the {:.0} lb main-deck position limit",
                    pallet_placement.pallet.id,
                    profile.main_deck_position_weight_limit.to_si()
                )
                .with_item_ref(&pallet_placement.pallet.id),
            );
        }
    }

    let placements = plan.all_placements();
    let cob = compute_cob(&placements, profile);
    if cob.status != crate::geom::EnvelopeStatus::InEnvelope {
        issues.push(crate::issue!(
            Warning,
            CobViolation,
            "plan {} CoB {:.1}% MAC is {:?} ({:+.1} pts)",
            plan.id,
            cob.percent_mac,
            cob.status,
            cob.deviation_percent
        ));
    }
    plan.cob = Some(cob);
    plan.state = PlanState::Balanced;

    let weight = total_weight(&plan);
    let positions_used = plan.pallets.len();
    let positions_available = profile.pallet_position_count();
    let utilization = if profile.max_payload.to_si() > 0.0 {
        weight.to_si() / profile.max_payload.to_si()
    } else {
        0.0
    };
    plan.totals = Totals {
        weight,
        positions_used,
        positions_available,
        utilization,
    };

    if utilization < UNDERUTILIZED_THRESHOLD && (positions_used > 0 || !plan.vehicles.is_empty()) {
        issues.push(crate::issue!(
            Info,
            UnderutilizedSortie,
            "plan {} uses only {:.1}% of {} payload",
            plan.id,
            utilization * 100.0,
            profile.type_id
        ));
    }

    plan.state = PlanState::Finalized;

    for issue in &issues {
        issue.log();
    }

    (plan, unplaced, issues)
}

fn total_weight(plan: &LoadPlan) -> crate::measurements::Mass {
    let vehicles: f64 = plan.vehicles.iter().map(|v| v.item.weight.to_si()).sum();
    let pallets: f64 = plan
        .pallets
        .iter()
        .map(|p| p.pallet.gross_weight.to_si())
        .sum();
    let passengers = plan.passenger_count as f64 * PASSENGER_WEIGHT_LB;
    crate::measurements::Mass::lb(vehicles + pallets + passengers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idgen::IncrementingIdGen;
    use crate::manifest::Category;
    use crate::measurements::{Length, Mass};
    use crate::profile::reference::c17;

    fn pallet_item(id: &str, weight: f64) -> CargoItem {
        CargoItem {
            id: id.to_string(),
            description: id.to_string(),
            category: Category::Palletizable,
            quantity: 1,
            length: Length::inch(40.0),
            width: Length::inch(40.0),
            height: Length::inch(40.0),
            weight: Mass::lb(weight),
            axle_weights: None,
            advance_party: false,
            hazmat: false,
            lead_tcn: None,
            passenger_count: None,
        }
    }

    #[test]
    fn minimal_feasible_plan_places_one_pallet() {
        let profile = c17();
        let mut subset = PhaseManifest::default();
        subset.palletizable.push(pallet_item("a", 1000.0));
        let id_gen = IncrementingIdGen::new();

        let (plan, unplaced, _issues) =
            plan_aircraft(&profile, &subset, 1, Phase::Main, &id_gen);

        assert!(unplaced.is_empty());
        assert_eq!(plan.pallets.len(), 1);
        assert_eq!(plan.state, PlanState::Finalized);
    }

    #[test]
    fn overweight_plan_pops_pallets_until_under_max_payload() {
        let profile = c17();
        let mut subset = PhaseManifest::default();
        for i in 0..25 {
            subset.palletizable.push(pallet_item(&format!("x{i}"), 8000.0));
        }
        let id_gen = IncrementingIdGen::new();

        let (plan, unplaced, _issues) =
            plan_aircraft(&profile, &subset, 1, Phase::Main, &id_gen);

        assert!(total_weight(&plan) <= profile.max_payload);
        assert!(!unplaced.is_empty());
    }
}

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

//! Candidate-mix enumeration, scoring and packing.

use std::collections::HashMap;

use super::{
    AllocationPolicy, AllocationResult, AllocationStatus, ComparisonData, FleetAvailability,
    Metrics, Mode,
};
use crate::idgen::IdGen;
use crate::issue::Issue;
use crate::manifest::{CargoItem, ClassifiedManifest, PhaseManifest};
use crate::plan::{plan_aircraft, LoadPlan, Phase};
use crate::profile::{AircraftProfile, AircraftTypeId, ProfileRegistry};

const MAX_CANDIDATES: usize = 100;

/// One candidate fleet mix: a count of aircraft per type, in the same
/// descending-capacity order used for enumeration and packing.
#[derive(Clone, Debug)]
struct Candidate {
    counts: Vec<(AircraftTypeId, u32)>,
}

impl Candidate {
    fn total_aircraft(&self) -> u32 {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    fn total_capacity(&self, profiles: &HashMap<AircraftTypeId, AircraftProfile>) -> f64 {
        self.counts
            .iter()
            .map(|(type_id, n)| profiles[type_id].max_payload.to_si() * (*n as f64))
            .sum()
    }

    fn total_cost(&self, policy: &AllocationPolicy, profiles: &HashMap<AircraftTypeId, AircraftProfile>) -> f64 {
        self.counts
            .iter()
            .map(|(type_id, n)| {
                let cost = policy
                    .cost_models
                    .get(type_id)
                    .copied()
                    .unwrap_or(profiles[type_id].cost);
                cost.sortie_cost() * (*n as f64)
            })
            .sum()
    }

    fn preferred_count(&self, preferred: &Option<AircraftTypeId>) -> u32 {
        match preferred {
            None => 0,
            Some(type_id) => self
                .counts
                .iter()
                .find(|(t, _)| t == type_id)
                .map(|(_, n)| *n)
                .unwrap_or(0),
        }
    }
}

/// Distributes `manifest` across `availability` according to `policy`.
///
/// Never fails outright: infeasibility is expressed through
/// `AllocationResult::status` and `unplaced_items`, never through a
/// propagated error.
pub fn allocate(
    manifest: &ClassifiedManifest,
    registry: &ProfileRegistry,
    availability: &[FleetAvailability],
    policy: &AllocationPolicy,
    id_gen: &dyn IdGen,
) -> AllocationResult {
    let mut profiles: HashMap<AircraftTypeId, AircraftProfile> = HashMap::new();
    let mut ordered_types: Vec<AircraftTypeId> = Vec::new();
    for availability_entry in availability {
        if let Ok(profile) = registry.get(&availability_entry.type_id) {
            profiles.insert(availability_entry.type_id.clone(), profile.clone());
            ordered_types.push(availability_entry.type_id.clone());
        }
    }
    // Descending capacity order, used by both enumeration and packing.
    ordered_types.sort_by(|a, b| {
        profiles[b]
            .max_payload
            .partial_cmp(&profiles[a].max_payload)
            .unwrap()
    });

    let total_weight = phase_total_weight(&manifest.advance) + phase_total_weight(&manifest.main);

    let available_counts: HashMap<AircraftTypeId, u32> = availability
        .iter()
        .map(|entry| (entry.type_id.clone(), entry.unlocked_count()))
        .collect();
    let locked_counts: HashMap<AircraftTypeId, u32> = availability
        .iter()
        .filter(|entry| entry.locked)
        .map(|entry| (entry.type_id.clone(), entry.count))
        .collect();

    if ordered_types.is_empty() {
        let mut issues = Vec::new();
        issues.push(crate::issue!(
            Error,
            NoAircraftAvailable,
            "no registered aircraft type has availability for this allocation"
        ));
        for issue in &issues {
            issue.log();
        }
        return AllocationResult {
            status: AllocationStatus::Infeasible,
            aircraft_used: HashMap::new(),
            unplaced_items: all_items(manifest),
            load_plans: Vec::new(),
            metrics: Metrics::default(),
            explanation: "no aircraft available for allocation".to_string(),
            comparison_data: None,
        };
    }

    let mut candidates = if policy.mode == Mode::UserLocked {
        vec![Candidate {
            counts: ordered_types
                .iter()
                .map(|t| (t.clone(), locked_counts.get(t).copied().unwrap_or(0)))
                .collect(),
        }]
    } else {
        enumerate_candidates(&ordered_types, &profiles, &available_counts, total_weight)
    };

    if candidates.is_empty() {
        // Best-effort candidate: all available aircraft of each eligible
        // type.
        let best_effort: Vec<(AircraftTypeId, u32)> = ordered_types
            .iter()
            .map(|t| (t.clone(), available_counts.get(t).copied().unwrap_or(0)))
            .collect();
        if best_effort.iter().any(|(_, n)| *n > 0) {
            candidates.push(Candidate { counts: best_effort });
        }
    }

    if candidates.is_empty() {
        let all_locked = available_counts.values().all(|n| *n == 0) && !locked_counts.is_empty();
        let explanation = if all_locked {
            "no unlocked aircraft available for allocation".to_string()
        } else {
            "no aircraft available for allocation".to_string()
        };
        let issue = crate::issue!(
            Error,
            InfeasibleFleet,
            "{}",
            explanation
        );
        issue.log();
        return AllocationResult {
            status: AllocationStatus::Infeasible,
            aircraft_used: HashMap::new(),
            unplaced_items: all_items(manifest),
            load_plans: Vec::new(),
            metrics: Metrics::default(),
            explanation,
            comparison_data: None,
        };
    }

    let counterfactual = if policy.preferred_type_id.is_some() && policy.mode != Mode::PreferredFirst {
        best_preferred_only_candidate(&policy.preferred_type_id, &profiles, &available_counts, total_weight)
    } else {
        None
    };

    let winner_index = score_candidates(&candidates, policy, &profiles, total_weight);
    let winner = candidates[winner_index].clone();

    log::info!(
        "fleet allocator selected mix {:?} under mode {:?} from {} candidates",
        winner.counts,
        policy.mode,
        candidates.len()
    );

    let (load_plans, unplaced_items, mut issues) =
        pack_mix(&winner, &ordered_types, &profiles, manifest, id_gen);

    let total_capacity: f64 = winner.total_capacity(&profiles);
    let total_cost = winner.total_cost(policy, &profiles);
    let total_aircraft = winner.total_aircraft();

    let status = if unplaced_items.is_empty() && total_capacity >= total_weight.to_si() {
        AllocationStatus::Feasible
    } else if !load_plans.is_empty() {
        AllocationStatus::Partial
    } else {
        AllocationStatus::Infeasible
    };

    match status {
        AllocationStatus::Partial => issues.push(crate::issue!(
            Warning,
            PartialAllocation,
            "{} item(s) remain unplaced after allocating {} aircraft",
            unplaced_items.len(),
            total_aircraft
        )),
        AllocationStatus::Infeasible => issues.push(crate::issue!(
            Error,
            InfeasibleFleet,
            "no aircraft could be packed for this manifest"
        )),
        AllocationStatus::Feasible => {}
    }
    for issue in &issues {
        issue.log();
    }

    let cob_average = if load_plans.is_empty() {
        0.0
    } else {
        load_plans
            .iter()
            .filter_map(|p| p.cob.as_ref())
            .map(|c| c.percent_mac)
            .sum::<f64>()
            / load_plans.len() as f64
    };
    let utilization = if total_capacity > 0.0 {
        (total_weight.to_si() - unplaced_weight(&unplaced_items)) / total_capacity
    } else {
        0.0
    };

    let aircraft_used: HashMap<AircraftTypeId, u32> = winner
        .counts
        .iter()
        .filter(|(_, n)| *n > 0)
        .cloned()
        .collect();

    let comparison_data = counterfactual.map(|preferred_only| {
        let preferred_cost = preferred_only.total_cost(policy, &profiles);
        let preferred_aircraft = preferred_only.total_aircraft();
        ComparisonData {
            preferred_only_cost: preferred_cost,
            preferred_only_aircraft: preferred_aircraft,
            cost_delta: total_cost - preferred_cost,
            aircraft_delta: total_aircraft as i64 - preferred_aircraft as i64,
        }
    });

    let explanation = explain(&winner, policy, total_cost, status, &comparison_data);

    AllocationResult {
        status,
        aircraft_used,
        unplaced_items,
        load_plans,
        metrics: Metrics {
            total_cost,
            total_aircraft,
            utilization,
            cob_average,
        },
        explanation,
        comparison_data,
    }
}

fn phase_total_weight(phase: &PhaseManifest) -> crate::measurements::Mass {
    let rolling: f64 = phase.rolling_stock.iter().map(|i| i.weight.to_si()).sum();
    let palletizable: f64 = phase.palletizable.iter().map(|i| i.weight.to_si()).sum();
    let prebuilt: f64 = phase.prebuilt_pallets.iter().map(|i| i.weight.to_si()).sum();
    crate::measurements::Mass::lb(rolling + palletizable + prebuilt) + phase.passenger_weight
}

fn all_items(manifest: &ClassifiedManifest) -> Vec<CargoItem> {
    let mut items = Vec::new();
    for phase in [&manifest.advance, &manifest.main] {
        items.extend(phase.rolling_stock.iter().cloned());
        items.extend(phase.palletizable.iter().cloned());
        items.extend(phase.prebuilt_pallets.iter().cloned());
    }
    items
}

fn unplaced_weight(items: &[CargoItem]) -> f64 {
    items.iter().map(|i| i.weight.to_si()).sum()
}

/// Recursive candidate-mix enumeration in descending-capacity order,
/// capped at [`MAX_CANDIDATES`] complete mixes.
fn enumerate_candidates(
    ordered_types: &[AircraftTypeId],
    profiles: &HashMap<AircraftTypeId, AircraftProfile>,
    available_counts: &HashMap<AircraftTypeId, u32>,
    total_weight: crate::measurements::Mass,
) -> Vec<Candidate> {
    let mut out = Vec::new();
    let mut current: Vec<(AircraftTypeId, u32)> = Vec::new();
    recurse(
        0,
        total_weight.to_si(),
        ordered_types,
        profiles,
        available_counts,
        &mut current,
        &mut out,
    );
    out
}

fn recurse(
    index: usize,
    remaining_weight: f64,
    ordered_types: &[AircraftTypeId],
    profiles: &HashMap<AircraftTypeId, AircraftProfile>,
    available_counts: &HashMap<AircraftTypeId, u32>,
    current: &mut Vec<(AircraftTypeId, u32)>,
    out: &mut Vec<Candidate>,
) {
    if out.len() >= MAX_CANDIDATES {
        return;
    }
    if index == ordered_types.len() {
        if remaining_weight <= 0.0 {
            out.push(Candidate {
                counts: current.clone(),
            });
        }
        return;
    }

    let type_id = &ordered_types[index];
    let capacity = profiles[type_id].max_payload.to_si().max(1.0);
    let available = available_counts.get(type_id).copied().unwrap_or(0);
    let needed = if remaining_weight > 0.0 {
        (remaining_weight / capacity).ceil() as u32
    } else {
        0
    };
    let upper = available.min(needed.max(0));

    let mut count = upper as i64;
    while count >= 0 {
        if out.len() >= MAX_CANDIDATES {
            return;
        }
        current.push((type_id.clone(), count as u32));
        recurse(
            index + 1,
            remaining_weight - capacity * count as f64,
            ordered_types,
            profiles,
            available_counts,
            current,
            out,
        );
        current.pop();
        count -= 1;
    }
}

/// The best-cost candidate restricted to the preferred type that still
/// meets total weight, if any.
fn best_preferred_only_candidate(
    preferred: &Option<AircraftTypeId>,
    profiles: &HashMap<AircraftTypeId, AircraftProfile>,
    available_counts: &HashMap<AircraftTypeId, u32>,
    total_weight: crate::measurements::Mass,
) -> Option<Candidate> {
    let preferred_type = preferred.as_ref()?;
    let profile = profiles.get(preferred_type)?;
    let available = available_counts.get(preferred_type).copied().unwrap_or(0);
    let capacity = profile.max_payload.to_si().max(1.0);
    let needed = (total_weight.to_si() / capacity).ceil().max(0.0) as u32;
    if needed > available {
        return None;
    }
    Some(Candidate {
        counts: vec![(preferred_type.clone(), needed)],
    })
}

/// Scores every candidate per §4.7 step 3 and returns the winning index,
/// breaking ties by insertion order.
fn score_candidates(
    candidates: &[Candidate],
    policy: &AllocationPolicy,
    profiles: &HashMap<AircraftTypeId, AircraftProfile>,
    total_weight: crate::measurements::Mass,
) -> usize {
    let max_cost = candidates
        .iter()
        .map(|c| c.total_cost(policy, profiles))
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let max_aircraft = candidates
        .iter()
        .map(|c| c.total_aircraft())
        .max()
        .unwrap_or(1)
        .max(1) as f64;
    let (w_pref, w_cost, w_aircraft) = policy.mode.weights();
    let strength = policy.preference_strength as f64 / 100.0;

    let mut best_index = 0;
    let mut best_score = f64::NEG_INFINITY;

    for (index, candidate) in candidates.iter().enumerate() {
        let total_aircraft = candidate.total_aircraft();
        let preference = if policy.preferred_type_id.is_none() {
            1.0
        } else {
            candidate.preferred_count(&policy.preferred_type_id) as f64 / total_aircraft.max(1) as f64
        } * strength;

        let cost = 1.0 - candidate.total_cost(policy, profiles) / max_cost;
        let aircraft = 1.0 - total_aircraft as f64 / max_aircraft;
        let capacity = candidate.total_capacity(profiles).max(1.0);
        let utilization_bonus = (total_weight.to_si() / capacity).min(1.0) * 0.1;

        let score = w_pref * preference + w_cost * cost.max(0.0) + w_aircraft * aircraft.max(0.0)
            + utilization_bonus;

        if score > best_score {
            best_score = score;
            best_index = index;
        }
    }

    best_index
}

/// Invokes the Load Planner once per aircraft in the winning mix, in
/// descending-capacity order, handing each a deterministically-ordered
/// slice of the pending queue.
fn pack_mix(
    winner: &Candidate,
    ordered_types: &[AircraftTypeId],
    profiles: &HashMap<AircraftTypeId, AircraftProfile>,
    manifest: &ClassifiedManifest,
    id_gen: &dyn IdGen,
) -> (Vec<LoadPlan>, Vec<CargoItem>, Vec<Issue>) {
    let mut load_plans = Vec::new();
    let mut issues = Vec::new();

    let counts: HashMap<&AircraftTypeId, u32> =
        winner.counts.iter().map(|(t, n)| (t, *n)).collect();

    let mut pending_advance = sorted_pending(&manifest.advance);
    let mut pending_main = sorted_pending(&manifest.main);

    let mut sequence = 0;
    for type_id in ordered_types {
        let count = counts.get(type_id).copied().unwrap_or(0);
        if count == 0 {
            continue;
        }
        let profile = &profiles[type_id];
        for _ in 0..count {
            sequence += 1;
            if !pending_advance.is_empty() {
                let subset = take_subset(&mut pending_advance);
                let (plan, unplaced, plan_issues) =
                    plan_aircraft(profile, &subset, sequence, Phase::Advance, id_gen);
                issues.extend(plan_issues);
                pending_advance = requeue(unplaced, pending_advance);
                load_plans.push(plan);
            } else if !pending_main.is_empty() {
                let subset = take_subset(&mut pending_main);
                let (plan, unplaced, plan_issues) =
                    plan_aircraft(profile, &subset, sequence, Phase::Main, id_gen);
                issues.extend(plan_issues);
                pending_main = requeue(unplaced, pending_main);
                load_plans.push(plan);
            }
        }
    }

    let mut unplaced_items = pending_advance;
    unplaced_items.extend(pending_main);
    (load_plans, unplaced_items, issues)
}

/// Orders a phase's items into the deterministic pending queue: rolling
/// stock by weight desc, then palletizable/prebuilt items (via the
/// Pallet Builder) by footprint desc.
fn sorted_pending(phase: &PhaseManifest) -> PhaseManifest {
    let mut rolling_stock = phase.rolling_stock.clone();
    rolling_stock.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap());

    let mut palletizable = phase.palletizable.clone();
    palletizable.sort_by(|a, b| b.footprint_area().partial_cmp(&a.footprint_area()).unwrap());

    let mut prebuilt_pallets = phase.prebuilt_pallets.clone();
    prebuilt_pallets.sort_by(|a, b| b.footprint_area().partial_cmp(&a.footprint_area()).unwrap());

    PhaseManifest {
        rolling_stock,
        palletizable,
        prebuilt_pallets,
        passenger_count: phase.passenger_count,
        passenger_weight: phase.passenger_weight,
    }
}

/// Hands one aircraft the entire remaining pending queue; the Load
/// Planner itself decides what fits and returns the rest as unplaced.
fn take_subset(pending: &mut PhaseManifest) -> PhaseManifest {
    std::mem::take(pending)
}

fn requeue(unplaced: Vec<CargoItem>, mut consumed: PhaseManifest) -> PhaseManifest {
    use crate::manifest::Category;
    consumed.rolling_stock.clear();
    consumed.palletizable.clear();
    consumed.prebuilt_pallets.clear();
    for item in unplaced {
        match item.category {
            Category::RollingStock => consumed.rolling_stock.push(item),
            Category::Palletizable => consumed.palletizable.push(item),
            Category::PrebuiltPallet => consumed.prebuilt_pallets.push(item),
            Category::Passenger => {}
        }
    }
    consumed
}

fn explain(
    winner: &Candidate,
    policy: &AllocationPolicy,
    total_cost: f64,
    status: AllocationStatus,
    comparison: &Option<ComparisonData>,
) -> String {
    let mix: Vec<String> = winner
        .counts
        .iter()
        .filter(|(_, n)| *n > 0)
        .map(|(t, n)| format!("{n}x {t}"))
        .collect();
    let mix_text = if mix.is_empty() {
        "no aircraft".to_string()
    } else {
        mix.join(", ")
    };

    let mut sentence = format!(
        "{status:?}: allocated {mix_text} at a total cost of {total_cost:.0} under {mode:?}",
        status = status,
        mix_text = mix_text,
        total_cost = total_cost,
        mode = policy.mode
    );

    if let Some(comparison) = comparison {
        sentence.push_str(&format!(
            ", versus a preferred-only mix costing {:.0} ({:+.0} cost, {:+} aircraft)",
            comparison.preferred_only_cost, comparison.cost_delta, comparison.aircraft_delta
        ));
    }

    sentence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idgen::IncrementingIdGen;
    use crate::manifest::{CargoItem, Category};
    use crate::measurements::{Length, Mass};

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

    fn manifest_with(items: Vec<CargoItem>) -> ClassifiedManifest {
        let mut main = PhaseManifest::default();
        for item in items {
            main.palletizable.push(item);
        }
        ClassifiedManifest {
            advance: PhaseManifest::default(),
            main,
        }
    }

    #[test]
    fn single_light_manifest_is_feasible_on_one_c130() {
        let registry = ProfileRegistry::standard();
        let manifest = manifest_with(vec![pallet_item("a", 2000.0)]);
        let availability = vec![FleetAvailability::new("C-130H", 2)];
        let policy = AllocationPolicy::new(Mode::MinAircraft);
        let id_gen = IncrementingIdGen::new();

        let result = allocate(&manifest, &registry, &availability, &policy, &id_gen);

        assert_eq!(result.status, AllocationStatus::Feasible);
        assert_eq!(result.load_plans.len(), 1);
        assert!(result.unplaced_items.is_empty());
    }

    #[test]
    fn no_availability_is_infeasible() {
        let registry = ProfileRegistry::standard();
        let manifest = manifest_with(vec![pallet_item("a", 2000.0)]);
        let availability: Vec<FleetAvailability> = vec![];
        let policy = AllocationPolicy::new(Mode::MinAircraft);
        let id_gen = IncrementingIdGen::new();

        let result = allocate(&manifest, &registry, &availability, &policy, &id_gen);

        assert_eq!(result.status, AllocationStatus::Infeasible);
        assert!(!result.unplaced_items.is_empty());
    }

    #[test]
    fn insufficient_aircraft_yields_partial_with_unplaced_residual() {
        let registry = ProfileRegistry::standard();
        let mut items = Vec::new();
        for i in 0..60 {
            items.push(pallet_item(&format!("x{i}"), 9000.0));
        }
        let manifest = manifest_with(items);
        let availability = vec![FleetAvailability::new("C-130H", 1)];
        let policy = AllocationPolicy::new(Mode::MinAircraft);
        let id_gen = IncrementingIdGen::new();

        let result = allocate(&manifest, &registry, &availability, &policy, &id_gen);

        assert_ne!(result.status, AllocationStatus::Feasible);
        assert!(!result.unplaced_items.is_empty());
    }

    #[test]
    fn user_locked_mode_uses_exactly_the_locked_counts() {
        let registry = ProfileRegistry::standard();
        let manifest = manifest_with(vec![pallet_item("a", 2000.0)]);
        let availability = vec![FleetAvailability::new("C-17", 1).locked()];
        let policy = AllocationPolicy::new(Mode::UserLocked);
        let id_gen = IncrementingIdGen::new();

        let result = allocate(&manifest, &registry, &availability, &policy, &id_gen);

        assert_eq!(result.aircraft_used.get(&AircraftTypeId::new("C-17")), Some(&1));
    }

    #[test]
    fn all_locked_availability_is_infeasible_with_specific_explanation() {
        let registry = ProfileRegistry::standard();
        let manifest = manifest_with(vec![pallet_item("a", 2000.0)]);
        let availability = vec![FleetAvailability::new("C-17", 2).locked()];
        let policy = AllocationPolicy::new(Mode::MinAircraft);
        let id_gen = IncrementingIdGen::new();

        let result = allocate(&manifest, &registry, &availability, &policy, &id_gen);

        assert_eq!(result.status, AllocationStatus::Infeasible);
        assert!(result.explanation.contains("no unlocked aircraft"));
    }
}

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

//! The Vehicle Placer.
//!
//! Heavier vehicles anchor the center of balance first; each vehicle picks
//! the lane whose remaining room keeps the running lateral CoB closest to
//! zero, then slides aft in 6" steps until it clears bounds, height-zone
//! and clearance validation.

use crate::geom::{
    bounds_issues, floor_loading_issue, lateral_clearance_issue, longitudinal_clearance_issue,
    overlaps_3d, Deck, PlacedBox, PlacementKind,
};
use crate::issue::Issue;
use crate::manifest::CargoItem;
use crate::measurements::Length;
use crate::profile::AircraftProfile;

const SLIDE_STEP_IN: f64 = 6.0;

#[derive(Clone, Debug, Default)]
pub struct VehiclePlacementResult {
    pub placed: Vec<PlacedBox>,
    pub unplaced: Vec<CargoItem>,
    pub issues: Vec<Issue>,
}

struct Lane {
    y_center: Length,
    width: Length,
    next_x: Length,
}

/// Places `items` (assumed to all be `ROLLING_STOCK`) into `profile`'s
/// cargo bay.
pub fn place_vehicles(
    mut items: Vec<CargoItem>,
    profile: &AircraftProfile,
    load_plan_id: &str,
) -> VehiclePlacementResult {
    let mut result = VehiclePlacementResult::default();
    items.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap());

    let mut lanes: Vec<Lane> = Vec::new();
    let mut used_left_in = 0.0_f64;
    let mut used_right_in = 0.0_f64;
    let mut running_weight = 0.0_f64;
    let mut running_moment = 0.0_f64;

    for item in items {
        let width = item.width.to_si();
        let height = item.height.to_si();

        if height > profile.cargo_height.to_si() {
            result.issues.push(
                crate::issue!(
                    Error,
                    RollingStockTooTall,
                    "{} height {:.1}\" exceeds the {:.1}\" cargo bay height",
                    item.id,
                    height,
                    profile.cargo_height.to_si()
                )
                .with_item_ref(&item.id),
            );
            result.unplaced.push(item);
            continue;
        }
        if width > profile.cargo_width.to_si() {
            result.issues.push(
                crate::issue!(
                    Error,
                    RollingStockTooWide,
                    "{} width {:.1}\" exceeds the {:.1}\" cargo bay width",
                    item.id,
                    width,
                    profile.cargo_width.to_si()
                )
                .with_item_ref(&item.id)
                .with_suggestion("no aircraft accepts this item"),
            );
            result.unplaced.push(item);
            continue;
        }
        let ramp_restricted = width > profile.ramp_clearance_width.to_si();
        if ramp_restricted {
            result.issues.push(
                crate::issue!(
                    Warning,
                    OversizeForSmallProfile,
                    "{} width {:.1}\" exceeds ramp clearance, restricted to non-ramp positions",
                    item.id,
                    width
                )
                .with_item_ref(&item.id),
            );
        }

        let x_limit = if ramp_restricted {
            profile.ramp_start
        } else {
            profile.bay_start + profile.total_length()
        };

        match find_and_place(
            &item,
            profile,
            load_plan_id,
            x_limit,
            &mut lanes,
            &mut used_left_in,
            &mut used_right_in,
            running_weight,
            running_moment,
            &result.placed,
        ) {
            Some((placed, clearance_warnings)) => {
                running_weight += item.weight.to_si();
                running_moment += item.weight.to_si() * placed.y_center.to_si();
                result.issues.extend(clearance_warnings);
                if let Some(issue) = floor_loading_issue(&placed, profile) {
                    result.issues.push(issue);
                }
                result.placed.push(placed);
            }
            None => {
                result.issues.push(
                    crate::issue!(
                        Error,
                        Collision3D,
                        "no admissible lane/position found for rolling stock {}",
                        item.id
                    )
                    .with_item_ref(&item.id),
                );
                result.unplaced.push(item);
            }
        }
    }

    result
}

#[allow(clippy::too_many_arguments)]
fn find_and_place(
    item: &CargoItem,
    profile: &AircraftProfile,
    load_plan_id: &str,
    x_limit: Length,
    lanes: &mut Vec<Lane>,
    used_left_in: &mut f64,
    used_right_in: &mut f64,
    running_weight: f64,
    running_moment: f64,
    already_placed: &[PlacedBox],
) -> Option<(PlacedBox, Vec<Issue>)> {
    // Candidate lane indices, plus a synthetic "open a new lane" option
    // represented as `None`.
    let mut candidates: Vec<Option<usize>> = (0..lanes.len())
        .filter(|&i| lanes[i].width.to_si() >= item.width.to_si())
        .map(Some)
        .collect();

    let opens_new_lane = *used_left_in + *used_right_in + item.width.to_si()
        <= profile.cargo_width.to_si();
    if opens_new_lane {
        candidates.push(None);
    }

    // Score each candidate by resulting |lateral CoB|, tie-break by the
    // lane's remaining unused length.
    let mut scored: Vec<(Option<usize>, f64, f64)> = candidates
        .into_iter()
        .map(|c| {
            let (cob, remaining) = candidate_score(
                c,
                item,
                profile,
                lanes.as_slice(),
                *used_left_in,
                *used_right_in,
                running_weight,
                running_moment,
                x_limit,
            );
            (c, cob, remaining)
        })
        .collect();
    scored.sort_by(|(_, cob_a, len_a), (_, cob_b, len_b)| {
        cob_a
            .partial_cmp(cob_b)
            .unwrap()
            .then(len_b.partial_cmp(len_a).unwrap())
    });

    for (candidate, _, _) in scored {
        let lane_index = match candidate {
            Some(i) => i,
            None => {
                let side_left = *used_left_in <= *used_right_in;
                let y_center = if side_left {
                    Length::inch(-(*used_left_in + item.width.to_si() / 2.0))
                } else {
                    Length::inch(*used_right_in + item.width.to_si() / 2.0)
                };
                lanes.push(Lane {
                    y_center,
                    width: item.width,
                    next_x: profile.bay_start,
                });
                if side_left {
                    *used_left_in += item.width.to_si();
                } else {
                    *used_right_in += item.width.to_si();
                }
                lanes.len() - 1
            }
        };

        if let Some(result) = try_slide_into_lane(
            item,
            profile,
            load_plan_id,
            x_limit,
            &mut lanes[lane_index],
            already_placed,
        ) {
            return Some(result);
        }
    }

    None
}

#[allow(clippy::too_many_arguments)]
fn candidate_score(
    candidate: Option<usize>,
    item: &CargoItem,
    profile: &AircraftProfile,
    lanes: &[Lane],
    used_left_in: f64,
    used_right_in: f64,
    running_weight: f64,
    running_moment: f64,
    x_limit: Length,
) -> (f64, f64) {
    let (y_center, next_x) = match candidate {
        Some(i) => (lanes[i].y_center.to_si(), lanes[i].next_x.to_si()),
        None => {
            let side_left = used_left_in <= used_right_in;
            let y = if side_left {
                -(used_left_in + item.width.to_si() / 2.0)
            } else {
                used_right_in + item.width.to_si() / 2.0
            };
            (y, profile.bay_start.to_si())
        }
    };

    let new_weight = running_weight + item.weight.to_si();
    let new_moment = running_moment + item.weight.to_si() * y_center;
    let cob = if new_weight > 0.0 {
        (new_moment / new_weight).abs()
    } else {
        0.0
    };
    let remaining_length = (x_limit.to_si() - next_x).max(0.0);
    (cob, remaining_length)
}

fn try_slide_into_lane(
    item: &CargoItem,
    profile: &AircraftProfile,
    load_plan_id: &str,
    x_limit: Length,
    lane: &mut Lane,
    already_placed: &[PlacedBox],
) -> Option<(PlacedBox, Vec<Issue>)> {
    let mut x = lane.next_x;
    loop {
        if x + item.length > x_limit {
            return None;
        }

        let deck = if profile.is_ramp_x(x) { Deck::Ramp } else { Deck::Main };
        let candidate = PlacedBox::new(
            item.id.clone(),
            load_plan_id,
            deck,
            PlacementKind::Vehicle,
            item.weight,
            x,
            lane.y_center,
            Length::inch(0.0),
            item.length,
            item.width,
            item.height,
        );

        let mut ok = bounds_issues(&candidate, profile).is_empty();
        if ok {
            for other in already_placed {
                if overlaps_3d(&candidate, other)
                    || lateral_clearance_issue(&candidate, other).is_some()
                {
                    ok = false;
                    break;
                }
            }
        }

        if ok {
            lane.next_x = candidate.x_end;
            let warnings: Vec<Issue> = already_placed
                .iter()
                .filter_map(|other| longitudinal_clearance_issue(&candidate, other))
                .collect();
            return Some((candidate, warnings));
        }

        x = x + Length::inch(SLIDE_STEP_IN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Category;
    use crate::measurements::Mass;
    use crate::profile::reference::c17;

    fn vehicle(id: &str, width: f64, length: f64, height: f64, weight: f64) -> CargoItem {
        CargoItem {
            id: id.to_string(),
            description: id.to_string(),
            category: Category::RollingStock,
            quantity: 1,
            length: Length::inch(length),
            width: Length::inch(width),
            height: Length::inch(height),
            weight: Mass::lb(weight),
            axle_weights: None,
            advance_party: false,
            hazmat: false,
            lead_tcn: None,
            passenger_count: None,
        }
    }

    #[test]
    fn single_vehicle_places_near_center() {
        let profile = c17();
        let result = place_vehicles(vec![vehicle("v1", 96.0, 200.0, 90.0, 20000.0)], &profile, "p1");
        assert_eq!(result.placed.len(), 1);
        assert!(result.unplaced.is_empty());
    }

    #[test]
    fn oversize_vehicle_goes_unplaced() {
        let profile = c17();
        let result = place_vehicles(vec![vehicle("v2", 150.0, 200.0, 90.0, 20000.0)], &profile, "p1");
        assert!(result.placed.is_empty());
        assert_eq!(result.unplaced.len(), 1);
    }

    #[test]
    fn two_vehicles_get_separate_lanes_without_collision() {
        let profile = c17();
        let result = place_vehicles(
            vec![
                vehicle("heavy", 90.0, 150.0, 90.0, 30000.0),
                vehicle("light", 90.0, 150.0, 90.0, 10000.0),
            ],
            &profile,
            "p1",
        );
        assert_eq!(result.placed.len(), 2);
        assert!(!overlaps_3d(&result.placed[0], &result.placed[1]));
    }
}

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

//! The Pallet Placer: a maximal-rectangles free-space strategy
//! over the main deck and ramp, with a grid-search fallback.

use crate::geom::{bounds_issues, floor_loading_issue, overlaps_3d, Deck, PlacedBox, PlacementKind};
use crate::issue::Issue;
use crate::measurements::Length;
use crate::pallet::Pallet;
use crate::profile::AircraftProfile;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const GRID_STEP_IN: f64 = 0.5;

#[derive(Copy, Clone, Debug)]
struct FreeRect {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    is_ramp: bool,
}

impl FreeRect {
    fn width_x(&self) -> f64 {
        self.x1 - self.x0
    }
    fn width_y(&self) -> f64 {
        self.y1 - self.y0
    }
    fn area(&self) -> f64 {
        self.width_x() * self.width_y()
    }
    fn contains(&self, other: &FreeRect) -> bool {
        self.x0 <= other.x0 && self.y0 <= other.y0 && self.x1 >= other.x1 && self.y1 >= other.y1
    }
    fn overlaps(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> bool {
        self.x0 < x1 && x0 < self.x1 && self.y0 < y1 && y0 < self.y1
    }
}

/// One placed pallet.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletPlacement {
    pub pallet: Pallet,
    pub placed_box: PlacedBox,
    pub position_index: Option<usize>,
    pub is_ramp: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PalletPlacementResult {
    pub placed: Vec<PalletPlacement>,
    pub unplaced: Vec<Pallet>,
    pub issues: Vec<Issue>,
}

/// Places `pallets` into the free floorplan of `profile` not already
/// occupied by `obstacles` (typically the placed vehicles).
pub fn place_pallets(
    mut pallets: Vec<Pallet>,
    profile: &AircraftProfile,
    obstacles: &[PlacedBox],
    load_plan_id: &str,
) -> PalletPlacementResult {
    let mut result = PalletPlacementResult::default();

    let main_rect = FreeRect {
        x0: profile.bay_start.to_si(),
        y0: -profile.cargo_width.to_si() / 2.0,
        x1: (profile.bay_start + profile.cargo_length).to_si(),
        y1: profile.cargo_width.to_si() / 2.0,
        is_ramp: false,
    };
    let ramp_rect = FreeRect {
        x0: profile.ramp_start.to_si(),
        y0: -profile.ramp_clearance_width.to_si() / 2.0,
        x1: (profile.ramp_start + profile.ramp_length).to_si(),
        y1: profile.ramp_clearance_width.to_si() / 2.0,
        is_ramp: true,
    };

    let mut free_rects = vec![main_rect, ramp_rect];
    for obstacle in obstacles {
        subtract_shadow(
            &mut free_rects,
            obstacle.x_start.to_si(),
            obstacle.y_left.to_si(),
            obstacle.x_end.to_si(),
            obstacle.y_right.to_si(),
        );
    }

    pallets.sort_by(|a, b| {
        b.footprint_area()
            .partial_cmp(&a.footprint_area())
            .unwrap()
            .then_with(|| b.gross_weight.partial_cmp(&a.gross_weight).unwrap())
    });

    let mut placed_boxes: Vec<PlacedBox> = obstacles.to_vec();

    for pallet in pallets {
        let placement = best_rect_placement(&pallet, &free_rects, profile)
            .or_else(|| grid_fallback(&pallet, profile, &placed_boxes));

        match placement {
            Some((x0, y_center, length, width, is_ramp)) => {
                let deck = if is_ramp { Deck::Ramp } else { Deck::Main };
                let placed_box = PlacedBox::new(
                    pallet.id.clone(),
                    load_plan_id,
                    deck,
                    PlacementKind::Pallet,
                    pallet.gross_weight,
                    Length::inch(x0),
                    Length::inch(y_center),
                    Length::inch(0.0),
                    Length::inch(length),
                    Length::inch(width),
                    pallet.height,
                );

                if is_ramp && pallet.gross_weight > profile.ramp_position_weight_limit {
                    result.issues.push(
                        crate::issue!(
                            Warning,
                            OverweightRamp,
                            "pallet {} ({:.0} lb) exceeds the ramp position limit {:.0} lb",
                            pallet.id,
                            pallet.gross_weight.to_si(),
                            profile.ramp_position_weight_limit.to_si()
                        )
                        .with_item_ref(&pallet.id),
                    );
                }

                if let Some(issue) = floor_loading_issue(&placed_box, profile) {
                    result.issues.push(issue);
                }

                let position_index = profile.position_index_for(placed_box.x_center());

                subtract_shadow(&mut free_rects, x0, placed_box.y_left.to_si(), placed_box.x_end.to_si(), placed_box.y_right.to_si());
                placed_boxes.push(placed_box.clone());

                result.placed.push(PalletPlacement {
                    pallet,
                    placed_box,
                    position_index,
                    is_ramp,
                });
            }
            None => {
                result.issues.push(
                    crate::issue!(
                        Error,
                        Collision3D,
                        "no admissible position found for pallet {}",
                        pallet.id
                    )
                    .with_item_ref(&pallet.id),
                );
                result.unplaced.push(pallet);
            }
        }
    }

    result
}

/// Tries both orientations of `pallet` against every free rectangle,
/// returning the best-scoring `(x0, y_center, length, width, is_ramp)`
/// placement.
fn best_rect_placement(
    pallet: &Pallet,
    free_rects: &[FreeRect],
    profile: &AircraftProfile,
) -> Option<(f64, f64, f64, f64, bool)> {
    let orientations = [
        (pallet.length.to_si(), pallet.width.to_si()),
        (pallet.width.to_si(), pallet.length.to_si()),
    ];

    let mut best: Option<(f64, (f64, f64, f64, f64, bool))> = None;

    for rect in free_rects {
        if rect.is_ramp && pallet.gross_weight > profile.ramp_position_weight_limit {
            continue;
        }
        for (len, wid) in orientations {
            if len > rect.width_x() || wid > rect.width_y() {
                continue;
            }
            let leftover = rect.area() - len * wid;
            let y_center = (rect.y0 + rect.y1) / 2.0;
            let cob_shift = (rect.x0 + len / 2.0).abs();
            let ramp_penalty = if rect.is_ramp { 1.0 } else { 0.0 };
            // Lower is better: best-area-fit dominates, CoB shift and
            // ramp use break ties.
            let score = leftover + cob_shift * 0.01 + ramp_penalty * 1000.0;

            let candidate = (rect.x0, y_center, len, wid, rect.is_ramp);
            match &best {
                Some((best_score, _)) if *best_score <= score => {}
                _ => best = Some((score, candidate)),
            }
        }
    }

    best.map(|(_, placement)| placement)
}

/// Grid search fallback at 0.5" resolution over the main deck, honoring
/// collisions with everything already placed.
fn grid_fallback(
    pallet: &Pallet,
    profile: &AircraftProfile,
    placed_boxes: &[PlacedBox],
) -> Option<(f64, f64, f64, f64, bool)> {
    let length = pallet.length.to_si();
    let width = pallet.width.to_si();
    let bay_start = profile.bay_start.to_si();
    let bay_end = (profile.bay_start + profile.cargo_length).to_si();
    let half_width = profile.cargo_width.to_si() / 2.0;

    let mut x = bay_start;
    while x + length <= bay_end {
        let mut y = -half_width;
        while y + width <= half_width {
            let y_center = y + width / 2.0;
            let candidate = PlacedBox::new(
                pallet.id.clone(),
                "grid-probe",
                Deck::Main,
                PlacementKind::Pallet,
                pallet.gross_weight,
                Length::inch(x),
                Length::inch(y_center),
                Length::inch(0.0),
                Length::inch(length),
                Length::inch(width),
                pallet.height,
            );
            if bounds_issues(&candidate, profile).is_empty()
                && !placed_boxes.iter().any(|p| overlaps_3d(&candidate, p))
            {
                return Some((x, y_center, length, width, false));
            }
            y += GRID_STEP_IN;
        }
        x += GRID_STEP_IN;
    }
    None
}

/// Splits every free rectangle overlapping the given shadow into the
/// maximal surviving sub-rectangles (the standard maximal-rectangles
/// split-and-prune rule).
fn subtract_shadow(free_rects: &mut Vec<FreeRect>, x0: f64, y0: f64, x1: f64, y1: f64) {
    let mut next = Vec::with_capacity(free_rects.len());
    for rect in free_rects.drain(..) {
        if !rect.overlaps(x0, y0, x1, y1) {
            next.push(rect);
            continue;
        }
        if rect.y0 < y0 {
            next.push(FreeRect { y1: y0, ..rect });
        }
        if rect.y1 > y1 {
            next.push(FreeRect { y0: y1, ..rect });
        }
        if rect.x0 < x0 {
            next.push(FreeRect { x1: x0, ..rect });
        }
        if rect.x1 > x1 {
            next.push(FreeRect { x0: x1, ..rect });
        }
    }
    // Prune rectangles wholly contained in another (maximal-rectangles
    // invariant: keep only maximal free rectangles).
    let mut pruned: Vec<FreeRect> = Vec::with_capacity(next.len());
    for (i, rect) in next.iter().enumerate() {
        if rect.area() <= 0.0 {
            continue;
        }
        let contained = next
            .iter()
            .enumerate()
            .any(|(j, other)| i != j && other.contains(rect) && other.area() > rect.area());
        if !contained {
            pruned.push(*rect);
        }
    }
    *free_rects = pruned;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{CargoItem, Category};
    use crate::measurements::Mass;
    use crate::profile::reference::c17;

    fn pallet(id: &str, weight: f64, height: f64) -> Pallet {
        let item = CargoItem {
            id: format!("{id}-item"),
            description: "test".to_string(),
            category: Category::Palletizable,
            quantity: 1,
            length: Length::inch(104.0),
            width: Length::inch(84.0),
            height: Length::inch(height),
            weight: Mass::lb(weight),
            axle_weights: None,
            advance_party: false,
            hazmat: false,
            lead_tcn: None,
            passenger_count: None,
        };
        Pallet {
            id: id.to_string(),
            items: vec![item],
            length: Length::inch(104.0),
            width: Length::inch(84.0),
            height: Length::inch(height),
            gross_weight: Mass::lb(weight),
            hazmat: false,
        }
    }

    #[test]
    fn single_pallet_places_on_main_deck() {
        let profile = c17();
        let result = place_pallets(vec![pallet("p1", 1000.0, 40.0)], &profile, &[], "plan1");
        assert_eq!(result.placed.len(), 1);
        assert!(!result.placed[0].is_ramp);
    }

    #[test]
    fn heavy_pallet_avoids_the_ramp() {
        let profile = c17();
        let result = place_pallets(vec![pallet("p2", 9000.0, 80.0)], &profile, &[], "plan1");
        assert_eq!(result.placed.len(), 1);
        assert!(!result.placed[0].is_ramp);
    }

    #[test]
    fn two_pallets_do_not_collide() {
        let profile = c17();
        let result = place_pallets(
            vec![pallet("p3", 2000.0, 40.0), pallet("p4", 2000.0, 40.0)],
            &profile,
            &[],
            "plan1",
        );
        assert_eq!(result.placed.len(), 2);
        assert!(!overlaps_3d(&result.placed[0].placed_box, &result.placed[1].placed_box));
    }
}

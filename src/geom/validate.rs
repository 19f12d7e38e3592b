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

//! Aircraft-bounds and height-zone validation.

use super::PlacedBox;
use crate::issue::Issue;
use crate::profile::AircraftProfile;

/// Every bounds or height-zone violation of `placement` against `profile`.
/// Empty when the placement is fully within the aircraft.
pub fn bounds_issues(placement: &PlacedBox, profile: &AircraftProfile) -> Vec<Issue> {
    let mut issues = Vec::new();

    let bay_start = profile.bay_start;
    let bay_end = profile.bay_start + profile.total_length();
    let half_width = profile.cargo_width / 2.0;
    let neg_half_width = crate::measurements::Length::inch(0.0) - half_width;

    if placement.x_start < bay_start {
        issues.push(crate::issue!(
            Error,
            BoundsForwardExceeded,
            "{} starts at x={:.1} which is forward of the bay start {:.1}",
            placement.item_id,
            placement.x_start.to_si(),
            bay_start.to_si()
        ));
    }
    if placement.x_end > bay_end {
        issues.push(crate::issue!(
            Error,
            BoundsAftExceeded,
            "{} ends at x={:.1} which is aft of the bay end {:.1}",
            placement.item_id,
            placement.x_end.to_si(),
            bay_end.to_si()
        ));
    }
    if placement.y_left < neg_half_width {
        issues.push(crate::issue!(
            Error,
            BoundsLeftExceeded,
            "{} extends to y={:.1} past the port limit {:.1}",
            placement.item_id,
            placement.y_left.to_si(),
            neg_half_width.to_si()
        ));
    }
    if placement.y_right > half_width {
        issues.push(crate::issue!(
            Error,
            BoundsRightExceeded,
            "{} extends to y={:.1} past the starboard limit {:.1}",
            placement.item_id,
            placement.y_right.to_si(),
            half_width.to_si()
        ));
    }

    let mut any_zone_intersected = false;
    for zone in &profile.height_zones {
        if zone.x_start < placement.x_end && zone.x_end > placement.x_start {
            any_zone_intersected = true;
            if placement.z_top > zone.max_height {
                issues.push(crate::issue!(
                    Error,
                    OverheightForZone,
                    "{} top at z={:.1} exceeds the {:.1} height limit of the zone [{:.1}, {:.1}]",
                    placement.item_id,
                    placement.z_top.to_si(),
                    zone.max_height.to_si(),
                    zone.x_start.to_si(),
                    zone.x_end.to_si()
                ));
            }
        }
    }
    if !any_zone_intersected {
        let max_height = profile.max_height_at(placement.x_start);
        if placement.z_top > max_height {
            issues.push(crate::issue!(
                Error,
                OverheightForZone,
                "{} top at z={:.1} exceeds the {:.1} height limit at x={:.1}",
                placement.item_id,
                placement.z_top.to_si(),
                max_height.to_si(),
                placement.x_start.to_si()
            ));
        }
    }

    issues
}

/// Checks a placement's floor-loading pressure (weight / footprint area)
/// against `profile`'s `floor_loading_limit_psi`. Floor loading is a
/// warning, not grounds to reject the placement outright.
pub fn floor_loading_issue(placement: &PlacedBox, profile: &AircraftProfile) -> Option<Issue> {
    let footprint_in2 = placement.length().to_si() * placement.width().to_si();
    if footprint_in2 <= 0.0 {
        return None;
    }
    let psi = placement.weight.to_si() / footprint_in2;
    if psi > profile.floor_loading_limit_psi {
        Some(
            crate::issue!(
                Warning,
                ExceedsFloorLoading,
                "{} floor loading {:.2} psi exceeds the {:.2} psi limit",
                placement.item_id,
                psi,
                profile.floor_loading_limit_psi
            )
            .with_item_ref(&placement.item_id),
        )
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Deck, PlacementKind};
    use crate::measurements::{Length, Mass};
    use crate::profile::reference::c17;

    fn placement(x: f64, y: f64, z: f64, l: f64, w: f64, h: f64) -> PlacedBox {
        PlacedBox::new(
            "i",
            "p",
            Deck::Main,
            PlacementKind::Pallet,
            Mass::lb(100.0),
            Length::inch(x),
            Length::inch(y),
            Length::inch(z),
            Length::inch(l),
            Length::inch(w),
            Length::inch(h),
        )
    }

    #[test]
    fn centered_placement_within_bounds_has_no_issues() {
        let profile = c17();
        let p = placement(100.0, 0.0, 0.0, 40.0, 40.0, 40.0);
        assert!(bounds_issues(&p, &profile).is_empty());
    }

    #[test]
    fn placement_beyond_lateral_limit_is_flagged() {
        let profile = c17();
        let p = placement(100.0, 120.0, 0.0, 40.0, 40.0, 40.0);
        let issues = bounds_issues(&p, &profile);
        assert!(issues.iter().any(|i| i.code == crate::issue::IssueCode::BoundsRightExceeded));
    }

    #[test]
    fn dense_placement_exceeds_floor_loading() {
        let profile = c17();
        // 50000 lb over a 10"x10" footprint is 500 psi, above the 250 psi
        // limit.
        let p = placement(100.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        let heavy = PlacedBox::new(
            p.item_id.clone(),
            p.load_plan_id.clone(),
            Deck::Main,
            PlacementKind::Pallet,
            Mass::lb(50_000.0),
            p.x_start,
            p.y_center,
            p.z_floor,
            Length::inch(10.0),
            Length::inch(10.0),
            Length::inch(10.0),
        );
        assert!(floor_loading_issue(&heavy, &profile).is_some());
    }

    #[test]
    fn light_placement_is_within_floor_loading() {
        let profile = c17();
        let p = placement(100.0, 0.0, 0.0, 40.0, 40.0, 40.0);
        assert!(floor_loading_issue(&p, &profile).is_none());
    }

    #[test]
    fn placement_straddling_a_height_zone_boundary_is_flagged() {
        // x_start=995 sits outside the C-17's [1000,1200] 140" height
        // zone, but x_end=1005 reaches into it; a 145"-tall item clears
        // the bay's nominal 148" but not the zone's 140" limit.
        let profile = c17();
        let p = placement(995.0, 0.0, 0.0, 10.0, 40.0, 145.0);
        let issues = bounds_issues(&p, &profile);
        assert!(issues.iter().any(|i| i.code == crate::issue::IssueCode::OverheightForZone));
    }
}

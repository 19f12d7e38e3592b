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

//! Lateral and longitudinal rolling-stock clearance.

use super::{Deck, PlacedBox, PlacementKind};
use crate::issue::Issue;
use crate::measurements::Length;

const LATERAL_CLEARANCE_MIN_IN: f64 = 2.0;
const LONGITUDINAL_CLEARANCE_MIN_IN: f64 = 4.0;

fn both_rolling_stock_same_deck(a: &PlacedBox, b: &PlacedBox) -> bool {
    a.kind == PlacementKind::Vehicle && b.kind == PlacementKind::Vehicle && a.deck == b.deck
}

/// `Some(issue)` (an error) if two rolling-stock placements on the same
/// deck with any X overlap have a Y gap under 2".
pub fn lateral_clearance_issue(a: &PlacedBox, b: &PlacedBox) -> Option<Issue> {
    if !both_rolling_stock_same_deck(a, b) {
        return None;
    }
    if !a.x_overlaps(b) {
        return None;
    }
    let gap = y_gap(a, b);
    if gap.to_si() < LATERAL_CLEARANCE_MIN_IN {
        Some(
            crate::issue!(
                Error,
                InsufficientLateralClearance,
                "rolling stock {} and {} have only {:.1}\" lateral clearance (need {:.0}\")",
                a.item_id,
                b.item_id,
                gap.to_si(),
                LATERAL_CLEARANCE_MIN_IN
            )
            .with_item_ref(&a.item_id),
        )
    } else {
        None
    }
}

/// `Some(issue)` (a warning) if two rolling-stock placements with any Y
/// overlap have an X gap under 4".
pub fn longitudinal_clearance_issue(a: &PlacedBox, b: &PlacedBox) -> Option<Issue> {
    if a.kind != PlacementKind::Vehicle || b.kind != PlacementKind::Vehicle {
        return None;
    }
    if !a.y_overlaps(b) {
        return None;
    }
    let gap = x_gap(a, b);
    if gap.to_si() < LONGITUDINAL_CLEARANCE_MIN_IN {
        Some(
            crate::issue!(
                Warning,
                InsufficientLongitudinalClearance,
                "rolling stock {} and {} have only {:.1}\" longitudinal clearance (want {:.0}\")",
                a.item_id,
                b.item_id,
                gap.to_si(),
                LONGITUDINAL_CLEARANCE_MIN_IN
            )
            .with_item_ref(&a.item_id),
        )
    } else {
        None
    }
}

fn y_gap(a: &PlacedBox, b: &PlacedBox) -> Length {
    if a.y_left >= b.y_right {
        a.y_left - b.y_right
    } else if b.y_left >= a.y_right {
        b.y_left - a.y_right
    } else {
        Length::inch(0.0)
    }
}

fn x_gap(a: &PlacedBox, b: &PlacedBox) -> Length {
    if a.x_start >= b.x_end {
        a.x_start - b.x_end
    } else if b.x_start >= a.x_end {
        b.x_start - a.x_end
    } else {
        Length::inch(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::Mass;

    fn vehicle(x: f64, y: f64) -> PlacedBox {
        PlacedBox::new(
            "v",
            "p",
            Deck::Main,
            PlacementKind::Vehicle,
            Mass::lb(1000.0),
            Length::inch(x),
            Length::inch(y),
            Length::inch(0.0),
            Length::inch(100.0),
            Length::inch(80.0),
            Length::inch(80.0),
        )
    }

    #[test]
    fn adjacent_vehicles_with_enough_gap_pass() {
        let a = vehicle(0.0, -45.0);
        let b = vehicle(0.0, 46.0);
        assert!(lateral_clearance_issue(&a, &b).is_none());
    }

    #[test]
    fn adjacent_vehicles_too_close_laterally_fail() {
        let a = vehicle(0.0, -40.0);
        let b = vehicle(0.0, 41.0);
        assert!(lateral_clearance_issue(&a, &b).is_some());
    }

    #[test]
    fn non_overlapping_x_has_no_lateral_requirement() {
        let a = vehicle(0.0, 0.0);
        let b = vehicle(200.0, 0.0);
        assert!(lateral_clearance_issue(&a, &b).is_none());
    }
}

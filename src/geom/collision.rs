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

//! 3D collision detection: two placements on the same aircraft
//! overlap iff all three axis intervals strictly overlap.

use super::PlacedBox;

pub fn overlaps_3d(a: &PlacedBox, b: &PlacedBox) -> bool {
    a.x_strictly_overlaps(b) && a.y_strictly_overlaps(b) && a.z_strictly_overlaps(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Deck, PlacementKind};
    use crate::measurements::{Length, Mass};

    fn box_at(x: f64, y: f64, z: f64) -> PlacedBox {
        PlacedBox::new(
            "i",
            "p",
            Deck::Main,
            PlacementKind::Pallet,
            Mass::lb(100.0),
            Length::inch(x),
            Length::inch(y),
            Length::inch(z),
            Length::inch(40.0),
            Length::inch(40.0),
            Length::inch(40.0),
        )
    }

    #[test]
    fn identical_boxes_overlap() {
        assert!(overlaps_3d(&box_at(0.0, 0.0, 0.0), &box_at(0.0, 0.0, 0.0)));
    }

    #[test]
    fn boxes_separated_on_x_do_not_overlap() {
        assert!(!overlaps_3d(&box_at(0.0, 0.0, 0.0), &box_at(100.0, 0.0, 0.0)));
    }

    #[test]
    fn touching_edges_do_not_strictly_overlap() {
        // box_at(0,..) spans x in [0,40); a box starting exactly at 40 only
        // touches the boundary, which is not a strict overlap.
        assert!(!overlaps_3d(&box_at(0.0, 0.0, 0.0), &box_at(40.0, 0.0, 0.0)));
    }

    #[test]
    fn stacked_on_different_decks_still_overlap_if_z_overlaps() {
        assert!(overlaps_3d(&box_at(0.0, 0.0, 0.0), &box_at(10.0, 10.0, 10.0)));
    }
}

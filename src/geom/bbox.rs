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

//! Axis-aligned placements in the aircraft-local cargo-bay frame.

use crate::measurements::{Length, Mass};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The deck a placement sits on: the ramp is subject to a stricter
/// per-position weight limit than the main deck.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Deck {
    Main,
    Ramp,
}

/// Whether a placement is a vehicle or a pallet — lateral/longitudinal
/// rolling-stock clearance rules only apply between two vehicles.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlacementKind {
    Vehicle,
    Pallet,
}

/// A cargo-bay-local placement: carries the item it places, the
/// load-plan that owns it, and an axis-aligned bounding box derived from
/// `(x_start, y_center, z_floor)` plus the item's length/width/height.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedBox {
    pub item_id: String,
    pub load_plan_id: String,
    pub deck: Deck,
    pub kind: PlacementKind,
    pub weight: Mass,

    pub x_start: Length,
    pub y_center: Length,
    pub z_floor: Length,

    pub x_end: Length,
    pub y_left: Length,
    pub y_right: Length,
    pub z_top: Length,
}

impl PlacedBox {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        item_id: impl Into<String>,
        load_plan_id: impl Into<String>,
        deck: Deck,
        kind: PlacementKind,
        weight: Mass,
        x_start: Length,
        y_center: Length,
        z_floor: Length,
        length: Length,
        width: Length,
        height: Length,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            load_plan_id: load_plan_id.into(),
            deck,
            kind,
            weight,
            x_start,
            y_center,
            z_floor,
            x_end: x_start + length,
            y_left: y_center - width / 2.0,
            y_right: y_center + width / 2.0,
            z_top: z_floor + height,
        }
    }

    pub fn x_center(&self) -> Length {
        (self.x_start + self.x_end) / 2.0
    }

    pub fn length(&self) -> Length {
        self.x_end - self.x_start
    }

    pub fn width(&self) -> Length {
        self.y_right - self.y_left
    }

    /// `true` if the X extents of `self` and `other` overlap at all
    /// (shared boundary counts as overlap — used by clearance checks,
    /// which want "any X overlap").
    pub fn x_overlaps(&self, other: &Self) -> bool {
        self.x_start <= other.x_end && other.x_start <= self.x_end
    }

    /// `true` if the Y extents of `self` and `other` overlap at all.
    pub fn y_overlaps(&self, other: &Self) -> bool {
        self.y_left <= other.y_right && other.y_left <= self.y_right
    }

    fn strictly_overlaps_1d(a0: Length, a1: Length, b0: Length, b1: Length) -> bool {
        a0 < b1 && b0 < a1
    }

    /// Strict 1D overlap on X, used by [`crate::geom::overlaps_3d`].
    pub fn x_strictly_overlaps(&self, other: &Self) -> bool {
        Self::strictly_overlaps_1d(self.x_start, self.x_end, other.x_start, other.x_end)
    }

    /// Strict 1D overlap on Y.
    pub fn y_strictly_overlaps(&self, other: &Self) -> bool {
        Self::strictly_overlaps_1d(self.y_left, self.y_right, other.y_left, other.y_right)
    }

    /// Strict 1D overlap on Z.
    pub fn z_strictly_overlaps(&self, other: &Self) -> bool {
        Self::strictly_overlaps_1d(self.z_floor, self.z_top, other.z_floor, other.z_top)
    }
}

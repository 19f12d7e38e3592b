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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::Length;

/// A longitudinal range of the cargo bay with a reduced maximum cargo
/// height, e.g. the ramp area of some profiles.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeightZone {
    pub x_start: Length,
    pub x_end: Length,
    pub max_height: Length,
}

impl HeightZone {
    pub fn new(x_start: Length, x_end: Length, max_height: Length) -> Self {
        Self {
            x_start,
            x_end,
            max_height,
        }
    }

    /// `true` if `x` falls within this zone's longitudinal range.
    pub fn contains_x(&self, x: Length) -> bool {
        x >= self.x_start && x <= self.x_end
    }
}

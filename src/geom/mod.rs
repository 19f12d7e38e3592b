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

//! Geometry & validation: pure functions over [`PlacedBox`]es.
//!
//! Nothing here mutates a placement; every check is a free function that
//! reads placements and an [`AircraftProfile`](crate::profile::AircraftProfile)
//! and returns either a boolean or a [`Issue`](crate::issue::Issue).

mod bbox;
mod clearance;
mod cob;
mod collision;
mod validate;

pub use bbox::{Deck, PlacedBox, PlacementKind};
pub use clearance::{lateral_clearance_issue, longitudinal_clearance_issue};
pub use cob::{compute_cob, CobResult, EnvelopeStatus};
pub use collision::overlaps_3d;
pub use validate::{bounds_issues, floor_loading_issue};

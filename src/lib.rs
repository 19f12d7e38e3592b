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

//! `airlift`: a deterministic load-planning engine for military cargo
//! aircraft.
//!
//! The engine turns a loosely-typed manifest into per-aircraft load plans
//! and a fleet-wide allocation, in four stages that mirror the four public
//! entry points: [`normalize`] cleans and types raw records,
//! [`classify`] splits the result by deployment phase and cargo category,
//! [`plan_aircraft`] seats one aircraft's share of the manifest (vehicles,
//! pallets, center of balance), and [`allocate`] chooses a fleet mix and
//! runs the planner once per aircraft in it.
//!
//! Everything here is synchronous and side-effect free: given the same
//! inputs and [`profile::AircraftProfile`]s, two runs produce bit-identical
//! output. Recoverable problems (an item that never fit anywhere, a load
//! that drifted out of its center-of-balance envelope) are reported as
//! [`issue::Issue`]s alongside a still-valid result; only malformed input to
//! the engine itself — an unregistered aircraft type, a negative fleet
//! count — surfaces as an [`error::EngineError`].

pub mod allocate;
pub mod error;
pub mod geom;
pub mod idgen;
pub mod issue;
pub mod manifest;
pub mod measurements;
pub mod pallet;
pub mod placement;
pub mod plan;
pub mod profile;

pub use allocate::allocate;
pub use manifest::{classify, normalize};
pub use plan::plan_aircraft;

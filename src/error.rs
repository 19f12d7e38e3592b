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

//! Programmer-error surface.
//!
//! These are the "fatal to the call" conditions: an absent profile, a
//! malformed policy. They are never raised for a placement or allocation
//! failure; an unplaceable item is reported through [`crate::issue::Issue`]
//! and the residual set instead, and the call still returns `Ok`.

use thiserror::Error;

use crate::profile::AircraftTypeId;

/// A programmer/input error that aborts a call outright.
#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum EngineError {
    #[error("no aircraft profile registered for type {0:?}")]
    UnknownAircraftType(AircraftTypeId),

    #[error("preference_strength must be within 0..=100, got {0}")]
    InvalidPreferenceStrength(u8),

    #[error("aircraft profile is missing required field: {0}")]
    IncompleteProfile(&'static str),
}

pub type Result<T> = std::result::Result<T, EngineError>;

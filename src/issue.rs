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

//! Structured, always-collected planning issues.
//!
//! Unlike [`crate::error::EngineError`], an [`Issue`] never aborts a call.
//! The Normalizer, Placers, Load Planner and Fleet Allocator all emit these
//! alongside a still-valid result; a `Severity::Error` issue means the
//! associated item was diverted to a residual/unplaced set, not that the
//! surrounding call failed.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How serious an [`Issue`] is.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Every issue code the engine can raise, grouped by the component that
/// raises it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IssueCode {
    // Input / Normalizer
    MissingField,
    ZeroDimensions,
    ZeroWeight,
    InvalidType,
    DuplicateItemId,
    PaxHazmatMix,

    // Geometric / Validator / Placers
    BoundsLeftExceeded,
    BoundsRightExceeded,
    BoundsForwardExceeded,
    BoundsAftExceeded,
    Collision3D,
    InsufficientLateralClearance,
    InsufficientLongitudinalClearance,
    OverheightForZone,

    // Vehicle
    RollingStockTooWide,
    RollingStockTooTall,
    OversizeForSmallProfile,
    ExceedsFloorLoading,

    // Pallet
    OverheightPallet,
    OverweightPallet,

    // Load plan
    CobViolation,
    OverweightPosition,
    UnderutilizedSortie,
    OverweightRamp,

    // Allocation
    InfeasibleFleet,
    PartialAllocation,
    NoAircraftAvailable,
}

/// A single structured finding raised while normalizing, placing or
/// allocating.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Issue {
    pub severity: Severity,
    pub code: IssueCode,
    pub item_ref: Option<String>,
    pub field: Option<String>,
    pub message: String,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl Issue {
    pub fn new(severity: Severity, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            item_ref: None,
            field: None,
            message: message.into(),
            suggestion: None,
            details: None,
        }
    }

    pub fn with_item_ref(mut self, item_ref: impl Into<String>) -> Self {
        self.item_ref = Some(item_ref.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Mirrors this issue to the `log` facade at the level matching its
    /// severity.
    pub fn log(&self) {
        match self.severity {
            Severity::Info => log::info!("{:?}: {}", self.code, self.message),
            Severity::Warning => log::warn!("{:?}: {}", self.code, self.message),
            Severity::Error => log::warn!("{:?} (error): {}", self.code, self.message),
        }
    }
}

/// Creates an [`Issue`] with less boilerplate at call sites.
///
/// ```ignore
/// issue!(Warning, ZeroWeight, "item {} has no weight", id);
/// ```
#[macro_export]
macro_rules! issue {
    ($severity:ident, $code:ident, $($arg:tt)*) => {
        $crate::issue::Issue::new(
            $crate::issue::Severity::$severity,
            $crate::issue::IssueCode::$code,
            format!($($arg)*),
        )
    };
}

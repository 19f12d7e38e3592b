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

//! Dimensioned physical quantities.
//!
//! A [`Measurement`] pairs a value with the unit it was expressed in and
//! always carries out arithmetic through its SI representation, so a
//! [`Length`] in feet can be added to one in inches without the caller
//! converting by hand. The engine itself works exclusively in inches and
//! pounds; the other units exist for callers
//! translating manifests from a different system.

mod constants;
mod length;
mod mass;
mod measurement;
mod unit_of_measure;

pub use length::{Length, LengthUnit};
pub use mass::{Mass, MassUnit};
pub use measurement::Measurement;
pub use unit_of_measure::UnitOfMeasure;

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

/// A unit of measure that knows how to convert its value to and from the
/// SI unit used internally by [`Measurement`](super::Measurement).
pub trait UnitOfMeasure<T>: Copy {
    /// The unit used as this measure's SI representation.
    fn si() -> Self;

    /// The symbol printed after a formatted value, e.g. `"in"` for inches.
    fn symbol(&self) -> &'static str;

    /// Converts a SI value to `to`'s unit.
    fn from_si(value: T, to: &Self) -> T;

    /// Converts a value in `self`'s unit to the SI unit.
    fn to_si(&self, value: &T) -> T;

    /// Converts a value from `self`'s unit to `other`'s unit.
    fn convert_to(&self, value: &T, other: &Self) -> T {
        Self::from_si(self.to_si(value), other)
    }
}

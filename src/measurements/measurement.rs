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

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use super::UnitOfMeasure;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A measurement of a physical quantity.
///
/// The measurement carries a value of type `T` together with the unit `U` it
/// was expressed in. Measurements of the same unit kind support `+`, `-`,
/// `*` and `/`; the arithmetic is always carried out in the SI
/// representation and converted back, so mixing units (e.g. adding a
/// [`Length`](super::Length) in inches to one in feet) is safe.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Measurement<T, U>
where
    U: UnitOfMeasure<T>,
{
    pub(super) value: T,
    pub(super) unit: U,
}

impl<T, U> Measurement<T, U>
where
    U: UnitOfMeasure<T>,
{
    /// The measurement's value in its own unit.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The unit the value is expressed in.
    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// The unit's symbol, e.g. `"in"` for inches.
    pub fn symbol(&self) -> &str {
        self.unit.symbol()
    }

    /// Builds a measurement from a value already expressed in the SI unit.
    pub fn from_si(value: T, unit: U) -> Self {
        Self {
            value: U::from_si(value, &unit),
            unit,
        }
    }

    /// Converts to the value expressed in the SI unit.
    pub fn to_si(&self) -> T {
        self.unit.to_si(&self.value)
    }

    /// Converts this measurement to another unit of the same kind.
    pub fn convert_to(&self, other: U) -> Self {
        Self {
            value: self.unit.convert_to(&self.value, &other),
            unit: other,
        }
    }
}

impl<T, U> fmt::Display for Measurement<T, U>
where
    T: fmt::Display,
    U: UnitOfMeasure<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tmp = if let Some(precision) = f.precision() {
            format!("{:.precision$} {}", self.value, self.symbol())
        } else {
            format!("{} {}", self.value, self.symbol())
        };

        f.pad_integral(true, "", &tmp)
    }
}

impl<T, U> PartialOrd for Measurement<T, U>
where
    T: PartialOrd,
    U: UnitOfMeasure<T>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_si().partial_cmp(&other.to_si())
    }
}

impl<T, U> PartialEq for Measurement<T, U>
where
    T: PartialEq,
    U: UnitOfMeasure<T>,
{
    fn eq(&self, other: &Self) -> bool {
        self.to_si() == other.to_si()
    }
}

impl<T, U> Add for Measurement<T, U>
where
    T: Add<Output = T>,
    U: UnitOfMeasure<T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_si(self.to_si() + rhs.to_si(), self.unit)
    }
}

impl<T, U> Sub for Measurement<T, U>
where
    T: Sub<Output = T>,
    U: UnitOfMeasure<T>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_si(self.to_si() - rhs.to_si(), self.unit)
    }
}

impl<T, U> Mul<T> for Measurement<T, U>
where
    T: Mul<Output = T>,
    U: UnitOfMeasure<T>,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::from_si(self.to_si() * rhs, self.unit)
    }
}

impl<T, U> Div<T> for Measurement<T, U>
where
    T: Div<Output = T>,
    U: UnitOfMeasure<T>,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self::from_si(self.to_si() / rhs, self.unit)
    }
}

impl<T, U> Div for Measurement<T, U>
where
    T: Div<Output = T>,
    U: UnitOfMeasure<T>,
{
    type Output = T;

    fn div(self, rhs: Self) -> Self::Output {
        self.to_si() / rhs.to_si()
    }
}

impl<T, U> Default for Measurement<T, U>
where
    T: Default,
    U: UnitOfMeasure<T>,
{
    fn default() -> Self {
        Self::from_si(T::default(), U::si())
    }
}

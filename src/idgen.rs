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

//! The `Clock`/`IDGen` collaborator.
//!
//! The engine never reads the system clock or any other ambient source of
//! non-determinism — pallet ids are synthesized from an injected
//! counter instead, so that two runs over identical input produce
//! byte-identical output.

use std::sync::atomic::{AtomicU64, Ordering};

/// Produces stable pallet ids across re-runs of the same input.
pub trait IdGen {
    /// Returns the next id and advances internal state.
    fn next_id(&self) -> u64;
}

/// The reference `IDGen`: an incrementing counter seeded at 1.
#[derive(Debug, Default)]
pub struct IncrementingIdGen {
    next: AtomicU64,
}

impl IncrementingIdGen {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }
}

impl IdGen for IncrementingIdGen {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_one_and_increments() {
        let gen = IncrementingIdGen::new();
        assert_eq!(gen.next_id(), 1);
        assert_eq!(gen.next_id(), 2);
        assert_eq!(gen.next_id(), 3);
    }
}

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

use std::collections::HashMap;

use super::{reference, AircraftProfile, AircraftTypeId};
use crate::error::{EngineError, Result};

/// The `ProfileRegistry` collaborator: `get(type_id) -> AircraftProfile`.
///
/// Profiles are process-wide, read-only data; the registry owns them
/// for the lifetime of the program and hands out shared references.
#[derive(Clone, Debug, Default)]
pub struct ProfileRegistry {
    profiles: HashMap<AircraftTypeId, AircraftProfile>,
}

impl ProfileRegistry {
    /// An empty registry; profiles must be added with [`Self::insert`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the C-17 and C-130 (H and J) reference
    /// profiles.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.insert(reference::c17());
        registry.insert(reference::c130h());
        registry.insert(reference::c130j());
        registry
    }

    pub fn insert(&mut self, profile: AircraftProfile) {
        self.profiles.insert(profile.type_id.clone(), profile);
    }

    /// Looks up a profile by type id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownAircraftType`] if no profile is
    /// registered for `type_id` — an absent profile is a programmer error,
    /// not a placement failure.
    pub fn get(&self, type_id: &AircraftTypeId) -> Result<&AircraftProfile> {
        self.profiles
            .get(type_id)
            .ok_or_else(|| EngineError::UnknownAircraftType(type_id.clone()))
    }

    pub fn type_ids(&self) -> impl Iterator<Item = &AircraftTypeId> {
        self.profiles.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_c17_and_c130_variants() {
        let registry = ProfileRegistry::standard();
        assert!(registry.get(&AircraftTypeId::new("C-17")).is_ok());
        assert!(registry.get(&AircraftTypeId::new("C-130H")).is_ok());
        assert!(registry.get(&AircraftTypeId::new("C-130J")).is_ok());
    }

    #[test]
    fn unknown_type_id_is_an_engine_error() {
        let registry = ProfileRegistry::standard();
        assert!(matches!(
            registry.get(&AircraftTypeId::new("A400M")),
            Err(EngineError::UnknownAircraftType(_))
        ));
    }

    #[test]
    fn c17_has_eighteen_pallet_positions_and_c130_has_six() {
        let registry = ProfileRegistry::standard();
        let c17 = registry.get(&AircraftTypeId::new("C-17")).unwrap();
        let c130h = registry.get(&AircraftTypeId::new("C-130H")).unwrap();
        assert_eq!(c17.pallet_position_count(), 18);
        assert_eq!(c130h.pallet_position_count(), 6);
    }
}

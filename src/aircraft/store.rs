use std::collections::HashMap;

use uuid::Uuid;

use crate::aircraft::AircraftProfile;

/// Read access to aircraft profiles, keyed by stable id.
///
/// The calculation core never holds a store; hosts pass profiles in by
/// reference and use a store implementation of their choosing for lookup.
pub trait ProfileStore {
    fn get(&self, id: Uuid) -> Option<&AircraftProfile>;
    fn list(&self) -> Vec<&AircraftProfile>;
}

/// Map-backed store, enough for tests and embedded use. Persistent stores
/// live in the hosting application.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: HashMap<Uuid, AircraftProfile>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, profile: AircraftProfile) {
        self.profiles.insert(profile.id, profile);
    }

    pub fn remove(&mut self, id: Uuid) -> Option<AircraftProfile> {
        self.profiles.remove(&id)
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn get(&self, id: Uuid) -> Option<&AircraftProfile> {
        self.profiles.get(&id)
    }

    fn list(&self) -> Vec<&AircraftProfile> {
        self.profiles.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut store = InMemoryProfileStore::new();
        let profile = AircraftProfile::new("Archer", "N8136F");
        let id = profile.id;
        store.insert(profile);

        assert_eq!(store.get(id).unwrap().registration, "N8136F");
        assert_eq!(store.list().len(), 1);
        assert!(store.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_remove() {
        let mut store = InMemoryProfileStore::new();
        let profile = AircraftProfile::new("Archer", "N8136F");
        let id = profile.id;
        store.insert(profile);

        assert!(store.remove(id).is_some());
        assert!(store.get(id).is_none());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::workflow::session::PlanningSession;

/// A planning session archived after phase 1 was reached. Enough identity
/// to list past flights and to seed a new session from one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletedFlight {
    pub id: Uuid,
    pub aircraft_id: Uuid,
    pub departure_airport: String,
    pub destination_airport: String,
    pub archived_at: DateTime<Utc>,
}

impl CompletedFlight {
    /// Snapshot a phase-1-complete session.
    ///
    /// Callers check [`PlanningSession::phase1_complete`] first; a session
    /// missing route or aircraft falls back to empty identity here rather
    /// than being worth archiving.
    pub fn from_session(session: &PlanningSession) -> Self {
        Self {
            id: Uuid::new_v4(),
            aircraft_id: session.aircraft_id.unwrap_or_default(),
            departure_airport: session.departure_airport.clone().unwrap_or_default(),
            destination_airport: session.destination_airport.clone().unwrap_or_default(),
            archived_at: Utc::now(),
        }
    }

    /// Seed a fresh session from this flight: same route and aircraft,
    /// nothing completed.
    pub fn to_new_session(&self) -> PlanningSession {
        let mut session = PlanningSession::new();
        session.departure_airport = Some(self.departure_airport.clone());
        session.destination_airport = Some(self.destination_airport.clone());
        session.aircraft_id = Some(self.aircraft_id);
        session
    }
}

/// Write access to the flight history. Newest first.
pub trait HistoryStore {
    /// Insert at the front, replacing any entry with the same id.
    fn save(&mut self, flight: CompletedFlight);
    fn all(&self) -> &[CompletedFlight];
    fn find(&self, id: Uuid) -> Option<&CompletedFlight>;
    fn delete(&mut self, id: Uuid);
    fn clear(&mut self);

    fn recent(&self, limit: usize) -> &[CompletedFlight] {
        let all = self.all();
        &all[..limit.min(all.len())]
    }
}

#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    flights: Vec<CompletedFlight>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn save(&mut self, flight: CompletedFlight) {
        self.flights.retain(|f| f.id != flight.id);
        self.flights.insert(0, flight);
    }

    fn all(&self) -> &[CompletedFlight] {
        &self.flights
    }

    fn find(&self, id: Uuid) -> Option<&CompletedFlight> {
        self.flights.iter().find(|f| f.id == id)
    }

    fn delete(&mut self, id: Uuid) {
        self.flights.retain(|f| f.id != id);
    }

    fn clear(&mut self) {
        self.flights.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(departure: &str) -> CompletedFlight {
        CompletedFlight {
            id: Uuid::new_v4(),
            aircraft_id: Uuid::new_v4(),
            departure_airport: departure.into(),
            destination_airport: "KMRY".into(),
            archived_at: Utc::now(),
        }
    }

    #[test]
    fn test_newest_first() {
        let mut store = InMemoryHistoryStore::new();
        store.save(flight("KPAO"));
        store.save(flight("KSQL"));
        assert_eq!(store.all()[0].departure_airport, "KSQL");
        assert_eq!(store.recent(1).len(), 1);
        assert_eq!(store.recent(10).len(), 2);
    }

    #[test]
    fn test_save_replaces_same_id() {
        let mut store = InMemoryHistoryStore::new();
        let mut f = flight("KPAO");
        let id = f.id;
        store.save(f.clone());
        f.destination_airport = "KTRK".into();
        store.save(f);
        assert_eq!(store.all().len(), 1);
        assert_eq!(store.find(id).unwrap().destination_airport, "KTRK");
    }

    #[test]
    fn test_delete_and_clear() {
        let mut store = InMemoryHistoryStore::new();
        let f = flight("KPAO");
        let id = f.id;
        store.save(f);
        store.save(flight("KSQL"));

        store.delete(id);
        assert!(store.find(id).is_none());
        store.clear();
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_copy_to_new_session() {
        let f = flight("KPAO");
        let session = f.to_new_session();
        assert_eq!(session.departure_airport.as_deref(), Some("KPAO"));
        assert_eq!(session.aircraft_id, Some(f.aircraft_id));
        assert!(session.completed.is_empty());
        assert!(session.phase1_complete());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::workflow::step::StepSet;

/// How much hand-holding the workflow applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanningMode {
    /// Steps are gated until their prerequisites hold.
    #[default]
    Guided,
    /// Every step is always accessible.
    Advanced,
}

/// One flight's planning state. Created fresh per flight, mutated only
/// through [`SessionManager`](crate::workflow::SessionManager) (single
/// writer), archived into history once phase 1 is complete and a new flight
/// begins. External stores persist it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanningSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub departure_airport: Option<String>,
    #[serde(default)]
    pub destination_airport: Option<String>,
    #[serde(default)]
    pub aircraft_id: Option<Uuid>,
    #[serde(default)]
    pub completed: StepSet,
    #[serde(default)]
    pub mode: PlanningMode,
}

impl PlanningSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            departure_airport: None,
            destination_airport: None,
            aircraft_id: None,
            completed: StepSet::new(),
            mode: PlanningMode::default(),
        }
    }

    /// Phase 1 — route and aircraft chosen. This is the single aggregate
    /// prerequisite guided-mode gating keys on, and the gate for archiving
    /// a session into history.
    pub fn phase1_complete(&self) -> bool {
        let has = |field: &Option<String>| {
            field.as_deref().is_some_and(|s| !s.trim().is_empty())
        };
        has(&self.departure_airport) && has(&self.destination_airport) && self.aircraft_id.is_some()
    }
}

impl Default for PlanningSession {
    fn default() -> Self {
        Self::new()
    }
}

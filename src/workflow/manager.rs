use tracing::{debug, info};
use uuid::Uuid;

use crate::workflow::history::{CompletedFlight, HistoryStore};
use crate::workflow::session::{PlanningMode, PlanningSession};
use crate::workflow::step::PlanningStep;

/// Which gating contract guided mode enforces.
///
/// The two contracts are materially different and both have shipped; the
/// choice is explicit configuration rather than something inferred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GatingPolicy {
    /// Every step opens once phase 1 (route + aircraft) holds, regardless
    /// of per-step completion order.
    #[default]
    AggregatePrerequisite,
    /// The first step is always open; each later step needs an aircraft
    /// selected and every predecessor completed. Under this policy,
    /// uncompleting a step also uncompletes everything after it.
    SequentialChain,
}

/// Single-writer owner of a [`PlanningSession`]. All mutations route
/// through `&mut self` methods here; everything else reads.
#[derive(Debug, Default)]
pub struct SessionManager {
    session: PlanningSession,
    policy: GatingPolicy,
}

impl SessionManager {
    pub fn new(policy: GatingPolicy) -> Self {
        Self {
            session: PlanningSession::new(),
            policy,
        }
    }

    /// Resume a previously persisted session.
    pub fn with_session(session: PlanningSession, policy: GatingPolicy) -> Self {
        Self { session, policy }
    }

    pub fn session(&self) -> &PlanningSession {
        &self.session
    }

    pub fn policy(&self) -> GatingPolicy {
        self.policy
    }

    pub fn set_mode(&mut self, mode: PlanningMode) {
        info!(?mode, "planning mode changed");
        self.session.mode = mode;
    }

    pub fn select_aircraft(&mut self, aircraft_id: Uuid) {
        info!(%aircraft_id, "aircraft selected");
        self.session.aircraft_id = Some(aircraft_id);
    }

    pub fn set_route(&mut self, departure: impl Into<String>, destination: impl Into<String>) {
        let departure = departure.into();
        let destination = destination.into();
        info!(%departure, %destination, "route set");
        self.session.departure_airport = Some(departure);
        self.session.destination_airport = Some(destination);
    }

    /// Whether the step may be opened right now.
    pub fn can_access_step(&self, step: PlanningStep) -> bool {
        if self.session.mode == PlanningMode::Advanced {
            return true;
        }
        let accessible = match self.policy {
            GatingPolicy::AggregatePrerequisite => self.session.phase1_complete(),
            GatingPolicy::SequentialChain => {
                step == PlanningStep::Aircraft
                    || (self.session.aircraft_id.is_some()
                        && step.predecessors().all(|p| self.session.completed.contains(p)))
            }
        };
        if !accessible {
            debug!(%step, policy = ?self.policy, "step gated");
        }
        accessible
    }

    pub fn is_step_completed(&self, step: PlanningStep) -> bool {
        self.session.completed.contains(step)
    }

    /// Mark a step complete. Idempotent.
    pub fn complete_step(&mut self, step: PlanningStep) {
        if !self.session.completed.contains(step) {
            info!(%step, "step completed");
        }
        self.session.completed.insert(step);
    }

    /// Mark a step incomplete. Under [`GatingPolicy::SequentialChain`] the
    /// steps after it lose their completion too, since their prerequisite
    /// just went away; the aggregate policy leaves them alone.
    pub fn uncomplete_step(&mut self, step: PlanningStep) {
        info!(%step, "step uncompleted");
        self.session.completed.remove(step);
        if self.policy == GatingPolicy::SequentialChain {
            for later in step.successors() {
                self.session.completed.remove(later);
            }
        }
    }

    /// Progress across the whole workflow, 0–100. Phase 1 counts as one
    /// unit of progress alongside the per-step completions.
    pub fn progress_percentage(&self) -> f64 {
        let completed = self.session.completed.len() + usize::from(self.session.phase1_complete());
        (completed as f64 / (PlanningStep::COUNT + 1) as f64) * 100.0
    }

    /// Discard everything and start an empty session. There is no terminal
    /// state; a session can always be reset.
    pub fn reset(&mut self) {
        info!(session_id = %self.session.id, "session reset");
        let mode = self.session.mode;
        self.session = PlanningSession::new();
        self.session.mode = mode;
    }

    /// Start planning a new flight with the same aircraft: completion and
    /// route are cleared, the aircraft selection carries over.
    pub fn start_new_flight(&mut self) {
        info!(session_id = %self.session.id, "starting new flight");
        let aircraft_id = self.session.aircraft_id;
        let mode = self.session.mode;
        self.session = PlanningSession::new();
        self.session.aircraft_id = aircraft_id;
        self.session.mode = mode;
    }

    /// Archive the current session into history and begin a new flight.
    /// Only a phase-1-complete session has enough identity to archive;
    /// otherwise the session is simply replaced.
    pub fn finish_flight(&mut self, history: &mut dyn HistoryStore) {
        if self.session.phase1_complete() {
            let flight = CompletedFlight::from_session(&self.session);
            info!(flight_id = %flight.id, "flight archived to history");
            history.save(flight);
        } else {
            debug!("session not phase-1 complete; nothing archived");
        }
        self.start_new_flight();
    }
}

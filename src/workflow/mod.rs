//! Planning workflow: a fixed sequence of steps, a set of completed ones,
//! and mode-dependent gating over which steps may be opened next.

pub mod history;
pub mod manager;
pub mod session;
pub mod step;

pub use history::{CompletedFlight, HistoryStore, InMemoryHistoryStore};
pub use manager::{GatingPolicy, SessionManager};
pub use session::{PlanningMode, PlanningSession};
pub use step::{PlanningStep, StepSet};

//! Flight-planning computation core.
//!
//! Four independent engines behind plain value types: the weight-and-balance
//! aggregator (with CG envelope containment), the performance interpolator,
//! the dead-reckoning navigation solver, and the planning-workflow state
//! machine. The hosting application owns persistence and presentation and
//! orchestrates these components; nothing here calls anything else here.

pub mod aircraft;
pub mod calc;
pub mod navlog;
pub mod performance;
pub mod weather;
pub mod weight_balance;
pub mod workflow;

pub use aircraft::{AircraftProfile, EnvelopePoint, Station};
pub use calc::navigation::NavigationError;
pub use navlog::{NavLogSummary, NavigationLeg};
pub use weight_balance::{EnvelopeCategory, WeightBalanceResult, WeightItem};
pub use workflow::{
    GatingPolicy, PlanningMode, PlanningSession, PlanningStep, SessionManager,
};

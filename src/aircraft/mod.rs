pub mod profile;
pub mod store;

pub use profile::{
    AircraftCategory, AircraftProfile, CruisePoint, EnvelopePoint, PerformanceData, Station,
};
pub use store::{InMemoryProfileStore, ProfileStore};

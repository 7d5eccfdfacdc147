//! Pure calculation engines. Stateless and safe to call from any thread.

pub mod geometry;
pub mod interpolate;
pub mod navigation;
pub mod units;

//! Weight & balance aggregation.
//!
//! Combines the empty-aircraft moment with loaded-station and fuel moments,
//! derives total weight / moment / CG and checks the result against the
//! selected CG envelope.

use serde::{Deserialize, Serialize};

use crate::aircraft::{AircraftProfile, EnvelopePoint};
use crate::calc::geometry;

/// One loaded item: a station load or the fuel load. Built per calculation,
/// never persisted on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightItem {
    pub label: String,
    pub weight_lb: f64,
    pub arm_in: f64,
}

impl WeightItem {
    pub fn new(label: impl Into<String>, weight_lb: f64, arm_in: f64) -> Self {
        Self {
            label: label.into(),
            weight_lb,
            arm_in,
        }
    }

    pub fn moment_lb_in(&self) -> f64 {
        self.weight_lb * self.arm_in
    }
}

/// Which certification envelope to check against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnvelopeCategory {
    #[default]
    Normal,
    Utility,
}

/// Derived loading result; recomputed from scratch on every input change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightBalanceResult {
    pub total_weight_lb: f64,
    pub total_moment_lb_in: f64,
    pub center_of_gravity_in: f64,
    pub within_limits: bool,
}

impl WeightBalanceResult {
    /// True when the total weight sits at or under an optional ceiling.
    /// An absent ceiling never fails the check.
    pub fn within_ceiling(&self, ceiling_lb: Option<f64>) -> bool {
        match ceiling_lb {
            Some(limit) => self.total_weight_lb <= limit,
            None => true,
        }
    }
}

/// Compute total weight, moment and CG for a loading, and check it against
/// the profile's envelope for `category`.
///
/// Pure function of its inputs. A non-positive total weight yields CG 0
/// (degenerate-safe, not an error). An empty envelope — including asking
/// for a utility envelope the profile does not carry — passes the limits
/// check, since there is nothing to violate.
pub fn compute(
    profile: &AircraftProfile,
    items: &[WeightItem],
    category: EnvelopeCategory,
) -> WeightBalanceResult {
    let total_weight_lb = profile.empty_weight_lb
        + items.iter().map(|item| item.weight_lb).sum::<f64>();

    let empty_moment = profile.empty_weight_lb * profile.empty_arm_in();
    let total_moment_lb_in =
        empty_moment + items.iter().map(WeightItem::moment_lb_in).sum::<f64>();

    let center_of_gravity_in = if total_weight_lb <= 0.0 {
        0.0
    } else {
        total_moment_lb_in / total_weight_lb
    };

    let envelope = selected_envelope(profile, category);
    let within_limits = if envelope.is_empty() {
        true
    } else {
        in_envelope(envelope, total_weight_lb, center_of_gravity_in)
    };

    WeightBalanceResult {
        total_weight_lb,
        total_moment_lb_in,
        center_of_gravity_in,
        within_limits,
    }
}

/// The fuel load as a weight item.
///
/// The profile has no dedicated fuel-tank arm, so the fuel arm is
/// approximated as the unweighted mean of the station arms (0 with no
/// stations). A known approximation; changing it needs a data-model change
/// first.
pub fn fuel_item(profile: &AircraftProfile, gallons: f64) -> WeightItem {
    let arm_in = if profile.stations.is_empty() {
        0.0
    } else {
        profile.stations.iter().map(|s| s.arm_in).sum::<f64>() / profile.stations.len() as f64
    };
    WeightItem::new(
        "Fuel",
        gallons * profile.fuel_density_lb_per_gal,
        arm_in,
    )
}

fn selected_envelope(profile: &AircraftProfile, category: EnvelopeCategory) -> &[EnvelopePoint] {
    match category {
        EnvelopeCategory::Normal => &profile.normal_envelope,
        EnvelopeCategory::Utility => profile.utility_envelope.as_deref().unwrap_or(&[]),
    }
}

/// Envelope containment of a (weight, CG) point. The envelope polygon lives
/// in (cg, weight) coordinates: CG on x, weight on y.
fn in_envelope(envelope: &[EnvelopePoint], weight_lb: f64, cg_in: f64) -> bool {
    let polygon: Vec<(f64, f64)> = envelope.iter().map(|p| (p.cg_in, p.weight_lb)).collect();
    geometry::contains_point(&polygon, (cg_in, weight_lb))
}

//! Navigation log legs and totals.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calc::navigation;

/// One leg of the navigation log. The derived fields (`ground_speed_kt`,
/// `time_en_route_min`, `fuel_burn_gal`) come from [`recompute`] and are
/// never authoritative on their own: whenever an input changes, recompute.
///
/// [`recompute`]: NavigationLeg::recompute
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationLeg {
    pub id: Uuid,
    pub from: String,
    pub to: String,
    pub altitude_ft: f64,
    pub course_deg_true: f64,
    pub distance_nm: f64,
    pub wind_direction_deg: f64,
    pub wind_speed_kt: f64,

    // Derived
    #[serde(default)]
    pub ground_speed_kt: f64,
    #[serde(default)]
    pub time_en_route_min: f64,
    #[serde(default)]
    pub fuel_burn_gal: f64,
}

impl NavigationLeg {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            from: from.into(),
            to: to.into(),
            altitude_ft: 0.0,
            course_deg_true: 0.0,
            distance_nm: 0.0,
            wind_direction_deg: 0.0,
            wind_speed_kt: 0.0,
            ground_speed_kt: 0.0,
            time_en_route_min: 0.0,
            fuel_burn_gal: 0.0,
        }
    }

    /// Refresh the derived fields from the wind triangle for the given
    /// cruise numbers. A ground speed at or below zero leaves time and fuel
    /// at zero, the same unflyable-leg signal the solver uses.
    pub fn recompute(&mut self, true_airspeed_kt: f64, fuel_burn_gph: f64) {
        self.ground_speed_kt = navigation::ground_speed(
            true_airspeed_kt,
            self.wind_direction_deg,
            self.wind_speed_kt,
            self.course_deg_true,
        );
        self.time_en_route_min =
            navigation::time_en_route_min(self.distance_nm, self.ground_speed_kt);
        self.fuel_burn_gal =
            navigation::fuel_burn_gal(self.time_en_route_min, fuel_burn_gph);
    }

    /// Wind correction angle for this leg, when one exists.
    pub fn wind_correction_angle_deg(
        &self,
        true_airspeed_kt: f64,
    ) -> Result<f64, navigation::NavigationError> {
        navigation::wind_correction_angle(
            true_airspeed_kt,
            self.wind_direction_deg,
            self.wind_speed_kt,
            self.course_deg_true,
        )
    }
}

/// Totals over a sequence of legs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavLogSummary {
    pub total_distance_nm: f64,
    pub total_time_min: f64,
    pub total_fuel_gal: f64,
}

impl NavLogSummary {
    pub fn from_legs(legs: &[NavigationLeg]) -> Self {
        Self {
            total_distance_nm: legs.iter().map(|l| l.distance_nm).sum(),
            total_time_min: legs.iter().map(|l| l.time_en_route_min).sum(),
            total_fuel_gal: legs.iter().map(|l| l.fuel_burn_gal).sum(),
        }
    }
}

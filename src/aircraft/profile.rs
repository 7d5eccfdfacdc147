use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aircraft profile: immutable identity plus the weight, envelope and
/// performance data every calculation borrows read-only. Owned by a
/// [`ProfileStore`](crate::aircraft::ProfileStore) outside the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AircraftProfile {
    pub id: Uuid,
    pub name: String,
    pub registration: String,
    pub type_designator: String,
    #[serde(default)]
    pub category: AircraftCategory,

    // Weight & balance
    pub empty_weight_lb: f64,
    pub empty_moment_lb_in: f64,
    pub stations: Vec<Station>,
    pub normal_envelope: Vec<EnvelopePoint>,
    #[serde(default)]
    pub utility_envelope: Option<Vec<EnvelopePoint>>,
    #[serde(default)]
    pub max_ramp_weight_lb: Option<f64>,
    #[serde(default)]
    pub max_takeoff_weight_lb: Option<f64>,
    #[serde(default)]
    pub max_landing_weight_lb: Option<f64>,

    // Fuel
    pub usable_fuel_gal: f64,
    #[serde(default = "default_fuel_density")]
    pub fuel_density_lb_per_gal: f64,

    #[serde(default)]
    pub performance: PerformanceData,
}

fn default_fuel_density() -> f64 {
    6.0
}

impl AircraftProfile {
    pub fn new(name: impl Into<String>, registration: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            registration: registration.into(),
            type_designator: String::new(),
            category: AircraftCategory::default(),
            empty_weight_lb: 0.0,
            empty_moment_lb_in: 0.0,
            stations: Vec::new(),
            normal_envelope: Vec::new(),
            utility_envelope: None,
            max_ramp_weight_lb: None,
            max_takeoff_weight_lb: None,
            max_landing_weight_lb: None,
            usable_fuel_gal: 0.0,
            fuel_density_lb_per_gal: default_fuel_density(),
            performance: PerformanceData::default(),
        }
    }

    /// Empty-aircraft arm, derived from the weighed empty moment.
    /// Zero when the empty weight is not positive.
    pub fn empty_arm_in(&self) -> f64 {
        if self.empty_weight_lb <= 0.0 {
            return 0.0;
        }
        self.empty_moment_lb_in / self.empty_weight_lb
    }

    /// Weight of full usable fuel.
    pub fn usable_fuel_weight_lb(&self) -> f64 {
        self.usable_fuel_gal * self.fuel_density_lb_per_gal
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AircraftCategory {
    #[default]
    SingleEngineLand,
    MultiEngineLand,
    SingleEngineSea,
    MultiEngineSea,
}

/// A loading station (seat row, baggage area, ...) at a fixed arm.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub name: String,
    pub arm_in: f64,
    #[serde(default)]
    pub max_weight_lb: Option<f64>,
}

/// One vertex of a CG envelope polygon. Vertices are consumed in the order
/// given and the polygon closes implicitly from the last point to the first;
/// no winding or convexity validation is performed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopePoint {
    pub weight_lb: f64,
    pub cg_in: f64,
}

/// Book performance figures. The takeoff/landing distances are the sea-level
/// standard-day scalars from the POH; cruise settings are sampled per power
/// setting and altitude.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceData {
    #[serde(default)]
    pub takeoff_ground_roll_ft: Option<f64>,
    #[serde(default)]
    pub takeoff_over_50ft_ft: Option<f64>,
    #[serde(default)]
    pub landing_ground_roll_ft: Option<f64>,
    #[serde(default)]
    pub landing_over_50ft_ft: Option<f64>,
    #[serde(default)]
    pub cruise: Vec<CruisePoint>,
}

/// A cruise performance sample at one power setting and altitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CruisePoint {
    pub rpm: u32,
    pub altitude_ft: f64,
    pub tas_kt: f64,
    pub fuel_burn_gph: f64,
}

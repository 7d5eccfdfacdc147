//! Atmosphere formulas and performance-chart lookups.

use crate::aircraft::AircraftProfile;
use crate::calc::interpolate;

/// Density altitude from pressure altitude and outside air temperature.
///
/// ISA temperature lapses 2 C per thousand feet from 15 C at sea level;
/// each degree of deviation is worth 120 ft.
pub fn density_altitude(pressure_altitude_ft: f64, temp_c: f64) -> f64 {
    let isa_temp = 15.0 - 2.0 * (pressure_altitude_ft / 1000.0);
    pressure_altitude_ft + 120.0 * (temp_c - isa_temp)
}

/// Pressure altitude from field elevation and the altimeter setting.
pub fn pressure_altitude(field_elevation_ft: f64, altimeter_in_hg: f64) -> f64 {
    field_elevation_ft + (29.92 - altimeter_in_hg) * 1000.0
}

/// Cruise true airspeed at a power setting and altitude, interpolated from
/// the profile's cruise table. Only samples at exactly `rpm` participate;
/// `None` when the table has no samples at that setting.
pub fn cruise_tas_kt(profile: &AircraftProfile, rpm: u32, altitude_ft: f64) -> Option<f64> {
    let samples = cruise_samples(profile, rpm, |p| p.tas_kt);
    interpolate::lookup(&samples, altitude_ft)
}

/// Cruise fuel burn (gph) at a power setting and altitude; same sampling
/// rules as [`cruise_tas_kt`].
pub fn cruise_fuel_burn_gph(profile: &AircraftProfile, rpm: u32, altitude_ft: f64) -> Option<f64> {
    let samples = cruise_samples(profile, rpm, |p| p.fuel_burn_gph);
    interpolate::lookup(&samples, altitude_ft)
}

fn cruise_samples(
    profile: &AircraftProfile,
    rpm: u32,
    value: impl Fn(&crate::aircraft::CruisePoint) -> f64,
) -> Vec<(f64, f64)> {
    profile
        .performance
        .cruise
        .iter()
        .filter(|p| p.rpm == rpm)
        .map(|p| (p.altitude_ft, value(p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::CruisePoint;
    use approx::assert_relative_eq;

    #[test]
    fn test_density_altitude_standard_day() {
        assert_relative_eq!(density_altitude(0.0, 15.0), 0.0);
    }

    #[test]
    fn test_density_altitude_hot_day() {
        // 30 C at sea level: 15 degrees above ISA, 1800 ft of density altitude.
        assert_relative_eq!(density_altitude(0.0, 30.0), 1800.0);
    }

    #[test]
    fn test_density_altitude_at_altitude() {
        // ISA at 5000 ft is 5 C; a 5 C day is standard.
        assert_relative_eq!(density_altitude(5000.0, 5.0), 5000.0);
        assert_relative_eq!(density_altitude(5000.0, 15.0), 6200.0);
    }

    #[test]
    fn test_pressure_altitude_standard_setting() {
        assert_relative_eq!(pressure_altitude(0.0, 29.92), 0.0);
        assert_relative_eq!(pressure_altitude(1000.0, 29.92), 1000.0);
    }

    #[test]
    fn test_pressure_altitude_low_pressure() {
        assert_relative_eq!(pressure_altitude(0.0, 28.92), 1000.0, epsilon = 1e-9);
        assert_relative_eq!(pressure_altitude(500.0, 30.42), 0.0, epsilon = 1e-9);
    }

    fn profile_with_cruise_table() -> AircraftProfile {
        let mut profile = AircraftProfile::new("Skyhawk", "N12345");
        profile.performance.cruise = vec![
            CruisePoint { rpm: 2400, altitude_ft: 4000.0, tas_kt: 116.0, fuel_burn_gph: 8.9 },
            CruisePoint { rpm: 2400, altitude_ft: 8000.0, tas_kt: 120.0, fuel_burn_gph: 8.3 },
            CruisePoint { rpm: 2200, altitude_ft: 4000.0, tas_kt: 105.0, fuel_burn_gph: 7.1 },
        ];
        profile
    }

    #[test]
    fn test_cruise_lookup_interpolates_altitude() {
        let profile = profile_with_cruise_table();
        assert_relative_eq!(cruise_tas_kt(&profile, 2400, 6000.0).unwrap(), 118.0);
        assert_relative_eq!(cruise_fuel_burn_gph(&profile, 2400, 6000.0).unwrap(), 8.6, epsilon = 1e-9);
    }

    #[test]
    fn test_cruise_lookup_clamps() {
        let profile = profile_with_cruise_table();
        assert_relative_eq!(cruise_tas_kt(&profile, 2400, 0.0).unwrap(), 116.0);
        assert_relative_eq!(cruise_tas_kt(&profile, 2400, 12000.0).unwrap(), 120.0);
    }

    #[test]
    fn test_cruise_lookup_unknown_rpm() {
        let profile = profile_with_cruise_table();
        assert_eq!(cruise_tas_kt(&profile, 2500, 6000.0), None);
    }
}

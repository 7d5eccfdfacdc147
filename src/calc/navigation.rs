//! Dead-reckoning wind-triangle solver.
//!
//! All angles cross the API boundary in degrees; trig happens in radians.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum NavigationError {
    /// The crosswind component exceeds what the aircraft can correct for.
    #[error("wind {wind_speed_kt} kt exceeds true airspeed {true_airspeed_kt} kt; no correction angle exists")]
    WindExceedsAirspeed {
        true_airspeed_kt: f64,
        wind_speed_kt: f64,
    },
}

/// Wind component along the course. Positive is a tailwind contribution to
/// ground speed (headwind enters as a negative cosine).
pub fn headwind_component(wind_direction_deg: f64, wind_speed_kt: f64, course_deg: f64) -> f64 {
    wind_speed_kt * (wind_direction_deg - course_deg).to_radians().cos()
}

/// Wind component across the course.
pub fn crosswind_component(wind_direction_deg: f64, wind_speed_kt: f64, course_deg: f64) -> f64 {
    wind_speed_kt * (wind_direction_deg - course_deg).to_radians().sin()
}

/// Ground speed along the course. Not floored at zero: a negative result is
/// the caller's signal that the wind makes the course unflyable.
pub fn ground_speed(
    true_airspeed_kt: f64,
    wind_direction_deg: f64,
    wind_speed_kt: f64,
    course_deg: f64,
) -> f64 {
    true_airspeed_kt + headwind_component(wind_direction_deg, wind_speed_kt, course_deg)
}

/// Wind correction angle in degrees.
///
/// No solution exists when the crosswind component exceeds the true
/// airspeed (or the airspeed is not positive); that is reported as an error
/// rather than a NaN for the caller to display.
pub fn wind_correction_angle(
    true_airspeed_kt: f64,
    wind_direction_deg: f64,
    wind_speed_kt: f64,
    course_deg: f64,
) -> Result<f64, NavigationError> {
    let crosswind = crosswind_component(wind_direction_deg, wind_speed_kt, course_deg);
    if true_airspeed_kt <= 0.0 || crosswind.abs() > true_airspeed_kt {
        return Err(NavigationError::WindExceedsAirspeed {
            true_airspeed_kt,
            wind_speed_kt,
        });
    }
    Ok((crosswind / true_airspeed_kt).asin().to_degrees())
}

/// Time en route in minutes. Zero or negative ground speed yields 0.
pub fn time_en_route_min(distance_nm: f64, ground_speed_kt: f64) -> f64 {
    if ground_speed_kt <= 0.0 {
        return 0.0;
    }
    (distance_nm / ground_speed_kt) * 60.0
}

/// Fuel burned over `time_min` minutes at `burn_rate_gph` gallons per hour.
pub fn fuel_burn_gal(time_min: f64, burn_rate_gph: f64) -> f64 {
    (time_min / 60.0) * burn_rate_gph
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ground_speed_no_wind_equals_tas() {
        for course in [0.0, 45.0, 180.0, 359.0] {
            assert_relative_eq!(ground_speed(110.0, 270.0, 0.0, course), 110.0);
        }
    }

    #[test]
    fn test_direct_tailwind_adds_to_ground_speed() {
        // Wind from behind: wind direction equal to course means the wind
        // vector points along the course in this formulation.
        let gs = ground_speed(100.0, 0.0, 20.0, 0.0);
        assert_relative_eq!(gs, 120.0);
    }

    #[test]
    fn test_opposing_wind_subtracts() {
        let gs = ground_speed(100.0, 180.0, 20.0, 0.0);
        assert_relative_eq!(gs, 80.0);
    }

    #[test]
    fn test_ground_speed_can_go_negative() {
        let gs = ground_speed(30.0, 180.0, 50.0, 0.0);
        assert_relative_eq!(gs, -20.0);
    }

    #[test]
    fn test_wind_correction_angle_pure_crosswind() {
        // 90 degrees off the nose, half the airspeed: asin(0.5) = 30 deg.
        let wca = wind_correction_angle(100.0, 90.0, 50.0, 0.0).unwrap();
        assert_relative_eq!(wca, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_wind_correction_angle_no_solution() {
        let err = wind_correction_angle(40.0, 90.0, 60.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            NavigationError::WindExceedsAirspeed {
                true_airspeed_kt: 40.0,
                wind_speed_kt: 60.0,
            }
        );
    }

    #[test]
    fn test_wind_correction_angle_zero_airspeed() {
        assert!(wind_correction_angle(0.0, 90.0, 10.0, 0.0).is_err());
    }

    #[test]
    fn test_time_en_route() {
        assert_relative_eq!(time_en_route_min(100.0, 100.0), 60.0);
        assert_relative_eq!(time_en_route_min(50.0, 100.0), 30.0);
        assert_relative_eq!(time_en_route_min(50.0, 0.0), 0.0);
        assert_relative_eq!(time_en_route_min(50.0, -10.0), 0.0);
    }

    #[test]
    fn test_fuel_burn() {
        assert_relative_eq!(fuel_burn_gal(60.0, 8.5), 8.5);
        assert_relative_eq!(fuel_burn_gal(30.0, 10.0), 5.0);
    }
}

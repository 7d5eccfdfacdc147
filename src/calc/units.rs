//! Unit conversions used around the planning core.

pub fn nautical_to_statute_miles(nm: f64) -> f64 {
    nm * 1.15078
}

pub fn statute_to_nautical_miles(sm: f64) -> f64 {
    sm / 1.15078
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn feet_to_meters(ft: f64) -> f64 {
    ft * 0.3048
}

pub fn meters_to_feet(m: f64) -> f64 {
    m / 0.3048
}

//! Piecewise-linear lookup over ordered (x, y) sample tables.

/// Two-point linear interpolation. A degenerate interval (`x1 == x2`) acts
/// as a step function at `y1` rather than dividing by zero.
pub fn interpolate_linear(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x1 == x2 {
        return y1;
    }
    y1 + (x - x1) * (y2 - y1) / (x2 - x1)
}

/// Interpolated lookup into a sample table.
///
/// Returns `None` only for an empty table. Samples are sorted by x (stable,
/// so the first of two equal-x samples wins) and the result is clamped to
/// the end samples: no extrapolation beyond the table's range. A single
/// sample answers every query with its y.
pub fn lookup(samples: &[(f64, f64)], x: f64) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let (min_x, min_y) = sorted[0];
    let (max_x, max_y) = sorted[sorted.len() - 1];
    if x <= min_x {
        return Some(min_y);
    }
    if x >= max_x {
        return Some(max_y);
    }

    for pair in sorted.windows(2) {
        let (x1, y1) = pair[0];
        let (x2, y2) = pair[1];
        if x1 <= x && x <= x2 {
            return Some(interpolate_linear(x, x1, y1, x2, y2));
        }
    }

    // Unreachable: x is strictly inside [min_x, max_x], so some window brackets it.
    Some(max_y)
}

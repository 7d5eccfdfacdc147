/// Point-in-polygon test by ray casting.
///
/// The polygon is the ordered vertex list with an implicit closing edge from
/// the last vertex back to the first. Fewer than 3 vertices never contains
/// anything. Self-intersecting polygons yield the raw parity result, and
/// points exactly on an edge may land on either side depending on rounding;
/// both are accepted approximations for envelope checks, not defects.
pub fn contains_point(polygon: &[(f64, f64)], point: (f64, f64)) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let (px, py) = point;
    let mut inside = false;
    let mut j = polygon.len() - 1;

    for i in 0..polygon.len() {
        let (xi, yi) = polygon[i];
        let (xj, yj) = polygon[j];

        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }

    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: [(f64, f64); 4] = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];

    #[test]
    fn test_point_inside_square() {
        assert!(contains_point(&SQUARE, (5.0, 5.0)));
        assert!(contains_point(&SQUARE, (0.1, 9.9)));
    }

    #[test]
    fn test_point_outside_square() {
        assert!(!contains_point(&SQUARE, (15.0, 5.0)));
        assert!(!contains_point(&SQUARE, (-1.0, -1.0)));
        assert!(!contains_point(&SQUARE, (5.0, 100.0)));
    }

    #[test]
    fn test_degenerate_polygon_contains_nothing() {
        assert!(!contains_point(&[], (0.0, 0.0)));
        assert!(!contains_point(&[(0.0, 0.0)], (0.0, 0.0)));
        assert!(!contains_point(&[(0.0, 0.0), (10.0, 10.0)], (5.0, 5.0)));
    }

    #[test]
    fn test_triangle() {
        let tri = [(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)];
        assert!(contains_point(&tri, (5.0, 2.0)));
        assert!(!contains_point(&tri, (0.5, 9.0)));
    }

    #[test]
    fn test_vertex_order_does_not_matter_for_interior() {
        // Same square wound clockwise
        let cw = [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];
        assert!(contains_point(&cw, (5.0, 5.0)));
        assert!(!contains_point(&cw, (11.0, 5.0)));
    }
}

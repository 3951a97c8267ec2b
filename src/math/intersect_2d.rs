use super::{Point2, Vector2, TOLERANCE};

/// Slope substituted for vertical lines.
///
/// Close enough to vertical for stroke geometry and keeps the slope form
/// free of a special case.
const NEAR_INFINITY: f64 = 1e10;

/// Intersects two infinite lines `p1 + s * d1` and `p2 + u * d2`.
///
/// Each line is written as `m * x - y + c = 0` and the pair is solved with
/// Cramer's rule. Returns `None` when the determinant vanishes (parallel or
/// coincident directions) or the solution is not finite.
#[must_use]
pub fn line_intersection(p1: &Point2, d1: &Vector2, p2: &Point2, d2: &Vector2) -> Option<Point2> {
    // Slope differences do not scale, so test the angle between the directions.
    if d1.perp(d2).abs() < TOLERANCE * d1.norm() * d2.norm() {
        return None;
    }

    let m1 = slope(d1);
    let m2 = slope(d2);

    let (a1, b1, c1) = (m1, -1.0, p1.y - m1 * p1.x);
    let (a2, b2, c2) = (m2, -1.0, p2.y - m2 * p2.x);

    let det = a1 * b2 - a2 * b1;
    if det.abs() < TOLERANCE {
        return None;
    }
    let det_inv = 1.0 / det;

    let point = Point2::new((b1 * c2 - b2 * c1) * det_inv, (a2 * c1 - a1 * c2) * det_inv);
    if point.x.is_finite() && point.y.is_finite() {
        Some(point)
    } else {
        None
    }
}

fn slope(d: &Vector2) -> f64 {
    if d.x.abs() < TOLERANCE {
        NEAR_INFINITY
    } else {
        d.y / d.x
    }
}

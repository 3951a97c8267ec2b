pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns the clockwise perpendicular `(y, -x)` of `v`.
///
/// For a curve walked in its parameter direction this points to the right
/// (y-up coordinates), which is the outer side of the stroke.
#[must_use]
pub fn perp(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// Returns `v / |v|`, or the zero vector when `v` has no length.
#[must_use]
pub fn normalize_or_zero(v: &Vector2) -> Vector2 {
    let len = v.norm();
    if len < TOLERANCE {
        Vector2::zeros()
    } else {
        v / len
    }
}

/// Returns `true` when `v` is zero within [`TOLERANCE`].
#[must_use]
pub fn is_zero(v: &Vector2) -> bool {
    v.norm_squared() <= TOLERANCE * TOLERANCE
}

/// Returns `true` when `a` and `b` are equal within [`TOLERANCE`].
#[must_use]
pub fn is_equal(a: &Vector2, b: &Vector2) -> bool {
    is_zero(&(a - b))
}

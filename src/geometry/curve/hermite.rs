use crate::math::{Point2, Vector2};

use super::Curve;

/// A cubic Hermite segment on `t ∈ [0, 1]`.
///
/// Interpolates `p0 → p1` with start velocity `t0` and end velocity `t1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hermite {
    p0: Point2,
    p1: Point2,
    t0: Vector2,
    t1: Vector2,
}

impl Hermite {
    /// Creates a new Hermite segment.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, t0: Vector2, t1: Vector2) -> Self {
        Self { p0, p1, t0, t1 }
    }

    /// Returns the start tangent.
    #[must_use]
    pub fn start_tangent(&self) -> Vector2 {
        self.t0
    }

    /// Returns the end tangent.
    #[must_use]
    pub fn end_tangent(&self) -> Vector2 {
        self.t1
    }

    /// Returns the equivalent cubic Bezier control polygon.
    #[must_use]
    pub fn bezier_controls(&self) -> [Point2; 4] {
        [
            self.p0,
            self.p0 + self.t0 / 3.0,
            self.p1 - self.t1 / 3.0,
            self.p1,
        ]
    }
}

impl Curve for Hermite {
    fn evaluate(&self, t: f64) -> Point2 {
        let t2 = t * t;
        let t3 = t2 * t;
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;
        Point2::from(
            self.p0.coords * h00 + self.t0 * h10 + self.p1.coords * h01 + self.t1 * h11,
        )
    }

    fn derivative(&self, t: f64) -> Vector2 {
        let t2 = t * t;
        let d00 = 6.0 * t2 - 6.0 * t;
        let d10 = 3.0 * t2 - 4.0 * t + 1.0;
        let d01 = -6.0 * t2 + 6.0 * t;
        let d11 = 3.0 * t2 - 2.0 * t;
        self.p0.coords * d00 + self.t0 * d10 + self.p1.coords * d01 + self.t1 * d11
    }
}

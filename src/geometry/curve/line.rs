use crate::error::{GeometryError, Result};
use crate::math::intersect_2d::line_intersection;
use crate::math::{Point2, Vector2, TOLERANCE};

/// An infinite line defined by an origin point and a direction vector.
///
/// The parametric form is: `P(t) = origin + t * direction`. The direction
/// keeps its magnitude so that it matches the tangent it was built from.
#[derive(Debug, Clone)]
pub struct Line {
    origin: Point2,
    direction: Vector2,
}

impl Line {
    /// Creates a new line from an origin and direction.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point2, direction: Vector2) -> Result<Self> {
        if direction.norm() < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self { origin, direction })
    }

    /// Intersects this line with `other`.
    ///
    /// Returns `None` for parallel or coincident lines.
    #[must_use]
    pub fn intersect(&self, other: &Line) -> Option<Point2> {
        line_intersection(&self.origin, &self.direction, &other.origin, &other.direction)
    }
}

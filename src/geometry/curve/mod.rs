mod hermite;
mod line;

pub use hermite::Hermite;
pub use line::Line;

use crate::math::{Point2, Vector2};

/// Trait for parametric curves in the plane.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// Computes the first derivative (velocity) at parameter `t`.
    fn derivative(&self, t: f64) -> Vector2;
}

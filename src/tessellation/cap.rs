use crate::geometry::{Curve, Hermite};
use crate::math::{normalize_or_zero, perp, Point2, Vector2};

use super::StrokeConfig;

/// Builds round terminators for the free ends of an open stroke.
#[derive(Debug)]
pub struct CapBuilder<'a> {
    config: &'a StrokeConfig,
}

impl<'a> CapBuilder<'a> {
    /// Creates a cap builder.
    #[must_use]
    pub fn new(config: &'a StrokeConfig) -> Self {
        Self { config }
    }

    /// Samples a round cap at `vertex` bulging along `outward`.
    ///
    /// The cap is a Hermite curve from `vertex + perp(dir) * w` to
    /// `vertex - perp(dir) * w` with end tangents `±dir * w * round_end_factor`,
    /// approximating a half circle. `samples` points are returned for
    /// `t ∈ [0, 1)`; the closing point belongs to the following boundary.
    #[must_use]
    pub fn round_cap(&self, vertex: Point2, outward: Vector2, half_width: f64) -> Vec<Point2> {
        let dir = normalize_or_zero(&outward);
        let side = perp(&dir) * half_width;
        let pull = dir * half_width * self.config.round_end_factor;
        let curve = Hermite::new(vertex + side, vertex - side, pull, -pull);
        self.config.sample_params().map(|t| curve.evaluate(t)).collect()
    }

    /// Replaces the last point of `outline` with a round cap.
    ///
    /// Does nothing when `outline` is empty.
    pub fn append_round_cap(
        &self,
        outline: &mut Vec<Point2>,
        vertex: Point2,
        outward: Vector2,
        half_width: f64,
    ) {
        if outline.pop().is_none() {
            return;
        }
        outline.extend(self.round_cap(vertex, outward, half_width));
    }
}

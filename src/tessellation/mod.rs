mod cap;
mod join;
mod offset_sampler;
mod segment;
mod stroke_style;
mod tessellate_stroke;

pub use cap::CapBuilder;
pub use join::{Join, JoinContext, JoinResolver};
pub use offset_sampler::{BoundarySides, OffsetSampler};
pub use segment::CenterlineSegment;
pub use stroke_style::StrokeParams;
pub use tessellate_stroke::{Stroker, TessellateStroke};

use crate::error::{Result, TessellationError};
use crate::geometry::Spline;
use crate::math::polygon_2d::{bounds_2d, signed_area_2d};
use crate::math::Point2;

/// Parameters controlling stroke tessellation resolution and corner shaping.
#[derive(Debug, Clone, Copy)]
pub struct StrokeConfig {
    /// Samples taken per segment (and per round cap).
    pub samples: usize,
    /// Multiplier on the half-width for the tangents of a round cap curve.
    pub round_end_factor: f64,
    /// Turn magnitude above which a corner gets a sharp intersection point.
    pub cusp_threshold: f64,
    /// Spike length multiplier reached at the cusp threshold.
    pub spike_amount: f64,
    /// Parameter offset used instead of `0` / `1` when evaluating
    /// derivatives at segment ends.
    pub cusp_tangent_adjust: f64,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            samples: 50,
            round_end_factor: 4.0,
            cusp_threshold: 0.40,
            spike_amount: 4.0,
            cusp_tangent_adjust: 0.025,
        }
    }
}

impl StrokeConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidParameters` if any value fails
    /// [`StrokeConfig::validate`].
    pub fn new(
        samples: usize,
        round_end_factor: f64,
        cusp_threshold: f64,
        spike_amount: f64,
        cusp_tangent_adjust: f64,
    ) -> Result<Self> {
        let config = Self {
            samples,
            round_end_factor,
            cusp_threshold,
            spike_amount,
            cusp_tangent_adjust,
        };
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with a different per-segment sample count.
    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Returns a copy with a different cusp threshold.
    #[must_use]
    pub fn with_cusp_threshold(mut self, threshold: f64) -> Self {
        self.cusp_threshold = threshold;
        self
    }

    /// Returns a copy with a different spike amount.
    #[must_use]
    pub fn with_spike_amount(mut self, amount: f64) -> Self {
        self.spike_amount = amount;
        self
    }

    /// Returns a copy with a different round cap factor.
    #[must_use]
    pub fn with_round_end_factor(mut self, factor: f64) -> Self {
        self.round_end_factor = factor;
        self
    }

    /// Returns a copy with a different derivative offset at segment ends.
    #[must_use]
    pub fn with_cusp_tangent_adjust(mut self, adjust: f64) -> Self {
        self.cusp_tangent_adjust = adjust;
        self
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidParameters` if the sample count is
    /// zero, a factor is not positive and finite, or the tangent adjustment
    /// is outside `(0, 0.5)`.
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(invalid("sample count must be at least 1"));
        }
        for (name, value) in [
            ("round end factor", self.round_end_factor),
            ("cusp threshold", self.cusp_threshold),
            ("spike amount", self.spike_amount),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(&format!("{name} must be positive, got {value}")));
            }
        }
        if !(self.cusp_tangent_adjust > 0.0 && self.cusp_tangent_adjust < 0.5) {
            return Err(invalid(&format!(
                "cusp tangent adjust must be in (0, 0.5), got {}",
                self.cusp_tangent_adjust
            )));
        }
        Ok(())
    }

    /// Returns the parameter step between samples.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn step(&self) -> f64 {
        1.0 / self.samples as f64
    }

    /// Returns the sample parameters `i / samples` for `i` in `[0, samples)`.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn sample_params(&self) -> impl Iterator<Item = f64> {
        let step = self.step();
        (0..self.samples).map(move |i| i as f64 * step)
    }
}

fn invalid(message: &str) -> crate::error::OutlineError {
    TessellationError::InvalidParameters(message.to_owned()).into()
}

/// The two boundary sides of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The side at `+normal` (right of the walking direction).
    Outer,
    /// The side at `-normal`.
    Inner,
}

/// A closed polygon; the last point connects back to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    /// The ordered boundary points.
    pub points: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from boundary points.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polygon has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed area (positive for counter-clockwise).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }
}

/// The polygons produced for one stroke, handed to a fill rasterizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonSet {
    pub polygons: Vec<Polygon>,
}

impl PolygonSet {
    /// Returns the number of polygons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns `true` if the set has no polygons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Returns the total number of points over all polygons.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.polygons.iter().map(Polygon::len).sum()
    }

    /// Returns the `(min, max)` corners of the box enclosing every polygon.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(Point2, Point2)> {
        bounds_2d(self.polygons.iter().flat_map(|p| p.points.iter()))
    }

    /// Checks that no polygon carries a NaN or infinite coordinate.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::NonFinitePoint` for the first bad point.
    pub fn check_finite(&self) -> Result<()> {
        for (polygon, poly) in self.polygons.iter().enumerate() {
            if let Some(index) = poly
                .points
                .iter()
                .position(|p| !(p.x.is_finite() && p.y.is_finite()))
            {
                return Err(TessellationError::NonFinitePoint { polygon, index }.into());
            }
        }
        Ok(())
    }
}

/// Result of a successful stroke conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum StrokeOutcome {
    /// The stroke outline: one polygon for an open path, two for a loop.
    Polygons(PolygonSet),
    /// The spline had no vertices; nothing to draw.
    EmptyInput,
}

impl StrokeOutcome {
    /// Returns the polygons, or an empty set for [`StrokeOutcome::EmptyInput`].
    #[must_use]
    pub fn into_polygons(self) -> PolygonSet {
        match self {
            Self::Polygons(set) => set,
            Self::EmptyInput => PolygonSet::default(),
        }
    }
}

/// Converts a centerline spline into fillable stroke polygons.
pub trait StrokeGenerator {
    /// Produces the stroke outline of `spline` under `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters or the spline data are invalid, or
    /// if the outline would contain non-finite points.
    fn convert(&self, spline: &Spline, params: &StrokeParams) -> Result<StrokeOutcome>;
}

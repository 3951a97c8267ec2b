use crate::geometry::Curve;
use crate::math::{normalize_or_zero, perp, Point2, Vector2, TOLERANCE};

use super::{CenterlineSegment, Side, StrokeConfig};

/// The two running boundary sequences of a stroke.
#[derive(Debug, Clone, Default)]
pub struct BoundarySides {
    /// Points at `+normal`.
    pub outer: Vec<Point2>,
    /// Points at `-normal`.
    pub inner: Vec<Point2>,
}

impl BoundarySides {
    /// Appends a point to one side.
    pub fn push(&mut self, side: Side, point: Point2) {
        match side {
            Side::Outer => self.outer.push(point),
            Side::Inner => self.inner.push(point),
        }
    }

    fn push_pair(&mut self, center: Point2, offset: Vector2) {
        self.outer.push(center + offset);
        self.inner.push(center - offset);
    }
}

/// Samples the left/right offset points of a centerline segment.
#[derive(Debug)]
pub struct OffsetSampler<'a> {
    config: &'a StrokeConfig,
    homogeneous_width: bool,
}

impl<'a> OffsetSampler<'a> {
    /// Creates a sampler.
    ///
    /// With `homogeneous_width` the half-width is interpolated by arc-length
    /// fraction, otherwise by curve parameter.
    #[must_use]
    pub fn new(config: &'a StrokeConfig, homogeneous_width: bool) -> Self {
        Self {
            config,
            homogeneous_width,
        }
    }

    /// Emits `samples + 1` offset pairs for `segment` into `sides`: one per
    /// `t = i / samples` and a final pair at `t = 1` with the end half-width.
    ///
    /// Returns the trailing direction of the segment (derivative at
    /// `1 - cusp_tangent_adjust`), which the next join compares against.
    pub fn sample(&self, segment: &CenterlineSegment, sides: &mut BoundarySides) -> Vector2 {
        let curve = &segment.curve;
        let adjust = self.config.cusp_tangent_adjust;
        let w0 = segment.start_half_width;
        let w1 = segment.end_half_width;

        let centers: Vec<(f64, Point2)> = self
            .config
            .sample_params()
            .map(|t| (t, curve.evaluate(t)))
            .collect();
        let end = curve.evaluate(1.0);

        let total_length = if self.homogeneous_width {
            polyline_length(centers.iter().map(|(_, p)| *p).chain(std::iter::once(end)))
        } else {
            0.0
        };

        let mut travelled = 0.0;
        let mut last: Option<Point2> = None;
        for &(t, p) in &centers {
            let fraction = if self.homogeneous_width {
                if let Some(prev) = last {
                    travelled += (p - prev).norm();
                }
                last = Some(p);
                if total_length > TOLERANCE {
                    travelled / total_length
                } else {
                    0.0
                }
            } else {
                t
            };

            let normal = unit_normal(&curve.derivative(t.max(adjust)));
            let w = (w1 - w0) * fraction + w0;
            sides.push_pair(p, normal * w);
        }

        let trailing = segment.trailing_direction(adjust);
        sides.push_pair(end, unit_normal(&trailing) * w1);
        trailing
    }
}

/// Unit normal (clockwise perpendicular) of a tangent; zero for a zero tangent.
pub(crate) fn unit_normal(tangent: &Vector2) -> Vector2 {
    normalize_or_zero(&perp(tangent))
}

fn polyline_length(points: impl Iterator<Item = Point2>) -> f64 {
    let mut total = 0.0;
    let mut last: Option<Point2> = None;
    for p in points {
        if let Some(prev) = last {
            total += (p - prev).norm();
        }
        last = Some(p);
    }
    total
}

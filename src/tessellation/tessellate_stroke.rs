use tracing::{debug, error, trace, warn};

use crate::error::Result;
use crate::geometry::{Spline, Vertex};
use crate::math::{is_zero, normalize_or_zero, Point2, Vector2};

use super::{
    BoundarySides, CapBuilder, CenterlineSegment, JoinContext, JoinResolver, OffsetSampler,
    Polygon, PolygonSet, StrokeConfig, StrokeGenerator, StrokeOutcome, StrokeParams,
};

/// Direction of travel at the two ends of an open stroke.
struct StrokeEnds {
    /// Direction just after the start of the first drawn segment.
    first_tangent: Vector2,
    /// Direction just before the end of the last drawn segment.
    last_tangent: Vector2,
}

/// Tessellates a variable-width stroke around a centerline spline.
///
/// An open spline produces one closed polygon: the outer side, the end cap,
/// the inner side reversed and the start cap. A looped spline produces two
/// independent polygons, the outer boundary and the inner boundary.
#[derive(Debug)]
pub struct TessellateStroke<'a> {
    spline: &'a Spline,
    params: &'a StrokeParams,
    config: StrokeConfig,
}

impl<'a> TessellateStroke<'a> {
    /// Creates a new stroke tessellation operation with the default
    /// [`StrokeConfig`].
    #[must_use]
    pub fn new(spline: &'a Spline, params: &'a StrokeParams) -> Self {
        Self {
            spline,
            params,
            config: StrokeConfig::default(),
        }
    }

    /// Replaces the tessellation configuration.
    #[must_use]
    pub fn with_config(mut self, config: StrokeConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the tessellation.
    ///
    /// An empty spline is not an error: it is logged and reported as
    /// [`StrokeOutcome::EmptyInput`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration, the stroke parameters or the
    /// spline data are invalid, or if the outline contains a non-finite point.
    /// Failures are logged before being returned.
    pub fn execute(&self) -> Result<StrokeOutcome> {
        let result = self.run();
        if let Err(err) = &result {
            error!(%err, vertices = self.spline.len(), "stroke tessellation failed");
        }
        result
    }

    fn run(&self) -> Result<StrokeOutcome> {
        self.config.validate()?;
        self.params.validate()?;
        self.spline.validate()?;

        if self.spline.is_empty() {
            warn!(looped = self.spline.looped, "no vertices in outline, nothing to stroke");
            return Ok(StrokeOutcome::EmptyInput);
        }

        let (sides, ends) = self.trace_sides();
        let polygons = if self.spline.looped {
            Self::assemble_loop(sides)
        } else {
            self.assemble_open(sides, &ends)
        };
        polygons.check_finite()?;

        trace!(
            polygons = polygons.len(),
            points = polygons.point_count(),
            "stroke tessellated"
        );
        Ok(StrokeOutcome::Polygons(polygons))
    }

    /// Walks every segment, accumulating offset samples and join points.
    fn trace_sides(&self) -> (BoundarySides, StrokeEnds) {
        let vertices = &self.spline.vertices;
        let looped = self.spline.looped;
        let adjust = self.config.cusp_tangent_adjust;
        let sampler = OffsetSampler::new(&self.config, self.params.homogeneous_width());
        let resolver = JoinResolver::new(&self.config);

        let mut sides = BoundarySides::default();
        let mut ends = StrokeEnds {
            first_tangent: vertices[0].tangent_out,
            last_tangent: self.initial_last_tangent(),
        };

        // An open path has no join at its first vertex.
        let mut first = !looped;
        for (i, j) in self.spline.segment_indices() {
            let current = &vertices[i];
            let Some(segment) = CenterlineSegment::build(current, &vertices[j], self.params)
            else {
                debug!(from = i, to = j, "skipping zero-length segment");
                continue;
            };

            if first {
                ends.first_tangent = segment.leading_direction(adjust);
            } else {
                let ctx = JoinContext {
                    vertex: current.position,
                    last_tangent: ends.last_tangent,
                    current_tangent: segment.leading_direction(adjust),
                    tangent_in: current.tangent_in,
                    tangent_out: segment.curve.start_tangent(),
                    half_width: segment.start_half_width,
                    split_tangent: current.split_tangent,
                    sharp_cusps: self.params.sharp_cusps(),
                };
                resolver.resolve(&ctx).apply(&mut sides);
            }

            ends.last_tangent = sampler.sample(&segment, &mut sides);
            first = false;
        }

        (sides, ends)
    }

    /// Incoming direction before the first segment is walked.
    ///
    /// For a loop this is the tangent arriving at the last vertex; when that
    /// tangent is zero and corners are enabled it is recovered from the
    /// segment ending at the last vertex.
    fn initial_last_tangent(&self) -> Vector2 {
        let vertices = &self.spline.vertices;
        let n = vertices.len();
        if !self.spline.looped {
            return vertices[0].tangent_in;
        }

        let tangent = vertices[n - 1].tangent_in;
        if n >= 2 && self.params.sharp_cusps() && is_zero(&tangent) {
            if let Some(closing) =
                CenterlineSegment::build(&vertices[n - 2], &vertices[n - 1], self.params)
            {
                return closing.trailing_direction(self.config.cusp_tangent_adjust);
            }
        }
        tangent
    }

    /// Loop topology: outer boundary and reversed inner boundary as two
    /// separate polygons.
    fn assemble_loop(sides: BoundarySides) -> PolygonSet {
        let BoundarySides { outer, mut inner } = sides;
        inner.reverse();
        PolygonSet {
            polygons: vec![Polygon::new(outer), Polygon::new(inner)],
        }
    }

    /// Open topology: outer side, end cap, reversed inner side, start cap.
    fn assemble_open(&self, sides: BoundarySides, ends: &StrokeEnds) -> PolygonSet {
        let caps = CapBuilder::new(&self.config);
        let BoundarySides { mut outer, inner } = sides;

        if self.params.round_end() {
            if let Some(last) = self.spline.last() {
                let (vertex, w) = self.cap_anchor(last);
                let outward = normalize_or_zero(&ends.last_tangent);
                caps.append_round_cap(&mut outer, vertex, outward, w);
            }
        }

        outer.extend(inner.into_iter().rev());

        if self.params.round_begin() {
            if let Some(first) = self.spline.first() {
                let (vertex, w) = self.cap_anchor(first);
                let outward = -normalize_or_zero(&ends.first_tangent);
                caps.append_round_cap(&mut outer, vertex, outward, w);
            }
        }

        PolygonSet {
            polygons: vec![Polygon::new(outer)],
        }
    }

    fn cap_anchor(&self, vertex: &Vertex) -> (Point2, f64) {
        (vertex.position, self.params.half_width(vertex.width))
    }
}

/// A [`StrokeGenerator`] backed by [`TessellateStroke`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Stroker {
    config: StrokeConfig,
}

impl Stroker {
    /// Creates a stroker with the given configuration.
    #[must_use]
    pub fn new(config: StrokeConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &StrokeConfig {
        &self.config
    }
}

impl StrokeGenerator for Stroker {
    fn convert(&self, spline: &Spline, params: &StrokeParams) -> Result<StrokeOutcome> {
        TessellateStroke::new(spline, params)
            .with_config(self.config)
            .execute()
    }
}

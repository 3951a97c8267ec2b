use tracing::debug;

use crate::geometry::Line;
use crate::math::{is_equal, is_zero, normalize_or_zero, perp, Point2, Vector2};

use super::offset_sampler::unit_normal;
use super::{BoundarySides, Side, StrokeConfig};

/// Extra boundary geometry at a vertex where two segments meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Join {
    /// Nearly continuous direction (or join treatment disabled): no point.
    Smooth,
    /// Intersection of the two offset lines on the convex side.
    Sharp { side: Side, point: Point2 },
    /// A single point pushed out along the bisector of a shallow turn.
    Spike {
        side: Side,
        point: Point2,
        amount: f64,
    },
}

impl Join {
    /// Appends the join point, if any, to its side.
    pub fn apply(&self, sides: &mut BoundarySides) {
        match *self {
            Self::Smooth => {}
            Self::Sharp { side, point } | Self::Spike { side, point, .. } => {
                sides.push(side, point);
            }
        }
    }
}

/// Everything known about a vertex where the previous segment ends and the
/// next one starts.
#[derive(Debug, Clone, Copy)]
pub struct JoinContext {
    /// The shared vertex.
    pub vertex: Point2,
    /// Direction of the previous segment near its end.
    pub last_tangent: Vector2,
    /// Direction of the next segment near its start.
    pub current_tangent: Vector2,
    /// The vertex's stored incoming tangent.
    pub tangent_in: Vector2,
    /// The next segment's effective start tangent.
    pub tangent_out: Vector2,
    /// Outer half-width at the vertex.
    pub half_width: f64,
    /// The vertex's split-tangent flag.
    pub split_tangent: bool,
    /// Whether corner treatment is enabled for the stroke.
    pub sharp_cusps: bool,
}

impl JoinContext {
    /// Returns `true` when the vertex qualifies for corner treatment.
    #[must_use]
    pub fn needs_join(&self) -> bool {
        self.sharp_cusps
            && self.split_tangent
            && (!is_equal(&self.tangent_in, &self.tangent_out) || is_zero(&self.tangent_out))
            && !is_zero(&self.last_tangent)
    }
}

/// Classifies the turn at a vertex and produces the matching [`Join`].
#[derive(Debug)]
pub struct JoinResolver<'a> {
    config: &'a StrokeConfig,
}

impl<'a> JoinResolver<'a> {
    /// Creates a resolver.
    #[must_use]
    pub fn new(config: &'a StrokeConfig) -> Self {
        Self { config }
    }

    /// Resolves the join for a vertex, or [`Join::Smooth`] when it does not
    /// qualify for corner treatment.
    #[must_use]
    pub fn resolve(&self, ctx: &JoinContext) -> Join {
        if !ctx.needs_join() {
            return Join::Smooth;
        }
        self.classify(ctx.vertex, ctx.last_tangent, ctx.current_tangent, ctx.half_width)
    }

    /// Classifies the turn from `last_tangent` to `current_tangent` at `vertex`.
    ///
    /// With `n1`, `n2` the unit normals of the two directions, the turn is
    /// `cross = n1 · perp(n2)` (positive turns bend away from the outer side)
    /// and the change is `|n1 - n2|`:
    ///
    /// - `|cross| > cusp_threshold`: sharp corner on the convex side
    /// - `|cross| <= cusp_threshold` and `|n1 - n2| > 1`: spike of length
    ///   `half_width * (1 + |cross| / threshold * (spike_amount - 1))`
    /// - otherwise smooth
    #[must_use]
    pub fn classify(
        &self,
        vertex: Point2,
        last_tangent: Vector2,
        current_tangent: Vector2,
        half_width: f64,
    ) -> Join {
        let threshold = self.config.cusp_threshold;
        let n1 = unit_normal(&last_tangent);
        let n2 = unit_normal(&current_tangent);

        let cross = n1.dot(&perp(&n2));
        let change = (n1 - n2).norm();

        if cross > threshold {
            let point = sharp_corner(
                vertex + n1 * half_width,
                last_tangent,
                vertex + n2 * half_width,
                current_tangent,
            );
            Join::Sharp {
                side: Side::Outer,
                point,
            }
        } else if cross < -threshold {
            let point = sharp_corner(
                vertex - n1 * half_width,
                last_tangent,
                vertex - n2 * half_width,
                current_tangent,
            );
            Join::Sharp {
                side: Side::Inner,
                point,
            }
        } else if change > 1.0 && cross > 0.0 {
            let amount = self.spike_amount(cross);
            Join::Spike {
                side: Side::Outer,
                point: vertex + normalize_or_zero(&(n1 + n2)) * half_width * amount,
                amount,
            }
        } else if change > 1.0 && cross < 0.0 {
            let amount = self.spike_amount(-cross);
            Join::Spike {
                side: Side::Inner,
                point: vertex - normalize_or_zero(&(n1 + n2)) * half_width * amount,
                amount,
            }
        } else {
            Join::Smooth
        }
    }

    /// Spike length multiplier, rising from 1 to `spike_amount` as `turn`
    /// approaches the cusp threshold.
    fn spike_amount(&self, turn: f64) -> f64 {
        (turn / self.config.cusp_threshold).max(0.0) * (self.config.spike_amount - 1.0) + 1.0
    }
}

/// Intersects the offset lines `p1 + s * d1` and `p2 + u * d2`.
///
/// Falls back to the midpoint of `p1` and `p2` when the lines are parallel
/// or a direction is zero.
fn sharp_corner(p1: Point2, d1: Vector2, p2: Point2, d2: Vector2) -> Point2 {
    let hit = match (Line::new(p1, d1), Line::new(p2, d2)) {
        (Ok(a), Ok(b)) => a.intersect(&b),
        _ => None,
    };
    hit.unwrap_or_else(|| {
        debug!(?p1, ?p2, "offset lines do not intersect, using midpoint");
        nalgebra::center(&p1, &p2)
    })
}

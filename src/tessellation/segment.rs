use crate::geometry::{Curve, Hermite, Vertex};
use crate::math::{is_zero, Vector2};

use super::StrokeParams;

/// One centerline segment between two consecutive vertices, with the
/// effective half-widths at its ends.
#[derive(Debug, Clone, Copy)]
pub struct CenterlineSegment {
    /// The centerline curve.
    pub curve: Hermite,
    /// Half-width at `t = 0`.
    pub start_half_width: f64,
    /// Half-width at `t = 1`.
    pub end_half_width: f64,
}

impl CenterlineSegment {
    /// Builds the segment `current → next`.
    ///
    /// Uses `current.tangent_out` and `next.tangent_in`; when both are zero the
    /// chord replaces them, giving a straight segment. Returns `None` when the
    /// chord is zero as well.
    #[must_use]
    pub fn build(current: &Vertex, next: &Vertex, params: &StrokeParams) -> Option<Self> {
        let mut t0 = current.tangent_out;
        let mut t1 = next.tangent_in;

        if is_zero(&t0) && is_zero(&t1) {
            let chord = next.position - current.position;
            if is_zero(&chord) {
                return None;
            }
            t0 = chord;
            t1 = chord;
        }

        Some(Self {
            curve: Hermite::new(current.position, next.position, t0, t1),
            start_half_width: params.half_width(current.width),
            end_half_width: params.half_width(next.width),
        })
    }

    /// Direction of travel just after the start (derivative at `adjust`).
    #[must_use]
    pub fn leading_direction(&self, adjust: f64) -> Vector2 {
        self.curve.derivative(adjust)
    }

    /// Direction of travel just before the end (derivative at `1 - adjust`).
    #[must_use]
    pub fn trailing_direction(&self, adjust: f64) -> Vector2 {
        self.curve.derivative(1.0 - adjust)
    }
}

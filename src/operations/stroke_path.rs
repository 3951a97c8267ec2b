use tracing::warn;

use crate::error::Result;
use crate::geometry::Spline;
use crate::math::Point2;
use crate::tessellation::{CenterlineSegment, StrokeParams};

/// One command of a vector path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Starts a new subpath.
    MoveTo(Point2),
    /// Cubic Bezier from the current point.
    CurveTo {
        ctrl1: Point2,
        ctrl2: Point2,
        to: Point2,
    },
    /// Closes the current subpath.
    Close,
}

/// Corner style for a backend stroker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Bevel,
}

/// End style for a backend stroker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Round,
    Butt,
}

/// Winding rule used when the backend fills the stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// Stroke attributes matching the tessellated outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeAttributes {
    pub line_width: f64,
    pub join: LineJoin,
    pub cap: LineCap,
    pub fill_rule: FillRule,
}

/// A path and the attributes to stroke it with.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCommands {
    pub commands: Vec<PathCommand>,
    pub attributes: StrokeAttributes,
}

/// Converts a spline into a command stream for a native vector stroker,
/// bypassing tessellation.
///
/// Each segment becomes one `CurveTo` whose control points are the Hermite
/// tangents divided by three, so the backend draws the same centerline the
/// tessellator samples.
#[derive(Debug)]
pub struct StrokePath<'a> {
    spline: &'a Spline,
    params: &'a StrokeParams,
    fill_rule: FillRule,
}

impl<'a> StrokePath<'a> {
    /// Creates a new stroke path operation.
    #[must_use]
    pub fn new(spline: &'a Spline, params: &'a StrokeParams) -> Self {
        Self {
            spline,
            params,
            fill_rule: FillRule::default(),
        }
    }

    /// Sets the fill rule passed to the backend.
    #[must_use]
    pub fn with_fill_rule(mut self, fill_rule: FillRule) -> Self {
        self.fill_rule = fill_rule;
        self
    }

    /// Executes the conversion.
    ///
    /// Returns `Ok(None)` (with a warning) for an empty spline.
    ///
    /// # Errors
    ///
    /// Returns an error if the stroke parameters or spline data are invalid.
    pub fn execute(&self) -> Result<Option<StrokeCommands>> {
        self.params.validate()?;
        self.spline.validate()?;

        let Some(first) = self.spline.first() else {
            warn!("no vertices in outline, nothing to stroke");
            return Ok(None);
        };

        let n = self.spline.len();
        let mut commands = vec![PathCommand::MoveTo(first.position)];
        let pairs = (0..n.saturating_sub(1))
            .map(|i| (i, i + 1))
            .chain(self.spline.looped.then_some((n - 1, 0)));
        for (i, j) in pairs {
            let vertices = &self.spline.vertices;
            if let Some(segment) =
                CenterlineSegment::build(&vertices[i], &vertices[j], self.params)
            {
                let [_, ctrl1, ctrl2, to] = segment.curve.bezier_controls();
                commands.push(PathCommand::CurveTo { ctrl1, ctrl2, to });
            }
        }
        if self.spline.looped {
            commands.push(PathCommand::Close);
        }

        Ok(Some(StrokeCommands {
            commands,
            attributes: self.attributes(),
        }))
    }

    fn attributes(&self) -> StrokeAttributes {
        let params = self.params;
        StrokeAttributes {
            line_width: params.width() + params.expand(),
            join: if params.sharp_cusps() {
                LineJoin::Miter
            } else {
                LineJoin::Bevel
            },
            cap: if params.round_begin() || params.round_end() {
                LineCap::Round
            } else {
                LineCap::Butt
            },
            fill_rule: self.fill_rule,
        }
    }
}

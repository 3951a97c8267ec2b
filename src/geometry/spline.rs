use crate::error::{Result, TessellationError};
use crate::math::{Point2, Vector2};

/// A centerline vertex with independent incoming/outgoing tangents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position of the vertex.
    pub position: Point2,
    /// Tangent arriving at this vertex (end tangent of the previous segment).
    pub tangent_in: Vector2,
    /// Tangent leaving this vertex (start tangent of the next segment).
    pub tangent_out: Vector2,
    /// Relative stroke width at this vertex.
    pub width: f64,
    /// `true` when the two tangents may differ, marking a potential corner.
    pub split_tangent: bool,
}

impl Vertex {
    /// Creates a vertex at `position` with zero tangents and unit width.
    #[must_use]
    pub fn new(position: Point2) -> Self {
        Self {
            position,
            tangent_in: Vector2::zeros(),
            tangent_out: Vector2::zeros(),
            width: 1.0,
            split_tangent: false,
        }
    }

    /// Sets both tangents to `tangent`.
    #[must_use]
    pub fn with_tangent(mut self, tangent: Vector2) -> Self {
        self.tangent_in = tangent;
        self.tangent_out = tangent;
        self
    }

    /// Sets the incoming and outgoing tangents separately.
    #[must_use]
    pub fn with_tangents(mut self, tangent_in: Vector2, tangent_out: Vector2) -> Self {
        self.tangent_in = tangent_in;
        self.tangent_out = tangent_out;
        self
    }

    /// Sets the relative width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the split-tangent flag.
    #[must_use]
    pub fn with_split_tangent(mut self, split: bool) -> Self {
        self.split_tangent = split;
        self
    }

    fn is_finite(&self) -> bool {
        self.position.x.is_finite()
            && self.position.y.is_finite()
            && self.tangent_in.iter().all(|c| c.is_finite())
            && self.tangent_out.iter().all(|c| c.is_finite())
            && self.width.is_finite()
    }
}

/// An ordered list of vertices, optionally closed into a loop.
///
/// When `looped` is set the last vertex connects back to the first.
#[derive(Debug, Clone, Default)]
pub struct Spline {
    pub vertices: Vec<Vertex>,
    pub looped: bool,
}

impl Spline {
    /// Creates a spline from vertices.
    #[must_use]
    pub fn new(vertices: Vec<Vertex>, looped: bool) -> Self {
        Self { vertices, looped }
    }

    /// Creates a spline of straight segments (zero tangents, unit width).
    #[must_use]
    pub fn from_points(points: &[Point2], looped: bool) -> Self {
        let vertices = points.iter().map(|p| Vertex::new(*p)).collect();
        Self { vertices, looped }
    }

    /// The default outline shape: a looped, rounded triangle through
    /// `(0, 1)`, `(0, -1)` and `(1, 0)`.
    #[must_use]
    pub fn default_triangle() -> Self {
        let p = [
            Point2::new(0.0, 1.0),
            Point2::new(0.0, -1.0),
            Point2::new(1.0, 0.0),
        ];
        let vertices = (0..3)
            .map(|i| {
                let next = p[(i + 1) % 3].coords;
                let after = p[(i + 2) % 3].coords;
                Vertex::new(p[i]).with_tangent(next - after * 0.5)
            })
            .collect();
        Self {
            vertices,
            looped: true,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the spline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the first vertex.
    #[must_use]
    pub fn first(&self) -> Option<&Vertex> {
        self.vertices.first()
    }

    /// Returns the last vertex.
    #[must_use]
    pub fn last(&self) -> Option<&Vertex> {
        self.vertices.last()
    }

    /// Returns the number of segments (vertex pairs) to walk.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        match self.vertices.len() {
            0 => 0,
            n if self.looped => n,
            n => n - 1,
        }
    }

    /// Returns the vertex index pairs in walking order.
    ///
    /// A looped spline starts with the closing pair `(n - 1, 0)` so that the
    /// wrap-around vertex is handled like any other interior vertex.
    pub fn segment_indices(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.vertices.len();
        let looped = self.looped;
        (0..self.segment_count()).map(move |k| {
            if looped {
                ((k + n - 1) % n, k)
            } else {
                (k, k + 1)
            }
        })
    }

    /// Checks that all vertex data is finite.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidInput` naming the first bad vertex.
    pub fn validate(&self) -> Result<()> {
        if let Some(index) = self.vertices.iter().position(|v| !v.is_finite()) {
            return Err(TessellationError::InvalidInput(format!(
                "vertex {index} has a non-finite coordinate, tangent or width"
            ))
            .into());
        }
        Ok(())
    }
}

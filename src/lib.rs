pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{OutlineError, Result};
pub use geometry::{Spline, Vertex};
pub use tessellation::{
    Polygon, PolygonSet, StrokeConfig, StrokeGenerator, StrokeOutcome, StrokeParams, Stroker,
    TessellateStroke,
};

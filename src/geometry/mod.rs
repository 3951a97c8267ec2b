pub mod curve;
pub mod spline;

pub use curve::{Curve, Hermite, Line};
pub use spline::{Spline, Vertex};

use thiserror::Error;

/// Top-level error type for outline stroke tessellation.
#[derive(Debug, Error)]
pub enum OutlineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to stroke tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),

    #[error("invalid spline: {0}")]
    InvalidInput(String),

    #[error("non-finite point at index {index} of polygon {polygon}")]
    NonFinitePoint { polygon: usize, index: usize },
}

/// Convenience type alias for results using [`OutlineError`].
pub type Result<T> = std::result::Result<T, OutlineError>;

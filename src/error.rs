use thiserror::Error;

/// Top-level error type for the geometry kernel.
#[derive(Debug, Error)]
pub enum GeoKernelError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by degenerate geometric input.
///
/// A geometric miss (parallel ray, point outside a triangle) is not an error;
/// those are reported as `None`.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to kernel configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive, got {0}")]
    InvalidTolerance(f64),
}

/// Convenience type alias for results using [`GeoKernelError`].
pub type Result<T> = std::result::Result<T, GeoKernelError>;

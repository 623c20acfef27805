use thiserror::Error;

/// Errors raised by the checked constructors and normalisers.
///
/// Degenerate configurations in queries (parallel lines, a line through
/// the origin, ...) are not errors; those functions return `Option`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("points are coincident, no line passes through them uniquely")]
    CoincidentPoints,

    #[error("coordinates violate the Plücker relation: l·m = {residual}")]
    NotALine { residual: f64 },
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;

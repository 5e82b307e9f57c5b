use thiserror::Error;

/// Top-level error type for the planekit geometry kernel.
#[derive(Debug, Error)]
pub enum PlanekitError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Triangulation(#[from] TriangulationError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors raised when a polygon cannot be decomposed into triangles.
///
/// Every variant describes degenerate input: the kernel never retries.
#[derive(Debug, Error)]
pub enum TriangulationError {
    #[error("ring has {count} distinct vertices, at least 3 are required")]
    TooFewVertices { count: usize },

    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    #[error("hole {hole} cannot be bridged to the outer boundary")]
    UnbridgeableHole { hole: usize },

    #[error("no ear found among {remaining} remaining vertices (self-intersecting ring?)")]
    NoEar { remaining: usize },
}

/// Errors related to kernel operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl PlanekitError {
    /// Returns `true` for the degenerate-input class raised by triangulation.
    #[must_use]
    pub fn is_degenerate_input(&self) -> bool {
        matches!(self, Self::Triangulation(_))
    }
}

/// Convenience type alias for results using [`PlanekitError`].
pub type Result<T> = std::result::Result<T, PlanekitError>;

//! Error types for projection operations.

use thiserror::Error;

/// Errors that can occur when building a projector.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The reference surface has no triangles.
    #[error("Reference surface has no triangles")]
    EmptySurface,
}

/// Result type for projection operations.
pub type ProjectResult<T> = std::result::Result<T, ProjectError>;

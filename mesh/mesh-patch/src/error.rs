//! Error types for patch remeshing operations.

use thiserror::Error;

/// Errors that can occur during patch remeshing.
///
/// Every variant except [`PatchError::Projection`] is an invariant
/// violation: the patch or its markers were malformed by the caller. These
/// are returned rather than asserted so a batch run can log the offending
/// patch and move on. An unsolvable patch is **not** an error; see
/// [`PatchStatus::Unsolvable`](crate::PatchStatus::Unsolvable).
#[derive(Debug, Error)]
pub enum PatchError {
    /// The patch boundary has no edges.
    #[error("Patch boundary is empty")]
    EmptyPatch,

    /// Boundary edge and convexity marker sequences differ in length.
    #[error("Patch has {edges} boundary edges but {markers} convexity markers")]
    BoundaryLengthMismatch {
        /// Number of boundary half-edges.
        edges: usize,
        /// Number of convexity markers.
        markers: usize,
    },

    /// The number of corner markers does not match the declared side count.
    #[error("Patch has {found} corner markers, expected {expected}")]
    CornerCount {
        /// Declared number of sides.
        expected: usize,
        /// Corner markers actually present.
        found: usize,
    },

    /// The declared side count is not 3, 4, or 5.
    #[error("Unsupported side count: {0} (must be 3, 4, or 5)")]
    SideCount(usize),

    /// The first boundary vertex is not marked as a corner.
    #[error("Patch boundary does not start at a corner marker")]
    UnmarkedStart,

    /// The boundary half-edges do not form a closed loop.
    #[error("Patch boundary is not a closed loop")]
    OpenBoundary,

    /// No cyclic rotation aligns the corner markers with the side lengths,
    /// in either traversal direction.
    #[error("No rotation aligns corner markers with the side lengths")]
    CornerAlignment,

    /// Node chains do not form a topological rectangle.
    #[error("Node chains do not form a topological rectangle")]
    MalformedChains,

    /// Building the patch-local projection surface failed.
    #[error(transparent)]
    Projection(#[from] mesh_project::ProjectError),
}

/// Result type for patch remeshing operations.
pub type PatchResult<T> = std::result::Result<T, PatchError>;

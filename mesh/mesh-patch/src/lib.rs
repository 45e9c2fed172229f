//! Local patch remeshing for quad surfaces.
//!
//! Given a contiguous, tagged region of a [`mesh_quad::QuadSurface`]
//! bounded by a closed loop of 3, 4, or 5 polygonal sides, this crate
//! replaces the region's interior facets with a well-formed structured
//! quad tiling whose boundary matches the original loop exactly and whose
//! new interior vertices are projected back onto the original patch
//! surface.
//!
//! The pipeline, leaves first:
//!
//! - [`side_segments`] - classify the boundary's corner markers into
//!   per-side edge counts
//! - [`align_to_corner`] - normalize which boundary point is the first
//!   corner (4-sided patches, either winding direction)
//! - [`solve_three`] / [`solve_four`] / [`solve_five`] - find an integer
//!   sub-partition admitting a valid tiling, or fail
//! - [`extract_quad_nodes`] - slice an exact 4-sided boundary into four
//!   vertex chains
//! - [`decompose_fan`] - split a 3- or 5-sided patch into quad wedges
//!   meeting at a surface-projected hub
//! - [`mesh_grid`] - fill one topological rectangle with a transfinite
//!   grid of projected interior vertices
//! - [`remesh_patch`] - orchestrate the above and commit the result,
//!   retiring the old facets and compacting storage
//!
//! # Failure model
//!
//! An unsolvable patch (side lengths admitting no valid partition) is an
//! expected outcome reported as [`PatchStatus::Unsolvable`] with the mesh
//! untouched. Malformed inputs (wrong corner counts, open boundary loops,
//! inconsistent corner labeling) are [`PatchError`] values, so a batch
//! caller can log the offending patch and continue.
//!
//! # Example
//!
//! See [`remesh_patch`] for a complete fan-remeshing example.

#![warn(missing_docs)]
#![warn(clippy::all)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod align;
mod boundary;
mod commit;
mod error;
mod fan;
mod grid;
mod nodes;
mod solver;

pub use align::align_to_corner;
pub use boundary::{side_segments, Segments};
pub use commit::{remesh_patch, PatchStats, PatchStatus};
pub use error::{PatchError, PatchResult};
pub use fan::decompose_fan;
pub use grid::mesh_grid;
pub use nodes::{extract_quad_nodes, NodeChains};
pub use solver::{solve_five, solve_four, solve_three, PartSegments, QuadPartition};

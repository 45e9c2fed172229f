//! Quad surface container for local remeshing operations.
//!
//! This crate provides the foundational storage for quad-dominant surface
//! processing:
//!
//! - [`QuadSurface`] - A quadrilateral mesh stored as dense index arenas
//! - [`CompactionReport`] - Relocation summary produced by storage compaction
//!
//! # Storage Model
//!
//! Vertices and facets live in plain vectors addressed by dense `u32`
//! indices. Ownership is implicit in array membership: a facet references
//! its four vertices by index, and removing facets is a two-step process of
//! deactivation followed by an explicit [`QuadSurface::compact`] pass that
//! drops inactive facets and orphaned points while renumbering everything
//! that remains.
//!
//! # Half-Edges
//!
//! Half-edges are not stored; they are addressed arithmetically as
//! `facet * 4 + corner`. The half-edge with corner `c` runs from the
//! facet's vertex `c` to its vertex `(c + 1) % 4`.
//!
//! # Winding
//!
//! Facets use **counter-clockwise (CCW) winding** when viewed from outside.
//!
//! # Example
//!
//! ```
//! use mesh_quad::QuadSurface;
//! use nalgebra::Point3;
//!
//! let mut mesh = QuadSurface::new();
//! for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
//!     mesh.add_point(Point3::new(x, y, 0.0));
//! }
//! let f = mesh.add_facet([0, 1, 2, 3]);
//!
//! assert_eq!(mesh.facet_count(), 1);
//! assert_eq!(mesh.halfedge_from(mesh.halfedge(f, 1)), 1);
//! assert_eq!(mesh.halfedge_to(mesh.halfedge(f, 3)), 0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod compact;
mod surface;

pub use compact::CompactionReport;
pub use surface::QuadSurface;

/// Convenience re-export of the point type used throughout the mesh crates.
pub use nalgebra::Point3;

//! Nearest-point projection onto a reference triangulated surface.
//!
//! This crate provides the spatial index used to keep remeshed vertices on
//! the surface they replace:
//!
//! - [`Triangle`] - A concrete triangle with closest-point queries
//! - [`Projector`] - An AABB-tree over a triangle set answering
//!   `project(point) -> point`
//!
//! The projector is rebuildable from an arbitrary facet subset, so callers
//! can restrict projection to a local region rather than a whole mesh.
//!
//! # Example
//!
//! ```
//! use mesh_project::{Projector, Triangle};
//! use nalgebra::Point3;
//!
//! let triangles = vec![Triangle::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(2.0, 0.0, 0.0),
//!     Point3::new(0.0, 2.0, 0.0),
//! )];
//! let projector = Projector::build(triangles)?;
//!
//! // A point floating above the triangle lands on its foot point.
//! let p = projector.project(Point3::new(0.5, 0.5, 3.0));
//! assert!((p - Point3::new(0.5, 0.5, 0.0)).norm() < 1e-12);
//! # Ok::<(), mesh_project::ProjectError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod aabb;
mod error;
mod projector;
mod triangle;

pub use aabb::Aabb;
pub use error::{ProjectError, ProjectResult};
pub use projector::Projector;
pub use triangle::Triangle;

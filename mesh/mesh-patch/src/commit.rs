//! Patch remeshing orchestration and commit.

use crate::{
    align_to_corner, decompose_fan, extract_quad_nodes, mesh_grid, side_segments, solve_five,
    solve_four, solve_three, PatchError, PatchResult, QuadPartition,
};
use mesh_project::{Projector, Triangle};
use mesh_quad::QuadSurface;
use tracing::debug;

/// Statistics of a committed patch remeshing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatchStats {
    /// Facets created inside the patch.
    pub facets_added: usize,
    /// Points created inside the patch.
    pub points_added: usize,
    /// Original patch facets removed at commit.
    pub facets_removed: usize,
    /// Orphaned points removed at commit.
    pub points_removed: usize,
}

/// Outcome of a patch remeshing call.
#[derive(Debug, Clone, Copy)]
pub enum PatchStatus {
    /// The patch was replaced and the mesh compacted.
    Remeshed(PatchStats),
    /// The side lengths admit no valid quad tiling; the mesh is untouched.
    ///
    /// This is an expected outcome, not an error: the caller decides
    /// whether to retry with a different patch definition or skip the
    /// region.
    Unsolvable,
}

impl PatchStatus {
    /// Whether the mesh was modified.
    #[must_use]
    pub const fn was_remeshed(&self) -> bool {
        matches!(self, Self::Remeshed(_))
    }
}

/// Build a projector over the tagged facets, triangulated, with positions
/// deep-copied so later mesh mutation cannot skew projection.
fn patch_projector(mesh: &QuadSurface) -> PatchResult<Projector> {
    let triangles: Vec<Triangle> = mesh
        .triangulated(|f| mesh.tag(f) > 0)
        .into_iter()
        .map(|[a, b, c]| Triangle::new(a, b, c))
        .collect();
    Ok(Projector::build(triangles)?)
}

/// Replace the tagged facets of a patch with a structured quad tiling.
///
/// `patch` is the closed, consistently oriented loop of boundary
/// half-edges of the tagged region; `convexity` carries one marker per
/// boundary vertex (≥ 1 flags a corner) and must start at a corner;
/// `n_edge` is the number of sides (3, 4, or 5).
///
/// The boundary loop is kept vertex-for-vertex; interior facets are
/// replaced by a structured grid (4-sided) or a fan of wedge grids (3- or
/// 5-sided) whose new vertices are projected onto the original patch
/// surface. On success the old facets and their now-orphaned points are
/// compacted away, so all mesh indices are renumbered.
///
/// Returns [`PatchStatus::Unsolvable`], with the mesh untouched, when
/// the side lengths admit no valid partition. The 4-sided
/// triangle-reduction construction is not implemented; such patches are
/// also reported unsolvable rather than tiled incorrectly.
///
/// # Errors
///
/// Returns a [`PatchError`] when the patch or its markers violate the
/// input contract (wrong corner count, open boundary, inconsistent corner
/// labeling). These indicate upstream mis-tagging; the caller can skip the
/// patch and continue.
///
/// # Example
///
/// ```
/// use mesh_patch::{remesh_patch, PatchStatus};
/// use mesh_quad::QuadSurface;
/// use nalgebra::Point3;
///
/// // Three quads fanned around a hub vertex, covering a hexagon.
/// let mut mesh = QuadSurface::new();
/// mesh.add_point(Point3::new(0.0, 0.0, 0.0));
/// for i in 0..6 {
///     let angle = f64::from(i) * std::f64::consts::FRAC_PI_3;
///     mesh.add_point(Point3::new(angle.cos(), angle.sin(), 0.0));
/// }
/// for verts in [[0, 1, 2, 3], [0, 3, 4, 5], [0, 5, 6, 1]] {
///     let f = mesh.add_facet(verts);
///     mesh.set_tag(f, 1);
/// }
/// let patch = [
///     mesh.halfedge(0, 1),
///     mesh.halfedge(0, 2),
///     mesh.halfedge(1, 1),
///     mesh.halfedge(1, 2),
///     mesh.halfedge(2, 1),
///     mesh.halfedge(2, 2),
/// ];
/// let convexity = [1, 0, 1, 0, 1, 0];
///
/// let status = remesh_patch(&mut mesh, &patch, &convexity, 3)?;
/// assert!(status.was_remeshed());
/// assert_eq!(mesh.facet_count(), 3);
/// # Ok::<(), mesh_patch::PatchError>(())
/// ```
pub fn remesh_patch(
    mesh: &mut QuadSurface,
    patch: &[u32],
    convexity: &[i32],
    n_edge: usize,
) -> PatchResult<PatchStatus> {
    if patch.is_empty() {
        return Err(PatchError::EmptyPatch);
    }
    if patch.len() != convexity.len() {
        return Err(PatchError::BoundaryLengthMismatch {
            edges: patch.len(),
            markers: convexity.len(),
        });
    }
    if !(3..=5).contains(&n_edge) {
        return Err(PatchError::SideCount(n_edge));
    }
    if convexity[0] < 1 {
        return Err(PatchError::UnmarkedStart);
    }
    for (k, &h) in patch.iter().enumerate() {
        let next = patch[(k + 1) % patch.len()];
        if mesh.halfedge_to(h) != mesh.halfedge_from(next) {
            return Err(PatchError::OpenBoundary);
        }
    }

    let segments = side_segments(convexity, n_edge)?;
    debug!(
        n_edge,
        boundary_edges = patch.len(),
        segments = ?segments.as_slice(),
        "classifying patch boundary"
    );

    // Solve the discrete partition before touching the mesh.
    enum Plan {
        Fan(crate::PartSegments),
        PerfectQuad,
    }
    let plan = match n_edge {
        3 => match solve_three(&segments) {
            Some(parts) => Plan::Fan(parts),
            None => return Ok(PatchStatus::Unsolvable),
        },
        5 => match solve_five(&segments) {
            Some(parts) => Plan::Fan(parts),
            None => return Ok(PatchStatus::Unsolvable),
        },
        _ => match solve_four(&segments) {
            QuadPartition::Perfect => Plan::PerfectQuad,
            QuadPartition::AsTriangle(_) => {
                // The triangle-insertion construction is unspecified;
                // report the partition as unusable rather than guess.
                debug!("triangle reduction found but not constructible");
                return Ok(PatchStatus::Unsolvable);
            }
            QuadPartition::Unsolvable => return Ok(PatchStatus::Unsolvable),
        },
    };

    let points_before = mesh.point_count();
    let facets_before = mesh.facet_count();

    // Project onto the original patch surface, not the whole mesh. The
    // projector owns a triangulated copy and is dropped with this scope.
    let projector = patch_projector(mesh)?;

    let built = match plan {
        Plan::Fan(parts) => decompose_fan(mesh, patch, &parts, &projector),
        Plan::PerfectQuad => {
            let mut aligned_patch = patch.to_vec();
            let mut aligned_convexity = convexity.to_vec();
            match align_to_corner(&mut aligned_patch, &mut aligned_convexity, &segments)
                .and_then(|()| extract_quad_nodes(mesh, &aligned_patch, &segments))
            {
                Ok(chains) => mesh_grid(mesh, &chains, &projector),
                Err(err) => Err(err),
            }
        }
    };
    if let Err(err) = built {
        // Roll back any partially built geometry so failure leaves the
        // mesh exactly as it was.
        mesh.truncate(points_before, facets_before);
        return Err(err);
    }

    let points_added = mesh.point_count() - points_before;
    let facets_added = mesh.facet_count() - facets_before;

    // Commit: retire the old patch facets and compact storage.
    let tagged: Vec<u32> = mesh.tagged_facets().collect();
    for f in tagged {
        mesh.deactivate(f);
    }
    let report = mesh.compact();

    let stats = PatchStats {
        facets_added,
        points_added,
        facets_removed: report.facets_removed,
        points_removed: report.points_removed,
    };
    debug!(
        facets_added = stats.facets_added,
        facets_removed = stats.facets_removed,
        points_added = stats.points_added,
        points_removed = stats.points_removed,
        "patch committed"
    );
    Ok(PatchStatus::Remeshed(stats))
}

//! Transfinite grid fill of one topological rectangle.

use crate::{NodeChains, PatchError, PatchResult};
use mesh_project::Projector;
use mesh_quad::QuadSurface;

/// Fill a topological rectangle with a structured quad grid.
///
/// Boundary rows and columns reuse the chain vertices; interior grid
/// vertices are created at the linear interpolation between `a[i]` and
/// `c[i]` at fraction `j / (|b| - 1)`, projected onto the reference
/// surface. One facet is emitted per grid cell, with winding kept
/// consistent when the grid has to be transposed.
///
/// # Errors
///
/// Returns [`PatchError::MalformedChains`] if the chains violate the
/// rectangle invariants (see [`NodeChains::is_rectangle`]).
#[allow(clippy::cast_possible_truncation)]
// Truncation: indices are u32, meshes beyond 4B points are unsupported by design
pub fn mesh_grid(
    mesh: &mut QuadSurface,
    chains: &NodeChains,
    projector: &Projector,
) -> PatchResult<()> {
    if !chains.is_rectangle() {
        return Err(PatchError::MalformedChains);
    }

    // A single cell needs no interior structure.
    if chains.a.len() < 3 && chains.b.len() < 3 {
        mesh.add_facet([chains.a[0], chains.b[0], chains.b[1], chains.c[0]]);
        return Ok(());
    }

    // Keep the row chains the long ones; transposing swaps the roles of
    // (a, d) and (c, b) and inverts the facet winding.
    let (a, b, c, d, reversed) = if chains.a.len() < 3 {
        (&chains.d, &chains.c, &chains.b, &chains.a, true)
    } else {
        (&chains.a, &chains.b, &chains.c, &chains.d, false)
    };

    let rows = a.len();
    let cols = b.len();

    // Interior grid points, row by row.
    let base = mesh.point_count() as u32;
    for i in 1..rows - 1 {
        let x0 = mesh.point(a[i]);
        let x1 = mesh.point(c[i]);
        for j in 1..cols - 1 {
            let t = j as f64 / (cols - 1) as f64;
            let sample = x0 + (x1 - x0) * t;
            mesh.add_point(projector.project(sample));
        }
    }

    // Grid vertex lookup: border rows/columns resolve to chain vertices,
    // everything else to the freshly created block.
    let vertex_at = |i: usize, j: usize| -> u32 {
        if i == 0 {
            d[j]
        } else if i == rows - 1 {
            b[j]
        } else if j == 0 {
            a[i]
        } else if j == cols - 1 {
            c[i]
        } else {
            base + ((i - 1) * (cols - 2) + (j - 1)) as u32
        }
    };

    for i in 1..rows {
        for j in 1..cols {
            let quad = [
                vertex_at(i, j - 1),
                vertex_at(i, j),
                vertex_at(i - 1, j),
                vertex_at(i - 1, j - 1),
            ];
            if reversed {
                mesh.add_facet([quad[3], quad[2], quad[1], quad[0]]);
            } else {
                mesh.add_facet(quad);
            }
        }
    }

    Ok(())
}

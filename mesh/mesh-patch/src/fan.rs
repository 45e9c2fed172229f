//! Fan decomposition of odd-sided patches into quadrilateral wedges.

use crate::{mesh_grid, NodeChains, PartSegments, PatchError, PatchResult};
use mesh_project::Projector;
use mesh_quad::QuadSurface;
use nalgebra::{Point3, Vector3};

/// Split a 3- or 5-sided patch into quadrilateral wedges radiating from a
/// hub vertex and mesh each wedge as a structured grid.
///
/// The solver's `part_segments` give each wedge its two boundary
/// sub-chains. Per wedge the boundary contributes an `a` chain and a `d`
/// chain; `d` chains are reversed and rotated by one wedge so each aligns
/// with the next wedge's `a` chain, closing the fan. The hub is the
/// barycentre of the wedge-far corners projected onto the reference
/// surface; radial `b` chains run from each far corner to the hub with
/// interpolated, projected interior points, and each wedge's `c` chain is
/// the next wedge's `b` chain.
///
/// Emits exactly `part_segments.len()` wedge grids meeting at the hub.
///
/// # Errors
///
/// Returns [`PatchError::MalformedChains`] when the sub-segment lengths do
/// not add up to the boundary length or a wedge rectangle is inconsistent.
pub fn decompose_fan(
    mesh: &mut QuadSurface,
    patch: &[u32],
    part_segments: &PartSegments,
    projector: &Projector,
) -> PatchResult<()> {
    let n = part_segments.len();
    let len = patch.len();
    let total: usize = part_segments.iter().map(|[x, y]| x + y).sum();
    if total != len {
        return Err(PatchError::MalformedChains);
    }

    let boundary: Vec<u32> = patch.iter().map(|&h| mesh.halfedge_from(h)).collect();

    // Boundary sub-chains per wedge; consecutive chains share a vertex.
    let mut a_chains: Vec<Vec<u32>> = Vec::with_capacity(n);
    let mut d_chains: Vec<Vec<u32>> = Vec::with_capacity(n);
    let mut pos = 0;
    for &[x, y] in part_segments {
        a_chains.push((0..=x).map(|k| boundary[(pos + k) % len]).collect());
        pos += x;
        d_chains.push((0..=y).map(|k| boundary[(pos + k) % len]).collect());
        pos += y;
    }

    // Align each d chain with the following wedge's a chain.
    for chain in &mut d_chains {
        chain.reverse();
    }
    d_chains.rotate_right(1);

    // Hub: barycentre of the far corner of every a chain, projected.
    let far_corners: Vec<u32> = a_chains
        .iter()
        .map(|chain| *chain.last().unwrap_or(&0))
        .collect();
    let mut barycentre = Vector3::zeros();
    for &v in &far_corners {
        barycentre += mesh.point(v).coords;
    }
    let hub_position = projector.project(Point3::from(barycentre / n as f64));
    let hub = mesh.add_point(hub_position);

    // Radial b chains from each far corner to the hub.
    let mut b_chains: Vec<Vec<u32>> = Vec::with_capacity(n);
    for i in 0..n {
        let radial_len = d_chains[i].len();
        let x0 = mesh.point(far_corners[i]);
        let mut chain = Vec::with_capacity(radial_len);
        chain.push(far_corners[i]);
        for j in 1..radial_len - 1 {
            let t = j as f64 / (radial_len - 1) as f64;
            let sample = x0 + (hub_position - x0) * t;
            chain.push(mesh.add_point(projector.project(sample)));
        }
        chain.push(hub);
        b_chains.push(chain);
    }

    // Each wedge's c chain is the next wedge's b chain.
    let mut c_chains = b_chains.clone();
    c_chains.rotate_right(1);

    for i in 0..n {
        let chains = NodeChains {
            a: std::mem::take(&mut a_chains[i]),
            b: std::mem::take(&mut b_chains[i]),
            c: std::mem::take(&mut c_chains[i]),
            d: std::mem::take(&mut d_chains[i]),
        };
        mesh_grid(mesh, &chains, projector)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_project::Triangle;
    use smallvec::smallvec;

    /// Three quads fanned around a hub, covering a planar hexagon; its
    /// boundary is a closed 6-edge loop with three 2-edge sides.
    fn hexagon_fan() -> (QuadSurface, Vec<u32>) {
        let mut mesh = QuadSurface::new();
        mesh.add_point(Point3::new(0.0, 0.0, 0.0)); // hub
        for i in 0..6 {
            let angle = f64::from(i) * std::f64::consts::FRAC_PI_3;
            mesh.add_point(Point3::new(angle.cos(), angle.sin(), 0.0));
        }
        for verts in [[0, 1, 2, 3], [0, 3, 4, 5], [0, 5, 6, 1]] {
            let f = mesh.add_facet(verts);
            mesh.set_tag(f, 1);
        }
        // Boundary loop 1->2->3->4->5->6->1.
        let patch = vec![
            mesh.halfedge(0, 1),
            mesh.halfedge(0, 2),
            mesh.halfedge(1, 1),
            mesh.halfedge(1, 2),
            mesh.halfedge(2, 1),
            mesh.halfedge(2, 2),
        ];
        (mesh, patch)
    }

    fn patch_projector(mesh: &QuadSurface) -> Projector {
        let triangles = mesh
            .triangulated(|f| mesh.tag(f) > 0)
            .into_iter()
            .map(|[a, b, c]| Triangle::new(a, b, c))
            .collect();
        Projector::build(triangles).unwrap()
    }

    #[test]
    fn three_sided_fan_emits_three_wedges() {
        let (mut mesh, patch) = hexagon_fan();
        let projector = patch_projector(&mesh);
        let facets_before = mesh.facet_count();
        let parts: PartSegments = smallvec![[1, 1], [1, 1], [1, 1]];

        decompose_fan(&mut mesh, &patch, &parts, &projector).unwrap();
        assert_eq!(mesh.facet_count() - facets_before, 3);
    }

    #[test]
    fn wedges_share_a_single_hub() {
        let (mut mesh, patch) = hexagon_fan();
        let projector = patch_projector(&mesh);
        let facets_before = mesh.facet_count() as u32;
        let parts: PartSegments = smallvec![[1, 1], [1, 1], [1, 1]];

        decompose_fan(&mut mesh, &patch, &parts, &projector).unwrap();

        // Exactly one vertex is shared by all three new facets.
        let new_facets: Vec<[u32; 4]> = (facets_before..mesh.facet_count() as u32)
            .map(|f| mesh.facet(f))
            .collect();
        let shared: Vec<u32> = new_facets[0]
            .iter()
            .copied()
            .filter(|v| new_facets.iter().all(|f| f.contains(v)))
            .collect();
        assert_eq!(shared.len(), 1);
    }

    #[test]
    fn hub_is_projected_barycentre_of_far_corners() {
        let (mut mesh, patch) = hexagon_fan();
        let projector = patch_projector(&mesh);
        let hub_index = mesh.point_count() as u32;
        let parts: PartSegments = smallvec![[1, 1], [1, 1], [1, 1]];

        // Far corners of the 1-edge a chains: boundary vertices 2, 4, 6.
        let mut expected = Vector3::zeros();
        for v in [2u32, 4, 6] {
            expected += mesh.point(v).coords;
        }
        let expected = projector.project(Point3::from(expected / 3.0));

        decompose_fan(&mut mesh, &patch, &parts, &projector).unwrap();
        assert!((mesh.point(hub_index) - expected).norm() < 1e-12);
    }

    #[test]
    fn mismatched_part_lengths_are_rejected() {
        let (mut mesh, patch) = hexagon_fan();
        let projector = patch_projector(&mesh);
        let parts: PartSegments = smallvec![[2, 1], [1, 1], [1, 1]];
        assert!(matches!(
            decompose_fan(&mut mesh, &patch, &parts, &projector),
            Err(PatchError::MalformedChains)
        ));
    }
}

//! Boundary slicing into the four chains of a topological rectangle.

use crate::{PatchError, PatchResult, Segments};
use mesh_quad::QuadSurface;

/// The four vertex chains bounding one topological rectangle.
///
/// Chains `a` and `c` are opposite, as are `b` and `d`, oriented so that
///
/// ```text
///        b ->
///      - - - - -
///   ^ | + + + + | ^
/// a | | + + + + | | c
///     | + + + + |
///      - - - - -
///        d ->
/// ```
///
/// with shared corner vertices: `a.back == b.front`, `b.back == c.back`,
/// `d.back == c.front`, `a.front == d.front`.
#[derive(Debug, Clone)]
pub struct NodeChains {
    /// Left chain, bottom to top.
    pub a: Vec<u32>,
    /// Top chain, left to right.
    pub b: Vec<u32>,
    /// Right chain, bottom to top.
    pub c: Vec<u32>,
    /// Bottom chain, left to right.
    pub d: Vec<u32>,
}

impl NodeChains {
    /// Check the rectangle invariants: matching opposite lengths, at least
    /// one edge per side, and shared corner vertices.
    #[must_use]
    pub fn is_rectangle(&self) -> bool {
        self.a.len() == self.c.len()
            && self.b.len() == self.d.len()
            && self.a.len() >= 2
            && self.b.len() >= 2
            && self.a.last() == self.b.first()
            && self.b.last() == self.c.last()
            && self.d.last() == self.c.first()
            && self.a.first() == self.d.first()
    }
}

/// Slice an aligned four-sided boundary into its four node chains.
///
/// The patch must start at a corner (see
/// [`align_to_corner`](crate::align_to_corner)) and have matching opposite
/// sides. One pass over the boundary writes each vertex into its position
/// in `a`, `b`, `c`, or `d`; the four corners land in two chains each.
///
/// # Errors
///
/// Returns [`PatchError::MalformedChains`] when the segments do not
/// describe the patch (mismatched opposite sides or wrong total length).
pub fn extract_quad_nodes(
    mesh: &QuadSurface,
    patch: &[u32],
    segments: &Segments,
) -> PatchResult<NodeChains> {
    let (s0, s1, s2, s3) = (segments[0], segments[1], segments[2], segments[3]);
    if s0 != s2 || s1 != s3 || patch.len() != s0 + s1 + s2 + s3 {
        return Err(PatchError::MalformedChains);
    }

    let a_len = s1 + 1;
    let b_len = s0 + 1;
    let mut a = vec![0u32; a_len];
    let mut b = vec![0u32; b_len];
    let mut c = vec![0u32; a_len];
    let mut d = vec![0u32; b_len];

    for (i, &h) in patch.iter().enumerate() {
        let v = mesh.halfedge_from(h);
        if i == 0 {
            a[a_len - 1] = v;
            b[0] = v;
        } else if i < s0 {
            b[i] = v;
        } else if i == s0 {
            b[b_len - 1] = v;
            c[a_len - 1] = v;
        } else if i < s0 + s1 {
            c[a_len - 1 - (i - s0)] = v;
        } else if i == s0 + s1 {
            c[0] = v;
            d[b_len - 1] = v;
        } else if i < s0 + s1 + s2 {
            d[b_len - 1 - (i - s0 - s1)] = v;
        } else if i == s0 + s1 + s2 {
            d[0] = v;
            a[0] = v;
        } else {
            a[i - s0 - s1 - s2] = v;
        }
    }

    let chains = NodeChains { a, b, c, d };
    debug_assert!(chains.is_rectangle());
    Ok(chains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use smallvec::smallvec;

    /// Three quads fanned around vertex 0, leaving an 8-edge boundary loop
    /// that runs through the fan hub.
    fn ring_mesh() -> (QuadSurface, Vec<u32>) {
        let mut mesh = QuadSurface::new();
        for i in 0..8 {
            let angle = f64::from(i) * std::f64::consts::FRAC_PI_4;
            mesh.add_point(Point3::new(angle.cos(), angle.sin(), 0.0));
        }
        mesh.add_facet([0, 1, 2, 3]);
        mesh.add_facet([0, 3, 4, 5]);
        mesh.add_facet([0, 5, 6, 7]);
        // Boundary loop 1->2->...->7->1 walked through facet half-edges.
        let patch = vec![
            mesh.halfedge(0, 1),
            mesh.halfedge(0, 2),
            mesh.halfedge(1, 1),
            mesh.halfedge(1, 2),
            mesh.halfedge(2, 1),
            mesh.halfedge(2, 2),
            mesh.halfedge(2, 3),
            mesh.halfedge(0, 0),
        ];
        (mesh, patch)
    }

    #[test]
    fn chains_form_rectangle() {
        let (mesh, patch) = ring_mesh();
        let segments: Segments = smallvec![2, 2, 2, 2];
        let chains = extract_quad_nodes(&mesh, &patch, &segments).unwrap();

        assert!(chains.is_rectangle());
        assert_eq!(chains.a.len(), 3);
        assert_eq!(chains.b.len(), 3);
    }

    #[test]
    fn chains_cover_boundary_once() {
        let (mesh, patch) = ring_mesh();
        let segments: Segments = smallvec![2, 2, 2, 2];
        let chains = extract_quad_nodes(&mesh, &patch, &segments).unwrap();

        let mut seen: Vec<u32> = chains
            .a
            .iter()
            .chain(&chains.b)
            .chain(&chains.c)
            .chain(&chains.d)
            .copied()
            .collect();
        seen.sort_unstable();
        seen.dedup();
        // All 8 boundary vertices, each exactly once after dedup.
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn mismatched_opposites_are_rejected() {
        let (mesh, patch) = ring_mesh();
        let segments: Segments = smallvec![3, 2, 1, 2];
        assert!(matches!(
            extract_quad_nodes(&mesh, &patch, &segments),
            Err(PatchError::MalformedChains)
        ));
    }
}

//! Storage compaction with index relocation.

use crate::QuadSurface;

/// Summary of a [`QuadSurface::compact`] pass.
///
/// The relocation table maps pre-compaction point indices to their new
/// dense indices; `None` marks a point that was dropped as unreferenced.
#[derive(Debug, Clone)]
pub struct CompactionReport {
    /// Number of inactive facets removed.
    pub facets_removed: usize,
    /// Number of orphaned points removed.
    pub points_removed: usize,
    /// Relocation table from old point index to new point index.
    pub point_map: Vec<Option<u32>>,
}

impl QuadSurface {
    /// Remove inactive facets and unreferenced points, renumbering all
    /// remaining indices densely.
    ///
    /// Facet order among survivors is preserved, as is point order. Every
    /// surviving facet is rewritten through the relocation table, so no
    /// dangling references remain afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_quad::QuadSurface;
    /// use nalgebra::Point3;
    ///
    /// let mut mesh = QuadSurface::new();
    /// for i in 0..6 {
    ///     mesh.add_point(Point3::new(f64::from(i), 0.0, 0.0));
    /// }
    /// mesh.add_facet([0, 1, 2, 3]);
    /// mesh.add_facet([2, 3, 4, 5]);
    ///
    /// mesh.deactivate(0);
    /// let report = mesh.compact();
    ///
    /// assert_eq!(report.facets_removed, 1);
    /// assert_eq!(report.points_removed, 2); // 0 and 1 were orphaned
    /// assert_eq!(mesh.facet_count(), 1);
    /// assert_eq!(mesh.facet(0), [0, 1, 2, 3]); // renumbered
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: indices are u32, meshes beyond 4B points are unsupported by design
    pub fn compact(&mut self) -> CompactionReport {
        let facets_before = self.facets.len();

        // Drop inactive facets, keeping the parallel arrays in step.
        let mut kept = Vec::with_capacity(self.facets.len());
        let mut kept_tags = Vec::with_capacity(self.tags.len());
        for i in 0..self.facets.len() {
            if self.active[i] {
                kept.push(self.facets[i]);
                kept_tags.push(self.tags[i]);
            }
        }
        self.facets = kept;
        self.tags = kept_tags;
        self.active = vec![true; self.facets.len()];

        // Mark referenced points and build the relocation table.
        let mut referenced = vec![false; self.points.len()];
        for facet in &self.facets {
            for &v in facet {
                referenced[v as usize] = true;
            }
        }

        let mut point_map = vec![None; self.points.len()];
        let mut next = 0u32;
        for (old, &used) in referenced.iter().enumerate() {
            if used {
                point_map[old] = Some(next);
                next += 1;
            }
        }

        // Rebuild the point arena and remap facets.
        let mut points = Vec::with_capacity(next as usize);
        for (old, map) in point_map.iter().enumerate() {
            if map.is_some() {
                points.push(self.points[old]);
            }
        }
        let points_removed = self.points.len() - points.len();
        self.points = points;

        for facet in &mut self.facets {
            for v in facet.iter_mut() {
                // Referenced by construction, the table always has an entry.
                if let Some(new) = point_map[*v as usize] {
                    *v = new;
                }
            }
        }

        CompactionReport {
            facets_removed: facets_before - self.facets.len(),
            points_removed,
            point_map,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn strip(quads: usize) -> QuadSurface {
        // A row of quads sharing vertical edges.
        let mut mesh = QuadSurface::new();
        for i in 0..=quads {
            mesh.add_point(Point3::new(i as f64, 0.0, 0.0));
            mesh.add_point(Point3::new(i as f64, 1.0, 0.0));
        }
        for i in 0..quads as u32 {
            mesh.add_facet([2 * i, 2 * i + 2, 2 * i + 3, 2 * i + 1]);
        }
        mesh
    }

    #[test]
    fn compact_noop_on_clean_mesh() {
        let mut mesh = strip(3);
        let report = mesh.compact();
        assert_eq!(report.facets_removed, 0);
        assert_eq!(report.points_removed, 0);
        assert_eq!(mesh.facet_count(), 3);
        assert_eq!(mesh.point_count(), 8);
    }

    #[test]
    fn compact_removes_inactive_and_orphans() {
        let mut mesh = strip(3);
        mesh.deactivate(2);
        let report = mesh.compact();

        assert_eq!(report.facets_removed, 1);
        assert_eq!(report.points_removed, 2);
        assert_eq!(mesh.facet_count(), 2);
        assert_eq!(mesh.point_count(), 6);

        // Surviving indices are dense and consistent.
        for f in 0..mesh.facet_count() as u32 {
            for v in mesh.facet(f) {
                assert!((v as usize) < mesh.point_count());
            }
        }
    }

    #[test]
    fn relocation_table_tracks_survivors() {
        let mut mesh = strip(2);
        mesh.deactivate(0);
        let positions_before: Vec<Point3<f64>> = mesh.points.clone();
        let report = mesh.compact();

        for (old, entry) in report.point_map.iter().enumerate() {
            if let Some(new) = entry {
                let moved = mesh.point(*new);
                assert!((moved - positions_before[old]).norm() < 1e-15);
            }
        }
        // Points 0 and 1 belonged only to the removed facet.
        assert_eq!(report.point_map[0], None);
        assert_eq!(report.point_map[1], None);
    }

    #[test]
    fn area_preserved_for_survivors() {
        let mut mesh = strip(4);
        let area_per_quad = 1.0;
        mesh.deactivate(1);
        mesh.compact();
        assert!((mesh.surface_area() - 3.0 * area_per_quad).abs() < 1e-12);
    }
}

//! Indexed quad surface.

use nalgebra::Point3;

/// A quadrilateral surface mesh stored as dense index arenas.
///
/// Points and facets are addressed by `u32` indices. Each facet carries an
/// activity flag and an integer tag; tags mark facets as belonging to a
/// region of interest (any value > 0) and survive until the facet is
/// deactivated and compacted away.
///
/// # Example
///
/// ```
/// use mesh_quad::QuadSurface;
/// use nalgebra::Point3;
///
/// let mut mesh = QuadSurface::new();
/// for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
///     mesh.add_point(Point3::new(x, y, 0.0));
/// }
/// let f = mesh.add_facet([0, 1, 2, 3]);
/// mesh.set_tag(f, 1);
///
/// assert_eq!(mesh.tag(f), 1);
/// assert!((mesh.surface_area() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuadSurface {
    /// Vertex positions.
    pub points: Vec<Point3<f64>>,
    /// Quad facets as vertex indices, counter-clockwise winding.
    pub facets: Vec<[u32; 4]>,
    pub(crate) active: Vec<bool>,
    pub(crate) tags: Vec<i32>,
}

impl QuadSurface {
    /// Create a new empty surface.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: Vec::new(),
            facets: Vec::new(),
            active: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Create a surface with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(point_count: usize, facet_count: usize) -> Self {
        Self {
            points: Vec::with_capacity(point_count),
            facets: Vec::with_capacity(facet_count),
            active: Vec::with_capacity(facet_count),
            tags: Vec::with_capacity(facet_count),
        }
    }

    /// Number of points.
    #[inline]
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of facets, active or not.
    #[inline]
    #[must_use]
    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Check whether the surface has no facets.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Append a point and return its index.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: indices are u32, meshes beyond 4B points are unsupported by design
    pub fn add_point(&mut self, position: Point3<f64>) -> u32 {
        self.points.push(position);
        (self.points.len() - 1) as u32
    }

    /// Append `n` points at the origin and return the index of the first.
    ///
    /// Positions are expected to be filled in with [`Self::set_point`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_points(&mut self, n: usize) -> u32 {
        let first = self.points.len() as u32;
        self.points
            .resize(self.points.len() + n, Point3::origin());
        first
    }

    /// Get the position of a point.
    #[inline]
    #[must_use]
    pub fn point(&self, index: u32) -> Point3<f64> {
        self.points[index as usize]
    }

    /// Overwrite the position of a point.
    #[inline]
    pub fn set_point(&mut self, index: u32, position: Point3<f64>) {
        self.points[index as usize] = position;
    }

    /// Append a facet (active, tag 0) and return its index.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_facet(&mut self, vertices: [u32; 4]) -> u32 {
        self.facets.push(vertices);
        self.active.push(true);
        self.tags.push(0);
        (self.facets.len() - 1) as u32
    }

    /// Get the four vertex indices of a facet.
    #[inline]
    #[must_use]
    pub fn facet(&self, index: u32) -> [u32; 4] {
        self.facets[index as usize]
    }

    /// Check whether a facet is active.
    #[inline]
    #[must_use]
    pub fn is_active(&self, index: u32) -> bool {
        self.active[index as usize]
    }

    /// Deactivate a facet. It is removed on the next [`Self::compact`] pass.
    #[inline]
    pub fn deactivate(&mut self, index: u32) {
        self.active[index as usize] = false;
    }

    /// Get the tag of a facet.
    #[inline]
    #[must_use]
    pub fn tag(&self, index: u32) -> i32 {
        self.tags[index as usize]
    }

    /// Set the tag of a facet.
    #[inline]
    pub fn set_tag(&mut self, index: u32, tag: i32) {
        self.tags[index as usize] = tag;
    }

    /// Iterate over the indices of active facets.
    #[allow(clippy::cast_possible_truncation)]
    pub fn active_facets(&self) -> impl Iterator<Item = u32> + '_ {
        self.active
            .iter()
            .enumerate()
            .filter(|(_, &a)| a)
            .map(|(i, _)| i as u32)
    }

    /// Iterate over the indices of active facets with a tag > 0.
    pub fn tagged_facets(&self) -> impl Iterator<Item = u32> + '_ {
        self.active_facets()
            .filter(move |&f| self.tags[f as usize] > 0)
    }

    /// Half-edge id for `corner` of `facet`.
    ///
    /// The half-edge runs from the facet's vertex `corner` to its vertex
    /// `(corner + 1) % 4`.
    #[inline]
    #[must_use]
    pub fn halfedge(&self, facet: u32, corner: u32) -> u32 {
        facet * 4 + corner
    }

    /// The facet owning a half-edge.
    #[inline]
    #[must_use]
    pub fn halfedge_facet(&self, halfedge: u32) -> u32 {
        halfedge / 4
    }

    /// Source vertex of a half-edge.
    #[inline]
    #[must_use]
    pub fn halfedge_from(&self, halfedge: u32) -> u32 {
        self.facets[(halfedge / 4) as usize][(halfedge % 4) as usize]
    }

    /// Target vertex of a half-edge.
    #[inline]
    #[must_use]
    pub fn halfedge_to(&self, halfedge: u32) -> u32 {
        self.facets[(halfedge / 4) as usize][((halfedge % 4 + 1) % 4) as usize]
    }

    /// Drop every point and facet appended after the given counts.
    ///
    /// Rolls back partially built geometry. The caller must ensure no
    /// surviving facet references a dropped point.
    pub fn truncate(&mut self, point_count: usize, facet_count: usize) {
        self.points.truncate(point_count);
        self.facets.truncate(facet_count);
        self.active.truncate(facet_count);
        self.tags.truncate(facet_count);
    }

    /// Total area of the active facets.
    ///
    /// Each quad is measured as two triangles split along the `v0-v2`
    /// diagonal, so non-planar quads are handled consistently with
    /// [`Self::triangulated`].
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.active_facets()
            .map(|f| {
                let [i0, i1, i2, i3] = self.facet(f);
                let p0 = self.point(i0);
                let p1 = self.point(i1);
                let p2 = self.point(i2);
                let p3 = self.point(i3);
                let t0 = (p1 - p0).cross(&(p2 - p0)).norm() / 2.0;
                let t1 = (p2 - p0).cross(&(p3 - p0)).norm() / 2.0;
                t0 + t1
            })
            .sum()
    }

    /// Split each selected facet into two triangles and return the vertex
    /// position triples.
    ///
    /// A quad `[v0, v1, v2, v3]` becomes `(v0, v1, v2)` and `(v0, v2, v3)`.
    /// Used to build a reference surface for nearest-point projection over
    /// an arbitrary facet subset.
    #[must_use]
    pub fn triangulated<F>(&self, mut filter: F) -> Vec<[Point3<f64>; 3]>
    where
        F: FnMut(u32) -> bool,
    {
        let mut triangles = Vec::new();
        for f in self.active_facets() {
            if !filter(f) {
                continue;
            }
            let [i0, i1, i2, i3] = self.facet(f);
            let p0 = self.point(i0);
            let p1 = self.point(i1);
            let p2 = self.point(i2);
            let p3 = self.point(i3);
            triangles.push([p0, p1, p2]);
            triangles.push([p0, p2, p3]);
        }
        triangles
    }
}

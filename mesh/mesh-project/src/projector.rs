//! AABB-tree nearest-point index.

use crate::{Aabb, ProjectError, ProjectResult, Triangle};
use nalgebra::Point3;

/// A node of the AABB tree. Leaves reference a contiguous run of the
/// reordered triangle array.
#[derive(Debug)]
enum Node {
    Leaf {
        aabb: Aabb,
        start: usize,
        count: usize,
    },
    Branch {
        aabb: Aabb,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn aabb(&self) -> &Aabb {
        match self {
            Self::Leaf { aabb, .. } | Self::Branch { aabb, .. } => aabb,
        }
    }
}

/// Triangles per leaf before splitting stops.
const LEAF_SIZE: usize = 4;

/// Nearest-point index over a reference triangulated surface.
///
/// Built by recursive median split on triangle centroids along the longest
/// axis. Queries are exact: traversal prunes subtrees whose bounding box is
/// farther than the best candidate found so far.
///
/// # Example
///
/// ```
/// use mesh_project::{Projector, Triangle};
/// use nalgebra::Point3;
///
/// let triangles = vec![
///     Triangle::new(
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ),
///     Triangle::new(
///         Point3::new(10.0, 0.0, 0.0),
///         Point3::new(11.0, 0.0, 0.0),
///         Point3::new(10.0, 1.0, 0.0),
///     ),
/// ];
/// let projector = Projector::build(triangles)?;
///
/// let p = projector.project(Point3::new(10.2, 0.3, 2.0));
/// assert!((p - Point3::new(10.2, 0.3, 0.0)).norm() < 1e-12);
/// # Ok::<(), mesh_project::ProjectError>(())
/// ```
#[derive(Debug)]
pub struct Projector {
    triangles: Vec<Triangle>,
    root: Node,
}

impl Projector {
    /// Build a projector over a set of triangles.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectError::EmptySurface`] if `triangles` is empty.
    pub fn build(mut triangles: Vec<Triangle>) -> ProjectResult<Self> {
        if triangles.is_empty() {
            return Err(ProjectError::EmptySurface);
        }
        let count = triangles.len();
        let root = build_node(&mut triangles, 0, count);
        Ok(Self { triangles, root })
    }

    /// Number of triangles in the reference surface.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Return the closest point on the reference surface to `point`.
    #[must_use]
    pub fn project(&self, point: Point3<f64>) -> Point3<f64> {
        let mut best_d2 = f64::INFINITY;
        let mut best = point;
        self.nearest(&self.root, point, &mut best_d2, &mut best);
        best
    }

    fn nearest(&self, node: &Node, p: Point3<f64>, best_d2: &mut f64, best: &mut Point3<f64>) {
        if node.aabb().distance_squared(&p) >= *best_d2 {
            return;
        }
        match node {
            Node::Leaf { start, count, .. } => {
                for triangle in &self.triangles[*start..*start + *count] {
                    let q = triangle.closest_point(p);
                    let d2 = (q - p).norm_squared();
                    if d2 < *best_d2 {
                        *best_d2 = d2;
                        *best = q;
                    }
                }
            }
            Node::Branch { left, right, .. } => {
                // Descend into the nearer child first for tighter pruning.
                let dl = left.aabb().distance_squared(&p);
                let dr = right.aabb().distance_squared(&p);
                if dl <= dr {
                    self.nearest(left, p, best_d2, best);
                    self.nearest(right, p, best_d2, best);
                } else {
                    self.nearest(right, p, best_d2, best);
                    self.nearest(left, p, best_d2, best);
                }
            }
        }
    }
}

fn bounds_of(triangles: &[Triangle]) -> Aabb {
    let mut aabb = Aabb::empty();
    for t in triangles {
        aabb = aabb.union(&t.aabb());
    }
    aabb
}

fn build_node(triangles: &mut [Triangle], start: usize, count: usize) -> Node {
    let slice = &mut triangles[start..start + count];
    let aabb = bounds_of(slice);

    if count <= LEAF_SIZE {
        return Node::Leaf { aabb, start, count };
    }

    // Median split on centroids along the longest extent.
    let centroid_bounds = Aabb::from_points(
        slice
            .iter()
            .map(Triangle::centroid)
            .collect::<Vec<_>>()
            .iter(),
    );
    let extent = centroid_bounds.max - centroid_bounds.min;
    let axis = if extent.x >= extent.y && extent.x >= extent.z {
        0
    } else if extent.y >= extent.z {
        1
    } else {
        2
    };

    let mid = count / 2;
    slice.select_nth_unstable_by(mid, |a, b| {
        a.centroid()[axis]
            .partial_cmp(&b.centroid()[axis])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let left = Box::new(build_node(triangles, start, mid));
    let right = Box::new(build_node(triangles, start + mid, count - mid));
    Node::Branch { aabb, left, right }
}

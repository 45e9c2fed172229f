//! Concrete triangle with closest-point queries.

use crate::Aabb;
use nalgebra::Point3;

/// A triangle given by its three vertex positions.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    /// First vertex.
    pub a: Point3<f64>,
    /// Second vertex.
    pub b: Point3<f64>,
    /// Third vertex.
    pub c: Point3<f64>,
}

impl Triangle {
    /// Create a triangle from three vertex positions.
    #[inline]
    #[must_use]
    pub const fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self { a, b, c }
    }

    /// Centroid of the triangle.
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        Point3::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// Bounding box of the triangle.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points([&self.a, &self.b, &self.c])
    }

    /// Compute the closest point on the triangle to a query point.
    ///
    /// Uses the barycentric-region method: the query is classified against
    /// the vertex, edge, and face Voronoi regions of the triangle.
    #[allow(clippy::many_single_char_names)]
    #[must_use]
    pub fn closest_point(&self, p: Point3<f64>) -> Point3<f64> {
        let (a, b, c) = (self.a, self.b, self.c);

        let ab = b - a;
        let ac = c - a;
        let ap = p - a;

        let d1 = ab.dot(&ap);
        let d2 = ac.dot(&ap);
        if d1 <= 0.0 && d2 <= 0.0 {
            return a;
        }

        let bp = p - b;
        let d3 = ab.dot(&bp);
        let d4 = ac.dot(&bp);
        if d3 >= 0.0 && d4 <= d3 {
            return b;
        }

        let vc = d1.mul_add(d4, -(d3 * d2));
        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            let v = d1 / (d1 - d3);
            return Point3::from(a.coords + ab * v);
        }

        let cp = p - c;
        let d5 = ab.dot(&cp);
        let d6 = ac.dot(&cp);
        if d6 >= 0.0 && d5 <= d6 {
            return c;
        }

        let vb = d5.mul_add(d2, -(d1 * d6));
        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            let w = d2 / (d2 - d6);
            return Point3::from(a.coords + ac * w);
        }

        let va = d3.mul_add(d6, -(d5 * d4));
        if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return Point3::from(b.coords + (c - b) * w);
        }

        // Inside the face region: project onto the triangle plane.
        let denom = 1.0 / (va + vb + vc);
        let v = vb * denom;
        let w = vc * denom;
        Point3::from(a.coords + ab * v + ac * w)
    }
}

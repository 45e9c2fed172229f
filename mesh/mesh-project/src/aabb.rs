//! Axis-aligned bounding box.

use nalgebra::Point3;

/// An axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create an empty (inverted) box that unions correctly with anything.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Build the bounding box of a set of points.
    #[must_use]
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Point3<f64>>,
    {
        let mut aabb = Self::empty();
        for p in points {
            aabb.grow(p);
        }
        aabb
    }

    /// Expand the box to contain `point`.
    pub fn grow(&mut self, point: &Point3<f64>) {
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(point[axis]);
            self.max[axis] = self.max[axis].max(point[axis]);
        }
    }

    /// The union of two boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// Squared distance from a point to the box (zero inside).
    #[must_use]
    pub fn distance_squared(&self, point: &Point3<f64>) -> f64 {
        let mut d2 = 0.0;
        for axis in 0..3 {
            let v = point[axis];
            if v < self.min[axis] {
                let d = self.min[axis] - v;
                d2 += d * d;
            } else if v > self.max[axis] {
                let d = v - self.max[axis];
                d2 += d * d;
            }
        }
        d2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_spans_extremes() {
        let points = [
            Point3::new(-2.0, 1.0, 0.0),
            Point3::new(3.0, -1.0, 5.0),
            Point3::new(0.0, 4.0, 2.0),
        ];
        let aabb = Aabb::from_points(points.iter());
        assert!((aabb.min.x + 2.0).abs() < f64::EPSILON);
        assert!((aabb.max.x - 3.0).abs() < f64::EPSILON);
        assert!((aabb.min.y + 1.0).abs() < f64::EPSILON);
        assert!((aabb.max.y - 4.0).abs() < f64::EPSILON);
        assert!((aabb.max.z - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_zero_inside() {
        let aabb = Aabb::from_points([Point3::origin(), Point3::new(1.0, 1.0, 1.0)].iter());
        assert!(aabb.distance_squared(&Point3::new(0.5, 0.5, 0.5)) < f64::EPSILON);
    }

    #[test]
    fn distance_outside_face() {
        let aabb = Aabb::from_points([Point3::origin(), Point3::new(1.0, 1.0, 1.0)].iter());
        let d2 = aabb.distance_squared(&Point3::new(3.0, 0.5, 0.5));
        assert!((d2 - 4.0).abs() < 1e-12);
    }

    #[test]
    fn union_contains_both() {
        let a = Aabb::from_points([Point3::origin()].iter());
        let b = Aabb::from_points([Point3::new(2.0, 2.0, 2.0)].iter());
        let u = a.union(&b);
        assert!(u.distance_squared(&Point3::new(1.0, 1.0, 1.0)) < f64::EPSILON);
    }
}

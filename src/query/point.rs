//! Point containment tests.

use crate::math::{Isometry, Point};
use crate::shape::{Ball, ConvexPolygon, Shape};

impl Ball {
    /// Does this ball contain the given shape-local point?
    #[inline]
    pub fn contains_local_point(&self, pt: &Point) -> bool {
        pt.coords.norm_squared() <= self.radius * self.radius
    }
}

impl ConvexPolygon {
    /// Does this polygon contain the given shape-local point?
    ///
    /// The point must be on the inner side of every edge half-plane.
    pub fn contains_local_point(&self, pt: &Point) -> bool {
        self.points()
            .iter()
            .zip(self.normals().iter())
            .all(|(vertex, normal)| (pt - vertex).dot(&**normal) <= 0.0)
    }
}

impl Shape {
    /// Does this shape contain the given shape-local point?
    #[inline]
    pub fn contains_local_point(&self, pt: &Point) -> bool {
        match self {
            Shape::Ball(b) => b.contains_local_point(pt),
            Shape::ConvexPolygon(p) => p.contains_local_point(pt),
        }
    }

    /// Does this shape positioned by `m` contain the given world-space point?
    #[inline]
    pub fn contains_point(&self, m: &Isometry, pt: &Point) -> bool {
        self.contains_local_point(&m.inverse_transform_point(pt))
    }
}

use crate::bounding_volume::Aabb;
use crate::math::Isometry;
use crate::shape::ConvexPolygon;

impl ConvexPolygon {
    /// Computes the world-space AABB of this convex polygon transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry) -> Aabb {
        Aabb::from_points(self.points().iter().map(|pt| pos * pt))
    }
}

use crate::bounding_volume::Aabb;
use crate::math::Isometry;
use crate::shape::Shape;

impl Shape {
    /// Computes the world-space AABB of this shape transformed by `pos`.
    #[inline]
    pub fn compute_aabb(&self, pos: &Isometry) -> Aabb {
        match self {
            Shape::Ball(b) => b.aabb(pos),
            Shape::ConvexPolygon(p) => p.aabb(pos),
        }
    }
}

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Vector};
use crate::shape::Ball;

impl Ball {
    /// Computes the world-space AABB of this ball transformed by `pos`.
    #[inline]
    pub fn aabb(&self, pos: &Isometry) -> Aabb {
        let center = Point::from(pos.translation.vector);
        let half_extents = Vector::new(self.radius, self.radius);

        Aabb::new(center - half_extents, center + half_extents)
    }
}

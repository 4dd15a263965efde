//! Ray casting against shapes and bounding volumes.

pub use self::ray::{Ray, RayCast, RayIntersection};
pub use self::ray_aabb::ray_toi_with_aabb;
pub use self::ray_ball::ray_toi_and_normal_with_ball;

mod ray;
mod ray_aabb;
mod ray_ball;
mod ray_convex_polygon;

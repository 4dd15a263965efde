//! Axis-aligned bounding boxes used by the broad phase and spatial queries.

pub use self::aabb::Aabb;

mod aabb;
mod aabb_ball;
mod aabb_convex_polygon;
mod aabb_shape;

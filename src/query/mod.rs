//! Geometric queries: ray casting, point projection, separation tests and
//! contact generation.

pub use self::clip::clip_segment_segment_with_normal;
pub use self::contact::{
    contact_shape_shape, ContactManifold, TrackedContact, MAX_MANIFOLD_POINTS,
};
pub use self::ray::{Ray, RayCast, RayIntersection};
pub use self::sat::polygon_polygon_find_local_separating_edge;

pub mod clip;
pub mod contact;
pub mod point;
pub mod ray;
pub mod sat;

//! Contact manifold computation between pairs of shapes.

pub use self::contact_ball_ball::contact_ball_ball;
pub use self::contact_manifold::{ContactManifold, TrackedContact, MAX_MANIFOLD_POINTS};
pub use self::contact_polygon_ball::contact_polygon_ball;
pub use self::contact_polygon_polygon::contact_polygon_polygon;
pub use self::contact_shape_shape::contact_shape_shape;

mod contact_ball_ball;
mod contact_manifold;
mod contact_polygon_ball;
mod contact_polygon_polygon;
mod contact_shape_shape;

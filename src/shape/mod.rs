//! Geometric shapes usable by rigid bodies.

pub use self::ball::Ball;
pub use self::convex_polygon::ConvexPolygon;
pub use self::feature_id::FeatureId;
pub use self::polygonal_feature::PolygonalFeature;
pub use self::shape::Shape;

mod ball;
mod convex_polygon;
mod feature_id;
mod polygonal_feature;
mod shape;

use crate::math::{Point, Real};
use crate::shape::{Ball, ConvexPolygon};
use serde::{Deserialize, Serialize};

/// An immutable geometric primitive attachable to a rigid body.
///
/// A closed enum rather than a trait object: the sandbox only ever
/// manipulates discs and convex polygons, and a closed set keeps the
/// narrow-phase dispatch exhaustive and the scene format trivially
/// serializable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// A disc centered at the shape-local origin.
    Ball(Ball),
    /// A convex polygon in shape-local space.
    ConvexPolygon(ConvexPolygon),
}

impl Shape {
    /// A ball with the given radius, or `None` if the radius is not finite and positive.
    pub fn ball(radius: Real) -> Option<Self> {
        (radius.is_finite() && radius > 0.0).then(|| Shape::Ball(Ball::new(radius)))
    }

    /// A convex polygon built from a vertex loop. See [`ConvexPolygon::try_from_polyline`].
    pub fn convex_polygon(points: Vec<Point>) -> Option<Self> {
        ConvexPolygon::try_from_polyline(points).map(Shape::ConvexPolygon)
    }

    /// An axis-aligned rectangle with the given half-extents.
    pub fn rectangle(half_width: Real, half_height: Real) -> Option<Self> {
        ConvexPolygon::rectangle(half_width, half_height).map(Shape::ConvexPolygon)
    }

}

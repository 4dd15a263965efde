use crate::math::{Isometry, Real};
use crate::query::contact::{
    contact_ball_ball, contact_polygon_ball, contact_polygon_polygon, TrackedContact,
};
use crate::shape::Shape;

/// Computes the contacts between two shapes.
///
/// The emitted contact normals point from the first shape toward the second.
pub fn contact_shape_shape(
    pos1: &Isometry,
    shape1: &Shape,
    pos2: &Isometry,
    shape2: &Shape,
    prediction: Real,
    out: &mut Vec<TrackedContact>,
) {
    match (shape1, shape2) {
        (Shape::Ball(b1), Shape::Ball(b2)) => {
            contact_ball_ball(pos1, b1, pos2, b2, prediction, out)
        }
        (Shape::ConvexPolygon(p1), Shape::Ball(b2)) => {
            contact_polygon_ball(pos1, p1, pos2, b2, prediction, out)
        }
        (Shape::Ball(b1), Shape::ConvexPolygon(p2)) => {
            let first = out.len();
            contact_polygon_ball(pos2, p2, pos1, b1, prediction, out);
            for contact in &mut out[first..] {
                *contact = contact.flipped();
            }
        }
        (Shape::ConvexPolygon(p1), Shape::ConvexPolygon(p2)) => {
            contact_polygon_polygon(pos1, p1, pos2, p2, prediction, out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Isometry;
    use crate::shape::Shape;
    use approx::assert_relative_eq;

    #[test]
    fn ball_first_polygon_second_flips_roles() {
        let ball = Shape::ball(0.5).unwrap();
        let square = Shape::rectangle(1.0, 1.0).unwrap();
        let pos_ball = Isometry::translation(0.0, 1.25);
        let pos_square = Isometry::identity();

        let mut out = Vec::new();
        contact_shape_shape(&pos_ball, &ball, &pos_square, &square, 0.0, &mut out);
        assert_eq!(out.len(), 1);
        assert_relative_eq!(out[0].dist, -0.25, epsilon = 1.0e-6);
        // Ball is the first shape so the normal points downward.
        assert_relative_eq!(out[0].normal.y, -1.0, epsilon = 1.0e-6);
    }
}

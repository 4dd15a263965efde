use crate::math::{Isometry, Point, Real, UnitVector};
use crate::query::contact::TrackedContact;
use crate::shape::{Ball, ConvexPolygon, FeatureId};

/// Computes the contact between a convex polygon and a ball.
///
/// The polygon plays the role of the first shape.
pub fn contact_polygon_ball(
    pos1: &Isometry,
    polygon: &ConvexPolygon,
    pos2: &Isometry,
    ball: &Ball,
    prediction: Real,
    out: &mut Vec<TrackedContact>,
) {
    // Work in the polygon's local frame.
    let center = pos1.inverse_transform_point(&Point::from(pos2.translation.vector));

    let pts = polygon.points();
    let normals = polygon.normals();
    let nvtx = pts.len();

    // Find the face with the largest signed distance from the ball center.
    let mut best_face = 0;
    let mut best_sep = -Real::MAX;
    for i in 0..nvtx {
        let sep = (center - pts[i]).dot(&*normals[i]);
        if sep > best_sep {
            best_sep = sep;
            best_face = i;
        }
    }

    if best_sep > ball.radius + prediction {
        return;
    }

    if best_sep <= 0.0 {
        // Center inside the polygon. Push out along the least penetrated face.
        let normal = pos1 * normals[best_face];
        let dist = best_sep - ball.radius;
        let point = pos1 * (center - *normals[best_face] * best_sep);
        let fid1 = FeatureId::Face(best_face as u32).packed();
        let fid2 = FeatureId::Vertex(0).packed();
        out.push(TrackedContact::new(point, dist, normal, fid1, fid2));
        return;
    }

    // Clamp the center onto the best face's segment to resolve the Voronoi
    // region (face interior vs. one of the two vertices).
    let a = pts[best_face];
    let b = pts[(best_face + 1) % nvtx];
    let ab = b - a;
    let t = (center - a).dot(&ab) / ab.norm_squared();

    let (proj, fid1) = if t <= 0.0 {
        (a, FeatureId::Vertex(best_face as u32).packed())
    } else if t >= 1.0 {
        (
            b,
            FeatureId::Vertex(((best_face + 1) % nvtx) as u32).packed(),
        )
    } else {
        (a + ab * t, FeatureId::Face(best_face as u32).packed())
    };

    let dcenter = center - proj;
    let center_dist = dcenter.norm();
    let dist = center_dist - ball.radius;

    if dist > prediction || center_dist <= crate::math::DEFAULT_EPSILON {
        return;
    }

    let local_normal = UnitVector::new_unchecked(dcenter / center_dist);
    let normal = pos1 * local_normal;
    let point = pos1 * proj;
    let fid2 = FeatureId::Vertex(0).packed();
    out.push(TrackedContact::new(point, dist, normal, fid1, fid2));
}

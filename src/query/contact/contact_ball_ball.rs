use crate::math::{Isometry, Real, UnitVector, Vector};
use crate::query::contact::TrackedContact;
use crate::shape::{Ball, FeatureId};

/// Computes the contact between two balls.
pub fn contact_ball_ball(
    pos1: &Isometry,
    ball1: &Ball,
    pos2: &Isometry,
    ball2: &Ball,
    prediction: Real,
    out: &mut Vec<TrackedContact>,
) {
    let c1 = Vector::from(pos1.translation.vector);
    let c2 = Vector::from(pos2.translation.vector);
    let dcenter = c2 - c1;
    let center_dist = dcenter.norm();
    let dist = center_dist - ball1.radius - ball2.radius;

    if dist > prediction {
        return;
    }

    let normal = if center_dist > crate::math::DEFAULT_EPSILON {
        UnitVector::new_unchecked(dcenter / center_dist)
    } else {
        // Concentric balls. Pick an arbitrary but deterministic normal.
        UnitVector::new_unchecked(Vector::x())
    };

    let point = (c1 + *normal * ball1.radius).into();
    let fid = FeatureId::Vertex(0).packed();
    out.push(TrackedContact::new(point, dist, normal, fid, fid));
}

//! Exact contact computation for candidate pairs.

use crate::dynamics::RigidBody;
use crate::math::Real;
use crate::query::{contact_shape_shape, ContactManifold, TrackedContact, MAX_MANIFOLD_POINTS};

/// How many low bits of a contact feature id hold the shape-local feature.
/// The attached shape's id occupies the bits above.
const SHAPE_ID_SHIFT: u32 = 16;

/// Computes the contact manifold between two bodies.
///
/// Every shape of the first body is tested against every shape of the second;
/// the two deepest contacts across all shape pairs are kept. Contact feature
/// ids are re-keyed with the attached shape's id so points from different
/// shape pairs never alias during warm-start matching.
pub fn compute_manifold(body1: &RigidBody, body2: &RigidBody, prediction: Real) -> ContactManifold {
    let mut contacts: Vec<TrackedContact> = Vec::new();
    let mut scratch = Vec::new();

    for shape1 in body1.shapes() {
        let pos1 = body1.shape_position(shape1);
        for shape2 in body2.shapes() {
            let pos2 = body2.shape_position(shape2);

            scratch.clear();
            contact_shape_shape(
                &pos1,
                &shape1.shape,
                &pos2,
                &shape2.shape,
                prediction,
                &mut scratch,
            );

            for mut contact in scratch.drain(..) {
                contact.fid1 = (shape1.id.0 << SHAPE_ID_SHIFT) | (contact.fid1 & 0xffff);
                contact.fid2 = (shape2.id.0 << SHAPE_ID_SHIFT) | (contact.fid2 & 0xffff);
                contacts.push(contact);
            }
        }
    }

    if contacts.len() > MAX_MANIFOLD_POINTS {
        contacts.sort_by(|a, b| a.dist.total_cmp(&b.dist));
        contacts.truncate(MAX_MANIFOLD_POINTS);
    }

    let mut manifold = ContactManifold::new();
    for contact in contacts {
        manifold.points.push(contact);
    }
    manifold
}

use crate::math::{Isometry, Point, Real, DEFAULT_EPSILON};
use crate::query::clip::clip_segment_segment_with_normal;
use crate::query::contact::TrackedContact;
use crate::query::sat;
use crate::shape::{ConvexPolygon, PolygonalFeature};

/// Computes the contacts between two convex polygons.
///
/// Runs SAT in both directions, clips the incident face against the
/// reference face, and emits up to two contact points. When both separating
/// axes are equally good, the first polygon's axis wins so the selected
/// feature pair is stable across steps.
pub fn contact_polygon_polygon(
    pos1: &Isometry,
    poly1: &ConvexPolygon,
    pos2: &Isometry,
    poly2: &ConvexPolygon,
    prediction: Real,
    out: &mut Vec<TrackedContact>,
) {
    let pos12 = pos1.inv_mul(pos2);
    let pos21 = pos12.inverse();

    let sat1 = sat::polygon_polygon_find_local_separating_edge(poly1, poly2, &pos12);
    let sat2 = sat::polygon_polygon_find_local_separating_edge(poly2, poly1, &pos21);

    if sat1.0 > prediction || sat2.0 > prediction {
        return;
    }

    let eps = DEFAULT_EPSILON.sqrt();
    if sat2.0 > sat1.0 + eps {
        let first = out.len();
        clip_reference_face(pos2, poly2, &pos21, poly1, sat2.1, prediction, out);
        for contact in &mut out[first..] {
            *contact = contact.flipped();
        }
    } else {
        clip_reference_face(pos1, poly1, &pos12, poly2, sat1.1, prediction, out);
    }
}

/// Clips the incident polygon's support face against the given reference
/// face, in the reference polygon's local frame.
fn clip_reference_face(
    pos_ref: &Isometry,
    ref_poly: &ConvexPolygon,
    pos_inc_in_ref: &Isometry,
    inc_poly: &ConvexPolygon,
    ref_face_id: usize,
    prediction: Real,
    out: &mut Vec<TrackedContact>,
) {
    let ref_face = ref_poly.face(ref_face_id);
    let normal = ref_poly.normals()[ref_face_id];

    let local_search_dir = pos_inc_in_ref.inverse_transform_vector(&-*normal);
    let mut inc_face = inc_poly.support_face(&local_search_dir);
    inc_face.transform_by(pos_inc_in_ref);

    let seg1 = (ref_face.vertices[0], ref_face.vertices[1]);
    let seg2 = (inc_face.vertices[0], inc_face.vertices[1]);

    if let Some((ca, cb)) = clip_segment_segment_with_normal(seg1, seg2, *normal) {
        for (p1, p2, clip1, clip2) in [ca, cb] {
            let dist = (p2 - p1).dot(&*normal);
            if dist <= prediction {
                let fid1 = clipped_feature_id(&ref_face, clip1);
                let fid2 = clipped_feature_id(&inc_face, clip2);
                let point = pos_ref * Point::from((p1.coords + p2.coords) / 2.0);
                out.push(TrackedContact::new(point, dist, pos_ref * normal, fid1, fid2));
            }
        }
    }
}

/// Maps a clip feature index (0 = first vertex, 1 = on face, 2 = second
/// vertex) to the corresponding packed feature id of the clipped face.
fn clipped_feature_id(face: &PolygonalFeature, clip: usize) -> u32 {
    match clip {
        0 => face.vids[0],
        2 => face.vids[1],
        _ => face.fid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Isometry;
    use approx::assert_relative_eq;

    #[test]
    fn overlapping_squares_produce_two_points() {
        let sq = ConvexPolygon::rectangle(1.0, 1.0).unwrap();
        let pos1 = Isometry::identity();
        let pos2 = Isometry::translation(1.5, 0.0);

        let mut out = Vec::new();
        contact_polygon_polygon(&pos1, &sq, &pos2, &sq, 0.0, &mut out);
        assert_eq!(out.len(), 2);

        for contact in &out {
            assert_relative_eq!(contact.dist, -0.5, epsilon = 1.0e-5);
            assert_relative_eq!(contact.normal.x, 1.0, epsilon = 1.0e-5);
            assert_relative_eq!(contact.point.x, 0.75, epsilon = 1.0e-5);
        }

        let mut ys = [out[0].point.y, out[1].point.y];
        ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_relative_eq!(ys[0], -1.0, epsilon = 1.0e-5);
        assert_relative_eq!(ys[1], 1.0, epsilon = 1.0e-5);
    }

    #[test]
    fn separated_squares_produce_nothing() {
        let sq = ConvexPolygon::rectangle(1.0, 1.0).unwrap();
        let pos1 = Isometry::identity();
        let pos2 = Isometry::translation(3.0, 0.0);

        let mut out = Vec::new();
        contact_polygon_polygon(&pos1, &sq, &pos2, &sq, 0.1, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn box_resting_on_wide_ground() {
        let ground = ConvexPolygon::rectangle(10.0, 1.0).unwrap();
        let cube = ConvexPolygon::rectangle(0.5, 0.5).unwrap();
        let pos_ground = Isometry::identity();
        let pos_cube = Isometry::translation(0.0, 1.4);

        let mut out = Vec::new();
        contact_polygon_polygon(&pos_ground, &ground, &pos_cube, &cube, 0.0, &mut out);
        assert_eq!(out.len(), 2);
        for contact in &out {
            assert_relative_eq!(contact.dist, -0.1, epsilon = 1.0e-5);
            assert_relative_eq!(contact.normal.y, 1.0, epsilon = 1.0e-5);
        }
    }

    #[test]
    fn flipped_pair_flips_the_normal() {
        let ground = ConvexPolygon::rectangle(10.0, 1.0).unwrap();
        let cube = ConvexPolygon::rectangle(0.5, 0.5).unwrap();
        let pos_ground = Isometry::identity();
        let pos_cube = Isometry::translation(0.0, 1.4);

        let mut out = Vec::new();
        contact_polygon_polygon(&pos_cube, &cube, &pos_ground, &ground, 0.0, &mut out);
        assert_eq!(out.len(), 2);
        for contact in &out {
            assert_relative_eq!(contact.normal.y, -1.0, epsilon = 1.0e-5);
        }
    }
}

//! Separating Axis Test over the edge normals of convex polygons.

use crate::math::{Isometry, Real};
use crate::shape::ConvexPolygon;

/// Finds the edge of `p1` whose outward normal maximizes the separation from `p2`.
///
/// `pos12` is the position of `p2` expressed in the local space of `p1`.
/// Returns the maximum separation (negative when the polygons overlap along
/// every axis of `p1`) and the index of the corresponding edge of `p1`.
pub fn polygon_polygon_find_local_separating_edge(
    p1: &ConvexPolygon,
    p2: &ConvexPolygon,
    pos12: &Isometry,
) -> (Real, usize) {
    let mut max_separation = -Real::MAX;
    let mut best_edge = 0;

    for (i, (pt1, n1)) in p1.points().iter().zip(p1.normals().iter()).enumerate() {
        // Deepest point of p2 along -n1, expressed in p1's local space.
        let neg_n1 = -**n1;
        let local_dir2 = pos12.inverse_transform_vector(&neg_n1);
        let pt2 = pos12 * p2.local_support_point(&local_dir2);
        let separation = (pt2 - pt1).dot(&**n1);

        if separation > max_separation {
            max_separation = separation;
            best_edge = i;
        }
    }

    (max_separation, best_edge)
}

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::PolygonalFeature;
use crate::utils;
use serde::{Deserialize, Serialize};

/// A 2D convex polygon with counter-clockwise winding.
///
/// Construction validates the vertex loop: fewer than three vertices,
/// degenerate (zero area) loops and non-convex loops are rejected. A loop
/// wound clockwise is silently reversed instead of rejected, since sandbox
/// users routinely hand-author polygons in either winding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvexPolygon {
    points: Vec<Point>,
    normals: Vec<UnitVector>,
}

impl ConvexPolygon {
    /// Creates a new 2D convex polygon from a closed vertex loop.
    ///
    /// Returns `None` if the loop has fewer than three distinct vertices,
    /// encloses no area, or is not convex. Clockwise loops are auto-corrected.
    pub fn try_from_polyline(mut points: Vec<Point>) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }

        let area2 = signed_area_x2(&points);
        if area2.abs() <= DEFAULT_EPSILON.sqrt() {
            return None;
        }
        if area2 < 0.0 {
            log::warn!("convex polygon wound clockwise; reversing winding");
            points.reverse();
        }

        // Compute all edge normals, dropping collinear vertices as we go.
        let eps = DEFAULT_EPSILON.sqrt();
        let mut normals = Vec::with_capacity(points.len());
        for i1 in 0..points.len() {
            let i2 = (i1 + 1) % points.len();
            normals.push(utils::ccw_face_normal([&points[i1], &points[i2]])?);
        }

        let mut nremoved = 0;
        if normals[0].dot(&*normals[normals.len() - 1]) > 1.0 - eps {
            nremoved = 1;
        }
        for i2 in 1..points.len() {
            let i1 = i2 - 1;
            if normals[i1].dot(&*normals[i2]) > 1.0 - eps {
                nremoved += 1;
            } else {
                points[i2 - nremoved] = points[i2];
                normals[i2 - nremoved] = normals[i2];
            }
        }

        let new_length = points.len() - nremoved;
        points.truncate(new_length);
        normals.truncate(new_length);

        if points.len() < 3 {
            return None;
        }

        // Convexity: successive edge normals must always turn left.
        for i1 in 0..normals.len() {
            let i2 = (i1 + 1) % normals.len();
            if normals[i1].perp(&*normals[i2]) < -eps {
                return None;
            }
        }

        Some(ConvexPolygon { points, normals })
    }

    /// Creates an axis-aligned rectangle centered at the shape-local origin.
    pub fn rectangle(half_width: Real, half_height: Real) -> Option<Self> {
        Self::try_from_polyline(vec![
            Point::new(-half_width, -half_height),
            Point::new(half_width, -half_height),
            Point::new(half_width, half_height),
            Point::new(-half_width, half_height),
        ])
    }

    /// The vertices of this convex polygon.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The outward unit normals of the edges of this convex polygon.
    #[inline]
    pub fn normals(&self) -> &[UnitVector] {
        &self.normals
    }

    /// The support point of this polygon in direction `dir`, in shape-local space.
    #[inline]
    pub fn local_support_point(&self, dir: &Vector) -> Point {
        utils::point_cloud_support_point(dir, &self.points)
    }

    /// The face of this polygon with the normal that maximizes the dot product with `dir`.
    pub fn support_face(&self, dir: &Vector) -> PolygonalFeature {
        let mut best_face = 0;
        let mut max_dot = self.normals[0].dot(dir);

        for i in 1..self.normals.len() {
            let dot = self.normals[i].dot(dir);

            if dot > max_dot {
                max_dot = dot;
                best_face = i;
            }
        }

        self.face(best_face)
    }

    /// The `i`-th face of this polygon as a polygonal feature.
    pub fn face(&self, i: usize) -> PolygonalFeature {
        let i2 = (i + 1) % self.points.len();
        PolygonalFeature {
            vertices: [self.points[i], self.points[i2]],
            vids: [i as u32 * 2, i2 as u32 * 2],
            fid: i as u32 * 2 + 1,
        }
    }

}

/// Twice the signed area of the polygon described by `points` (positive if CCW).
fn signed_area_x2(points: &[Point]) -> Real {
    let mut acc = 0.0;
    for i1 in 0..points.len() {
        let i2 = (i1 + 1) % points.len();
        acc += points[i1].coords.perp(&points[i2].coords);
    }
    acc
}

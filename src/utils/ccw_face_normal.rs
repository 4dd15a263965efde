use crate::math::{Point, UnitVector, Vector, DEFAULT_EPSILON};

/// Computes the direction pointing toward the right-hand-side of an oriented segment.
///
/// Returns `None` if the segment is degenerate.
#[inline]
pub fn ccw_face_normal(pts: [&Point; 2]) -> Option<UnitVector> {
    let ab = *pts[1] - *pts[0];
    let res = Vector::new(ab[1], -ab[0]);

    UnitVector::try_new(res, DEFAULT_EPSILON)
}

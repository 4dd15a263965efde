use crate::math::{Real, Vector};

/// Computes the cross product of a scalar (out-of-plane angular quantity) and a vector.
///
/// This is the 2D analogue of `w × v` with `w` along the z axis.
#[inline]
pub fn cross_scalar_vector(w: Real, v: &Vector) -> Vector {
    Vector::new(-w * v.y, w * v.x)
}

use crate::bounding_volume::Aabb;
use crate::math::{Real, DEFAULT_EPSILON};
use crate::query::Ray;

/// Computes the time of impact of a ray on an AABB using the slab method.
///
/// Returns `None` on a miss. A ray starting inside the AABB hits at time 0.
pub fn ray_toi_with_aabb(aabb: &Aabb, ray: &Ray, max_toi: Real) -> Option<Real> {
    let mut tmin: Real = 0.0;
    let mut tmax: Real = max_toi;

    for i in 0..2 {
        if ray.dir[i].abs() < DEFAULT_EPSILON {
            if ray.origin[i] < aabb.mins[i] || ray.origin[i] > aabb.maxs[i] {
                return None;
            }
        } else {
            let inv_d = 1.0 / ray.dir[i];
            let mut t1 = (aabb.mins[i] - ray.origin[i]) * inv_d;
            let mut t2 = (aabb.maxs[i] - ray.origin[i]) * inv_d;

            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }

            tmin = tmin.max(t1);
            tmax = tmax.min(t2);

            if tmin > tmax {
                return None;
            }
        }
    }

    Some(tmin)
}

use crate::math::{Real, DEFAULT_EPSILON};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::{ConvexPolygon, FeatureId};

impl RayCast for ConvexPolygon {
    /// Casts a ray on this polygon by clipping the ray parameter against every
    /// edge half-plane.
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_toi: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        let mut tmin: Real = 0.0;
        let mut tmax: Real = max_toi;
        let mut entry_normal = None;

        for (i, normal) in self.normals().iter().enumerate() {
            let normal = **normal;
            let denom = ray.dir.dot(&normal);
            let dist = (self.points()[i] - ray.origin).dot(&normal);

            if denom.abs() < DEFAULT_EPSILON {
                // Ray parallel to this edge: misses if fully outside its half-plane.
                if dist < 0.0 {
                    return None;
                }
            } else {
                let t = dist / denom;
                if denom < 0.0 {
                    // Entering through this edge.
                    if t > tmin {
                        tmin = t;
                        entry_normal = Some((i, normal));
                    }
                } else {
                    // Exiting through this edge.
                    tmax = tmax.min(t);
                }

                if tmin > tmax {
                    return None;
                }
            }
        }

        match entry_normal {
            Some((i, normal)) => Some(RayIntersection::new(
                tmin,
                normal,
                FeatureId::Face(i as u32),
            )),
            // The origin is inside the polygon.
            None if solid => Some(RayIntersection::new(
                0.0,
                crate::math::Vector::zeros(),
                FeatureId::Unknown,
            )),
            None => None,
        }
    }
}

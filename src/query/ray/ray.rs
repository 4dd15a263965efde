//! Traits and structures needed to cast rays.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::{FeatureId, Shape};
use serde::{Deserialize, Serialize};

/// A ray for ray-casting queries.
///
/// The direction does not need to be normalized; the time of impact returned
/// by the cast is expressed in units of `dir`'s length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point,
    /// Direction of the ray.
    pub dir: Vector,
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `dir`.
    #[inline]
    pub fn new(origin: Point, dir: Vector) -> Ray {
        Ray { origin, dir }
    }

    /// Computes the point at parameter `t` along this ray.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point {
        self.origin + self.dir * t
    }

    /// Transforms this ray by the inverse of `m`.
    #[inline]
    pub fn inverse_transform_by(&self, m: &Isometry) -> Ray {
        Ray::new(
            m.inverse_transform_point(&self.origin),
            m.inverse_transform_vector(&self.dir),
        )
    }
}

/// The result of a successful ray cast.
#[derive(Debug, Clone, Copy)]
pub struct RayIntersection {
    /// The time of impact of the ray with the shape.
    ///
    /// The hit point is `ray.origin + ray.dir * toi`.
    pub toi: Real,
    /// The unit outward normal of the shape at the hit point.
    pub normal: Vector,
    /// The feature of the shape hit by the ray.
    pub feature: FeatureId,
}

impl RayIntersection {
    /// Creates a new ray intersection.
    #[inline]
    pub fn new(toi: Real, normal: Vector, feature: FeatureId) -> RayIntersection {
        RayIntersection {
            toi,
            normal,
            feature,
        }
    }

    /// Transforms the normal of this intersection by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry) -> RayIntersection {
        RayIntersection::new(self.toi, m * self.normal, self.feature)
    }
}

/// Traits of objects which can be tested for intersection with a ray.
pub trait RayCast {
    /// Computes the time of impact and normal of `ray` on `self`, in the
    /// shape's local space.
    ///
    /// If `solid` is `true`, a ray starting inside of the shape hits at time 0.
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_toi: Real,
        solid: bool,
    ) -> Option<RayIntersection>;

    /// Computes the time of impact of `ray` on `self` positioned by `m`.
    #[inline]
    fn cast_ray_and_get_normal(
        &self,
        m: &Isometry,
        ray: &Ray,
        max_toi: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        let ls_ray = ray.inverse_transform_by(m);
        self.cast_local_ray_and_get_normal(&ls_ray, max_toi, solid)
            .map(|inter| inter.transform_by(m))
    }

    /// Computes the time of impact of `ray` on `self`, in the shape's local space.
    #[inline]
    fn cast_local_ray(&self, ray: &Ray, max_toi: Real, solid: bool) -> Option<Real> {
        self.cast_local_ray_and_get_normal(ray, max_toi, solid)
            .map(|inter| inter.toi)
    }
}

impl RayCast for Shape {
    #[inline]
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_toi: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        match self {
            Shape::Ball(b) => b.cast_local_ray_and_get_normal(ray, max_toi, solid),
            Shape::ConvexPolygon(p) => p.cast_local_ray_and_get_normal(ray, max_toi, solid),
        }
    }
}

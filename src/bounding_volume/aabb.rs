use crate::math::{Point, Real, Vector};
use serde::{Deserialize, Serialize};

/// An Axis-Aligned Bounding Box (AABB).
///
/// Invariant: `mins.x <= maxs.x` and `mins.y <= maxs.y`, except for the
/// result of [`Aabb::new_invalid`] which is the identity element of
/// [`Aabb::merged`].
#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
#[repr(C)]
pub struct Aabb {
    /// The point with the smallest coordinates of this AABB.
    pub mins: Point,
    /// The point with the greatest coordinates of this AABB.
    pub maxs: Point,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point, maxs: Point) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` and `maxs` swapped to the float
    /// extremes, so that merging it with any valid AABB yields that AABB.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Point::new(Real::MAX, Real::MAX),
            Point::new(-Real::MAX, -Real::MAX),
        )
    }

    /// Creates the smallest AABB containing all the given points.
    pub fn from_points<I: IntoIterator<Item = Point>>(pts: I) -> Self {
        let mut result = Self::new_invalid();
        for pt in pts {
            result.mins = result.mins.inf(&pt);
            result.maxs = result.maxs.sup(&pt);
        }
        result
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point {
        Point::from((self.mins.coords + self.maxs.coords) / 2.0)
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector {
        (self.maxs - self.mins) / 2.0
    }

    /// Does this AABB intersect `other`?
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.mins.x <= other.maxs.x
            && self.mins.y <= other.maxs.y
            && other.mins.x <= self.maxs.x
            && other.mins.y <= self.maxs.y
    }

    /// Does this AABB contain the given point?
    #[inline]
    pub fn contains_local_point(&self, pt: &Point) -> bool {
        pt.x >= self.mins.x && pt.x <= self.maxs.x && pt.y >= self.mins.y && pt.y <= self.maxs.y
    }

    /// The smallest AABB containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// Enlarges this AABB by `amount` on every side.
    #[inline]
    pub fn loosened(&self, amount: Real) -> Aabb {
        debug_assert!(amount >= 0.0, "the loosening margin must be positive");
        let fat = Vector::new(amount, amount);
        Aabb {
            mins: self.mins - fat,
            maxs: self.maxs + fat,
        }
    }

    /// Grows this AABB in the direction of `displacement`, keeping the
    /// opposite sides in place. Used to cover the space a moving body may
    /// sweep through during one step.
    #[inline]
    pub fn extended(&self, displacement: &Vector) -> Aabb {
        let mut result = *self;
        if displacement.x < 0.0 {
            result.mins.x += displacement.x;
        } else {
            result.maxs.x += displacement.x;
        }
        if displacement.y < 0.0 {
            result.mins.y += displacement.y;
        } else {
            result.maxs.y += displacement.y;
        }
        result
    }

    /// Does the circle centered at `center` with radius `radius` intersect this AABB?
    #[inline]
    pub fn intersects_ball(&self, center: &Point, radius: Real) -> bool {
        let clamped = Point::new(
            center.x.clamp(self.mins.x, self.maxs.x),
            center.y.clamp(self.mins.y, self.maxs.y),
        );
        (clamped - center).norm_squared() <= radius * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_and_intersect() {
        let a = Aabb::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let b = Aabb::new(Point::new(2.0, 0.0), Point::new(3.0, 1.0));
        assert!(!a.intersects(&b));

        let merged = a.merged(&b);
        assert_eq!(merged.mins, Point::new(0.0, 0.0));
        assert_eq!(merged.maxs, Point::new(3.0, 1.0));
        assert!(merged.intersects(&a));
        assert!(merged.intersects(&b));
    }

    #[test]
    fn extended_follows_displacement() {
        let a = Aabb::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let swept = a.extended(&Vector::new(-2.0, 3.0));
        assert_eq!(swept.mins, Point::new(-2.0, 0.0));
        assert_eq!(swept.maxs, Point::new(1.0, 4.0));
    }

    #[test]
    fn invalid_is_merge_identity() {
        let a = Aabb::new(Point::new(-1.0, 2.0), Point::new(0.5, 4.0));
        assert_eq!(Aabb::new_invalid().merged(&a), a);
    }
}

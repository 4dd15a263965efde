use crate::math::{Point, Real, Vector};
use crate::shape::Shape;
use crate::utils;
use std::iter::Sum;
use std::ops::Add;

/// The mass, center of mass, and angular inertia of a shape or set of shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MassProperties {
    /// The center of mass, in shape-local space.
    pub local_com: Point,
    /// The mass.
    pub mass: Real,
    /// The angular inertia taken about the center of mass.
    pub angular_inertia: Real,
}

impl MassProperties {
    /// Initializes the mass properties with the given center of mass, mass,
    /// and angular inertia about that center of mass.
    pub fn new(local_com: Point, mass: Real, angular_inertia: Real) -> Self {
        Self {
            local_com,
            mass,
            angular_inertia,
        }
    }

    /// The mass properties of a zero-mass object.
    pub fn zero() -> Self {
        Self::new(Point::origin(), 0.0, 0.0)
    }

    /// Computes the mass properties of `shape` with the given uniform density,
    /// translated by `offset` in body-local space.
    pub fn from_shape(shape: &Shape, density: Real, offset: &Vector) -> Self {
        let props = match shape {
            Shape::Ball(b) => Self::from_ball(density, b.radius),
            Shape::ConvexPolygon(p) => Self::from_convex_polygon(density, p.points()),
        };
        Self::new(props.local_com + offset, props.mass, props.angular_inertia)
    }

    /// The inverse mass, or 0.0 if the mass is zero.
    #[inline]
    pub fn inv_mass(&self) -> Real {
        utils::inv(self.mass)
    }

    /// The angular inertia taken about the body-local origin instead of the
    /// center of mass (parallel-axis theorem).
    #[inline]
    pub fn angular_inertia_about_origin(&self) -> Real {
        self.angular_inertia + self.mass * self.local_com.coords.norm_squared()
    }
}

impl Add for MassProperties {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mass = self.mass + other.mass;
        if mass == 0.0 {
            return Self::zero();
        }

        let local_com = Point::from(
            (self.local_com.coords * self.mass + other.local_com.coords * other.mass) / mass,
        );
        let angular_inertia = self.angular_inertia
            + self.mass * (self.local_com - local_com).norm_squared()
            + other.angular_inertia
            + other.mass * (other.local_com - local_com).norm_squared();

        Self::new(local_com, mass, angular_inertia)
    }
}

impl Sum for MassProperties {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sum_of_two_balls_side_by_side() {
        let a = MassProperties::new(Point::new(-1.0, 0.0), 2.0, 1.0);
        let b = MassProperties::new(Point::new(1.0, 0.0), 2.0, 1.0);
        let sum = a + b;

        assert_relative_eq!(sum.mass, 4.0);
        assert_relative_eq!(sum.local_com, Point::origin());
        // Each part contributes its own inertia plus m * d^2 with d = 1.
        assert_relative_eq!(sum.angular_inertia, 1.0 + 2.0 + 1.0 + 2.0);
    }

    #[test]
    fn zero_mass_sum_is_zero() {
        let z = MassProperties::zero() + MassProperties::zero();
        assert_eq!(z, MassProperties::zero());
        assert_eq!(z.inv_mass(), 0.0);
    }
}

use crate::mass_properties::MassProperties;
use crate::math::{Point, Real};
use std::f32::consts::PI;

impl MassProperties {
    /// Computes the mass properties of a ball (disc) of uniform density.
    pub fn from_ball(density: Real, radius: Real) -> Self {
        let area = PI * radius * radius;
        let mass = area * density;
        // Unit angular inertia of a disc about its center is r^2 / 2.
        let angular_inertia = mass * radius * radius / 2.0;
        Self::new(Point::origin(), mass, angular_inertia)
    }
}

use crate::mass_properties::MassProperties;
use crate::math::{Point, Real};

impl MassProperties {
    /// Computes the mass properties of a convex polygon of uniform density.
    ///
    /// `vertices` must describe a counter-clockwise convex loop; this is
    /// guaranteed by [`crate::shape::ConvexPolygon`] construction.
    pub fn from_convex_polygon(density: Real, vertices: &[Point]) -> MassProperties {
        let (area, com) = convex_polygon_area_and_center_of_mass(vertices);

        if area == 0.0 {
            return MassProperties::new(com, 0.0, 0.0);
        }

        // Second polar moment about the origin, for unit density.
        let mut i_origin = 0.0;
        for i1 in 0..vertices.len() {
            let i2 = (i1 + 1) % vertices.len();
            let a = vertices[i1].coords;
            let b = vertices[i2].coords;
            let cross = a.perp(&b);
            i_origin += cross * (a.dot(&a) + a.dot(&b) + b.dot(&b));
        }
        i_origin /= 12.0;

        let mass = area * density;
        // Shift the moment to the center of mass.
        let angular_inertia = i_origin * density - mass * com.coords.norm_squared();

        MassProperties::new(com, mass, angular_inertia.max(0.0))
    }
}

/// Computes the area and center-of-mass of a counter-clockwise convex polygon.
pub fn convex_polygon_area_and_center_of_mass(vertices: &[Point]) -> (Real, Point) {
    let mut area2 = 0.0;
    let mut com = Point::origin();

    for i1 in 0..vertices.len() {
        let i2 = (i1 + 1) % vertices.len();
        let a = vertices[i1].coords;
        let b = vertices[i2].coords;
        let cross = a.perp(&b);
        area2 += cross;
        com += (a + b) * cross;
    }

    if area2 == 0.0 {
        let center = vertices
            .iter()
            .fold(Point::origin(), |acc, p| acc + p.coords)
            / vertices.len().max(1) as Real;
        (0.0, center)
    } else {
        (area2 / 2.0, com / (3.0 * area2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unit_square() {
        let vertices = [
            Point::new(-0.5, -0.5),
            Point::new(0.5, -0.5),
            Point::new(0.5, 0.5),
            Point::new(-0.5, 0.5),
        ];
        let props = MassProperties::from_convex_polygon(2.0, &vertices);

        assert_relative_eq!(props.mass, 2.0, epsilon = 1.0e-6);
        assert_relative_eq!(props.local_com, Point::origin(), epsilon = 1.0e-6);
        // Rectangle: I = m * (w^2 + h^2) / 12.
        assert_relative_eq!(props.angular_inertia, 2.0 * 2.0 / 12.0, epsilon = 1.0e-6);
    }

    #[test]
    fn off_center_square_matches_shifted_inertia() {
        let centered = [
            Point::new(-0.5, -0.5),
            Point::new(0.5, -0.5),
            Point::new(0.5, 0.5),
            Point::new(-0.5, 0.5),
        ];
        let shifted: Vec<_> = centered
            .iter()
            .map(|p| Point::new(p.x + 3.0, p.y - 1.0))
            .collect();

        let c = MassProperties::from_convex_polygon(1.0, &centered);
        let s = MassProperties::from_convex_polygon(1.0, &shifted);

        assert_relative_eq!(s.mass, c.mass, epsilon = 1.0e-5);
        assert_relative_eq!(s.local_com, Point::new(3.0, -1.0), epsilon = 1.0e-4);
        // Inertia about the own center of mass is translation invariant.
        assert_relative_eq!(s.angular_inertia, c.angular_inertia, epsilon = 1.0e-3);
    }
}

//! Mass and angular inertia derived from shapes and densities.

pub use self::mass_properties::MassProperties;

mod mass_properties;
mod mass_properties_ball;
mod mass_properties_convex_polygon;

//! Explicit Euler integration of velocities and poses.

use crate::dynamics::RigidBody;
use crate::math::{Real, Rotation, Vector};

/// Integrates queued forces and gravity into the body's velocity.
///
/// Symplectic Euler: velocities update first so the subsequent pose update
/// uses the new velocity. Skips non-dynamic and sleeping bodies.
pub fn integrate_velocity(body: &mut RigidBody, gravity: &Vector, dt: Real) {
    if !body.is_dynamic() || body.is_sleeping() {
        return;
    }

    body.linvel += (gravity + body.force * body.inv_mass) * dt;
    body.angvel += body.torque * body.inv_angular_inertia * dt;
}

/// Integrates the body's pose from its current velocity.
///
/// Static and sleeping bodies are skipped; kinematic bodies advance along
/// their user-driven velocity.
pub fn integrate_position(body: &mut RigidBody, dt: Real) {
    if body.is_static() || body.is_sleeping() {
        return;
    }

    body.position.translation.vector += body.linvel * dt;
    body.position
        .append_rotation_wrt_center_mut(&Rotation::new(body.angvel * dt));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::{BodyKind, RigidBody};
    use crate::math::Point;
    use crate::shape::Shape;
    use approx::assert_relative_eq;

    #[test]
    fn free_fall_is_symplectic() {
        let mut body = RigidBody::new(BodyKind::Dynamic);
        body.attach_shape(Shape::ball(1.0).unwrap(), Vector::zeros(), 1.0);
        let gravity = Vector::new(0.0, -10.0);
        let dt = 0.5;

        integrate_velocity(&mut body, &gravity, dt);
        integrate_position(&mut body, dt);

        // The pose update sees the post-gravity velocity.
        assert_relative_eq!(body.linvel.y, -5.0, epsilon = 1.0e-6);
        assert_relative_eq!(body.position.translation.y, -2.5, epsilon = 1.0e-6);
    }

    #[test]
    fn static_body_never_moves() {
        let mut body = RigidBody::new(BodyKind::Static);
        body.linvel = Vector::new(1.0, 0.0);
        integrate_position(&mut body, 1.0);
        assert_eq!(body.position.translation.vector, Vector::zeros());
    }

    #[test]
    fn kinematic_body_follows_its_velocity() {
        let mut body = RigidBody::new(BodyKind::Kinematic);
        body.linvel = Vector::new(2.0, 0.0);
        integrate_velocity(&mut body, &Vector::new(0.0, -10.0), 1.0);
        integrate_position(&mut body, 1.0);

        // Gravity does not affect kinematic bodies.
        assert_relative_eq!(body.linvel.y, 0.0);
        assert_relative_eq!(body.position.translation.x, 2.0, epsilon = 1.0e-6);
    }

    #[test]
    fn rotation_is_about_the_body_origin() {
        let mut body = RigidBody::new(BodyKind::Dynamic);
        body.attach_shape(Shape::ball(1.0).unwrap(), Vector::zeros(), 1.0);
        body.position = crate::math::Isometry::translation(3.0, 0.0);
        body.angvel = std::f32::consts::FRAC_PI_2;

        integrate_position(&mut body, 1.0);

        // The translation is unchanged by a pure rotation.
        assert_relative_eq!(body.position.translation.x, 3.0, epsilon = 1.0e-6);
        let local = Point::new(1.0, 0.0);
        let world = body.position * local;
        assert_relative_eq!(world.y, 1.0, epsilon = 1.0e-5);
    }
}

//! Rigid bodies and the shapes attached to them.

use crate::bounding_volume::Aabb;
use crate::na;
use crate::mass_properties::MassProperties;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Shape;
use crate::utils;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A stable handle to a rigid body. Ids are never reused by a world, so a
/// stale handle is always detected instead of silently aliasing a newer body.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BodyId(pub u32);

/// A handle to a shape attached to a rigid body, unique within that body.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ShapeId(pub u32);

/// The motion regime of a rigid body.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    /// Never moves. Infinite mass, zero velocity.
    Static,
    /// Moves along a user-driven velocity, unaffected by forces or contacts.
    Kinematic,
    /// Fully simulated.
    Dynamic,
}

/// A shape attached to a body, with its body-local translation offset and
/// the uniform density used for mass recomputation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttachedShape {
    /// The id of this attachment within its body.
    pub id: ShapeId,
    /// The attached shape.
    pub shape: Shape,
    /// The body-local translation of the shape.
    pub offset: Vector,
    /// The uniform density of the shape.
    pub density: Real,
}

/// A simulated rigid body.
///
/// Inverse mass and inverse angular inertia are exactly `0.0` for static and
/// kinematic bodies; for a dynamic body they are recomputed from the attached
/// shapes' densities every time a shape is attached. The angular inertia is
/// taken about the body-local origin since bodies rotate about their pose
/// origin, not their center of mass.
#[derive(Clone, Debug)]
pub struct RigidBody {
    /// The motion regime of this body.
    pub kind: BodyKind,
    /// The world-space pose of this body.
    pub position: Isometry,
    /// The linear velocity of this body.
    pub linvel: Vector,
    /// The angular velocity of this body.
    pub angvel: Real,
    /// The restitution coefficient in `[0, 1]`.
    pub restitution: Real,
    /// The Coulomb friction coefficient.
    pub friction: Real,
    pub(crate) shapes: SmallVec<[AttachedShape; 1]>,
    pub(crate) next_shape_id: u32,
    pub(crate) mass: Real,
    pub(crate) inv_mass: Real,
    pub(crate) inv_angular_inertia: Real,
    pub(crate) force: Vector,
    pub(crate) torque: Real,
    pub(crate) sleeping: bool,
    pub(crate) sleep_timer: Real,
}

impl RigidBody {
    /// Creates a new body of the given kind at the origin, with no shapes.
    pub fn new(kind: BodyKind) -> Self {
        Self {
            kind,
            position: Isometry::identity(),
            linvel: Vector::zeros(),
            angvel: 0.0,
            restitution: 0.0,
            friction: 0.5,
            shapes: SmallVec::new(),
            next_shape_id: 0,
            mass: 0.0,
            inv_mass: 0.0,
            inv_angular_inertia: 0.0,
            force: Vector::zeros(),
            torque: 0.0,
            sleeping: false,
            sleep_timer: 0.0,
        }
    }

    /// Is this body fully simulated?
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.kind == BodyKind::Dynamic
    }

    /// Does this body never move?
    #[inline]
    pub fn is_static(&self) -> bool {
        self.kind == BodyKind::Static
    }

    /// Is this body currently asleep?
    #[inline]
    pub fn is_sleeping(&self) -> bool {
        self.sleeping
    }

    /// The mass of this body (0.0 until a shape is attached).
    #[inline]
    pub fn mass(&self) -> Real {
        self.mass
    }

    /// The inverse mass of this body (0.0 for static and kinematic bodies).
    #[inline]
    pub fn inv_mass(&self) -> Real {
        self.inv_mass
    }

    /// The inverse angular inertia of this body about its pose origin.
    #[inline]
    pub fn inv_angular_inertia(&self) -> Real {
        self.inv_angular_inertia
    }

    /// The shapes attached to this body.
    #[inline]
    pub fn shapes(&self) -> &[AttachedShape] {
        &self.shapes
    }

    /// Attaches a shape and recomputes the body's mass properties.
    pub fn attach_shape(&mut self, shape: Shape, offset: Vector, density: Real) -> ShapeId {
        let id = ShapeId(self.next_shape_id);
        self.next_shape_id += 1;
        self.shapes.push(AttachedShape {
            id,
            shape,
            offset,
            density,
        });
        self.recompute_mass_properties();
        id
    }

    /// Recomputes mass, inverse mass, and inverse angular inertia from the
    /// attached shapes.
    pub(crate) fn recompute_mass_properties(&mut self) {
        let props: MassProperties = self
            .shapes
            .iter()
            .map(|s| MassProperties::from_shape(&s.shape, s.density, &s.offset))
            .sum();

        self.mass = props.mass;
        if self.is_dynamic() {
            self.inv_mass = props.inv_mass();
            self.inv_angular_inertia = utils::inv(props.angular_inertia_about_origin());
        } else {
            self.inv_mass = 0.0;
            self.inv_angular_inertia = 0.0;
        }
    }

    /// Wakes this body up, resetting its sleep timer.
    pub fn wake_up(&mut self) {
        if !self.is_static() {
            self.sleeping = false;
            self.sleep_timer = 0.0;
        }
    }

    /// Puts this body to sleep, zeroing its velocities.
    pub(crate) fn put_to_sleep(&mut self) {
        self.sleeping = true;
        self.linvel = Vector::zeros();
        self.angvel = 0.0;
    }

    /// The world-space pose of the `i`-th attached shape.
    #[inline]
    pub fn shape_position(&self, shape: &AttachedShape) -> Isometry {
        self.position * na::Translation2::from(shape.offset)
    }

    /// The velocity of the material point of this body at the given world point.
    pub fn velocity_at_point(&self, point: &Point) -> Vector {
        let r = point - Point::from(self.position.translation.vector);
        self.linvel + utils::cross_scalar_vector(self.angvel, &r)
    }

    /// Applies an impulse at the body origin.
    pub(crate) fn apply_impulse(&mut self, impulse: Vector) {
        self.linvel += impulse * self.inv_mass;
    }

    /// Applies an impulse at the given world point, inducing a torque.
    pub(crate) fn apply_impulse_at_point(&mut self, impulse: Vector, point: Point) {
        let r = point - Point::from(self.position.translation.vector);
        self.linvel += impulse * self.inv_mass;
        self.angvel += r.perp(&impulse) * self.inv_angular_inertia;
    }

    /// The world-space AABB enclosing all the shapes of this body.
    pub fn compute_aabb(&self) -> Aabb {
        let mut aabb = Aabb::new_invalid();
        for shape in &self.shapes {
            aabb = aabb.merged(&shape.shape.compute_aabb(&self.shape_position(shape)));
        }
        aabb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn static_body_has_zero_inverse_mass() {
        let mut body = RigidBody::new(BodyKind::Static);
        body.attach_shape(Shape::rectangle(1.0, 1.0).unwrap(), Vector::zeros(), 1.0);
        assert_eq!(body.inv_mass(), 0.0);
        assert_eq!(body.inv_angular_inertia(), 0.0);
    }

    #[test]
    fn dynamic_body_mass_from_density() {
        let mut body = RigidBody::new(BodyKind::Dynamic);
        body.attach_shape(Shape::rectangle(1.0, 1.0).unwrap(), Vector::zeros(), 2.0);
        // 2x2 rectangle, density 2.
        assert_relative_eq!(body.mass(), 8.0, epsilon = 1.0e-6);
        assert!(body.inv_mass() > 0.0);
        assert!(body.inv_angular_inertia() > 0.0);
    }

    #[test]
    fn offset_shape_shifts_inertia() {
        let mut centered = RigidBody::new(BodyKind::Dynamic);
        centered.attach_shape(Shape::ball(0.5).unwrap(), Vector::zeros(), 1.0);

        let mut offset = RigidBody::new(BodyKind::Dynamic);
        offset.attach_shape(Shape::ball(0.5).unwrap(), Vector::new(2.0, 0.0), 1.0);

        // Same mass, larger inertia about the origin for the offset shape.
        assert_relative_eq!(centered.mass(), offset.mass(), epsilon = 1.0e-6);
        assert!(offset.inv_angular_inertia() < centered.inv_angular_inertia());
    }

    #[test]
    fn velocity_at_point_includes_rotation() {
        let mut body = RigidBody::new(BodyKind::Dynamic);
        body.attach_shape(Shape::ball(1.0).unwrap(), Vector::zeros(), 1.0);
        body.angvel = 1.0;
        let vel = body.velocity_at_point(&Point::new(1.0, 0.0));
        assert_relative_eq!(vel.x, 0.0, epsilon = 1.0e-6);
        assert_relative_eq!(vel.y, 1.0, epsilon = 1.0e-6);
    }
}

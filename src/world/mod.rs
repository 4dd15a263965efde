//! The simulation world: exclusive owner of bodies, joints, manifolds and
//! the stepping pipeline.

pub use self::error::WorldError;
pub use self::event::Event;
pub use self::scene::{BodyRecord, JointRecord, Scene};

pub mod error;
pub mod event;
pub mod scene;

use crate::dynamics::{
    integrator, island, solver, BodyId, BodyKind, IntegrationParameters, Joint, JointId,
    RigidBody, ShapeId,
};
use crate::math::{Isometry, Point, Real, Vector};
use crate::pipeline::{BroadPhase, ManifoldStore};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::query::ray::ray_toi_with_aabb;
use crate::shape::Shape;
use std::collections::BTreeMap;

/// A queued user action, applied at the start of the next step.
enum Intent {
    Force {
        body: BodyId,
        force: Vector,
        point: Option<Point>,
    },
    Impulse {
        body: BodyId,
        impulse: Vector,
        point: Option<Point>,
    },
    Explosion {
        center: Point,
        radius: Real,
        strength: Real,
    },
}

/// A single simulated scene.
///
/// The world owns every body, joint and contact manifold; the public API
/// never leaks references to internal stores. Stepping is synchronous and
/// deterministic: identical mutation sequences with identical timesteps
/// produce bit-identical worlds.
pub struct World {
    params: IntegrationParameters,
    bodies: Vec<Option<RigidBody>>,
    joints: BTreeMap<JointId, Joint>,
    next_joint_id: u32,
    manifold_store: ManifoldStore,
    intents: Vec<Intent>,
    events: Vec<Event>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates an empty world with default parameters.
    pub fn new() -> Self {
        Self {
            params: IntegrationParameters::default(),
            bodies: Vec::new(),
            joints: BTreeMap::new(),
            next_joint_id: 0,
            manifold_store: ManifoldStore::new(),
            intents: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Creates a world with a static ground slab whose top surface is the
    /// horizontal line at `y`.
    pub fn with_ground(half_width: Real, y: Real) -> Result<Self, WorldError> {
        let mut world = Self::new();
        let ground = world.create_body(BodyKind::Static);
        let shape = Shape::rectangle(half_width, 1.0).ok_or(WorldError::InvalidGeometry(
            "ground half-width must be finite and positive",
        ))?;
        world.attach_shape(ground, shape, Vector::zeros(), 1.0)?;
        world.set_position(ground, Isometry::translation(0.0, y - 1.0))?;
        Ok(world)
    }

    /// The simulation parameters.
    pub fn params(&self) -> &IntegrationParameters {
        &self.params
    }

    /// Mutable access to the simulation parameters.
    pub fn params_mut(&mut self) -> &mut IntegrationParameters {
        &mut self.params
    }

    /// The gravity acceleration.
    pub fn gravity(&self) -> Vector {
        self.params.gravity
    }

    /// Sets the gravity acceleration.
    pub fn set_gravity(&mut self, gravity: Vector) {
        self.params.gravity = gravity;
    }

    /// Creates a new body with no shapes at the origin.
    pub fn create_body(&mut self, kind: BodyKind) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(Some(RigidBody::new(kind)));
        id
    }

    /// The body with the given id, if it is still alive.
    pub fn body(&self, id: BodyId) -> Option<&RigidBody> {
        self.bodies.get(id.0 as usize)?.as_ref()
    }

    /// Iterates over all live bodies in id order.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &RigidBody)> {
        self.bodies
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| Some((BodyId(i as u32), slot.as_ref()?)))
    }

    /// The joint with the given id, if it is still alive.
    pub fn joint(&self, id: JointId) -> Option<&Joint> {
        self.joints.get(&id)
    }

    /// Iterates over all live joints in id order.
    pub fn joints(&self) -> impl Iterator<Item = (JointId, &Joint)> {
        self.joints.iter().map(|(id, joint)| (*id, joint))
    }

    /// Attaches a shape to a body, recomputing its mass properties.
    pub fn attach_shape(
        &mut self,
        body: BodyId,
        shape: Shape,
        offset: Vector,
        density: Real,
    ) -> Result<ShapeId, WorldError> {
        if !density.is_finite() || density <= 0.0 {
            return Err(WorldError::InvalidParameters(
                "shape density must be finite and positive",
            ));
        }
        let body = self.body_mut(body)?;
        body.wake_up();
        Ok(body.attach_shape(shape, offset, density))
    }

    /// Attaches a ball shape built from a raw radius.
    pub fn attach_ball(
        &mut self,
        body: BodyId,
        radius: Real,
        offset: Vector,
        density: Real,
    ) -> Result<ShapeId, WorldError> {
        let shape = Shape::ball(radius).ok_or(WorldError::InvalidGeometry(
            "ball radius must be finite and positive",
        ))?;
        self.attach_shape(body, shape, offset, density)
    }

    /// Attaches a convex polygon built from a raw vertex loop.
    pub fn attach_convex_polygon(
        &mut self,
        body: BodyId,
        points: Vec<Point>,
        offset: Vector,
        density: Real,
    ) -> Result<ShapeId, WorldError> {
        let shape = Shape::convex_polygon(points).ok_or(WorldError::InvalidGeometry(
            "polygon must be a convex loop of at least 3 vertices enclosing an area",
        ))?;
        self.attach_shape(body, shape, offset, density)
    }

    /// Destroys a body, removing the joints attached to it and waking the
    /// bodies it was touching. Its id is never reused.
    pub fn destroy_body(&mut self, id: BodyId) -> Result<(), WorldError> {
        self.body_mut(id)?;

        for touching in self.manifold_store.bodies_in_contact_with(id) {
            self.wake_body_emitting(touching);
        }

        let mut orphaned = Vec::new();
        self.joints.retain(|_, joint| {
            let attached = joint.body1 == id || joint.body2 == Some(id);
            if attached {
                orphaned.push(joint.body1);
                if let Some(body2) = joint.body2 {
                    orphaned.push(body2);
                }
            }
            !attached
        });
        for other in orphaned {
            if other != id {
                self.wake_body_emitting(other);
            }
        }

        self.bodies[id.0 as usize] = None;
        Ok(())
    }

    /// Sets a body's pose and wakes it.
    pub fn set_position(&mut self, id: BodyId, position: Isometry) -> Result<(), WorldError> {
        if !position.translation.vector.x.is_finite()
            || !position.translation.vector.y.is_finite()
            || !position.rotation.angle().is_finite()
        {
            return Err(WorldError::InvalidParameters("position must be finite"));
        }
        let body = self.body_mut(id)?;
        body.position = position;
        body.wake_up();
        Ok(())
    }

    /// Sets a body's velocities and wakes it.
    pub fn set_velocity(
        &mut self,
        id: BodyId,
        linvel: Vector,
        angvel: Real,
    ) -> Result<(), WorldError> {
        if !linvel.x.is_finite() || !linvel.y.is_finite() || !angvel.is_finite() {
            return Err(WorldError::InvalidParameters("velocity must be finite"));
        }
        let body = self.body_mut(id)?;
        body.linvel = linvel;
        body.angvel = angvel;
        body.wake_up();
        Ok(())
    }

    /// Sets a body's restitution coefficient.
    pub fn set_restitution(&mut self, id: BodyId, restitution: Real) -> Result<(), WorldError> {
        if !(0.0..=1.0).contains(&restitution) {
            return Err(WorldError::InvalidParameters(
                "restitution must lie in [0, 1]",
            ));
        }
        self.body_mut(id)?.restitution = restitution;
        Ok(())
    }

    /// Sets a body's friction coefficient.
    pub fn set_friction(&mut self, id: BodyId, friction: Real) -> Result<(), WorldError> {
        if !friction.is_finite() || friction < 0.0 {
            return Err(WorldError::InvalidParameters(
                "friction must be finite and non-negative",
            ));
        }
        self.body_mut(id)?.friction = friction;
        Ok(())
    }

    /// Queues a force (and the torque induced by an off-center application
    /// point) to be applied over the next step.
    pub fn apply_force(
        &mut self,
        body: BodyId,
        force: Vector,
        point: Option<Point>,
    ) -> Result<(), WorldError> {
        self.check_body(body)?;
        if !force.x.is_finite() || !force.y.is_finite() {
            return Err(WorldError::InvalidParameters("force must be finite"));
        }
        self.intents.push(Intent::Force { body, force, point });
        Ok(())
    }

    /// Queues an instantaneous velocity change to be applied at the start of
    /// the next step.
    pub fn apply_impulse(
        &mut self,
        body: BodyId,
        impulse: Vector,
        point: Option<Point>,
    ) -> Result<(), WorldError> {
        self.check_body(body)?;
        if !impulse.x.is_finite() || !impulse.y.is_finite() {
            return Err(WorldError::InvalidParameters("impulse must be finite"));
        }
        self.intents.push(Intent::Impulse {
            body,
            impulse,
            point,
        });
        Ok(())
    }

    /// Queues a radial blast: every dynamic body whose AABB overlaps the
    /// blast circle receives an outward impulse that falls off linearly with
    /// the distance of its origin from the center, and wakes up.
    pub fn apply_explosion(
        &mut self,
        center: Point,
        radius: Real,
        strength: Real,
    ) -> Result<(), WorldError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(WorldError::InvalidParameters(
                "explosion radius must be finite and positive",
            ));
        }
        if !strength.is_finite() {
            return Err(WorldError::InvalidParameters(
                "explosion strength must be finite",
            ));
        }
        self.intents.push(Intent::Explosion {
            center,
            radius,
            strength,
        });
        Ok(())
    }

    /// Adds a joint between live bodies.
    pub fn add_joint(&mut self, joint: Joint) -> Result<JointId, WorldError> {
        self.check_body(joint.body1)?;
        if let Some(body2) = joint.body2 {
            self.check_body(body2)?;
        }
        if let Some(threshold) = joint.breaking_impulse {
            if !threshold.is_finite() || threshold <= 0.0 {
                return Err(WorldError::InvalidParameters(
                    "breaking impulse must be finite and positive",
                ));
            }
        }

        let id = JointId(self.next_joint_id);
        self.next_joint_id += 1;
        self.wake_body_emitting(joint.body1);
        if let Some(body2) = joint.body2 {
            self.wake_body_emitting(body2);
        }
        self.joints.insert(id, joint);
        Ok(id)
    }

    /// Removes a joint without breaking it.
    pub fn remove_joint(&mut self, id: JointId) -> Result<(), WorldError> {
        let joint = self
            .joints
            .remove(&id)
            .ok_or(WorldError::UnknownJoint(id))?;
        self.wake_body_emitting(joint.body1);
        if let Some(body2) = joint.body2 {
            self.wake_body_emitting(body2);
        }
        Ok(())
    }

    /// Advances the simulation by `dt` seconds.
    pub fn step(&mut self, dt: Real) -> Result<(), WorldError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(WorldError::InvalidTimestep(dt));
        }

        let mut step_events = Vec::new();

        self.drain_intents(&mut step_events);

        for slot in self.bodies.iter_mut().flatten() {
            integrator::integrate_velocity(slot, &self.params.gravity, dt);
            slot.force = Vector::zeros();
            slot.torque = 0.0;
        }

        let broad_phase = BroadPhase::new(self.params.broad_phase_cell_size);
        let pairs = broad_phase.find_pairs(&self.bodies, dt, self.params.broad_phase_margin);

        let (began, ended) =
            self.manifold_store
                .update(&pairs, &self.bodies, self.params.prediction_distance);

        island::wake_connected(
            &mut self.bodies,
            self.manifold_store.manifolds(),
            &self.joints,
            &mut step_events,
        );

        let broken = solver::solve_velocity_constraints(
            &mut self.bodies,
            self.manifold_store.manifolds_mut(),
            &mut self.joints,
            &self.params,
            dt,
        );
        for id in broken {
            if let Some(joint) = self.joints.remove(&id) {
                log::debug!("joint {:?} broke", id);
                self.wake_body_emitting(joint.body1);
                if let Some(body2) = joint.body2 {
                    self.wake_body_emitting(body2);
                }
                step_events.push(Event::JointBroken(id));
            }
        }

        for slot in self.bodies.iter_mut().flatten() {
            integrator::integrate_position(slot, dt);
        }

        island::update_sleep(
            &mut self.bodies,
            self.manifold_store.manifolds(),
            &self.joints,
            self.params.sleep_linear_threshold,
            self.params.sleep_angular_threshold,
            self.params.time_to_sleep,
            dt,
            &mut step_events,
        );

        step_events.extend(began.into_iter().map(|pair| {
            let (id1, id2) = *pair;
            Event::CollisionBegan(id1, id2)
        }));
        step_events.extend(ended.into_iter().map(|pair| {
            let (id1, id2) = *pair;
            Event::CollisionEnded(id1, id2)
        }));
        step_events.sort_unstable();
        self.events.extend(step_events);

        Ok(())
    }

    /// The events accumulated since the last drain.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Takes the accumulated events, leaving the buffer empty.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// The ids of all bodies containing the given world point, in id order.
    pub fn query_point(&self, point: &Point) -> Vec<BodyId> {
        self.bodies()
            .filter(|(_, body)| {
                body.shapes().iter().any(|shape| {
                    shape
                        .shape
                        .contains_point(&body.shape_position(shape), point)
                })
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Casts a ray and returns every hit body with its nearest intersection,
    /// closest hits first. Ties are broken by body id.
    pub fn query_raycast(&self, ray: &Ray, max_toi: Real) -> Vec<(BodyId, RayIntersection)> {
        let mut hits = Vec::new();

        for (id, body) in self.bodies() {
            if body.shapes().is_empty() {
                continue;
            }
            if ray_toi_with_aabb(&body.compute_aabb(), ray, max_toi).is_none() {
                continue;
            }

            let mut best: Option<RayIntersection> = None;
            for shape in body.shapes() {
                let pos = body.shape_position(shape);
                if let Some(hit) = shape.shape.cast_ray_and_get_normal(&pos, ray, max_toi, true) {
                    if best.as_ref().map_or(true, |b| hit.toi < b.toi) {
                        best = Some(hit);
                    }
                }
            }
            if let Some(hit) = best {
                hits.push((id, hit));
            }
        }

        hits.sort_by(|a, b| a.1.toi.total_cmp(&b.1.toi).then(a.0.cmp(&b.0)));
        hits
    }

    /// Snapshots this world into a flat serializable scene.
    pub fn to_scene(&self) -> Scene {
        Scene {
            params: self.params,
            bodies: self
                .bodies()
                .map(|(id, body)| BodyRecord {
                    id: id.0,
                    kind: body.kind,
                    position: body.position,
                    linvel: body.linvel,
                    angvel: body.angvel,
                    restitution: body.restitution,
                    friction: body.friction,
                    shapes: body.shapes().to_vec(),
                    next_shape_id: body.next_shape_id,
                    sleeping: body.sleeping,
                    sleep_timer: body.sleep_timer,
                })
                .collect(),
            joints: self
                .joints()
                .map(|(id, joint)| JointRecord {
                    id: id.0,
                    joint: joint.clone(),
                })
                .collect(),
            next_body_id: self.bodies.len() as u32,
            next_joint_id: self.next_joint_id,
        }
    }

    /// Rebuilds a world from a scene snapshot.
    ///
    /// The rebuilt world hands out the same ids the snapshotted world would
    /// have, and simulates identically under identical input sequences.
    pub fn from_scene(scene: &Scene) -> Result<World, WorldError> {
        let mut world = World::new();
        world.params = scene.params;
        world.bodies = vec![None; scene.next_body_id as usize];

        for record in &scene.bodies {
            let slot = world
                .bodies
                .get_mut(record.id as usize)
                .ok_or(WorldError::InvalidParameters("body id out of range"))?;
            if slot.is_some() {
                return Err(WorldError::InvalidParameters("duplicate body id"));
            }

            let mut body = RigidBody::new(record.kind);
            body.position = record.position;
            body.linvel = record.linvel;
            body.angvel = record.angvel;
            body.restitution = record.restitution;
            body.friction = record.friction;
            body.shapes = record.shapes.iter().cloned().collect();
            body.next_shape_id = record.next_shape_id;
            body.sleeping = record.sleeping;
            body.sleep_timer = record.sleep_timer;
            body.recompute_mass_properties();
            *slot = Some(body);
        }

        for record in &scene.joints {
            if record.id >= scene.next_joint_id {
                return Err(WorldError::InvalidParameters("joint id out of range"));
            }
            let joint = &record.joint;
            if world.body(joint.body1).is_none() {
                return Err(WorldError::UnknownBody(joint.body1));
            }
            if let Some(body2) = joint.body2 {
                if world.body(body2).is_none() {
                    return Err(WorldError::UnknownBody(body2));
                }
            }
            if world.joints.insert(JointId(record.id), joint.clone()).is_some() {
                return Err(WorldError::InvalidParameters("duplicate joint id"));
            }
        }
        world.next_joint_id = scene.next_joint_id;

        Ok(world)
    }

    fn check_body(&self, id: BodyId) -> Result<(), WorldError> {
        self.body(id).map(|_| ()).ok_or(WorldError::UnknownBody(id))
    }

    fn body_mut(&mut self, id: BodyId) -> Result<&mut RigidBody, WorldError> {
        self.bodies
            .get_mut(id.0 as usize)
            .and_then(|slot| slot.as_mut())
            .ok_or(WorldError::UnknownBody(id))
    }

    fn wake_body_emitting(&mut self, id: BodyId) {
        if let Ok(body) = self.body_mut(id) {
            if body.is_sleeping() {
                body.wake_up();
                self.events.push(Event::BodyWoke(id));
            } else {
                body.wake_up();
            }
        }
    }

    fn drain_intents(&mut self, events: &mut Vec<Event>) {
        let intents = std::mem::take(&mut self.intents);
        for intent in intents {
            match intent {
                Intent::Force { body, force, point } => {
                    if let Some(target) = self.bodies[body.0 as usize].as_mut() {
                        if target.is_sleeping() {
                            target.wake_up();
                            events.push(Event::BodyWoke(body));
                        }
                        target.force += force;
                        if let Some(point) = point {
                            let r = point - Point::from(target.position.translation.vector);
                            target.torque += r.perp(&force);
                        }
                    }
                }
                Intent::Impulse {
                    body,
                    impulse,
                    point,
                } => {
                    if let Some(target) = self.bodies[body.0 as usize].as_mut() {
                        if target.is_sleeping() {
                            target.wake_up();
                            events.push(Event::BodyWoke(body));
                        }
                        match point {
                            Some(point) => target.apply_impulse_at_point(impulse, point),
                            None => target.apply_impulse(impulse),
                        }
                    }
                }
                Intent::Explosion {
                    center,
                    radius,
                    strength,
                } => {
                    self.apply_explosion_now(center, radius, strength, events);
                }
            }
        }
    }

    fn apply_explosion_now(
        &mut self,
        center: Point,
        radius: Real,
        strength: Real,
        events: &mut Vec<Event>,
    ) {
        for (i, slot) in self.bodies.iter_mut().enumerate() {
            let Some(body) = slot else { continue };
            if !body.is_dynamic() || body.shapes().is_empty() {
                continue;
            }
            if !body.compute_aabb().intersects_ball(&center, radius) {
                continue;
            }

            let origin = Point::from(body.position.translation.vector);
            let sep = origin - center;
            let dist = sep.norm();
            if dist >= radius {
                continue;
            }

            let dir = if dist > crate::math::DEFAULT_EPSILON {
                sep / dist
            } else {
                Vector::x()
            };
            let falloff = 1.0 - dist / radius;

            if body.is_sleeping() {
                body.wake_up();
                events.push(Event::BodyWoke(BodyId(i as u32)));
            }
            body.apply_impulse(dir * (strength * falloff));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn unknown_body_is_rejected() {
        let mut world = World::new();
        let ghost = BodyId(42);
        assert_eq!(
            world.apply_impulse(ghost, Vector::x(), None),
            Err(WorldError::UnknownBody(ghost))
        );
        assert_eq!(world.destroy_body(ghost), Err(WorldError::UnknownBody(ghost)));
    }

    #[test]
    fn invalid_timestep_is_rejected() {
        let mut world = World::new();
        assert_eq!(world.step(0.0), Err(WorldError::InvalidTimestep(0.0)));
        assert!(matches!(
            world.step(Real::NAN),
            Err(WorldError::InvalidTimestep(t)) if t.is_nan()
        ));
    }

    #[test]
    fn destroyed_ids_are_never_reused() {
        let mut world = World::new();
        let first = world.create_body(BodyKind::Dynamic);
        world.destroy_body(first).unwrap();
        let second = world.create_body(BodyKind::Dynamic);
        assert_ne!(first, second);
        assert!(world.body(first).is_none());
        assert!(world.body(second).is_some());
    }

    #[test]
    fn invalid_geometry_is_rejected() {
        let mut world = World::new();
        let body = world.create_body(BodyKind::Dynamic);
        assert_eq!(
            world.attach_ball(body, -1.0, Vector::zeros(), 1.0),
            Err(WorldError::InvalidGeometry(
                "ball radius must be finite and positive"
            ))
        );
        let err = world
            .attach_convex_polygon(
                body,
                vec![Point::origin(), Point::new(1.0, 0.0)],
                Vector::zeros(),
                1.0,
            )
            .unwrap_err();
        assert!(matches!(err, WorldError::InvalidGeometry(_)));
    }

    #[test]
    fn queued_impulse_applies_on_next_step() {
        let mut world = World::new();
        world.set_gravity(Vector::zeros());
        let body = world.create_body(BodyKind::Dynamic);
        world
            .attach_ball(body, 0.5, Vector::zeros(), 1.0)
            .unwrap();

        let mass = world.body(body).unwrap().mass();
        world.apply_impulse(body, Vector::new(mass, 0.0), None).unwrap();
        assert_eq!(world.body(body).unwrap().linvel, Vector::zeros());

        world.step(1.0 / 60.0).unwrap();
        assert_relative_eq!(world.body(body).unwrap().linvel.x, 1.0, epsilon = 1.0e-5);
    }

    #[test]
    fn explosion_pushes_bodies_outward() {
        let mut world = World::new();
        world.set_gravity(Vector::zeros());
        let left = world.create_body(BodyKind::Dynamic);
        world.attach_ball(left, 0.5, Vector::zeros(), 1.0).unwrap();
        world
            .set_position(left, Isometry::translation(-1.0, 0.0))
            .unwrap();
        let right = world.create_body(BodyKind::Dynamic);
        world.attach_ball(right, 0.5, Vector::zeros(), 1.0).unwrap();
        world
            .set_position(right, Isometry::translation(1.0, 0.0))
            .unwrap();
        let far = world.create_body(BodyKind::Dynamic);
        world.attach_ball(far, 0.5, Vector::zeros(), 1.0).unwrap();
        world
            .set_position(far, Isometry::translation(100.0, 0.0))
            .unwrap();

        world.apply_explosion(Point::origin(), 5.0, 10.0).unwrap();
        world.step(1.0 / 60.0).unwrap();

        assert!(world.body(left).unwrap().linvel.x < 0.0);
        assert!(world.body(right).unwrap().linvel.x > 0.0);
        assert_eq!(world.body(far).unwrap().linvel, Vector::zeros());
    }

    #[test]
    fn with_ground_supports_a_point_query() {
        let world = World::with_ground(50.0, 0.0).unwrap();
        assert_eq!(world.query_point(&Point::new(0.0, -0.5)), vec![BodyId(0)]);
        assert!(world.query_point(&Point::new(0.0, 0.5)).is_empty());
    }

    #[test]
    fn raycast_returns_nearest_first() {
        let mut world = World::new();
        let near = world.create_body(BodyKind::Static);
        world.attach_ball(near, 0.5, Vector::zeros(), 1.0).unwrap();
        world
            .set_position(near, Isometry::translation(2.0, 0.0))
            .unwrap();
        let far_body = world.create_body(BodyKind::Static);
        world.attach_ball(far_body, 0.5, Vector::zeros(), 1.0).unwrap();
        world
            .set_position(far_body, Isometry::translation(5.0, 0.0))
            .unwrap();

        let ray = Ray::new(Point::origin(), Vector::x());
        let hits = world.query_raycast(&ray, 100.0);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, near);
        assert_relative_eq!(hits[0].1.toi, 1.5, epsilon = 1.0e-5);
        assert_eq!(hits[1].0, far_body);
    }

    #[test]
    fn rejected_mutation_leaves_state_untouched() {
        let mut world = World::new();
        let body = world.create_body(BodyKind::Dynamic);
        world.attach_ball(body, 0.5, Vector::zeros(), 1.0).unwrap();

        assert!(world.set_restitution(body, 2.0).is_err());
        assert_eq!(world.body(body).unwrap().restitution, 0.0);

        assert!(world.set_friction(body, -1.0).is_err());
        assert_eq!(world.body(body).unwrap().friction, 0.5);
        world.set_friction(body, 0.9).unwrap();
        assert_eq!(world.body(body).unwrap().friction, 0.9);
    }

    #[test]
    fn non_finite_pose_and_velocity_are_rejected() {
        let mut world = World::new();
        let body = world.create_body(BodyKind::Dynamic);
        world.attach_ball(body, 0.5, Vector::zeros(), 1.0).unwrap();
        world
            .set_position(body, Isometry::translation(1.0, 2.0))
            .unwrap();

        assert_eq!(
            world.set_position(body, Isometry::translation(Real::NAN, 0.0)),
            Err(WorldError::InvalidParameters("position must be finite"))
        );
        assert_eq!(
            world.set_position(body, Isometry::translation(Real::INFINITY, 0.0)),
            Err(WorldError::InvalidParameters("position must be finite"))
        );
        assert_eq!(
            world.set_velocity(body, Vector::new(Real::NAN, 0.0), 0.0),
            Err(WorldError::InvalidParameters("velocity must be finite"))
        );
        assert_eq!(
            world.set_velocity(body, Vector::zeros(), Real::INFINITY),
            Err(WorldError::InvalidParameters("velocity must be finite"))
        );

        // The rejected mutations left the body untouched.
        let body = world.body(body).unwrap();
        assert_eq!(body.position, Isometry::translation(1.0, 2.0));
        assert_eq!(body.linvel, Vector::zeros());
        assert_eq!(body.angvel, 0.0);
    }

    #[test]
    fn queued_force_accelerates_over_the_step() {
        let mut world = World::new();
        world.set_gravity(Vector::zeros());
        let body = world.create_body(BodyKind::Dynamic);
        world.attach_ball(body, 0.5, Vector::zeros(), 1.0).unwrap();

        let mass = world.body(body).unwrap().mass();
        let dt = 1.0 / 60.0;
        world.apply_force(body, Vector::new(mass * 3.0, 0.0), None).unwrap();
        world.step(dt).unwrap();
        assert_relative_eq!(world.body(body).unwrap().linvel.x, 3.0 * dt, epsilon = 1.0e-5);

        // Forces do not persist across steps.
        world.step(dt).unwrap();
        assert_relative_eq!(world.body(body).unwrap().linvel.x, 3.0 * dt, epsilon = 1.0e-5);
    }

    #[test]
    fn params_are_tunable_in_place() {
        let mut world = World::new();
        world.params_mut().gravity = Vector::new(0.0, -1.62);
        assert_eq!(world.gravity(), Vector::new(0.0, -1.62));
        world.params_mut().velocity_iterations = 4;
        assert_eq!(world.params().velocity_iterations, 4);
    }
}

//! Warm-started sequential-impulse velocity solver for contacts and joints.

use crate::dynamics::{
    BodyId, IntegrationParameters, Joint, JointId, JointKind, RigidBody,
};
use crate::math::{Matrix, Point, Real, Vector};
use crate::query::{ContactManifold, MAX_MANIFOLD_POINTS};
use crate::utils::{self, SortedPair};
use arrayvec::ArrayVec;
use std::collections::BTreeMap;

/// The velocity state of one body slot during the solve.
#[derive(Copy, Clone, Default)]
struct SolverBody {
    linvel: Vector,
    angvel: Real,
    im: Real,
    ii: Real,
}

struct VelocityConstraintPoint {
    r1: Vector,
    r2: Vector,
    normal: Vector,
    tangent: Vector,
    normal_mass: Real,
    tangent_mass: Real,
    velocity_bias: Real,
    normal_impulse: Real,
    tangent_impulse: Real,
}

struct ContactConstraint {
    pair: SortedPair<BodyId>,
    index1: usize,
    index2: usize,
    friction: Real,
    points: ArrayVec<VelocityConstraintPoint, MAX_MANIFOLD_POINTS>,
}

enum JointMass {
    Point(Matrix),
    Axis { dir: Vector, mass: Real },
}

struct JointConstraint {
    id: JointId,
    index1: usize,
    index2: Option<usize>,
    r1: Vector,
    r2: Vector,
    mass: JointMass,
    bias: Vector,
    impulse: Vector,
}

/// Solves all contact and joint velocity constraints, writing the resulting
/// velocities back into the bodies and the accumulated impulses back into the
/// manifolds and joints for warm starting.
///
/// This is a fixed-point Gauss-Seidel relaxation; it does not solve the
/// system exactly, it converges toward it over the configured iterations.
/// Returns the joints whose accumulated impulse exceeded their breaking
/// threshold, in id order.
pub fn solve_velocity_constraints(
    bodies: &mut [Option<RigidBody>],
    manifolds: &mut BTreeMap<SortedPair<BodyId>, ContactManifold>,
    joints: &mut BTreeMap<JointId, Joint>,
    params: &IntegrationParameters,
    dt: Real,
) -> Vec<JointId> {
    let inv_dt = utils::inv(dt);

    let mut solver_bodies: Vec<SolverBody> = bodies
        .iter()
        .map(|slot| match slot {
            Some(body) => SolverBody {
                linvel: body.linvel,
                angvel: body.angvel,
                im: body.inv_mass,
                ii: body.inv_angular_inertia,
            },
            None => SolverBody::default(),
        })
        .collect();

    let mut contacts = init_contact_constraints(bodies, manifolds, params, inv_dt);
    let mut joint_constraints = init_joint_constraints(bodies, joints, params, inv_dt);

    warm_start(&mut solver_bodies, &contacts, &joint_constraints);

    for _ in 0..params.velocity_iterations {
        for jc in &mut joint_constraints {
            solve_joint(&mut solver_bodies, jc);
        }
        for cc in &mut contacts {
            solve_contact(&mut solver_bodies, cc);
        }
    }

    // Write velocities back to the awake dynamic bodies.
    for (slot, solver_body) in bodies.iter_mut().zip(&solver_bodies) {
        if let Some(body) = slot {
            if body.is_dynamic() && !body.is_sleeping() {
                body.linvel = solver_body.linvel;
                body.angvel = solver_body.angvel;
            }
        }
    }

    // Carry the accumulated impulses over for next step's warm start.
    for cc in &contacts {
        if let Some(manifold) = manifolds.get_mut(&cc.pair) {
            for (pt, vc) in manifold.points.iter_mut().zip(&cc.points) {
                pt.normal_impulse = vc.normal_impulse;
                pt.tangent_impulse = vc.tangent_impulse;
            }
        }
    }

    let mut broken = Vec::new();
    for jc in &joint_constraints {
        if let Some(joint) = joints.get_mut(&jc.id) {
            joint.impulse = jc.impulse;
            if let Some(threshold) = joint.breaking_impulse {
                if jc.impulse.norm() > threshold {
                    broken.push(jc.id);
                }
            }
        }
    }

    broken
}

fn is_active(body: &RigidBody) -> bool {
    body.is_dynamic() && !body.is_sleeping()
}

fn init_contact_constraints(
    bodies: &[Option<RigidBody>],
    manifolds: &BTreeMap<SortedPair<BodyId>, ContactManifold>,
    params: &IntegrationParameters,
    inv_dt: Real,
) -> Vec<ContactConstraint> {
    let mut out = Vec::with_capacity(manifolds.len());

    for (pair, manifold) in manifolds {
        let (id1, id2) = **pair;
        let index1 = id1.0 as usize;
        let index2 = id2.0 as usize;
        let (Some(b1), Some(b2)) = (&bodies[index1], &bodies[index2]) else {
            continue;
        };
        if !is_active(b1) && !is_active(b2) {
            continue;
        }

        let c1 = Point::from(b1.position.translation.vector);
        let c2 = Point::from(b2.position.translation.vector);
        let friction = (b1.friction * b2.friction).sqrt();
        let restitution = b1.restitution.max(b2.restitution);

        let mut cc = ContactConstraint {
            pair: *pair,
            index1,
            index2,
            friction,
            points: ArrayVec::new(),
        };

        for pt in &manifold.points {
            let r1 = pt.point - c1;
            let r2 = pt.point - c2;
            let normal = *pt.normal;
            let tangent = Vector::new(-normal.y, normal.x);

            let rn1 = r1.perp(&normal);
            let rn2 = r2.perp(&normal);
            let normal_mass = utils::inv(
                b1.inv_mass
                    + b2.inv_mass
                    + b1.inv_angular_inertia * rn1 * rn1
                    + b2.inv_angular_inertia * rn2 * rn2,
            );

            let rt1 = r1.perp(&tangent);
            let rt2 = r2.perp(&tangent);
            let tangent_mass = utils::inv(
                b1.inv_mass
                    + b2.inv_mass
                    + b1.inv_angular_inertia * rt1 * rt1
                    + b2.inv_angular_inertia * rt2 * rt2,
            );

            // Restitution acts only above the approach speed threshold;
            // the Baumgarte term bleeds off penetration beyond the slop.
            let dv = b2.velocity_at_point(&pt.point) - b1.velocity_at_point(&pt.point);
            let vn = dv.dot(&normal);
            let mut velocity_bias = if vn < -params.restitution_threshold {
                -restitution * vn
            } else {
                0.0
            };
            velocity_bias +=
                params.erp * inv_dt * (-pt.dist - params.allowed_penetration).max(0.0);

            cc.points.push(VelocityConstraintPoint {
                r1,
                r2,
                normal,
                tangent,
                normal_mass,
                tangent_mass,
                velocity_bias,
                normal_impulse: pt.normal_impulse,
                tangent_impulse: pt.tangent_impulse,
            });
        }

        if !cc.points.is_empty() {
            out.push(cc);
        }
    }

    out
}

fn init_joint_constraints(
    bodies: &[Option<RigidBody>],
    joints: &BTreeMap<JointId, Joint>,
    params: &IntegrationParameters,
    inv_dt: Real,
) -> Vec<JointConstraint> {
    let mut out = Vec::with_capacity(joints.len());

    for (id, joint) in joints {
        let index1 = joint.body1.0 as usize;
        let Some(b1) = &bodies[index1] else { continue };

        let (index2, anchor2, im2, ii2, c2, active2) = match joint.body2 {
            Some(body2) => {
                let index2 = body2.0 as usize;
                let Some(b2) = &bodies[index2] else { continue };
                (
                    Some(index2),
                    b2.position * joint.local_anchor2,
                    b2.inv_mass,
                    b2.inv_angular_inertia,
                    Point::from(b2.position.translation.vector),
                    is_active(b2),
                )
            }
            None => (None, joint.local_anchor2, 0.0, 0.0, joint.local_anchor2, false),
        };

        if !is_active(b1) && !active2 {
            continue;
        }

        let anchor1 = b1.position * joint.local_anchor1;
        let c1 = Point::from(b1.position.translation.vector);
        let r1 = anchor1 - c1;
        let r2 = anchor2 - c2;
        let im1 = b1.inv_mass;
        let ii1 = b1.inv_angular_inertia;

        let (mass, bias) = match joint.kind {
            JointKind::Pin => {
                let k = Matrix::new(
                    im1 + im2 + ii1 * r1.y * r1.y + ii2 * r2.y * r2.y,
                    -ii1 * r1.x * r1.y - ii2 * r2.x * r2.y,
                    -ii1 * r1.x * r1.y - ii2 * r2.x * r2.y,
                    im1 + im2 + ii1 * r1.x * r1.x + ii2 * r2.x * r2.x,
                );
                let Some(inv_k) = k.try_inverse() else { continue };
                let bias = (anchor2 - anchor1) * params.erp * inv_dt;
                (JointMass::Point(inv_k), bias)
            }
            JointKind::Distance { rest_length } => {
                let sep = anchor2 - anchor1;
                let len = sep.norm();
                if len <= crate::math::DEFAULT_EPSILON {
                    continue;
                }
                let dir = sep / len;
                let rn1 = r1.perp(&dir);
                let rn2 = r2.perp(&dir);
                let mass =
                    utils::inv(im1 + im2 + ii1 * rn1 * rn1 + ii2 * rn2 * rn2);
                let bias = dir * ((len - rest_length) * params.erp * inv_dt);
                (JointMass::Axis { dir, mass }, bias)
            }
        };

        out.push(JointConstraint {
            id: *id,
            index1,
            index2,
            r1,
            r2,
            mass,
            bias,
            impulse: joint.impulse,
        });
    }

    out
}

fn warm_start(
    solver_bodies: &mut [SolverBody],
    contacts: &[ContactConstraint],
    joints: &[JointConstraint],
) {
    for cc in contacts {
        for pt in &cc.points {
            let impulse = pt.normal * pt.normal_impulse + pt.tangent * pt.tangent_impulse;
            apply_pair_impulse(solver_bodies, cc.index1, cc.index2, &pt.r1, &pt.r2, impulse);
        }
    }

    for jc in joints {
        apply_joint_impulse(solver_bodies, jc, jc.impulse);
    }
}

fn solve_contact(solver_bodies: &mut [SolverBody], cc: &mut ContactConstraint) {
    for pt in &mut cc.points {
        let (v1, w1) = (solver_bodies[cc.index1].linvel, solver_bodies[cc.index1].angvel);
        let (v2, w2) = (solver_bodies[cc.index2].linvel, solver_bodies[cc.index2].angvel);

        // Friction first, against the accumulated normal impulse.
        let dv = v2 + utils::cross_scalar_vector(w2, &pt.r2)
            - v1
            - utils::cross_scalar_vector(w1, &pt.r1);
        let vt = dv.dot(&pt.tangent);
        let lambda = -pt.tangent_mass * vt;
        let max_friction = cc.friction * pt.normal_impulse;
        let new_impulse = (pt.tangent_impulse + lambda).clamp(-max_friction, max_friction);
        let applied = new_impulse - pt.tangent_impulse;
        pt.tangent_impulse = new_impulse;
        apply_pair_impulse(
            solver_bodies,
            cc.index1,
            cc.index2,
            &pt.r1,
            &pt.r2,
            pt.tangent * applied,
        );

        let (v1, w1) = (solver_bodies[cc.index1].linvel, solver_bodies[cc.index1].angvel);
        let (v2, w2) = (solver_bodies[cc.index2].linvel, solver_bodies[cc.index2].angvel);
        let dv = v2 + utils::cross_scalar_vector(w2, &pt.r2)
            - v1
            - utils::cross_scalar_vector(w1, &pt.r1);
        let vn = dv.dot(&pt.normal);
        let lambda = -pt.normal_mass * (vn - pt.velocity_bias);
        let new_impulse = (pt.normal_impulse + lambda).max(0.0);
        let applied = new_impulse - pt.normal_impulse;
        pt.normal_impulse = new_impulse;
        apply_pair_impulse(
            solver_bodies,
            cc.index1,
            cc.index2,
            &pt.r1,
            &pt.r2,
            pt.normal * applied,
        );
    }
}

fn solve_joint(solver_bodies: &mut [SolverBody], jc: &mut JointConstraint) {
    let (v1, w1) = (solver_bodies[jc.index1].linvel, solver_bodies[jc.index1].angvel);
    let (v2, w2) = match jc.index2 {
        Some(i2) => (solver_bodies[i2].linvel, solver_bodies[i2].angvel),
        None => (Vector::zeros(), 0.0),
    };

    let dv = v2 + utils::cross_scalar_vector(w2, &jc.r2)
        - v1
        - utils::cross_scalar_vector(w1, &jc.r1);

    let lambda = match &jc.mass {
        JointMass::Point(inv_k) => -(inv_k * (dv + jc.bias)),
        JointMass::Axis { dir, mass } => {
            let vn = dv.dot(dir) + jc.bias.dot(dir);
            dir * (-mass * vn)
        }
    };

    jc.impulse += lambda;
    apply_joint_impulse(solver_bodies, jc, lambda);
}

fn apply_joint_impulse(solver_bodies: &mut [SolverBody], jc: &JointConstraint, impulse: Vector) {
    let body1 = &mut solver_bodies[jc.index1];
    body1.linvel -= impulse * body1.im;
    body1.angvel -= jc.r1.perp(&impulse) * body1.ii;

    if let Some(i2) = jc.index2 {
        let body2 = &mut solver_bodies[i2];
        body2.linvel += impulse * body2.im;
        body2.angvel += jc.r2.perp(&impulse) * body2.ii;
    }
}

fn apply_pair_impulse(
    solver_bodies: &mut [SolverBody],
    index1: usize,
    index2: usize,
    r1: &Vector,
    r2: &Vector,
    impulse: Vector,
) {
    let body1 = &mut solver_bodies[index1];
    body1.linvel -= impulse * body1.im;
    body1.angvel -= r1.perp(&impulse) * body1.ii;

    let body2 = &mut solver_bodies[index2];
    body2.linvel += impulse * body2.im;
    body2.angvel += r2.perp(&impulse) * body2.ii;
}

//! Island bookkeeping: grouping bodies by contact/joint connectivity so that
//! whole groups sleep and wake together.

use crate::dynamics::{BodyId, Joint, JointId, RigidBody};
use crate::math::Real;
use crate::query::ContactManifold;
use crate::utils::SortedPair;
use crate::world::Event;
use std::collections::BTreeMap;

/// A deterministic union-find over body slots.
struct UnionFind {
    parents: Vec<usize>,
}

impl UnionFind {
    fn new(len: usize) -> Self {
        Self {
            parents: (0..len).collect(),
        }
    }

    fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parents[root] != root {
            root = self.parents[root];
        }
        let mut current = i;
        while self.parents[current] != root {
            let next = self.parents[current];
            self.parents[current] = root;
            current = next;
        }
        root
    }

    fn union(&mut self, i: usize, j: usize) {
        let ri = self.find(i);
        let rj = self.find(j);
        // Smaller root wins so the result does not depend on edge order.
        if ri < rj {
            self.parents[rj] = ri;
        } else {
            self.parents[ri] = rj;
        }
    }
}

fn connects(bodies: &[Option<RigidBody>], i1: usize, i2: usize) -> bool {
    match (&bodies[i1], &bodies[i2]) {
        (Some(b1), Some(b2)) => !b1.is_static() && !b2.is_static(),
        _ => false,
    }
}

/// Wakes every sleeping body transitively connected, through contacts or
/// joints, to an awake non-static body. Runs before the solver so it never
/// pushes on a body still flagged asleep.
pub fn wake_connected(
    bodies: &mut [Option<RigidBody>],
    manifolds: &BTreeMap<SortedPair<BodyId>, ContactManifold>,
    joints: &BTreeMap<JointId, Joint>,
    events: &mut Vec<Event>,
) {
    let mut uf = UnionFind::new(bodies.len());
    for_each_edge(bodies, manifolds, joints, |i1, i2| uf.union(i1, i2));

    let mut root_awake = vec![false; bodies.len()];
    for (i, slot) in bodies.iter().enumerate() {
        if let Some(body) = slot {
            if !body.is_static() && !body.is_sleeping() {
                let root = uf.find(i);
                root_awake[root] = true;
            }
        }
    }

    for (i, slot) in bodies.iter_mut().enumerate() {
        if let Some(body) = slot {
            if body.is_sleeping() && root_awake[uf.find(i)] {
                body.wake_up();
                events.push(Event::BodyWoke(BodyId(i as u32)));
            }
        }
    }
}

/// Advances the sleep timers and puts fully quiescent islands to sleep.
///
/// An island sleeps only when every member has stayed below the linear and
/// angular speed thresholds for `time_to_sleep`.
pub fn update_sleep(
    bodies: &mut [Option<RigidBody>],
    manifolds: &BTreeMap<SortedPair<BodyId>, ContactManifold>,
    joints: &BTreeMap<JointId, Joint>,
    lin_threshold: Real,
    ang_threshold: Real,
    time_to_sleep: Real,
    dt: Real,
    events: &mut Vec<Event>,
) {
    let mut uf = UnionFind::new(bodies.len());
    for_each_edge(bodies, manifolds, joints, |i1, i2| uf.union(i1, i2));

    let lin_sq = lin_threshold * lin_threshold;
    for slot in bodies.iter_mut() {
        if let Some(body) = slot {
            if body.is_static() || body.is_sleeping() {
                continue;
            }
            if body.linvel.norm_squared() < lin_sq && body.angvel.abs() < ang_threshold {
                body.sleep_timer += dt;
            } else {
                body.sleep_timer = 0.0;
            }
        }
    }

    // An island may sleep only if every member's timer has matured.
    let mut root_can_sleep = vec![true; bodies.len()];
    for (i, slot) in bodies.iter().enumerate() {
        if let Some(body) = slot {
            if !body.is_static() && !body.is_sleeping() && body.sleep_timer < time_to_sleep {
                let root = uf.find(i);
                root_can_sleep[root] = false;
            }
        }
    }

    let mut slept = Vec::new();
    for (i, slot) in bodies.iter_mut().enumerate() {
        if let Some(body) = slot {
            if !body.is_static() && !body.is_sleeping() && root_can_sleep[uf.find(i)] {
                body.put_to_sleep();
                slept.push(BodyId(i as u32));
            }
        }
    }

    if !slept.is_empty() {
        log::debug!("{} bodies went to sleep", slept.len());
        events.extend(slept.into_iter().map(Event::BodySlept));
    }
}

fn for_each_edge(
    bodies: &[Option<RigidBody>],
    manifolds: &BTreeMap<SortedPair<BodyId>, ContactManifold>,
    joints: &BTreeMap<JointId, Joint>,
    mut visit: impl FnMut(usize, usize),
) {
    for (pair, manifold) in manifolds {
        if manifold.points.is_empty() {
            continue;
        }
        let (id1, id2) = **pair;
        let (i1, i2) = (id1.0 as usize, id2.0 as usize);
        if connects(bodies, i1, i2) {
            visit(i1, i2);
        }
    }

    for joint in joints.values() {
        if let Some(body2) = joint.body2 {
            let (i1, i2) = (joint.body1.0 as usize, body2.0 as usize);
            if connects(bodies, i1, i2) {
                visit(i1, i2);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::BodyKind;
    use crate::math::Vector;
    use crate::shape::Shape;

    fn slow_dynamic_body() -> RigidBody {
        let mut body = RigidBody::new(BodyKind::Dynamic);
        body.attach_shape(Shape::ball(0.5).unwrap(), Vector::zeros(), 1.0);
        body
    }

    #[test]
    fn lone_slow_body_sleeps_after_threshold() {
        let mut bodies = vec![Some(slow_dynamic_body())];
        let manifolds = BTreeMap::new();
        let joints = BTreeMap::new();
        let mut events = Vec::new();

        for _ in 0..10 {
            update_sleep(
                &mut bodies, &manifolds, &joints, 0.05, 0.05, 0.5, 0.1, &mut events,
            );
        }

        assert!(bodies[0].as_ref().unwrap().is_sleeping());
        assert_eq!(events, vec![Event::BodySlept(BodyId(0))]);
    }

    #[test]
    fn moving_member_keeps_the_island_awake() {
        let mut still = slow_dynamic_body();
        still.sleep_timer = 10.0;
        let mut moving = slow_dynamic_body();
        moving.linvel = Vector::new(5.0, 0.0);

        let mut bodies = vec![Some(still), Some(moving)];
        let mut manifolds = BTreeMap::new();
        let mut manifold = ContactManifold::new();
        manifold.points.push(crate::query::TrackedContact::new(
            crate::math::Point::origin(),
            0.0,
            crate::math::UnitVector::new_unchecked(Vector::x()),
            0,
            0,
        ));
        manifolds.insert(SortedPair::new(BodyId(0), BodyId(1)), manifold);
        let joints = BTreeMap::new();
        let mut events = Vec::new();

        update_sleep(
            &mut bodies, &manifolds, &joints, 0.05, 0.05, 0.5, 0.1, &mut events,
        );

        assert!(!bodies[0].as_ref().unwrap().is_sleeping());
        assert!(events.is_empty());
    }

    #[test]
    fn awake_neighbor_wakes_sleeping_body() {
        let mut sleeper = slow_dynamic_body();
        sleeper.put_to_sleep();
        let awake = slow_dynamic_body();

        let mut bodies = vec![Some(sleeper), Some(awake)];
        let mut manifolds = BTreeMap::new();
        let mut manifold = ContactManifold::new();
        manifold.points.push(crate::query::TrackedContact::new(
            crate::math::Point::origin(),
            0.0,
            crate::math::UnitVector::new_unchecked(Vector::x()),
            0,
            0,
        ));
        manifolds.insert(SortedPair::new(BodyId(0), BodyId(1)), manifold);
        let joints = BTreeMap::new();
        let mut events = Vec::new();

        wake_connected(&mut bodies, &manifolds, &joints, &mut events);

        assert!(!bodies[0].as_ref().unwrap().is_sleeping());
        assert_eq!(events, vec![Event::BodyWoke(BodyId(0))]);
    }
}

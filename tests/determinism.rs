use boxigon2d::dynamics::{BodyId, BodyKind};
use boxigon2d::math::{Isometry, Point, Real, Vector};
use boxigon2d::world::World;

const DT: Real = 1.0 / 60.0;

/// A small pyramid of boxes plus a ball rolling into it.
fn build_pyramid_world() -> World {
    let mut world = World::with_ground(50.0, 0.0).unwrap();

    let square = vec![
        Point::new(-0.5, -0.5),
        Point::new(0.5, -0.5),
        Point::new(0.5, 0.5),
        Point::new(-0.5, 0.5),
    ];

    for level in 0..3 {
        for k in 0..(3 - level) {
            let body = world.create_body(BodyKind::Dynamic);
            world
                .attach_convex_polygon(body, square.clone(), Vector::zeros(), 1.0)
                .unwrap();
            let x = k as Real * 1.05 - (3 - level) as Real * 0.5;
            let y = 0.55 + level as Real * 1.05;
            world
                .set_position(body, Isometry::translation(x, y))
                .unwrap();
        }
    }

    let ball = world.create_body(BodyKind::Dynamic);
    world.attach_ball(ball, 0.4, Vector::zeros(), 1.0).unwrap();
    world
        .set_position(ball, Isometry::translation(-6.0, 0.45))
        .unwrap();
    world.set_velocity(ball, Vector::new(8.0, 0.0), 2.0).unwrap();

    world
}

/// The exact bit patterns of every body's pose and velocity.
fn state_bits(world: &World) -> Vec<u32> {
    let mut bits = Vec::new();
    for (_, body) in world.bodies() {
        bits.push(body.position.translation.x.to_bits());
        bits.push(body.position.translation.y.to_bits());
        bits.push(body.position.rotation.angle().to_bits());
        bits.push(body.linvel.x.to_bits());
        bits.push(body.linvel.y.to_bits());
        bits.push(body.angvel.to_bits());
    }
    bits
}

#[test]
fn identical_runs_are_bit_identical() {
    let mut a = build_pyramid_world();
    let mut b = build_pyramid_world();

    for step in 0..240 {
        a.step(DT).unwrap();
        b.step(DT).unwrap();
        assert_eq!(state_bits(&a), state_bits(&b), "diverged at step {step}");
    }
    assert_eq!(a.drain_events(), b.drain_events());
}

#[test]
fn scene_round_trip_preserves_state() {
    let mut world = build_pyramid_world();
    for _ in 0..50 {
        world.step(DT).unwrap();
    }

    let scene = world.to_scene();
    let json = serde_json::to_string(&scene).unwrap();
    let restored_scene: boxigon2d::world::Scene = serde_json::from_str(&json).unwrap();
    let restored = World::from_scene(&restored_scene).unwrap();

    assert_eq!(state_bits(&world), state_bits(&restored));
    assert_eq!(
        world.bodies().count(),
        restored.bodies().count(),
    );
}

#[test]
fn worlds_loaded_from_the_same_scene_simulate_identically() {
    let mut world = build_pyramid_world();
    for _ in 0..50 {
        world.step(DT).unwrap();
    }
    let scene = world.to_scene();

    let mut a = World::from_scene(&scene).unwrap();
    let mut b = World::from_scene(&scene).unwrap();
    for step in 0..120 {
        a.step(DT).unwrap();
        b.step(DT).unwrap();
        assert_eq!(state_bits(&a), state_bits(&b), "diverged at step {step}");
    }
}

#[test]
fn restored_world_reuses_no_destroyed_ids() {
    let mut world = World::new();
    let first = world.create_body(BodyKind::Dynamic);
    let second = world.create_body(BodyKind::Dynamic);
    world.attach_ball(second, 0.5, Vector::zeros(), 1.0).unwrap();
    world.destroy_body(first).unwrap();

    let scene = world.to_scene();
    let mut restored = World::from_scene(&scene).unwrap();

    assert!(restored.body(first).is_none());
    assert!(restored.body(second).is_some());
    let third = restored.create_body(BodyKind::Dynamic);
    assert_eq!(third, BodyId(2));
}

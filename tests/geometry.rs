use approx::assert_relative_eq;
use boxigon2d::dynamics::{BodyKind, RigidBody};
use boxigon2d::math::{Isometry, Point, Vector};
use boxigon2d::pipeline::BroadPhase;
use boxigon2d::query::{contact_shape_shape, Ray, RayCast};
use boxigon2d::shape::Shape;
use boxigon2d::utils::SortedPair;

#[test]
fn ray_hits_rotated_square() {
    let square = Shape::rectangle(1.0, 1.0).unwrap();
    // Rotated 45 degrees: the square presents a corner toward the ray.
    let pos = Isometry::new(Vector::new(5.0, 0.0), std::f32::consts::FRAC_PI_4);
    let ray = Ray::new(Point::origin(), Vector::x());

    let hit = square.cast_ray_and_get_normal(&pos, &ray, 100.0, true).unwrap();
    // The corner is at distance 5 - sqrt(2); the entry face is tilted 45
    // degrees, so its outward normal is (-1, ±1) / sqrt(2).
    assert_relative_eq!(hit.toi, 5.0 - 2.0f32.sqrt(), epsilon = 1.0e-4);
    assert_relative_eq!(hit.normal.x, -std::f32::consts::FRAC_1_SQRT_2, epsilon = 1.0e-3);
    assert_relative_eq!(ray.point_at(hit.toi).y, 0.0, epsilon = 1.0e-4);
}

#[test]
fn contact_normal_is_world_space_for_rotated_bodies() {
    let square = Shape::rectangle(1.0, 1.0).unwrap();
    let pos1 = Isometry::new(Vector::zeros(), std::f32::consts::FRAC_PI_2);
    let pos2 = Isometry::translation(1.9, 0.0);

    let mut out = Vec::new();
    contact_shape_shape(&pos1, &square, &pos2, &square, 0.0, &mut out);
    assert!(!out.is_empty());
    for contact in &out {
        // Whatever local face won, the world normal points along +x.
        assert_relative_eq!(contact.normal.x, 1.0, epsilon = 1.0e-4);
        assert!(contact.dist < 0.0);
    }
}

#[test]
fn tilted_box_touches_ground_at_a_corner() {
    let ground = Shape::rectangle(10.0, 1.0).unwrap();
    let cube = Shape::rectangle(0.5, 0.5).unwrap();
    let pos_ground = Isometry::identity();
    // Tilted 30 degrees, one corner dipping below the ground surface.
    let pos_cube = Isometry::new(Vector::new(0.0, 1.6), 0.5);

    let mut out = Vec::new();
    contact_shape_shape(&pos_ground, &ground, &pos_cube, &cube, 0.0, &mut out);
    assert!(!out.is_empty());
    let deepest = out
        .iter()
        .map(|c| c.dist)
        .fold(f32::INFINITY, f32::min);
    assert!(deepest < 0.0);
    for contact in &out {
        assert_relative_eq!(contact.normal.y, 1.0, epsilon = 1.0e-4);
    }
}

fn random_ball_world(seed: u64, count: usize) -> Vec<Option<RigidBody>> {
    let mut rng = oorandom::Rand32::new(seed);
    let mut bodies = Vec::with_capacity(count);
    for _ in 0..count {
        let mut body = RigidBody::new(BodyKind::Dynamic);
        let radius = 0.2 + rng.rand_float() * 0.8;
        body.attach_shape(Shape::ball(radius).unwrap(), Vector::zeros(), 1.0);
        body.position = Isometry::translation(
            (rng.rand_float() - 0.5) * 40.0,
            (rng.rand_float() - 0.5) * 40.0,
        );
        body.linvel = Vector::new(
            (rng.rand_float() - 0.5) * 10.0,
            (rng.rand_float() - 0.5) * 10.0,
        );
        bodies.push(Some(body));
    }
    bodies
}

#[test]
fn broad_phase_never_misses_an_overlapping_pair() {
    for seed in 0..8u64 {
        let bodies = random_ball_world(seed, 60);
        let broad_phase = BroadPhase::new(2.0);
        let pairs = broad_phase.find_pairs(&bodies, 1.0 / 60.0, 0.1);

        for i1 in 0..bodies.len() {
            for i2 in i1 + 1..bodies.len() {
                let aabb1 = bodies[i1].as_ref().unwrap().compute_aabb();
                let aabb2 = bodies[i2].as_ref().unwrap().compute_aabb();
                if aabb1.intersects(&aabb2) {
                    let pair = SortedPair::new(
                        boxigon2d::dynamics::BodyId(i1 as u32),
                        boxigon2d::dynamics::BodyId(i2 as u32),
                    );
                    assert!(
                        pairs.binary_search(&pair).is_ok(),
                        "seed {seed}: pair ({i1}, {i2}) missed by the broad phase"
                    );
                }
            }
        }
    }
}

use physics::collision::{detect_overlap, resolve_pair};
use physics::{Body, FrictionParams, MassRule, ResponseModel, SimConfig, Vec2, World};

const EPSILON: f32 = 0.1;

fn models() -> [ResponseModel; 2] {
    [
        ResponseModel::NormalImpulse,
        ResponseModel::MassMixedFriction(FrictionParams::default()),
    ]
}

/// Random overlapping pair: `a` at the origin, `b` somewhere inside reach.
fn random_overlapping_pair(rng: &fastrand::Rng, rule: MassRule) -> (Body, Body) {
    let radius = |rng: &fastrand::Rng| 0.01 + rng.f32() * 0.24;
    let speed = |rng: &fastrand::Rng| (rng.f32() - 0.5) * 0.1;

    let (ra, rb) = (radius(rng), radius(rng));
    let angle = rng.f32() * std::f32::consts::TAU;
    let distance = (ra + rb) * (0.05 + rng.f32() * 0.9);
    let offset = Vec2::new(angle.cos(), angle.sin()) * distance;

    let a = Body::new(Vec2::ZERO, Vec2::new(speed(rng), speed(rng)), ra, rule);
    let b = Body::new(offset, Vec2::new(speed(rng), speed(rng)), rb, rule);
    (a, b)
}

#[test]
fn momentum_is_conserved_for_random_pairs() {
    let rng = fastrand::Rng::with_seed(0x0ba1_1917);
    for model in models() {
        for rule in [MassRule::Area, MassRule::Volume] {
            for _ in 0..500 {
                let (mut a, mut b) = random_overlapping_pair(&rng, rule);
                let before = a.momentum() + b.momentum();

                assert!(resolve_pair(&mut a, &mut b, &model, EPSILON));

                let after = a.momentum() + b.momentum();
                assert!(
                    (after - before).length() < 1e-6,
                    "{model:?} {rule:?}: {before:?} -> {after:?}"
                );
            }
        }
    }
}

#[test]
fn resolved_pair_no_longer_overlaps() {
    let rng = fastrand::Rng::with_seed(42);
    for model in models() {
        for _ in 0..500 {
            let (mut a, mut b) = random_overlapping_pair(&rng, MassRule::Volume);
            resolve_pair(&mut a, &mut b, &model, EPSILON);

            let distance = (b.pos - a.pos).length();
            assert!(distance >= a.radius + b.radius - 1e-5, "distance {distance}");
            assert!(detect_overlap(&a, &b, EPSILON).map_or(true, |c| c.overlap < 1e-5));
        }
    }
}

#[test]
fn equal_masses_swap_velocities_head_on() {
    let rule = MassRule::Area;
    let mut a = Body::new(Vec2::new(-0.14, 0.0), Vec2::new(0.01, 0.0), 0.1, rule);
    let mut b = Body::new(Vec2::new(0.04, 0.0), Vec2::new(-0.01, 0.0), 0.1, rule);
    assert!(((b.pos - a.pos).length() - 0.18).abs() < 1e-6);

    assert!(resolve_pair(&mut a, &mut b, &ResponseModel::NormalImpulse, EPSILON));

    assert!((a.vel.x + 0.01).abs() < 1e-6, "a.vx={}", a.vel.x);
    assert!((b.vel.x - 0.01).abs() < 1e-6, "b.vx={}", b.vel.x);
    assert!(a.vel.y.abs() < 1e-7 && b.vel.y.abs() < 1e-7);
    assert!(((b.pos - a.pos).length() - 0.2).abs() < 1e-6);
    assert!((a.pos.x + 0.15).abs() < 1e-6);
    assert!((b.pos.x - 0.05).abs() < 1e-6);
}

#[test]
fn models_diverge_on_oblique_contact() {
    let rule = MassRule::Area;
    let start_a = Body::new(Vec2::ZERO, Vec2::new(0.01, 0.01), 0.1, rule);
    let start_b = Body::new(Vec2::new(0.15, 0.0), Vec2::ZERO, 0.1, rule);

    let (mut a1, mut b1) = (start_a, start_b);
    resolve_pair(&mut a1, &mut b1, &ResponseModel::NormalImpulse, EPSILON);
    // Frictionless: the tangential (y) component stays with `a`.
    assert!((a1.vel.y - 0.01).abs() < 1e-7);

    let (mut a2, mut b2) = (start_a, start_b);
    let friction = ResponseModel::MassMixedFriction(FrictionParams::default());
    resolve_pair(&mut a2, &mut b2, &friction, EPSILON);
    // Per-axis mixing hands the y component to `b` as well.
    assert!(a2.vel.y.abs() < 1e-7);
    assert!((b2.vel.y - 0.01).abs() < 1e-7);
}

#[test]
fn collision_sees_positions_after_integration() {
    let config = SimConfig { gravity: 0.0, mass_rule: MassRule::Area, ..SimConfig::default() };
    let mut world = World::new(config).unwrap();
    // Just apart now, overlapping once this step's motion is applied.
    world
        .spawn_with_velocity(Vec2::new(-0.1025, 0.0), Vec2::new(0.01, 0.0), 0.1)
        .unwrap();
    world
        .spawn_with_velocity(Vec2::new(0.1025, 0.0), Vec2::new(-0.01, 0.0), 0.1)
        .unwrap();

    let stats = world.step();
    let bodies = world.bodies();
    assert_eq!(stats.contacts, 1);
    assert!((bodies[0].vel.x + 0.01).abs() < 1e-6);
    assert!((bodies[1].vel.x - 0.01).abs() < 1e-6);
}

#[test]
fn friction_world_conserves_momentum_away_from_walls() {
    let config = SimConfig {
        gravity: 0.0,
        mass_rule: MassRule::Area,
        response: ResponseModel::MassMixedFriction(FrictionParams::default()),
        ..SimConfig::default()
    };
    let mut world = World::new(config).unwrap();
    world
        .spawn_with_velocity(Vec2::new(-0.3, 0.05), Vec2::new(0.01, 0.0), 0.1)
        .unwrap();
    world
        .spawn_with_velocity(Vec2::new(0.3, -0.05), Vec2::new(-0.005, 0.0), 0.15)
        .unwrap();
    let before = world.stats().momentum;

    let mut contacts = 0;
    for _ in 0..40 {
        let stats = world.step();
        assert_eq!(stats.wall_hits, 0);
        contacts += stats.contacts;
    }
    assert!(contacts > 0);
    assert!((world.stats().momentum - before).length() < 1e-6);
}

#[test]
fn bodies_spawned_on_the_same_point_drift_apart() {
    for response in models() {
        let config = SimConfig { response, ..SimConfig::default() };
        let mut world = World::new(config).unwrap();
        world.spawn(Vec2::ZERO, 0.1).unwrap();
        world.spawn(Vec2::ZERO, 0.1).unwrap();

        world.run(600);
        let bodies = world.bodies();
        let distance = (bodies[1].pos - bodies[0].pos).length();
        assert!(distance >= 0.2 - 1e-4, "{response:?}: distance {distance}");
    }
}

use physics::{SimConfig, Vec2, World};

#[test]
fn floor_hit_after_one_tick_clamps_and_reflects() {
    let mut world = World::new(SimConfig::default()).unwrap();
    world
        .spawn_with_velocity(Vec2::new(0.0, -0.95), Vec2::new(0.0, -0.02), 0.1)
        .unwrap();

    let stats = world.step();
    let body = world.bodies()[0];

    assert_eq!(stats.wall_hits, 1);
    assert!((body.pos.y + 0.9).abs() < 1e-6, "y={}", body.pos.y);
    assert!((body.vel.y - 0.015_375).abs() < 1e-6, "vy={}", body.vel.y);
}

/// Heights above the floor at the top of each rebound.
fn rebound_peaks(world: &mut World, steps: usize) -> Vec<f32> {
    let floor = -world.config().half_extent + world.bodies()[0].radius;
    let mut peaks = Vec::new();
    let mut peak: Option<f32> = None;

    for _ in 0..steps {
        let stats = world.step();
        let body = world.bodies()[0];
        if stats.wall_hits > 0 {
            peak = Some(body.pos.y);
        }
        if let Some(top) = peak.as_mut() {
            if body.pos.y > *top {
                *top = body.pos.y;
            }
            if body.vel.y < 0.0 {
                peaks.push(*top - floor);
                peak = None;
            }
        }
    }
    peaks
}

#[test]
fn rebound_height_shrinks_by_restitution_squared() {
    let mut world = World::new(SimConfig::default()).unwrap();
    world.spawn(Vec2::new(0.0, 0.5), 0.1).unwrap();
    let r = world.config().restitution;

    let peaks = rebound_peaks(&mut world, 2000);
    assert!(peaks.len() >= 4, "only {} rebounds", peaks.len());

    let drop_height = 0.5 - (-0.9);
    let mut heights = vec![drop_height];
    heights.extend_from_slice(&peaks[..4]);
    for pair in heights.windows(2) {
        let ratio = pair[1] / pair[0];
        assert!((ratio - r * r).abs() < 0.05, "ratio {ratio} vs {}", r * r);
    }
}

#[test]
fn dropped_body_settles_on_floor() {
    let mut world = World::new(SimConfig::default()).unwrap();
    world.spawn(Vec2::new(0.0, 0.5), 0.1).unwrap();
    let settle_speed = 2.0 * world.config().gravity.abs();

    world.run(1000);
    for _ in 0..500 {
        world.step();
        let body = world.bodies()[0];
        assert!(body.vel.y.abs() < settle_speed, "vy={}", body.vel.y);
        assert!((body.pos.y + 0.9).abs() < 0.01);
    }
}

#[test]
fn body_stays_inside_domain_while_bouncing_around() {
    let mut world = World::new(SimConfig::default()).unwrap();
    world
        .spawn_with_velocity(Vec2::new(0.0, 0.0), Vec2::new(0.07, 0.05), 0.15)
        .unwrap();

    for _ in 0..500 {
        world.step();
        let body = world.bodies()[0];
        let limit = 1.0 - body.radius + 1e-6;
        assert!(body.pos.x.abs() <= limit && body.pos.y.abs() <= limit);
    }
}

//! # Integration
//!
//! Semi-implicit Euler: velocity picks up gravity first, then position moves by
//! the updated velocity. One call advances one fixed step; velocities are in
//! world units per step so there is no `dt`.

use crate::types::Body;

/// Advance every body by one step under constant vertical acceleration.
pub fn integrate(bodies: &mut [Body], gravity: f32) {
    for body in bodies.iter_mut() {
        body.vel.y += gravity;
        body.pos += body.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MassRule;
    use crate::types::Vec2;

    #[test]
    fn velocity_updates_before_position() {
        let mut bodies = [Body::new(Vec2::ZERO, Vec2::ZERO, 0.1, MassRule::Area)];
        integrate(&mut bodies, -0.5);
        assert_eq!(bodies[0].vel.y, -0.5);
        assert_eq!(bodies[0].pos.y, -0.5);
    }

    #[test]
    fn horizontal_velocity_always_moves_body() {
        let mut bodies = [Body::new(Vec2::ZERO, Vec2::new(0.01, 0.0), 0.1, MassRule::Area)];
        for _ in 0..10 {
            integrate(&mut bodies, 0.0);
        }
        assert!((bodies[0].pos.x - 0.1).abs() < 1e-6);
        assert_eq!(bodies[0].vel.x, 0.01);
    }
}

//! Positional correction and velocity response for an overlapping pair

use tracing::trace;

use super::Contact;
use crate::config::{FrictionParams, ResponseModel};
use crate::types::{Body, Vec2};

/// Push the pair apart along the normal until the circles just touch.
///
/// Each body moves by the overlap scaled with the *other* body's share of the
/// radius sum, so the larger circle pushes the smaller one further.
pub fn separate(a: &mut Body, b: &mut Body, contact: &Contact) {
    let shift_a = contact.overlap * (b.radius / contact.radius_sum);
    let shift_b = contact.overlap * (a.radius / contact.radius_sum);
    a.pos -= contact.normal * shift_a;
    b.pos += contact.normal * shift_b;
}

impl ResponseModel {
    /// Update both velocities for a contact with unit normal `normal` (a to b).
    pub fn apply(&self, a: &mut Body, b: &mut Body, normal: Vec2) {
        match self {
            ResponseModel::NormalImpulse => normal_impulse(a, b, normal),
            ResponseModel::MassMixedFriction(params) => mass_mixed_friction(a, b, normal, params),
        }
    }
}

fn normal_impulse(a: &mut Body, b: &mut Body, normal: Vec2) {
    let vn = normal.dot(a.vel - b.vel);
    let p = 2.0 * vn / (a.mass + b.mass);

    a.vel -= normal * (p * b.mass);
    b.vel += normal * (p * a.mass);
}

fn mass_mixed_friction(a: &mut Body, b: &mut Body, normal: Vec2, params: &FrictionParams) {
    let (ma, mb) = (a.mass, b.mass);
    let total = ma + mb;

    let mix = |own: f32, other: f32, m_own: f32, m_other: f32| {
        ((m_own - m_other) * own + 2.0 * m_other * other) / total
    };
    let va = Vec2::new(mix(a.vel.x, b.vel.x, ma, mb), mix(a.vel.y, b.vel.y, ma, mb));
    let vb = Vec2::new(mix(b.vel.x, a.vel.x, mb, ma), mix(b.vel.y, a.vel.y, mb, ma));

    let normal_speed = normal.dot(va - vb).abs();
    let mu = params.coefficient(normal_speed);
    let friction = normal * (mu * normal_speed);
    trace!(normal_speed, mu, "friction impulse");

    a.vel = va - friction / ma;
    b.vel = vb + friction / mb;
}

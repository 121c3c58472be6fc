//! Wall containment for the square domain `[-half, half]²`.

use crate::types::Body;

/// Clamp every body inside the domain, reflecting the offending velocity
/// component with `restitution`. Returns the number of wall hits.
pub fn apply_bounds(bodies: &mut [Body], half_extent: f32, restitution: f32) -> usize {
    let mut hits = 0;
    for body in bodies.iter_mut() {
        let radius = body.radius;
        if clamp_axis(&mut body.pos.x, &mut body.vel.x, radius, half_extent, restitution) {
            hits += 1;
        }
        if clamp_axis(&mut body.pos.y, &mut body.vel.y, radius, half_extent, restitution) {
            hits += 1;
        }
    }
    hits
}

fn clamp_axis(pos: &mut f32, vel: &mut f32, radius: f32, half_extent: f32, restitution: f32) -> bool {
    let lower = -half_extent + radius;
    let upper = half_extent - radius;

    if *pos < lower {
        *pos = lower;
        *vel = -*vel * restitution;
        true
    } else if *pos > upper {
        *pos = upper;
        *vel = -*vel * restitution;
        true
    } else {
        false
    }
}

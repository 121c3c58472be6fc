//! Circle-circle overlap detection

use crate::types::{Body, Vec2};

/// Centre distances at or below this are treated as coincident.
pub const DEGENERATE_DISTANCE: f32 = 1e-6;

/// Separation direction used when the centres coincide.
pub const FALLBACK_NORMAL: Vec2 = Vec2::new(1.0, 0.0);

/// Contact between bodies `a` and `b` of an overlapping pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit direction from `a` towards `b`. [`FALLBACK_NORMAL`] when `degenerate`.
    pub normal: Vec2,
    /// Centre distance used for the correction, after epsilon substitution.
    pub distance: f32,
    /// `radius_a + radius_b - distance`
    pub overlap: f32,
    pub radius_sum: f32,
    /// Centres coincided and `distance` was replaced by the epsilon.
    pub degenerate: bool,
}

/// Detect overlap between two circles.
///
/// Separated and exactly touching pairs return `None`. Coincident centres
/// substitute `epsilon` for the distance and push apart along
/// [`FALLBACK_NORMAL`].
#[must_use]
pub fn detect_overlap(a: &Body, b: &Body, epsilon: f32) -> Option<Contact> {
    let delta = b.pos - a.pos;
    let radius_sum = a.radius + b.radius;
    let distance_squared = delta.length_squared();

    if distance_squared >= radius_sum * radius_sum {
        return None;
    }

    let true_distance = distance_squared.sqrt();
    if true_distance >= radius_sum {
        return None;
    }

    let degenerate = true_distance <= DEGENERATE_DISTANCE;
    let (normal, distance) = if degenerate {
        (FALLBACK_NORMAL, epsilon)
    } else {
        (delta / true_distance, true_distance)
    };

    Some(Contact {
        normal,
        distance,
        overlap: radius_sum - distance,
        radius_sum,
        degenerate,
    })
}

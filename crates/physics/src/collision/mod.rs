//! # Collision Detection and Response
//!
//! Every unordered pair `(i, j)` with `i < j` is tested once per tick, in index
//! order. Overlapping pairs are pushed apart and then handed to the configured
//! [`ResponseModel`]. There is no iteration to convergence, so a dense cluster
//! can keep some residual overlap until later ticks.
//!
//! The pair scan is O(n²). That is fine for the store's capacity of a few
//! hundred bodies at most.

mod detection;
mod response;

pub use detection::*;
pub use response::*;

use tracing::trace;

use crate::config::{ResponseModel, SimConfig};
use crate::types::Body;

/// Resolve a single pair. Returns `true` when the pair overlapped.
pub fn resolve_pair(a: &mut Body, b: &mut Body, model: &ResponseModel, epsilon: f32) -> bool {
    let Some(contact) = detect_overlap(a, b, epsilon) else {
        return false;
    };

    if contact.degenerate {
        trace!(distance = contact.distance, "coincident centres, substituted epsilon");
    }

    separate(a, b, &contact);
    model.apply(a, b, contact.normal);
    true
}

/// Run the pair scan over the whole store. Returns the number of contacts.
pub fn resolve_collisions(bodies: &mut [Body], config: &SimConfig) -> usize {
    let mut contacts = 0;
    let n = bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let (before, after) = bodies.split_at_mut(j);
            if resolve_pair(&mut before[i], &mut after[0], &config.response, config.degenerate_epsilon) {
                trace!(i, j, "contact resolved");
                contacts += 1;
            }
        }
    }

    contacts
}

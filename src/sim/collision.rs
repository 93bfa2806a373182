//! Body-body collision detection and response
//!
//! Bodies are equal-mass disks. A colliding pair swaps the velocity
//! components along the line of centers and keeps the tangential ones, which
//! is the elastic exchange for equal masses.
//!
//! Detection is predictive: the contact distance is widened by how far the
//! pair closes in one tick, so fast bodies are caught before they tunnel.
//! There is no positional correction, so a pair can stay inside the widened
//! radius for a tick or two after resolving.

use glam::Vec2;

use super::body::Body;
use super::registry::BodyRegistry;
use crate::vector::{add, decompose, length, sub, try_unit_vector};

/// Velocities of a resolved pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairResponse {
    pub vel_a: Vec2,
    pub vel_b: Vec2,
}

/// Test one pair and compute its post-collision velocities
///
/// Returns `None` when the pair is not within the predictive threshold or the
/// centers coincide (no contact normal exists).
pub fn check_pair(a: &Body, b: &Body, tick_scale: f32) -> Option<PairResponse> {
    let delta = sub(a.pos, b.pos);
    let n = try_unit_vector(delta)?;

    let (a_n, a_t) = decompose(a.vel, n);
    let (b_n, b_t) = decompose(b.vel, n);

    let reach = a.radius + b.radius + (length(a_n) + length(b_n)) * tick_scale;
    if delta.length_squared() > reach * reach {
        return None;
    }

    Some(PairResponse {
        vel_a: add(a_t, b_n),
        vel_b: add(b_t, a_n),
    })
}

/// Resolve a single pair in place, returning whether it collided
pub fn resolve_pair(a: &mut Body, b: &mut Body, tick_scale: f32) -> bool {
    match check_pair(a, b, tick_scale) {
        Some(response) => {
            a.vel = response.vel_a;
            b.vel = response.vel_b;
            true
        }
        None => false,
    }
}

/// Test every unordered pair once, in registry order
///
/// Later pairs see velocities already changed by earlier pairs in the same
/// pass. Returns the number of pairs resolved.
pub fn resolve_body_collisions(registry: &mut BodyRegistry, tick_scale: f32) -> usize {
    let ids = registry.ids();
    let mut resolved = 0;

    for (i, &id_a) in ids.iter().enumerate() {
        for &id_b in &ids[i + 1..] {
            let Some([a, b]) = registry.get_pair_mut(id_a, id_b) else {
                continue;
            };
            if resolve_pair(a, b, tick_scale) {
                log::trace!("Collision {:?} <-> {:?}", id_a, id_b);
                resolved += 1;
            }
        }
    }

    resolved
}

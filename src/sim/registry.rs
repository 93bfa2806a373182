//! Live body storage and collision-free placement

use glam::Vec2;
use rand::Rng;
use slotmap::SlotMap;

use super::body::{Body, BodyId, BodyView};
use crate::config::SimConfig;
use crate::error::SimError;

/// The live set of bodies
///
/// Iteration follows slot order, which depends only on the sequence of
/// inserts and removals, so a seeded session always visits bodies in the same
/// order.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: SlotMap<BodyId, Body>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self {
            bodies: SlotMap::with_key(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: SlotMap::with_capacity_and_key(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.bodies.contains_key(id)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id)
    }

    /// Two distinct bodies borrowed mutably at once
    pub fn get_pair_mut(&mut self, a: BodyId, b: BodyId) -> Option<[&mut Body; 2]> {
        self.bodies.get_disjoint_mut([a, b])
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyId, &mut Body)> + '_ {
        self.bodies.iter_mut()
    }

    /// Handles in iteration order
    pub fn ids(&self) -> Vec<BodyId> {
        self.bodies.keys().collect()
    }

    /// Add an explicitly constructed body without any overlap check
    pub fn insert(&mut self, body: Body) -> BodyId {
        self.bodies.insert(body)
    }

    /// Remove a body; does not spawn a replacement
    pub fn remove(&mut self, id: BodyId) -> Option<Body> {
        self.bodies.remove(id)
    }

    /// Whether `candidate` would overlap any live body
    pub fn overlaps_any(&self, candidate: &Body) -> bool {
        self.bodies.values().any(|b| b.overlaps(candidate))
    }

    /// Spawn a body at a random spot that overlaps nothing
    ///
    /// Each attempt draws radius, position, velocity and color afresh. Gives
    /// up with [`SimError::ArenaFull`] after `config.max_spawn_attempts`.
    pub fn spawn<R: Rng>(
        &mut self,
        config: &SimConfig,
        rng: &mut R,
    ) -> Result<BodyId, SimError> {
        for attempt in 1..=config.max_spawn_attempts {
            let candidate = random_body(config, rng);
            if !self.overlaps_any(&candidate) {
                log::debug!(
                    "Spawned body r={} at ({:.1}, {:.1}) after {} attempt(s)",
                    candidate.radius,
                    candidate.pos.x,
                    candidate.pos.y,
                    attempt
                );
                return Ok(self.insert(candidate));
            }
        }

        log::warn!(
            "No free spot among {} bodies after {} attempts",
            self.len(),
            config.max_spawn_attempts
        );
        Err(SimError::ArenaFull {
            attempts: config.max_spawn_attempts,
        })
    }

    /// Render snapshot of every live body
    pub fn views(&self) -> Vec<BodyView> {
        self.bodies
            .iter()
            .map(|(id, b)| BodyView {
                id,
                pos: b.pos,
                radius: b.radius,
                color: b.color,
            })
            .collect()
    }
}

/// Draw one placement candidate
fn random_body<R: Rng>(config: &SimConfig, rng: &mut R) -> Body {
    let radius = rng.random_range(config.radius_min..=config.radius_max) as f32;
    let pos = Vec2::new(
        rng.random_range(radius..=config.width - radius),
        rng.random_range(radius..=config.height - radius),
    );
    let vel = Vec2::new(
        rng.random_range(-config.max_speed..config.max_speed),
        rng.random_range(-config.max_speed..config.max_speed),
    );
    let color = config.palette[rng.random_range(0..config.palette.len())];
    Body::new(pos, vel, radius, color)
}

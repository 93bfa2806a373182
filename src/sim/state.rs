//! Simulation session state
//!
//! One [`Simulation`] owns everything a session needs: configuration, the
//! live bodies, the score and the seeded RNG. Callers drive it one tick or
//! one pointer event at a time.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::{BodyId, BodyView};
use super::boundary::Boundary;
use super::interaction::hit_test;
use super::registry::BodyRegistry;
use crate::config::SimConfig;
use crate::consts::MAX_PREALLOCATED_BODIES;
use crate::error::SimError;

/// A running session
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    /// Run seed for reproducibility
    seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) bodies: BodyRegistry,
    score: u64,
    /// Ticks advanced so far
    time_ticks: u64,
}

impl Simulation {
    /// Validate `config` and spawn the initial population
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, SimError> {
        let mut sim = Self::empty(config, seed)?;
        for _ in 0..sim.config.initial_bodies {
            sim.bodies.spawn(&sim.config, &mut sim.rng)?;
        }
        log::info!(
            "Session started: {}x{} arena, {} bodies, {:?} walls, seed {}",
            sim.config.width,
            sim.config.height,
            sim.bodies.len(),
            sim.config.boundary,
            seed
        );
        Ok(sim)
    }

    /// Validate `config` without spawning anything
    ///
    /// Useful for hand-placed scenarios via [`Simulation::registry_mut`].
    pub fn empty(config: SimConfig, seed: u64) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            bodies: BodyRegistry::with_capacity(
                config.initial_bodies.min(MAX_PREALLOCATED_BODIES),
            ),
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            time_ticks: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.bodies
    }

    pub fn registry_mut(&mut self) -> &mut BodyRegistry {
        &mut self.bodies
    }

    pub fn current_score(&self) -> u64 {
        self.score
    }

    pub fn tick_count(&self) -> u64 {
        self.time_ticks
    }

    /// Render snapshot; detached from the live bodies
    pub fn list_bodies(&self) -> Vec<BodyView> {
        self.bodies.views()
    }

    /// Wall settings derived from the configuration
    pub fn boundary(&self) -> Boundary {
        Boundary {
            width: self.config.width,
            height: self.config.height,
            mode: self.config.boundary,
            max_speed: self.config.max_speed,
            tick_scale: self.config.tick_scale(),
        }
    }

    /// Handle a pointer press at arena coordinates
    ///
    /// A hit removes the body, scores a point and spawns a replacement.
    /// Returns the removed body's handle, or `None` on a miss.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Result<Option<BodyId>, SimError> {
        let Some(id) = hit_test(&self.bodies, Vec2::new(x, y)) else {
            return Ok(None);
        };

        self.bodies.remove(id);
        self.score += 1;
        log::debug!("Popped {:?} at ({:.1}, {:.1}), score {}", id, x, y, self.score);

        self.bodies.spawn(&self.config, &mut self.rng)?;
        Ok(Some(id))
    }

    pub(crate) fn advance_clock(&mut self) {
        self.time_ticks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{BallColor, Body};

    #[test]
    fn test_new_spawns_population() {
        let sim = Simulation::new(SimConfig::default(), 42).unwrap();
        assert_eq!(sim.list_bodies().len(), 7);
        assert_eq!(sim.current_score(), 0);
        assert_eq!(sim.tick_count(), 0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SimConfig {
            tick_rate: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            Simulation::new(config, 1),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_huge_population_does_not_preallocate() {
        // Arena large enough that validation cannot rule the count out
        let config = SimConfig {
            width: 3.0e38,
            height: 3.0e38,
            initial_bodies: usize::MAX,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let sim = Simulation::empty(config, 1).unwrap();
        assert!(sim.registry().is_empty());
    }

    #[test]
    fn test_new_rejects_unfittable_population() {
        let config = SimConfig {
            initial_bodies: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(
            Simulation::new(config, 1),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = Simulation::new(SimConfig::default(), 99).unwrap();
        let b = Simulation::new(SimConfig::default(), 99).unwrap();
        let pa: Vec<_> = a.list_bodies().iter().map(|v| (v.pos, v.radius)).collect();
        let pb: Vec<_> = b.list_bodies().iter().map(|v| (v.pos, v.radius)).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn test_pointer_hit_scores_and_respawns() {
        let mut sim = Simulation::new(SimConfig::default(), 5).unwrap();
        let target = sim.list_bodies()[0];

        let popped = sim.pointer_down(target.pos.x, target.pos.y).unwrap();
        assert!(popped.is_some());
        assert!(!sim.registry().contains(popped.unwrap()));
        assert_eq!(sim.current_score(), 1);
        assert_eq!(sim.list_bodies().len(), 7);
    }

    #[test]
    fn test_pointer_miss_is_noop() {
        let mut sim = Simulation::empty(SimConfig::default(), 5).unwrap();
        sim.registry_mut().insert(Body::new(
            Vec2::new(600.0, 450.0),
            Vec2::ZERO,
            40.0,
            BallColor::Cyan,
        ));
        let before = sim.list_bodies();

        assert_eq!(sim.pointer_down(10.0, 10.0).unwrap(), None);
        assert_eq!(sim.current_score(), 0);
        assert_eq!(sim.list_bodies(), before);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut sim = Simulation::new(SimConfig::default(), 8).unwrap();
        let mut snapshot = sim.list_bodies();
        snapshot[0].pos = Vec2::new(-1000.0, -1000.0);
        assert_ne!(sim.list_bodies()[0].pos, snapshot[0].pos);

        sim.pointer_down(-1000.0, -1000.0).unwrap();
        assert_eq!(sim.current_score(), 0);
    }
}

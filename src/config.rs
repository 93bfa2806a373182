//! Session configuration
//!
//! Fixed for the lifetime of a [`Simulation`](crate::sim::Simulation). Loaded
//! from JSON by the driver binary, validated before any body is spawned.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;
use crate::sim::BallColor;

/// Wall reflection behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Mirror reflection: negate the component perpendicular to the wall
    Deterministic,
    /// Redraw the velocity, pointing away from the wall that was hit
    #[default]
    Randomized,
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Arena width (x extent)
    pub width: f32,
    /// Arena height (y extent)
    pub height: f32,
    /// Ticks per second of the driving loop
    pub tick_rate: f32,
    /// Population size, kept constant for the whole session
    pub initial_bodies: usize,
    pub boundary: BoundaryMode,
    /// Colors new bodies are drawn from
    pub palette: Vec<BallColor>,
    /// Smallest spawn radius (inclusive)
    pub radius_min: u32,
    /// Largest spawn radius (inclusive)
    pub radius_max: u32,
    /// Per-axis speed limit for spawned and wall-redrawn velocities
    pub max_speed: f32,
    /// Placement attempts before spawn gives up
    pub max_spawn_attempts: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            tick_rate: TICK_RATE,
            initial_bodies: INITIAL_BODIES,
            boundary: BoundaryMode::default(),
            palette: BallColor::ALL.to_vec(),
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            max_speed: MAX_SPEED,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
        }
    }
}

impl SimConfig {
    /// Per-tick integration factor
    ///
    /// Velocities are scaled by the tick rate itself, so a rate of 1 moves a
    /// body by exactly its velocity each tick.
    #[inline]
    pub fn tick_scale(&self) -> f32 {
        self.tick_rate
    }

    /// Upper bound on how many non-overlapping bodies the arena can hold
    ///
    /// Disks of the smallest radius can cover at most the arena's area.
    pub fn max_population(&self) -> usize {
        let smallest = std::f64::consts::PI * (self.radius_min as f64).powi(2);
        let area = self.width as f64 * self.height as f64;
        let bound = (area / smallest).floor();
        if bound >= usize::MAX as f64 {
            usize::MAX
        } else {
            bound as usize
        }
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(SimError::InvalidConfig("arena dimensions must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SimError::InvalidConfig("arena dimensions must be positive"));
        }
        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            return Err(SimError::InvalidConfig("tick_rate must be positive"));
        }
        if self.radius_min == 0 {
            return Err(SimError::InvalidConfig("radius_min must be positive"));
        }
        if self.radius_min > self.radius_max {
            return Err(SimError::InvalidConfig(
                "radius range is empty (radius_min > radius_max)",
            ));
        }
        let diameter = 2.0 * self.radius_max as f32;
        if diameter > self.width || diameter > self.height {
            return Err(SimError::InvalidConfig(
                "arena must be large enough to hold the largest body",
            ));
        }
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(SimError::InvalidConfig("max_speed must be positive"));
        }
        // Velocity draws span [-max_speed, max_speed)
        if !(2.0 * self.max_speed).is_finite() {
            return Err(SimError::InvalidConfig("max_speed is too large"));
        }
        if self.palette.is_empty() {
            return Err(SimError::InvalidConfig("palette must not be empty"));
        }
        if self.initial_bodies == 0 {
            return Err(SimError::InvalidConfig("initial_bodies must be non-zero"));
        }
        if self.initial_bodies > self.max_population() {
            return Err(SimError::InvalidConfig(
                "initial_bodies cannot fit in the arena",
            ));
        }
        if self.max_spawn_attempts == 0 {
            return Err(SimError::InvalidConfig(
                "max_spawn_attempts must be non-zero",
            ));
        }
        Ok(())
    }

    /// Parse a configuration from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

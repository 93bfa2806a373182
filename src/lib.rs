//! Ball Pop - colliding disks in a rectangular arena
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, walls, scoring)
//! - `vector`: 2D vector helpers with defined behavior at degenerate inputs
//! - `config`: Session configuration
//! - `error`: Error types

pub mod config;
pub mod error;
pub mod sim;
pub mod vector;

pub use config::{BoundaryMode, SimConfig};
pub use error::SimError;
pub use sim::{BallColor, BodyId, BodyView, Simulation, TickReport};

/// Session defaults
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1200.0;
    pub const ARENA_HEIGHT: f32 = 900.0;

    /// Ticks per second; also the per-tick velocity multiplier
    pub const TICK_RATE: f32 = 2.0;

    /// Population kept alive for the whole session
    pub const INITIAL_BODIES: usize = 7;

    /// Spawn radius range (inclusive)
    pub const RADIUS_MIN: u32 = 30;
    pub const RADIUS_MAX: u32 = 50;

    /// Per-axis speed limit for spawned and wall-redrawn velocities
    pub const MAX_SPEED: f32 = 5.0;

    /// Placement attempts before spawn reports a full arena
    pub const MAX_SPAWN_ATTEMPTS: u32 = 10_000;

    /// Registry slots reserved up front; larger populations grow on demand
    pub const MAX_PREALLOCATED_BODIES: usize = 1024;
}

//! Deterministic simulation module
//!
//! All physics and scoring lives here:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (registry slot order)
//! - No rendering or platform dependencies

pub mod body;
pub mod boundary;
pub mod collision;
pub mod interaction;
pub mod registry;
pub mod state;
pub mod tick;

pub use body::{BallColor, Body, BodyId, BodyView};
pub use boundary::{Boundary, WallHit, WallHits};
pub use collision::{PairResponse, check_pair, resolve_body_collisions, resolve_pair};
pub use interaction::hit_test;
pub use registry::BodyRegistry;
pub use state::Simulation;
pub use tick::{TickReport, tick};

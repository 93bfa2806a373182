//! Arena wall reflection
//!
//! Uses the same predictive style as body collisions: a body reflects when
//! its next step would carry its edge past a wall. The x and y axes are
//! checked independently, x first, so a body in a corner can reflect on both
//! in the same tick.

use glam::Vec2;
use rand::Rng;

use super::body::Body;
use crate::config::BoundaryMode;

/// Which wall a body is about to cross along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallHit {
    /// Left (x) or top (y) wall at coordinate 0
    Low,
    /// Right (x) or bottom (y) wall at the arena extent
    High,
}

impl WallHit {
    /// Unit sign pointing back into the arena
    #[inline]
    pub fn inward_sign(self) -> f32 {
        match self {
            WallHit::Low => 1.0,
            WallHit::High => -1.0,
        }
    }
}

/// Walls hit by one body this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub x: Option<WallHit>,
    pub y: Option<WallHit>,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }
}

/// Arena extent and reflection behavior
#[derive(Debug, Clone, Copy)]
pub struct Boundary {
    pub width: f32,
    pub height: f32,
    pub mode: BoundaryMode,
    /// Speed limit for randomized redraws
    pub max_speed: f32,
    pub tick_scale: f32,
}

/// Mirror `vel` across a wall perpendicular to the x axis (`x_wall`) or y axis
#[inline]
pub fn mirror(vel: Vec2, x_wall: bool) -> Vec2 {
    if x_wall {
        Vec2::new(-vel.x, vel.y)
    } else {
        Vec2::new(vel.x, -vel.y)
    }
}

/// Predictive crossing test along one axis
///
/// The low wall is checked first, matching how a too-narrow arena resolves.
pub fn axis_hit(pos: f32, vel: f32, radius: f32, extent: f32, tick_scale: f32) -> Option<WallHit> {
    let step = vel * tick_scale;
    if pos <= -step + radius {
        Some(WallHit::Low)
    } else if pos >= extent - step - radius {
        Some(WallHit::High)
    } else {
        None
    }
}

impl Boundary {
    /// Reflect `body` off any wall it is about to cross
    pub fn resolve<R: Rng>(&self, body: &mut Body, rng: &mut R) -> WallHits {
        let mut hits = WallHits::default();

        if let Some(hit) = axis_hit(body.pos.x, body.vel.x, body.radius, self.width, self.tick_scale) {
            body.vel = match self.mode {
                BoundaryMode::Deterministic => mirror(body.vel, true),
                BoundaryMode::Randomized => {
                    let (perp, parallel) = self.redraw(hit, rng);
                    Vec2::new(perp, parallel)
                }
            };
            hits.x = Some(hit);
        }

        if let Some(hit) = axis_hit(body.pos.y, body.vel.y, body.radius, self.height, self.tick_scale) {
            body.vel = match self.mode {
                BoundaryMode::Deterministic => mirror(body.vel, false),
                BoundaryMode::Randomized => {
                    let (perp, parallel) = self.redraw(hit, rng);
                    Vec2::new(parallel, perp)
                }
            };
            hits.y = Some(hit);
        }

        hits
    }

    /// Fresh (perpendicular, parallel) velocity pair for a randomized bounce
    ///
    /// The perpendicular sign comes from the wall itself, so a body that hit
    /// the wall with zero perpendicular speed still leaves inward.
    fn redraw<R: Rng>(&self, hit: WallHit, rng: &mut R) -> (f32, f32) {
        let perp = hit.inward_sign() * rng.random_range(0.0..self.max_speed);
        let parallel = rng.random_range(-self.max_speed..self.max_speed);
        (perp, parallel)
    }
}

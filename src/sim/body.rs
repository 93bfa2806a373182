//! Body entity and the types handed to renderers

use glam::Vec2;
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Stable handle for a live body, valid until the body is removed.
    pub struct BodyId;
}

/// Cosmetic body color (no effect on physics)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BallColor {
    Red,
    Blue,
    Yellow,
    Green,
    Magenta,
    Cyan,
}

impl BallColor {
    pub const ALL: [BallColor; 6] = [
        BallColor::Red,
        BallColor::Blue,
        BallColor::Yellow,
        BallColor::Green,
        BallColor::Magenta,
        BallColor::Cyan,
    ];

    /// 8-bit RGB triple for drawing
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            BallColor::Red => (255, 0, 0),
            BallColor::Blue => (0, 0, 255),
            BallColor::Yellow => (255, 255, 0),
            BallColor::Green => (0, 255, 0),
            BallColor::Magenta => (255, 0, 255),
            BallColor::Cyan => (0, 255, 255),
        }
    }
}

/// A simulated disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center, in arena coordinates
    pub pos: Vec2,
    /// Displacement per unit of tick scale
    pub vel: Vec2,
    /// Always > 0, fixed for the body's lifetime
    pub radius: f32,
    pub color: BallColor,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: BallColor) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Strict circle-circle overlap (touching counts as overlap)
    pub fn overlaps(&self, other: &Body) -> bool {
        let reach = self.radius + other.radius;
        self.pos.distance_squared(other.pos) <= reach * reach
    }

    /// Whether `point` lies inside or on the disk
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.radius * self.radius
    }

    /// Advance position by one tick
    #[inline]
    pub fn integrate(&mut self, tick_scale: f32) {
        self.pos += self.vel * tick_scale;
    }

    /// Kinetic energy per unit mass (x2), used by tests and diagnostics
    #[inline]
    pub fn speed_squared(&self) -> f32 {
        self.vel.length_squared()
    }
}

/// Read-only render snapshot of one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyView {
    pub id: BodyId,
    pub pos: Vec2,
    pub radius: f32,
    pub color: BallColor,
}

//! 2D vector helpers used by the collision code
//!
//! Thin layer over `glam::Vec2` that pins down the behavior at degenerate
//! inputs (axis-aligned and zero vectors) so collision resolution never sees
//! a NaN direction.

use glam::Vec2;

/// Direction returned by [`unit_vector`] for the zero vector
pub const FALLBACK_DIRECTION: Vec2 = Vec2::X;

/// Unit vector codirectional with `v`, or `None` for the zero vector
pub fn try_unit_vector(v: Vec2) -> Option<Vec2> {
    if v.x != 0.0 {
        let a = v.y.atan2(v.x);
        Some(Vec2::new(a.cos(), a.sin()))
    } else if v.y != 0.0 {
        // Exactly vertical: skip the trig round trip
        Some(Vec2::new(0.0, v.y.signum()))
    } else {
        None
    }
}

/// Unit vector codirectional with `v`
///
/// Falls back to [`FALLBACK_DIRECTION`] when `v` is zero.
#[inline]
pub fn unit_vector(v: Vec2) -> Vec2 {
    try_unit_vector(v).unwrap_or(FALLBACK_DIRECTION)
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.x * b.x + a.y * b.y
}

#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x + b.x, a.y + b.y)
}

#[inline]
pub fn sub(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x - b.x, a.y - b.y)
}

/// Euclidean norm
#[inline]
pub fn length(a: Vec2) -> f32 {
    a.length()
}

/// Angle between `v` and the positive x axis, in (-π, π]
///
/// The zero vector lands in the horizontal branch and yields 0.
pub fn angle(v: Vec2) -> f32 {
    use std::f32::consts::{FRAC_PI_2, PI};

    if v.y == 0.0 {
        if v.x < 0.0 { PI } else { 0.0 }
    } else if v.x == 0.0 {
        FRAC_PI_2 * v.y.signum()
    } else {
        v.y.atan2(v.x)
    }
}

/// Split `v` into (normal, tangential) parts relative to unit normal `n`
#[inline]
pub fn decompose(v: Vec2, n: Vec2) -> (Vec2, Vec2) {
    let normal = n * dot(v, n);
    (normal, sub(v, normal))
}

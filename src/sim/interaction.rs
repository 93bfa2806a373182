//! Pointer hit testing

use glam::Vec2;

use super::body::BodyId;
use super::registry::BodyRegistry;

/// First body in registry order whose disk contains `point`
///
/// Overlapping bodies resolve to whichever comes first, not the nearest.
pub fn hit_test(registry: &BodyRegistry, point: Vec2) -> Option<BodyId> {
    registry
        .iter()
        .find(|(_, body)| body.contains_point(point))
        .map(|(id, _)| id)
}

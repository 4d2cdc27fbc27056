//! Collision tests for platforms, the floor, and entity overlap
//!
//! Everything here is a pure predicate over post-integration positions.
//! The resolution (snapping, velocity resets, scoring) happens in `tick`.

use glam::Vec2;

use super::state::Platform;
use crate::aabb_overlap;
use crate::consts::*;

/// Whether a platform supports the player at the given projected position.
///
/// The player is "on" a platform when their horizontal extents overlap and
/// the projected bottom edge lies within the support band just below the
/// platform's top edge. The band (`SUPPORT_TOLERANCE`) is what lets a
/// falling player land instead of tunneling straight through.
pub fn platform_supports(pos: Vec2, platform: &Platform) -> bool {
    let horizontal = pos.x < platform.right() && pos.x + HITBOX_SIZE > platform.left();
    let bottom = pos.y + HITBOX_SIZE;
    let vertical = bottom >= platform.top() && bottom <= platform.top() + SUPPORT_TOLERANCE;
    horizontal && vertical
}

/// First platform supporting the player at the given position, if any
pub fn supporting_platform<'a>(pos: Vec2, platforms: &'a [Platform]) -> Option<&'a Platform> {
    platforms.iter().find(|p| platform_supports(pos, p))
}

/// Whether a projected vertical position has passed the playfield floor
#[inline]
pub fn on_floor(y: f32) -> bool {
    y > GAME_HEIGHT - HITBOX_SIZE
}

/// Entity/player overlap with the shared 20x20 hit-box
#[inline]
pub fn entity_overlap(a: Vec2, b: Vec2) -> bool {
    aabb_overlap(a, b, HITBOX_SIZE)
}

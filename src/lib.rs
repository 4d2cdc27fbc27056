//! Turtle Hop - An emoji platformer for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Render projection (emoji sprites + HUD via the DOM)
//! - `platform`: Browser/native platform abstraction
//! - `highscores`: Persisted leaderboard
//! - `settings`: Difficulty presets and preferences

pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::{Difficulty, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (units == CSS pixels)
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 400.0;

    /// One frame unit (seconds). Physics constants below are per-frame-unit;
    /// `tick` scales them by `dt / FRAME_UNIT`.
    pub const FRAME_UNIT: f32 = 0.016;

    /// Downward acceleration per frame unit
    pub const GRAVITY: f32 = 0.5;
    /// Launch speed when jumping off a platform
    pub const JUMP_STRENGTH: f32 = 10.0;
    /// Horizontal speed per frame unit while a direction is held
    pub const MOVE_SPEED: f32 = 5.0;

    /// Hit-box size shared by the player and every entity (square)
    pub const HITBOX_SIZE: f32 = 20.0;
    /// Platform height (fixed for every platform)
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Band below a platform top in which the player counts as supported
    pub const SUPPORT_TOLERANCE: f32 = 10.0;

    /// Starting lives
    pub const STARTING_LIVES: u8 = 3;
    /// Transient HUD message duration (seconds)
    pub const MESSAGE_DURATION: f32 = 2.0;
}

/// Axis-aligned overlap test with a shared square hit-box.
///
/// Entities overlap when both coordinate deltas are strictly below the box
/// size. Every entity in the game uses the same 20x20 box.
#[inline]
pub fn aabb_overlap(a: Vec2, b: Vec2, size: f32) -> bool {
    (a.x - b.x).abs() < size && (a.y - b.y).abs() < size
}

//! Game state and core simulation types
//!
//! The whole session lives in one `GameState` value transformed by `tick`;
//! nothing gameplay-visible is stored outside it.

use glam::Vec2;

use crate::consts::*;
use crate::settings::Difficulty;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen: name entry and difficulty selection
    Menu,
    /// Active gameplay (the only phase in which `tick` advances)
    Playing,
    /// Run ended, final score and leaderboard shown
    GameOver,
}

/// The player character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    /// Vertical velocity (positive is downward, units per frame unit)
    pub vy: f32,
    /// Invulnerability window remaining (seconds); powered up while > 0
    pub power_secs: f32,
}

impl Player {
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(50.0, 200.0),
            vy: 0.0,
            power_secs: 0.0,
        }
    }

    /// Whether the invulnerability window is open
    #[inline]
    pub fn powered_up(&self) -> bool {
        self.power_secs > 0.0
    }
}

/// A static platform. Height is fixed (`PLATFORM_HEIGHT`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub pos: Vec2,
    pub width: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
        }
    }

    /// Top edge (y grows downward)
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }
}

/// A collectible coin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    pub pos: Vec2,
}

/// A patrolling enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    /// Signed horizontal speed (units per frame unit); sign is the
    /// patrol direction and flips only at the playfield bounds
    pub dx: f32,
}

/// An invulnerability pickup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUp {
    pub pos: Vec2,
}

/// Transient HUD message with its remaining display time
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: String,
    /// Seconds until the message clears itself
    pub secs_remaining: f32,
}

/// Complete session state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Difficulty selected in the menu; constant for the session
    pub difficulty: Difficulty,
    /// Player character
    pub player: Player,
    /// Level geometry
    pub platforms: Vec<Platform>,
    /// Remaining coins; emptying the set advances the level
    pub coins: Vec<Coin>,
    /// Patrolling enemies
    pub enemies: Vec<Enemy>,
    /// Remaining invulnerability pickups
    pub power_ups: Vec<PowerUp>,
    /// Score (never decreases)
    pub score: u32,
    /// Lives remaining; 0 is terminal
    pub lives: u8,
    /// Level counter (1-based)
    pub level: u32,
    /// Transient HUD message, if one is showing
    pub message: Option<Message>,
}

impl GameState {
    /// Create a fresh session sitting in the menu
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            phase: GamePhase::Menu,
            difficulty,
            player: Player::spawn(),
            platforms: Vec::new(),
            coins: Vec::new(),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            score: 0,
            lives: STARTING_LIVES,
            level: 1,
            message: None,
        }
    }

    /// Show a transient message, replacing any current one
    pub fn post_message(&mut self, text: impl Into<String>) {
        self.message = Some(Message {
            text: text.into(),
            secs_remaining: MESSAGE_DURATION,
        });
    }
}

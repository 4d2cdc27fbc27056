//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Single `tick` entry point driven by elapsed time
//! - Stable entity ordering (spawn order within a level)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{entity_overlap, on_floor, platform_supports, supporting_platform};
pub use state::{Coin, Enemy, GamePhase, GameState, Message, Platform, Player, PowerUp};
pub use tick::{TickInput, generate_level, tick};

//! Drawable snapshot of the simulation
//!
//! The presentation layer consumes only this struct; it never reads
//! `GameState` directly.

use glam::Vec2;

use crate::sim::{GameState, Platform};

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub player_pos: Vec2,
    pub powered_up: bool,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Vec2>,
    pub enemies: Vec<Vec2>,
    pub power_ups: Vec<Vec2>,
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    /// Transient HUD message, if one is showing
    pub message: Option<String>,
}

/// Project the session state into a drawable frame
pub fn project(state: &GameState) -> RenderFrame {
    RenderFrame {
        player_pos: state.player.pos,
        powered_up: state.player.powered_up(),
        platforms: state.platforms.clone(),
        coins: state.coins.iter().map(|c| c.pos).collect(),
        enemies: state.enemies.iter().map(|e| e.pos).collect(),
        power_ups: state.power_ups.iter().map(|p| p.pos).collect(),
        score: state.score,
        lives: state.lives,
        level: state.level,
        message: state.message.as_ref().map(|m| m.text.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Difficulty;
    use crate::sim::{GamePhase, generate_level};

    #[test]
    fn test_projection_mirrors_state() {
        let mut state = GameState::new(Difficulty::Normal);
        generate_level(&mut state);
        state.phase = GamePhase::Playing;
        state.score = 25;
        state.lives = 2;
        state.level = 3;
        state.post_message("Level 3!");

        let frame = project(&state);
        assert_eq!(frame.player_pos, state.player.pos);
        assert!(!frame.powered_up);
        assert_eq!(frame.platforms.len(), 4);
        assert_eq!(frame.coins.len(), 3);
        assert_eq!(frame.enemies.len(), 2);
        assert_eq!(frame.power_ups.len(), 1);
        assert_eq!(frame.score, 25);
        assert_eq!(frame.lives, 2);
        assert_eq!(frame.level, 3);
        assert_eq!(frame.message.as_deref(), Some("Level 3!"));
    }

    #[test]
    fn test_projection_reports_power_window() {
        let mut state = GameState::new(Difficulty::Normal);
        state.player.power_secs = 1.0;
        assert!(project(&state).powered_up);

        state.player.power_secs = 0.0;
        assert!(!project(&state).powered_up);
    }
}

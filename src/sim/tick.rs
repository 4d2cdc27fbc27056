//! Per-tick simulation update
//!
//! One call to `tick` advances the whole session by `dt` seconds: the player
//! is integrated first, then every collision category (platform support,
//! floor, coins, power-ups, enemies) is resolved against the
//! post-integration position. Timed effects are plain countdown fields in
//! `GameState`, decremented here, so expiry needs no out-of-band callbacks.

use glam::Vec2;

use super::collision::{entity_overlap, on_floor, supporting_platform};
use super::state::{Coin, Enemy, GamePhase, GameState, Platform, Player, PowerUp};
use crate::consts::*;

/// Held input flags for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
    /// Jump held
    pub jump: bool,
}

/// Advance the session by `dt` seconds of wall-clock time.
///
/// A no-op outside the `Playing` phase and for a zero `dt`.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Playing || dt <= 0.0 {
        return;
    }

    // Physics constants are per 16ms frame; scale them to this tick
    let scale = dt / FRAME_UNIT;

    integrate_player(state, input, scale);
    move_enemies(state, scale);
    expire_timers(state, dt);
    collect_coins(state);
    collect_power_ups(state);
    apply_enemy_damage(state);

    if state.phase == GamePhase::Playing && state.coins.is_empty() {
        advance_level(state);
    }
}

/// Integrate player motion and resolve platform support and the floor
fn integrate_player(state: &mut GameState, input: &TickInput, scale: f32) {
    let mut x = state.player.pos.x;
    if input.left {
        x -= MOVE_SPEED * scale;
    }
    if input.right {
        x += MOVE_SPEED * scale;
    }
    x = x.clamp(0.0, GAME_WIDTH - HITBOX_SIZE);

    // Gravity applies unconditionally; support below zeroes it again
    let mut vy = state.player.vy + GRAVITY * scale;
    let mut y = state.player.pos.y + vy * scale;

    if let Some(platform) = supporting_platform(Vec2::new(x, y), &state.platforms) {
        y = platform.top() - HITBOX_SIZE;
        vy = if input.jump { -JUMP_STRENGTH } else { 0.0 };
    }

    // Fallback ground: dead clamp, no jump launch
    if on_floor(y) {
        y = GAME_HEIGHT - HITBOX_SIZE;
        vy = 0.0;
    }

    state.player.pos = Vec2::new(x, y);
    state.player.vy = vy;
}

/// Patrol enemies; direction inverts only at the playfield bounds
fn move_enemies(state: &mut GameState, scale: f32) {
    for enemy in &mut state.enemies {
        enemy.pos.x += enemy.dx * scale;
        if enemy.pos.x <= 0.0 || enemy.pos.x >= GAME_WIDTH - HITBOX_SIZE {
            enemy.dx = -enemy.dx;
        }
    }
}

/// Count down the power-up window and the transient message
fn expire_timers(state: &mut GameState, dt: f32) {
    if state.player.power_secs > 0.0 {
        state.player.power_secs = (state.player.power_secs - dt).max(0.0);
    }
    if let Some(message) = &mut state.message {
        message.secs_remaining -= dt;
    }
    if state
        .message
        .as_ref()
        .is_some_and(|m| m.secs_remaining <= 0.0)
    {
        state.message = None;
    }
}

/// Collect overlapped coins; each coin scores once and is gone
fn collect_coins(state: &mut GameState) {
    let player_pos = state.player.pos;
    let coin_value = state.difficulty.coin_value();

    let before = state.coins.len();
    state.coins.retain(|coin| !entity_overlap(coin.pos, player_pos));
    let collected = (before - state.coins.len()) as u32;
    state.score += collected * coin_value;
}

/// Collect overlapped power-ups, opening the invulnerability window
fn collect_power_ups(state: &mut GameState) {
    let player_pos = state.player.pos;

    let before = state.power_ups.len();
    state.power_ups.retain(|p| !entity_overlap(p.pos, player_pos));
    if state.power_ups.len() < before {
        let duration = state.difficulty.power_up_duration();
        state.player.power_secs = duration;
        state.post_message(format!(
            "Power Up! Invincible for {} seconds!",
            duration as u32
        ));
    }
}

/// Enemy contact damage. Lives never go negative; hitting 0 transitions to
/// `GameOver` exactly once.
fn apply_enemy_damage(state: &mut GameState) {
    if state.player.powered_up() {
        return;
    }

    let player_pos = state.player.pos;
    let hits = state
        .enemies
        .iter()
        .filter(|e| entity_overlap(e.pos, player_pos))
        .count();

    for _ in 0..hits {
        if state.lives > 1 {
            state.lives -= 1;
        } else {
            state.lives = 0;
            state.phase = GamePhase::GameOver;
            log::info!(
                "Game over at level {} with score {}",
                state.level,
                state.score
            );
            return;
        }
    }
}

/// All coins collected: next level, same score and lives
fn advance_level(state: &mut GameState) {
    state.level += 1;
    generate_level(state);
    state.post_message(format!("Level {}!", state.level));
    log::info!("Level up -> {}", state.level);
}

/// Reset the entity collections and player to the level-start layout.
///
/// The layout is a fixed table; difficulty only scales enemy speed (and,
/// elsewhere, coin value and power-up duration).
pub fn generate_level(state: &mut GameState) {
    let speed = state.difficulty.enemy_speed();

    state.platforms = vec![
        Platform::new(0.0, 350.0, 200.0),
        Platform::new(250.0, 300.0, 200.0),
        Platform::new(500.0, 250.0, 200.0),
        Platform::new(750.0, 350.0, 200.0),
    ];
    state.coins = vec![
        Coin {
            pos: Vec2::new(100.0, 300.0),
        },
        Coin {
            pos: Vec2::new(300.0, 250.0),
        },
        Coin {
            pos: Vec2::new(550.0, 200.0),
        },
    ];
    state.enemies = vec![
        Enemy {
            pos: Vec2::new(400.0, 325.0),
            dx: speed,
        },
        Enemy {
            pos: Vec2::new(700.0, 325.0),
            dx: -speed,
        },
    ];
    state.power_ups = vec![PowerUp {
        pos: Vec2::new(400.0, 200.0),
    }];
    state.player = Player::spawn();
}

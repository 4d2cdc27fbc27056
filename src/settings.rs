//! Difficulty presets and player preferences
//!
//! The difficulty table fixes enemy speed, coin value, and power-up
//! duration for a whole session. Preferences (last difficulty and player
//! name) are persisted to LocalStorage so the menu comes back pre-filled.

use serde::{Deserialize, Serialize};

use crate::platform;

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Enemy patrol speed (units per frame unit)
    pub fn enemy_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Normal => 2.0,
            Difficulty::Hard => 3.0,
        }
    }

    /// Score awarded per coin
    pub fn coin_value(&self) -> u32 {
        match self {
            Difficulty::Easy => 15,
            Difficulty::Normal => 10,
            Difficulty::Hard => 5,
        }
    }

    /// Invulnerability window after a power-up (seconds)
    pub fn power_up_duration(&self) -> f32 {
        match self {
            Difficulty::Easy => 7.0,
            Difficulty::Normal => 5.0,
            Difficulty::Hard => 3.0,
        }
    }
}

/// Player preferences, restored into the menu at startup
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Last selected difficulty
    pub difficulty: Difficulty,
    /// Last entered player name
    pub player_name: String,
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "turtle_hop_settings";

    /// Load preferences from storage; absent or malformed data yields
    /// the defaults.
    pub fn load() -> Self {
        if let Some(json) = platform::storage_get(Self::STORAGE_KEY) {
            if let Ok(settings) = serde_json::from_str(&json) {
                log::info!("Loaded settings from storage");
                return settings;
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save preferences to storage
    pub fn save(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            platform::storage_set(Self::STORAGE_KEY, &json);
            log::info!("Settings saved");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip() {
        for d in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("EASY"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_difficulty_table() {
        // Harder runs mean faster enemies, cheaper coins, shorter windows
        assert!(Difficulty::Easy.enemy_speed() < Difficulty::Hard.enemy_speed());
        assert!(Difficulty::Easy.coin_value() > Difficulty::Hard.coin_value());
        assert!(Difficulty::Easy.power_up_duration() > Difficulty::Hard.power_up_duration());

        assert_eq!(Difficulty::Normal.enemy_speed(), 2.0);
        assert_eq!(Difficulty::Normal.coin_value(), 10);
        assert_eq!(Difficulty::Normal.power_up_duration(), 5.0);
    }
}

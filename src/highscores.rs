//! High score leaderboard system
//!
//! Persisted to LocalStorage, tracks the top 5 scores.

use serde::{Deserialize, Serialize};

use crate::platform;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// Label used when the player never entered a name
pub const DEFAULT_NAME: &str = "Anonymous";

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player's name (never empty; defaults to [`DEFAULT_NAME`])
    pub name: String,
    /// Final score of the run
    pub score: u32,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "turtle_hop_highscores";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score would stay on the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Record a finished run. Every run is inserted (sorted descending by
    /// score) and the list truncated to the cap; the returned rank
    /// (1-indexed) is `None` when the entry fell straight off the end.
    ///
    /// An empty or whitespace name becomes [`DEFAULT_NAME`].
    pub fn add_score(&mut self, name: &str, score: u32) -> Option<usize> {
        let name = name.trim();
        let entry = HighScoreEntry {
            name: if name.is_empty() {
                DEFAULT_NAME.to_string()
            } else {
                name.to_string()
            },
            score,
        };

        // Insertion point: before the first strictly-smaller score, so
        // equal scores keep their original order
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        (rank <= MAX_HIGH_SCORES).then_some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load high scores from storage. Absent or malformed data yields an
    /// empty leaderboard; a bad payload never takes the game down.
    pub fn load() -> Self {
        if let Some(json) = platform::storage_get(Self::STORAGE_KEY) {
            match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    return scores;
                }
                Err(e) => log::warn!("Discarding malformed high scores: {e}"),
            }
        }

        log::info!("No high scores found, starting fresh");
        Self::new()
    }

    /// Save high scores to storage
    pub fn save(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            platform::storage_set(Self::STORAGE_KEY, &json);
            log::info!("High scores saved ({} entries)", self.entries.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_sorted_descending(scores: &HighScores) -> bool {
        scores.entries.windows(2).all(|w| w[0].score >= w[1].score)
    }

    #[test]
    fn test_add_score_ranks() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score("A", 100), Some(1));
        assert_eq!(scores.add_score("B", 200), Some(1));
        assert_eq!(scores.add_score("C", 150), Some(2));
        assert_eq!(scores.top_score(), Some(200));
        assert!(is_sorted_descending(&scores));
    }

    #[test]
    fn test_truncates_to_cap() {
        let mut scores = HighScores::new();
        for (i, score) in [50, 40, 30, 20, 10].iter().enumerate() {
            assert_eq!(scores.add_score("P", *score), Some(i + 1));
        }
        // Too low for a full board: inserted then dropped
        assert_eq!(scores.add_score("low", 5), None);
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().unwrap().score, 10);

        // Good enough: lands mid-board, lowest falls off
        assert_eq!(scores.add_score("mid", 35), Some(3));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().unwrap().score, 20);
    }

    #[test]
    fn test_empty_name_becomes_default() {
        let mut scores = HighScores::new();
        scores.add_score("", 10);
        scores.add_score("   ", 20);
        assert_eq!(scores.entries[0].name, DEFAULT_NAME);
        assert_eq!(scores.entries[1].name, DEFAULT_NAME);
    }

    #[test]
    fn test_equal_scores_keep_insertion_order() {
        let mut scores = HighScores::new();
        scores.add_score("first", 100);
        scores.add_score("second", 100);
        assert_eq!(scores.entries[0].name, "first");
        assert_eq!(scores.entries[1].name, "second");
    }

    #[test]
    fn test_qualifies() {
        let mut scores = HighScores::new();
        assert!(scores.qualifies(0));
        for score in [50, 40, 30, 20, 10] {
            scores.add_score("P", score);
        }
        assert!(!scores.qualifies(10));
        assert!(scores.qualifies(11));
    }

    proptest! {
        /// After any sequence of insertions the list is sorted descending
        /// and never exceeds the cap.
        #[test]
        fn prop_sorted_and_capped(insertions in prop::collection::vec(any::<u32>(), 0..50)) {
            let mut scores = HighScores::new();
            for score in insertions {
                scores.add_score("P", score);
                prop_assert!(scores.entries.len() <= MAX_HIGH_SCORES);
                prop_assert!(is_sorted_descending(&scores));
            }
        }
    }
}

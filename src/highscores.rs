//! High score history
//!
//! Top 10 finished runs, kept in memory for the lifetime of the process.
//! Resetting a session back to the menu never touches this list.

use serde::{Deserialize, Serialize};

use crate::sim::{GameState, Level};

/// Board size
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    pub coins: u32,
    /// Level the run ended on
    pub level: Level,
    /// Whether the boss was defeated
    pub victory: bool,
    /// Length of the run in ticks
    pub ticks: u64,
}

impl HighScoreEntry {
    /// Summarize a finished session
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            coins: state.coins,
            level: state.level,
            victory: state.victory(),
            ticks: state.time_ticks,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Zero-score runs never make the board; a full board needs a strictly
    /// better score than its last entry.
    pub fn qualifies(&self, score: u64) -> bool {
        score > 0
            && (self.entries.len() < MAX_HIGH_SCORES
                || self.entries.last().is_none_or(|last| score > last.score))
    }

    /// Insert a finished run, returning its 1-based rank if it made the board
    pub fn add(&mut self, entry: HighScoreEntry) -> Option<usize> {
        if !self.qualifies(entry.score) {
            return None;
        }

        // Ties keep the earlier run ahead
        let index = self
            .entries
            .iter()
            .position(|e| entry.score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(index, entry);
        self.entries.truncate(MAX_HIGH_SCORES);

        log::info!("Run placed #{} on the high score board", index + 1);
        Some(index + 1)
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: u64) -> HighScoreEntry {
        HighScoreEntry {
            score,
            coins: 0,
            level: Level::City,
            victory: false,
            ticks: 0,
        }
    }

    #[test]
    fn test_zero_never_qualifies() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add(entry(0)), None);
        assert!(scores.entries.is_empty());
    }

    #[test]
    fn test_sorted_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add(entry(50)), Some(1));
        assert_eq!(scores.add(entry(120)), Some(1));
        assert_eq!(scores.add(entry(60)), Some(2));
        let ordered: Vec<_> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(ordered, vec![120, 60, 50]);
        assert_eq!(scores.top_score(), Some(120));
    }

    #[test]
    fn test_full_board_drops_lowest() {
        let mut scores = HighScores::new();
        for i in 1..=MAX_HIGH_SCORES as u64 {
            scores.add(entry(i * 10));
        }
        assert!(!scores.qualifies(10));
        assert_eq!(scores.add(entry(15)), Some(10));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(15));
    }

    #[test]
    fn test_tie_ranks_after_existing() {
        let mut scores = HighScores::new();
        scores.add(entry(100));
        assert_eq!(scores.add(entry(100)), Some(2));
    }
}

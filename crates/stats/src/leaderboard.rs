use serde::{Deserialize, Serialize};

use boggle_types::LEADERBOARD_LIMIT;

use crate::summary::GameSummary;

/// Top games by score, best first
///
/// Equal scores keep insertion order: a new entry goes after every entry
/// scoring at least as much.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<GameSummary>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert and truncate; returns the entry's rank (0-based) if it was kept
    pub fn insert(&mut self, summary: GameSummary) -> Option<usize> {
        let rank = self
            .entries
            .iter()
            .position(|e| e.score < summary.score)
            .unwrap_or(self.entries.len());
        if rank >= LEADERBOARD_LIMIT {
            return None;
        }
        self.entries.insert(rank, summary);
        self.entries.truncate(LEADERBOARD_LIMIT);
        Some(rank)
    }

    /// Restore ordering and the size bound on a stored board
    ///
    /// The sort is stable, so stored ties keep their order.
    pub fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(LEADERBOARD_LIMIT);
    }

    pub fn entries(&self) -> &[GameSummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

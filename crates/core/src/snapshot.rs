//! Read model for render layers
//!
//! [`GameSnapshot`] is a plain, serializable copy of everything a view needs.
//! Produce one with [`GameState::snapshot`](crate::GameState::snapshot) or reuse
//! an allocation with [`GameState::snapshot_into`](crate::GameState::snapshot_into).

use serde::Serialize;

use crate::board::Cell;
use crate::types::{Difficulty, GameStatus, Position, ALMOST_FINISHED_PERCENT};
use crate::validator::Word;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellSnapshot {
    /// Tile text, `QU` for the Q tile
    pub letter: &'static str,
    pub position: Position,
    pub is_selected: bool,
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        Self {
            letter: cell.letter.display(),
            position: cell.position,
            is_selected: cell.is_selected,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub episode_id: u64,
    pub status: GameStatus,
    /// Rows top to bottom; empty while no board exists
    pub board: Vec<Vec<CellSnapshot>>,
    pub board_size: u8,
    pub difficulty: Difficulty,
    pub language: String,
    pub dictionary_ready: bool,
    pub selection_path: Vec<Position>,
    pub current_word: String,
    pub found_words: Vec<Word>,
    pub score: u32,
    pub time_remaining: u32,
    pub initial_duration: u32,
    /// Remaining time as a percentage of the round length
    pub progress_percent: u32,
    pub almost_finished: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether selection commands currently apply
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Active
    }
}

/// Remaining time in percent of `initial`, 0 when no round is configured
pub fn progress_percent(remaining: u32, initial: u32) -> u32 {
    if initial == 0 {
        return 0;
    }
    ((remaining as u64 * 100) / initial as u64) as u32
}

/// True when at most 10% of the round is left
pub fn almost_finished(remaining: u32, initial: u32) -> bool {
    initial > 0 && (remaining as u64) * 100 <= (initial as u64) * ALMOST_FINISHED_PERCENT as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(180, 180), 100);
        assert_eq!(progress_percent(90, 180), 50);
        assert_eq!(progress_percent(0, 180), 0);
        assert_eq!(progress_percent(5, 0), 0);
    }

    #[test]
    fn test_almost_finished_threshold() {
        assert!(!almost_finished(19, 180));
        assert!(almost_finished(18, 180));
        assert!(almost_finished(0, 180));
        assert!(!almost_finished(0, 0));
    }

    #[test]
    fn test_clear_resets_to_default() {
        let mut snap = GameSnapshot {
            score: 10,
            current_word: "CAT".into(),
            ..GameSnapshot::default()
        };
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
        assert!(!snap.playable());
    }
}

//! Selection path and word buffer
//!
//! The path and the word buffer always move together: every push appends a
//! position and its tile text, every pop removes both.

use crate::board::Letter;
use crate::types::Position;

/// Why a tile could not be added to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtendError {
    AlreadySelected,
    NotAdjacent,
}

/// Ordered tile path with its spelled buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    path: Vec<Position>,
    letters: Vec<Letter>,
    word: String,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Current word buffer in display form (`QU` for the Q tile)
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn last(&self) -> Option<Position> {
        self.path.last().copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.path.contains(&pos)
    }

    /// Check whether `pos` may extend the path
    pub fn check_extend(&self, pos: Position) -> Result<(), ExtendError> {
        if self.contains(pos) {
            return Err(ExtendError::AlreadySelected);
        }
        match self.last() {
            Some(last) if !last.is_adjacent(pos) => Err(ExtendError::NotAdjacent),
            _ => Ok(()),
        }
    }

    /// Append a tile; fails without touching the selection
    pub fn push(&mut self, pos: Position, letter: Letter) -> Result<(), ExtendError> {
        self.check_extend(pos)?;
        self.path.push(pos);
        self.letters.push(letter);
        self.word.push_str(letter.display());
        Ok(())
    }

    /// Remove the last tile, truncating the buffer by its unit length
    pub fn pop(&mut self) -> Option<Position> {
        let pos = self.path.pop()?;
        if let Some(letter) = self.letters.pop() {
            let keep = self.word.len() - letter.unit_len();
            self.word.truncate(keep);
        }
        Some(pos)
    }

    pub fn clear(&mut self) {
        self.path.clear();
        self.letters.clear();
        self.word.clear();
    }
}

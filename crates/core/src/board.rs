//! Board module - manages the letter grid
//!
//! The board is an NxN grid (N in 4..=6) of lettered cells.
//! Uses a flat vector in row-major order for cache locality.
//! Coordinates: (row, col), row 0 is the top row, col 0 the left column.
//!
//! The `Q` tile is a single cell that spells `QU`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::types::{Position, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

const DISPLAY: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "QU", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

/// One tile face: an uppercase ASCII letter
///
/// `Q` is displayed and spelled as `QU` and counts as a single logical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub struct Letter(u8);

impl Letter {
    /// Build a letter from an ASCII alphabetic character (any case)
    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Letter(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    pub fn is_qu(self) -> bool {
        self.0 == b'Q'
    }

    /// Display text: "QU" for the Q tile, the letter otherwise
    pub fn display(self) -> &'static str {
        DISPLAY[(self.0 - b'A') as usize]
    }

    /// Number of characters this tile contributes to a word buffer
    pub fn unit_len(self) -> usize {
        if self.is_qu() {
            2
        } else {
            1
        }
    }

    /// Append the lowercase spelling of this tile
    pub fn push_lower(self, out: &mut String) {
        if self.is_qu() {
            out.push_str("qu");
        } else {
            out.push(self.as_char().to_ascii_lowercase());
        }
    }

    /// Match this tile against `word[at..]` (lowercase chars)
    ///
    /// Returns the index just past the consumed characters. The Q tile matches a
    /// lone `q`, and consumes a following `u` as well when present.
    pub fn match_at(self, word: &[char], at: usize) -> Option<usize> {
        let c = *word.get(at)?;
        if c != self.as_char().to_ascii_lowercase() {
            return None;
        }
        if self.is_qu() && word.get(at + 1) == Some(&'u') {
            Some(at + 2)
        } else {
            Some(at + 1)
        }
    }
}

impl From<Letter> for char {
    fn from(value: Letter) -> Self {
        value.as_char()
    }
}

impl TryFrom<char> for Letter {
    type Error = GameError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Letter::new(value).ok_or_else(|| GameError::invalid(format!("'{value}' is not a letter")))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// A board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub letter: Letter,
    pub position: Position,
    pub is_selected: bool,
}

/// The letter grid - `size` x `size` cells in row-major order
///
/// Deserializing goes through [`Board::from_letters`], so a stored board is
/// checked like a built one. Selection flags are not restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: u8,
    cells: Vec<Cell>,
}

#[derive(Deserialize)]
struct RawBoard {
    size: u8,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let board = Self::from_letters(
            raw.size,
            &raw.cells.iter().map(|c| c.letter).collect::<Vec<_>>(),
        )?;
        let misplaced = raw
            .cells
            .iter()
            .zip(board.cells())
            .any(|(stored, built)| stored.position != built.position);
        if misplaced {
            return Err(GameError::invalid("cells are not in row-major order"));
        }
        Ok(board)
    }
}

impl Board {
    /// Check that a board edge is supported
    pub fn check_size(size: u8) -> Result<(), GameError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            Ok(())
        } else {
            Err(GameError::invalid(format!(
                "board size {size} outside {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
            )))
        }
    }

    /// Build a board from letters in row-major order
    pub fn from_letters(size: u8, letters: &[Letter]) -> Result<Self, GameError> {
        Self::check_size(size)?;
        let expected = size as usize * size as usize;
        if letters.len() != expected {
            return Err(GameError::invalid(format!(
                "expected {expected} letters for a {size}x{size} board, got {}",
                letters.len()
            )));
        }

        let cells = letters
            .iter()
            .enumerate()
            .map(|(i, &letter)| Cell {
                letter,
                position: Position::new((i / size as usize) as u8, (i % size as usize) as u8),
                is_selected: false,
            })
            .collect();

        Ok(Self { size, cells })
    }

    /// Build a board from literal rows, one character per tile
    ///
    /// `Q` denotes the `QU` tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use boggle_core::Board;
    ///
    /// let board = Board::from_rows(&["CATS", "QRST", "ABCD", "EFGH"]).unwrap();
    /// assert_eq!(board.size(), 4);
    /// assert!(Board::from_rows(&["ABC", "DEF", "GHI"]).is_err());
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, GameError> {
        let size = u8::try_from(rows.len())
            .map_err(|_| GameError::invalid(format!("{} rows is too many", rows.len())))?;
        Self::check_size(size)?;

        let mut letters = Vec::with_capacity(rows.len() * rows.len());
        for (row, text) in rows.iter().enumerate() {
            let before = letters.len();
            for c in text.chars() {
                letters.push(Letter::try_from(c)?);
            }
            if letters.len() - before != rows.len() {
                return Err(GameError::invalid(format!(
                    "row {row} has {} tiles, expected {}",
                    letters.len() - before,
                    rows.len()
                )));
            }
        }

        Self::from_letters(size, &letters)
    }

    /// Edge length
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether a position lies on the board
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(pos.index(self.size))
    }

    pub fn letter(&self, pos: Position) -> Option<Letter> {
        self.cell(pos).map(|c| c.letter)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size as usize)
    }

    /// Spell a path in lowercase, `QU` tiles contributing "qu"
    ///
    /// Returns `None` if any position is off the board.
    pub fn spell(&self, path: &[Position]) -> Option<String> {
        let mut out = String::with_capacity(path.len() + 1);
        for &pos in path {
            self.letter(pos)?.push_lower(&mut out);
        }
        Some(out)
    }

    pub(crate) fn set_selected(&mut self, pos: Position, selected: bool) -> bool {
        if !self.contains(pos) {
            return false;
        }
        let idx = pos.index(self.size);
        self.cells[idx].is_selected = selected;
        true
    }

    pub(crate) fn clear_selected(&mut self) {
        for cell in &mut self.cells {
            cell.is_selected = false;
        }
    }

    /// Positions of currently flagged cells
    pub fn selected_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .filter(|c| c.is_selected)
            .map(|c| c.position)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:<2}", cell.letter.display())?;
            }
        }
        Ok(())
    }
}

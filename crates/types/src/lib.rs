//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with serde derives, making them usable in any
//! context (core logic, render layers, persistence).
//!
//! # Board Dimensions
//!
//! Boards are square grids:
//!
//! - **Minimum**: 4x4 (the standard game)
//! - **Maximum**: 6x6
//! - Coordinates are `(row, col)`, both 0-based, row-major
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_WORD_LEN` | 3 | Shortest accepted word (in characters) |
//! | `DEFAULT_DURATION_SECS` | 180 | Default round length |
//! | `TICK_SECS` | 1 | Seconds removed from the clock per timer tick |
//! | `RECENT_GAMES_LIMIT` | 10 | Games kept in the recent history |
//! | `LEADERBOARD_LIMIT` | 100 | Entries kept on the leaderboard |
//!
//! # Scoring Table
//!
//! | Length | Base |
//! |--------|------|
//! | 0-2 | 0 |
//! | 3-4 | 1 |
//! | 5 | 2 |
//! | 6 | 3 |
//! | 7 | 5 |
//! | 8+ | 11 |
//!
//! Rare letters add a flat bonus once per word: q +2, z +3, x +2, j +2, k +1.
//!
//! # Examples
//!
//! ```
//! use boggle_types::{Difficulty, GameCommand, Position};
//!
//! let difficulty = Difficulty::from_str("Hard").unwrap();
//! assert_eq!(difficulty, Difficulty::Hard);
//!
//! let a = Position::new(1, 1);
//! let b = Position::new(2, 2);
//! assert!(a.is_adjacent(b));
//!
//! let command = GameCommand::from_str("submitWord").unwrap();
//! assert_eq!(command, GameCommand::Submit);
//! ```

use serde::{Deserialize, Serialize};

/// Smallest supported board edge (the standard 4x4 game)
pub const MIN_BOARD_SIZE: u8 = 4;

/// Largest supported board edge
pub const MAX_BOARD_SIZE: u8 = 6;

/// Board edge that uses the classic dice set
pub const STANDARD_BOARD_SIZE: u8 = 4;

/// Maximum number of cells on any supported board
pub const MAX_CELLS: usize = (MAX_BOARD_SIZE as usize) * (MAX_BOARD_SIZE as usize);

/// Minimum word length, counted in characters
pub const MIN_WORD_LEN: usize = 3;

/// Default round length in seconds (3 minutes)
pub const DEFAULT_DURATION_SECS: u32 = 180;

/// Default board edge for new games
pub const DEFAULT_BOARD_SIZE: u8 = 4;

/// Default dictionary key
pub const DEFAULT_LANGUAGE: &str = "english";

/// Seconds removed from the clock by one timer tick
pub const TICK_SECS: u32 = 1;

/// Recent game history length
pub const RECENT_GAMES_LIMIT: usize = 10;

/// Leaderboard capacity
pub const LEADERBOARD_LIMIT: usize = 100;

/// Remaining-time fraction (in percent) under which a round counts as almost finished
pub const ALMOST_FINISHED_PERCENT: u32 = 10;

/// Base score by word length in characters.
///
/// Index is the length; lengths at or beyond the last index use the last value.
pub const LENGTH_SCORES: [u32; 9] = [0, 0, 0, 1, 1, 2, 3, 5, 11];

/// Flat bonuses for rare letters, applied once per word when the letter occurs.
pub const LETTER_BONUSES: [(char, u32); 5] = [('q', 2), ('z', 3), ('x', 2), ('j', 2), ('k', 1)];


/// A board coordinate
///
/// Plain value type; equality is field-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// True iff the two positions differ and touch horizontally, vertically or diagonally
    ///
    /// # Examples
    ///
    /// ```
    /// use boggle_types::Position;
    ///
    /// assert!(Position::new(0, 0).is_adjacent(Position::new(1, 1)));
    /// assert!(!Position::new(0, 0).is_adjacent(Position::new(0, 0)));
    /// assert!(!Position::new(0, 0).is_adjacent(Position::new(0, 2)));
    /// ```
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// Row-major index on a board with the given edge
    pub fn index(self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }
}

/// Difficulty levels
///
/// Difficulty selects the letter-frequency table used by the board generator:
/// - **Easy**: vowel-heavy, rare letters at minimum weight
/// - **Medium**: the default game
/// - **Hard**: fewer vowels, rare letters twice as likely
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use boggle_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("MEDIUM"), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Session lifecycle states
///
/// `Ready -> Active -> (Paused <-> Active) -> Finished -> Ready`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Ready,
    Active,
    Paused,
    Finished,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Ready => "ready",
            GameStatus::Active => "active",
            GameStatus::Paused => "paused",
            GameStatus::Finished => "finished",
        }
    }

    /// Whether the round clock is (or may resume) running
    pub fn in_round(&self) -> bool {
        matches!(self, GameStatus::Active | GameStatus::Paused)
    }
}

/// Commands the render layer issues against a session
///
/// Each command maps onto one state machine transition. Commands that arrive
/// in a state where they are not allowed are silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameCommand {
    /// Start a new round (from Ready or Finished)
    #[serde(rename_all = "camelCase")]
    StartGame {
        board_size: u8,
        difficulty: Difficulty,
        duration_secs: u32,
    },
    /// Active -> Paused
    Pause,
    /// Paused -> Active
    Resume,
    /// Force the round to finish
    EndGame,
    /// Back to Ready, discarding the board
    Reset,
    /// Extend the selection path
    Select { position: Position },
    /// Remove the last tile of the selection path
    Deselect { position: Position },
    /// Drop the whole selection
    ClearSelection,
    /// Submit the current word
    Submit,
    /// Switch the dictionary (from Ready or Finished)
    SetLanguage { language: String },
}

impl GameCommand {
    /// Parse a parameterless command from string (case-insensitive)
    ///
    /// Commands that carry data (`startGame`, `select`, `deselect`,
    /// `setLanguage`) cannot be parsed from a bare name.
    ///
    /// # Examples
    ///
    /// ```
    /// use boggle_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("pause"), Some(GameCommand::Pause));
    /// assert_eq!(GameCommand::from_str("submit"), Some(GameCommand::Submit));
    /// assert_eq!(GameCommand::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pause" | "pausegame" => Some(GameCommand::Pause),
            "resume" | "resumegame" => Some(GameCommand::Resume),
            "end" | "endgame" => Some(GameCommand::EndGame),
            "reset" | "resetgame" => Some(GameCommand::Reset),
            "clear" | "clearselection" => Some(GameCommand::ClearSelection),
            "submit" | "submitword" => Some(GameCommand::Submit),
            _ => None,
        }
    }

    /// camelCase name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::StartGame { .. } => "startGame",
            GameCommand::Pause => "pauseGame",
            GameCommand::Resume => "resumeGame",
            GameCommand::EndGame => "endGame",
            GameCommand::Reset => "resetGame",
            GameCommand::Select { .. } => "selectLetter",
            GameCommand::Deselect { .. } => "deselectLetter",
            GameCommand::ClearSelection => "clearSelection",
            GameCommand::Submit => "submitWord",
            GameCommand::SetLanguage { .. } => "setLanguage",
        }
    }
}

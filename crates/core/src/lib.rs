//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and the session state machine. It has
//! no I/O and no async: loading dictionaries, running the clock and persisting
//! results happen in the surrounding crates, which feed this one through plain
//! method calls.
//!
//! - **Deterministic**: same seed, same boards
//! - **Atomic**: every transition applies fully or not at all
//! - **Portable**: any render layer drives it through [`GameCommand`](types::GameCommand)
//!
//! # Module Structure
//!
//! - [`board`]: NxN letter grid, `Letter` tiles (Q is the `QU` tile)
//! - [`generator`]: classic dice and weighted letter tables
//! - [`adjacency`]: 8-directional neighbours and path continuity
//! - [`selection`]: the in-progress path and its word buffer
//! - [`dictionary`]: normalized word sets
//! - [`scoring`]: length table plus rare-letter bonuses
//! - [`validator`]: ordered submission checks and rejections
//! - [`game_state`]: the session aggregate and its transitions
//! - [`snapshot`]: serializable read model for views
//! - [`rng`]: seedable LCG
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use boggle_core::{Board, Dictionary, GameState, SubmitOutcome};
//! use boggle_core::types::{Difficulty, GameStatus, Position};
//!
//! let mut game = GameState::new(12345);
//! game.install_dictionary(Arc::new(Dictionary::from_words("english", ["cat"])));
//!
//! let board = Board::from_rows(&["CATS", "EFGH", "IJKL", "MNOP"]).unwrap();
//! game.start_game_with_board(board, Difficulty::Medium, 180).unwrap();
//! assert_eq!(game.status(), GameStatus::Active);
//!
//! for col in 0..3 {
//!     game.select_letter(Position::new(0, col));
//! }
//! assert!(matches!(game.submit_word(), SubmitOutcome::Accepted(_)));
//! assert_eq!(game.score(), 1);
//! ```

pub mod adjacency;
pub mod board;
pub mod dictionary;
pub mod error;
pub mod game_state;
pub mod generator;
pub mod rng;
pub mod scoring;
pub mod selection;
pub mod snapshot;
pub mod validator;

pub use boggle_types as types;

// Re-export commonly used types for convenience
pub use adjacency::{is_adjacent, is_continuous, is_within_bounds, neighbors};
pub use board::{Board, Cell, Letter};
pub use dictionary::{parse_word_list, Dictionary};
pub use error::GameError;
pub use game_state::{GameState, SubmitOutcome};
pub use generator::generate;
pub use rng::SimpleRng;
pub use scoring::score;
pub use selection::Selection;
pub use snapshot::{CellSnapshot, GameSnapshot};
pub use validator::{PendingDictionaryPolicy, Rejection, Word};

//! Path engine - word realizability, whole-board solving and hints
//!
//! These helpers check words against a board without looking at the player's
//! live selection: auditing a submission, listing every word a board holds,
//! or suggesting the next one.
//!
//! Search is a depth-first walk over 8-directional neighbours with a `u64`
//! visited mask (boards have at most 36 cells), so no branch allocates.
//!
//! # Example
//!
//! ```
//! use boggle_core::Board;
//! use boggle_engine::{find_path, is_path_realizable};
//!
//! let board = Board::from_rows(&["QIAB", "TCDE", "FGHJ", "KLMN"]).unwrap();
//! assert!(is_path_realizable("quit", &board));
//! assert_eq!(find_path("quit", &board).unwrap().len(), 3);
//! ```

pub mod realize;
pub mod solve;

pub use realize::{find_path, is_path_realizable};
pub use solve::{find_all_words, hint, SolvedWord};

//! Scoring module - word value by length plus rare-letter bonuses
//!
//! | Length | Base |
//! |--------|------|
//! | <=2 | 0 |
//! | 3-4 | 1 |
//! | 5 | 2 |
//! | 6 | 3 |
//! | 7 | 5 |
//! | >=8 | 11 |
//!
//! Bonuses (once per word, if the letter occurs): q +2, z +3, x +2, j +2, k +1.

use crate::types::{LENGTH_SCORES, LETTER_BONUSES};

/// Base score for a word of `len` characters
pub fn base_score(len: usize) -> u32 {
    LENGTH_SCORES[len.min(LENGTH_SCORES.len() - 1)]
}

/// Sum of rare-letter bonuses, each counted at most once
pub fn letter_bonus(word: &str) -> u32 {
    LETTER_BONUSES
        .iter()
        .filter(|(letter, _)| word.chars().any(|c| c.to_ascii_lowercase() == *letter))
        .map(|(_, bonus)| bonus)
        .sum()
}

/// Score an already-validated word
///
/// # Examples
///
/// ```
/// use boggle_core::scoring::score;
///
/// assert_eq!(score("cat"), 1);
/// assert_eq!(score("quilt"), 4);
/// ```
pub fn score(word: &str) -> u32 {
    base_score(word.chars().count()) + letter_bonus(word)
}

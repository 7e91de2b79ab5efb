//! Board generator
//!
//! Two policies, chosen by (size, difficulty):
//!
//! | Board | Difficulty | Policy |
//! |-------|------------|--------|
//! | 4x4 | easy | Shuffle the 16 classic dice, roll one face per cell |
//! | any other | any | Independent weighted draw per cell |
//!
//! Both draw from the caller's [`SimpleRng`], so a seed fully determines the board.

use crate::board::{Board, Letter};
use crate::error::GameError;
use crate::rng::SimpleRng;
use crate::types::{Difficulty, STANDARD_BOARD_SIZE};

/// The 16 classic dice, six faces each
pub const STANDARD_DICE: [&str; 16] = [
    "RIFOBX", "IFEHEY", "DENOWS", "UTOKND", "HMSRAO", "LUPETS", "ACITOA", "YLGKUE", "QBMJOA",
    "EHISPN", "VETIGN", "BALIYT", "EZAVND", "RALESC", "UWILRG", "PACEMD",
];

/// Letter weights A..Z for easy boards: vowel-heavy
pub const EASY_WEIGHTS: [u32; 26] = [
    9, 2, 2, 4, 12, 2, 3, 2, 9, 1, 1, 4, 2, 6, 8, 2, 1, 6, 4, 6, 4, 2, 2, 1, 2, 1,
];

/// Letter weights A..Z for medium boards
pub const MEDIUM_WEIGHTS: [u32; 26] = [
    8, 2, 3, 4, 10, 2, 3, 2, 9, 1, 2, 4, 3, 5, 7, 2, 1, 6, 5, 6, 4, 2, 2, 1, 2, 1,
];

/// Letter weights A..Z for hard boards: fewer vowels, more rare letters
pub const HARD_WEIGHTS: [u32; 26] = [
    6, 3, 3, 4, 8, 3, 3, 3, 7, 2, 2, 4, 3, 5, 6, 2, 2, 5, 5, 5, 4, 3, 3, 2, 2, 2,
];

/// Weight table for a difficulty
pub fn weights(difficulty: Difficulty) -> &'static [u32; 26] {
    match difficulty {
        Difficulty::Easy => &EASY_WEIGHTS,
        Difficulty::Medium => &MEDIUM_WEIGHTS,
        Difficulty::Hard => &HARD_WEIGHTS,
    }
}

/// Whether a (size, difficulty) pair rolls the classic dice
pub fn uses_dice(size: u8, difficulty: Difficulty) -> bool {
    size == STANDARD_BOARD_SIZE && difficulty == Difficulty::Easy
}

/// Generate a fresh board
///
/// # Errors
///
/// [`GameError::InvalidConfiguration`] when `size` is outside 4..=6.
pub fn generate(size: u8, difficulty: Difficulty, rng: &mut SimpleRng) -> Result<Board, GameError> {
    Board::check_size(size)?;

    let letters = if uses_dice(size, difficulty) {
        roll_dice(rng)
    } else {
        let table = weights(difficulty);
        (0..size as usize * size as usize)
            .map(|_| weighted_letter(table, rng))
            .collect()
    };

    Board::from_letters(size, &letters)
}

fn roll_dice(rng: &mut SimpleRng) -> Vec<Letter> {
    let mut dice = STANDARD_DICE;
    rng.shuffle(&mut dice);

    dice.iter()
        .filter_map(|die| {
            let faces = die.as_bytes();
            let face = faces[rng.next_range(faces.len() as u32) as usize];
            Letter::new(face as char)
        })
        .collect()
}

/// Draw one letter: pick r in 1..=total, subtract weights in table order until r <= 0
pub fn weighted_letter(table: &[u32; 26], rng: &mut SimpleRng) -> Letter {
    let total: u32 = table.iter().sum();
    let mut remaining = rng.next_range(total) as i64 + 1;

    let mut index = table.len() - 1;
    for (i, &weight) in table.iter().enumerate() {
        remaining -= weight as i64;
        if remaining <= 0 {
            index = i;
            break;
        }
    }

    letter_at(index)
}

fn letter_at(index: usize) -> Letter {
    match Letter::new((b'A' + index as u8) as char) {
        Some(letter) => letter,
        None => unreachable!("weight tables cover A..Z"),
    }
}

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use boggle_core::{scoring::score, Board, Dictionary, Word};
use boggle_types::{Position, MIN_WORD_LEN};

use crate::realize::find_path;

/// A dictionary word that can be traced on a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvedWord {
    pub text: String,
    pub path: Vec<Position>,
    pub score: u32,
}

fn by_value(a: &SolvedWord, b: &SolvedWord) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.text.cmp(&b.text))
}

/// Every dictionary word realizable on `board`
///
/// Sorted by descending score, then alphabetically.
pub fn find_all_words(board: &Board, dictionary: &Dictionary) -> Vec<SolvedWord> {
    let letters: HashSet<char> = board
        .cells()
        .iter()
        .map(|c| c.letter.as_char().to_ascii_lowercase())
        .collect();

    let mut words: Vec<SolvedWord> = dictionary
        .iter()
        .filter(|w| w.chars().count() >= MIN_WORD_LEN)
        .filter(|w| w.chars().all(|c| letters.contains(&c) || c == 'u'))
        .filter_map(|w| {
            let path = find_path(w, board)?;
            // A lone `q` matched on the QU tile spells "qu" and cannot be submitted
            if board.spell(&path).as_deref() != Some(w) {
                return None;
            }
            Some(SolvedWord {
                text: w.to_string(),
                path,
                score: score(w),
            })
        })
        .collect();
    words.sort_by(by_value);

    debug!(
        key = dictionary.key(),
        found = words.len(),
        "board solved"
    );
    words
}

/// Best word not found yet, with a path to highlight
pub fn hint(board: &Board, dictionary: &Dictionary, found: &[Word]) -> Option<SolvedWord> {
    let found: HashSet<&str> = found.iter().map(|w| w.text.as_str()).collect();
    find_all_words(board, dictionary)
        .into_iter()
        .find(|w| !found.contains(w.text.as_str()))
}

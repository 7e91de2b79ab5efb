//! Game summaries - the immutable record of one finished game

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use boggle_core::{GameState, Word};
use boggle_types::{Difficulty, GameStatus};

/// A word and what it scored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuableWord {
    pub word: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub score: u32,
    pub word_count: u32,
    #[serde(default)]
    pub longest_word: String,
    #[serde(default)]
    pub most_valuable_word: ValuableWord,
    /// Seconds played
    #[serde(rename = "duration")]
    pub duration_secs: u32,
    pub board_size: u8,
    pub difficulty: Difficulty,
}

/// Summarize a finished game
///
/// Returns `None` unless the session is `Finished` with at least one word.
/// The result only depends on the session, apart from the fresh id and date;
/// recording it once per episode is up to the caller.
pub fn finalize(state: &GameState) -> Option<GameSummary> {
    if state.status() != GameStatus::Finished || state.found_words().is_empty() {
        return None;
    }
    let words = state.found_words();

    Some(GameSummary {
        id: Uuid::new_v4(),
        date: Utc::now(),
        score: state.score(),
        word_count: words.len() as u32,
        longest_word: longest_word(words).to_string(),
        most_valuable_word: most_valuable_word(words),
        duration_secs: state.elapsed_secs(),
        board_size: state.board_size(),
        difficulty: state.difficulty(),
    })
}

/// Longest word; ties go to the first found
pub fn longest_word(words: &[Word]) -> &str {
    let mut best = "";
    let mut best_len = 0;
    for word in words {
        let len = word.text.chars().count();
        if len > best_len {
            best = &word.text;
            best_len = len;
        }
    }
    best
}

/// Highest scoring word; ties go to the first found
pub fn most_valuable_word(words: &[Word]) -> ValuableWord {
    let mut best: Option<&Word> = None;
    for word in words {
        if best.map_or(true, |b| word.score > b.score) {
            best = Some(word);
        }
    }
    best.map(|w| ValuableWord {
        word: w.text.clone(),
        score: w.score,
    })
    .unwrap_or_default()
}

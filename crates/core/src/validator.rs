//! Word validator
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. Buffer is at least [`MIN_WORD_LEN`] characters ([`Rejection::TooShort`])
//! 2. Path is continuous ([`Rejection::DiscontinuousPath`])
//! 3. Path spells the buffer ([`Rejection::PathMismatch`])
//! 4. Dictionary contains the word ([`Rejection::NotInDictionary`], or
//!    [`Rejection::DictionaryPending`] while the dictionary is loading)
//! 5. Word not already found ([`Rejection::AlreadyFound`])

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adjacency::is_continuous;
use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::scoring::score;
use crate::types::{Position, MIN_WORD_LEN};

/// Why a submission was refused
///
/// Rejections are feedback for the player, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    #[error("words need at least 3 letters")]
    TooShort,
    #[error("letters must be adjacent")]
    DiscontinuousPath,
    #[error("selected tiles do not spell the word")]
    PathMismatch,
    #[error("not in the dictionary")]
    NotInDictionary,
    #[error("already found")]
    AlreadyFound,
    #[error("dictionary still loading")]
    DictionaryPending,
}

impl Rejection {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::TooShort => "too_short",
            Rejection::DiscontinuousPath => "discontinuous_path",
            Rejection::PathMismatch => "path_mismatch",
            Rejection::NotInDictionary => "not_in_dictionary",
            Rejection::AlreadyFound => "already_found",
            Rejection::DictionaryPending => "dictionary_pending",
        }
    }

    /// Human-readable feedback
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// What to do with a submission while the dictionary has not loaded yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingDictionaryPolicy {
    /// Refuse with [`Rejection::DictionaryPending`]
    #[default]
    Reject,
    /// Skip the dictionary check
    AssumeValid,
}

impl PendingDictionaryPolicy {
    /// Parse a policy name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use boggle_core::PendingDictionaryPolicy;
    ///
    /// assert_eq!(
    ///     PendingDictionaryPolicy::from_str("assume_valid"),
    ///     Some(PendingDictionaryPolicy::AssumeValid)
    /// );
    /// assert_eq!(PendingDictionaryPolicy::from_str("REJECT"), Some(PendingDictionaryPolicy::Reject));
    /// assert_eq!(PendingDictionaryPolicy::from_str("maybe"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "reject" => Some(PendingDictionaryPolicy::Reject),
            "assume_valid" | "assumevalid" => Some(PendingDictionaryPolicy::AssumeValid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PendingDictionaryPolicy::Reject => "reject",
            PendingDictionaryPolicy::AssumeValid => "assume_valid",
        }
    }
}

/// An accepted word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// Lowercase text
    pub text: String,
    pub path: Vec<Position>,
    pub score: u32,
    pub found_at: DateTime<Utc>,
}

/// Everything a submission is checked against
#[derive(Debug, Clone, Copy)]
pub struct Submission<'a> {
    pub board: &'a Board,
    pub path: &'a [Position],
    pub word: &'a str,
    /// `None` while the dictionary is loading
    pub dictionary: Option<&'a Dictionary>,
    pub policy: PendingDictionaryPolicy,
    pub found: &'a [Word],
}

/// Validate a submission and score it
pub fn validate(submission: Submission<'_>) -> Result<Word, Rejection> {
    let Submission {
        board,
        path,
        word,
        dictionary,
        policy,
        found,
    } = submission;

    if word.chars().count() < MIN_WORD_LEN {
        return Err(Rejection::TooShort);
    }

    if !is_continuous(path) {
        return Err(Rejection::DiscontinuousPath);
    }

    let text = word.to_lowercase();
    match board.spell(path) {
        Some(spelled) if spelled == text => {}
        _ => return Err(Rejection::PathMismatch),
    }

    match (dictionary, policy) {
        (Some(dict), _) if !dict.contains(&text) => return Err(Rejection::NotInDictionary),
        (Some(_), _) | (None, PendingDictionaryPolicy::AssumeValid) => {}
        (None, PendingDictionaryPolicy::Reject) => return Err(Rejection::DictionaryPending),
    }

    if found.iter().any(|w| w.text == text) {
        return Err(Rejection::AlreadyFound);
    }

    Ok(Word {
        score: score(&text),
        text,
        path: path.to_vec(),
        found_at: Utc::now(),
    })
}

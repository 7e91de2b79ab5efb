//! Dictionary word set
//!
//! A [`Dictionary`] is an immutable set of lowercase words of at least
//! [`MIN_WORD_LEN`] characters, tagged with the language/theme key it was loaded
//! for. Loading and caching live in the `boggle-dictionary` crate.

use std::collections::HashSet;

use crate::types::MIN_WORD_LEN;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    key: String,
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, normalizing every word
    ///
    /// Words are trimmed and lowercased; anything shorter than three
    /// characters is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use boggle_core::Dictionary;
    ///
    /// let dict = Dictionary::from_words("english", ["Cat", "at", " dog "]);
    /// assert!(dict.contains("CAT"));
    /// assert!(dict.contains("dog"));
    /// assert!(!dict.contains("at"));
    /// ```
    pub fn from_words<I, S>(key: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();
        Self {
            key: key.into(),
            words,
        }
    }

    /// Build a dictionary from free text (comma or whitespace separated)
    pub fn from_custom_list(key: impl Into<String>, text: &str) -> Self {
        Self::from_words(key, parse_word_list(text))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Case-insensitive membership
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(|c| c.is_uppercase()) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

fn normalize(word: &str) -> Option<String> {
    let word = word.trim();
    if word.chars().count() < MIN_WORD_LEN {
        return None;
    }
    Some(word.to_lowercase())
}

/// Split a custom word list on commas and whitespace
///
/// Lowercases, drops words under three characters, and removes duplicates
/// while keeping first-seen order.
pub fn parse_word_list(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter_map(normalize)
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_normalizes() {
        let dict = Dictionary::from_words("animals", ["Dog", "CAT", "ox", "owl", "owl"]);
        assert_eq!(dict.key(), "animals");
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("dog"));
        assert!(dict.contains("Cat"));
        assert!(!dict.contains("ox"));
    }

    #[test]
    fn test_length_counts_characters() {
        // "año" is three characters but four bytes; "él" is two characters
        let dict = Dictionary::from_words("spanish", ["año", "él"]);
        assert!(dict.contains("año"));
        assert!(!dict.contains("él"));
    }

    #[test]
    fn test_parse_word_list() {
        let words = parse_word_list("apple, Banana\npear,,kiwi\r\nfig apple\tAPPLE");
        assert_eq!(words, vec!["apple", "banana", "pear", "kiwi", "fig"]);
    }

    #[test]
    fn test_parse_word_list_empty() {
        assert!(parse_word_list("  ,\n, ").is_empty());
        assert!(Dictionary::from_custom_list("mine", "a b").is_empty());
    }
}

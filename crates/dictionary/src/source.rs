//! Dictionary sources - where raw word lists come from
//!
//! | Source | Keys | Format |
//! |--------|------|--------|
//! | [`BuiltinSource`] | `english`, `spanish`, `french`, `animals`, `food` | compiled in |
//! | [`FileSource`] | file stems in a directory | `<key>.json` (object or array) or `<key>.txt` |
//!
//! Sources return raw words; normalization happens when the
//! [`Dictionary`](boggle_core::Dictionary) is built.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::builtin;
use crate::error::DictionaryError;

#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Fetch the raw word list for `key`
    async fn fetch(&self, key: &str) -> Result<Vec<String>, DictionaryError>;

    /// Keys this source can serve, in display order
    async fn languages(&self) -> Vec<String>;
}

/// The compiled-in lists; unknown keys resolve to english
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

#[async_trait]
impl DictionarySource for BuiltinSource {
    async fn fetch(&self, key: &str) -> Result<Vec<String>, DictionaryError> {
        Ok(builtin::words_for(key)
            .iter()
            .map(|w| w.to_string())
            .collect())
    }

    async fn languages(&self) -> Vec<String> {
        builtin::LANGUAGES.iter().map(|k| k.to_string()).collect()
    }
}

/// Word-list files in a directory
///
/// `<dir>/<key>.json` is tried first: either an object whose keys are the
/// words (the bulk `words_dictionary.json` layout) or an array of strings.
/// Otherwise `<dir>/<key>.txt` is read, one word per line.
#[derive(Debug, Clone)]
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn check_key(key: &str) -> Result<(), DictionaryError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(())
        } else {
            Err(DictionaryError::unavailable(key, "invalid key"))
        }
    }
}

/// Words from a JSON document: object keys or array strings
pub fn parse_json_words(key: &str, text: &str) -> Result<Vec<String>, DictionaryError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| DictionaryError::unavailable(key, e))?;
    match value {
        Value::Object(map) => Ok(map.into_iter().map(|(word, _)| word).collect()),
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(word) => Some(word),
                _ => None,
            })
            .collect()),
        _ => Err(DictionaryError::unavailable(
            key,
            "expected a JSON object or array",
        )),
    }
}

#[async_trait]
impl DictionarySource for FileSource {
    async fn fetch(&self, key: &str) -> Result<Vec<String>, DictionaryError> {
        Self::check_key(key)?;

        let json_path = self.dir.join(format!("{key}.json"));
        if let Ok(text) = tokio::fs::read_to_string(&json_path).await {
            debug!(path = %json_path.display(), "reading word list");
            return parse_json_words(key, &text);
        }

        let txt_path = self.dir.join(format!("{key}.txt"));
        let text = tokio::fs::read_to_string(&txt_path)
            .await
            .map_err(|e| DictionaryError::unavailable(key, e))?;
        debug!(path = %txt_path.display(), "reading word list");
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn languages(&self) -> Vec<String> {
        let mut keys = Vec::new();
        let Ok(mut entries) = tokio::fs::read_dir(&self.dir).await else {
            return keys;
        };
        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            let is_list = matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("json") | Some("txt")
            );
            if let (true, Some(stem)) = (is_list, path.file_stem().and_then(|s| s.to_str())) {
                if !keys.iter().any(|k| k == stem) {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builtin_languages_in_order() {
        let langs = BuiltinSource.languages().await;
        assert_eq!(langs, vec!["english", "spanish", "french", "animals", "food"]);
    }

    #[tokio::test]
    async fn test_builtin_unknown_key_is_english() {
        let words = BuiltinSource.fetch("esperanto").await.unwrap();
        assert!(words.iter().any(|w| w == "queen"));
    }

    #[test]
    fn test_parse_json_object_and_array() {
        let words = parse_json_words("x", r#"{"apple": 1, "pear": 1}"#).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains(&"apple".to_string()));

        let words = parse_json_words("x", r#"["apple", 3, "pear"]"#).unwrap();
        assert_eq!(words, vec!["apple", "pear"]);

        assert!(parse_json_words("x", "42").is_err());
        assert!(parse_json_words("x", "{not json").is_err());
    }

    #[tokio::test]
    async fn test_file_source_reads_json_then_txt() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fruit.json"), r#"["apple", "plum"]"#).unwrap();
        std::fs::write(dir.path().join("tools.txt"), "saw\nhammer\n\n").unwrap();
        std::fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let source = FileSource::new(dir.path());
        assert_eq!(source.fetch("fruit").await.unwrap(), vec!["apple", "plum"]);
        assert_eq!(source.fetch("tools").await.unwrap(), vec!["saw", "hammer"]);
        assert_eq!(source.languages().await, vec!["fruit", "tools"]);
    }

    #[tokio::test]
    async fn test_file_source_missing_and_bad_keys() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path());

        let err = source.fetch("missing").await.unwrap_err();
        assert_eq!(err.key(), "missing");
        assert!(source.fetch("../etc/passwd").await.is_err());
    }
}

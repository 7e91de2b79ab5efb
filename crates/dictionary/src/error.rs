use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    /// The source could not produce a word list for `key`
    #[error("dictionary '{key}' unavailable: {reason}")]
    Unavailable { key: String, reason: String },
}

impl DictionaryError {
    pub(crate) fn unavailable(key: &str, reason: impl ToString) -> Self {
        DictionaryError::Unavailable {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            DictionaryError::Unavailable { key, .. } => key,
        }
    }
}

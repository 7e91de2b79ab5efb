use std::path::PathBuf;
use std::sync::Arc;

use crate::source::{BuiltinSource, DictionarySource, FileSource};

/// Where dictionaries come from
///
/// # Environment Variables
///
/// - `BOGGLE_DICTIONARY_DIR`: directory of `<key>.json` / `<key>.txt` word
///   lists. Unset or empty uses the built-in lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryConfig {
    pub dir: Option<PathBuf>,
}

impl DictionaryConfig {
    pub fn from_env() -> Self {
        let dir = std::env::var("BOGGLE_DICTIONARY_DIR")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self { dir }
    }

    pub fn source(&self) -> Arc<dyn DictionarySource> {
        match &self.dir {
            Some(dir) => Arc::new(FileSource::new(dir.clone())),
            None => Arc::new(BuiltinSource),
        }
    }
}

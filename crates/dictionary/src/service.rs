use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use boggle_core::Dictionary;

use crate::builtin;
use crate::config::DictionaryConfig;
use crate::error::DictionaryError;
use crate::source::{BuiltinSource, DictionarySource};

type Slot = Arc<OnceCell<Arc<Dictionary>>>;

/// Process-scoped dictionary cache
///
/// One dictionary per key for the service's lifetime. Concurrent loads of a
/// key share one fetch; a failed fetch leaves the slot empty so the next
/// load retries.
pub struct DictionaryService {
    source: Arc<dyn DictionarySource>,
    slots: Mutex<HashMap<String, Slot>>,
}

impl DictionaryService {
    pub fn new(source: Arc<dyn DictionarySource>) -> Self {
        Self {
            source,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Service over the built-in word lists
    pub fn builtin() -> Self {
        Self::new(Arc::new(BuiltinSource))
    }

    pub fn from_config(config: &DictionaryConfig) -> Self {
        Self::new(config.source())
    }

    fn normalize_key(key: &str) -> String {
        key.trim().to_lowercase()
    }

    fn slot(&self, key: &str) -> Slot {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.entry(key.to_string()).or_default().clone()
    }

    /// Load (or return the cached) dictionary for `key`
    ///
    /// # Errors
    ///
    /// [`DictionaryError::Unavailable`] when the source fails. Nothing is cached.
    pub async fn load(&self, key: &str) -> Result<Arc<Dictionary>, DictionaryError> {
        let key = Self::normalize_key(key);
        let slot = self.slot(&key);

        let dictionary = slot
            .get_or_try_init(|| async {
                let words = self.source.fetch(&key).await?;
                let dictionary = Dictionary::from_words(key.as_str(), words);
                info!(key = %key, words = dictionary.len(), "dictionary loaded");
                Ok::<_, DictionaryError>(Arc::new(dictionary))
            })
            .await?;

        Ok(Arc::clone(dictionary))
    }

    /// Load `key`, falling back to the minimal built-in set on failure
    ///
    /// The fallback is keyed like the request so sessions accept it, and is not
    /// cached.
    pub async fn load_or_fallback(&self, key: &str) -> Arc<Dictionary> {
        match self.load(key).await {
            Ok(dictionary) => dictionary,
            Err(err) => {
                warn!(error = %err, "using fallback dictionary");
                Arc::new(Self::fallback(key))
            }
        }
    }

    /// The minimal built-in word set under `key`
    pub fn fallback(key: &str) -> Dictionary {
        Dictionary::from_words(Self::normalize_key(key), builtin::FALLBACK)
    }

    /// Already-loaded dictionary, without waiting
    pub fn cached(&self, key: &str) -> Option<Arc<Dictionary>> {
        let key = Self::normalize_key(key);
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.get(&key).and_then(|slot| slot.get().cloned())
    }

    /// Install a custom word list under `key`, replacing any cached entry
    pub fn register_custom(&self, key: &str, text: &str) -> Arc<Dictionary> {
        let key = Self::normalize_key(key);
        let dictionary = Arc::new(Dictionary::from_custom_list(key.as_str(), text));
        debug!(key = %key, words = dictionary.len(), "custom dictionary registered");

        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.insert(
            key,
            Arc::new(OnceCell::new_with(Some(Arc::clone(&dictionary)))),
        );
        dictionary
    }

    /// Forget every cached dictionary
    pub fn reset(&self) {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.clear();
    }

    /// Keys the source can serve, in display order
    pub async fn available_languages(&self) -> Vec<String> {
        self.source.languages().await
    }

    /// Case-insensitive membership
    pub fn contains(dictionary: &Dictionary, word: &str) -> bool {
        dictionary.contains(word)
    }
}

impl Default for DictionaryService {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for DictionaryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("DictionaryService")
            .field("keys", &slots.keys().collect::<Vec<_>>())
            .finish()
    }
}

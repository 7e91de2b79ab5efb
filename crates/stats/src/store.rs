//! Persistence collaborator
//!
//! Statistics, leaderboard and preferences are stored as JSON values under
//! fixed keys. The storage medium belongs to the embedding application; this
//! crate only sees [`KeyValueStore`].

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde_json::Value;
use thiserror::Error;

pub const STATISTICS_KEY: &str = "boggleStatistics";
pub const LEADERBOARD_KEY: &str = "boggleLeaderboard";
pub const PREFERENCES_KEY: &str = "bogglePreferences";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {reason}")]
    Backend { reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub trait KeyValueStore: Send + Sync {
    /// Stored value, or `None` if the key was never saved
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError>;

    fn save(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

/// In-process store for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value);
        Ok(())
    }
}

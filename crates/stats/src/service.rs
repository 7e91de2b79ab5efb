use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::aggregator::Statistics;
use crate::leaderboard::Leaderboard;
use crate::store::{KeyValueStore, StoreError, LEADERBOARD_KEY, STATISTICS_KEY};
use crate::summary::GameSummary;

/// Owns the running statistics and the leaderboard
///
/// State is loaded from the store once, and written back after every change.
/// Single writer: wrap in a mutex to share.
pub struct StatsService {
    store: Arc<dyn KeyValueStore>,
    statistics: Statistics,
    leaderboard: Leaderboard,
}

fn load_or_default<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    match store.load(key) {
        Ok(Some(value)) => serde_json::from_value(value).unwrap_or_else(|err| {
            warn!(key, error = %err, "corrupt record, starting empty");
            T::default()
        }),
        Ok(None) => T::default(),
        Err(err) => {
            warn!(key, error = %err, "failed to read record, starting empty");
            T::default()
        }
    }
}

impl StatsService {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let mut statistics: Statistics = load_or_default(store.as_ref(), STATISTICS_KEY);
        statistics.normalize();
        let mut leaderboard: Leaderboard = load_or_default(store.as_ref(), LEADERBOARD_KEY);
        leaderboard.normalize();
        debug!(
            games = statistics.games_played,
            leaderboard = leaderboard.len(),
            "statistics loaded"
        );
        Self {
            store,
            statistics,
            leaderboard,
        }
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Record a finished game in both the totals and the leaderboard
    ///
    /// In-memory state is updated even when persisting fails.
    pub fn record_game(&mut self, summary: GameSummary) -> Result<Option<usize>, StoreError> {
        self.statistics.record(&summary);
        let score = summary.score;
        let rank = self.leaderboard.insert(summary);
        info!(
            score,
            games = self.statistics.games_played,
            rank = ?rank,
            "game recorded"
        );
        self.persist_statistics()?;
        self.persist_leaderboard()?;
        Ok(rank)
    }

    pub fn clear_statistics(&mut self) -> Result<(), StoreError> {
        self.statistics = Statistics::default();
        self.persist_statistics()
    }

    pub fn clear_leaderboard(&mut self) -> Result<(), StoreError> {
        self.leaderboard.clear();
        self.persist_leaderboard()
    }

    pub fn reset_all(&mut self) -> Result<(), StoreError> {
        self.clear_statistics()?;
        self.clear_leaderboard()
    }

    fn persist_statistics(&self) -> Result<(), StoreError> {
        self.store
            .save(STATISTICS_KEY, serde_json::to_value(&self.statistics)?)
    }

    fn persist_leaderboard(&self) -> Result<(), StoreError> {
        self.store
            .save(LEADERBOARD_KEY, serde_json::to_value(&self.leaderboard)?)
    }
}

impl std::fmt::Debug for StatsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatsService")
            .field("statistics", &self.statistics)
            .field("leaderboard", &self.leaderboard.len())
            .finish()
    }
}

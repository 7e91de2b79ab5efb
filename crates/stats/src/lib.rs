//! Statistics - game summaries, running totals, leaderboard, preferences
//!
//! | Record | Store key | Bound |
//! |--------|-----------|-------|
//! | [`Statistics`] | `boggleStatistics` | 10 recent games |
//! | [`Leaderboard`] | `boggleLeaderboard` | 100 entries |
//! | [`Preferences`] | `bogglePreferences` | - |
//!
//! All records are JSON with camelCase fields, read and written through a
//! [`KeyValueStore`].
//!
//! [`finalize`] turns a finished [`GameState`](boggle_core::GameState) into a
//! [`GameSummary`]; [`StatsService::record_game`] folds it into the totals.

pub mod aggregator;
pub mod leaderboard;
pub mod preferences;
pub mod service;
pub mod store;
pub mod summary;

pub use aggregator::Statistics;
pub use leaderboard::Leaderboard;
pub use preferences::{GameSettings, Preferences};
pub use service::StatsService;
pub use store::{
    KeyValueStore, MemoryStore, StoreError, LEADERBOARD_KEY, PREFERENCES_KEY, STATISTICS_KEY,
};
pub use summary::{finalize, GameSummary, ValuableWord};

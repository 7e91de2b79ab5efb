//! Session runtime - drives a game from async commands and a timer
//!
//! A session is a single tokio task that owns the game state:
//!
//! ```text
//! SessionHandle --(mpsc + oneshot)--> session task --(watch)--> snapshots
//!                                      ^        ^
//!                               interval tick   dictionary load finished
//! ```
//!
//! The timer only runs while the round is active. When a round finishes, its
//! summary is recorded in the shared [`StatsService`](boggle_stats::StatsService)
//! exactly once.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use boggle_dictionary::DictionaryService;
//! use boggle_runtime::{RuntimeConfig, SessionRuntime};
//! use boggle_stats::{MemoryStore, StatsService};
//! use boggle_types::{Difficulty, GameCommand, GameStatus};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let stats = Arc::new(Mutex::new(StatsService::load(Arc::new(MemoryStore::new()))));
//! let session = SessionRuntime::spawn(
//!     RuntimeConfig::default(),
//!     Arc::new(DictionaryService::builtin()),
//!     stats,
//! );
//! session
//!     .send(GameCommand::StartGame {
//!         board_size: 4,
//!         difficulty: Difficulty::Easy,
//!         duration_secs: 60,
//!     })
//!     .await
//!     .unwrap();
//! assert_eq!(session.snapshot().status, GameStatus::Active);
//! session.shutdown().await.unwrap();
//! # });
//! ```

pub mod config;
pub mod session;

pub use config::RuntimeConfig;
pub use session::{CommandOutcome, SessionHandle, SessionRuntime, SharedStats};

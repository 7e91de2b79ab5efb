//! Boggle (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `boggle::{types, core, engine, dictionary, stats, runtime}`.

pub use boggle_core as core;
pub use boggle_dictionary as dictionary;
pub use boggle_engine as engine;
pub use boggle_runtime as runtime;
pub use boggle_stats as stats;
pub use boggle_types as types;

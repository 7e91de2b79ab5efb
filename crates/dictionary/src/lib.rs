//! Dictionary service - loads and caches word sets per language or theme
//!
//! The [`DictionaryService`] is an explicit, process-scoped cache: build one
//! at startup, share it behind an `Arc`, and call [`DictionaryService::reset`]
//! to drop everything. Loads are asynchronous and never block gameplay; the
//! session runtime installs a dictionary whenever its load completes.
//!
//! # Loading Policy
//!
//! - One fetch per key, however many callers ask at once
//! - Failures are not cached; the next load retries
//! - [`DictionaryService::load_or_fallback`] substitutes a minimal built-in
//!   word set so a session always ends up with something to check against
//!
//! # Example
//!
//! ```
//! use boggle_dictionary::DictionaryService;
//!
//! # tokio_test::block_on(async {
//! let service = DictionaryService::builtin();
//! let english = service.load("english").await.unwrap();
//! assert!(english.contains("cat"));
//! assert_eq!(service.available_languages().await.len(), 5);
//! # });
//! ```

pub mod builtin;
pub mod config;
pub mod error;
pub mod service;
pub mod source;

pub use config::DictionaryConfig;
pub use error::DictionaryError;
pub use service::DictionaryService;
pub use source::{BuiltinSource, DictionarySource, FileSource};

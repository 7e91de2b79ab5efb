use std::time::Duration;

use chrono::Utc;

use boggle_core::PendingDictionaryPolicy;
use boggle_stats::Preferences;
use boggle_types::{DEFAULT_LANGUAGE, TICK_SECS};

/// Session runtime configuration
///
/// # Environment Variables
///
/// - `BOGGLE_TICK_MS`: timer period in milliseconds (default: 1000)
/// - `BOGGLE_SEED`: fixed board seed (default: derived from the clock)
/// - `BOGGLE_PENDING_POLICY`: `reject` or `assume_valid` (default: reject)
/// - `BOGGLE_MAX_PENDING`: command queue capacity (default: 32)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub tick: Duration,
    pub seed: Option<u32>,
    pub pending_policy: PendingDictionaryPolicy,
    pub max_pending_commands: usize,
    /// Dictionary key the session starts with
    pub language: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(TICK_SECS as u64),
            seed: None,
            pending_policy: PendingDictionaryPolicy::default(),
            max_pending_commands: 32,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let tick = env::var("BOGGLE_TICK_MS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick);

        let seed = env::var("BOGGLE_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok());

        let pending_policy = match env::var("BOGGLE_PENDING_POLICY") {
            Ok(s) => PendingDictionaryPolicy::from_str(&s).unwrap_or_else(|| {
                tracing::warn!(value = %s, "unknown BOGGLE_PENDING_POLICY, using reject");
                PendingDictionaryPolicy::default()
            }),
            Err(_) => defaults.pending_policy,
        };

        let max_pending_commands = env::var("BOGGLE_MAX_PENDING")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_pending_commands);

        Self {
            tick,
            seed,
            pending_policy,
            max_pending_commands,
            language: defaults.language,
        }
    }

    /// Take the starting language from stored preferences
    pub fn with_preferences(mut self, prefs: &Preferences) -> Self {
        self.language.clone_from(&prefs.default_language);
        self
    }

    /// Configured seed, or one derived from the current time
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            let now = Utc::now();
            (now.timestamp() as u32) ^ now.timestamp_subsec_nanos()
        })
    }
}

use serde::{Deserialize, Serialize};
use tracing::warn;

use boggle_core::Board;
use boggle_types::{
    Difficulty, GameCommand, DEFAULT_BOARD_SIZE, DEFAULT_DURATION_SECS, DEFAULT_LANGUAGE,
};

use crate::store::{KeyValueStore, StoreError, PREFERENCES_KEY};

/// Game defaults chosen by the player
///
/// Only the settings the game core consumes; presentation settings belong to
/// the render layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub default_timer_duration: u32,
    pub default_board_size: u8,
    pub default_difficulty: Difficulty,
    pub default_language: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_timer_duration: DEFAULT_DURATION_SECS,
            default_board_size: DEFAULT_BOARD_SIZE,
            default_difficulty: Difficulty::default(),
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Parameters for starting a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub board_size: u8,
    pub difficulty: Difficulty,
    pub duration_secs: u32,
}

impl GameSettings {
    pub fn command(self) -> GameCommand {
        GameCommand::StartGame {
            board_size: self.board_size,
            difficulty: self.difficulty,
            duration_secs: self.duration_secs,
        }
    }
}

impl Preferences {
    /// Replace out-of-range values with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if Board::check_size(self.default_board_size).is_err() {
            self.default_board_size = defaults.default_board_size;
        }
        if self.default_timer_duration == 0 {
            self.default_timer_duration = defaults.default_timer_duration;
        }
        let language = self.default_language.trim().to_lowercase();
        self.default_language = if language.is_empty() {
            defaults.default_language
        } else {
            language
        };
        self
    }

    pub fn game_settings(&self) -> GameSettings {
        GameSettings {
            board_size: self.default_board_size,
            difficulty: self.default_difficulty,
            duration_secs: self.default_timer_duration,
        }
    }

    /// Load from the store; missing or invalid records give defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let value = match store.load(PREFERENCES_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return Self::default(),
            Err(err) => {
                warn!(error = %err, "failed to read preferences");
                return Self::default();
            }
        };
        match serde_json::from_value::<Self>(value) {
            Ok(prefs) => prefs.sanitized(),
            Err(err) => {
                warn!(error = %err, "invalid stored preferences, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), StoreError> {
        store.save(PREFERENCES_KEY, serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_defaults_match_game_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.default_timer_duration, 180);
        assert_eq!(prefs.default_board_size, 4);
        assert_eq!(prefs.default_difficulty, Difficulty::Medium);
        assert_eq!(prefs.default_language, "english");
    }

    #[test]
    fn test_load_missing_and_invalid() {
        let store = MemoryStore::new();
        assert_eq!(Preferences::load(&store), Preferences::default());

        store.save(PREFERENCES_KEY, json!("nonsense")).unwrap();
        assert_eq!(Preferences::load(&store), Preferences::default());

        store
            .save(
                PREFERENCES_KEY,
                json!({"defaultBoardSize": 9, "defaultTimerDuration": 0, "defaultLanguage": " French "}),
            )
            .unwrap();
        let prefs = Preferences::load(&store);
        assert_eq!(prefs.default_board_size, 4);
        assert_eq!(prefs.default_timer_duration, 180);
        assert_eq!(prefs.default_language, "french");
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let prefs = Preferences {
            default_timer_duration: 60,
            default_board_size: 6,
            default_difficulty: Difficulty::Hard,
            default_language: "animals".into(),
        };
        prefs.save(&store).unwrap();

        let stored = store.load(PREFERENCES_KEY).unwrap().unwrap();
        assert_eq!(stored["defaultBoardSize"], 6);
        assert_eq!(Preferences::load(&store), prefs);
    }

    #[test]
    fn test_game_settings_command() {
        let prefs = Preferences {
            default_board_size: 5,
            ..Preferences::default()
        };
        assert_eq!(
            prefs.game_settings().command(),
            GameCommand::StartGame {
                board_size: 5,
                difficulty: Difficulty::Medium,
                duration_secs: 180,
            }
        );
    }
}

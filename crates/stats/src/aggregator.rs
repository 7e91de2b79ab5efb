use serde::{Deserialize, Serialize};

use boggle_types::RECENT_GAMES_LIMIT;

use crate::summary::{GameSummary, ValuableWord};

/// Running totals across every recorded game
///
/// All fields only grow; [`Statistics::default`] is the explicit reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub games_played: u32,
    pub total_score: u64,
    pub highest_score: u32,
    pub average_score: f64,
    pub longest_word: String,
    pub most_words_in_game: u32,
    pub most_valuable_word: ValuableWord,
    /// Most recent first
    pub recent_games: Vec<GameSummary>,
}

impl Statistics {
    /// Fold one finished game into the totals
    pub fn record(&mut self, summary: &GameSummary) {
        self.games_played += 1;
        self.total_score += summary.score as u64;
        self.average_score = self.total_score as f64 / self.games_played as f64;
        self.highest_score = self.highest_score.max(summary.score);
        self.most_words_in_game = self.most_words_in_game.max(summary.word_count);

        if summary.longest_word.chars().count() > self.longest_word.chars().count() {
            self.longest_word.clone_from(&summary.longest_word);
        }
        if summary.most_valuable_word.score > self.most_valuable_word.score {
            self.most_valuable_word = summary.most_valuable_word.clone();
        }

        self.recent_games.insert(0, summary.clone());
        self.recent_games.truncate(RECENT_GAMES_LIMIT);
    }

    /// Drop recent games past the limit from a stored record
    pub fn normalize(&mut self) {
        self.recent_games.truncate(RECENT_GAMES_LIMIT);
    }
}

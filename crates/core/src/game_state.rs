//! Game state module - the session aggregate and its state machine
//!
//! One [`GameState`] per session. Every transition is a method that either
//! applies completely or leaves the state untouched; transitions attempted in
//! the wrong status are silent no-ops that return `false`.
//!
//! ```text
//! Ready --start--> Active --pause--> Paused
//!                  Active <--resume-- Paused
//! Active/Paused --end / time out--> Finished --start--> Active
//! Active/Paused/Finished --reset--> Ready
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::generator::generate;
use crate::rng::SimpleRng;
use crate::selection::Selection;
use crate::snapshot::{almost_finished, progress_percent, CellSnapshot, GameSnapshot};
use crate::types::*;
use crate::validator::{validate, PendingDictionaryPolicy, Rejection, Submission, Word};

/// Result of [`GameState::submit_word`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Word),
    Rejected(Rejection),
    /// Not in an active round; nothing changed
    Ignored,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            SubmitOutcome::Rejected(r) => Some(*r),
            _ => None,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    status: GameStatus,
    board: Option<Board>,
    selection: Selection,
    found_words: Vec<Word>,
    score: u32,
    time_remaining: u32,
    initial_duration: u32,
    difficulty: Difficulty,
    board_size: u8,
    language: String,
    /// `None` until a dictionary for `language` is installed
    dictionary: Option<Arc<Dictionary>>,
    pending_policy: PendingDictionaryPolicy,
    rng: SimpleRng,
    /// Monotonic episode id (increments on every start).
    episode_id: u64,
}

impl GameState {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            status: GameStatus::Ready,
            board: None,
            selection: Selection::new(),
            found_words: Vec::new(),
            score: 0,
            time_remaining: 0,
            initial_duration: DEFAULT_DURATION_SECS,
            difficulty: Difficulty::default(),
            board_size: DEFAULT_BOARD_SIZE,
            language: DEFAULT_LANGUAGE.to_string(),
            dictionary: None,
            pending_policy: PendingDictionaryPolicy::default(),
            rng: SimpleRng::new(seed),
            episode_id: 0,
        }
    }

    pub fn with_pending_policy(mut self, policy: PendingDictionaryPolicy) -> Self {
        self.pending_policy = policy;
        self
    }

    pub fn set_pending_policy(&mut self, policy: PendingDictionaryPolicy) {
        self.pending_policy = policy;
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_path(&self) -> &[Position] {
        self.selection.path()
    }

    pub fn current_word(&self) -> &str {
        self.selection.word()
    }

    /// Accepted words in the order they were found
    pub fn found_words(&self) -> &[Word] {
        &self.found_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn initial_duration(&self) -> u32 {
        self.initial_duration
    }

    /// Seconds played so far in the current round
    pub fn elapsed_secs(&self) -> u32 {
        self.initial_duration.saturating_sub(self.time_remaining)
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn dictionary(&self) -> Option<&Arc<Dictionary>> {
        self.dictionary.as_ref()
    }

    pub fn dictionary_ready(&self) -> bool {
        self.dictionary.is_some()
    }

    pub fn pending_policy(&self) -> PendingDictionaryPolicy {
        self.pending_policy
    }

    pub fn episode_id(&self) -> u64 {
        self.episode_id
    }

    /// Current RNG state; a session created with it draws the same next board
    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    fn set_status(&mut self, next: GameStatus) {
        debug!(
            episode = self.episode_id,
            from = self.status.as_str(),
            to = next.as_str(),
            "status change"
        );
        self.status = next;
    }

    fn check_duration(duration_secs: u32) -> Result<(), GameError> {
        if duration_secs == 0 {
            return Err(GameError::invalid("duration must be positive"));
        }
        Ok(())
    }

    /// Start a round on a freshly generated board
    ///
    /// Returns `Ok(false)` without changes while a round is running.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidConfiguration`] for a board size outside 4..=6 or a
    /// zero duration. The session is left untouched.
    pub fn start_game(
        &mut self,
        size: u8,
        difficulty: Difficulty,
        duration_secs: u32,
    ) -> Result<bool, GameError> {
        if self.status.in_round() {
            return Ok(false);
        }
        Board::check_size(size)?;
        Self::check_duration(duration_secs)?;

        let board = generate(size, difficulty, &mut self.rng)?;
        self.begin(board, difficulty, duration_secs);
        Ok(true)
    }

    /// Start a round on a caller-provided board
    pub fn start_game_with_board(
        &mut self,
        board: Board,
        difficulty: Difficulty,
        duration_secs: u32,
    ) -> Result<bool, GameError> {
        if self.status.in_round() {
            return Ok(false);
        }
        Board::check_size(board.size())?;
        Self::check_duration(duration_secs)?;

        self.begin(board, difficulty, duration_secs);
        Ok(true)
    }

    fn begin(&mut self, board: Board, difficulty: Difficulty, duration_secs: u32) {
        self.board_size = board.size();
        self.board = Some(board);
        self.difficulty = difficulty;
        self.selection.clear();
        self.found_words.clear();
        self.score = 0;
        self.time_remaining = duration_secs;
        self.initial_duration = duration_secs;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.set_status(GameStatus::Active);
    }

    pub fn pause(&mut self) -> bool {
        if self.status != GameStatus::Active {
            return false;
        }
        self.set_status(GameStatus::Paused);
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.status != GameStatus::Paused {
            return false;
        }
        self.set_status(GameStatus::Active);
        true
    }

    /// Extend the selection with the tile at `pos`
    ///
    /// No-op unless active, or when the tile is off the board, already on the
    /// path, or not adjacent to the last selected tile.
    pub fn select_letter(&mut self, pos: Position) -> bool {
        if self.status != GameStatus::Active {
            return false;
        }
        let Some(board) = self.board.as_mut() else {
            return false;
        };
        let Some(letter) = board.letter(pos) else {
            return false;
        };
        if self.selection.push(pos, letter).is_err() {
            return false;
        }
        board.set_selected(pos, true);
        true
    }

    /// Remove the last selected tile; `pos` must be that tile
    pub fn deselect_letter(&mut self, pos: Position) -> bool {
        if self.status != GameStatus::Active || self.selection.last() != Some(pos) {
            return false;
        }
        let Some(board) = self.board.as_mut() else {
            return false;
        };
        self.selection.pop();
        board.set_selected(pos, false);
        true
    }

    /// Drop the whole selection (allowed in any status)
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        if let Some(board) = self.board.as_mut() {
            board.clear_selected();
        }
    }

    /// Submit the current word
    ///
    /// The selection is cleared whatever the outcome, unless the submission
    /// is ignored outright.
    pub fn submit_word(&mut self) -> SubmitOutcome {
        if self.status != GameStatus::Active {
            return SubmitOutcome::Ignored;
        }
        let Some(board) = self.board.as_ref() else {
            return SubmitOutcome::Ignored;
        };

        let result = validate(Submission {
            board,
            path: self.selection.path(),
            word: self.selection.word(),
            dictionary: self.dictionary.as_deref(),
            policy: self.pending_policy,
            found: &self.found_words,
        });
        self.clear_selection();

        match result {
            Ok(word) => {
                debug!(
                    episode = self.episode_id,
                    word = %word.text,
                    score = word.score,
                    "word accepted"
                );
                self.score += word.score;
                self.found_words.push(word.clone());
                SubmitOutcome::Accepted(word)
            }
            Err(rejection) => {
                debug!(
                    episode = self.episode_id,
                    code = rejection.code(),
                    "word rejected"
                );
                SubmitOutcome::Rejected(rejection)
            }
        }
    }

    /// Advance the clock by one tick; finishes the round when time runs out
    pub fn tick(&mut self) -> bool {
        if self.status != GameStatus::Active {
            return false;
        }
        self.time_remaining = self.time_remaining.saturating_sub(TICK_SECS);
        if self.time_remaining == 0 {
            self.finish();
        }
        true
    }

    /// Force the round to finish
    pub fn end_game(&mut self) -> bool {
        if !self.status.in_round() {
            return false;
        }
        self.finish();
        true
    }

    fn finish(&mut self) {
        self.clear_selection();
        self.set_status(GameStatus::Finished);
    }

    /// Back to `Ready`, discarding the board and round results
    pub fn reset_game(&mut self) -> bool {
        if self.status == GameStatus::Ready {
            return false;
        }
        if self.status.in_round() {
            self.finish();
        }
        self.selection.clear();
        self.board = None;
        self.found_words.clear();
        self.score = 0;
        self.time_remaining = 0;
        self.set_status(GameStatus::Ready);
        true
    }

    /// Switch language (only between rounds); the dictionary becomes pending
    pub fn set_language(&mut self, key: &str) -> bool {
        if self.status.in_round() {
            return false;
        }
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return false;
        }
        if key == self.language && self.dictionary.is_some() {
            return true;
        }
        debug!(from = %self.language, to = %key, "language change");
        self.language = key;
        self.dictionary = None;
        true
    }

    /// Install a loaded dictionary; loads for another key are stale and ignored
    pub fn install_dictionary(&mut self, dictionary: Arc<Dictionary>) -> bool {
        if dictionary.key() != self.language {
            debug!(
                expected = %self.language,
                got = dictionary.key(),
                "ignoring stale dictionary"
            );
            return false;
        }
        debug!(key = dictionary.key(), words = dictionary.len(), "dictionary installed");
        self.dictionary = Some(dictionary);
        true
    }

    /// Apply a render-layer command, returning whether it changed anything
    pub fn apply_command(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::StartGame {
                board_size,
                difficulty,
                duration_secs,
            } => match self.start_game(board_size, difficulty, duration_secs) {
                Ok(started) => started,
                Err(err) => {
                    debug!(error = %err, "start refused");
                    false
                }
            },
            GameCommand::Pause => self.pause(),
            GameCommand::Resume => self.resume(),
            GameCommand::EndGame => self.end_game(),
            GameCommand::Reset => self.reset_game(),
            GameCommand::Select { position } => self.select_letter(position),
            GameCommand::Deselect { position } => self.deselect_letter(position),
            GameCommand::ClearSelection => {
                self.clear_selection();
                true
            }
            GameCommand::Submit => self.submit_word() != SubmitOutcome::Ignored,
            GameCommand::SetLanguage { language } => self.set_language(&language),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.episode_id = self.episode_id;
        out.status = self.status;
        out.board.clear();
        if let Some(board) = &self.board {
            out.board
                .extend(board.rows().map(|row| row.iter().map(CellSnapshot::from).collect()));
        }
        out.board_size = self.board_size;
        out.difficulty = self.difficulty;
        out.language.clone_from(&self.language);
        out.dictionary_ready = self.dictionary.is_some();
        out.selection_path.clear();
        out.selection_path.extend_from_slice(self.selection.path());
        out.current_word.clear();
        out.current_word.push_str(self.selection.word());
        out.found_words.clone_from(&self.found_words);
        out.score = self.score;
        out.time_remaining = self.time_remaining;
        out.initial_duration = self.initial_duration;
        out.progress_percent = progress_percent(self.time_remaining, self.initial_duration);
        out.almost_finished = self.status.in_round()
            && almost_finished(self.time_remaining, self.initial_duration);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::from_rows(&["CATS", "QIXE", "ZJKL", "MNOP"]).unwrap()
    }

    fn ready_game() -> GameState {
        let mut game = GameState::new(42);
        game.install_dictionary(Arc::new(Dictionary::from_words(
            DEFAULT_LANGUAGE,
            ["cat", "cats", "quit", "sat"],
        )));
        game
    }

    fn active_game() -> GameState {
        let mut game = ready_game();
        assert!(game
            .start_game_with_board(board(), Difficulty::Medium, 180)
            .unwrap());
        game
    }

    fn select_all(game: &mut GameState, cells: &[(u8, u8)]) {
        for &(r, c) in cells {
            assert!(game.select_letter(Position::new(r, c)), "select ({r},{c})");
        }
    }

    #[test]
    fn test_new_game_is_ready() {
        let game = GameState::new(1);
        assert_eq!(game.status(), GameStatus::Ready);
        assert!(game.board().is_none());
        assert_eq!(game.language(), "english");
        assert!(!game.dictionary_ready());
        assert_eq!(game.episode_id(), 0);
    }

    #[test]
    fn test_start_game() {
        let mut game = GameState::new(7);
        assert!(game.start_game(4, Difficulty::Medium, 180).unwrap());
        assert_eq!(game.status(), GameStatus::Active);
        assert_eq!(game.board().unwrap().size(), 4);
        assert_eq!(game.time_remaining(), 180);
        assert_eq!(game.score(), 0);
        assert_eq!(game.episode_id(), 1);
    }

    #[test]
    fn test_start_game_invalid_configuration_leaves_state() {
        let mut game = GameState::new(7);
        let seed = game.seed();
        assert!(game.start_game(3, Difficulty::Easy, 180).is_err());
        assert!(game.start_game(5, Difficulty::Easy, 0).is_err());
        assert_eq!(game.status(), GameStatus::Ready);
        assert_eq!(game.seed(), seed);
        assert_eq!(game.episode_id(), 0);
    }

    #[test]
    fn test_start_with_stored_board() {
        let mut game = GameState::new(7);
        let stored = serde_json::to_value(board()).unwrap();
        let board: Board = serde_json::from_value(stored).unwrap();
        assert!(game
            .start_game_with_board(board, Difficulty::Easy, 60)
            .unwrap());
        assert_eq!(game.board_size(), 4);

        let cells: Vec<serde_json::Value> = (0..81)
            .map(|i| {
                serde_json::json!({
                    "letter": "B",
                    "position": {"row": i / 9, "col": i % 9},
                    "isSelected": false,
                })
            })
            .collect();
        let oversized = serde_json::json!({"size": 9, "cells": cells});
        assert!(serde_json::from_value::<Board>(oversized).is_err());
    }

    #[test]
    fn test_start_game_noop_while_running() {
        let mut game = active_game();
        assert!(!game.start_game(5, Difficulty::Hard, 60).unwrap());
        game.pause();
        assert!(!game.start_game(5, Difficulty::Hard, 60).unwrap());
        assert_eq!(game.board_size(), 4);
        assert_eq!(game.episode_id(), 1);
    }

    #[test]
    fn test_pause_resume_guards() {
        let mut game = ready_game();
        assert!(!game.pause());
        assert!(!game.resume());

        game.start_game(4, Difficulty::Easy, 60).unwrap();
        assert!(!game.resume());
        assert!(game.pause());
        assert!(!game.pause());
        assert!(game.resume());
        assert_eq!(game.status(), GameStatus::Active);
    }

    #[test]
    fn test_select_requires_adjacency() {
        let mut game = active_game();
        assert!(game.select_letter(Position::new(0, 0)));
        assert!(!game.select_letter(Position::new(0, 0)));
        assert!(!game.select_letter(Position::new(2, 2)));
        assert!(!game.select_letter(Position::new(9, 0)));
        assert!(game.select_letter(Position::new(1, 1)));
        assert_eq!(game.current_word(), "CI");
        assert!(game.board().unwrap().cell(Position::new(1, 1)).unwrap().is_selected);
    }

    #[test]
    fn test_select_ignored_when_paused() {
        let mut game = active_game();
        game.pause();
        assert!(!game.select_letter(Position::new(0, 0)));
        assert!(game.selection_path().is_empty());
    }

    #[test]
    fn test_deselect_last_only() {
        let mut game = active_game();
        select_all(&mut game, &[(1, 0), (1, 1), (0, 2)]);
        assert_eq!(game.current_word(), "QUIT");

        assert!(!game.deselect_letter(Position::new(1, 1)));
        assert!(game.deselect_letter(Position::new(0, 2)));
        assert_eq!(game.current_word(), "QUI");
        assert!(game.deselect_letter(Position::new(1, 1)));
        assert!(game.deselect_letter(Position::new(1, 0)));
        assert_eq!(game.current_word(), "");
        assert_eq!(game.board().unwrap().selected_positions().count(), 0);
    }

    #[test]
    fn test_submit_accepts_and_scores() {
        let mut game = active_game();
        select_all(&mut game, &[(0, 0), (0, 1), (0, 2)]);
        let outcome = game.submit_word();
        assert!(outcome.is_accepted());
        assert_eq!(game.score(), 1);
        assert_eq!(game.found_words().len(), 1);
        assert!(game.selection_path().is_empty());
        assert_eq!(game.board().unwrap().selected_positions().count(), 0);
    }

    #[test]
    fn test_submit_duplicate_rejected() {
        let mut game = active_game();
        select_all(&mut game, &[(0, 0), (0, 1), (0, 2)]);
        game.submit_word();
        select_all(&mut game, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(
            game.submit_word(),
            SubmitOutcome::Rejected(Rejection::AlreadyFound)
        );
        assert_eq!(game.score(), 1);
        assert!(game.selection_path().is_empty());
    }

    #[test]
    fn test_submit_short_word_clears() {
        let mut game = active_game();
        select_all(&mut game, &[(0, 0), (0, 1)]);
        assert_eq!(game.submit_word().rejection(), Some(Rejection::TooShort));
        assert!(game.selection_path().is_empty());
        assert_eq!(game.current_word(), "");
    }

    #[test]
    fn test_submit_ignored_outside_active() {
        let mut game = active_game();
        select_all(&mut game, &[(0, 0), (0, 1), (0, 2)]);
        game.pause();
        assert_eq!(game.submit_word(), SubmitOutcome::Ignored);
        assert_eq!(game.selection_path().len(), 3);
    }

    #[test]
    fn test_pending_dictionary_rejects_by_default() {
        let mut game = GameState::new(3);
        game.start_game_with_board(board(), Difficulty::Medium, 60)
            .unwrap();
        select_all(&mut game, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(
            game.submit_word().rejection(),
            Some(Rejection::DictionaryPending)
        );

        game.set_pending_policy(PendingDictionaryPolicy::AssumeValid);
        select_all(&mut game, &[(0, 0), (0, 1), (0, 2)]);
        assert!(game.submit_word().is_accepted());
    }

    #[test]
    fn test_tick_finishes_exactly_at_zero() {
        let mut game = active_game();
        for i in 1..180 {
            assert!(game.tick());
            assert_eq!(game.status(), GameStatus::Active, "tick {i}");
        }
        assert!(game.tick());
        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.time_remaining(), 0);
        assert!(!game.tick());
        assert_eq!(game.time_remaining(), 0);
    }

    #[test]
    fn test_tick_ignored_when_paused() {
        let mut game = active_game();
        game.pause();
        assert!(!game.tick());
        assert_eq!(game.time_remaining(), 180);
    }

    #[test]
    fn test_end_and_reset() {
        let mut game = active_game();
        select_all(&mut game, &[(0, 0), (0, 1), (0, 2)]);
        game.submit_word();

        assert!(game.end_game());
        assert_eq!(game.status(), GameStatus::Finished);
        assert!(!game.end_game());
        assert_eq!(game.score(), 1);

        assert!(game.reset_game());
        assert_eq!(game.status(), GameStatus::Ready);
        assert!(game.board().is_none());
        assert_eq!(game.score(), 0);
        assert!(game.found_words().is_empty());
        assert!(!game.reset_game());
    }

    #[test]
    fn test_reset_from_active() {
        let mut game = active_game();
        select_all(&mut game, &[(0, 0)]);
        assert!(game.reset_game());
        assert_eq!(game.status(), GameStatus::Ready);
        assert!(game.selection_path().is_empty());
    }

    #[test]
    fn test_language_switch_and_stale_install() {
        let mut game = ready_game();
        assert!(game.dictionary_ready());
        assert!(game.set_language("French"));
        assert_eq!(game.language(), "french");
        assert!(!game.dictionary_ready());

        let stale = Arc::new(Dictionary::from_words("english", ["cat"]));
        assert!(!game.install_dictionary(stale));
        assert!(!game.dictionary_ready());

        let fresh = Arc::new(Dictionary::from_words("french", ["chat"]));
        assert!(game.install_dictionary(fresh));
        assert!(game.dictionary_ready());

        game.start_game(4, Difficulty::Medium, 60).unwrap();
        assert!(!game.set_language("spanish"));
        assert_eq!(game.language(), "french");
    }

    #[test]
    fn test_apply_command() {
        let mut game = ready_game();
        assert!(game.apply_command(GameCommand::StartGame {
            board_size: 5,
            difficulty: Difficulty::Hard,
            duration_secs: 90,
        }));
        assert_eq!(game.board_size(), 5);
        assert!(game.apply_command(GameCommand::Pause));
        assert!(!game.apply_command(GameCommand::Submit));
        assert!(game.apply_command(GameCommand::Resume));
        assert!(game.apply_command(GameCommand::ClearSelection));
        assert!(game.apply_command(GameCommand::EndGame));
        assert!(!game.apply_command(GameCommand::StartGame {
            board_size: 9,
            difficulty: Difficulty::Hard,
            duration_secs: 90,
        }));
        assert!(game.apply_command(GameCommand::Reset));
    }

    #[test]
    fn test_snapshot() {
        let mut game = active_game();
        select_all(&mut game, &[(1, 0), (1, 1)]);
        let snap = game.snapshot();
        assert_eq!(snap.status, GameStatus::Active);
        assert_eq!(snap.board.len(), 4);
        assert_eq!(snap.board[1][0].letter, "QU");
        assert!(snap.board[1][0].is_selected);
        assert_eq!(snap.current_word, "QUI");
        assert_eq!(snap.selection_path.len(), 2);
        assert_eq!(snap.progress_percent, 100);
        assert!(!snap.almost_finished);
        assert!(snap.dictionary_ready);

        for _ in 0..162 {
            game.tick();
        }
        assert!(game.snapshot().almost_finished);
    }

    #[test]
    fn test_same_seed_same_boards() {
        let mut a = GameState::new(99);
        let mut b = GameState::new(99);
        for _ in 0..3 {
            a.start_game(5, Difficulty::Medium, 10).unwrap();
            b.start_game(5, Difficulty::Medium, 10).unwrap();
            assert_eq!(a.board(), b.board());
            a.end_game();
            b.end_game();
        }
    }
}

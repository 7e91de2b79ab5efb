//! Session actor
//!
//! One tokio task owns the [`GameState`]. Everything that mutates it (render
//! commands, timer ticks, finished dictionary loads) arrives as a message and
//! is applied in order, so transitions never interleave.

use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{anyhow, Context};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use boggle_core::{Board, Dictionary, GameError, GameSnapshot, GameState, SubmitOutcome};
use boggle_dictionary::DictionaryService;
use boggle_engine::{hint, SolvedWord};
use boggle_stats::{finalize, Preferences, StatsService};
use boggle_types::{Difficulty, GameCommand, GameStatus};

use crate::config::RuntimeConfig;

/// Statistics shared between sessions (single writer at a time)
pub type SharedStats = Arc<Mutex<StatsService>>;

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    /// Not allowed in the current status; nothing changed
    Ignored,
    /// A submission was checked (accepted or rejected)
    Submitted(SubmitOutcome),
    /// Start parameters were refused
    Invalid(GameError),
}

enum Request {
    Command {
        command: GameCommand,
        reply: oneshot::Sender<CommandOutcome>,
    },
    StartWithBoard {
        board: Board,
        difficulty: Difficulty,
        duration_secs: u32,
        reply: oneshot::Sender<CommandOutcome>,
    },
    Hint {
        reply: oneshot::Sender<Option<SolvedWord>>,
    },
}

/// Reply held back until the new snapshot is published
enum Reply {
    Outcome(oneshot::Sender<CommandOutcome>, CommandOutcome),
    Hint(oneshot::Sender<Option<SolvedWord>>, Option<SolvedWord>),
}

impl Reply {
    fn send(self) {
        // The caller may have given up waiting
        match self {
            Reply::Outcome(tx, outcome) => {
                let _ = tx.send(outcome);
            }
            Reply::Hint(tx, best) => {
                let _ = tx.send(best);
            }
        }
    }
}

enum Internal {
    DictionaryLoaded(Arc<Dictionary>),
}

enum Event {
    Request(Option<Request>),
    Internal(Internal),
    Tick,
}

pub struct SessionRuntime;

impl SessionRuntime {
    /// Spawn a session task on the current tokio runtime
    pub fn spawn(
        config: RuntimeConfig,
        dictionaries: Arc<DictionaryService>,
        stats: SharedStats,
    ) -> SessionHandle {
        let seed = config.resolve_seed();
        let mut state = GameState::new(seed).with_pending_policy(config.pending_policy);
        state.set_language(&config.language);

        let (tx, rx) = mpsc::channel(config.max_pending_commands.max(1));
        let (internal_tx, internal_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());

        info!(seed, language = state.language(), "session started");

        let session = Session {
            state,
            dictionaries,
            stats,
            snapshot_tx,
            internal_tx,
            tick: config.tick,
            timer: None,
            loading: None,
            recorded_episode: None,
        };
        let task = tokio::spawn(session.run(rx, internal_rx));

        SessionHandle {
            tx,
            snapshots: snapshot_rx,
            task,
        }
    }
}

/// Client side of a running session
pub struct SessionHandle {
    tx: mpsc::Sender<Request>,
    snapshots: watch::Receiver<GameSnapshot>,
    task: JoinHandle<()>,
}

impl SessionHandle {
    async fn request<T>(&self, make: impl FnOnce(oneshot::Sender<T>) -> Request) -> anyhow::Result<T> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(make(reply))
            .await
            .map_err(|_| anyhow!("session task has stopped"))?;
        rx.await.context("session dropped the reply")
    }

    /// Apply a render-layer command
    pub async fn send(&self, command: GameCommand) -> anyhow::Result<CommandOutcome> {
        self.request(|reply| Request::Command { command, reply }).await
    }

    /// Start a round with the player's default settings
    pub async fn start_with_preferences(&self, prefs: &Preferences) -> anyhow::Result<CommandOutcome> {
        self.send(prefs.game_settings().command()).await
    }

    /// Start a round on a fixed board
    pub async fn start_with_board(
        &self,
        board: Board,
        difficulty: Difficulty,
        duration_secs: u32,
    ) -> anyhow::Result<CommandOutcome> {
        self.request(|reply| Request::StartWithBoard {
            board,
            difficulty,
            duration_secs,
            reply,
        })
        .await
    }

    /// Best word not yet found on the current board
    pub async fn hint(&self) -> anyhow::Result<Option<SolvedWord>> {
        self.request(|reply| Request::Hint { reply }).await
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified after every state change
    pub fn subscribe(&self) -> watch::Receiver<GameSnapshot> {
        self.snapshots.clone()
    }

    /// Close the command channel and wait for the task to finish
    pub async fn shutdown(self) -> anyhow::Result<()> {
        drop(self.tx);
        self.task.await.context("session task panicked")?;
        Ok(())
    }
}

struct Session {
    state: GameState,
    dictionaries: Arc<DictionaryService>,
    stats: SharedStats,
    snapshot_tx: watch::Sender<GameSnapshot>,
    internal_tx: mpsc::UnboundedSender<Internal>,
    tick: std::time::Duration,
    /// Present only while the round is active
    timer: Option<Interval>,
    /// Key of the dictionary load in flight
    loading: Option<String>,
    recorded_episode: Option<u64>,
}

async fn next_tick(timer: &mut Option<Interval>) {
    match timer {
        Some(timer) => {
            timer.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

impl Session {
    async fn run(
        mut self,
        mut rx: mpsc::Receiver<Request>,
        mut internal_rx: mpsc::UnboundedReceiver<Internal>,
    ) {
        self.request_dictionary();
        self.after_change();

        loop {
            let event = tokio::select! {
                request = rx.recv() => Event::Request(request),
                Some(internal) = internal_rx.recv() => Event::Internal(internal),
                _ = next_tick(&mut self.timer) => Event::Tick,
            };

            match event {
                Event::Request(Some(request)) => {
                    let reply = self.handle_request(request);
                    self.after_change();
                    reply.send();
                    continue;
                }
                Event::Request(None) => break,
                Event::Internal(Internal::DictionaryLoaded(dictionary)) => {
                    if self.loading.as_deref() == Some(dictionary.key()) {
                        self.loading = None;
                    }
                    self.state.install_dictionary(dictionary);
                }
                Event::Tick => {
                    self.state.tick();
                }
            }

            self.after_change();
        }

        debug!(episode = self.state.episode_id(), "session stopped");
    }

    fn handle_request(&mut self, request: Request) -> Reply {
        match request {
            Request::Command { command, reply } => Reply::Outcome(reply, self.apply(command)),
            Request::StartWithBoard {
                board,
                difficulty,
                duration_secs,
                reply,
            } => {
                let outcome = match self
                    .state
                    .start_game_with_board(board, difficulty, duration_secs)
                {
                    Ok(true) => CommandOutcome::Applied,
                    Ok(false) => CommandOutcome::Ignored,
                    Err(err) => CommandOutcome::Invalid(err),
                };
                Reply::Outcome(reply, outcome)
            }
            Request::Hint { reply } => {
                let found = match (self.state.board(), self.state.dictionary()) {
                    (Some(board), Some(dict)) => hint(board, dict, self.state.found_words()),
                    _ => None,
                };
                Reply::Hint(reply, found)
            }
        }
    }

    fn apply(&mut self, command: GameCommand) -> CommandOutcome {
        debug!(command = command.as_str(), "command");
        let applied = |ok: bool| {
            if ok {
                CommandOutcome::Applied
            } else {
                CommandOutcome::Ignored
            }
        };

        match command {
            GameCommand::StartGame {
                board_size,
                difficulty,
                duration_secs,
            } => match self.state.start_game(board_size, difficulty, duration_secs) {
                Ok(started) => applied(started),
                Err(err) => CommandOutcome::Invalid(err),
            },
            GameCommand::Submit => match self.state.submit_word() {
                SubmitOutcome::Ignored => CommandOutcome::Ignored,
                outcome => CommandOutcome::Submitted(outcome),
            },
            GameCommand::Reset => {
                // Reset mid-round ends the game first, so it still counts
                if self.state.status().in_round() {
                    self.state.end_game();
                    self.record_if_finished();
                }
                applied(self.state.reset_game())
            }
            GameCommand::SetLanguage { language } => {
                let ok = self.state.set_language(&language);
                if ok {
                    self.request_dictionary();
                }
                applied(ok)
            }
            other => applied(self.state.apply_command(other)),
        }
    }

    fn request_dictionary(&mut self) {
        if self.state.dictionary_ready() {
            return;
        }
        let key = self.state.language().to_string();
        if let Some(dictionary) = self.dictionaries.cached(&key) {
            self.state.install_dictionary(dictionary);
            return;
        }
        if self.loading.as_deref() == Some(key.as_str()) {
            return;
        }

        debug!(key = %key, "loading dictionary");
        self.loading = Some(key.clone());
        let dictionaries = Arc::clone(&self.dictionaries);
        let internal_tx = self.internal_tx.clone();
        tokio::spawn(async move {
            let dictionary = dictionaries.load_or_fallback(&key).await;
            let _ = internal_tx.send(Internal::DictionaryLoaded(dictionary));
        });
    }

    fn after_change(&mut self) {
        self.sync_timer();
        self.record_if_finished();
        let state = &self.state;
        self.snapshot_tx.send_modify(|snap| state.snapshot_into(snap));
    }

    /// Run the interval only while active; a fresh one starts a full period out
    fn sync_timer(&mut self) {
        let active = self.state.status() == GameStatus::Active;
        match (active, self.timer.is_some()) {
            (true, false) => {
                let mut timer = interval_at(Instant::now() + self.tick, self.tick);
                timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
                self.timer = Some(timer);
            }
            (false, true) => self.timer = None,
            _ => {}
        }
    }

    fn record_if_finished(&mut self) {
        let episode = self.state.episode_id();
        if self.state.status() != GameStatus::Finished || self.recorded_episode == Some(episode) {
            return;
        }
        self.recorded_episode = Some(episode);

        let Some(summary) = finalize(&self.state) else {
            debug!(episode, "finished without words, nothing to record");
            return;
        };
        let mut stats = self.stats.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = stats.record_game(summary) {
            warn!(episode, error = %err, "failed to persist statistics");
        }
    }
}

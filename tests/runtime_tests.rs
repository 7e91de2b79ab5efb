//! Runtime tests - sessions driven through the async handle

use std::sync::{Arc, Mutex};
use std::time::Duration;

use boggle::core::{Board, Rejection, SubmitOutcome};
use boggle::dictionary::{DictionaryService, FileSource};
use boggle::runtime::{CommandOutcome, RuntimeConfig, SessionHandle, SessionRuntime, SharedStats};
use boggle::stats::{MemoryStore, Preferences, StatsService};
use boggle::types::{Difficulty, GameCommand, GameStatus, Position};

fn stats() -> SharedStats {
    Arc::new(Mutex::new(StatsService::load(Arc::new(MemoryStore::new()))))
}

fn config() -> RuntimeConfig {
    RuntimeConfig {
        seed: Some(4242),
        ..RuntimeConfig::default()
    }
}

async fn wait_ready(handle: &SessionHandle) {
    let mut rx = handle.subscribe();
    rx.wait_for(|s| s.dictionary_ready).await.unwrap();
}

async fn select(handle: &SessionHandle, cells: &[(u8, u8)]) {
    for &(row, col) in cells {
        let outcome = handle
            .send(GameCommand::Select {
                position: Position::new(row, col),
            })
            .await
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Applied);
    }
}

#[tokio::test(start_paused = true)]
async fn test_full_round_through_handle() {
    let stats = stats();
    let session = SessionRuntime::spawn(
        config(),
        Arc::new(DictionaryService::builtin()),
        Arc::clone(&stats),
    );
    wait_ready(&session).await;

    let board = Board::from_rows(&["CATS", "DOGE", "BIRD", "TREE"]).unwrap();
    session
        .start_with_board(board, Difficulty::Medium, 30)
        .await
        .unwrap();

    select(&session, &[(0, 0), (0, 1), (0, 2)]).await;
    assert_eq!(session.snapshot().current_word, "CAT");
    assert!(matches!(
        session.send(GameCommand::Submit).await.unwrap(),
        CommandOutcome::Submitted(SubmitOutcome::Accepted(_))
    ));

    select(&session, &[(0, 0), (0, 1), (0, 2)]).await;
    assert_eq!(
        session.send(GameCommand::Submit).await.unwrap(),
        CommandOutcome::Submitted(SubmitOutcome::Rejected(Rejection::AlreadyFound))
    );

    let snap = session.snapshot();
    assert_eq!(snap.found_words.len(), 1);
    assert_eq!(snap.score, 1);
    assert!(snap.selection_path.is_empty());

    let mut rx = session.subscribe();
    let snap = rx
        .wait_for(|s| s.status == GameStatus::Finished)
        .await
        .unwrap()
        .clone();
    assert_eq!(snap.time_remaining, 0);
    assert!(snap.almost_finished);

    assert_eq!(stats.lock().unwrap().statistics().games_played, 1);
    session.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_unavailable_dictionary_uses_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let dictionaries = Arc::new(DictionaryService::new(Arc::new(FileSource::new(dir.path()))));
    let session = SessionRuntime::spawn(config(), dictionaries, stats());
    wait_ready(&session).await;

    let board = Board::from_rows(&["TENS", "ABCD", "FGHI", "JKLM"]).unwrap();
    session
        .start_with_board(board, Difficulty::Easy, 60)
        .await
        .unwrap();
    select(&session, &[(0, 0), (0, 1), (0, 2)]).await;
    assert!(matches!(
        session.send(GameCommand::Submit).await.unwrap(),
        CommandOutcome::Submitted(SubmitOutcome::Accepted(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn test_preferences_start_and_pause() {
    let session = SessionRuntime::spawn(config(), Arc::new(DictionaryService::builtin()), stats());
    let prefs = Preferences {
        default_board_size: 5,
        default_timer_duration: 20,
        ..Preferences::default()
    };
    assert_eq!(
        session.start_with_preferences(&prefs).await.unwrap(),
        CommandOutcome::Applied
    );
    let snap = session.snapshot();
    assert_eq!(snap.board_size, 5);
    assert_eq!(snap.board.len(), 5);

    // Language is fixed while a round runs
    assert_eq!(
        session
            .send(GameCommand::SetLanguage {
                language: "french".into()
            })
            .await
            .unwrap(),
        CommandOutcome::Ignored
    );

    tokio::time::sleep(Duration::from_millis(4500)).await;
    session.send(GameCommand::Pause).await.unwrap();
    tokio::time::sleep(Duration::from_secs(60)).await;
    let snap = session.snapshot();
    assert_eq!(snap.status, GameStatus::Paused);
    assert_eq!(snap.time_remaining, 16);
    assert_eq!(snap.progress_percent, 80);
}

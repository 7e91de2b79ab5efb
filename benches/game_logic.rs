use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use boggle::core::{generate, Board, Dictionary, GameState, SimpleRng};
use boggle::dictionary::builtin::ENGLISH;
use boggle::engine::{find_all_words, is_path_realizable};
use boggle::types::{Difficulty, Position};

fn board() -> Board {
    Board::from_rows(&["SERSP", "ATGLO", "NIEDR", "TSQUE", "ALINE"]).unwrap()
}

fn bench_generate(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_4x4_easy", |b| {
        b.iter(|| generate(black_box(4), Difficulty::Easy, &mut rng).unwrap())
    });
    c.bench_function("generate_6x6_hard", |b| {
        b.iter(|| generate(black_box(6), Difficulty::Hard, &mut rng).unwrap())
    });
}

fn bench_realizable(c: &mut Criterion) {
    let board = board();

    c.bench_function("path_realizable", |b| {
        b.iter(|| {
            is_path_realizable(black_box("strangles"), &board);
            is_path_realizable(black_box("quiet"), &board);
        })
    });
}

fn bench_solve(c: &mut Criterion) {
    let board = board();
    let dictionary = Dictionary::from_words("english", ENGLISH.iter().copied());

    c.bench_function("solve_board", |b| {
        b.iter(|| find_all_words(black_box(&board), &dictionary))
    });
}

fn bench_select_submit(c: &mut Criterion) {
    let dictionary = Arc::new(Dictionary::from_words("english", ENGLISH.iter().copied()));
    let mut state = GameState::new(12345);
    state.install_dictionary(dictionary);

    c.bench_function("select_submit", |b| {
        b.iter(|| {
            if !state.status().in_round() {
                state.reset_game();
                state.start_game_with_board(board(), Difficulty::Medium, 180).unwrap();
            }
            for col in 0..3 {
                state.select_letter(Position::new(0, col));
            }
            black_box(state.submit_word());
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_realizable,
    bench_solve,
    bench_select_submit
);
criterion_main!(benches);

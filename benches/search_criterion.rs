use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use kingside::game_state::game_state::GameState;
use kingside::search::alpha_beta::{minimax_best_move, search_best_move, HARD_SEARCH_DEPTH};

const POSITIONS: &[(&str, &str)] = &[
    ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"),
    ("open_center", "r3k3/1p3p2/2n5/3q4/4P3/2N5/5PP1/R3K3 w - - 0 1"),
    ("endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
];

fn bench_hard_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("hard_search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for (name, fen) in POSITIONS {
        let game = GameState::from_fen(fen).expect("benchmark FEN should parse");
        let color = game.side_to_move;

        group.bench_with_input(BenchmarkId::new("alpha_beta", name), &game, |b, game| {
            b.iter(|| search_best_move(black_box(&game.board), color, HARD_SEARCH_DEPTH))
        });
        group.bench_with_input(BenchmarkId::new("full_minimax", name), &game, |b, game| {
            b.iter(|| minimax_best_move(black_box(&game.board), color, HARD_SEARCH_DEPTH))
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_hard_search);
criterion_main!(search_benches);

//! Benchmarks for move generation and game handling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{parse_coordinate_move, Move, Position};
use chess_rules::{GameConfig, GameState};

const ITALIAN: &[&str] = &[
    "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "d2d3", "f8c5", "e1g1", "d7d6",
];

fn position_after(moves: &[&str]) -> Position {
    let mut position = Position::new();
    for notation in moves {
        let (from, to, promotion) = parse_coordinate_move(notation).unwrap();
        let mv = position.validate_move(from, to, promotion).unwrap();
        position.make_move(mv);
    }
    position
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let startpos = Position::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let middlegame = position_after(ITALIAN);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| middlegame.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Position::new();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let middlegame = position_after(ITALIAN);
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves()))
    });
    group.bench_function("middlegame_pseudo", |b| {
        b.iter(|| black_box(middlegame.pseudo_moves()))
    });
    group.bench_function("has_legal_move", |b| {
        b.iter(|| black_box(middlegame.has_legal_move()))
    });

    group.finish();
}

fn bench_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("game");

    let moves: Vec<Move> = {
        let mut position = Position::new();
        ITALIAN
            .iter()
            .map(|notation| {
                let (from, to, promotion) = parse_coordinate_move(notation).unwrap();
                let mv = position.validate_move(from, to, promotion).unwrap();
                position.make_move(mv);
                mv
            })
            .collect()
    };
    group.bench_function("replay_italian", |b| {
        b.iter(|| GameState::replay(Position::new(), black_box(&moves), GameConfig::default()))
    });

    let middlegame = position_after(ITALIAN);
    group.bench_function("zobrist_key", |b| b.iter(|| black_box(middlegame.zobrist_key())));

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_game);
criterion_main!(benches);

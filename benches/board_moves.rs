use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use tile_merge::board::{has_moves, resolve, Board, Grid};
use tile_merge::core::{BoardConfig, Direction};
use tile_merge::session::{GameSession, GameStatus};

/// Grids of increasing density, produced by a fixed seeded walk.
fn corpus(rows: usize, cols: usize) -> Vec<Grid> {
    let mut board = Board::seeded(rows, cols, 42).unwrap();
    let mut grids = vec![board.grid().clone()];
    board.spawn_random_tile();
    board.spawn_random_tile();
    for dir in Direction::ALL.into_iter().cycle().take(40) {
        if board.apply_move(dir).moved {
            grids.push(board.grid().clone());
        }
    }
    grids
}

fn bench_resolve(c: &mut Criterion) {
    for (rows, cols) in [(4, 4), (6, 6), (3, 8)] {
        let grids = corpus(rows, cols);
        for dir in Direction::ALL {
            c.bench_function(&format!("resolve/{rows}x{cols}/{dir}"), |b| {
                b.iter(|| {
                    let mut acc = 0u64;
                    for grid in &grids {
                        acc += resolve(grid, dir).1.score_delta;
                    }
                    black_box(acc)
                })
            });
        }
    }
}

fn bench_has_moves(c: &mut Criterion) {
    let grids = corpus(4, 4);
    c.bench_function("has_moves/4x4", |b| {
        b.iter(|| grids.iter().filter(|g| has_moves(g)).count())
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("session/play_to_end_4x4", |b| {
        b.iter_batched(
            || GameSession::seeded(BoardConfig::default().with_undo_depth(0), 7).unwrap(),
            |mut game| {
                let mut i = 0;
                while game.status() == GameStatus::Playing {
                    game.play(Direction::ALL[i % 4]);
                    i += 1;
                }
                black_box(game.score())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_resolve, bench_has_moves, bench_full_game);
criterion_main!(benches);

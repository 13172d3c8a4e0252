//! Property tests for move resolution.
//!
//! Invariants covered:
//! - Merges conserve tile mass; only the spawn adds to it.
//! - No-op moves leave the grid untouched and produce an empty trace.
//! - A spawn is present iff the move changed the board.
//! - No tile merges twice in one move.
//! - Left/right and up/down are mirror images; up/left are transposes.
//! - Trace destinations never overlap and match the resulting grid.

use std::collections::HashSet;

use proptest::prelude::*;
use tile_merge::board::{resolve, Board, Grid, Relocation};
use tile_merge::core::{Direction, Tile};

fn tile() -> impl Strategy<Value = Tile> {
    prop_oneof![
        3 => Just(0u32),
        1 => (1u32..=11).prop_map(|exp| 1u32 << exp),
    ]
}

fn grid() -> impl Strategy<Value = Grid> {
    (2usize..=6, 2usize..=6).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(proptest::collection::vec(tile(), cols), rows)
            .prop_map(|cells| Grid::from_rows(&cells).expect("generated tiles are valid"))
    })
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn board_from(grid: &Grid, seed: u64) -> Board {
    let mut board = Board::seeded(grid.rows(), grid.cols(), seed).unwrap();
    board.load_grid(grid.clone()).unwrap();
    board
}

proptest! {
    #[test]
    fn mass_is_conserved_except_for_spawn(grid in grid(), dir in direction(), seed in any::<u64>()) {
        let mut board = board_from(&grid, seed);
        let before = board.tile_sum();
        let trace = board.apply_move(dir);
        let spawned = trace.spawn.map_or(0, |s| u64::from(s.value));
        prop_assert_eq!(board.tile_sum(), before + spawned);

        let merged: u64 = trace.merges().iter().map(|m| u64::from(m.new_value)).sum();
        prop_assert_eq!(trace.score_delta, merged);
    }

    #[test]
    fn noop_is_idempotent(grid in grid(), dir in direction(), seed in any::<u64>()) {
        let mut board = board_from(&grid, seed);
        let predicted = board.can_move_in(dir);
        let trace = board.apply_move(dir);
        prop_assert_eq!(predicted, trace.moved);
        if !trace.moved {
            prop_assert_eq!(board.grid(), &grid);
            prop_assert!(trace.relocations.is_empty());
            prop_assert!(trace.moves().is_empty());
            prop_assert!(trace.merges().is_empty());
            prop_assert_eq!(trace.score_delta, 0);
        }
        prop_assert_eq!(trace.spawn.is_some(), trace.moved);
    }

    #[test]
    fn tiles_merge_at_most_once(grid in grid(), dir in direction()) {
        let (_, trace) = resolve(&grid, dir);
        let mut consumed = HashSet::new();
        for reloc in &trace.relocations {
            if let Relocation::Merge { survivor, absorbed, value, new_value, .. } = *reloc {
                prop_assert_eq!(new_value, value * 2);
                prop_assert!(consumed.insert(survivor));
                prop_assert!(consumed.insert(absorbed));
            }
        }
    }

    #[test]
    fn horizontal_moves_are_mirror_images(grid in grid()) {
        let (left, left_trace) = resolve(&grid, Direction::Left);
        let (right, right_trace) = resolve(&grid.mirrored(), Direction::Right);
        prop_assert_eq!(left.mirrored(), right);
        prop_assert_eq!(left_trace.score_delta, right_trace.score_delta);
        prop_assert_eq!(left_trace.moved, right_trace.moved);
    }

    #[test]
    fn vertical_moves_are_mirror_images(grid in grid()) {
        let (up, _) = resolve(&grid, Direction::Up);
        let (down, _) = resolve(&grid.flipped(), Direction::Down);
        prop_assert_eq!(up.flipped(), down);
    }

    #[test]
    fn up_is_transposed_left(grid in grid()) {
        let (up, up_trace) = resolve(&grid, Direction::Up);
        let (left, left_trace) = resolve(&grid.transposed(), Direction::Left);
        prop_assert_eq!(up.transposed(), left);
        prop_assert_eq!(up_trace.score_delta, left_trace.score_delta);
    }

    #[test]
    fn trace_matches_resulting_grid(grid in grid(), dir in direction()) {
        let (next, trace) = resolve(&grid, dir);

        let mut destinations = HashSet::new();
        for reloc in &trace.relocations {
            prop_assert!(destinations.insert(reloc.to()), "overlapping destination {}", reloc.to());
            prop_assert_eq!(next[reloc.to()], reloc.resulting_value());
        }

        // Cells that no relocation targets kept their value.
        for (pos, value) in next.iter() {
            if !destinations.contains(&pos) && value != 0 {
                prop_assert_eq!(grid[pos], value);
            }
        }

        // Every merge destination appears once or twice in the flat view,
        // with exactly one merged-away entry.
        for merge in trace.merges() {
            let at_dest: Vec<_> = trace.moves().into_iter().filter(|m| m.to == merge.at).collect();
            prop_assert!(!at_dest.is_empty() && at_dest.len() <= 2);
            prop_assert_eq!(at_dest.iter().filter(|m| m.merged_away).count(), 1);
        }
    }

    #[test]
    fn can_move_agrees_with_directions(grid in grid()) {
        // An empty board has free cells but nothing to slide.
        prop_assume!(grid.sum() > 0);
        let board = board_from(&grid, 0);
        prop_assert_eq!(board.can_move(), !board.legal_directions().is_empty());
    }
}

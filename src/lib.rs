//! # tile-merge
//!
//! A 2048-style tile-merging board engine.
//!
//! ## Design Principles
//!
//! 1. **Any Shape**: boards are R x C with R, C >= 2. Nothing assumes 4x4.
//!
//! 2. **Replayable Moves**: every move returns a `MoveTrace` listing each
//!    slide, merge, and spawn, so renderers can animate without diffing grids.
//!
//! 3. **Injectable Randomness**: spawns draw through `TileSource`. Seeded
//!    `GameRng` and scripted sources make games fully reproducible.
//!
//! ## Modules
//!
//! - `core`: tiles, positions, directions, errors, RNG, configuration
//! - `board`: grid, line mapping, slide/merge, traces, the `Board` engine
//! - `session`: score, win/stuck status, undo, snapshots
//!
//! ```
//! use tile_merge::{Board, Direction};
//!
//! let mut board = Board::seeded(4, 4, 42).unwrap();
//! board.spawn_random_tile();
//! board.spawn_random_tile();
//!
//! let trace = board.apply_move(Direction::Up);
//! assert_eq!(trace.spawn.is_some(), trace.moved);
//! ```

pub mod board;
pub mod core;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardError, Direction, GameRng, GameRngState, Position, Score, ScriptedSource, Tile, TileSource,
};

pub use crate::board::{
    Board, Grid, LineExtractor, MergeEvent, MoveTrace, Relocation, SpawnTrace, TileMove,
};

pub use crate::session::{GameSession, GameStatus, MoveOutcome, SessionSnapshot};

//! Board engine: grid storage, line mapping, slide/merge, and move traces.
//!
//! - `Grid` is the R x C matrix of tile values.
//! - `LineExtractor` maps a direction onto line coordinates.
//! - `slide_line` resolves one line; `resolve` a whole grid.
//! - `Board` owns a grid plus its spawn source and is what games drive.

mod engine;
mod grid;
mod line;
mod slide;
mod trace;

pub use engine::{has_moves, resolve, Board, SPAWN_TWO_PROBABILITY};
pub use grid::Grid;
pub use line::LineExtractor;
pub use slide::{can_merge, slide_line, SlideOutcome};
pub use trace::{MergeEvent, MoveTrace, Relocation, SpawnTrace, TileMove};

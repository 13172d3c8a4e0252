//! The board engine: owns the grid and resolves moves.
//!
//! ## Move resolution
//!
//! 1. Walk every line with a `LineExtractor` for the direction.
//! 2. Slide and merge each line independently (`slide_line`).
//! 3. If any line moved, write the results back and spawn one tile.
//!
//! A move that changes nothing leaves the grid untouched and produces an
//! empty trace, so callers can skip animation and keep the turn.
//!
//! ```
//! use tile_merge::board::Board;
//! use tile_merge::core::Direction;
//!
//! let mut board = Board::seeded(4, 4, 42).unwrap();
//! board.load_from(&[
//!     vec![2, 2, 0, 0],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 0],
//!     vec![0, 0, 0, 4],
//! ]).unwrap();
//!
//! let trace = board.apply_move(Direction::Left);
//! assert!(trace.moved);
//! assert_eq!(trace.score_delta, 4);
//! assert!(trace.spawn.is_some());
//! ```

use log::{debug, trace, warn};

use super::grid::Grid;
use super::line::LineExtractor;
use super::slide::{can_merge, slide_line, LineBuf};
use super::trace::{MoveTrace, SpawnTrace};
use crate::core::config::MIN_SIDE;
use crate::core::{BoardError, Direction, GameRng, Position, Score, Tile, TileSource};

/// Probability that a spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Resolve a move on `grid` without spawning.
///
/// Returns the resulting grid and a trace whose `spawn` is always `None`.
/// Works for any shape, including single-row strips.
#[must_use]
pub fn resolve(grid: &Grid, direction: Direction) -> (Grid, MoveTrace) {
    let extractor = LineExtractor::new(direction, grid.rows(), grid.cols());
    let mut next = grid.clone();
    let mut out = MoveTrace::unmoved();

    for line in 0..extractor.line_count() {
        let cells: LineBuf<(Tile, Position)> = extractor.line(line).map(|pos| (grid[pos], pos)).collect();
        let slid = slide_line(&cells);
        if !slid.moved {
            continue;
        }

        for (&(_, pos), &value) in cells.iter().zip(slid.values.iter()) {
            next[pos] = value;
        }
        out.moved = true;
        out.score_delta += slid.score;
        out.relocations.extend(slid.relocations);
    }

    out.merged = out.relocations.iter().any(|r| r.is_merge());
    (next, out)
}

/// True if the grid has an empty cell or two adjacent mergeable tiles.
#[must_use]
pub fn has_moves(grid: &Grid) -> bool {
    if grid.count_empty() > 0 {
        return true;
    }
    grid.iter().any(|(pos, value)| {
        let right = grid.get(Position::new(pos.row, pos.col + 1));
        let below = grid.get(Position::new(pos.row + 1, pos.col));
        [right, below]
            .into_iter()
            .flatten()
            .any(|neighbor| can_merge(value, neighbor))
    })
}

/// Board state plus the source its spawns draw from.
///
/// Every mutating call takes `&mut self`, so a move (including its spawn)
/// always completes before the next one starts.
#[derive(Clone, Debug)]
pub struct Board<S = GameRng> {
    grid: Grid,
    source: S,
}

impl Board<GameRng> {
    /// Create an empty board with an entropy-seeded RNG.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Self::with_source(rows, cols, GameRng::from_entropy())
    }

    /// Create an empty board with a deterministic RNG.
    pub fn seeded(rows: usize, cols: usize, seed: u64) -> Result<Self, BoardError> {
        Self::with_source(rows, cols, GameRng::new(seed))
    }
}

impl<S: TileSource> Board<S> {
    /// Create an empty board drawing spawns from `source`.
    pub fn with_source(rows: usize, cols: usize, source: S) -> Result<Self, BoardError> {
        check_shape(rows, cols)?;
        Ok(Self {
            grid: Grid::empty(rows, cols),
            source,
        })
    }

    /// Reshape the board and clear every cell. Does not spawn.
    pub fn initialize(&mut self, rows: usize, cols: usize) -> Result<(), BoardError> {
        check_shape(rows, cols)?;
        self.grid = Grid::empty(rows, cols);
        Ok(())
    }

    /// Clear every cell, keeping the shape.
    pub fn reset(&mut self) {
        self.grid.clear();
    }

    /// Replace the cells with externally supplied rows.
    ///
    /// The rows must match the board's shape exactly; on error the board is
    /// left untouched.
    pub fn load_from(&mut self, rows: &[Vec<Tile>]) -> Result<(), BoardError> {
        let (expected_rows, expected_cols) = self.grid.shape();
        if let Some(bad) = rows.iter().find(|r| r.len() != expected_cols) {
            let err = BoardError::DimensionMismatch {
                expected_rows,
                expected_cols,
                rows: rows.len(),
                cols: bad.len(),
            };
            warn!("rejected board load: {err}");
            return Err(err);
        }
        let grid = Grid::from_rows(rows).map_err(|err| {
            warn!("rejected board load: {err}");
            err
        })?;
        self.load_grid(grid)
    }

    /// Replace the cells with a validated grid of the same shape.
    pub fn load_grid(&mut self, grid: Grid) -> Result<(), BoardError> {
        if grid.shape() != self.grid.shape() {
            let err = BoardError::DimensionMismatch {
                expected_rows: self.grid.rows(),
                expected_cols: self.grid.cols(),
                rows: grid.rows(),
                cols: grid.cols(),
            };
            warn!("rejected board load: {err}");
            return Err(err);
        }
        self.grid = grid;
        Ok(())
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns `None` on a full board.
    pub fn spawn_random_tile(&mut self) -> Option<SpawnTrace> {
        let empty = self.grid.empty_positions();
        if empty.is_empty() {
            return None;
        }

        let at = empty[self.source.choose_index(empty.len())];
        let value = if self.source.next_float() < SPAWN_TWO_PROBABILITY { 2 } else { 4 };
        self.grid[at] = value;

        trace!("spawned {value} at {at}");
        Some(SpawnTrace { at, value })
    }

    /// False when no direction would change the board.
    #[must_use]
    pub fn can_move(&self) -> bool {
        has_moves(&self.grid)
    }

    /// Whether moving in `direction` would change the board.
    #[must_use]
    pub fn can_move_in(&self, direction: Direction) -> bool {
        let extractor = LineExtractor::new(direction, self.grid.rows(), self.grid.cols());
        (0..extractor.line_count()).any(|line| {
            let cells: LineBuf<(Tile, Position)> =
                extractor.line(line).map(|pos| (self.grid[pos], pos)).collect();
            slide_line(&cells).moved
        })
    }

    /// Directions that would change the board, in `Direction::ALL` order.
    #[must_use]
    pub fn legal_directions(&self) -> Vec<Direction> {
        Direction::ALL.into_iter().filter(|&d| self.can_move_in(d)).collect()
    }

    /// Resolve a move on a copy of the grid, without spawning.
    #[must_use]
    pub fn preview(&self, direction: Direction) -> (Grid, MoveTrace) {
        resolve(&self.grid, direction)
    }

    /// Slide and merge toward `direction`, then spawn if anything moved.
    pub fn apply_move(&mut self, direction: Direction) -> MoveTrace {
        let (next, mut out) = resolve(&self.grid, direction);
        if !out.moved {
            debug!("move {direction}: no change");
            return out;
        }

        self.grid = next;
        out.spawn = self.spawn_random_tile();
        debug!(
            "move {direction}: +{} ({} merges, {} relocations)",
            out.score_delta,
            out.merge_count(),
            out.relocations.len()
        );
        out
    }

    /// Current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Copy of the grid as nested rows.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Vec<Tile>> {
        self.grid.to_rows()
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.grid.count_empty()
    }

    #[must_use]
    pub fn highest_tile(&self) -> Tile {
        self.grid.highest()
    }

    #[must_use]
    pub fn tile_sum(&self) -> Score {
        self.grid.sum()
    }

    /// The spawn source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the spawn source, e.g. to reseed.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S> std::fmt::Display for Board<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.grid, f)
    }
}

fn check_shape(rows: usize, cols: usize) -> Result<(), BoardError> {
    if rows < MIN_SIDE || cols < MIN_SIDE {
        return Err(BoardError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

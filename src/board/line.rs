//! Direction-to-coordinate mapping for line processing.
//!
//! A move is resolved one line at a time. A line is a row for Left/Right and
//! a column for Up/Down. Position `j = 0` within a line is always the cell
//! nearest the edge tiles slide toward:
//!
//! | Direction | line index | `j` maps to         |
//! |-----------|------------|---------------------|
//! | Left      | row        | col `j`             |
//! | Right     | row        | col `cols - 1 - j`  |
//! | Up        | col        | row `j`             |
//! | Down      | col        | row `rows - 1 - j`  |

use crate::core::{Direction, Position};

/// Maps `(line, j)` to grid coordinates for one direction and board shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineExtractor {
    direction: Direction,
    rows: usize,
    cols: usize,
}

impl LineExtractor {
    #[must_use]
    pub const fn new(direction: Direction, rows: usize, cols: usize) -> Self {
        Self { direction, rows, cols }
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of independent lines.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        if self.direction.is_horizontal() {
            self.rows
        } else {
            self.cols
        }
    }

    /// Cells per line.
    #[must_use]
    pub const fn line_len(&self) -> usize {
        if self.direction.is_horizontal() {
            self.cols
        } else {
            self.rows
        }
    }

    /// Grid coordinate of slot `j` on line `line`.
    #[must_use]
    pub const fn position(&self, line: usize, j: usize) -> Position {
        match self.direction {
            Direction::Left => Position::new(line, j),
            Direction::Right => Position::new(line, self.cols - 1 - j),
            Direction::Up => Position::new(j, line),
            Direction::Down => Position::new(self.rows - 1 - j, line),
        }
    }

    /// Coordinates of one line in slide order.
    pub fn line(&self, line: usize) -> impl Iterator<Item = Position> + '_ {
        (0..self.line_len()).map(move |j| self.position(line, j))
    }
}

//! Row-major R x C matrix of tile values.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::core::{is_valid_tile, BoardError, Position, Score, Tile};

/// An R x C grid of tiles stored row-major. 0 marks an empty cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an all-empty grid.
    #[must_use]
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Build a grid from nested rows.
    ///
    /// Every row must have the length of the first one, and every value must
    /// be 0 or a power of two >= 2.
    ///
    /// ```
    /// use tile_merge::board::Grid;
    ///
    /// let grid = Grid::from_rows(&[vec![2, 0], vec![0, 4]]).unwrap();
    /// assert_eq!(grid.sum(), 6);
    /// assert!(Grid::from_rows(&[vec![2, 0], vec![4]]).is_err());
    /// ```
    pub fn from_rows(rows: &[Vec<Tile>]) -> Result<Self, BoardError> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(row_count * col_count);

        for (r, row) in rows.iter().enumerate() {
            if row.len() != col_count {
                return Err(BoardError::DimensionMismatch {
                    expected_rows: row_count,
                    expected_cols: col_count,
                    rows: row_count,
                    cols: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(BoardError::InvalidTile { row: r, col: c, value });
                }
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: row_count,
            cols: col_count,
            cells,
        })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Raw row-major cells.
    #[must_use]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    #[inline]
    fn offset(&self, pos: Position) -> usize {
        debug_assert!(pos.row < self.rows && pos.col < self.cols, "{pos} out of bounds");
        pos.row * self.cols + pos.col
    }

    /// Value at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Tile> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(self.cells[self.offset(pos)])
        } else {
            None
        }
    }

    /// Overwrite every cell with 0.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Iterate `(position, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (Position::new(i / cols, i % cols), v))
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        self.iter().filter(|&(_, v)| v == 0).map(|(p, _)| p).collect()
    }

    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn sum(&self) -> Score {
        self.cells.iter().map(|&v| Score::from(v)).sum()
    }

    /// Largest tile on the grid (0 when empty).
    #[must_use]
    pub fn highest(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.cells.chunks(self.cols.max(1)).map(<[Tile]>::to_vec).collect()
    }

    /// Left-right mirror image.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut out = Self::empty(self.rows, self.cols);
        for (pos, v) in self.iter() {
            out[Position::new(pos.row, self.cols - 1 - pos.col)] = v;
        }
        out
    }

    /// Top-bottom mirror image.
    #[must_use]
    pub fn flipped(&self) -> Self {
        let mut out = Self::empty(self.rows, self.cols);
        for (pos, v) in self.iter() {
            out[Position::new(self.rows - 1 - pos.row, pos.col)] = v;
        }
        out
    }

    /// Swap rows and columns.
    #[must_use]
    pub fn transposed(&self) -> Self {
        let mut out = Self::empty(self.cols, self.rows);
        for (pos, v) in self.iter() {
            out[Position::new(pos.col, pos.row)] = v;
        }
        out
    }
}

impl Index<Position> for Grid {
    type Output = Tile;

    fn index(&self, pos: Position) -> &Tile {
        &self.cells[self.offset(pos)]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Tile {
        let offset = self.offset(pos);
        &mut self.cells[offset]
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.highest().max(1).to_string().len();
        for (r, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{v:>width$}")
                    }
                })
                .collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

//! Board bindings for Python.

use numpy::PyArray2;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::board::Board;
use crate::core::Tile;

use super::py_core::{board_error, grid_array, parse_direction, trace_dict};

/// Python wrapper for Board.
///
/// The board starts empty; call `spawn()` to place starting tiles.
#[pyclass(name = "Board")]
pub struct PyBoard(Board);

#[pymethods]
impl PyBoard {
    /// Create an empty board.
    ///
    /// # Arguments
    /// - rows, cols: board shape (at least 2x2)
    /// - seed: RNG seed; omit for a non-deterministic board
    #[new]
    #[pyo3(signature = (rows = 4, cols = 4, seed = None))]
    fn new(rows: usize, cols: usize, seed: Option<u64>) -> PyResult<Self> {
        let board = match seed {
            Some(seed) => Board::seeded(rows, cols, seed),
            None => Board::new(rows, cols),
        };
        board.map(Self).map_err(board_error)
    }

    /// Reshape and clear the board.
    fn initialize(&mut self, rows: usize, cols: usize) -> PyResult<()> {
        self.0.initialize(rows, cols).map_err(board_error)
    }

    /// Replace the cells. Raises ValueError on a shape mismatch.
    fn load(&mut self, rows: Vec<Vec<Tile>>) -> PyResult<()> {
        self.0.load_from(&rows).map_err(board_error)
    }

    /// Spawn one random tile. Returns `((row, col), value)` or None when full.
    fn spawn(&mut self) -> Option<((usize, usize), Tile)> {
        self.0
            .spawn_random_tile()
            .map(|s| ((s.at.row, s.at.col), s.value))
    }

    /// Apply a move and return its trace as a dict.
    #[pyo3(name = "move")]
    fn apply_move<'py>(&mut self, py: Python<'py>, direction: &str) -> PyResult<Bound<'py, PyDict>> {
        let direction = parse_direction(direction)?;
        let trace = self.0.apply_move(direction);
        trace_dict(py, &trace)
    }

    fn can_move(&self) -> bool {
        self.0.can_move()
    }

    /// Legal directions as lowercase strings.
    fn legal_directions(&self) -> Vec<String> {
        self.0
            .legal_directions()
            .into_iter()
            .map(|d| d.to_string())
            .collect()
    }

    /// Cells as nested lists.
    fn snapshot(&self) -> Vec<Vec<Tile>> {
        self.0.snapshot()
    }

    /// Cells as a numpy array.
    fn grid<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u32>>> {
        grid_array(py, self.0.grid())
    }

    fn __repr__(&self) -> String {
        format!("Board({}x{})\n{}", self.0.rows(), self.0.cols(), self.0)
    }
}

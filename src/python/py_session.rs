//! Game session bindings for Python.

use numpy::PyArray2;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::BoardConfig;
use crate::session::{GameSession, GameStatus};

use super::py_core::{board_error, grid_array, parse_direction, trace_dict};

/// Python wrapper for GameSession.
#[pyclass(name = "GameSession")]
pub struct PyGameSession(GameSession);

#[pymethods]
impl PyGameSession {
    /// Start a game.
    ///
    /// # Arguments
    /// - rows, cols: board shape (default 4x4)
    /// - win_tile: tile that wins the game (default 2048)
    /// - undo_depth: moves kept for undo (default 16)
    /// - seed: RNG seed; omit for a non-deterministic game
    #[new]
    #[pyo3(signature = (rows = 4, cols = 4, win_tile = 2048, undo_depth = 16, seed = None))]
    fn new(rows: usize, cols: usize, win_tile: u32, undo_depth: usize, seed: Option<u64>) -> PyResult<Self> {
        let config = BoardConfig::new(rows, cols)
            .with_win_tile(win_tile)
            .with_undo_depth(undo_depth);
        let session = match seed {
            Some(seed) => GameSession::seeded(config, seed),
            None => GameSession::new(config),
        };
        session.map(Self).map_err(board_error)
    }

    /// Apply a move. Returns the trace dict with an extra `status` key.
    fn play<'py>(&mut self, py: Python<'py>, direction: &str) -> PyResult<Bound<'py, PyDict>> {
        let direction = parse_direction(direction)?;
        let outcome = self.0.play(direction);
        let dict = trace_dict(py, &outcome.trace)?;
        dict.set_item("status", status_name(outcome.status))?;
        dict.set_item("score", outcome.score)?;
        Ok(dict)
    }

    /// "playing", "won" or "stuck".
    fn status(&self) -> &'static str {
        status_name(self.0.status())
    }

    fn keep_playing(&mut self) {
        self.0.keep_playing();
    }

    /// Undo one move. Returns False when there is nothing to undo.
    fn undo(&mut self) -> PyResult<bool> {
        self.0.undo().map_err(board_error)
    }

    fn restart(&mut self) {
        self.0.restart();
    }

    #[getter]
    fn score(&self) -> u64 {
        self.0.score()
    }

    #[getter]
    fn moves_made(&self) -> u32 {
        self.0.moves_made()
    }

    #[getter]
    fn best_tile(&self) -> u32 {
        self.0.best_tile()
    }

    fn can_move(&self) -> bool {
        self.0.board().can_move()
    }

    /// Cells as a numpy array.
    fn grid<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u32>>> {
        grid_array(py, self.0.board().grid())
    }

    fn __repr__(&self) -> String {
        format!(
            "GameSession(score={}, moves={}, status={})",
            self.0.score(),
            self.0.moves_made(),
            status_name(self.0.status())
        )
    }
}

fn status_name(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "playing",
        GameStatus::Won => "won",
        GameStatus::Stuck => "stuck",
    }
}

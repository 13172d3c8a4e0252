//! Shared conversions for the Python bindings.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::board::{Grid, MoveTrace};
use crate::core::{BoardError, Direction, Position};

pub(crate) fn value_error(msg: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", msg))
}

pub(crate) fn board_error(err: BoardError) -> PyErr {
    value_error(err)
}

/// Parse "up" / "down" / "left" / "right" (or their first letter).
pub(crate) fn parse_direction(direction: &str) -> PyResult<Direction> {
    direction.parse::<Direction>().map_err(value_error)
}

fn pos(p: Position) -> (usize, usize) {
    (p.row, p.col)
}

/// Grid as a `[rows, cols]` uint32 array.
pub(crate) fn grid_array<'py>(py: Python<'py>, grid: &Grid) -> PyResult<Bound<'py, PyArray2<u32>>> {
    PyArray1::from_vec_bound(py, grid.cells().to_vec())
        .reshape([grid.rows(), grid.cols()])
        .map_err(value_error)
}

/// Trace in the flat dict shape front-ends consume.
///
/// Keys: `moved`, `merged`, `score_delta`, `moves` (list of
/// `(from, to, value, merged_away)`), `merges` (list of `(at, new_value)`),
/// `spawn` (`(at, value)` or `None`).
pub(crate) fn trace_dict<'py>(py: Python<'py>, trace: &MoveTrace) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("moved", trace.moved)?;
    dict.set_item("merged", trace.merged)?;
    dict.set_item("score_delta", trace.score_delta)?;

    let moves: Vec<_> = trace
        .moves()
        .into_iter()
        .map(|m| (pos(m.from), pos(m.to), m.value, m.merged_away))
        .collect();
    dict.set_item("moves", moves)?;

    let merges: Vec<_> = trace.merges().into_iter().map(|m| (pos(m.at), m.new_value)).collect();
    dict.set_item("merges", merges)?;

    dict.set_item("spawn", trace.spawn.map(|s| (pos(s.at), s.value)))?;
    Ok(dict)
}

//! Python bindings for the tile-merge board engine.
//!
//! # Quick Start
//!
//! ```python
//! import tile_merge as tm
//!
//! game = tm.GameSession(rows=4, cols=4, seed=42)
//! trace = game.play("left")
//! if trace["moved"]:
//!     print(trace["moves"], trace["spawn"], game.score)
//! print(game.grid())
//! ```

use pyo3::prelude::*;

mod py_board;
mod py_core;
mod py_session;

pub use py_board::*;
pub use py_session::*;

/// tile_merge: a 2048-style board engine.
///
/// This module provides:
/// - `Board` for raw move resolution with traces
/// - `GameSession` for score, win/stuck status and undo
#[pymodule]
fn tile_merge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoard>()?;
    m.add_class::<PyGameSession>()?;
    Ok(())
}

//! Game session layer.
//!
//! Wraps a `Board` with what a front-end needs to run a full game:
//! - running score and move count
//! - win detection (reported once, then `keep_playing` continues)
//! - stuck detection
//! - bounded undo history (persistent `im` vector, cheap to clone)
//! - snapshots for an external save layer

mod game;

pub use game::{GameSession, GameStatus, MoveOutcome, SessionSnapshot};

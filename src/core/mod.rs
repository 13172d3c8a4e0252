//! Core engine types: tiles, positions, directions, errors, RNG, configuration.
//!
//! These are the building blocks shared by the board engine and the session
//! layer. Nothing in here knows how tiles slide or merge.

pub mod config;
pub mod error;
pub mod position;
pub mod rng;

pub use config::BoardConfig;
pub use error::BoardError;
pub use position::{Direction, Position};
pub use rng::{GameRng, GameRngState, ScriptedSource, TileSource};

/// A cell value: 0 for empty, otherwise a power of two >= 2.
pub type Tile = u32;

/// Accumulated score (sum of merged values).
pub type Score = u64;

/// True if `value` may appear in a grid cell.
#[inline]
#[must_use]
pub const fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_tile() {
        assert!(is_valid_tile(0));
        assert!(is_valid_tile(2));
        assert!(is_valid_tile(2048));
        assert!(is_valid_tile(1 << 31));
        assert!(!is_valid_tile(1));
        assert!(!is_valid_tile(3));
        assert!(!is_valid_tile(6));
    }
}

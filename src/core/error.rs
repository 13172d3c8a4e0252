//! Error taxonomy for board and session operations.
//!
//! No-op moves and stuck boards are **not** errors: they are reported through
//! `MoveTrace::moved` and `Board::can_move`. Errors are reserved for data that
//! cannot be applied to a board at all.

use crate::core::Tile;

/// Errors raised when building, loading, or restoring a board.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Externally supplied grid data does not match the board's shape.
    #[error("dimension mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// Boards must be at least 2x2.
    #[error("invalid board dimensions {rows}x{cols} (minimum is 2x2)")]
    InvalidDimensions { rows: usize, cols: usize },

    /// A cell value that is neither empty nor a power of two >= 2.
    #[error("invalid tile {value} at ({row}, {col})")]
    InvalidTile { row: usize, col: usize, value: Tile },

    /// Configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = BoardError::DimensionMismatch {
            expected_rows: 4,
            expected_cols: 4,
            rows: 3,
            cols: 4,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 4x4, got 3x4");

        let err = BoardError::InvalidTile { row: 1, col: 2, value: 3 };
        assert_eq!(err.to_string(), "invalid tile 3 at (1, 2)");

        let err = BoardError::InvalidDimensions { rows: 1, cols: 5 };
        assert!(err.to_string().contains("1x5"));
    }
}

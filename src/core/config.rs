//! Board and session configuration.
//!
//! Games configure the engine at startup with a `BoardConfig`:
//! - board shape (`rows` x `cols`, at least 2x2)
//! - the tile that counts as a win
//! - how many tiles a fresh game starts with
//! - how many moves the session can undo
//!
//! Spawn odds are not configurable: new tiles are always 2 (90%) or 4 (10%).

use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::{is_valid_tile, Tile};

/// Smallest supported board side.
pub const MIN_SIDE: usize = 2;

/// Complete board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Reaching a tile of at least this value wins the game.
    pub win_tile: Tile,

    /// Tiles spawned when a game starts or restarts.
    pub starting_tiles: usize,

    /// Maximum number of moves kept for undo. 0 disables undo.
    pub undo_depth: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            win_tile: 2048,
            starting_tiles: 2,
            undo_depth: 16,
        }
    }
}

impl BoardConfig {
    /// Create a configuration with the given shape and default rules.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Create a square `n` x `n` configuration.
    #[must_use]
    pub fn square(n: usize) -> Self {
        Self::new(n, n)
    }

    /// Set the winning tile.
    #[must_use]
    pub fn with_win_tile(mut self, tile: Tile) -> Self {
        self.win_tile = tile;
        self
    }

    /// Set the number of starting tiles.
    #[must_use]
    pub fn with_starting_tiles(mut self, count: usize) -> Self {
        self.starting_tiles = count;
        self
    }

    /// Set the undo history depth.
    #[must_use]
    pub fn with_undo_depth(mut self, depth: usize) -> Self {
        self.undo_depth = depth;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.rows < MIN_SIDE || self.cols < MIN_SIDE {
            return Err(BoardError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.win_tile == 0 || !is_valid_tile(self.win_tile) {
            return Err(BoardError::InvalidConfig(format!(
                "win tile {} is not a power of two >= 2",
                self.win_tile
            )));
        }
        if self.starting_tiles > self.cell_count() {
            return Err(BoardError::InvalidConfig(format!(
                "{} starting tiles do not fit on a {}x{} board",
                self.starting_tiles, self.rows, self.cols
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!((config.rows, config.cols), (4, 4));
        assert_eq!(config.win_tile, 2048);
        assert_eq!(config.starting_tiles, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::new(3, 5)
            .with_win_tile(512)
            .with_starting_tiles(1)
            .with_undo_depth(0);

        assert_eq!(config.cell_count(), 15);
        assert_eq!(config.win_tile, 512);
        assert_eq!(config.starting_tiles, 1);
        assert_eq!(config.undo_depth, 0);
        assert!(config.validate().is_ok());
        assert_eq!(BoardConfig::square(6).cell_count(), 36);
    }

    #[test]
    fn test_validate_rejects_small_board() {
        assert_eq!(
            BoardConfig::new(1, 4).validate(),
            Err(BoardError::InvalidDimensions { rows: 1, cols: 4 })
        );
    }

    #[test]
    fn test_validate_rejects_bad_win_tile() {
        assert!(matches!(
            BoardConfig::default().with_win_tile(1000).validate(),
            Err(BoardError::InvalidConfig(_))
        ));
        assert!(BoardConfig::default().with_win_tile(0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_too_many_starting_tiles() {
        assert!(BoardConfig::square(2).with_starting_tiles(5).validate().is_err());
        assert!(BoardConfig::square(2).with_starting_tiles(4).validate().is_ok());
    }

    #[test]
    fn test_config_serde() {
        let config = BoardConfig::new(5, 4).with_win_tile(4096);
        let json = serde_json::to_string(&config).unwrap();
        let back: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}

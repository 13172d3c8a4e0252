//! Move traces consumed by renderers and animators.
//!
//! ## Relocations
//!
//! A move is recorded as one list of tagged `Relocation`s:
//! - `Slide`: a tile changed cell without merging
//! - `Merge`: two equal tiles combined at `to`
//!
//! The survivor of a merge is always the tile that was nearer the edge the
//! tiles slid toward. Tiles that neither moved nor merged have no entry.
//!
//! `MoveTrace::moves()` and `MoveTrace::merges()` derive the flat
//! "moves + merges" shape some front-ends expect.

use serde::{Deserialize, Serialize};

use crate::core::{Position, Score, Tile};

/// One tile-level change produced by a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relocation {
    /// A tile changed cell without merging.
    Slide { from: Position, to: Position, value: Tile },

    /// Two tiles of `value` combined into `new_value` at `to`.
    Merge {
        /// Tile that keeps its identity (nearer the destination edge).
        survivor: Position,
        /// Tile that disappears into the survivor.
        absorbed: Position,
        to: Position,
        value: Tile,
        new_value: Tile,
    },
}

impl Relocation {
    /// Destination cell.
    #[must_use]
    pub fn to(&self) -> Position {
        match *self {
            Relocation::Slide { to, .. } | Relocation::Merge { to, .. } => to,
        }
    }

    /// Value occupying the destination after the move.
    #[must_use]
    pub fn resulting_value(&self) -> Tile {
        match *self {
            Relocation::Slide { value, .. } => value,
            Relocation::Merge { new_value, .. } => new_value,
        }
    }

    #[must_use]
    pub fn is_merge(&self) -> bool {
        matches!(self, Relocation::Merge { .. })
    }
}

/// A single tile movement in the flat view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileMove {
    pub from: Position,
    pub to: Position,
    pub value: Tile,
    /// The tile vanishes into another one at `to`.
    pub merged_away: bool,
}

/// A merge event in the flat view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergeEvent {
    pub at: Position,
    pub new_value: Tile,
}

/// A tile placed after a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnTrace {
    pub at: Position,
    pub value: Tile,
}

/// Everything that happened during one move attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTrace {
    /// Some cell changed value or position.
    pub moved: bool,

    /// Sum of the merged values created by this move.
    pub score_delta: Score,

    /// At least one merge happened.
    pub merged: bool,

    /// Tile-level changes, line by line in slide order.
    pub relocations: Vec<Relocation>,

    /// Tile spawned after the move. Present iff `moved`.
    pub spawn: Option<SpawnTrace>,
}

impl MoveTrace {
    /// Trace of a move that changed nothing.
    #[must_use]
    pub fn unmoved() -> Self {
        Self::default()
    }

    /// Number of merge events.
    #[must_use]
    pub fn merge_count(&self) -> usize {
        self.relocations.iter().filter(|r| r.is_merge()).count()
    }

    /// Flat per-tile movements.
    ///
    /// Merges contribute the absorbed tile (`merged_away`) and, when it
    /// changed cell, the survivor.
    #[must_use]
    pub fn moves(&self) -> Vec<TileMove> {
        let mut out = Vec::with_capacity(self.relocations.len());
        for reloc in &self.relocations {
            match *reloc {
                Relocation::Slide { from, to, value } => out.push(TileMove {
                    from,
                    to,
                    value,
                    merged_away: false,
                }),
                Relocation::Merge {
                    survivor,
                    absorbed,
                    to,
                    value,
                    ..
                } => {
                    if survivor != to {
                        out.push(TileMove {
                            from: survivor,
                            to,
                            value,
                            merged_away: false,
                        });
                    }
                    out.push(TileMove {
                        from: absorbed,
                        to,
                        value,
                        merged_away: true,
                    });
                }
            }
        }
        out
    }

    /// Flat merge events.
    #[must_use]
    pub fn merges(&self) -> Vec<MergeEvent> {
        self.relocations
            .iter()
            .filter_map(|r| match *r {
                Relocation::Merge { to, new_value, .. } => Some(MergeEvent { at: to, new_value }),
                Relocation::Slide { .. } => None,
            })
            .collect()
    }
}

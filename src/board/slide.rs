//! Slide-and-merge for a single line.
//!
//! The routine knows nothing about directions. It receives a line's cells in
//! slide order (slot 0 nearest the destination edge) together with their
//! grid coordinates, and writes results back to those same coordinates.

use smallvec::SmallVec;

use super::trace::Relocation;
use crate::core::{Position, Score, Tile};

/// Line buffers stay on the stack for boards up to 8 wide.
pub type LineBuf<T> = SmallVec<[T; 8]>;

/// Result of sliding one line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlideOutcome {
    /// New values, slot-aligned with the input and zero padded.
    pub values: LineBuf<Tile>,
    /// Tile-level changes in slot order.
    pub relocations: LineBuf<Relocation>,
    /// Sum of the merged values created in this line.
    pub score: Score,
    /// Any tile changed cell or merged.
    pub moved: bool,
}

/// Two tiles combine only if equal, non-empty, and the result fits a `Tile`.
#[inline]
#[must_use]
pub fn can_merge(a: Tile, b: Tile) -> bool {
    a != 0 && a == b && a.checked_mul(2).is_some()
}

/// Slide and merge one line.
///
/// `cells[j]` is the value and coordinate of slot `j`. Zeros are dropped,
/// then adjacent equal pairs merge front to back. A freshly merged tile is
/// never compared again, so `[2, 2, 2]` becomes `[4, 2, 0]`.
///
/// ```
/// use tile_merge::board::slide_line;
/// use tile_merge::core::Position;
///
/// let cells: Vec<_> = [2, 0, 2, 4]
///     .into_iter()
///     .enumerate()
///     .map(|(c, v)| (v, Position::new(0, c)))
///     .collect();
/// let out = slide_line(&cells);
/// assert_eq!(out.values.as_slice(), &[4, 4, 0, 0]);
/// assert_eq!(out.score, 4);
/// ```
#[must_use]
pub fn slide_line(cells: &[(Tile, Position)]) -> SlideOutcome {
    let dense: LineBuf<(Tile, Position)> = cells.iter().copied().filter(|&(v, _)| v != 0).collect();

    let mut out = SlideOutcome {
        values: SmallVec::from_elem(0, cells.len()),
        ..SlideOutcome::default()
    };

    let mut read = 0;
    let mut slot = 0;
    while read < dense.len() {
        let (value, from) = dense[read];
        let to = cells[slot].1;

        match dense.get(read + 1) {
            Some(&(next, absorbed)) if can_merge(value, next) => {
                let new_value = value * 2;
                out.relocations.push(Relocation::Merge {
                    survivor: from,
                    absorbed,
                    to,
                    value,
                    new_value,
                });
                out.values[slot] = new_value;
                out.score += Score::from(new_value);
                out.moved = true;
                read += 2;
            }
            _ => {
                if from != to {
                    out.relocations.push(Relocation::Slide { from, to, value });
                    out.moved = true;
                }
                out.values[slot] = value;
                read += 1;
            }
        }
        slot += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[Tile]) -> Vec<(Tile, Position)> {
        values
            .iter()
            .enumerate()
            .map(|(c, &v)| (v, Position::new(0, c)))
            .collect()
    }

    fn p(col: usize) -> Position {
        Position::new(0, col)
    }

    #[test]
    fn test_gap_and_merge() {
        let out = slide_line(&row(&[2, 0, 2, 4]));
        assert_eq!(out.values.as_slice(), &[4, 4, 0, 0]);
        assert_eq!(out.score, 4);
        assert!(out.moved);
        assert_eq!(
            out.relocations.as_slice(),
            &[
                Relocation::Merge { survivor: p(0), absorbed: p(2), to: p(0), value: 2, new_value: 4 },
                Relocation::Slide { from: p(3), to: p(1), value: 4 },
            ]
        );
    }

    #[test]
    fn test_no_chain_merge() {
        let out = slide_line(&row(&[2, 2, 2]));
        assert_eq!(out.values.as_slice(), &[4, 2, 0]);
        assert_eq!(out.score, 4);
        assert_eq!(out.relocations.iter().filter(|r| r.is_merge()).count(), 1);
    }

    #[test]
    fn test_merged_tile_not_recompared() {
        // 4 produced by the merge must not absorb the following 4.
        let out = slide_line(&row(&[2, 2, 4, 0]));
        assert_eq!(out.values.as_slice(), &[4, 4, 0, 0]);
        assert_eq!(out.score, 4);
    }

    #[test]
    fn test_two_pairs() {
        let out = slide_line(&row(&[2, 2, 2, 2]));
        assert_eq!(out.values.as_slice(), &[4, 4, 0, 0]);
        assert_eq!(out.score, 8);
        assert_eq!(
            out.relocations[1],
            Relocation::Merge { survivor: p(2), absorbed: p(3), to: p(1), value: 2, new_value: 4 }
        );
    }

    #[test]
    fn test_compact_line_is_noop() {
        let out = slide_line(&row(&[2, 4, 8, 0]));
        assert_eq!(out.values.as_slice(), &[2, 4, 8, 0]);
        assert!(!out.moved);
        assert!(out.relocations.is_empty());
        assert_eq!(out.score, 0);
    }

    #[test]
    fn test_empty_line_is_noop() {
        let out = slide_line(&row(&[0, 0, 0, 0]));
        assert_eq!(out.values.as_slice(), &[0, 0, 0, 0]);
        assert!(!out.moved);
    }

    #[test]
    fn test_slide_without_merge_moves() {
        let out = slide_line(&row(&[0, 0, 0, 8]));
        assert_eq!(out.values.as_slice(), &[8, 0, 0, 0]);
        assert!(out.moved);
        assert_eq!(out.score, 0);
        assert_eq!(out.relocations.as_slice(), &[Relocation::Slide { from: p(3), to: p(0), value: 8 }]);
    }

    #[test]
    fn test_reversed_coordinates() {
        // Slot order for a rightward move: slot 0 is the rightmost column.
        let cells: Vec<_> = [4, 0, 4]
            .into_iter()
            .enumerate()
            .map(|(j, v)| (v, Position::new(0, 2 - j)))
            .collect();
        let out = slide_line(&cells);
        assert_eq!(out.values.as_slice(), &[8, 0, 0]);
        assert_eq!(
            out.relocations.as_slice(),
            &[Relocation::Merge { survivor: p(2), absorbed: p(0), to: p(2), value: 4, new_value: 8 }]
        );
    }

    #[test]
    fn test_can_merge() {
        assert!(can_merge(2, 2));
        assert!(!can_merge(0, 0));
        assert!(!can_merge(2, 4));
        assert!(!can_merge(1 << 31, 1 << 31));
    }
}

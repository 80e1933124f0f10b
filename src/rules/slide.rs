//! Single-row slide and merge.
//!
//! A row is always resolved towards index 0: zeros are dropped, equal
//! neighbours merge left to right, and the row is padded back with zeros.
//! A tile produced by a merge never merges again in the same pass, so
//! `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`. Two
//! [`MAX_TILE`](crate::core::MAX_TILE)s stay apart.

use smallvec::SmallVec;

use crate::core::grid::merged_value;
use crate::core::{Score, Tile};

/// Outcome of sliding one row left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowSlide {
    /// Row contents after the slide, same length as the input.
    pub row: Vec<Tile>,
    /// Content differs from the input.
    pub moved: bool,
    /// Indices (in the output row) holding a freshly merged tile.
    pub merged: SmallVec<[usize; 4]>,
    /// Sum of merged tile values.
    pub gained: Score,
    /// Some merge reached `big_threshold`.
    pub big_merge: bool,
}

/// Slide `row` towards index 0, merging equal neighbours once.
#[must_use]
pub fn slide_row(row: &[Tile], big_threshold: Tile) -> RowSlide {
    let mut tiles: Vec<Tile> = row.iter().copied().filter(|&v| v != 0).collect();
    let mut merged = SmallVec::new();
    let mut gained: Score = 0;
    let mut big_merge = false;

    let mut i = 0;
    while i + 1 < tiles.len() {
        let value = match merged_value(tiles[i]) {
            Some(value) if tiles[i] == tiles[i + 1] => value,
            _ => {
                i += 1;
                continue;
            }
        };
        tiles[i] = value;
        tiles.remove(i + 1);
        gained = gained.saturating_add(value);
        big_merge |= value >= big_threshold;
        merged.push(i);
        i += 1;
    }

    tiles.resize(row.len(), 0);
    let moved = tiles.as_slice() != row;

    RowSlide {
        row: tiles,
        moved,
        merged,
        gained,
        big_merge,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_TILE;

    fn slide(row: &[Tile]) -> RowSlide {
        slide_row(row, 128)
    }

    /// Test that only the first equal pair merges.
    #[test]
    fn test_only_first_pair_merges() {
        let out = slide(&[2, 2, 4, 0]);
        assert_eq!(out.row, vec![4, 4, 0, 0]);
        assert!(out.moved);
        assert_eq!(out.merged.as_slice(), &[0]);
        assert_eq!(out.gained, 4);
    }

    /// Test that a merged tile does not merge again in the same pass.
    #[test]
    fn test_no_double_merge() {
        let out = slide(&[2, 2, 2, 2]);
        assert_eq!(out.row, vec![4, 4, 0, 0]);
        assert_eq!(out.merged.as_slice(), &[0, 1]);
        assert_eq!(out.gained, 8);
    }

    /// Test that three equal tiles merge the leftmost pair.
    #[test]
    fn test_left_bias_with_three() {
        let out = slide(&[0, 4, 4, 4]);
        assert_eq!(out.row, vec![8, 4, 0, 0]);
        assert_eq!(out.merged.as_slice(), &[0]);
    }

    /// Test that equal tiles separated by empty cells merge.
    #[test]
    fn test_merge_across_gaps() {
        let out = slide(&[2, 0, 0, 2]);
        assert_eq!(out.row, vec![4, 0, 0, 0]);
        assert_eq!(out.gained, 4);
    }

    /// Test that tiles slide left without merging.
    #[test]
    fn test_slide_without_merge() {
        let out = slide(&[0, 2, 0, 4]);
        assert_eq!(out.row, vec![2, 4, 0, 0]);
        assert!(out.moved);
        assert!(out.merged.is_empty());
        assert_eq!(out.gained, 0);
    }

    /// Test that packed rows report no movement.
    #[test]
    fn test_unchanged_row() {
        for row in [[2, 4, 8, 16], [2, 4, 0, 0], [0, 0, 0, 0]] {
            let out = slide(&row);
            assert_eq!(out.row, row.to_vec());
            assert!(!out.moved);
        }
    }

    /// Test that the big merge flag follows the threshold.
    #[test]
    fn test_big_merge_threshold() {
        assert!(!slide(&[32, 32, 0, 0]).big_merge);

        let out = slide(&[64, 64, 0, 0]);
        assert!(out.big_merge);
        assert_eq!(out.gained, 128);

        assert!(!slide_row(&[64, 64], 256).big_merge);
    }

    /// Test that two MAX_TILE tiles slide but never merge.
    #[test]
    fn test_max_tiles_do_not_merge() {
        let out = slide(&[MAX_TILE, MAX_TILE, 0, 0]);
        assert_eq!(out.row, vec![MAX_TILE, MAX_TILE, 0, 0]);
        assert!(!out.moved);
        assert!(out.merged.is_empty());
        assert_eq!(out.gained, 0);

        let out = slide(&[0, MAX_TILE, MAX_TILE, 2]);
        assert_eq!(out.row, vec![MAX_TILE, MAX_TILE, 2, 0]);
        assert!(out.moved);
        assert!(out.merged.is_empty());
    }

    /// Test that merging into MAX_TILE saturates the gained score.
    #[test]
    fn test_merge_into_max_tile() {
        let half = MAX_TILE / 2;
        let out = slide(&[half, half, half, half]);
        assert_eq!(out.row, vec![MAX_TILE, MAX_TILE, 0, 0]);
        assert_eq!(out.merged.as_slice(), &[0, 1]);
        assert_eq!(out.gained, Score::MAX);
    }

    /// Test that rows of other lengths slide the same way.
    #[test]
    fn test_other_lengths() {
        assert_eq!(slide(&[2, 2, 2, 2, 2]).row, vec![4, 4, 2, 0, 0]);
        assert_eq!(slide(&[0, 2]).row, vec![2, 0]);
    }
}

//! Square tile grid.
//!
//! Cells are stored row-major. `0` is an empty cell; every other value is a
//! power of two (2, 4, 8, ...). Caller-supplied grids are validated on
//! construction so the invariant holds for every `Grid` in circulation.
//!
//! ## Rotation
//!
//! The only geometric primitive is a clockwise quarter turn:
//! `new[c][size - 1 - r] = old[r][c]`. Every direction is expressed as some
//! number of these turns plus a left slide.
//!
//! ```
//! use rust_2048::core::Grid;
//!
//! let grid = Grid::from_rows(vec![vec![2, 0], vec![4, 8]]).unwrap();
//! let turned = grid.rotate_cw();
//! assert_eq!(turned.to_rows(), vec![vec![4, 2], vec![8, 0]]);
//! assert_eq!(turned.rotated(3), grid);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GridError;

/// Tile value. `0` means empty.
pub type Tile = u64;

/// Smallest supported grid side.
pub const MIN_SIZE: usize = 2;

/// Largest tile a [`Tile`] can hold. Two of these never merge.
pub const MAX_TILE: Tile = 1 << (Tile::BITS - 1);

/// Board coordinate, row first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Where this cell lands after one clockwise quarter turn of a
    /// `size`-sided grid.
    #[must_use]
    pub const fn rotate_cw(self, size: usize) -> Self {
        Self {
            row: self.col,
            col: size - 1 - self.row,
        }
    }

    /// Apply `turns` clockwise quarter turns.
    #[must_use]
    pub fn rotated(self, size: usize, turns: usize) -> Self {
        (0..turns % 4).fold(self, |pos, _| pos.rotate_cw(size))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// True for `0` and powers of two from 2 up to [`MAX_TILE`].
#[inline]
#[must_use]
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

/// Value two equal `value` tiles merge into, or `None` when the result
/// would not fit below [`MAX_TILE`].
#[inline]
#[must_use]
pub fn merged_value(value: Tile) -> Option<Tile> {
    value.checked_mul(2).filter(|&v| v <= MAX_TILE)
}

/// Square grid of tiles.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Grid {
    size: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// All-empty grid.
    ///
    /// # Panics
    ///
    /// If `size` is below [`MIN_SIZE`]. The engine validates sizes before
    /// getting here.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(size >= MIN_SIZE, "Grid must be at least 2x2");
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a grid from rows, checking shape and tile values.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let size = rows.len();
        if size < MIN_SIZE {
            return Err(GridError::TooSmall(size));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
            }
            cells.extend(values);
        }

        Ok(Self { size, cells })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Tile {
        self.cells[pos.row * self.size + pos.col]
    }

    pub(crate) fn set(&mut self, pos: Position, value: Tile) {
        debug_assert!(is_valid_tile(value));
        self.cells[pos.row * self.size + pos.col] = value;
    }

    /// Borrow one row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Tile] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [Tile] {
        &mut self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.size)
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// One clockwise quarter turn.
    #[must_use]
    pub fn rotate_cw(&self) -> Self {
        let n = self.size;
        let mut out = vec![0; n * n];
        for r in 0..n {
            for c in 0..n {
                out[c * n + (n - 1 - r)] = self.cells[r * n + c];
            }
        }
        Self { size: n, cells: out }
    }

    /// Apply `turns` clockwise quarter turns.
    #[must_use]
    pub fn rotated(&self, turns: usize) -> Self {
        let mut grid = self.clone();
        for _ in 0..turns % 4 {
            grid = grid.rotate_cw();
        }
        grid
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| Position::new(i / self.size, i % self.size))
            .collect()
    }

    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn count_tiles(&self) -> usize {
        self.cells.len() - self.count_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// True if any cell holds exactly `value`.
    #[must_use]
    pub fn contains(&self, value: Tile) -> bool {
        self.cells.contains(&value)
    }

    /// Largest tile on the board (0 when empty).
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// True if two horizontally or vertically adjacent cells are equal and
    /// could merge. A pair of [`MAX_TILE`]s is skipped.
    ///
    /// Empty cells count too, so only meaningful on a full grid.
    #[must_use]
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        for r in 0..n {
            for c in 0..n {
                let v = self.cells[r * n + c];
                if merged_value(v).is_none() {
                    continue;
                }
                if r + 1 < n && self.cells[(r + 1) * n + c] == v {
                    return true;
                }
                if c + 1 < n && self.cells[r * n + c + 1] == v {
                    return true;
                }
            }
        }
        false
    }

    /// True if some move could still change the grid.
    #[must_use]
    pub fn has_moves(&self) -> bool {
        !self.is_full() || self.has_adjacent_pair()
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Tile>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(2).to_string().len();
        let rule = "-".repeat((width + 1) * self.size - 1);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f, "{rule}")?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{v:>width$}")
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<Tile>>) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    /// Test that an empty grid has no tiles.
    #[test]
    fn test_empty_grid() {
        let g = Grid::empty(4);
        assert_eq!(g.size(), 4);
        assert_eq!(g.count_empty(), 16);
        assert_eq!(g.count_tiles(), 0);
        assert_eq!(g.max_tile(), 0);
        assert!(!g.is_full());
    }

    /// Test that grids below 2x2 are refused.
    #[test]
    #[should_panic(expected = "Grid must be at least 2x2")]
    fn test_empty_grid_too_small() {
        let _ = Grid::empty(1);
    }

    /// Test that from_rows rejects bad shapes and tile values.
    #[test]
    fn test_from_rows_validation() {
        assert_eq!(Grid::from_rows(vec![vec![2]]), Err(GridError::TooSmall(1)));
        assert_eq!(
            Grid::from_rows(vec![vec![2, 0], vec![4]]),
            Err(GridError::NotSquare { row: 1, len: 1, size: 2 })
        );
        assert_eq!(
            Grid::from_rows(vec![vec![2, 0], vec![0, 6]]),
            Err(GridError::InvalidTile { row: 1, col: 1, value: 6 })
        );
        assert_eq!(
            Grid::from_rows(vec![vec![1, 0], vec![0, 0]]),
            Err(GridError::InvalidTile { row: 0, col: 0, value: 1 })
        );
    }

    /// Test that a clockwise turn follows new[c][n-1-r] = old[r][c].
    #[test]
    fn test_rotate_cw_formula() {
        let g = grid(vec![
            vec![2, 4, 8],
            vec![16, 32, 64],
            vec![128, 256, 512],
        ]);
        let r = g.rotate_cw();
        assert_eq!(
            r.to_rows(),
            vec![vec![128, 16, 2], vec![256, 32, 4], vec![512, 64, 8]]
        );
        for row in 0..3 {
            for col in 0..3 {
                let p = Position::new(row, col);
                assert_eq!(r.get(p.rotate_cw(3)), g.get(p));
            }
        }
    }

    /// Test that four quarter turns give back the grid.
    #[test]
    fn test_four_rotations_identity() {
        let g = grid(vec![
            vec![2, 0, 0, 4],
            vec![0, 8, 0, 0],
            vec![0, 0, 16, 0],
            vec![32, 0, 0, 2048],
        ]);
        assert_eq!(g.rotated(4), g);
        assert_eq!(g.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), g);
        assert_ne!(g.rotated(1), g);
    }

    /// Test that positions rotate with the grid.
    #[test]
    fn test_position_rotation_roundtrip() {
        let p = Position::new(1, 3);
        assert_eq!(p.rotate_cw(4), Position::new(3, 2));
        assert_eq!(p.rotated(4, 4), p);
        assert_eq!(p.rotated(4, 1).rotated(4, 3), p);
    }

    /// Test that empty cells come back in row-major order.
    #[test]
    fn test_empty_cells_row_major() {
        let g = grid(vec![vec![2, 0], vec![0, 4]]);
        assert_eq!(
            g.empty_cells(),
            vec![Position::new(0, 1), Position::new(1, 0)]
        );
    }

    /// Test adjacency and move detection on small grids.
    #[test]
    fn test_adjacency() {
        let stuck = grid(vec![vec![2, 4], vec![4, 2]]);
        assert!(stuck.is_full());
        assert!(!stuck.has_adjacent_pair());
        assert!(!stuck.has_moves());

        let vertical = grid(vec![vec![2, 4], vec![2, 8]]);
        assert!(vertical.has_adjacent_pair());

        let horizontal = grid(vec![vec![2, 4], vec![8, 8]]);
        assert!(horizontal.has_moves());

        let gap = grid(vec![vec![2, 4], vec![8, 0]]);
        assert!(gap.has_moves());
    }

    /// Test that an adjacent MAX_TILE pair does not count as a move.
    #[test]
    fn test_max_tile_pair_is_not_a_move() {
        let capped = grid(vec![vec![MAX_TILE, MAX_TILE], vec![2, 4]]);
        assert!(capped.is_full());
        assert!(!capped.has_adjacent_pair());
        assert!(!capped.has_moves());

        let below = grid(vec![vec![MAX_TILE / 2, MAX_TILE / 2], vec![2, 4]]);
        assert!(below.has_moves());

        assert!(is_valid_tile(MAX_TILE));
        assert_eq!(merged_value(MAX_TILE / 2), Some(MAX_TILE));
        assert_eq!(merged_value(MAX_TILE), None);
    }

    /// Test that grids serialize as nested rows and validate on load.
    #[test]
    fn test_serde_as_rows() {
        let g = grid(vec![vec![2, 0], vec![0, 4]]);
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[2,0],[0,4]]");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);

        assert!(serde_json::from_str::<Grid>("[[3,0],[0,4]]").is_err());
    }

    /// Test the text rendering of a grid.
    #[test]
    fn test_display() {
        let g = grid(vec![vec![2, 0], vec![16, 4]]);
        assert_eq!(format!("{g}"), " 2| .\n-----\n16| 4\n");
    }
}

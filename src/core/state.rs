//! Session state and the undo snapshot.
//!
//! ## SessionState
//!
//! Everything one game needs besides its RNG and config:
//! - Grid and cumulative score
//! - Win / keep-playing / game-over flags
//!
//! ## Snapshot
//!
//! Grid and score captured right before a successful move. The engine holds
//! at most one.

use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// Points accumulated from merges.
pub type Score = u64;

/// Grid and score captured for undo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub score: Score,
}

/// State of a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current grid.
    pub grid: Grid,

    /// Sum of every merged tile's value.
    pub score: Score,

    /// Set once the win tile first appears.
    pub won: bool,

    /// Player chose to continue after winning.
    pub keep_playing: bool,

    /// No move can change the grid.
    pub game_over: bool,
}

impl SessionState {
    /// Fresh state around `grid` with zero score and all flags cleared.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            score: 0,
            won: false,
            keep_playing: false,
            game_over: false,
        }
    }

    /// Capture grid and score.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            score: self.score,
        }
    }

    /// Put back a captured grid and score. Flags are left alone.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.grid = snapshot.grid;
        self.score = snapshot.score;
    }

    /// True while the win check is still armed.
    #[must_use]
    pub fn can_win(&self) -> bool {
        !self.won && !self.keep_playing
    }

    /// True when moves should be ignored.
    ///
    /// A finished game stays finished unless the player is in keep-playing
    /// mode, in which case the flag alone does not block input.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.game_over && !self.keep_playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that a new state starts at zero with flags clear.
    #[test]
    fn test_new_state() {
        let state = SessionState::new(Grid::empty(4));
        assert_eq!(state.score, 0);
        assert!(!state.won);
        assert!(!state.keep_playing);
        assert!(!state.game_over);
        assert!(state.can_win());
        assert!(!state.is_finished());
    }

    /// Test that restoring a snapshot brings back grid and score.
    #[test]
    fn test_snapshot_restore() {
        let mut state = SessionState::new(Grid::from_rows(vec![vec![2, 0], vec![0, 2]]).unwrap());
        state.score = 12;
        let snap = state.snapshot();

        state.grid = Grid::from_rows(vec![vec![4, 0], vec![0, 0]]).unwrap();
        state.score = 16;
        state.won = true;

        state.restore(snap.clone());
        assert_eq!(state.grid, snap.grid);
        assert_eq!(state.score, 12);
        assert!(state.won);
    }

    /// Test that can_win and is_finished follow the flags.
    #[test]
    fn test_flags() {
        let mut state = SessionState::new(Grid::empty(2));
        state.won = true;
        assert!(!state.can_win());

        state.won = false;
        state.keep_playing = true;
        assert!(!state.can_win());

        state.game_over = true;
        assert!(!state.is_finished());
        state.keep_playing = false;
        assert!(state.is_finished());
    }
}

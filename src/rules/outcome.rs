//! Move results and the feedback cues derived from them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Direction, Position, Score};

/// Presentation feedback for a move.
///
/// The engine never plays sounds or animations; a front-end maps each cue to
/// whatever effect it likes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackCue {
    /// Tiles slid without merging.
    Move,
    /// At least one merge.
    Merge,
    /// At least one merge reached the big-merge threshold.
    BigMerge,
    /// This move produced the win tile.
    Win,
    /// No further move is possible.
    GameOver,
}

/// Everything one `apply_move` call did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Direction that was applied.
    pub direction: Direction,

    /// The grid changed (and a tile was spawned if room allowed).
    pub moved: bool,

    /// Board coordinates of every merged tile.
    pub merged: SmallVec<[Position; 8]>,

    /// Some merge reached the big-merge threshold.
    pub big_merge: bool,

    /// Where the new tile landed.
    pub new_tile: Option<Position>,

    /// Points gained by this move.
    pub gained: Score,

    /// Cumulative score after the move.
    pub score: Score,

    /// This move triggered the win.
    pub won: bool,

    /// The game is over after this move.
    pub game_over: bool,
}

impl MoveResult {
    /// Result for a move that changed nothing.
    #[must_use]
    pub fn unmoved(direction: Direction, score: Score, game_over: bool) -> Self {
        Self {
            direction,
            moved: false,
            merged: SmallVec::new(),
            big_merge: false,
            new_tile: None,
            gained: 0,
            score,
            won: false,
            game_over,
        }
    }

    /// Cues to fire, in order.
    ///
    /// ```
    /// use rust_2048::core::Direction;
    /// use rust_2048::rules::MoveResult;
    ///
    /// let noop = MoveResult::unmoved(Direction::Left, 0, false);
    /// assert!(noop.cues().is_empty());
    /// ```
    #[must_use]
    pub fn cues(&self) -> SmallVec<[FeedbackCue; 3]> {
        let mut cues = SmallVec::new();
        if !self.moved {
            return cues;
        }

        cues.push(if self.big_merge {
            FeedbackCue::BigMerge
        } else if !self.merged.is_empty() {
            FeedbackCue::Merge
        } else {
            FeedbackCue::Move
        });
        if self.won {
            cues.push(FeedbackCue::Win);
        }
        if self.game_over {
            cues.push(FeedbackCue::GameOver);
        }
        cues
    }
}

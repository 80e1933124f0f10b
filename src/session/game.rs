//! Game session: a `GridEngine` plus best-score bookkeeping and input gating.
//!
//! This is the imperative shell around the engine. It owns the injected
//! `ScoreStore`, keeps the best score in step with the current score, and
//! drops input once the game is over (unless the player kept playing).
//! Store failures never interrupt play; they are logged and skipped.

use tracing::{info, warn};

use super::input::{direction_for_key, direction_for_swipe};
use super::store::ScoreStore;
use crate::core::{Direction, Grid, Score, Snapshot};
use crate::error::ConfigError;
use crate::rules::{GridEngine, MoveResult};

/// Store key for the 2048 best score.
pub const BEST_SCORE_KEY: &str = "2048_best";

/// One player's game with a persistent best score.
pub struct GameSession<S: ScoreStore> {
    engine: GridEngine,
    store: S,
    best_score: Score,
}

impl<S: ScoreStore> GameSession<S> {
    /// Wrap `engine`, reading the best score from `store`.
    pub fn new(engine: GridEngine, store: S) -> Self {
        let best_score = match store.load(BEST_SCORE_KEY) {
            Ok(value) => value.unwrap_or(0),
            Err(e) => {
                warn!("Failed to read best score: {}. Starting from 0.", e);
                0
            }
        };
        let mut session = Self {
            engine,
            store,
            best_score,
        };
        session.record_score();
        session
    }

    #[must_use]
    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.engine.score()
    }

    #[must_use]
    pub fn best_score(&self) -> Score {
        self.best_score
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Input is being ignored because the game ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.engine.state().is_finished()
    }

    /// Apply a move unless the game is finished.
    pub fn handle_move(&mut self, direction: Direction) -> Option<MoveResult> {
        if self.is_finished() {
            return None;
        }
        let result = self.engine.apply_move(direction);
        if result.moved {
            self.record_score();
        }
        Some(result)
    }

    /// Apply the move bound to `key`, if any.
    pub fn handle_key(&mut self, key: &str) -> Option<MoveResult> {
        direction_for_key(key).and_then(|dir| self.handle_move(dir))
    }

    /// Apply the move for a swipe, if it was long enough.
    pub fn handle_swipe(&mut self, dx: f32, dy: f32) -> Option<MoveResult> {
        direction_for_swipe(dx, dy).and_then(|dir| self.handle_move(dir))
    }

    /// Undo the last successful move.
    pub fn undo(&mut self) -> Option<Snapshot> {
        self.engine.undo()
    }

    /// Start over at the current size.
    pub fn restart(&mut self) -> &Grid {
        self.engine.restart()
    }

    /// Start over on a `size`-sided grid.
    pub fn new_game(&mut self, size: usize) -> Result<&Grid, ConfigError> {
        self.engine.new_game(size)
    }

    /// Keep going after a win.
    pub fn keep_playing(&mut self) {
        self.engine.keep_playing();
    }

    fn record_score(&mut self) {
        let score = self.engine.score();
        if score <= self.best_score {
            return;
        }
        self.best_score = score;
        info!(best = score, "new best score");
        if let Err(e) = self.store.save(BEST_SCORE_KEY, score) {
            warn!("Failed to save best score: {}", e);
        }
    }
}

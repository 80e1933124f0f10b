//! The grid engine: move resolution, spawning, win/loss and undo.
//!
//! ## Move resolution
//!
//! 1. Capture grid and score for undo.
//! 2. Rotate the grid clockwise so the move becomes a left slide
//!    (left 0, down 1, right 2, up 3 quarter turns).
//! 3. Slide and merge each row independently.
//! 4. Rotate back and translate merge positions into board coordinates.
//! 5. If nothing changed, drop the undo point and stop.
//! 6. Otherwise spawn one tile, then evaluate win and game over.
//!
//! The engine owns no I/O. Callers render the returned [`MoveResult`].

use smallvec::SmallVec;
use tracing::{debug, info};

use super::outcome::MoveResult;
use super::slide::slide_row;
use crate::core::{
    Direction, EngineConfig, GameRng, GameRngState, Grid, Position, Score, SessionState, Snapshot,
};
use crate::error::ConfigError;

/// A single 2048 game.
///
/// ```
/// use rust_2048::core::{Direction, EngineConfig, GameRng};
/// use rust_2048::rules::GridEngine;
///
/// let mut engine = GridEngine::new(EngineConfig::default(), GameRng::new(7)).unwrap();
/// assert_eq!(engine.grid().count_tiles(), 2);
///
/// let result = engine.apply_move(Direction::Left);
/// if result.moved {
///     assert!(engine.can_undo());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct GridEngine {
    config: EngineConfig,
    state: SessionState,
    previous: Option<Snapshot>,
    rng: GameRng,
}

impl GridEngine {
    /// Validate `config` and start a new game.
    pub fn new(config: EngineConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config, rng))
    }

    /// Classic 4x4 game from a seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::start(EngineConfig::default(), GameRng::new(seed))
    }

    /// Resume from an existing grid with zero score and no undo point.
    ///
    /// The grid's size overrides `config.size`. The win check stays armed,
    /// so a grid already holding the win tile wins on its first real move.
    pub fn from_grid(config: EngineConfig, grid: Grid, rng: GameRng) -> Result<Self, ConfigError> {
        let config = config.with_size(grid.size());
        config.validate()?;

        let mut state = SessionState::new(grid);
        state.game_over = !state.grid.has_moves();
        Ok(Self {
            config,
            state,
            previous: None,
            rng,
        })
    }

    fn start(config: EngineConfig, rng: GameRng) -> Self {
        let mut engine = Self {
            state: SessionState::new(Grid::empty(config.size)),
            config,
            previous: None,
            rng,
        };
        engine.reset();
        engine
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.state.score
    }

    /// The win tile has been reached this session.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state.won
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    /// An undo point is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.previous.is_some()
    }

    /// RNG checkpoint, e.g. to replay the next spawns.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Game lifecycle ===

    /// Start over on a `size`-sided grid.
    pub fn new_game(&mut self, size: usize) -> Result<&Grid, ConfigError> {
        let config = self.config.clone().with_size(size);
        config.validate()?;
        self.config = config;
        self.reset();
        Ok(&self.state.grid)
    }

    /// Start over at the current size.
    pub fn restart(&mut self) -> &Grid {
        self.reset();
        &self.state.grid
    }

    fn reset(&mut self) {
        self.state = SessionState::new(Grid::empty(self.config.size));
        self.previous = None;
        for _ in 0..self.config.starting_tiles {
            self.spawn_tile();
        }
        self.state.game_over = !self.state.grid.has_moves();
        debug!(size = self.config.size, grid = ?self.state.grid, "new game");
    }

    /// Continue after winning. Further win triggers are suppressed.
    pub fn keep_playing(&mut self) {
        self.state.keep_playing = true;
    }

    // === Moves ===

    /// Resolve one move.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        let snapshot = self.state.snapshot();
        let size = self.state.grid.size();
        let back = direction.inverse_turns();

        let mut work = self.state.grid.rotated(direction.quarter_turns());
        let mut moved = false;
        let mut merged: SmallVec<[Position; 8]> = SmallVec::new();
        let mut big_merge = false;
        let mut gained: Score = 0;

        for r in 0..size {
            let slide = slide_row(work.row(r), self.config.big_merge_threshold);
            if slide.moved {
                moved = true;
                work.row_mut(r).copy_from_slice(&slide.row);
            }
            big_merge |= slide.big_merge;
            gained = gained.saturating_add(slide.gained);
            merged.extend(
                slide
                    .merged
                    .iter()
                    .map(|&c| Position::new(r, c).rotated(size, back)),
            );
        }

        if !moved {
            self.previous = None;
            debug!(%direction, "move changed nothing");
            return MoveResult::unmoved(direction, self.state.score, self.state.game_over);
        }

        self.state.grid = work.rotated(back);
        self.state.score = self.state.score.saturating_add(gained);
        self.previous = Some(snapshot);

        let new_tile = self.spawn_tile();

        let won = self.state.can_win() && self.state.grid.contains(self.config.win_value);
        if won {
            self.state.won = true;
            info!(score = self.state.score, "reached {}", self.config.win_value);
        }

        let game_over = !self.state.grid.has_moves();
        self.state.game_over = game_over;
        if game_over {
            info!(
                score = self.state.score,
                max_tile = self.state.grid.max_tile(),
                "game over"
            );
        }

        debug!(
            %direction,
            gained,
            score = self.state.score,
            merges = merged.len(),
            "move applied"
        );

        MoveResult {
            direction,
            moved,
            merged,
            big_merge,
            new_tile,
            gained,
            score: self.state.score,
            won,
            game_over,
        }
    }

    /// Restore the grid and score from before the last successful move.
    ///
    /// Returns the restored snapshot, or `None` when there is nothing to
    /// undo. Undo never creates a new undo point. The game-over flag is
    /// cleared since the restored position had a legal move.
    pub fn undo(&mut self) -> Option<Snapshot> {
        let snapshot = self.previous.take()?;
        self.state.restore(snapshot.clone());
        self.state.game_over = false;
        debug!(score = self.state.score, "undo");
        Some(snapshot)
    }

    /// Place a 2 or 4 in a uniformly random empty cell.
    fn spawn_tile(&mut self) -> Option<Position> {
        let empty = self.state.grid.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let pos = empty[self.rng.gen_index(empty.len())];
        let value = if self.rng.gen_bool(self.config.four_probability) {
            4
        } else {
            2
        };
        self.state.grid.set(pos, value);
        Some(pos)
    }
}

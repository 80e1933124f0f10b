//! # rust-2048
//!
//! A deterministic 2048 grid-merge engine.
//!
//! ## Design Principles
//!
//! 1. **Functional core**: `GridEngine` is a pure state machine over a square
//!    grid. It renders nothing, plays nothing, stores nothing.
//!
//! 2. **One primitive**: every direction is a clockwise rotation plus a left
//!    slide, so merge semantics are identical in all four directions.
//!
//! 3. **Seedable**: spawns come from a ChaCha8 RNG, so any game can be
//!    replayed from its seed.
//!
//! ## Modules
//!
//! - `core`: grid, directions, RNG, configuration, session state
//! - `rules`: row slide, `GridEngine`, move results and feedback cues
//! - `session`: input mapping, best-score store, `GameSession` shell
//! - `error`: error types for caller-supplied data and storage

pub mod core;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Direction, EngineConfig, GameRng, GameRngState, Grid, Position, Score, SessionState, Snapshot,
    Tile, MAX_TILE,
};

pub use crate::error::{ConfigError, GridError, ParseDirectionError, StoreError};

pub use crate::rules::{slide_row, FeedbackCue, GridEngine, MoveResult, RowSlide};

pub use crate::session::{
    direction_for_key, direction_for_swipe, GameSession, JsonFileStore, MemoryStore, ScoreStore,
    BEST_SCORE_KEY,
};

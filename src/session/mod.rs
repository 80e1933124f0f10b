//! The shell around the engine: input mapping, best-score storage, and the
//! `GameSession` that ties them to a `GridEngine`.

pub mod game;
pub mod input;
pub mod store;

pub use game::{GameSession, BEST_SCORE_KEY};
pub use input::{direction_for_key, direction_for_swipe, MIN_SWIPE};
pub use store::{JsonFileStore, MemoryStore, ScoreStore};

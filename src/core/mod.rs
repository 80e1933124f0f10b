//! Core types: grid, directions, RNG, configuration, session state.
//!
//! Nothing here knows how a move resolves; that lives in `rules`.

pub mod config;
pub mod direction;
pub mod grid;
pub mod rng;
pub mod state;

pub use config::EngineConfig;
pub use direction::Direction;
pub use grid::{Grid, Position, Tile, MAX_TILE};
pub use rng::{GameRng, GameRngState};
pub use state::{Score, SessionState, Snapshot};

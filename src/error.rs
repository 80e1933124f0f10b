//! Error types for the crate's edges.
//!
//! Nothing in here is raised by a move: wins, game over, no-op moves and
//! undo without a snapshot are reported through result values. These errors
//! only cover caller-supplied data (grids, configs, direction names) and the
//! score store.

use std::path::PathBuf;

use crate::core::grid::Tile;

/// Malformed caller-supplied grid.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must be at least 2x2, got {0} rows")]
    TooSmall(usize),
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("tile {value} at ({row}, {col}) is not a power of two")]
    InvalidTile { row: usize, col: usize, value: Tile },
}

/// Invalid engine configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("grid size must be at least 2, got {0}")]
    GridTooSmall(usize),
    #[error("{name} must be a power of two >= 4, got {value}")]
    NotPowerOfTwo { name: &'static str, value: Tile },
    #[error("four-tile probability must be within [0, 1], got {0}")]
    Probability(f64),
    #[error("cannot place {tiles} starting tiles on a {size}x{size} grid")]
    StartingTiles { tiles: usize, size: usize },
    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Score store failure.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed score file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Unknown direction name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown direction: {0:?}")]
pub struct ParseDirectionError(pub String);

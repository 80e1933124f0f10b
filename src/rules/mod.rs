//! Move resolution.
//!
//! - `slide`: one row slid and merged towards index 0
//! - `engine`: `GridEngine`, which rotates every direction onto a left
//!   slide, spawns tiles, detects win/game over and keeps one undo point
//! - `outcome`: the `MoveResult` handed back to callers and its cues

pub mod engine;
pub mod outcome;
pub mod slide;

pub use engine::GridEngine;
pub use outcome::{FeedbackCue, MoveResult};
pub use slide::{slide_row, RowSlide};

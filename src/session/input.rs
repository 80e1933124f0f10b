//! Raw input to directions.
//!
//! Keys use browser-style names (`ArrowUp`) plus WASD in either case.
//! Swipes are screen-space deltas, so positive `dy` points down.

use crate::core::Direction;

/// Shortest swipe that counts as a move.
pub const MIN_SWIPE: f32 = 50.0;

/// Map a key name to a direction.
#[must_use]
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}

/// Map a swipe to a direction along its dominant axis.
///
/// Ties go to the vertical axis.
#[must_use]
pub fn direction_for_swipe(dx: f32, dy: f32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        (dx.abs() > MIN_SWIPE).then(|| {
            if dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        })
    } else {
        (dy.abs() > MIN_SWIPE).then(|| {
            if dy > 0.0 {
                Direction::Down
            } else {
                Direction::Up
            }
        })
    }
}

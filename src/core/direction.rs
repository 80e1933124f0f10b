//! Move directions.
//!
//! Every direction is resolved as a left slide on a rotated grid. The
//! rotation count is the number of clockwise quarter turns that bring the
//! direction onto "left".

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseDirectionError;

/// A direction to slide/merge tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Clockwise quarter turns that map this direction onto a left slide.
    #[must_use]
    pub const fn quarter_turns(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    /// Quarter turns that undo `quarter_turns`.
    #[must_use]
    pub const fn inverse_turns(self) -> usize {
        (4 - self.quarter_turns()) % 4
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the quarter turns for each direction.
    #[test]
    fn test_quarter_turns() {
        assert_eq!(Direction::Left.quarter_turns(), 0);
        assert_eq!(Direction::Down.quarter_turns(), 1);
        assert_eq!(Direction::Right.quarter_turns(), 2);
        assert_eq!(Direction::Up.quarter_turns(), 3);
    }

    /// Test that turns plus inverse turns make a full revolution.
    #[test]
    fn test_inverse_turns_complete_a_revolution() {
        for dir in Direction::ALL {
            assert_eq!((dir.quarter_turns() + dir.inverse_turns()) % 4, 0);
        }
        assert_eq!(Direction::Left.inverse_turns(), 0);
        assert_eq!(Direction::Up.inverse_turns(), 1);
    }

    /// Test parsing directions by name.
    #[test]
    fn test_parse() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!(" Right ".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!(
            "north".parse::<Direction>(),
            Err(ParseDirectionError("north".to_string()))
        );
    }

    /// Test that Display output parses back.
    #[test]
    fn test_display_matches_parse() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>(), Ok(dir));
        }
    }

    /// Test that directions serialize in lowercase.
    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Direction::Down).unwrap();
        assert_eq!(json, "\"down\"");
    }
}

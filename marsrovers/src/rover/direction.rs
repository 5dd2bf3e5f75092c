use std::{fmt, str::FromStr};

use crate::rover::ParseDirectionError;

/// Compass direction a rover can face. Variants are declared in clockwise order and the
/// turn arithmetic relies on that.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, clockwise starting from north.
    pub const ALL: &'static [Direction] = &[
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction one quarter turn clockwise from this one.
    pub fn clockwise(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    /// The direction one quarter turn counter-clockwise from this one.
    pub fn counter_clockwise(self) -> Self {
        Self::ALL[(self as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// The direction faced after making the given turn.
    pub fn turn(self, turn: Turn) -> Self {
        match turn {
            Turn::Left => self.counter_clockwise(),
            Turn::Right => self.clockwise(),
        }
    }

    /// Single-letter abbreviation: `N`, `E`, `S`, or `W`.
    pub fn symbol(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
        }
    }

    /// Lowercase full name, e.g. `north`.
    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Parses either the abbreviation or the full name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|dir| {
                s.eq_ignore_ascii_case(dir.symbol()) || s.eq_ignore_ascii_case(dir.name())
            })
            .ok_or_else(|| ParseDirectionError::new(s))
    }
}

/// Which way to rotate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Turn {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
}

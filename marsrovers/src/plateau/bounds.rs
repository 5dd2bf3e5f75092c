//! Inclusive limits of a plateau.
use std::convert::TryFrom;

use crate::{
    plateau::{InvalidBoundary, Position},
    rover::Direction,
};

/// North-east corner of a plateau. Both limits are inclusive, so the valid cells are
/// `[0, east] x [0, north]` and even a `0 x 0` plateau holds one cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Bounds {
    /// Largest valid `x`.
    east: usize,
    /// Largest valid `y`.
    north: usize,
}

impl Bounds {
    /// Create [`Bounds`] with the given inclusive east and north limits.
    pub fn new(east: usize, north: usize) -> Self {
        Self { east, north }
    }

    /// Create [`Bounds`] from signed limits, as typed by a user. Returns an error naming
    /// the offending edge if either limit is negative or does not fit in a `usize`.
    pub fn try_new(east: i64, north: i64) -> Result<Self, InvalidBoundary> {
        let east =
            usize::try_from(east).map_err(|_| InvalidBoundary::new(Direction::East, east))?;
        let north =
            usize::try_from(north).map_err(|_| InvalidBoundary::new(Direction::North, north))?;
        Ok(Self::new(east, north))
    }

    /// Get the east (largest `x`) limit.
    pub fn east(&self) -> usize {
        self.east
    }

    /// Get the north (largest `y`) limit.
    pub fn north(&self) -> usize {
        self.north
    }

    /// Check if the given [`Position`] lies on the plateau.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x <= self.east && pos.y <= self.north
    }

    /// Compute the cell one step from `pos` in direction `dir`. If that cell is off the
    /// plateau, returns the edge that would be crossed instead.
    pub fn step(&self, pos: Position, dir: Direction) -> Result<Position, Direction> {
        let next = match dir {
            Direction::North => pos.y.checked_add(1).map(|y| Position::new(pos.x, y)),
            Direction::South => pos.y.checked_sub(1).map(|y| Position::new(pos.x, y)),
            Direction::East => pos.x.checked_add(1).map(|x| Position::new(x, pos.y)),
            Direction::West => pos.x.checked_sub(1).map(|x| Position::new(x, pos.y)),
        };
        match next {
            Some(next) if next.x > self.east => Err(Direction::East),
            Some(next) if next.y > self.north => Err(Direction::North),
            Some(next) => Ok(next),
            None => Err(dir),
        }
    }
}

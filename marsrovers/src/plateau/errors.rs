//! Errors used by the [`Plateau`][crate::Plateau].

use thiserror::Error;

use crate::{
    plateau::{Bounds, Position},
    rover::{BoundaryViolation, Direction, Interrupted, NamePoolExhausted, NotFound},
};

/// Error returned when a plateau is given a boundary that cannot describe a grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("the plateau's {} boundary must be a non-negative integer, got {value}", .edge.name())]
pub struct InvalidBoundary {
    /// Which limit was invalid, either [`Direction::East`] or [`Direction::North`].
    edge: Direction,
    /// The rejected value.
    value: i64,
}

impl InvalidBoundary {
    /// Create an [`InvalidBoundary`] for the given edge and value.
    pub(super) fn new(edge: Direction, value: i64) -> Self {
        Self { edge, value }
    }

    /// Get the edge whose limit was rejected.
    pub fn edge(&self) -> Direction {
        self.edge
    }

    /// Get the rejected limit.
    pub fn value(&self) -> i64 {
        self.value
    }
}

/// Reasons a rover could not land on a plateau.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum LandingError {
    /// The starting position is not on the plateau.
    #[error(
        "cannot land at {position}: the plateau only extends to {} {}",
        .bounds.east(),
        .bounds.north()
    )]
    OutOfBounds {
        /// Requested starting position.
        position: Position,
        /// Bounds of the plateau that rejected the landing.
        bounds: Bounds,
    },

    /// Every name in the pool is already taken.
    #[error(transparent)]
    PoolExhausted(#[from] NamePoolExhausted),
}

/// Reasons a command could not be delivered to a rover on a plateau.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum DriveError {
    /// No rover with the requested ID is on the plateau.
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// A single move was refused because it would leave the plateau.
    #[error(transparent)]
    BoundaryViolation(#[from] BoundaryViolation),

    /// A command sequence stopped part way before running off the plateau.
    #[error(transparent)]
    Interrupted(#[from] Interrupted),
}

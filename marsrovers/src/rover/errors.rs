//! Errors used by [`Rover`][crate::Rover] and [`RoverCollection`][crate::RoverCollection].

use thiserror::Error;

use crate::{
    plateau::Position,
    rover::{Command, Direction, RoverId},
};

/// Error returned when a move would take a rover off the plateau. The rover is left
/// exactly where it was.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("rover {rover} would fall off the {} edge moving from {position}", .edge.name())]
pub struct BoundaryViolation {
    /// Rover that refused to move.
    rover: RoverId,
    /// Edge of the plateau that would have been crossed.
    edge: Direction,
    /// Position the rover stayed at.
    position: Position,
}

impl BoundaryViolation {
    /// Construct a [`BoundaryViolation`] for the given rover, edge, and position.
    pub(super) fn new(rover: RoverId, edge: Direction, position: Position) -> Self {
        Self {
            rover,
            edge,
            position,
        }
    }

    /// Get the ID of the rover that refused to move.
    pub fn rover(&self) -> RoverId {
        self.rover
    }

    /// Get the edge that would have been crossed.
    pub fn edge(&self) -> Direction {
        self.edge
    }

    /// Get the position the rover stayed at.
    pub fn position(&self) -> Position {
        self.position
    }
}

/// Error returned when a sequence of commands stops part way through because one of the
/// moves would leave the plateau.
///
/// Holds the commands after the refused move so that the caller can resume them, or
/// replace them with something more careful.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("stopped after {applied} command(s): {violation}")]
pub struct Interrupted {
    /// The move that was refused.
    #[source]
    violation: BoundaryViolation,
    /// Number of commands that were applied before the refused move.
    applied: usize,
    /// Commands that came after the refused move and were never run.
    remaining: Vec<Command>,
}

impl Interrupted {
    /// Construct an [`Interrupted`] error.
    pub(super) fn new(
        violation: BoundaryViolation,
        applied: usize,
        remaining: Vec<Command>,
    ) -> Self {
        Self {
            violation,
            applied,
            remaining,
        }
    }

    /// Get the boundary violation that stopped the sequence.
    pub fn violation(&self) -> &BoundaryViolation {
        &self.violation
    }

    /// Get the number of commands that ran before the sequence stopped.
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Get the commands that were never run.
    pub fn remaining(&self) -> &[Command] {
        &self.remaining
    }

    /// Extract the commands that were never run.
    pub fn into_remaining(self) -> Vec<Command> {
        self.remaining
    }
}

/// Error returned when a rover is added but no names are left in the pool.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("no names left for a new rover, all {landed} have been used")]
pub struct NamePoolExhausted {
    /// Number of rovers already in the collection.
    landed: usize,
}

impl NamePoolExhausted {
    pub(super) fn new(landed: usize) -> Self {
        Self { landed }
    }

    /// Get the number of rovers that already hold a name.
    pub fn landed(&self) -> usize {
        self.landed
    }
}

/// Error returned when looking up a rover that is not in the collection.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("no rover with id {id}")]
pub struct NotFound {
    id: RoverId,
}

impl NotFound {
    pub(super) fn new(id: RoverId) -> Self {
        Self { id }
    }

    /// Get the ID that was looked up.
    pub fn id(&self) -> RoverId {
        self.id
    }
}

/// Error returned when a character is not one of the rover commands.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("invalid command {token:?} at position {index}, expected 'L', 'R', or 'M'")]
pub struct InvalidCommand {
    /// The offending character.
    token: char,
    /// Character offset of the offending character in the input.
    index: usize,
}

impl InvalidCommand {
    pub(super) fn new(token: char, index: usize) -> Self {
        Self { token, index }
    }

    /// Get the character that was not a command.
    pub fn token(&self) -> char {
        self.token
    }

    /// Get the character offset of the bad command in the parsed string.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Error returned when a string does not name a [`Direction`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid direction {input:?}, expected one of N, E, S, or W")]
pub struct ParseDirectionError {
    input: String,
}

impl ParseDirectionError {
    pub(super) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// Get the text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

//! Rovers and the commands that drive them.
use std::fmt;

use crate::plateau::{Bounds, Position};

pub use self::{
    collection::RoverCollection,
    command::{parse_commands, Command},
    direction::{Direction, Turn},
    errors::{
        BoundaryViolation, Interrupted, InvalidCommand, NamePoolExhausted, NotFound,
        ParseDirectionError,
    },
    names::{InOrder, NamePool, NameSelector, DEFAULT_NAMES},
};

#[cfg(feature = "rng_gen")]
pub use self::names::RandomNames;

mod collection;
mod command;
mod direction;
mod errors;
mod names;

/// Opaque identifier of a [`Rover`], unique within its [`RoverCollection`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct RoverId(u32);

impl RoverId {
    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RoverId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A rover on a plateau.
///
/// Rovers are created by [`RoverCollection::add`] and can only turn in place or move
/// one cell forward. A move that would leave the plateau is refused and the rover stays
/// put, so a rover's state is always valid after any command.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Rover {
    id: RoverId,
    name: String,
    position: Position,
    direction: Direction,
}

impl Rover {
    pub(crate) fn new(
        id: RoverId,
        name: String,
        position: Position,
        direction: Direction,
    ) -> Self {
        Self {
            id,
            name,
            position,
            direction,
        }
    }

    /// Get the ID of this rover.
    pub fn id(&self) -> RoverId {
        self.id
    }

    /// Get the name of this rover.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current position of this rover.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Get the direction this rover is facing.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Rotate a quarter turn in place.
    pub fn turn(&mut self, turn: Turn) {
        self.direction = self.direction.turn(turn);
    }

    /// Move one cell in the direction this rover is facing and return the new position.
    /// If that would leave `bounds`, the rover stays where it is and the error names the
    /// edge it would have crossed.
    pub fn move_forward(&mut self, bounds: &Bounds) -> Result<Position, BoundaryViolation> {
        let next = bounds
            .step(self.position, self.direction)
            .map_err(|edge| BoundaryViolation::new(self.id, edge, self.position))?;
        self.position = next;
        Ok(next)
    }

    /// Run a single command.
    pub fn execute(
        &mut self,
        command: Command,
        bounds: &Bounds,
    ) -> Result<(), BoundaryViolation> {
        match command {
            Command::Turn(turn) => self.turn(turn),
            Command::Move => {
                self.move_forward(bounds)?;
            }
        }
        Ok(())
    }

    /// Run commands in order and return how many ran. Stops at the first move that would
    /// leave `bounds`; everything before it stays applied, and the error carries the
    /// commands after it.
    pub fn follow(
        &mut self,
        commands: &[Command],
        bounds: &Bounds,
    ) -> Result<usize, Interrupted> {
        for (applied, &command) in commands.iter().enumerate() {
            if let Err(violation) = self.execute(command, bounds) {
                return Err(Interrupted::new(
                    violation,
                    applied,
                    commands[applied + 1..].to_vec(),
                ));
            }
        }
        Ok(commands.len())
    }

    /// Take a snapshot of this rover for display.
    pub fn report(&self) -> RoverReport {
        RoverReport {
            id: self.id,
            name: self.name.clone(),
            position: self.position,
            direction: self.direction,
        }
    }
}

/// Snapshot of a rover's identity and state.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct RoverReport {
    /// ID of the rover.
    pub id: RoverId,
    /// Name the rover was given when it landed.
    pub name: String,
    /// Where the rover is.
    pub position: Position,
    /// Which way the rover faces.
    pub direction: Direction,
}

impl fmt::Display for RoverReport {
    /// Formats as `Name: x y D`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} {}", self.name, self.position, self.direction)
    }
}

//! Rovers exploring a bounded, rectangular plateau.
//!
//! A [`Plateau`] is defined by its north-east corner and owns every [`Rover`] that
//! lands on it. Rovers face one of the four cardinal [`Direction`]s and are driven by
//! [`Command`]s: turn left, turn right, or move one cell forward. A move that would
//! take a rover off the plateau is rejected and leaves the rover where it was.
//!
//! ```
//! use marsrovers::{parse_commands, Direction, Plateau, PlateauId, Position};
//!
//! let mut plateau = Plateau::new(PlateauId::new(1), 5, 5).unwrap();
//! let id = plateau.land(Position::new(1, 2), Direction::North).unwrap();
//! plateau.drive(id, &parse_commands("LMLMLMLMM").unwrap()).unwrap();
//!
//! let rover = plateau.rover(id).unwrap();
//! assert_eq!(rover.position(), Position::new(1, 3));
//! assert_eq!(rover.direction(), Direction::North);
//! ```

use thiserror::Error;

pub use self::{
    hook::LandingHook,
    plateau::{
        Bounds, DriveError, InvalidBoundary, LandingError, Plateau, PlateauId, Position,
    },
    rover::{
        parse_commands, BoundaryViolation, Command, Direction, InOrder, Interrupted,
        InvalidCommand, NamePool, NamePoolExhausted, NameSelector, NotFound,
        ParseDirectionError, Rover, RoverCollection, RoverId, RoverReport, Turn,
    },
};

#[cfg(feature = "rng_gen")]
pub use self::rover::RandomNames;

pub mod hook;
pub mod plateau;
pub mod rover;

/// Union of every error the core can return, for callers that want to handle them in
/// one place.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidBoundary(#[from] InvalidBoundary),
    #[error(transparent)]
    BoundaryViolation(#[from] BoundaryViolation),
    #[error(transparent)]
    Interrupted(#[from] Interrupted),
    #[error(transparent)]
    NamePoolExhausted(#[from] NamePoolExhausted),
    #[error(transparent)]
    NotFound(#[from] NotFound),
    #[error(transparent)]
    InvalidCommand(#[from] InvalidCommand),
    #[error(transparent)]
    ParseDirection(#[from] ParseDirectionError),
    #[error(transparent)]
    Landing(#[from] LandingError),
}

impl From<DriveError> for Error {
    /// Flatten a [`DriveError`] into the matching top-level variant.
    fn from(err: DriveError) -> Self {
        match err {
            DriveError::NotFound(err) => Error::NotFound(err),
            DriveError::BoundaryViolation(err) => Error::BoundaryViolation(err),
            DriveError::Interrupted(err) => Error::Interrupted(err),
        }
    }
}

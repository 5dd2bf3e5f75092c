//! The plateau rovers explore.
use std::fmt;

use crate::{
    hook::LandingHook,
    rover::{
        Command, Direction, InOrder, NamePool, NameSelector, NotFound, Rover, RoverCollection,
        RoverId, RoverReport, Turn,
    },
};

pub use self::{
    bounds::Bounds,
    errors::{DriveError, InvalidBoundary, LandingError},
    position::Position,
};

mod bounds;
mod errors;
mod position;

/// Opaque identifier of a [`Plateau`], chosen by whoever creates it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PlateauId(u64);

impl PlateauId {
    /// Wrap a raw identifier.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw identifier back.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for PlateauId {
    fn from(raw: u64) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for PlateauId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// A bounded rectangular plateau and the rovers that have landed on it.
///
/// Rovers can only be mutated through the plateau, which always hands them its own
/// [`Bounds`]. Every rover therefore stays on the plateau for its whole life.
#[derive(Debug)]
pub struct Plateau<S = InOrder> {
    /// Identifier chosen at construction.
    id: PlateauId,

    /// Inclusive north-east corner.
    bounds: Bounds,

    /// Rovers that landed here, plus the names still available to new ones.
    rovers: RoverCollection<S>,
}

impl Plateau<InOrder> {
    /// Create a plateau with the given north-east corner. Rovers are named from the
    /// default pool, in order. Fails if either limit is negative.
    pub fn new(id: PlateauId, east: i64, north: i64) -> Result<Self, InvalidBoundary> {
        Self::with_names(id, east, north, NamePool::default(), InOrder)
    }
}

impl<S: NameSelector> Plateau<S> {
    /// Create a plateau whose rovers are named from `names`, using `selector` to pick
    /// each name. Fails if either limit is negative.
    pub fn with_names(
        id: PlateauId,
        east: i64,
        north: i64,
        names: NamePool,
        selector: S,
    ) -> Result<Self, InvalidBoundary> {
        Ok(Self::with_bounds(
            id,
            Bounds::try_new(east, north)?,
            names,
            selector,
        ))
    }

    /// Create a plateau from already validated [`Bounds`].
    pub fn with_bounds(id: PlateauId, bounds: Bounds, names: NamePool, selector: S) -> Self {
        Self {
            id,
            bounds,
            rovers: RoverCollection::with_names(names, selector),
        }
    }

    /// Land a new rover at the given position, facing the given direction, and return
    /// its ID. Nothing changes if the position is off the plateau or no names are left.
    pub fn land(
        &mut self,
        position: Position,
        direction: Direction,
    ) -> Result<RoverId, LandingError> {
        if !self.bounds.contains(position) {
            return Err(LandingError::OutOfBounds {
                position,
                bounds: self.bounds,
            });
        }
        Ok(self.rovers.add(position, direction)?)
    }

    /// Same as [`land`][Self::land], then tell `hook` about the new rover. The hook is
    /// not called if landing fails.
    pub fn land_and_notify<H: LandingHook + ?Sized>(
        &mut self,
        position: Position,
        direction: Direction,
        hook: &mut H,
    ) -> Result<RoverId, LandingError> {
        let id = self.land(position, direction)?;
        if let Ok(rover) = self.rovers.get(id) {
            hook.rover_landed(self.id, rover);
        }
        Ok(id)
    }
}

impl<S> Plateau<S> {
    /// Get the ID of this plateau.
    pub fn id(&self) -> PlateauId {
        self.id
    }

    /// Get the inclusive limits of this plateau.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Get the rovers on this plateau.
    pub fn rovers(&self) -> &RoverCollection<S> {
        &self.rovers
    }

    /// Look up a rover on this plateau.
    pub fn rover(&self, id: RoverId) -> Result<&Rover, NotFound> {
        self.rovers.get(id)
    }

    /// Turn the specified rover and return the direction it now faces.
    pub fn turn(&mut self, id: RoverId, turn: Turn) -> Result<Direction, NotFound> {
        let rover = self.rovers.get_mut(id)?;
        rover.turn(turn);
        Ok(rover.direction())
    }

    /// Move the specified rover one cell forward and return its new position.
    pub fn step(&mut self, id: RoverId) -> Result<Position, DriveError> {
        let bounds = self.bounds;
        Ok(self.rovers.get_mut(id)?.move_forward(&bounds)?)
    }

    /// Run a single command on the specified rover.
    pub fn execute(&mut self, id: RoverId, command: Command) -> Result<(), DriveError> {
        let bounds = self.bounds;
        Ok(self.rovers.get_mut(id)?.execute(command, &bounds)?)
    }

    /// Run a sequence of commands on the specified rover, returning how many were
    /// applied. Stops at the first move that would leave the plateau; the returned
    /// [`Interrupted`][crate::Interrupted] holds the commands that were not run so the
    /// caller can resume.
    pub fn drive(&mut self, id: RoverId, commands: &[Command]) -> Result<usize, DriveError> {
        let bounds = self.bounds;
        Ok(self.rovers.get_mut(id)?.follow(commands, &bounds)?)
    }

    /// Snapshot every rover on this plateau, in landing order.
    pub fn report(&self) -> Vec<RoverReport> {
        self.rovers.iter().map(Rover::report).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rover::parse_commands;

    fn plateau(east: i64, north: i64) -> Plateau {
        Plateau::new(PlateauId::new(7), east, north).unwrap()
    }

    #[test]
    fn negative_boundaries_are_rejected() {
        let err = Plateau::new(PlateauId::new(1), 5, -1).unwrap_err();
        assert_eq!(err.edge(), Direction::North);
        assert!(Plateau::new(PlateauId::new(1), -4, 5).is_err());
        assert!(Plateau::new(PlateauId::new(1), 0, 0).is_ok());
    }

    #[test]
    fn landing_off_the_plateau_commits_nothing() {
        let mut plateau = plateau(5, 5);
        let err = plateau
            .land(Position::new(6, 0), Direction::North)
            .unwrap_err();
        assert_eq!(
            err,
            LandingError::OutOfBounds {
                position: Position::new(6, 0),
                bounds: Bounds::new(5, 5),
            }
        );
        assert_eq!(plateau.rovers().count(), 0);
        assert_eq!(plateau.rovers().remaining_names().len(), 3);
    }

    #[test]
    fn landing_on_the_far_corner_is_allowed() {
        let mut plateau = plateau(5, 5);
        let id = plateau.land(Position::new(5, 5), Direction::East).unwrap();
        assert_eq!(plateau.rover(id).unwrap().position(), Position::new(5, 5));
    }

    #[test]
    fn pool_exhaustion_surfaces_as_landing_error() {
        let mut plateau = Plateau::with_names(
            PlateauId::new(2),
            3,
            3,
            NamePool::new(vec!["Solo"]),
            InOrder,
        )
        .unwrap();
        plateau.land(Position::new(0, 0), Direction::North).unwrap();
        match plateau.land(Position::new(1, 1), Direction::North) {
            Err(LandingError::PoolExhausted(_)) => {}
            other => panic!("expected pool exhaustion, got {:?}", other),
        }
        assert_eq!(plateau.rovers().count(), 1);
    }

    #[test]
    fn hook_sees_landed_rover() {
        struct Recorder(Vec<(PlateauId, String, Position)>);
        impl LandingHook for Recorder {
            fn rover_landed(&mut self, plateau: PlateauId, rover: &Rover) {
                self.0
                    .push((plateau, rover.name().to_owned(), rover.position()));
            }
        }

        let mut plateau = plateau(5, 5);
        let mut recorder = Recorder(Vec::new());
        plateau
            .land_and_notify(Position::new(1, 2), Direction::North, &mut recorder)
            .unwrap();
        assert!(plateau
            .land_and_notify(Position::new(9, 9), Direction::North, &mut recorder)
            .is_err());
        assert_eq!(
            recorder.0,
            vec![(PlateauId::new(7), "Curiosity".to_owned(), Position::new(1, 2))]
        );
    }

    #[test]
    fn single_commands_go_through_plateau_bounds() {
        let mut plateau = plateau(1, 1);
        let id = plateau.land(Position::new(0, 0), Direction::North).unwrap();
        assert_eq!(plateau.step(id).unwrap(), Position::new(0, 1));
        match plateau.step(id) {
            Err(DriveError::BoundaryViolation(err)) => assert_eq!(err.edge(), Direction::North),
            other => panic!("expected boundary violation, got {:?}", other),
        }
        assert_eq!(plateau.turn(id, Turn::Right).unwrap(), Direction::East);
        plateau.execute(id, Command::Move).unwrap();
        assert_eq!(plateau.rover(id).unwrap().position(), Position::new(1, 1));
    }

    #[test]
    fn unknown_rover_is_not_found() {
        let mut plateau = plateau(5, 5);
        let id = plateau.land(Position::new(0, 0), Direction::North).unwrap();
        let mut other = self::plateau(5, 5);
        other.land(Position::new(0, 0), Direction::North).unwrap();
        let missing = other.land(Position::new(0, 0), Direction::North).unwrap();

        assert!(plateau.rover(id).is_ok());
        assert_eq!(plateau.rover(missing).unwrap_err().id(), missing);
        assert!(plateau.turn(missing, Turn::Left).is_err());
        match plateau.drive(missing, &[Command::Move]) {
            Err(DriveError::NotFound(err)) => assert_eq!(err.id(), missing),
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[test]
    fn interrupted_drive_can_resume() {
        let mut plateau = plateau(2, 2);
        let id = plateau.land(Position::new(1, 1), Direction::North).unwrap();
        let commands = parse_commands("MMRM").unwrap();
        let interrupted = match plateau.drive(id, &commands) {
            Err(DriveError::Interrupted(err)) => err,
            other => panic!("expected interruption, got {:?}", other),
        };
        assert_eq!(interrupted.applied(), 1);
        assert_eq!(interrupted.violation().edge(), Direction::North);
        assert_eq!(interrupted.remaining(), &[Command::Turn(Turn::Right), Command::Move][..]);

        let applied = plateau.drive(id, interrupted.remaining()).unwrap();
        assert_eq!(applied, 2);
        let rover = plateau.rover(id).unwrap();
        assert_eq!(rover.position(), Position::new(2, 2));
        assert_eq!(rover.direction(), Direction::East);
    }

    #[test]
    fn report_is_in_landing_order() {
        let mut plateau = plateau(5, 5);
        plateau.land(Position::new(3, 3), Direction::East).unwrap();
        plateau.land(Position::new(1, 2), Direction::North).unwrap();
        let lines: Vec<String> = plateau.report().iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["Curiosity: 3 3 E", "Pursuit: 1 2 N"]);
    }
}

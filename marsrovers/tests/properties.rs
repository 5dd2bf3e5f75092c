//! Algebraic properties of turning and moving.

use std::collections::HashSet;

use marsrovers::{
    Command, Direction, DriveError, InOrder, NamePool, Plateau, PlateauId, Position, Turn,
};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn turn() -> impl Strategy<Value = Turn> {
    prop_oneof![Just(Turn::Left), Just(Turn::Right)]
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![turn().prop_map(Command::Turn), Just(Command::Move)]
}

proptest! {
    #[test]
    fn opposite_turns_cancel(dir in direction(), first in turn()) {
        let second = match first {
            Turn::Left => Turn::Right,
            Turn::Right => Turn::Left,
        };
        prop_assert_eq!(dir.turn(first).turn(second), dir);
    }

    #[test]
    fn four_turns_are_identity(dir in direction(), t in turn()) {
        prop_assert_eq!(dir.turn(t).turn(t).turn(t).turn(t), dir);
    }

    #[test]
    fn interior_moves_change_one_coordinate(
        (east, x) in (2usize..20).prop_flat_map(|east| (Just(east), 1..east)),
        (north, y) in (2usize..20).prop_flat_map(|north| (Just(north), 1..north)),
        dir in direction(),
    ) {
        let mut plateau = Plateau::new(PlateauId::new(0), east as i64, north as i64).unwrap();
        let id = plateau.land(Position::new(x, y), dir).unwrap();

        let next = plateau.step(id).unwrap();
        let expected = match dir {
            Direction::North => Position::new(x, y + 1),
            Direction::South => Position::new(x, y - 1),
            Direction::East => Position::new(x + 1, y),
            Direction::West => Position::new(x - 1, y),
        };
        prop_assert_eq!(next, expected);
        prop_assert_eq!(plateau.rover(id).unwrap().direction(), dir);
    }

    #[test]
    fn outward_moves_at_the_edge_change_nothing(
        size in 0usize..10,
        along in 0usize..10,
        dir in direction(),
    ) {
        let along = along.min(size);
        let start = match dir {
            Direction::North => Position::new(along, size),
            Direction::South => Position::new(along, 0),
            Direction::East => Position::new(size, along),
            Direction::West => Position::new(0, along),
        };
        let mut plateau = Plateau::new(PlateauId::new(0), size as i64, size as i64).unwrap();
        let id = plateau.land(start, dir).unwrap();

        match plateau.step(id) {
            Err(DriveError::BoundaryViolation(err)) => prop_assert_eq!(err.edge(), dir),
            other => prop_assert!(false, "expected a boundary violation, got {:?}", other),
        }
        let rover = plateau.rover(id).unwrap();
        prop_assert_eq!(rover.position(), start);
        prop_assert_eq!(rover.direction(), dir);
    }

    #[test]
    fn rovers_never_leave_the_plateau(
        east in 0usize..6,
        north in 0usize..6,
        dir in direction(),
        commands in prop::collection::vec(command(), 0..64),
    ) {
        let mut plateau = Plateau::new(PlateauId::new(0), east as i64, north as i64).unwrap();
        let id = plateau.land(Position::new(east / 2, north / 2), dir).unwrap();
        for command in commands {
            let _ = plateau.execute(id, command);
            prop_assert!(plateau.bounds().contains(plateau.rover(id).unwrap().position()));
        }
    }

    #[test]
    fn names_and_ids_are_unique(
        names in prop::collection::vec("[A-Za-z]{1,8}", 1..12),
    ) {
        let pool = NamePool::new(names);
        let capacity = pool.len();
        let mut plateau = Plateau::with_names(PlateauId::new(0), 3, 3, pool, InOrder).unwrap();

        let ids: Vec<_> = (0..capacity)
            .map(|_| plateau.land(Position::new(1, 1), Direction::North).unwrap())
            .collect();
        prop_assert!(plateau.land(Position::new(1, 1), Direction::North).is_err());
        prop_assert_eq!(plateau.rovers().count(), capacity);

        prop_assert_eq!(ids.iter().collect::<HashSet<_>>().len(), capacity);
        let names: HashSet<_> = plateau.rovers().iter().map(|r| r.name().to_owned()).collect();
        prop_assert_eq!(names.len(), capacity);
    }
}

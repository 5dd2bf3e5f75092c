//! Reading and parsing the lines typed at the console.
use std::{
    convert::TryFrom,
    io::{self, BufRead, Write},
    num::ParseIntError,
};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use marsrovers::{parse_commands, Command, Direction, InvalidCommand, ParseDirectionError, Position};

/// Reasons a line of input could not be understood.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Please provide valid coordinates.")]
    Corner,

    #[error("Please provide valid integer coordinates and a direction, e.g. \"1 2 N\".")]
    Landing,

    #[error("{axis} must be a non-negative integer, got {value}")]
    Negative { axis: &'static str, value: i64 },

    #[error("invalid integer: {0}")]
    Integer(#[from] ParseIntError),

    #[error("Please provide a valid direction: {0}")]
    Direction(#[from] ParseDirectionError),

    #[error("Please provide valid directions. 'L' = Left, 'R' = Right, 'M' = Move Forward.")]
    NoCommands,

    #[error("Please provide valid directions: {0}")]
    Command(#[from] InvalidCommand),
}

/// Parse the plateau's north-east corner, `"<east> <north>"`. Signs are accepted here so
/// the plateau itself can reject negative limits.
pub fn parse_corner(line: &str) -> Result<(i64, i64), InputError> {
    static CORNER: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?P<east>-?[0-9]+)(?:\s*,\s*|\s+)(?P<north>-?[0-9]+)$").unwrap()
    });
    let captures = CORNER.captures(line).ok_or(InputError::Corner)?;
    Ok((
        captures["east"].parse::<i64>()?,
        captures["north"].parse::<i64>()?,
    ))
}

/// Parse a landing site, `"<x> <y> <direction>"`.
pub fn parse_landing(line: &str) -> Result<(Position, Direction), InputError> {
    static LANDING: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)
        (?P<x>-?[0-9]+)(?:\s*,\s*|\s+)
        (?P<y>-?[0-9]+)\s+
        (?P<dir>\w+)$",
        )
        .unwrap()
    });
    let captures = LANDING.captures(line).ok_or(InputError::Landing)?;
    let x = non_negative("x", captures["x"].parse::<i64>()?)?;
    let y = non_negative("y", captures["y"].parse::<i64>()?)?;
    let dir = captures["dir"].parse::<Direction>()?;
    Ok((Position::new(x, y), dir))
}

/// Parse a non-empty command string such as `"LMLMLMLMM"`.
pub fn parse_route(line: &str) -> Result<Vec<Command>, InputError> {
    let commands = parse_commands(line)?;
    if commands.is_empty() {
        Err(InputError::NoCommands)
    } else {
        Ok(commands)
    }
}

/// Spell a list of commands the way they are typed.
pub fn spell(commands: &[Command]) -> String {
    commands.iter().map(|c| c.symbol()).collect()
}

fn non_negative(axis: &'static str, value: i64) -> Result<usize, InputError> {
    usize::try_from(value).map_err(|_| InputError::Negative { axis, value })
}

/// Helper to read input from the user.
pub struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    pub fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Returns
    /// `None` once the input is exhausted.
    pub fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<Option<T>>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            if !self.read_input_inner(prompt)? {
                return Ok(None);
            }
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(Some(val));
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line. Returns
    /// false at end of input.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<bool> {
        if !prompt.is_empty() {
            print!("{} ", prompt);
            io::stdout().flush()?;
        }
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            return Ok(false);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use marsrovers::Turn;

    #[test]
    fn corner_accepts_spaces_or_comma() {
        assert_eq!(parse_corner("5 5").unwrap(), (5, 5));
        assert_eq!(parse_corner("7,3").unwrap(), (7, 3));
        assert_eq!(parse_corner("-1 4").unwrap(), (-1, 4));
        assert!(matches!(parse_corner("5"), Err(InputError::Corner)));
        assert!(matches!(parse_corner("a b"), Err(InputError::Corner)));
        assert!(matches!(
            parse_corner("99999999999999999999 1"),
            Err(InputError::Integer(_))
        ));
    }

    #[test]
    fn landing_parses_position_and_direction() {
        assert_eq!(
            parse_landing("1 2 N").unwrap(),
            (Position::new(1, 2), Direction::North)
        );
        assert_eq!(
            parse_landing("3, 3 east").unwrap(),
            (Position::new(3, 3), Direction::East)
        );
        assert!(matches!(
            parse_landing("-1 2 N"),
            Err(InputError::Negative { axis: "x", value: -1 })
        ));
        assert!(matches!(parse_landing("1 2 Q"), Err(InputError::Direction(_))));
        assert!(matches!(parse_landing("1 2"), Err(InputError::Landing)));
    }

    #[test]
    fn route_must_not_be_empty() {
        assert!(matches!(parse_route(""), Err(InputError::NoCommands)));
        assert!(matches!(parse_route("LMZ"), Err(InputError::Command(_))));
        assert_eq!(
            parse_route("rm").unwrap(),
            vec![Command::Turn(Turn::Right), Command::Move]
        );
        assert_eq!(spell(&parse_route("l m r").unwrap()), "LMR");
    }

    #[test]
    fn reader_retries_until_accepted() {
        let mut input = InputReader::new(&b"nope\n5 5\n"[..]);
        let corner = input
            .read_input("", |line| parse_corner(line).ok())
            .unwrap();
        assert_eq!(corner, Some((5, 5)));
        assert_eq!(input.read_input("", |_| Some(())).unwrap(), None);
    }
}

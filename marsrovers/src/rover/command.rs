use std::{convert::TryFrom, fmt};

use crate::rover::{InvalidCommand, Turn};

/// A single instruction for a rover.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Command {
    /// Rotate in place.
    Turn(Turn),
    /// Move one cell in the direction the rover is facing.
    Move,
}

impl Command {
    /// The character that spells this command: `L`, `R`, or `M`.
    pub fn symbol(self) -> char {
        match self {
            Command::Turn(Turn::Left) => 'L',
            Command::Turn(Turn::Right) => 'R',
            Command::Move => 'M',
        }
    }
}

impl From<Turn> for Command {
    fn from(turn: Turn) -> Self {
        Command::Turn(turn)
    }
}

impl TryFrom<char> for Command {
    type Error = InvalidCommand;

    /// Parse a command character, ignoring case. Reports position 0 on failure; use
    /// [`parse_commands`] to get the position within a longer string.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'L' => Ok(Command::Turn(Turn::Left)),
            'R' => Ok(Command::Turn(Turn::Right)),
            'M' => Ok(Command::Move),
            _ => Err(InvalidCommand::new(c, 0)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = [0; 4];
        f.pad(self.symbol().encode_utf8(&mut buf))
    }
}

/// Parse a string of command characters such as `LMLMLMLMM`. Whitespace between
/// commands is skipped. Fails on the first character that is not a command, reporting
/// its character offset.
pub fn parse_commands(input: &str) -> Result<Vec<Command>, InvalidCommand> {
    input
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(i, c)| Command::try_from(c).map_err(|_| InvalidCommand::new(c, i)))
        .collect()
}

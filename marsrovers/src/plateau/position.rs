use std::fmt;

/// The coordinates of a cell on the plateau. `x` grows to the east and `y` grows to the
/// north; `(0, 0)` is the south-west corner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Position {
    /// Distance east of the south-west corner.
    pub x: usize,
    /// Distance north of the south-west corner.
    pub y: usize,
}

impl Position {
    /// Construct a [`Position`] from the given `x` and `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Position {
    /// Construct a [`Position`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for (usize, usize) {
    /// Convert the [`Position`] into an `(x, y)` pair.
    fn from(pos: Position) -> Self {
        (pos.x, pos.y)
    }
}

impl fmt::Display for Position {
    /// Formats as `x y`, the same shape the positions are typed in.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

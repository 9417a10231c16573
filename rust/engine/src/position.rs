use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// A grid cell addressed as `(col, row)`, with `(0, 0)` at the top-left corner.
/// Positions are plain coordinates; whether one lies on a given board is checked by the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Position {
    /// Column index, growing to the right
    pub col: usize,
    /// Row index, growing downwards
    pub row: usize,
}

impl Position {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Bottom-right corner of a `size`×`size` grid, where the blank rests when solved.
    pub const fn corner(size: usize) -> Self {
        Self {
            col: size - 1,
            row: size - 1,
        }
    }

    pub fn in_bounds(self, size: usize) -> bool {
        self.col < size && self.row < size
    }

    /// Neighbor one cell away in `direction`, or `None` if it falls off a `size`×`size` grid.
    ///
    /// ```
    /// use slidepuzzle_engine::position::{Direction, Position};
    ///
    /// let p = Position::new(0, 2);
    /// assert_eq!(p.step(Direction::Up, 3), Some(Position::new(0, 1)));
    /// assert_eq!(p.step(Direction::Left, 3), None);
    /// assert_eq!(p.step(Direction::Down, 3), None);
    /// ```
    pub fn step(self, direction: Direction, size: usize) -> Option<Position> {
        let next = match direction {
            Direction::Up => Position::new(self.col, self.row.checked_sub(1)?),
            Direction::Down => Position::new(self.col, self.row + 1),
            Direction::Left => Position::new(self.col.checked_sub(1)?, self.row),
            Direction::Right => Position::new(self.col + 1, self.row),
        };
        next.in_bounds(size).then_some(next)
    }

    pub fn is_adjacent(self, other: Position) -> bool {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl From<(usize, usize)> for Position {
    fn from((col, row): (usize, usize)) -> Self {
        Self { col, row }
    }
}

/// An orthogonal direction on the grid. Flip it with [`Neg`] (`-direction`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbor scan order used for legal-move derivation.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

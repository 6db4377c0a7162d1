//! Board coordinates.
//!
//! Coordinates are signed so that callers can hand the engine any
//! `(row, col)` pair, including out-of-bounds ones, and get a rule error
//! back instead of a type error.

use super::config::{BOARD_SIZE, CENTRAL_HIGH, CENTRAL_LOW};

/// A `(row, col)` coordinate. Row 0 is the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check whether both coordinates lie on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        let size = BOARD_SIZE as i32;
        self.row >= 0 && self.row < size && self.col >= 0 && self.col < size
    }

    /// Check whether this position is one of the four central cells.
    #[must_use]
    pub const fn is_central(self) -> bool {
        self.row >= CENTRAL_LOW
            && self.row <= CENTRAL_HIGH
            && self.col >= CENTRAL_LOW
            && self.col <= CENTRAL_HIGH
    }

    /// Array indices for an in-bounds position.
    #[must_use]
    pub const fn indices(self) -> Option<(usize, usize)> {
        if self.in_bounds() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub const fn manhattan_distance(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Orthogonal neighbours that lie on the board.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .map(move |(dr, dc)| Position::new(self.row + dr, self.col + dc))
            .filter(|p| p.in_bounds())
    }

    /// Every position on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        let size = BOARD_SIZE as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// The four central positions.
    pub fn central() -> impl Iterator<Item = Position> {
        (CENTRAL_LOW..=CENTRAL_HIGH)
            .flat_map(|row| (CENTRAL_LOW..=CENTRAL_HIGH).map(move |col| Position::new(row, col)))
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

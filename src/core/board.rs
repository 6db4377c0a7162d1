//! The 6×6 board.
//!
//! `Board` is a plain `Copy` value. The engine hands out copies through
//! `GameState::board()`, so holding one never aliases engine state.
//!
//! Boards can be written as text for fixtures and debugging: one line per
//! row, `.` for an empty cell, `O` for player zero and `X` for player one.
//!
//! ```
//! use dala::core::{Board, Cell, Player, Position};
//!
//! let board: Board = "
//!     ......
//!     ......
//!     ..OX..
//!     ..XO..
//!     ......
//!     ......
//! "
//! .parse()
//! .unwrap();
//!
//! assert_eq!(board.get(Position::new(2, 2)), Some(Cell::Owner(Player::Zero)));
//! assert_eq!(board.count(Player::One), 2);
//! ```

use std::str::FromStr;

use super::config::BOARD_SIZE;
use super::player::Player;
use super::position::Position;

/// One line of the board: a full row or a full column.
pub type Line = [Cell; BOARD_SIZE];

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Owner(Player),
}

impl Cell {
    /// Check whether the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The owning player, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Owner(p) => Some(p),
        }
    }

    /// Check whether the cell holds a piece of `player`.
    #[must_use]
    pub fn is_owned_by(self, player: Player) -> bool {
        self == Cell::Owner(player)
    }

    /// Text symbol for this cell.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Owner(p) => p.symbol(),
        }
    }

    fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' | '_' => Some(Cell::Empty),
            'O' | '0' => Some(Cell::Owner(Player::Zero)),
            'X' | '1' => Some(Cell::Owner(Player::One)),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Owner(player)
    }
}

/// Fixed 6×6 grid, row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Line; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from explicit rows.
    #[must_use]
    pub const fn from_rows(cells: [Line; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Get the cell at a position, or `None` if it is off the board.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Cell> {
        position.indices().map(|(r, c)| self.cells[r][c])
    }

    /// Set the cell at a position. Off-board positions are ignored.
    pub fn set(&mut self, position: Position, cell: Cell) {
        if let Some((r, c)) = position.indices() {
            self.cells[r][c] = cell;
        }
    }

    /// Check whether an on-board position is empty.
    #[must_use]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position) == Some(Cell::Empty)
    }

    /// A copy of row `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= BOARD_SIZE`.
    #[must_use]
    pub fn row(&self, row: usize) -> Line {
        self.cells[row]
    }

    /// A copy of column `col`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col >= BOARD_SIZE`.
    #[must_use]
    pub fn column(&self, col: usize) -> Line {
        std::array::from_fn(|r| self.cells[r][col])
    }

    /// All rows.
    #[must_use]
    pub fn rows(&self) -> &[Line; BOARD_SIZE] {
        &self.cells
    }

    /// Count `player`'s pieces on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_owned_by(player))
            .count()
    }

    /// Positions holding `player`'s pieces, row-major.
    pub fn positions_of(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.get(p) == Some(Cell::Owner(player)))
    }

    /// Empty positions, row-major.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |&p| self.is_empty_at(p))
    }
}

/// Errors from parsing a text board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected 6 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected 6")]
    RowLength { row: usize, len: usize },

    #[error("unknown cell symbol {symbol:?} at ({row}, {col})")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() != BOARD_SIZE {
            return Err(ParseBoardError::RowCount(lines.len()));
        }

        let mut board = Board::new();
        for (row, line) in lines.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE {
                return Err(ParseBoardError::RowLength {
                    row,
                    len: symbols.len(),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                board.cells[row][col] = Cell::from_symbol(symbol)
                    .ok_or(ParseBoardError::UnknownSymbol { row, col, symbol })?;
            }
        }

        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header: Vec<String> = (0..BOARD_SIZE).map(|i| i.to_string()).collect();
        writeln!(f, "   {}", header.join(" "))?;

        let wall = format!("  *{}*", vec!["-"; BOARD_SIZE].join("*"));
        writeln!(f, "{wall}")?;
        for (i, row) in self.cells.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => " ".to_string(),
                    Cell::Owner(p) => p.symbol().to_string(),
                })
                .collect();
            writeln!(f, "{i} |{}|", cells.join("|"))?;
            writeln!(f, "{wall}")?;
        }
        Ok(())
    }
}

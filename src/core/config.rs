//! Fixed rule constants.
//!
//! Dala has a single rule set: a 6×6 board, twelve pieces per player,
//! a 2×2 central block that each player's first two drops must occupy,
//! and a loss once ten pieces have been captured. Everything that depends
//! on those numbers reads them from here.

/// Width and height of the board.
pub const BOARD_SIZE: usize = 6;

/// Pieces each player starts with in reserve.
pub const PIECES_PER_PLAYER: u8 = 12;

/// Number of opening drops that must land in the central block.
pub const OPENING_DROPS: u8 = 2;

/// While a player's reserve is above this, their drops must be central.
pub const OPENING_RESERVE: u8 = PIECES_PER_PLAYER - OPENING_DROPS;

/// A player who has lost this many pieces loses the game.
pub const LOSS_THRESHOLD: u8 = PIECES_PER_PLAYER - 2;

/// Exact length of a run that triggers a capture.
pub const RUN_LENGTH: usize = 3;

/// Lowest row/column index of the central block.
pub const CENTRAL_LOW: i32 = (BOARD_SIZE / 2) as i32 - 1;

/// Highest row/column index of the central block.
pub const CENTRAL_HIGH: i32 = (BOARD_SIZE / 2) as i32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_constants() {
        assert_eq!(OPENING_RESERVE, 10);
        assert_eq!(LOSS_THRESHOLD, 10);
        assert_eq!((CENTRAL_LOW, CENTRAL_HIGH), (2, 3));
    }
}

//! Rejections of an attempted command.
//!
//! Every variant except `GameOver` means the command was refused and the
//! state is unchanged; the caller should ask for another move. `GameOver`
//! is returned by the command that captured the loser's tenth piece, and
//! that command's effects are kept.

use crate::core::{Player, Position};

/// Errors returned by `drop_piece`, `move_piece`, and `apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum MoveError {
    #[error("not your turn")]
    NotYourTurn,

    #[error("position out of scope: {0}")]
    IllegalPosition(Position),

    #[error("position already occupied: {0}")]
    AlreadyOccupied(Position),

    #[error("central positions must be occupied first")]
    CentralNotOccupied,

    #[error("illegal movement from {from} to {to}: {reason}")]
    IllegalMovement {
        from: Position,
        to: Position,
        reason: MovementError,
    },

    #[error("no pieces left to drop")]
    NoPiecesLeft,

    #[error("must drop first")]
    MustDropFirst,

    #[error("must capture")]
    MustCapture,

    #[error("must not capture")]
    MustNotCapture,

    #[error("illegal capture position: {0}")]
    IllegalCapturePosition(Position),

    #[error("game over, {winner} wins")]
    GameOver { winner: Player },
}

/// Why a move failed the movability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum MovementError {
    #[error("no piece of the mover at the source")]
    NoPiece,

    #[error("could not stay at the same place")]
    SamePlace,

    #[error("could not move that far")]
    TooFar,
}

impl MoveError {
    /// Check whether this is the end-of-game signal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, MoveError::GameOver { .. })
    }

    /// Check whether the command was refused during capture reconciliation.
    #[must_use]
    pub const fn is_capture_error(&self) -> bool {
        matches!(
            self,
            MoveError::MustCapture | MoveError::MustNotCapture | MoveError::IllegalCapturePosition(_)
        )
    }

    /// The winner carried by `GameOver`.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        match self {
            MoveError::GameOver { winner } => Some(*winner),
            _ => None,
        }
    }
}

//! Action representation.
//!
//! An action is one of the two commands a player can issue, together with
//! the capture square it nominates (if any). Actions are plain values: they
//! are produced by `GameState::legal_actions` and consumed by
//! `GameState::apply`.
//!
//! ```
//! use dala::core::{Action, Position};
//!
//! let drop = Action::drop_at(Position::new(2, 2));
//! assert_eq!(drop.capture(), None);
//!
//! let slide = Action::move_from(Position::new(3, 1), Position::new(3, 0))
//!     .with_capture(Position::new(0, 2));
//! assert_eq!(slide.capture(), Some(Position::new(0, 2)));
//! ```

use super::position::Position;

/// A complete command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Place a piece from reserve.
    Drop {
        position: Position,
        capture: Option<Position>,
    },
    /// Slide a piece one step orthogonally.
    Move {
        source: Position,
        destination: Position,
        capture: Option<Position>,
    },
}

impl Action {
    /// A drop with no capture.
    #[must_use]
    pub const fn drop_at(position: Position) -> Self {
        Action::Drop {
            position,
            capture: None,
        }
    }

    /// A move with no capture.
    #[must_use]
    pub const fn move_from(source: Position, destination: Position) -> Self {
        Action::Move {
            source,
            destination,
            capture: None,
        }
    }

    /// The same action nominating `target` as the capture square.
    #[must_use]
    pub const fn with_capture(self, target: Position) -> Self {
        match self {
            Action::Drop { position, .. } => Action::Drop {
                position,
                capture: Some(target),
            },
            Action::Move {
                source,
                destination,
                ..
            } => Action::Move {
                source,
                destination,
                capture: Some(target),
            },
        }
    }

    /// The nominated capture square.
    #[must_use]
    pub const fn capture(&self) -> Option<Position> {
        match self {
            Action::Drop { capture, .. } | Action::Move { capture, .. } => *capture,
        }
    }

    /// Check whether this is a drop.
    #[must_use]
    pub const fn is_drop(&self) -> bool {
        matches!(self, Action::Drop { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Drop { position, .. } => write!(f, "drop {position}")?,
            Action::Move {
                source,
                destination,
                ..
            } => write!(f, "move {source} -> {destination}")?,
        }
        if let Some(target) = self.capture() {
            write!(f, " x {target}")?;
        }
        Ok(())
    }
}

//! # dala
//!
//! Rule engine for Dala, a two-player three-in-a-row capture game on a 6×6
//! board.
//!
//! ## Rules in brief
//!
//! - Each player has twelve pieces. Play starts in the **drop** phase: on
//!   your turn you place a piece from reserve on any empty cell. Each
//!   player's first two drops must go in the 2×2 central block.
//! - Once your reserve is empty you **move**: slide one of your pieces one
//!   step up, down, left, or right onto an empty cell.
//! - Forming a run of exactly three of your pieces in a row or column
//!   captures one opponent piece of your choice. A move also captures when
//!   the cell it vacates borders a run of exactly three of your pieces.
//! - A player who loses ten pieces loses the game.
//!
//! ## Example
//!
//! ```
//! use dala::{GameMode, GameState, MoveError, Player, Position, Turn};
//!
//! let mut game = GameState::new();
//! game.drop_piece(Player::Zero, Position::new(2, 2), None).unwrap();
//! assert_eq!(game.whos_turn(), Turn::Player(Player::One));
//!
//! // Rejected commands leave the game untouched.
//! let before = game;
//! assert_eq!(
//!     game.drop_piece(Player::One, Position::new(0, 0), None),
//!     Err(MoveError::CentralNotOccupied)
//! );
//! assert_eq!(game, before);
//! assert_eq!(game.game_mode(), GameMode::Drop);
//! ```
//!
//! ## Modules
//!
//! - `core`: players, positions, board, actions, state, rule constants
//! - `rules`: the drop/move commands, capture detection, legal actions

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, Board, Cell, GameMode, GameState, GameStateBuilder, Player, PlayerMap, Position,
    Turn,
};

pub use crate::rules::{MoveError, MovementError};

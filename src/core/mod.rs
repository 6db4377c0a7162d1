//! Core game types: players, positions, board, actions, state, constants.
//!
//! This module is pure data. Every rule that changes a `GameState` lives in
//! `rules`.

pub mod config;
pub mod player;
pub mod position;
pub mod board;
pub mod action;
pub mod state;

pub use player::{Player, PlayerMap, Turn};
pub use position::Position;
pub use board::{Board, Cell, Line, ParseBoardError};
pub use action::Action;
pub use state::{GameMode, GameState, GameStateBuilder};

//! The Dala rule engine.
//!
//! Everything that changes a `GameState` is here:
//! - `drop_piece` / `move_piece` / `apply`: validated, transactional commands
//! - Capture detection shared by both commands
//! - Legal action enumeration
//!
//! Rejected commands leave the state unchanged. The command that ends the
//! game returns `MoveError::GameOver` and keeps its effects.

pub mod capture;
pub mod engine;
pub mod error;
pub mod legal;

pub use error::{MoveError, MovementError};

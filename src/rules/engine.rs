//! The drop and move commands.
//!
//! Each command validates its arguments in a fixed order, applies itself
//! tentatively, evaluates the capture condition, and then reconciles the
//! caller's capture square against it. Tentative writes go through a
//! `Tentative` record so that every rejection restores exactly the cells
//! and counters that were touched. The one outcome that keeps its writes is
//! `GameOver`: the capture that ends the game stays on the board.

use smallvec::SmallVec;

use super::capture::{is_drop_capture, is_move_capture};
use super::error::{MoveError, MovementError};
use crate::core::config::{LOSS_THRESHOLD, OPENING_RESERVE};
use crate::core::{Action, Cell, GameState, Player, PlayerMap, Position, Turn};

/// Saved cells and reserves for one tentative command.
struct Tentative {
    cells: SmallVec<[(Position, Cell); 2]>,
    remains: PlayerMap<u8>,
}

impl Tentative {
    fn begin(state: &GameState) -> Self {
        Self {
            cells: SmallVec::new(),
            remains: state.remains,
        }
    }

    /// Write a cell, remembering what it held.
    fn set(&mut self, state: &mut GameState, position: Position, cell: Cell) {
        if let Some(previous) = state.board.get(position) {
            self.cells.push((position, previous));
            state.board.set(position, cell);
        }
    }

    fn rollback(self, state: &mut GameState) {
        for (position, cell) in self.cells.into_iter().rev() {
            state.board.set(position, cell);
        }
        state.remains = self.remains;
    }
}

impl GameState {
    /// Drop one of `player`'s reserve pieces at `position`.
    ///
    /// `capture` must name an opponent piece exactly when the drop completes
    /// a run of three, and must be `None` otherwise.
    ///
    /// # Errors
    ///
    /// Checks run in this order and the first failure is returned with the
    /// state unchanged: `NotYourTurn`, `IllegalPosition`, `AlreadyOccupied`,
    /// `CentralNotOccupied` (first two drops only), `NoPiecesLeft`, then the
    /// capture checks `MustCapture`, `IllegalCapturePosition`,
    /// `MustNotCapture`.
    ///
    /// Returns `GameOver` when the capture takes the opponent's tenth piece.
    /// In that case the drop and capture are kept and the game is over.
    pub fn drop_piece(
        &mut self,
        player: Player,
        position: Position,
        capture: Option<Position>,
    ) -> Result<(), MoveError> {
        self.check_turn(player)?;

        let opening = self.remains[player] > OPENING_RESERVE;
        self.check_target(position)?;
        if opening && !position.is_central() {
            return Err(MoveError::CentralNotOccupied);
        }

        if self.remains[player] == 0 {
            return Err(MoveError::NoPiecesLeft);
        }

        let mut tentative = Tentative::begin(self);
        tentative.set(self, position, Cell::Owner(player));
        self.remains[player] -= 1;

        let captured = is_drop_capture(&self.board, player, position);
        self.resolve(player, tentative, captured, capture)
    }

    /// Slide `player`'s piece from `source` one step to `destination`.
    ///
    /// The move captures when the piece completes a run of three at
    /// `destination`, or when the vacated `source` now borders a run of
    /// exactly three of the mover's pieces.
    ///
    /// # Errors
    ///
    /// Checks run in this order and the first failure is returned with the
    /// state unchanged: `NotYourTurn`, `IllegalPosition` (source, then
    /// destination), `AlreadyOccupied`, `IllegalMovement`, `MustDropFirst`,
    /// then the capture checks as for [`GameState::drop_piece`].
    ///
    /// Returns `GameOver` when the capture takes the opponent's tenth piece.
    pub fn move_piece(
        &mut self,
        player: Player,
        source: Position,
        destination: Position,
        capture: Option<Position>,
    ) -> Result<(), MoveError> {
        self.check_turn(player)?;
        if !source.in_bounds() {
            return Err(MoveError::IllegalPosition(source));
        }
        self.check_target(destination)?;
        self.check_movable(player, source, destination)?;

        if self.remains[player] > 0 {
            return Err(MoveError::MustDropFirst);
        }

        let mut tentative = Tentative::begin(self);
        tentative.set(self, source, Cell::Empty);
        tentative.set(self, destination, Cell::Owner(player));

        let captured = is_move_capture(&self.board, player, source, destination);
        self.resolve(player, tentative, captured, capture)
    }

    /// Apply an action on behalf of `player`.
    ///
    /// # Errors
    ///
    /// As for [`GameState::drop_piece`] and [`GameState::move_piece`].
    pub fn apply(&mut self, player: Player, action: &Action) -> Result<(), MoveError> {
        match *action {
            Action::Drop { position, capture } => self.drop_piece(player, position, capture),
            Action::Move {
                source,
                destination,
                capture,
            } => self.move_piece(player, source, destination, capture),
        }
    }

    // === Validation ===

    fn check_turn(&self, player: Player) -> Result<(), MoveError> {
        if self.turn == Turn::Player(player) {
            Ok(())
        } else {
            Err(MoveError::NotYourTurn)
        }
    }

    /// The target of a drop or move must be on the board and empty.
    fn check_target(&self, position: Position) -> Result<(), MoveError> {
        match self.board.get(position) {
            None => Err(MoveError::IllegalPosition(position)),
            Some(Cell::Empty) => Ok(()),
            Some(Cell::Owner(_)) => Err(MoveError::AlreadyOccupied(position)),
        }
    }

    fn check_movable(
        &self,
        player: Player,
        source: Position,
        destination: Position,
    ) -> Result<(), MoveError> {
        let reason = if self.board.get(source) != Some(Cell::Owner(player)) {
            MovementError::NoPiece
        } else if source == destination {
            MovementError::SamePlace
        } else if source.manhattan_distance(destination) != 1 {
            MovementError::TooFar
        } else {
            return Ok(());
        };

        Err(MoveError::IllegalMovement {
            from: source,
            to: destination,
            reason,
        })
    }

    fn check_capture(
        &self,
        player: Player,
        captured: bool,
        capture: Option<Position>,
    ) -> Result<(), MoveError> {
        match (captured, capture) {
            (true, None) => Err(MoveError::MustCapture),
            (true, Some(target)) => {
                if self.board.get(target) == Some(Cell::Owner(player.opponent())) {
                    Ok(())
                } else {
                    Err(MoveError::IllegalCapturePosition(target))
                }
            }
            (false, Some(_)) => Err(MoveError::MustNotCapture),
            (false, None) => Ok(()),
        }
    }

    // === Resolution ===

    /// Reconcile the capture square, then commit or roll back.
    fn resolve(
        &mut self,
        player: Player,
        tentative: Tentative,
        captured: bool,
        capture: Option<Position>,
    ) -> Result<(), MoveError> {
        if let Err(err) = self.check_capture(player, captured, capture) {
            tentative.rollback(self);
            log::trace!("{player} rejected: {err}");
            return Err(err);
        }

        if let Some(target) = capture.filter(|_| captured) {
            self.take(player, target)?;
        }

        self.turn = Turn::Player(player.opponent());
        Ok(())
    }

    /// Remove the opponent's piece at `target` and end the game if that was
    /// their tenth loss.
    fn take(&mut self, player: Player, target: Position) -> Result<(), MoveError> {
        let opponent = player.opponent();
        self.board.set(target, Cell::Empty);
        self.lost[opponent] += 1;
        log::debug!(
            "{player} captured at {target}, {opponent} has lost {}",
            self.lost[opponent]
        );

        if self.lost[opponent] >= LOSS_THRESHOLD {
            self.turn = Turn::GameEnded;
            log::debug!("game over, {player} wins");
            return Err(MoveError::GameOver { winner: player });
        }

        Ok(())
    }
}

//! Legal action enumeration.
//!
//! Candidates are built in two steps, the way an action is built from a
//! command and then its capture square: first every drop or single-step move
//! the mover could try, then, for candidates that demand a capture, one
//! action per opponent piece. Each candidate is checked by applying it to a
//! copy of the state, so enumeration and the commands cannot disagree.

use super::error::MoveError;
use crate::core::config::OPENING_RESERVE;
use crate::core::{Action, GameMode, GameState, Player};

impl GameState {
    /// Every action the current mover can legally take.
    ///
    /// Empty once the game has ended. Ordered row-major by the square the
    /// command starts from, then by capture square.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let Some(player) = self.turn.player() else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        for candidate in self.candidate_actions(player) {
            self.expand_captures(player, candidate, &mut actions);
        }
        actions
    }

    /// Check whether `player` may take `action` now, without changing state.
    #[must_use]
    pub fn is_legal(&self, player: Player, action: &Action) -> bool {
        let mut trial = *self;
        matches!(
            trial.apply(player, action),
            Ok(()) | Err(MoveError::GameOver { .. })
        )
    }

    /// Capture-less commands worth trying for the current mode.
    fn candidate_actions(&self, player: Player) -> Vec<Action> {
        match self.game_mode() {
            GameMode::End => Vec::new(),
            GameMode::Drop => {
                let opening = self.remains[player] > OPENING_RESERVE;
                self.board
                    .empty_positions()
                    .filter(|p| !opening || p.is_central())
                    .map(Action::drop_at)
                    .collect()
            }
            GameMode::Move => {
                let board = &self.board;
                board
                    .positions_of(player)
                    .flat_map(|source| {
                        source
                            .neighbors()
                            .filter(move |&d| board.is_empty_at(d))
                            .map(move |destination| Action::move_from(source, destination))
                    })
                    .collect()
            }
        }
    }

    /// Push `candidate` if it is legal as is, or one action per opponent
    /// piece if it has to capture.
    fn expand_captures(&self, player: Player, candidate: Action, out: &mut Vec<Action>) {
        let mut trial = *self;
        match trial.apply(player, &candidate) {
            Ok(()) | Err(MoveError::GameOver { .. }) => out.push(candidate),
            Err(MoveError::MustCapture) => out.extend(
                self.board
                    .positions_of(player.opponent())
                    .map(|target| candidate.with_capture(target)),
            ),
            Err(_) => {}
        }
    }
}

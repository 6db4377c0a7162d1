//! Game state: board, reserves, losses, and whose turn it is.
//!
//! ## GameState
//!
//! The aggregate every rule operates on. It is a small `Copy` value, so
//! speculative evaluation is just a copy:
//!
//! ```
//! use dala::core::{GameState, Player, Position};
//!
//! let state = GameState::new();
//! let mut what_if = state;
//! what_if.drop_piece(Player::Zero, Position::new(2, 2), None).unwrap();
//!
//! assert_eq!(state.remains(Player::Zero), 12);
//! assert_eq!(what_if.remains(Player::Zero), 11);
//! ```
//!
//! Equality compares board, reserves, losses, and turn. Rejected commands
//! leave a state equal to its value before the call.
//!
//! ## GameStateBuilder
//!
//! Reconstructs a state from explicit parts for fixtures and resumed games.
//! Nothing is validated.

use super::board::Board;
use super::config::{LOSS_THRESHOLD, PIECES_PER_PLAYER};
use super::player::{Player, PlayerMap, Turn};
use super::position::Position;

/// Current phase of play, derived from reserves and losses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// The mover still has pieces in reserve.
    Drop,
    /// The mover's reserve is empty; pieces slide.
    Move,
    /// A winner exists.
    End,
}

/// Complete game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) remains: PlayerMap<u8>,
    pub(crate) lost: PlayerMap<u8>,
    pub(crate) turn: Turn,
}

impl GameState {
    /// Create a fresh game: empty board, full reserves, player zero to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            remains: PlayerMap::with_value(PIECES_PER_PLAYER),
            lost: PlayerMap::with_value(0),
            turn: Turn::Player(Player::Zero),
        }
    }

    /// Reconstruct a state from explicit parts.
    ///
    /// `remains` and `lost` are indexed by raw player index. Callers are
    /// trusted; no invariant is checked.
    #[must_use]
    pub fn from_parts(board: Board, remains: [u8; 2], lost: [u8; 2], turn: Turn) -> Self {
        Self {
            board,
            remains: remains.into(),
            lost: lost.into(),
            turn,
        }
    }

    /// Start building a state from explicit parts.
    #[must_use]
    pub fn builder() -> GameStateBuilder {
        GameStateBuilder::new()
    }

    // === Queries ===

    /// The player to move, or `Turn::GameEnded`.
    #[must_use]
    pub fn whos_turn(&self) -> Turn {
        self.turn
    }

    /// The player after the current turn.
    #[must_use]
    pub fn next_turn(&self) -> Player {
        self.turn.next()
    }

    /// Pieces `player` may still drop.
    #[must_use]
    pub fn remains(&self, player: Player) -> u8 {
        self.remains[player]
    }

    /// Pieces `player` has had captured.
    #[must_use]
    pub fn lost(&self, player: Player) -> u8 {
        self.lost[player]
    }

    /// A copy of the board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Pieces `player` currently has on the board.
    #[must_use]
    pub fn pieces_on_board(&self, player: Player) -> usize {
        self.board.count(player)
    }

    /// Current phase of play.
    ///
    /// `End` once a winner exists (or the turn marker says the game ended),
    /// otherwise `Drop` while the mover has reserve left, else `Move`.
    #[must_use]
    pub fn game_mode(&self) -> GameMode {
        if self.winner().is_some() {
            return GameMode::End;
        }

        match self.turn {
            Turn::GameEnded => GameMode::End,
            Turn::Player(p) if self.remains[p] > 0 => GameMode::Drop,
            Turn::Player(_) => GameMode::Move,
        }
    }

    /// The winner: the opponent of the first player to lose ten pieces.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        Player::ALL
            .into_iter()
            .find(|&p| self.lost[p] >= LOSS_THRESHOLD)
            .map(Player::opponent)
    }

    /// Check whether a position lies in the 2×2 central block.
    #[must_use]
    pub fn is_central_position(&self, position: Position) -> bool {
        position.is_central()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  = Dala Game =")?;
        writeln!(f)?;
        write!(f, "{}", self.board)?;
        writeln!(f)?;
        for (player, remains) in self.remains.iter() {
            writeln!(
                f,
                "{} : {} pieces remain / {} pieces lost",
                player.symbol(),
                remains,
                self.lost[player]
            )?;
        }
        match self.turn {
            Turn::Player(p) => write!(f, "\n{}'s turn", p.symbol()),
            Turn::GameEnded => match self.winner() {
                Some(p) => write!(f, "\n{} wins", p.symbol()),
                None => write!(f, "\ngame over"),
            },
        }
    }
}

/// Builder for reconstructing a `GameState`.
///
/// ```
/// use dala::core::{GameMode, GameState, Player};
///
/// let state = GameState::builder()
///     .board_text(
///         "
///         ..XOX.
///         .XOOX.
///         XOOXO.
///         .OXOOX
///         .XOOX.
///         .XOX..
///         ",
///     )
///     .unwrap()
///     .remains([0, 0])
///     .build();
///
/// assert_eq!(state.game_mode(), GameMode::Move);
/// assert_eq!(state.pieces_on_board(Player::Zero), 12);
/// ```
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    board: Board,
    remains: [u8; 2],
    lost: [u8; 2],
    turn: Turn,
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self {
            board: Board::new(),
            remains: [PIECES_PER_PLAYER; 2],
            lost: [0; 2],
            turn: Turn::Player(Player::Zero),
        }
    }
}

impl GameStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Parse the board from text (see [`Board`]).
    pub fn board_text(
        mut self,
        text: &str,
    ) -> Result<Self, super::board::ParseBoardError> {
        self.board = text.parse()?;
        Ok(self)
    }

    pub fn remains(mut self, remains: [u8; 2]) -> Self {
        self.remains = remains;
        self
    }

    pub fn lost(mut self, lost: [u8; 2]) -> Self {
        self.lost = lost;
        self
    }

    pub fn turn(mut self, turn: impl Into<Turn>) -> Self {
        self.turn = turn.into();
        self
    }

    pub fn build(self) -> GameState {
        GameState::from_parts(self.board, self.remains, self.lost, self.turn)
    }
}

//! Player identification, turn marker, and per-player data storage.
//!
//! ## Player
//!
//! Dala is strictly two-player, so `Player` is a closed enum rather than
//! a numeric id. There is no way to name a third player.
//!
//! ## Turn
//!
//! Whose turn it is, or `GameEnded` once a winner exists. The ended state is
//! a separate variant so it can never compare equal to a real player.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`.

use std::ops::{Index, IndexMut};

/// One of the two players. Player zero moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    Zero,
    One,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::Zero, Player::One];

    /// Get the raw player index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Zero => 0,
            Player::One => 1,
        }
    }

    /// Look up a player by raw index. Anything other than 0 or 1 is `None`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Player> {
        match index {
            0 => Some(Player::Zero),
            1 => Some(Player::One),
            _ => None,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::Zero => Player::One,
            Player::One => Player::Zero,
        }
    }

    /// Board symbol used by the text rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::Zero => 'O',
            Player::One => 'X',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index())
    }
}

/// Whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// The game is ongoing and this player moves next.
    Player(Player),
    /// A winner exists; no further command can succeed.
    GameEnded,
}

impl Turn {
    /// The player to move, or `None` once the game has ended.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Turn::Player(p) => Some(p),
            Turn::GameEnded => None,
        }
    }

    /// Check whether the game has ended.
    #[must_use]
    pub const fn is_ended(self) -> bool {
        matches!(self, Turn::GameEnded)
    }

    /// The player after this turn.
    ///
    /// Defined after the game ends as well: the ended marker is followed by
    /// player zero.
    #[must_use]
    pub const fn next(self) -> Player {
        match self {
            Turn::Player(p) => p.opponent(),
            Turn::GameEnded => Player::Zero,
        }
    }
}

impl From<Player> for Turn {
    fn from(player: Player) -> Self {
        Turn::Player(player)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use dala::core::{Player, PlayerMap};
///
/// let mut remains = PlayerMap::with_value(12u8);
/// remains[Player::One] -= 1;
/// assert_eq!(remains[Player::Zero], 12);
/// assert_eq!(remains[Player::One], 11);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map from per-player values, indexed by raw player index.
    pub const fn new(data: [T; 2]) -> Self {
        Self { data }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }

    /// Consume the map and return the raw array.
    pub fn into_array(self) -> [T; 2] {
        self.data
    }
}

impl<T> From<[T; 2]> for PlayerMap<T> {
    fn from(data: [T; 2]) -> Self {
        Self::new(data)
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

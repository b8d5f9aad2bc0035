//! Neutreeko rules.
//!
//! - `movegen`: sliding-move destinations
//! - `win`: three-in-a-row detection
//! - `repetition`: threefold-repetition draw tracking
//!
//! All of these read a `Board`; none mutate it.

pub mod movegen;
pub mod repetition;
pub mod win;

pub use movegen::{legal_destinations, legal_moves, slide_destinations, Destinations};
pub use repetition::RepetitionTracker;
pub use win::{has_won, winning_line};

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Where a game stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    /// Terminal: the player aligned three pieces.
    Won(Player),
    /// Terminal: a position occurred for the third time.
    Draw,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self == GameStatus::Won(player)
    }

    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(player) => write!(f, "{player} won"),
            GameStatus::Draw => write!(f, "draw by repetition"),
        }
    }
}

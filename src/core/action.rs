//! Move representation.
//!
//! A `Move` is what a player asks for: which of their pieces, and where it
//! should end up. The mover is implied by whose turn it is. A `MoveRecord`
//! is what the engine logs once a move has been committed.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::position::Position;

/// A requested move: piece index plus destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Index into the mover's piece list.
    pub piece: usize,

    /// Target cell.
    pub destination: Position,
}

impl Move {
    #[must_use]
    pub const fn new(piece: usize, destination: Position) -> Self {
        Self { piece, destination }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "piece {} -> {}", self.piece, self.destination)
    }
}

/// A committed move with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based half-move number.
    pub ply: u32,

    /// The player who moved.
    pub player: Player,

    /// Index of the piece that moved.
    pub piece: usize,

    pub from: Position,
    pub to: Position,
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}: {} -> {}", self.ply, self.player, self.from, self.to)
    }
}

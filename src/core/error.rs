//! Error types.
//!
//! Rejected moves and submissions after the game ended are ordinary,
//! recoverable results: nothing is mutated and the caller may try again.
//! Committing a move that skipped validation is a caller bug and panics
//! inside [`Board::apply_move`](crate::board::Board::apply_move) instead.

use thiserror::Error;

use super::player::Player;
use super::position::Position;
use crate::rules::GameStatus;

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("it is {expected}'s turn, not {actual}'s")]
    NotYourTurn { expected: Player, actual: Player },

    #[error("no piece with index {0}")]
    NoSuchPiece(usize),

    #[error("{destination} cannot be reached from {from}")]
    Unreachable { from: Position, destination: Position },
}

/// Errors returned by the game engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),

    #[error("game is over: {0}")]
    InvalidState(GameStatus),

    #[error("{0} has no legal move")]
    NoLegalMove(Player),
}

/// Coarse classification of a [`GameError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidMove,
    InvalidState,
}

impl GameError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidMove(_) | GameError::NoLegalMove(_) => ErrorKind::InvalidMove,
            GameError::InvalidState(_) => ErrorKind::InvalidState,
        }
    }
}

/// A board layout that breaks the occupancy rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("{0} is off the board")]
    OffBoard(Position),

    #[error("{0} holds more than one piece")]
    Overlap(Position),

    #[error("grid and piece list disagree at {0}")]
    Inconsistent(Position),
}

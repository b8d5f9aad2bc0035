//! Core value types: positions, players, moves, RNG, configuration and errors.
//!
//! Everything here is game-rule agnostic plumbing. The rules themselves
//! live in `rules`, the mutable board in `board`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;

pub use action::{Move, MoveRecord};
pub use config::{
    GameConfig, Placement, BOARD_SIZE, CELL_COUNT, PIECES_PER_PLAYER, REPETITION_LIMIT, WIN_LENGTH,
};
pub use error::{BoardError, ErrorKind, GameError, InvalidMove};
pub use player::{Player, PlayerMap};
pub use position::{Direction, Position};
pub use rng::GameRng;

//! # neutreeko
//!
//! Rules engine for Neutreeko: two players, three pieces each, a 5x5 board.
//!
//! ## Rules
//!
//! 1. **Sliding moves**: a piece moves any number of empty cells along a
//!    row, column or diagonal. It cannot jump or capture.
//!
//! 2. **Alignment win**: the mover wins by placing three of their pieces
//!    on consecutive cells of one line.
//!
//! 3. **Repetition draw**: the game is drawn when the same board occupancy
//!    is reached by a move for the third time.
//!
//! ## Architecture
//!
//! - **Single source of truth**: `Board` keeps the grid authoritative and
//!   the per-player piece lists in step with it.
//!
//! - **Deterministic setup**: openings come from a seeded RNG, so any game
//!   can be replayed from its seed.
//!
//! - **No rendering**: presentation layers read `GameSnapshot`s and feed
//!   moves back through `GameEngine::submit_move` or `Interaction`.
//!
//! ## Modules
//!
//! - `core`: positions, players, moves, RNG, configuration, errors
//! - `board`: grid state and position signatures
//! - `rules`: move generation, win detection, repetition tracking
//! - `game`: the engine and click-to-move interaction
//! - `opponent`: pluggable move-selection policies
//!
//! ## Example
//!
//! ```
//! use neutreeko::{new_game, GameStatus};
//!
//! let mut game = new_game(Some(7));
//! let player = game.current_player();
//! let mv = game.legal_moves()[0];
//! let state = game.submit_move(player, mv.piece, mv.destination).unwrap();
//! assert_ne!(state.status, GameStatus::Draw);
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod opponent;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardError, Direction, ErrorKind, GameConfig, GameError, GameRng, InvalidMove, Move,
    MoveRecord, Placement, Player, PlayerMap, Position,
};

pub use crate::board::{Board, Cell, Signature};

pub use crate::rules::{GameStatus, RepetitionTracker};

pub use crate::game::{ClickOutcome, GameEngine, GameSnapshot, Interaction, Selection};

pub use crate::opponent::{FirstLegalMove, OpponentPolicy, UniformOpponent};

/// Start a game with a random opening. Pass a seed for a reproducible one.
#[must_use]
pub fn new_game(seed: Option<u64>) -> GameEngine {
    GameEngine::random(seed)
}

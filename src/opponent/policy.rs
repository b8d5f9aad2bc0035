//! Policies that choose a move for automated play.
//!
//! The engine never decides how a computer player moves; it asks an
//! `OpponentPolicy`. None of the policies here search or evaluate
//! positions.

use crate::board::Board;
use crate::core::{GameRng, Move, Player, PIECES_PER_PLAYER};
use crate::rules::{legal_destinations, legal_moves};

/// Chooses a move for `player` on `board`.
pub trait OpponentPolicy: Send + Sync {
    /// Pick a legal move, or `None` if `player` cannot move.
    fn choose_move(&self, board: &Board, player: Player, rng: &mut GameRng) -> Option<Move>;
}

/// Takes the first legal move found.
///
/// Scans pieces in index order and, for each, directions in
/// [`Direction::ALL`](crate::core::Direction::ALL) order, returning the
/// nearest empty cell of the first open direction. This is a fixed scan,
/// not a strategy: it plays predictably and poorly.
#[derive(Clone, Debug, Default)]
pub struct FirstLegalMove;

impl OpponentPolicy for FirstLegalMove {
    fn choose_move(&self, board: &Board, player: Player, _rng: &mut GameRng) -> Option<Move> {
        (0..PIECES_PER_PLAYER).find_map(|piece| {
            legal_destinations(board, player, piece)
                .and_then(|dests| dests.first().copied())
                .map(|destination| Move::new(piece, destination))
        })
    }
}

/// Uniform random opponent policy.
///
/// Selects uniformly from all legal moves.
#[derive(Clone, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose_move(&self, board: &Board, player: Player, rng: &mut GameRng) -> Option<Move> {
        rng.choose(&legal_moves(board, player)).copied()
    }
}

/// Adapter turning a plain function into a policy.
///
/// ```
/// use neutreeko::opponent::{from_fn, OpponentPolicy};
/// use neutreeko::rules::legal_moves;
///
/// let last = from_fn(|board, player| legal_moves(board, player).pop());
/// # let _ = &last as &dyn OpponentPolicy;
/// ```
#[derive(Clone, Debug)]
pub struct FnPolicy<F>(pub F);

/// Wrap `f` as an [`OpponentPolicy`].
pub fn from_fn<F>(f: F) -> FnPolicy<F>
where
    F: Fn(&Board, Player) -> Option<Move> + Send + Sync,
{
    FnPolicy(f)
}

impl<F> OpponentPolicy for FnPolicy<F>
where
    F: Fn(&Board, Player) -> Option<Move> + Send + Sync,
{
    fn choose_move(&self, board: &Board, player: Player, _rng: &mut GameRng) -> Option<Move> {
        (self.0)(board, player)
    }
}

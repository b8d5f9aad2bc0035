//! Sliding-move generation.
//!
//! A piece moves any number of empty cells along one of the 8 directions
//! and may stop on any of them. It never jumps or captures: the first
//! occupied or off-board cell ends the ray and is not itself a destination.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Direction, Move, Player, Position, PIECES_PER_PLAYER};

/// Destinations for one piece. A queen-like slider on a 5x5 board reaches
/// at most 16 cells, so this never spills to the heap.
pub type Destinations = SmallVec<[Position; 16]>;

/// Every empty cell reachable from `from` by an unobstructed straight line.
///
/// Directions follow [`Direction::ALL`]; within a direction, nearer cells
/// come first.
#[must_use]
pub fn slide_destinations(board: &Board, from: Position) -> Destinations {
    let mut out = Destinations::new();
    for direction in Direction::ALL {
        let mut next = from.add(direction);
        while next.is_on_board() && board.is_empty(next) {
            out.push(next);
            next = next.add(direction);
        }
    }
    out
}

/// Legal destinations for one of `player`'s pieces, or `None` if `piece`
/// is not a valid index.
#[must_use]
pub fn legal_destinations(board: &Board, player: Player, piece: usize) -> Option<Destinations> {
    board
        .piece(player, piece)
        .map(|from| slide_destinations(board, from))
}

/// All legal moves for `player`, piece by piece.
#[must_use]
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    (0..PIECES_PER_PLAYER)
        .flat_map(|piece| {
            legal_destinations(board, player, piece)
                .unwrap_or_default()
                .into_iter()
                .map(move |destination| Move::new(piece, destination))
        })
        .collect()
}

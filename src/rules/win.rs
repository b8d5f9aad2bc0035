//! Alignment win detection.

use crate::board::Board;
use crate::core::{Direction, Player, Position, WIN_LENGTH};

/// The first run of `WIN_LENGTH` consecutive cells held by `player`, found
/// by walking outward from each of their pieces in every direction.
///
/// Every line is seen twice (once from each end); that redundancy is
/// harmless.
#[must_use]
pub fn winning_line(board: &Board, player: Player) -> Option<[Position; WIN_LENGTH]> {
    for &start in board.pieces(player) {
        for direction in Direction::ALL {
            let mut line = [start; WIN_LENGTH];
            let mut owned = true;
            for step in 1..WIN_LENGTH {
                let next = line[step - 1].add(direction);
                if board.owner(next) != Some(player) {
                    owned = false;
                    break;
                }
                line[step] = next;
            }
            if owned {
                return Some(line);
            }
        }
    }
    None
}

/// True iff `player` holds three consecutive cells on a row, column or
/// diagonal.
#[must_use]
pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

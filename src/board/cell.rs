//! Cell contents and the position signature used for repetition checks.

use serde::{Deserialize, Serialize};

use crate::core::{Player, CELL_COUNT};

/// What occupies a grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Owned(Player),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }

    /// Two-bit code used by [`Signature`].
    const fn code(self) -> u64 {
        match self {
            Cell::Empty => 0,
            Cell::Owned(Player::One) => 1,
            Cell::Owned(Player::Two) => 2,
        }
    }

    /// Character used by the board's `Display`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Owned(Player::One) => '1',
            Cell::Owned(Player::Two) => '2',
        }
    }
}

/// Canonical encoding of full board occupancy.
///
/// Two bits per cell, row-major, so 25 cells fit in 50 bits. Boards with
/// the same occupancy always produce the same value, whatever moves led
/// there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Signature(u64);

impl Signature {
    /// Encode a row-major grid.
    #[must_use]
    pub fn from_cells(cells: &[Cell; CELL_COUNT]) -> Self {
        let packed = cells
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, cell)| acc | (cell.code() << (2 * i)));
        Self(packed)
    }

    /// Raw packed value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

//! Grid coordinates and the eight sliding directions.
//!
//! `Position` is a plain value type. Adding a `Direction` may step off the
//! board; callers check `is_on_board()` before using the result.

use serde::{Deserialize, Serialize};

use super::config::{BOARD_SIZE, CELL_COUNT};

/// A cell coordinate on the 5x5 grid.
///
/// Coordinates are signed so that stepping past an edge yields an
/// off-board position instead of wrapping.
///
/// ```
/// use neutreeko::core::{Direction, Position};
///
/// let corner = Position::new(0, 0);
/// assert!(corner.is_on_board());
/// assert!(!corner.add(Direction::new(-1, 0)).is_on_board());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Step one cell in `direction`. May leave the board.
    #[must_use]
    pub const fn add(self, direction: Direction) -> Self {
        Self {
            row: self.row + direction.d_row,
            col: self.col + direction.d_col,
        }
    }

    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Row-major index into a 25-cell grid, or `None` when off-board.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.row as usize * BOARD_SIZE as usize + self.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Position::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            let size = BOARD_SIZE as usize;
            Some(Self::new((index / size) as i8, (index % size) as i8))
        } else {
            None
        }
    }

    /// All 25 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).filter_map(Position::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A unit step: one of the 8 king-move vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    /// Every direction, rows outer and columns inner, from (-1, -1) to (1, 1).
    pub const ALL: [Direction; 8] = [
        Direction::new(-1, -1),
        Direction::new(-1, 0),
        Direction::new(-1, 1),
        Direction::new(0, -1),
        Direction::new(0, 1),
        Direction::new(1, -1),
        Direction::new(1, 0),
        Direction::new(1, 1),
    ];

    #[must_use]
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::new(-self.d_row, -self.d_col)
    }

    /// Unit direction from `from` to `to` if they share a row, column or
    /// diagonal and differ.
    #[must_use]
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let d_row = to.row - from.row;
        let d_col = to.col - from.col;
        if (d_row, d_col) == (0, 0) {
            return None;
        }
        if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
            return None;
        }
        Some(Self::new(d_row.signum(), d_col.signum()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_bounds() {
        let p = Position::new(4, 4);
        assert!(p.is_on_board());
        assert_eq!(p.add(Direction::new(0, 1)), Position::new(4, 5));
        assert!(!p.add(Direction::new(0, 1)).is_on_board());
        assert!(!p.add(Direction::new(1, 1)).is_on_board());
        assert_eq!(p.add(Direction::new(-1, -1)), Position::new(3, 3));
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, p) in Position::all().enumerate() {
            assert_eq!(p.index(), Some(i));
            assert_eq!(Position::from_index(i), Some(p));
        }
        assert_eq!(Position::all().count(), 25);
        assert_eq!(Position::from_index(25), None);
        assert_eq!(Position::new(0, 5).index(), None);
        assert_eq!(Position::new(-1, 0).index(), None);
    }

    #[test]
    fn test_directions_are_unique_units() {
        let mut seen = std::collections::HashSet::new();
        for d in Direction::ALL {
            assert_ne!((d.d_row, d.d_col), (0, 0));
            assert!(d.d_row.abs() <= 1 && d.d_col.abs() <= 1);
            assert!(seen.insert(d));
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_direction_between() {
        let a = Position::new(2, 2);
        assert_eq!(Direction::between(a, Position::new(0, 0)), Some(Direction::new(-1, -1)));
        assert_eq!(Direction::between(a, Position::new(2, 4)), Some(Direction::new(0, 1)));
        assert_eq!(Direction::between(a, Position::new(4, 0)), Some(Direction::new(1, -1)));
        assert_eq!(Direction::between(a, Position::new(3, 4)), None);
        assert_eq!(Direction::between(a, a), None);
    }

    #[test]
    fn test_equality_is_by_value() {
        use std::collections::HashSet;
        let set: HashSet<_> = [Position::new(1, 2), Position::new(1, 2)].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert_eq!(Direction::new(1, 0).opposite(), Direction::new(-1, 0));
    }
}

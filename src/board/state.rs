//! The board: a 5x5 grid plus each player's piece locations.
//!
//! The grid is the authoritative store. Piece lists are a cache kept in
//! step by `apply_move`, the only mutation. `validate` checks the two
//! against each other.

use crate::core::{
    BoardError, GameRng, Player, PlayerMap, Position, CELL_COUNT, PIECES_PER_PLAYER,
};

use super::cell::{Cell, Signature};

/// Piece locations for one player, indexed by piece number.
pub type PieceSet = [Position; PIECES_PER_PLAYER];

/// Grid occupancy and piece positions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    pieces: PlayerMap<PieceSet>,
}

impl Board {
    /// Deal a random layout: shuffle all cells, first three go to player
    /// one, the next three to player two.
    #[must_use]
    pub fn random(rng: &mut GameRng) -> Self {
        let mut cells: Vec<Position> = Position::all().collect();
        rng.shuffle(&mut cells);

        let first = [cells[0], cells[1], cells[2]];
        let second = [cells[3], cells[4], cells[5]];
        Self::build(first, second)
    }

    /// Build a board from explicit piece positions.
    pub fn from_pieces(first: PieceSet, second: PieceSet) -> Result<Self, BoardError> {
        let mut seen = [false; CELL_COUNT];
        for pos in first.iter().chain(second.iter()) {
            let index = pos.index().ok_or(BoardError::OffBoard(*pos))?;
            if std::mem::replace(&mut seen[index], true) {
                return Err(BoardError::Overlap(*pos));
            }
        }
        Ok(Self::build(first, second))
    }

    /// Callers guarantee every position is on-board and distinct.
    fn build(first: PieceSet, second: PieceSet) -> Self {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let pieces = PlayerMap::from_values(first, second);
        for (player, set) in pieces.iter() {
            for pos in set {
                if let Some(index) = pos.index() {
                    cells[index] = Cell::Owned(player);
                }
            }
        }
        Self { cells, pieces }
    }

    /// Contents of `pos`, or `None` off the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        pos.index().map(|index| self.cells[index])
    }

    /// Whether an on-board cell is unoccupied.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board. Filter with `is_on_board` first.
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        match pos.index() {
            Some(index) => self.cells[index].is_empty(),
            None => panic!("is_empty called with off-board position {pos}"),
        }
    }

    /// Who owns the piece at `pos`, if anyone.
    #[must_use]
    pub fn owner(&self, pos: Position) -> Option<Player> {
        self.cell(pos).and_then(Cell::owner)
    }

    /// A player's pieces in index order.
    #[must_use]
    pub fn pieces(&self, player: Player) -> &PieceSet {
        &self.pieces[player]
    }

    /// Both players' pieces.
    #[must_use]
    pub fn all_pieces(&self) -> &PlayerMap<PieceSet> {
        &self.pieces
    }

    /// Position of one piece.
    #[must_use]
    pub fn piece(&self, player: Player, index: usize) -> Option<Position> {
        self.pieces[player].get(index).copied()
    }

    /// Index of `player`'s piece standing on `pos`.
    #[must_use]
    pub fn piece_index_at(&self, player: Player, pos: Position) -> Option<usize> {
        self.pieces[player].iter().position(|&p| p == pos)
    }

    /// Move a piece and return where it came from.
    ///
    /// # Panics
    ///
    /// The destination must be an empty on-board cell and `piece` a valid
    /// index. Anything else means the caller skipped move validation, and
    /// the board refuses to continue in a broken state.
    pub fn apply_move(&mut self, player: Player, piece: usize, destination: Position) -> Position {
        assert!(piece < PIECES_PER_PLAYER, "piece index {piece} out of range");
        let to = match destination.index() {
            Some(index) => index,
            None => panic!("move destination {destination} is off the board"),
        };
        assert!(
            self.cells[to].is_empty(),
            "move destination {destination} is occupied"
        );

        let from = self.pieces[player][piece];
        if let Some(index) = from.index() {
            self.cells[index] = Cell::Empty;
        }
        self.cells[to] = Cell::Owned(player);
        self.pieces[player][piece] = destination;

        debug_assert_eq!(self.validate(), Ok(()));
        from
    }

    /// Occupancy signature for repetition tracking.
    #[must_use]
    pub fn signature(&self) -> Signature {
        Signature::from_cells(&self.cells)
    }

    /// Check that grid and piece lists agree and no cell is shared.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut claimed = [false; CELL_COUNT];
        for (player, set) in self.pieces.iter() {
            for &pos in set {
                let index = pos.index().ok_or(BoardError::OffBoard(pos))?;
                if std::mem::replace(&mut claimed[index], true) {
                    return Err(BoardError::Overlap(pos));
                }
                if self.cells[index] != Cell::Owned(player) {
                    return Err(BoardError::Inconsistent(pos));
                }
            }
        }

        // Any occupied cell not claimed by a piece is stale.
        for (index, cell) in self.cells.iter().enumerate() {
            if !cell.is_empty() && !claimed[index] {
                if let Some(pos) = Position::from_index(index) {
                    return Err(BoardError::Inconsistent(pos));
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(crate::core::BOARD_SIZE as usize) {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

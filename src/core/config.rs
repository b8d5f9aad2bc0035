//! Rule constants and game configuration.
//!
//! The ruleset is fixed: a 5x5 board, three pieces per side, three in a row
//! to win and a draw on the third repetition of a position. Those are
//! constants, not settings. `GameConfig` only chooses how a game is seeded
//! and laid out.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 5;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Pieces each player owns for the whole game.
pub const PIECES_PER_PLAYER: usize = 3;

/// Consecutive own pieces needed on a line to win.
pub const WIN_LENGTH: usize = 3;

/// Occurrences of the same position that end the game in a draw.
pub const REPETITION_LIMIT: u32 = 3;

/// Starting layout of the pieces.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Shuffle all cells and deal three to each player.
    #[default]
    Random,
    /// Explicit layout, validated when the board is built.
    Fixed {
        first: [Position; PIECES_PER_PLAYER],
        second: [Position; PIECES_PER_PLAYER],
    },
}

/// Settings for a new game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// RNG seed. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// How pieces are placed at start and on every reset.
    pub placement: Placement,
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed for reproducible setups.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Shorthand for a fixed layout.
    #[must_use]
    pub fn with_fixed_layout(
        self,
        first: [Position; PIECES_PER_PLAYER],
        second: [Position; PIECES_PER_PLAYER],
    ) -> Self {
        self.with_placement(Placement::Fixed { first, second })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(CELL_COUNT, 25);
        assert!(2 * PIECES_PER_PLAYER < CELL_COUNT);
        assert_eq!(WIN_LENGTH, PIECES_PER_PLAYER);
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.placement, Placement::Random);
    }

    #[test]
    fn test_builder_pattern() {
        let first = [Position::new(0, 0), Position::new(0, 1), Position::new(0, 3)];
        let second = [Position::new(4, 0), Position::new(4, 1), Position::new(4, 3)];
        let config = GameConfig::new().with_seed(123).with_fixed_layout(first, second);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.placement, Placement::Fixed { first, second });
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}

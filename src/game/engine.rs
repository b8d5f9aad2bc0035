//! Turn orchestration.
//!
//! `GameEngine` owns the board and the repetition tracker. A submitted move
//! is validated against the generated destinations, committed, then
//! checked for a win by the mover and for threefold repetition, in that
//! order. The turn passes only if neither ended the game.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::{Board, PieceSet};
use crate::core::{
    BoardError, GameConfig, GameError, GameRng, InvalidMove, Move, MoveRecord, Placement, Player,
    PlayerMap, Position, WIN_LENGTH,
};
use crate::opponent::OpponentPolicy;
use crate::rules::{self, Destinations, GameStatus, RepetitionTracker};

/// Everything a presentation layer needs to draw the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Piece positions per player, in piece-index order.
    pub player_positions: PlayerMap<PieceSet>,

    /// Whose move it is. After the game ends, the player who moved last.
    pub current_player: Player,

    pub status: GameStatus,
}

/// Mixed into the game seed to derive the opponent policy's RNG stream.
const POLICY_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

/// A single Neutreeko game.
///
/// Calls must be serialized by the owner; the engine assumes a single
/// caller per instance.
#[derive(Clone, Debug)]
pub struct GameEngine {
    /// Deals openings. Nothing else draws from it.
    rng: GameRng,
    /// Randomness handed to opponent policies.
    policy_rng: GameRng,
    /// Validated start layout for `Placement::Fixed`, reused on reset.
    fixed_start: Option<Board>,
    board: Board,
    repetition: RepetitionTracker,
    current_player: Player,
    status: GameStatus,
    history: Vec<MoveRecord>,
}

impl GameEngine {
    /// Create a game from a configuration.
    ///
    /// Fails only if a fixed layout overlaps or leaves the board.
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let fixed_start = match config.placement {
            Placement::Random => None,
            Placement::Fixed { first, second } => Some(Board::from_pieces(first, second)?),
        };
        Ok(Self::start(GameRng::from_optional_seed(config.seed), fixed_start))
    }

    /// Create a game with a random opening, seeded if `seed` is given.
    #[must_use]
    pub fn random(seed: Option<u64>) -> Self {
        Self::start(GameRng::from_optional_seed(seed), None)
    }

    fn start(mut rng: GameRng, fixed_start: Option<Board>) -> Self {
        let board = Self::deal(fixed_start.as_ref(), &mut rng);
        let policy_rng = GameRng::new(rng.seed() ^ POLICY_STREAM);
        info!(seed = rng.seed(), "new game");
        debug!("opening position\n{board}");

        Self {
            rng,
            policy_rng,
            fixed_start,
            board,
            repetition: RepetitionTracker::new(),
            current_player: Player::One,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    fn deal(fixed_start: Option<&Board>, rng: &mut GameRng) -> Board {
        match fixed_start {
            Some(board) => board.clone(),
            None => Board::random(rng),
        }
    }

    // === Queries ===

    /// Piece positions, side to move and status.
    #[must_use]
    pub fn current_state(&self) -> GameSnapshot {
        GameSnapshot {
            player_positions: *self.board.all_pieces(),
            current_player: self.current_player,
            status: self.status,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Seed of the RNG behind this game's openings.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Committed moves since the last reset, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// How many times the current position has been reached by a move.
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetition.count(self.board.signature())
    }

    /// The aligned pieces once the game has been won.
    #[must_use]
    pub fn winning_line(&self) -> Option<[Position; WIN_LENGTH]> {
        self.status
            .winner()
            .and_then(|winner| rules::winning_line(&self.board, winner))
    }

    /// Where one of `player`'s pieces could move. Read-only; does not
    /// check whose turn it is.
    pub fn legal_destinations(
        &self,
        player: Player,
        piece: usize,
    ) -> Result<Destinations, GameError> {
        rules::legal_destinations(&self.board, player, piece)
            .ok_or_else(|| InvalidMove::NoSuchPiece(piece).into())
    }

    /// Every legal move for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.board, self.current_player)
    }

    // === Mutation ===

    /// Validate and commit a move.
    ///
    /// Rejections leave the game untouched.
    #[instrument(skip(self))]
    pub fn submit_move(
        &mut self,
        player: Player,
        piece: usize,
        destination: Position,
    ) -> Result<GameSnapshot, GameError> {
        if let Err(err) = self.validate(player, piece, destination) {
            debug!(%err, "move rejected");
            return Err(err);
        }

        let from = self.board.apply_move(player, piece, destination);
        let ply = self.history.len() as u32 + 1;
        self.history.push(MoveRecord {
            ply,
            player,
            piece,
            from,
            to: destination,
        });
        debug!(ply, %from, to = %destination, "move committed");

        if rules::has_won(&self.board, player) {
            self.status = GameStatus::Won(player);
            info!(%player, ply, "game won");
        } else if self.repetition.record_and_check(self.board.signature()) {
            self.status = GameStatus::Draw;
            info!(ply, "draw by threefold repetition");
        } else {
            self.current_player = player.other();
        }

        Ok(self.current_state())
    }

    fn validate(
        &self,
        player: Player,
        piece: usize,
        destination: Position,
    ) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::InvalidState(self.status));
        }
        if player != self.current_player {
            return Err(InvalidMove::NotYourTurn {
                expected: self.current_player,
                actual: player,
            }
            .into());
        }

        let from = self
            .board
            .piece(player, piece)
            .ok_or(InvalidMove::NoSuchPiece(piece))?;
        let legal = rules::slide_destinations(&self.board, from);
        if !legal.contains(&destination) {
            return Err(InvalidMove::Unreachable { from, destination }.into());
        }
        Ok(())
    }

    /// Let `policy` pick the side to move's move and submit it.
    #[instrument(skip(self, policy))]
    pub fn play_opponent<P>(&mut self, policy: &P) -> Result<GameSnapshot, GameError>
    where
        P: OpponentPolicy + ?Sized,
    {
        if self.status.is_terminal() {
            return Err(GameError::InvalidState(self.status));
        }

        let player = self.current_player;
        let mv = policy
            .choose_move(&self.board, player, &mut self.policy_rng)
            .ok_or(GameError::NoLegalMove(player))?;
        self.submit_move(player, mv.piece, mv.destination)
    }

    /// Start over: fresh opening, empty repetition history, player one to
    /// move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Self::deal(self.fixed_start.as_ref(), &mut self.rng);
        self.repetition.clear();
        self.history.clear();
        self.current_player = Player::One;
        self.status = GameStatus::InProgress;
        info!("game reset");
    }
}

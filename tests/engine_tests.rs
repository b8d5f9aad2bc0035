//! End-to-end engine scenarios: turn order, wins, repetition draws, resets.

use neutreeko::core::{ErrorKind, GameConfig, GameError, InvalidMove, Player, Position};
use neutreeko::rules::{has_won, legal_destinations};
use neutreeko::{new_game, Board, GameEngine, GameStatus};

fn p(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

fn fixed(first: [Position; 3], second: [Position; 3]) -> GameEngine {
    GameEngine::new(GameConfig::new().with_seed(42).with_fixed_layout(first, second)).unwrap()
}

/// Layout used by the repetition scenarios: no lines, plenty of room.
fn shuffle_board() -> GameEngine {
    fixed([p(0, 0), p(0, 4), p(4, 2)], [p(4, 0), p(4, 4), p(2, 0)])
}

/// Play a full there-and-back cycle: each side moves one piece out and back.
fn round_trip(
    engine: &mut GameEngine,
    one: (usize, Position, Position),
    two: (usize, Position, Position),
) -> Vec<GameStatus> {
    let (p1_piece, p1_home, p1_away) = one;
    let (p2_piece, p2_home, p2_away) = two;
    vec![
        engine.submit_move(Player::One, p1_piece, p1_away).unwrap().status,
        engine.submit_move(Player::Two, p2_piece, p2_away).unwrap().status,
        engine.submit_move(Player::One, p1_piece, p1_home).unwrap().status,
        engine.submit_move(Player::Two, p2_piece, p2_home).unwrap().status,
    ]
}

#[test]
fn test_row_slide_from_corner() {
    let board = Board::from_pieces([p(0, 0), p(2, 2), p(3, 3)], [p(1, 0), p(1, 1), p(4, 4)])
        .unwrap();
    let dests = legal_destinations(&board, Player::One, 0).unwrap();

    let mut along_row: Vec<_> = dests.into_iter().filter(|d| d.row == 0).collect();
    along_row.sort();
    assert_eq!(along_row, vec![p(0, 1), p(0, 2), p(0, 3), p(0, 4)]);
}

#[test]
fn test_horizontal_run_wins() {
    let board = Board::from_pieces([p(2, 2), p(2, 3), p(2, 4)], [p(0, 0), p(0, 1), p(4, 4)])
        .unwrap();
    assert!(has_won(&board, Player::One));
}

#[test]
fn test_out_of_turn_move_is_rejected() {
    let mut engine = shuffle_board();
    let before = engine.current_state();

    let err = engine.submit_move(Player::Two, 1, p(3, 4)).unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidMove(InvalidMove::NotYourTurn {
            expected: Player::One,
            actual: Player::Two
        })
    );
    assert_eq!(err.kind(), ErrorKind::InvalidMove);
    assert_eq!(engine.current_state(), before);
}

#[test]
fn test_turns_alternate() {
    let mut engine = shuffle_board();

    assert_eq!(engine.submit_move(Player::One, 0, p(1, 1)).unwrap().current_player, Player::Two);
    assert_eq!(engine.submit_move(Player::Two, 1, p(3, 4)).unwrap().current_player, Player::One);
    assert!(engine.submit_move(Player::Two, 1, p(4, 4)).is_err());
    assert_eq!(engine.history().len(), 2);
    assert_eq!(engine.history()[1].ply, 2);
}

#[test]
fn test_draw_on_third_occurrence() {
    let mut engine = shuffle_board();
    let one = (0, p(0, 0), p(1, 1));
    let two = (1, p(4, 4), p(3, 4));

    // Every position of the cycle occurs once, then twice: no draw yet.
    for _ in 0..2 {
        let statuses = round_trip(&mut engine, one, two);
        assert!(statuses.iter().all(|s| *s == GameStatus::InProgress));
    }
    assert_eq!(engine.repetition_count(), 2);

    // Third time player one steps out, that position hits three.
    let state = engine.submit_move(Player::One, 0, p(1, 1)).unwrap();
    assert_eq!(state.status, GameStatus::Draw);
    assert_eq!(state.current_player, Player::One);

    let err = engine.submit_move(Player::Two, 1, p(3, 4)).unwrap_err();
    assert_eq!(err, GameError::InvalidState(GameStatus::Draw));
}

#[test]
fn test_draw_via_different_sequences() {
    let mut engine = shuffle_board();

    // Three different excursions, each returning to the opening layout.
    let first = round_trip(&mut engine, (0, p(0, 0), p(1, 1)), (1, p(4, 4), p(3, 4)));
    assert_eq!(first[3], GameStatus::InProgress);

    let second = round_trip(&mut engine, (0, p(0, 0), p(0, 1)), (1, p(4, 4), p(4, 3)));
    assert_eq!(second[3], GameStatus::InProgress);
    assert_eq!(engine.repetition_count(), 2);

    let third = round_trip(&mut engine, (0, p(0, 0), p(0, 2)), (1, p(4, 4), p(2, 4)));
    assert_eq!(&third[..3], &[GameStatus::InProgress; 3]);
    assert_eq!(third[3], GameStatus::Draw);
}

#[test]
fn test_win_takes_precedence_over_repetition() {
    let mut engine = fixed([p(2, 2), p(2, 3), p(0, 4)], [p(4, 0), p(4, 1), p(0, 0)]);
    let state = engine.submit_move(Player::One, 2, p(2, 4)).unwrap();

    assert_eq!(state.status, GameStatus::Won(Player::One));
    // A winning position is not counted.
    assert_eq!(engine.repetition_count(), 0);
    let mut line = engine.winning_line().unwrap();
    line.sort();
    assert_eq!(line, [p(2, 2), p(2, 3), p(2, 4)]);
}

#[test]
fn test_reset_clears_repetition_history() {
    let mut engine = shuffle_board();
    let one = (0, p(0, 0), p(1, 1));
    let two = (1, p(4, 4), p(3, 4));
    round_trip(&mut engine, one, two);
    round_trip(&mut engine, one, two);

    engine.reset();
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.current_player(), Player::One);

    // Two more cycles would have drawn without the reset.
    let statuses = round_trip(&mut engine, one, two);
    assert!(statuses.iter().all(|s| *s == GameStatus::InProgress));
    assert_eq!(engine.repetition_count(), 1);
}

#[test]
fn test_reset_after_terminal_allows_play() {
    let mut engine = fixed([p(2, 2), p(2, 3), p(0, 4)], [p(4, 0), p(4, 1), p(0, 0)]);
    engine.submit_move(Player::One, 2, p(2, 4)).unwrap();
    assert!(engine.submit_move(Player::Two, 0, p(3, 0)).is_err());

    engine.reset();
    assert!(engine.submit_move(Player::One, 0, p(1, 2)).is_ok());
}

#[test]
fn test_current_state_is_idempotent() {
    let mut engine = new_game(Some(2024));
    assert_eq!(engine.current_state(), engine.current_state());

    let mv = engine.legal_moves()[0];
    engine.submit_move(Player::One, mv.piece, mv.destination).unwrap();
    assert_eq!(engine.current_state(), engine.current_state());
}

#[test]
fn test_seeded_games_are_reproducible() {
    let a = new_game(Some(77));
    let b = new_game(Some(77));
    assert_eq!(a.current_state(), b.current_state());

    let unseeded = new_game(None);
    let replay = new_game(Some(unseeded.seed()));
    assert_eq!(unseeded.current_state(), replay.current_state());
}

//! Integration test: Tic-Tac-Toe on the event-driven loop
//!
//! Human moves are applied on input; the opponent replies through a deferred
//! task that must never land on a round or session it was not scheduled for.

use arcade::games::tictactoe::{Board, Mark, RoundPhase, TicTacToeConfig, TicTacToeRules};
use arcade::utils::MemoryScoreStore;
use arcade::{GameLoop, Input, Phase};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

type TicTacToeLoop = GameLoop<TicTacToeRules, MemoryScoreStore, ChaCha8Rng>;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn new_loop() -> TicTacToeLoop {
    GameLoop::new(
        TicTacToeRules::new(TicTacToeConfig::default()),
        MemoryScoreStore::default(),
        ChaCha8Rng::seed_from_u64(3),
    )
}

/// Board from a 9-char string: 'X', 'O', anything else empty.
fn board(marks: &str) -> Board {
    let mut board = Board::default();
    for (i, c) in marks.chars().enumerate() {
        board.cells[i] = match c {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        };
    }
    board
}

fn marks(board: &Board, mark: Mark) -> usize {
    board.cells.iter().filter(|c| **c == Some(mark)).count()
}

#[test]
fn test_opponent_replies_after_delay() {
    let mut game = new_loop();
    let t0 = Instant::now();
    game.handle_input(Input::Primary, t0);
    assert_eq!(game.state().phase, RoundPhase::InProgress);
    assert_eq!(game.state().round, 1);

    assert!(game.handle_input(Input::Cell(4), t0));
    assert_eq!(game.state().board.get(4), Some(Mark::X));
    assert!(game.state().opponent_thinking);
    assert_eq!(game.pending_tasks(), 1);
    assert_eq!(game.next_wakeup(t0), Some(ms(400)));

    assert!(!game.update(t0 + ms(399)));
    assert_eq!(marks(&game.state().board, Mark::O), 0);

    assert!(game.update(t0 + ms(400)));
    assert_eq!(marks(&game.state().board, Mark::O), 1);
    assert_eq!(game.state().board.get(4), Some(Mark::X));
    assert_eq!(game.state().to_move, Mark::X);
    assert!(!game.state().opponent_thinking);
    assert_eq!(game.pending_tasks(), 0);
}

#[test]
fn test_input_while_opponent_thinks_is_rejected() {
    let mut game = new_loop();
    let t0 = Instant::now();
    game.handle_input(Input::Primary, t0);
    game.handle_input(Input::Cell(0), t0);
    game.handle_input(Input::Cell(1), t0 + ms(10));

    assert_eq!(game.state().board.get(1), None);
    assert_eq!(marks(&game.state().board, Mark::X), 1);
    assert_eq!(game.pending_tasks(), 1);
}

#[test]
fn test_win_scores_and_next_round_starts_on_primary() {
    let mut game = new_loop();
    let t0 = Instant::now();
    game.handle_input(Input::Primary, t0);
    game.state_mut().board = board("XX.OO....");

    game.handle_input(Input::Cell(2), t0);
    assert_eq!(game.state().phase, RoundPhase::Won(Mark::X));
    assert_eq!(game.state().wins, 1);
    assert_eq!(game.score(), 1);
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.pending_tasks(), 0);

    // Primary on a finished round deals the next one
    game.handle_input(Input::Primary, t0 + ms(10));
    assert_eq!(game.state().round, 2);
    assert_eq!(game.state().board, Board::default());
    assert_eq!(game.score(), 1);
}

#[test]
fn test_loss_ends_session_and_records_wins() {
    let mut game = new_loop();
    let t0 = Instant::now();
    game.handle_input(Input::Primary, t0);
    game.state_mut().board = board("XOXXOOO..");
    game.state_mut().wins = 2;

    // X takes 8; the only cell left for O completes the middle column
    game.handle_input(Input::Cell(8), t0);
    assert_eq!(game.state().phase, RoundPhase::InProgress);
    assert_eq!(game.score(), 2);

    game.update(t0 + ms(400));
    assert_eq!(game.state().phase, RoundPhase::Won(Mark::O));
    assert_eq!(game.state().losses, 1);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.high_score(), 2);
    assert_eq!(game.store().get("tictactoe"), Some(2));
}

#[test]
fn test_tie_keeps_session_running() {
    let mut game = new_loop();
    let t0 = Instant::now();
    game.handle_input(Input::Primary, t0);
    game.state_mut().board = board("XOXXOOOX.");

    game.handle_input(Input::Cell(8), t0);
    assert_eq!(game.state().phase, RoundPhase::Tied);
    assert_eq!(game.state().ties, 1);
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.pending_tasks(), 0);
}

#[test]
fn test_stop_drops_pending_reply() {
    let mut game = new_loop();
    let t0 = Instant::now();
    game.handle_input(Input::Primary, t0);
    game.handle_input(Input::Cell(0), t0);
    assert_eq!(game.pending_tasks(), 1);

    game.stop();
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.pending_tasks(), 0);

    // A new session right away: the old reply must not land on it
    game.handle_input(Input::Primary, t0 + ms(10));
    assert!(!game.update(t0 + ms(1000)));
    assert_eq!(game.state().board, Board::default());
    assert_eq!(game.state().round, 1);
}

#[test]
fn test_next_round_drops_pending_reply() {
    let mut game = new_loop();
    let t0 = Instant::now();
    game.handle_input(Input::Primary, t0);
    game.handle_input(Input::Cell(0), t0);
    assert_eq!(game.pending_tasks(), 1);

    // Force the round over, then start the next one before the reply is due
    game.state_mut().phase = RoundPhase::Tied;
    game.handle_input(Input::Primary, t0 + ms(100));
    assert_eq!(game.state().round, 2);
    assert_eq!(game.pending_tasks(), 0);

    game.update(t0 + ms(1000));
    assert_eq!(game.state().board, Board::default());
}

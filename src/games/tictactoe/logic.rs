//! Tic-Tac-Toe move validation, round flow and the random opponent.

use super::types::*;
use crate::core::game_loop::{Deferrals, Rules};
use crate::core::input::{Direction, Input};
use crate::core::tick::Cadence;
use crate::games::GameKind;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

/// Place `mark` at `index` and re-evaluate the round.
///
/// Rejected moves leave the board untouched.
pub fn place_mark(game: &mut TicTacToeGame, index: usize, mark: Mark) -> Result<(), MoveError> {
    if game.phase != RoundPhase::InProgress {
        return Err(MoveError::RoundOver);
    }
    if game.to_move != mark {
        return Err(MoveError::NotYourTurn(mark));
    }
    if index >= CELLS {
        return Err(MoveError::OutOfRange(index));
    }
    if game.board.cells[index].is_some() {
        return Err(MoveError::Occupied(index));
    }

    game.board.cells[index] = Some(mark);
    game.phase = game.board.evaluate();
    match game.phase {
        RoundPhase::Won(Mark::X) => game.wins += 1,
        RoundPhase::Won(Mark::O) => game.losses += 1,
        RoundPhase::Tied => game.ties += 1,
        RoundPhase::InProgress => game.to_move = mark.other(),
        RoundPhase::Idle => {}
    }
    Ok(())
}

/// Opponent move: a uniformly random empty cell, no look-ahead.
pub fn opponent_move<R: Rng>(game: &mut TicTacToeGame, rng: &mut R) -> Option<usize> {
    let cell = game.board.empty_cells().choose(rng).copied()?;
    place_mark(game, cell, Mark::O).ok().map(|_| cell)
}

/// Human move; on success with the round still open, schedules the
/// opponent's reply.
pub fn human_move(
    game: &mut TicTacToeGame,
    index: usize,
    config: &TicTacToeConfig,
    tasks: &mut Deferrals<'_, OpponentMove>,
) -> Result<(), MoveError> {
    place_mark(game, index, Mark::X)?;
    if game.phase == RoundPhase::InProgress {
        game.opponent_thinking = true;
        tasks.defer(
            Duration::from_millis(config.opponent_delay_ms),
            OpponentMove { round: game.round },
        );
    }
    Ok(())
}

pub struct TicTacToeRules {
    pub config: TicTacToeConfig,
}

impl TicTacToeRules {
    pub fn new(config: TicTacToeConfig) -> Self {
        Self { config }
    }

    fn select(
        &self,
        state: &mut TicTacToeGame,
        index: usize,
        tasks: &mut Deferrals<'_, OpponentMove>,
    ) {
        if state.phase.is_over() {
            tasks.cancel_all();
            state.start_round();
            return;
        }
        if let Err(e) = human_move(state, index, &self.config, tasks) {
            debug!("tictactoe: move rejected: {e}");
        }
    }
}

impl Rules for TicTacToeRules {
    type State = TicTacToeGame;
    type Snapshot = TicTacToeSnapshot;
    type Deferred = OpponentMove;

    const KIND: GameKind = GameKind::TicTacToe;

    fn cadence(&self) -> Cadence {
        Cadence::EventDriven
    }

    fn new_state<R: Rng>(&self, _rng: &mut R) -> TicTacToeGame {
        TicTacToeGame::new()
    }

    fn on_start(&self, state: &mut TicTacToeGame, _tasks: &mut Deferrals<'_, OpponentMove>) {
        if state.phase == RoundPhase::Idle {
            state.start_round();
        }
    }

    fn handle_input(
        &self,
        state: &mut TicTacToeGame,
        input: Input,
        tasks: &mut Deferrals<'_, OpponentMove>,
    ) {
        match input {
            Input::Direction(Direction::Up) => state.move_cursor(-1, 0),
            Input::Direction(Direction::Down) => state.move_cursor(1, 0),
            Input::Direction(Direction::Left) => state.move_cursor(0, -1),
            Input::Direction(Direction::Right) => state.move_cursor(0, 1),
            Input::Primary => {
                let cursor = state.cursor;
                self.select(state, cursor, tasks);
            }
            Input::Cell(index) => {
                if index < CELLS {
                    state.cursor = index;
                }
                self.select(state, index, tasks);
            }
            Input::Pause => {}
        }
    }

    fn advance<R: Rng>(&self, _state: &mut TicTacToeGame, _rng: &mut R) {}

    /// A round lost to the opponent ends the session.
    fn collides(&self, state: &TicTacToeGame) -> bool {
        state.phase == RoundPhase::Won(Mark::O)
    }

    fn score(&self, state: &TicTacToeGame) -> u32 {
        state.wins
    }

    fn snapshot(&self, state: &TicTacToeGame) -> TicTacToeSnapshot {
        TicTacToeSnapshot {
            board: state.board,
            phase: state.phase,
            to_move: state.to_move,
            cursor: state.cursor,
            winning_line: state.board.winning_line(),
            round: state.round,
            wins: state.wins,
            losses: state.losses,
            ties: state.ties,
            opponent_thinking: state.opponent_thinking,
        }
    }

    fn on_deferred<R: Rng>(&self, state: &mut TicTacToeGame, action: OpponentMove, rng: &mut R) {
        if action.round != state.round || state.to_move != Mark::O {
            debug!("tictactoe: stale opponent move for round {}", action.round);
            return;
        }
        state.opponent_thinking = false;
        opponent_move(state, rng);
    }
}

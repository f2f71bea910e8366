//! Tic-Tac-Toe data structures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const BOARD_SIZE: usize = 3;
pub const CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Rows, columns, then diagonals, as row-major cell indices.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(&self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoundPhase {
    /// Before the first round of a session.
    Idle,
    InProgress,
    Won(Mark),
    Tied,
}

impl RoundPhase {
    pub fn is_over(&self) -> bool {
        matches!(self, Self::Won(_) | Self::Tied)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("cell {0} is off the board")]
    OutOfRange(usize),
    #[error("cell {0} is already taken")]
    Occupied(usize),
    #[error("no round in progress")]
    RoundOver,
    #[error("not {0:?}'s turn")]
    NotYourTurn(Mark),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Board {
    pub cells: [Option<Mark>; CELLS],
}

impl Board {
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.cells[i].is_none()).collect()
    }

    /// First line, in enumeration order, holding three equal marks.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LINES.iter().copied().find(|&[a, b, c]| {
            self.cells[a].is_some() && self.cells[a] == self.cells[b] && self.cells[b] == self.cells[c]
        })
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().and_then(|[a, _, _]| self.cells[a])
    }

    /// Won, Tied, or still InProgress.
    pub fn evaluate(&self) -> RoundPhase {
        match self.winner() {
            Some(mark) => RoundPhase::Won(mark),
            None if self.is_full() => RoundPhase::Tied,
            None => RoundPhase::InProgress,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeConfig {
    /// Opponent "thinking" delay before it places its mark.
    pub opponent_delay_ms: u64,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            opponent_delay_ms: 400,
        }
    }
}

/// Deferred opponent reply, tagged with the round it was scheduled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentMove {
    pub round: u32,
}

/// Main game state: the current round plus the session tally.
#[derive(Debug, Clone)]
pub struct TicTacToeGame {
    pub board: Board,
    pub phase: RoundPhase,
    pub to_move: Mark,
    /// Selected cell, row-major.
    pub cursor: usize,
    /// Round counter; 0 until the first round starts.
    pub round: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    /// An opponent reply is pending.
    pub opponent_thinking: bool,
}

impl Default for TicTacToeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGame {
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            phase: RoundPhase::Idle,
            to_move: Mark::X,
            cursor: 4, // Center
            round: 0,
            wins: 0,
            losses: 0,
            ties: 0,
            opponent_thinking: false,
        }
    }

    pub fn start_round(&mut self) {
        self.board = Board::default();
        self.phase = RoundPhase::InProgress;
        self.to_move = Mark::X;
        self.round += 1;
        self.opponent_thinking = false;
    }

    /// Move cursor by (row, col), clamped to the board.
    pub fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let max = BOARD_SIZE as i32 - 1;
        let row = ((self.cursor / BOARD_SIZE) as i32 + d_row).clamp(0, max) as usize;
        let col = ((self.cursor % BOARD_SIZE) as i32 + d_col).clamp(0, max) as usize;
        self.cursor = row * BOARD_SIZE + col;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicTacToeSnapshot {
    pub board: Board,
    pub phase: RoundPhase,
    pub to_move: Mark,
    pub cursor: usize,
    pub winning_line: Option<[usize; 3]>,
    pub round: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub opponent_thinking: bool,
}

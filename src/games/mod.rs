//! The four arcade games. Each exposes a config, a state type and a
//! [`Rules`](crate::core::Rules) implementation driven by the shared loop.

pub mod flappy;
pub mod runner;
pub mod snake;
pub mod tictactoe;

pub use flappy::{FlappyConfig, FlappyGame, FlappyRules};
pub use runner::{RunnerConfig, RunnerGame, RunnerRules};
pub use snake::{SnakeConfig, SnakeGame, SnakeRules};
pub use tictactoe::{TicTacToeConfig, TicTacToeGame, TicTacToeRules};

use serde::{Deserialize, Serialize};

/// Identifies a game; its `key` names the persisted high score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Snake,
    Flappy,
    Runner,
    TicTacToe,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Snake,
        GameKind::Flappy,
        GameKind::Runner,
        GameKind::TicTacToe,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Snake => "Snake",
            Self::Flappy => "Flappy",
            Self::Runner => "Runner",
            Self::TicTacToe => "Tic-Tac-Toe",
        }
    }

    /// Storage key for the high score.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Snake => "snake",
            Self::Flappy => "flappy",
            Self::Runner => "runner",
            Self::TicTacToe => "tictactoe",
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Self::Snake)
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Snake => 0,
            Self::Flappy => 1,
            Self::Runner => 2,
            Self::TicTacToe => 3,
        }
    }
}

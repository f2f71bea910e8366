//! Front-end state: the game menu plus one game loop per game.

use crate::input::Action;
use arcade::core::constants::{IDLE_POLL_MS, INPUT_POLL_MS};
use arcade::games::{FlappyRules, RunnerRules, SnakeRules, TicTacToeRules};
use arcade::utils::persistence::FileScoreStore;
use arcade::{ArcadeConfig, Direction, GameKind, GameLoop, Input};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

pub type Loop<G> = GameLoop<G, FileScoreStore, StdRng>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing(GameKind),
}

pub struct App {
    pub screen: Screen,
    pub menu_index: usize,
    pub snake: Loop<SnakeRules>,
    pub flappy: Loop<FlappyRules>,
    pub runner: Loop<RunnerRules>,
    pub tictactoe: Loop<TicTacToeRules>,
    pub should_quit: bool,
}

/// Run `$body` with `$game` bound to the loop for `$kind`.
macro_rules! with_game {
    ($app:expr, $kind:expr, $game:ident => $body:expr) => {
        match $kind {
            GameKind::Snake => {
                let $game = &mut $app.snake;
                $body
            }
            GameKind::Flappy => {
                let $game = &mut $app.flappy;
                $body
            }
            GameKind::Runner => {
                let $game = &mut $app.runner;
                $body
            }
            GameKind::TicTacToe => {
                let $game = &mut $app.tictactoe;
                $body
            }
        }
    };
}

impl App {
    pub fn new(config: &ArcadeConfig, store: FileScoreStore) -> Self {
        Self {
            screen: Screen::Menu,
            menu_index: 0,
            snake: GameLoop::new(
                SnakeRules::new(config.snake),
                store.clone(),
                StdRng::from_entropy(),
            ),
            flappy: GameLoop::new(
                FlappyRules::new(config.flappy),
                store.clone(),
                StdRng::from_entropy(),
            ),
            runner: GameLoop::new(
                RunnerRules::new(config.runner),
                store.clone(),
                StdRng::from_entropy(),
            ),
            tictactoe: GameLoop::new(
                TicTacToeRules::new(config.tictactoe),
                store,
                StdRng::from_entropy(),
            ),
            should_quit: false,
        }
    }

    pub fn handle(&mut self, action: Action, now: Instant) {
        match (self.screen, action) {
            (_, Action::Quit) => {
                self.leave_game();
                self.should_quit = true;
            }
            (Screen::Menu, Action::Back) => self.should_quit = true,
            (Screen::Menu, Action::Game(input)) => self.handle_menu(input),
            (Screen::Playing(_), Action::Back) => self.leave_game(),
            (Screen::Playing(kind), Action::Game(input)) => {
                with_game!(self, kind, game => {
                    game.handle_input(input, now);
                });
            }
        }
    }

    fn handle_menu(&mut self, input: Input) {
        let count = GameKind::ALL.len();
        match input {
            Input::Direction(Direction::Up) => {
                self.menu_index = (self.menu_index + count - 1) % count;
            }
            Input::Direction(Direction::Down) => {
                self.menu_index = (self.menu_index + 1) % count;
            }
            Input::Primary => self.enter_game(GameKind::from_index(self.menu_index)),
            Input::Cell(index) if index < count => {
                self.menu_index = index;
                self.enter_game(GameKind::from_index(index));
            }
            _ => {}
        }
    }

    /// Show a game's idle screen; play begins on its first Primary input.
    fn enter_game(&mut self, kind: GameKind) {
        debug!("entering {}", kind.key());
        self.screen = Screen::Playing(kind);
    }

    /// Tear down the active session so no tick or deferred task outlives it.
    fn leave_game(&mut self) {
        if let Screen::Playing(kind) = self.screen {
            with_game!(self, kind, game => game.stop());
            debug!("left {}", kind.key());
        }
        self.screen = Screen::Menu;
    }

    /// Drive the active game. Returns true if it changed.
    pub fn update(&mut self, now: Instant) -> bool {
        match self.screen {
            Screen::Menu => false,
            Screen::Playing(kind) => with_game!(self, kind, game => game.update(now)),
        }
    }

    /// How long to wait for input before the next update.
    pub fn poll_timeout(&mut self, now: Instant) -> Duration {
        let wakeup = match self.screen {
            Screen::Menu => None,
            Screen::Playing(kind) => with_game!(self, kind, game => game.next_wakeup(now)),
        };
        wakeup
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS))
            .clamp(
                Duration::from_millis(INPUT_POLL_MS),
                Duration::from_millis(IDLE_POLL_MS),
            )
    }

    pub fn high_score(&self, kind: GameKind) -> u32 {
        match kind {
            GameKind::Snake => self.snake.high_score(),
            GameKind::Flappy => self.flappy.high_score(),
            GameKind::Runner => self.runner.high_score(),
            GameKind::TicTacToe => self.tictactoe.high_score(),
        }
    }
}

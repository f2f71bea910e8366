//! Terminal rendering. Scenes only read engine snapshots.

mod flappy_scene;
mod game_common;
mod menu_scene;
mod runner_scene;
mod snake_scene;
mod tictactoe_scene;

use crate::app::{App, Screen};
use arcade::GameKind;
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    match app.screen {
        Screen::Menu => menu_scene::render_menu(frame, area, app),
        Screen::Playing(GameKind::Snake) => {
            snake_scene::render_snake_scene(frame, area, &app.snake.snapshot())
        }
        Screen::Playing(GameKind::Flappy) => {
            flappy_scene::render_flappy(frame, area, &app.flappy.snapshot())
        }
        Screen::Playing(GameKind::Runner) => {
            runner_scene::render_runner(frame, area, &app.runner.snapshot())
        }
        Screen::Playing(GameKind::TicTacToe) => {
            tictactoe_scene::render_tictactoe(frame, area, &app.tictactoe.snapshot())
        }
    }
}

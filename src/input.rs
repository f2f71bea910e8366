//! Key mapping for the terminal front-end.
//!
//! Translates crossterm key events into engine inputs plus the two app-level
//! actions (back to menu, quit) the engine knows nothing about.

use arcade::{Direction, Input};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Game(Input),
    /// Leave the current game (or quit from the menu).
    Back,
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Input::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => {
            Input::Direction(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => {
            Input::Direction(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => {
            Input::Direction(Direction::Right)
        }
        KeyCode::Char(' ') | KeyCode::Enter => Input::Primary,
        KeyCode::Char('p') => Input::Pause,
        // 1-9 map to board cells 0-8, keypad layout top row first
        KeyCode::Char(c @ '1'..='9') => Input::Cell(c as usize - '1' as usize),
        KeyCode::Esc => return Some(Action::Back),
        KeyCode::Char('q') => return Some(Action::Quit),
        _ => return None,
    };
    Some(Action::Game(input))
}

/// A left click anywhere counts as the primary action.
pub fn map_mouse(event: MouseEvent) -> Option<Action> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Game(Input::Primary)),
        _ => None,
    }
}

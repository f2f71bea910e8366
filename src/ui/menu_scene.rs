//! Game selection menu.

use crate::app::App;
use crate::ui::game_common::render_status_bar;
use arcade::GameKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Arcade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(2)])
        .split(inner);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Choose a game",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (i, kind) in GameKind::ALL.iter().enumerate() {
        let selected = i == app.menu_index;
        let marker = if selected { "▶ " } else { "  " };
        let name_style = if selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{}. {:<12}", i + 1, kind.name()), name_style),
            Span::styled(
                format!("best {:>4}", app.high_score(*kind)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[0],
    );
    render_status_bar(
        frame,
        chunks[1],
        "",
        Color::White,
        &[("[↑↓]", "Select"), ("[Enter]", "Play"), ("[Q]", "Quit")],
    );
}

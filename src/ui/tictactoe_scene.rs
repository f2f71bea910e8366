//! UI rendering for Tic-Tac-Toe.

use crate::ui::game_common::{
    create_game_layout, info_line, render_game_over_banner, render_info_panel_frame,
    render_phase_prompt, render_phase_status_bar, render_status_bar, score_lines,
};
use arcade::core::FrameSnapshot;
use arcade::games::tictactoe::{Mark, RoundPhase, TicTacToeSnapshot, BOARD_SIZE};
use arcade::Phase;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const X_COLOR: Color = Color::LightCyan;
const O_COLOR: Color = Color::LightMagenta;
const GRID_COLOR: Color = Color::DarkGray;

pub fn render_tictactoe(frame: &mut Frame, area: Rect, snap: &FrameSnapshot<TicTacToeSnapshot>) {
    let layout = create_game_layout(frame, area, " Tic-Tac-Toe ", Color::Magenta, 9, 22);
    let game = &snap.state;

    render_board(frame, layout.content, game, snap.phase == Phase::Running);
    render_phase_prompt(frame, layout.content, snap.phase);
    if snap.phase == Phase::GameOver {
        render_game_over_banner(
            frame,
            layout.content,
            "O took the round.",
            snap.score,
            snap.high_score,
            snap.new_high_score,
        );
    }

    if !render_phase_status_bar(frame, layout.status_bar, snap.phase) {
        let (text, color) = round_status(game);
        let controls: &[(&str, &str)] = if game.phase.is_over() {
            &[("[Space]", "Next round"), ("[Esc]", "Menu")]
        } else {
            &[
                ("[Arrows]", "Move"),
                ("[Space]", "Place"),
                ("[1-9]", "Cell"),
                ("[Esc]", "Menu"),
            ]
        };
        render_status_bar(frame, layout.status_bar, &text, color, controls);
    }
    render_info_panel(frame, layout.info_panel, snap);
}

fn round_status(game: &TicTacToeSnapshot) -> (String, Color) {
    match game.phase {
        RoundPhase::Won(Mark::X) => ("You win the round!".to_string(), Color::Green),
        RoundPhase::Won(Mark::O) => ("O wins the round.".to_string(), Color::Red),
        RoundPhase::Tied => ("Tied round.".to_string(), Color::Yellow),
        _ if game.opponent_thinking => ("O is thinking...".to_string(), Color::Yellow),
        _ => ("Your move (X)".to_string(), Color::White),
    }
}

fn mark_span(mark: Option<Mark>, highlight: bool, selected: bool) -> Span<'static> {
    let (text, color) = match mark {
        Some(Mark::X) => (" X ", X_COLOR),
        Some(Mark::O) => (" O ", O_COLOR),
        None => (" · ", GRID_COLOR),
    };
    let mut style = Style::default().fg(color);
    if highlight {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    if selected {
        style = style.bg(Color::Rgb(50, 50, 70));
    }
    Span::styled(text, style)
}

fn render_board(frame: &mut Frame, area: Rect, game: &TicTacToeSnapshot, show_cursor: bool) {
    let winning = game.winning_line.unwrap_or([usize::MAX; 3]);
    let mut lines = Vec::new();
    lines.push(Line::from(""));

    for row in 0..BOARD_SIZE {
        if row > 0 {
            lines.push(Line::from(Span::styled(
                "───┼───┼───",
                Style::default().fg(GRID_COLOR),
            )));
        }
        let mut spans = Vec::new();
        for col in 0..BOARD_SIZE {
            let index = row * BOARD_SIZE + col;
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(GRID_COLOR)));
            }
            spans.push(mark_span(
                game.board.cells[index],
                winning.contains(&index),
                show_cursor && game.cursor == index,
            ));
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board, area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, snap: &FrameSnapshot<TicTacToeSnapshot>) {
    let inner = render_info_panel_frame(frame, area);
    let game = &snap.state;

    let mut lines = score_lines(snap.score, snap.high_score);
    lines.extend([
        Line::from(""),
        info_line("Round", game.round.to_string()),
        info_line("Wins", game.wins.to_string()),
        info_line("Ties", game.ties.to_string()),
        info_line("Losses", game.losses.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "A lost round ends the run.",
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    frame.render_widget(Paragraph::new(lines), inner);
}

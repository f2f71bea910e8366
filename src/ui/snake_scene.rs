//! Snake scene: one half-block pixel per grid cell.

use super::game_common::{
    create_game_layout, info_line, render_game_over_banner, render_info_panel_frame,
    render_phase_prompt, render_phase_status_bar, render_status_bar, score_lines, PixelCanvas,
    FULL_BLOCK,
};
use arcade::core::FrameSnapshot;
use arcade::games::snake::SnakeSnapshot;
use arcade::Phase;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const BODY_BRIGHT: (f64, f64, f64) = (50.0, 220.0, 50.0);
const BODY_DIM: (f64, f64, f64) = (20.0, 80.0, 20.0);
const FOOD_COLOR: Color = Color::Rgb(255, 80, 40);

pub fn render_snake_scene(frame: &mut Frame, area: Rect, snap: &FrameSnapshot<SnakeSnapshot>) {
    let layout = create_game_layout(frame, area, " Snake ", Color::LightGreen, 12, 18);

    render_play_field(frame, layout.content, &snap.state);
    render_phase_prompt(frame, layout.content, snap.phase);
    if snap.phase == Phase::GameOver {
        render_game_over_banner(
            frame,
            layout.content,
            "The snake hit something.",
            snap.score,
            snap.high_score,
            snap.new_high_score,
        );
    }

    if !render_phase_status_bar(frame, layout.status_bar, snap.phase) {
        render_status_bar(
            frame,
            layout.status_bar,
            "Slither!",
            Color::Green,
            &[("[Arrows]", "Turn"), ("[P]", "Pause"), ("[Esc]", "Menu")],
        );
    }
    render_info_panel(frame, layout.info_panel, snap);
}

/// Trail color: bright near the head, dim at the tail.
fn body_color(index_from_head: usize, len: usize) -> Color {
    let t = index_from_head as f64 / len.saturating_sub(1).max(1) as f64;
    let r = (BODY_BRIGHT.0 * (1.0 - t) + BODY_DIM.0 * t) as u8;
    let g = (BODY_BRIGHT.1 * (1.0 - t) + BODY_DIM.1 * t) as u8;
    let b = (BODY_BRIGHT.2 * (1.0 - t) + BODY_DIM.2 * t) as u8;
    Color::Rgb(r, g, b)
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &SnakeSnapshot) {
    let grid_w = game.grid_width.max(0) as usize;
    let grid_h = game.grid_height.max(0) as usize;
    let field_w = (grid_w as u16 + 2).min(area.width);
    let field_h = (grid_h.div_ceil(2) as u16 + 2).min(area.height);
    let field = Rect::new(
        area.x + area.width.saturating_sub(field_w) / 2,
        area.y,
        field_w,
        field_h,
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(80, 80, 80)));
    let inner = block.inner(field);
    frame.render_widget(block, field);

    let mut canvas = PixelCanvas::new(grid_w, grid_h);
    canvas.set(game.food.x as i64, game.food.y as i64, FOOD_COLOR);

    // Trail is stored oldest first
    let len = game.trail.len();
    for (i, cell) in game.trail.iter().rev().enumerate() {
        canvas.set(cell.x as i64, cell.y as i64, body_color(i, len));
    }
    canvas.set(game.head.x as i64, game.head.y as i64, HEAD_COLOR);

    canvas.render(frame, inner);
}

fn render_info_panel(frame: &mut Frame, area: Rect, snap: &FrameSnapshot<SnakeSnapshot>) {
    let inner = render_info_panel_frame(frame, area);
    let game = &snap.state;

    let mut lines = score_lines(snap.score, snap.high_score);
    lines.extend([
        Line::from(""),
        info_line("Length", (game.trail.len() + 1).to_string()),
        info_line("Speed", format!("{}ms", game.move_interval_ms)),
        info_line("Grid", format!("{}x{}", game.grid_width, game.grid_height)),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(HEAD_COLOR)),
            Span::styled("Head", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {FULL_BLOCK} "),
                Style::default().fg(body_color(0, 2)),
            ),
            Span::styled("Body", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(format!(" {FULL_BLOCK} "), Style::default().fg(FOOD_COLOR)),
            Span::styled("Food", Style::default().fg(Color::DarkGray)),
        ]),
    ]);

    frame.render_widget(Paragraph::new(lines), inner);
}

//! Shared UI components for the game scenes.

use arcade::Phase;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const HALF_TOP: char = '\u{2580}'; // ▀: fg fills the top half, bg the bottom half
pub const FULL_BLOCK: char = '\u{2588}'; // █
pub const EMPTY_BG: Color = Color::Rgb(12, 12, 18);

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Main content area - top left, inside outer border
    pub content: Rect,
    /// Status bar area (2 lines) - bottom left, inside outer border
    pub status_bar: Rect,
    /// Info panel area - right side, with its own border
    pub info_panel: Rect,
}

/// Create the standard game layout with an outer border.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [content area]                │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(content_min_height), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Render a status bar (2 lines: status message + controls).
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Status bar for every phase except Running, which the scene supplies.
///
/// Returns `true` if it rendered.
pub fn render_phase_status_bar(frame: &mut Frame, area: Rect, phase: Phase) -> bool {
    match phase {
        Phase::Idle => render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightGreen,
            &[("[Space]", "Start"), ("[Esc]", "Menu")],
        ),
        Phase::Paused => render_status_bar(
            frame,
            area,
            "Paused",
            Color::Yellow,
            &[("[P]", "Resume"), ("[Esc]", "Menu")],
        ),
        Phase::GameOver => render_status_bar(
            frame,
            area,
            "Game over",
            Color::Red,
            &[("[Space]", "Play again"), ("[Esc]", "Menu")],
        ),
        Phase::Running => return false,
    }
    true
}

/// Render an info panel frame with the standard " Info " title.
///
/// Returns the inner Rect for content rendering.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// One "Label: value" row for an info panel.
pub fn info_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// Score and best-score rows shared by every info panel.
pub fn score_lines(score: u32, high_score: u32) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        info_line("Best", high_score.to_string()),
    ]
}

/// Center a one-line prompt on the play field.
pub fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    if area.height < 3 || area.width < prompt.len() as u16 {
        return;
    }

    let center_y = area.y + area.height / 2;
    let x = area.x + area.width.saturating_sub(prompt.len() as u16) / 2;

    let line = Paragraph::new(Line::from(vec![Span::styled(
        prompt.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )]));
    frame.render_widget(line, Rect::new(x, center_y, prompt.len() as u16, 1));
}

/// Prompts for the Idle and Paused phases.
pub fn render_phase_prompt(frame: &mut Frame, area: Rect, phase: Phase) {
    match phase {
        Phase::Idle => render_prompt(frame, area, "[ Press Space to Start ]"),
        Phase::Paused => render_prompt(frame, area, "[ Paused ]"),
        Phase::Running | Phase::GameOver => {}
    }
}

/// Render a compact game-over banner at the bottom of an area.
///
/// The area is not cleared, so the final board stays visible behind it.
pub fn render_game_over_banner(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    score: u32,
    high_score: u32,
    new_high_score: bool,
) {
    let banner_height: u16 = 5;
    if area.height < banner_height {
        return;
    }
    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height - banner_height,
        width: area.width,
        height: banner_height,
    };
    frame.render_widget(Clear, banner_area);

    let color = if new_high_score {
        Color::Green
    } else {
        Color::Red
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let title = if new_high_score {
        "NEW HIGH SCORE!"
    } else {
        "GAME OVER"
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(message.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(
            format!("Score {score}  ·  Best {high_score}"),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            "[Space] Play again  [Esc] Menu",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Off-screen pixel buffer drawn with half blocks.
///
/// Two vertical pixels are packed into one terminal row via `▀`
/// (fg = top pixel, bg = bottom pixel), one terminal column per pixel.
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Option<Color>>,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; width * height],
        }
    }

    /// Canvas filling `area`: one pixel per column, two per row.
    pub fn for_area(area: Rect) -> Self {
        Self::new(area.width as usize, area.height as usize * 2)
    }

    pub fn set(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = Some(color);
        }
    }

    /// Fill a world-space rectangle scaled onto the canvas, clipped to it.
    pub fn fill_world_rect(
        &mut self,
        world: (f64, f64),
        rect: (f64, f64, f64, f64),
        color: Color,
    ) {
        let sx = self.width as f64 / world.0;
        let sy = self.height as f64 / world.1;
        let (x, y, w, h) = rect;
        let x0 = (x * sx).floor() as i64;
        let y0 = (y * sy).floor() as i64;
        // Always at least one pixel so thin objects stay visible
        let x1 = ((x + w) * sx).ceil().max(x0 as f64 + 1.0) as i64;
        let y1 = ((y + h) * sy).ceil().max(y0 as f64 + 1.0) as i64;
        for py in y0.max(0)..y1.min(self.height as i64) {
            for px in x0.max(0)..x1.min(self.width as i64) {
                self.set(px, py, color);
            }
        }
    }

    /// Draw the canvas centered horizontally in `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let render_w = (self.width as u16).min(area.width);
        let x_off = area.x + area.width.saturating_sub(render_w) / 2;
        let rows = self.height.div_ceil(2);

        for term_row in 0..rows {
            let row_y = area.y + term_row as u16;
            if row_y >= area.y + area.height {
                break;
            }
            let mut spans: Vec<Span> = Vec::new();
            let mut cur_fg = Color::Reset;
            let mut cur_bg = Color::Reset;
            let mut cur_text = String::new();

            for x in 0..render_w as usize {
                let fg = self.pixel(x, term_row * 2);
                let bg = self.pixel(x, term_row * 2 + 1);
                if fg != cur_fg || bg != cur_bg {
                    if !cur_text.is_empty() {
                        spans.push(Span::styled(
                            std::mem::take(&mut cur_text),
                            Style::default().fg(cur_fg).bg(cur_bg),
                        ));
                    }
                    cur_fg = fg;
                    cur_bg = bg;
                }
                cur_text.push(HALF_TOP);
            }
            if !cur_text.is_empty() {
                spans.push(Span::styled(
                    cur_text,
                    Style::default().fg(cur_fg).bg(cur_bg),
                ));
            }

            frame.render_widget(
                Paragraph::new(Line::from(spans)),
                Rect::new(x_off, row_y, render_w, 1),
            );
        }
    }

    fn pixel(&self, x: usize, y: usize) -> Color {
        if y < self.height {
            self.pixels[y * self.width + x].unwrap_or(EMPTY_BG)
        } else {
            EMPTY_BG
        }
    }
}

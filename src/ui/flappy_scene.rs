//! UI rendering for Flappy.

use crate::ui::game_common::{
    create_game_layout, info_line, render_game_over_banner, render_info_panel_frame,
    render_phase_prompt, render_phase_status_bar, render_status_bar, score_lines, PixelCanvas,
};
use arcade::core::FrameSnapshot;
use arcade::games::flappy::FlappySnapshot;
use arcade::Phase;
use ratatui::{layout::Rect, style::Color, text::Line, widgets::Paragraph, Frame};

const PIPE_COLOR: Color = Color::Rgb(40, 170, 60);
const BIRD_COLOR: Color = Color::Rgb(255, 220, 40);
const BIRD_FLAP_COLOR: Color = Color::Rgb(255, 250, 160);

pub fn render_flappy(frame: &mut Frame, area: Rect, snap: &FrameSnapshot<FlappySnapshot>) {
    let layout = create_game_layout(frame, area, " Flappy ", Color::Cyan, 10, 22);

    render_play_area(frame, layout.content, &snap.state);
    render_phase_prompt(frame, layout.content, snap.phase);
    if snap.phase == Phase::GameOver {
        render_game_over_banner(
            frame,
            layout.content,
            "The bird went down.",
            snap.score,
            snap.high_score,
            snap.new_high_score,
        );
    }

    if !render_phase_status_bar(frame, layout.status_bar, snap.phase) {
        render_status_bar(
            frame,
            layout.status_bar,
            "Fly!",
            Color::Cyan,
            &[("[Space]", "Flap"), ("[P]", "Pause"), ("[Esc]", "Menu")],
        );
    }
    render_info_panel(frame, layout.info_panel, snap);
}

fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappySnapshot) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let world = (game.world_width, game.world_height);
    let mut canvas = PixelCanvas::for_area(area);

    for pipe in &game.pipes {
        canvas.fill_world_rect(world, (pipe.x, 0.0, pipe.width, pipe.gap_top), PIPE_COLOR);
        canvas.fill_world_rect(
            world,
            (
                pipe.x,
                pipe.gap_bottom,
                pipe.width,
                game.world_height - pipe.gap_bottom,
            ),
            PIPE_COLOR,
        );
    }

    // Brighter while climbing
    let bird_color = if game.velocity < 0.0 {
        BIRD_FLAP_COLOR
    } else {
        BIRD_COLOR
    };
    let bird = game.bird;
    canvas.fill_world_rect(world, (bird.x, bird.y, bird.width, bird.height), bird_color);

    canvas.render(frame, area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, snap: &FrameSnapshot<FlappySnapshot>) {
    let inner = render_info_panel_frame(frame, area);
    let game = &snap.state;

    let mut lines = score_lines(snap.score, snap.high_score);
    lines.extend([
        Line::from(""),
        info_line("Speed", format!("{:.2}", game.speed)),
        info_line("Pipes", game.pipes.len().to_string()),
        info_line("Flaps", game.flaps.to_string()),
    ]);

    frame.render_widget(Paragraph::new(lines), inner);
}

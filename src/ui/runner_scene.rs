//! UI rendering for Runner.

use crate::ui::game_common::{
    create_game_layout, info_line, render_game_over_banner, render_info_panel_frame,
    render_phase_prompt, render_phase_status_bar, render_status_bar, score_lines, PixelCanvas,
};
use arcade::core::FrameSnapshot;
use arcade::games::runner::RunnerSnapshot;
use arcade::Phase;
use ratatui::{layout::Rect, style::Color, text::Line, widgets::Paragraph, Frame};

const RUNNER_COLOR: Color = Color::Rgb(230, 230, 230);
const OBSTACLE_COLOR: Color = Color::Rgb(200, 90, 60);
const GROUND_COLOR: Color = Color::Rgb(90, 70, 50);

pub fn render_runner(frame: &mut Frame, area: Rect, snap: &FrameSnapshot<RunnerSnapshot>) {
    let layout = create_game_layout(frame, area, " Runner ", Color::Yellow, 8, 22);

    render_play_area(frame, layout.content, &snap.state);
    render_phase_prompt(frame, layout.content, snap.phase);
    if snap.phase == Phase::GameOver {
        render_game_over_banner(
            frame,
            layout.content,
            "Tripped over an obstacle.",
            snap.score,
            snap.high_score,
            snap.new_high_score,
        );
    }

    if !render_phase_status_bar(frame, layout.status_bar, snap.phase) {
        render_status_bar(
            frame,
            layout.status_bar,
            "Run!",
            Color::Yellow,
            &[("[Space]", "Jump"), ("[P]", "Pause"), ("[Esc]", "Menu")],
        );
    }
    render_info_panel(frame, layout.info_panel, snap);
}

fn render_play_area(frame: &mut Frame, area: Rect, game: &RunnerSnapshot) {
    if area.width == 0 || area.height < 2 {
        return;
    }
    // Leave the bottom terminal row for the ground strip
    let field = Rect {
        height: area.height - 1,
        ..area
    };
    let world = (game.world_width, game.world_height);
    let mut canvas = PixelCanvas::for_area(field);

    for obstacle in &game.obstacles {
        canvas.fill_world_rect(
            world,
            (obstacle.x, obstacle.y, obstacle.width, obstacle.height),
            OBSTACLE_COLOR,
        );
    }
    let runner = game.runner;
    canvas.fill_world_rect(
        world,
        (runner.x, runner.y, runner.width, runner.height),
        RUNNER_COLOR,
    );
    canvas.render(frame, field);

    let mut ground = PixelCanvas::new(area.width as usize, 2);
    ground.fill_world_rect((1.0, 1.0), (0.0, 0.0, 1.0, 1.0), GROUND_COLOR);
    ground.render(
        frame,
        Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        },
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, snap: &FrameSnapshot<RunnerSnapshot>) {
    let inner = render_info_panel_frame(frame, area);
    let game = &snap.state;

    let mut lines = score_lines(snap.score, snap.high_score);
    lines.extend([
        Line::from(""),
        info_line("Speed", format!("{:.1}", game.speed)),
        info_line(
            "State",
            if game.grounded { "running" } else { "airborne" }.to_string(),
        ),
    ]);

    frame.render_widget(Paragraph::new(lines), inner);
}

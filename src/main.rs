mod app;
mod input;
mod ui;

use app::App;
use arcade::core::constants::LOG_FILE;
use arcade::utils::persistence::{save_path, FileScoreStore};
use arcade::{ArcadeConfig, ArcadeError};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::time::Instant;

/// The terminal UI owns stdout/stderr, so log lines go to ~/.arcade/arcade.log.
fn init_logging() -> Result<(), ArcadeError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(save_path(LOG_FILE)?)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<(), ArcadeError> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("arcade {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Arcade - Snake, Flappy, Runner and Tic-Tac-Toe\n");
                println!("Usage: arcade [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!("\nHigh scores and config.json live in ~/.arcade/");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'arcade --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    init_logging()?;
    let config = ArcadeConfig::load()?;
    let store = FileScoreStore::new()?;
    info!("high scores in {}", store.dir().display());
    let mut app = App::new(&config, store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), ArcadeError> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = app.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) => input::map_key(key),
                Event::Mouse(mouse) => input::map_mouse(mouse),
                _ => None,
            };
            if let Some(action) = action {
                app.handle(action, Instant::now());
            }
        }

        app.update(Instant::now());

        if app.should_quit {
            info!("bye");
            return Ok(());
        }
    }
}

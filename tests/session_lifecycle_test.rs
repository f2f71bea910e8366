//! Integration test: session lifecycle and high-score persistence
//!
//! High scores go through `FileScoreStore` in a scratch directory, read once
//! when a loop is created and written only when beaten.

use arcade::games::runner::{RunnerConfig, RunnerRules};
use arcade::games::snake::{Position, SnakeConfig, SnakeRules};
use arcade::utils::{FileScoreStore, MemoryScoreStore, ScoreStore};
use arcade::{Direction, GameLoop, Input, Phase};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("arcade_it_{name}_{}", std::process::id()));
    fs::remove_dir_all(&dir).ok();
    dir
}

fn snake_loop<S: ScoreStore>(store: S) -> GameLoop<SnakeRules, S, ChaCha8Rng> {
    GameLoop::new(
        SnakeRules::new(SnakeConfig::default()),
        store,
        ChaCha8Rng::seed_from_u64(5),
    )
}

/// Eat `foods` cells in a row along the top edge, then turn into the wall.
fn play_snake<S: ScoreStore>(
    game: &mut GameLoop<SnakeRules, S, ChaCha8Rng>,
    t0: Instant,
    foods: u32,
) {
    game.handle_input(Input::Primary, t0);
    let mut now = t0;
    for _ in 0..foods {
        let ahead = game.state().head.step(Direction::Right);
        game.state_mut().food = ahead;
        now += ms(game.state().move_interval_ms);
        game.update(now);
    }
    game.state_mut().food = Position::new(19, 19);
    game.handle_input(Input::Direction(Direction::Up), now);
    now += ms(game.state().move_interval_ms);
    game.update(now);
    assert_eq!(game.phase(), Phase::GameOver);
}

#[test]
fn test_high_score_survives_restart() {
    let dir = scratch_dir("restart");
    let t0 = Instant::now();

    let mut first = snake_loop(FileScoreStore::with_dir(&dir));
    assert_eq!(first.high_score(), 0);
    play_snake(&mut first, t0, 3);
    assert_eq!(first.score(), 30);

    let path = first.store().path_for("snake");
    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "30");

    let second = snake_loop(FileScoreStore::with_dir(&dir));
    assert_eq!(second.high_score(), 30);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_lower_score_does_not_overwrite() {
    let dir = scratch_dir("lower");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("snake.score"), "50").unwrap();

    let mut game = snake_loop(FileScoreStore::with_dir(&dir));
    assert_eq!(game.high_score(), 50);
    play_snake(&mut game, Instant::now(), 2);

    assert_eq!(game.score(), 20);
    assert_eq!(game.high_score(), 50);
    assert!(!game.snapshot().new_high_score);
    assert_eq!(fs::read_to_string(dir.join("snake.score")).unwrap(), "50");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_corrupt_score_file_reads_zero() {
    let dir = scratch_dir("corrupt");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("snake.score"), "lots").unwrap();

    let mut game = snake_loop(FileScoreStore::with_dir(&dir));
    assert_eq!(game.high_score(), 0);

    // Beating it rewrites the file with a valid value
    play_snake(&mut game, Instant::now(), 1);
    assert_eq!(fs::read_to_string(dir.join("snake.score")).unwrap(), "10");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_failed_save_keeps_in_memory_high_score() {
    let mut game = snake_loop(MemoryScoreStore::read_only());
    play_snake(&mut game, Instant::now(), 2);

    assert_eq!(game.high_score(), 20);
    assert!(game.snapshot().new_high_score);
    assert_eq!(game.store().get("snake"), None);
}

#[test]
fn test_games_keep_separate_high_scores() {
    let dir = scratch_dir("separate");
    let t0 = Instant::now();

    let mut snake = snake_loop(FileScoreStore::with_dir(&dir));
    play_snake(&mut snake, t0, 1);

    let runner: GameLoop<RunnerRules, _, ChaCha8Rng> = GameLoop::new(
        RunnerRules::new(RunnerConfig::default()),
        FileScoreStore::with_dir(&dir),
        ChaCha8Rng::seed_from_u64(5),
    );
    assert_eq!(runner.high_score(), 0);
    assert!(dir.join("snake.score").exists());
    assert!(!dir.join("runner.score").exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_stopped_session_never_ticks() {
    let mut game = snake_loop(MemoryScoreStore::default());
    let t0 = Instant::now();
    game.handle_input(Input::Primary, t0);
    game.update(t0 + ms(150));
    assert_eq!(game.session().ticks, 1);

    game.stop();
    assert_eq!(game.phase(), Phase::Idle);
    assert!(!game.scheduler().is_running());
    assert_eq!(game.next_wakeup(t0 + ms(300)), None);
    assert!(!game.update(t0 + ms(300)));
    assert_eq!(game.session().ticks, 0);

    // Idempotent
    game.stop();
    assert_eq!(game.phase(), Phase::Idle);
}

#[test]
fn test_idle_ignores_everything_but_start() {
    let mut game = snake_loop(MemoryScoreStore::default());
    let t0 = Instant::now();

    assert!(!game.handle_input(Input::Direction(Direction::Down), t0));
    assert!(!game.handle_input(Input::Pause, t0));
    assert!(!game.update(t0 + ms(1000)));
    assert_eq!(game.phase(), Phase::Idle);

    assert!(game.handle_input(Input::Primary, t0));
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.state().next_direction, Direction::Right);
}

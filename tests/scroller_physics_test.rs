//! Integration test: Flappy and Runner on the per-frame cadence
//!
//! Frame deltas are banked and consumed in 16ms physics steps, so the
//! outcome depends on elapsed time rather than on how often the loop polls.

use arcade::core::kinematics::free_fall_y;
use arcade::games::flappy::{FlappyConfig, FlappyRules};
use arcade::games::runner::{RunnerConfig, RunnerRules};
use arcade::utils::MemoryScoreStore;
use arcade::{Direction, GameLoop, Input, Phase};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn flappy() -> GameLoop<FlappyRules, MemoryScoreStore, ChaCha8Rng> {
    GameLoop::new(
        FlappyRules::new(FlappyConfig::default()),
        MemoryScoreStore::default(),
        ChaCha8Rng::seed_from_u64(11),
    )
}

fn runner() -> GameLoop<RunnerRules, MemoryScoreStore, ChaCha8Rng> {
    GameLoop::new(
        RunnerRules::new(RunnerConfig::default()),
        MemoryScoreStore::default(),
        ChaCha8Rng::seed_from_u64(11),
    )
}

#[test]
fn test_flappy_falls_to_floor_without_input() {
    let mut game = flappy();
    let config = FlappyConfig::default();
    let t0 = Instant::now();
    game.handle_input(Input::Primary, t0);

    let mut now = t0;
    for _ in 0..33 {
        now += ms(16);
        assert!(game.update(now));
    }
    assert_eq!(game.phase(), Phase::Running);
    let expected = free_fall_y(config.start_y, &config.body_params(), 33);
    assert!((game.state().bird.y - expected).abs() < 1e-9);

    now += ms(16);
    game.update(now);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.session().ticks, 34);
    assert_eq!(game.state().bird.y, 570.0);
}

#[test]
fn test_frame_rate_does_not_change_simulation() {
    let t0 = Instant::now();

    let mut fast = flappy();
    fast.handle_input(Input::Primary, t0);
    for i in 1..=12 {
        fast.update(t0 + ms(8 * i));
    }

    let mut slow = flappy();
    slow.handle_input(Input::Primary, t0);
    slow.update(t0 + ms(96));

    assert_eq!(fast.session().ticks, 6);
    assert_eq!(slow.session().ticks, 6);
    assert_eq!(fast.state().bird, slow.state().bird);
}

#[test]
fn test_long_stall_is_clamped() {
    let mut game = flappy();
    let t0 = Instant::now();
    game.handle_input(Input::Primary, t0);

    // A 2s stall counts as one 100ms frame: six steps, 4ms banked
    game.update(t0 + ms(2000));
    assert_eq!(game.session().ticks, 6);
    game.update(t0 + ms(2012));
    assert_eq!(game.session().ticks, 7);
}

#[test]
fn test_flap_climbs() {
    let mut game = flappy();
    let t0 = Instant::now();
    game.handle_input(Input::Primary, t0);
    game.handle_input(Input::Primary, t0);
    game.update(t0 + ms(16));

    assert_eq!(game.state().bird.y, 238.0);
    assert_eq!(game.state().flaps, 1);
}

#[test]
fn test_flappy_pipe_hit_ends_session() {
    let mut game = flappy();
    let t0 = Instant::now();
    game.handle_input(Input::Primary, t0);
    // Gap far above the bird: the lower pipe covers y >= 200
    game.state_mut().pipes.push(80.0, 50.0);

    let mut now = t0;
    for _ in 0..20 {
        if game.phase() != Phase::Running {
            break;
        }
        now += ms(16);
        game.update(now);
    }
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_runner_jump_clears_obstacle() {
    let mut game = runner();
    let t0 = Instant::now();
    game.handle_input(Input::Primary, t0);
    game.state_mut().obstacles.push(120.0, 30.0);
    game.handle_input(Input::Direction(Direction::Up), t0);

    let mut now = t0;
    for _ in 0..20 {
        now += ms(16);
        game.update(now);
    }
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.score(), 1);
    assert_eq!(game.state().jumps, 1);
}

#[test]
fn test_runner_without_jump_hits_obstacle() {
    let mut game = runner();
    let t0 = Instant::now();
    game.handle_input(Input::Primary, t0);
    game.state_mut().obstacles.push(120.0, 30.0);

    let mut now = t0;
    for _ in 0..20 {
        now += ms(16);
        game.update(now);
    }
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.session().ticks, 11);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_runner_pause_freezes_world() {
    let mut game = runner();
    let t0 = Instant::now();
    game.handle_input(Input::Primary, t0);
    game.update(t0 + ms(32));
    assert_eq!(game.session().ticks, 2);

    game.handle_input(Input::Pause, t0 + ms(40));
    assert_eq!(game.phase(), Phase::Paused);
    assert!(!game.update(t0 + ms(1000)));
    assert_eq!(game.session().ticks, 2);

    // Time spent paused is not replayed on resume
    game.handle_input(Input::Pause, t0 + ms(1000));
    game.update(t0 + ms(1016));
    assert_eq!(game.session().ticks, 3);
}

//! Runner game logic: jump input, physics tick, collision and scoring.

use super::types::*;
use crate::core::collision::any_overlap;
use crate::core::game_loop::{Deferrals, Rules};
use crate::core::input::{Direction, Input};
use crate::core::tick::Cadence;
use crate::games::GameKind;
use rand::Rng;
use std::convert::Infallible;

/// Queue a jump for the next physics tick.
pub fn queue_jump(game: &mut RunnerGame) {
    game.jump_queued = true;
}

/// One 16ms physics tick.
///
/// A queued jump only fires when the runner stands on the ground; it is
/// dropped otherwise. Landing on the ground is not a collision.
pub fn process_tick<R: Rng>(game: &mut RunnerGame, config: &RunnerConfig, rng: &mut R) {
    let params = config.body_params();
    if game.jump_queued && game.runner.is_grounded(&params) {
        game.runner.jump(&params);
        game.jumps += 1;
    }
    game.jump_queued = false;

    game.runner.step(&params);
    game.obstacles.step(rng);
    game.score += game.obstacles.mark_passed(config.runner_x);
}

/// The runner's top edge left the world. Only reachable with a jump impulse
/// stronger than the default.
pub fn above_ceiling(game: &RunnerGame) -> bool {
    game.runner.y < 0.0
}

pub fn hit_obstacle(game: &RunnerGame, config: &RunnerConfig) -> bool {
    let runner = game.runner_box(config);
    any_overlap(
        &runner,
        game.obstacles
            .obstacles()
            .iter()
            .map(|o| config.obstacle_box(o)),
    )
}

pub struct RunnerRules {
    pub config: RunnerConfig,
}

impl RunnerRules {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }
}

impl Rules for RunnerRules {
    type State = RunnerGame;
    type Snapshot = RunnerSnapshot;
    type Deferred = Infallible;

    const KIND: GameKind = GameKind::Runner;

    fn cadence(&self) -> Cadence {
        Cadence::PerFrame
    }

    fn new_state<R: Rng>(&self, rng: &mut R) -> RunnerGame {
        RunnerGame::new(&self.config, rng)
    }

    fn handle_input(
        &self,
        state: &mut RunnerGame,
        input: Input,
        _tasks: &mut Deferrals<'_, Infallible>,
    ) {
        if matches!(input, Input::Primary | Input::Direction(Direction::Up)) {
            queue_jump(state);
        }
    }

    fn advance<R: Rng>(&self, state: &mut RunnerGame, rng: &mut R) {
        process_tick(state, &self.config, rng);
    }

    fn collides(&self, state: &RunnerGame) -> bool {
        above_ceiling(state) || hit_obstacle(state, &self.config)
    }

    fn score(&self, state: &RunnerGame) -> u32 {
        state.score
    }

    fn snapshot(&self, state: &RunnerGame) -> RunnerSnapshot {
        RunnerSnapshot {
            world_width: self.config.world_width,
            world_height: self.config.world_height,
            runner: state.runner_box(&self.config),
            grounded: state.runner.is_grounded(&self.config.body_params()),
            obstacles: state
                .obstacles
                .obstacles()
                .iter()
                .map(|o| self.config.obstacle_box(o))
                .collect(),
            speed: state.obstacles.speed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup() -> (RunnerGame, RunnerConfig, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let config = RunnerConfig::default();
        let game = RunnerGame::new(&config, &mut rng);
        (game, config, rng)
    }

    #[test]
    fn test_starts_on_ground() {
        let (game, config, _) = setup();
        assert_eq!(game.runner.y, 160.0);
        assert!(game.runner.is_grounded(&config.body_params()));
        assert_eq!(game.runner_box(&config).bottom(), 200.0);
    }

    #[test]
    fn test_standing_still_is_not_terminal() {
        let (mut game, config, mut rng) = setup();
        for _ in 0..40 {
            process_tick(&mut game, &config, &mut rng);
            assert_eq!(game.runner.y, 160.0);
            assert!(!hit_obstacle(&game, &config));
        }
    }

    #[test]
    fn test_jump_only_from_ground() {
        let (mut game, config, mut rng) = setup();
        queue_jump(&mut game);
        process_tick(&mut game, &config, &mut rng);
        assert_eq!(game.runner.y, 148.0);
        assert_eq!(game.jumps, 1);

        // Mid-air jump is dropped, not kept for later
        queue_jump(&mut game);
        process_tick(&mut game, &config, &mut rng);
        assert_eq!(game.jumps, 1);
        assert!(!game.jump_queued);
        assert!((game.runner.velocity - (-10.8)).abs() < 1e-9);
    }

    #[test]
    fn test_lands_after_full_arc() {
        let (mut game, config, mut rng) = setup();
        queue_jump(&mut game);
        for _ in 0..40 {
            process_tick(&mut game, &config, &mut rng);
            assert!(game.runner.y < 160.0);
        }
        process_tick(&mut game, &config, &mut rng);
        process_tick(&mut game, &config, &mut rng);
        assert_eq!(game.runner.y, 160.0);
        assert_eq!(game.runner.velocity, 0.0);
    }

    #[test]
    fn test_obstacle_collision() {
        let (mut game, config, _) = setup();
        game.obstacles.push(45.0, 30.0);
        assert!(hit_obstacle(&game, &config));
    }

    #[test]
    fn test_touching_obstacle_is_safe() {
        let (mut game, config, _) = setup();
        // Right edge exactly at the runner's left edge
        game.obstacles.push(20.0, 50.0);
        // Left edge exactly at the runner's right edge
        game.obstacles.push(60.0, 50.0);
        assert!(!hit_obstacle(&game, &config));
    }

    #[test]
    fn test_jump_clears_obstacle_and_scores() {
        let (mut game, config, mut rng) = setup();
        game.obstacles.push(120.0, 50.0);
        queue_jump(&mut game);
        for _ in 0..20 {
            process_tick(&mut game, &config, &mut rng);
            assert!(!hit_obstacle(&game, &config));
        }
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_no_jump_hits_obstacle() {
        let (mut game, config, mut rng) = setup();
        game.obstacles.push(120.0, 20.0);
        let mut hit = false;
        for _ in 0..20 {
            process_tick(&mut game, &config, &mut rng);
            hit |= hit_obstacle(&game, &config);
        }
        assert!(hit);
    }

    #[test]
    fn test_ceiling_ends_game() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let config = RunnerConfig {
            jump_impulse: -25.0,
            ..RunnerConfig::default()
        };
        let rules = RunnerRules::new(config);
        let mut game = RunnerGame::new(&config, &mut rng);
        queue_jump(&mut game);

        let mut ticks = 0;
        while !rules.collides(&game) && ticks < 30 {
            process_tick(&mut game, &config, &mut rng);
            ticks += 1;
        }
        assert!(game.runner.y < 0.0);
        assert!(above_ceiling(&game));
        assert!(!hit_obstacle(&game, &config));
    }

    #[test]
    fn test_default_jump_stays_below_ceiling() {
        let (mut game, config, mut rng) = setup();
        queue_jump(&mut game);
        for _ in 0..45 {
            process_tick(&mut game, &config, &mut rng);
            assert!(!above_ceiling(&game));
        }
    }

    #[test]
    fn test_speed_steps_every_300_ticks() {
        let (mut game, config, mut rng) = setup();
        for _ in 0..299 {
            process_tick(&mut game, &config, &mut rng);
        }
        assert_eq!(game.obstacles.speed(), 6.0);
        process_tick(&mut game, &config, &mut rng);
        assert_eq!(game.obstacles.speed(), 6.5);
    }
}

//! Flappy game logic: flap input, physics tick, pipe collision and scoring.

use super::types::*;
use crate::core::collision::any_overlap;
use crate::core::game_loop::{Deferrals, Rules};
use crate::core::input::Input;
use crate::core::tick::Cadence;
use crate::games::GameKind;
use rand::Rng;
use std::convert::Infallible;

/// Flap: velocity is overridden, not added to.
pub fn flap(game: &mut FlappyGame, config: &FlappyConfig) {
    game.bird.jump(&config.body_params());
    game.flaps += 1;
}

/// One 16ms physics tick: bird, then pipes, then scoring.
pub fn process_tick<R: Rng>(game: &mut FlappyGame, config: &FlappyConfig, rng: &mut R) {
    game.bird.step(&config.body_params());
    game.pipes.step(rng);
    game.score += game.pipes.mark_passed(config.bird_x);
}

/// Bird overlaps a pipe.
pub fn hit_pipe(game: &FlappyGame, config: &FlappyConfig) -> bool {
    let bird = game.bird_box(config);
    any_overlap(
        &bird,
        game.pipes
            .obstacles()
            .iter()
            .flat_map(|pipe| config.pipe_boxes(pipe)),
    )
}

/// Bird touches the ground or left the top of the world.
pub fn out_of_bounds(game: &FlappyGame, config: &FlappyConfig) -> bool {
    game.bird.y < 0.0 || game.bird.is_grounded(&config.body_params())
}

pub struct FlappyRules {
    pub config: FlappyConfig,
}

impl FlappyRules {
    pub fn new(config: FlappyConfig) -> Self {
        Self { config }
    }
}

impl Rules for FlappyRules {
    type State = FlappyGame;
    type Snapshot = FlappySnapshot;
    type Deferred = Infallible;

    const KIND: GameKind = GameKind::Flappy;

    fn cadence(&self) -> Cadence {
        Cadence::PerFrame
    }

    fn new_state<R: Rng>(&self, rng: &mut R) -> FlappyGame {
        FlappyGame::new(&self.config, rng)
    }

    fn handle_input(
        &self,
        state: &mut FlappyGame,
        input: Input,
        _tasks: &mut Deferrals<'_, Infallible>,
    ) {
        if input == Input::Primary {
            flap(state, &self.config);
        }
    }

    fn advance<R: Rng>(&self, state: &mut FlappyGame, rng: &mut R) {
        process_tick(state, &self.config, rng);
    }

    fn collides(&self, state: &FlappyGame) -> bool {
        out_of_bounds(state, &self.config) || hit_pipe(state, &self.config)
    }

    fn score(&self, state: &FlappyGame) -> u32 {
        state.score
    }

    fn snapshot(&self, state: &FlappyGame) -> FlappySnapshot {
        FlappySnapshot {
            world_width: self.config.world_width,
            world_height: self.config.world_height,
            bird: state.bird_box(&self.config),
            velocity: state.bird.velocity,
            pipes: state
                .pipes
                .obstacles()
                .iter()
                .map(|pipe| PipeView {
                    x: pipe.x,
                    width: pipe.width,
                    gap_top: pipe.size,
                    gap_bottom: pipe.size + self.config.pipe_gap,
                })
                .collect(),
            speed: state.pipes.speed(),
            flaps: state.flaps,
        }
    }
}

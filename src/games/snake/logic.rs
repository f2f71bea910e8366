//! Snake game logic: movement, input processing, collision detection.

use super::types::*;
use crate::core::game_loop::{Deferrals, Rules};
use crate::core::input::{Direction, Input};
use crate::core::tick::Cadence;
use crate::games::GameKind;
use rand::Rng;
use std::convert::Infallible;
use std::time::Duration;

/// Buffer the direction for the next move, replacing any earlier buffered
/// turn. A reversal of the last executed move is ignored.
pub fn process_direction(game: &mut SnakeGame, direction: Direction) {
    if direction != game.direction.opposite() {
        game.next_direction = direction;
    }
}

/// Move the snake one cell.
///
/// The previous head joins the trail and the trail drops its oldest cells
/// down to the target length, so a length raised by eating shows up one
/// move later.
pub fn move_snake<R: Rng>(game: &mut SnakeGame, config: &SnakeConfig, rng: &mut R) {
    game.direction = game.next_direction;

    if game.length > 0 {
        game.trail.push_back(game.head);
    }
    while game.trail.len() > game.length {
        game.trail.pop_front();
    }

    game.head = game.head.step(game.direction);

    if game.head == game.food && !hit_something(game) {
        eat_food(game, config, rng);
    }
}

fn eat_food<R: Rng>(game: &mut SnakeGame, config: &SnakeConfig, rng: &mut R) {
    game.length += 1;
    game.score += config.points_per_food;
    game.foods_eaten += 1;

    if config.foods_per_speedup > 0 && game.foods_eaten % config.foods_per_speedup == 0 {
        game.move_interval_ms = game
            .move_interval_ms
            .saturating_sub(config.interval_step_ms)
            .max(config.min_interval_ms);
    }

    // Board full: the old food stays under the head and can't be eaten again
    if let Some(food) = spawn_food(game, rng) {
        game.food = food;
    }
}

/// Head outside the grid or on the trail.
pub fn hit_something(game: &SnakeGame) -> bool {
    !game.in_bounds(game.head) || game.trail.contains(&game.head)
}

pub struct SnakeRules {
    pub config: SnakeConfig,
}

impl SnakeRules {
    pub fn new(config: SnakeConfig) -> Self {
        Self { config }
    }
}

impl Rules for SnakeRules {
    type State = SnakeGame;
    type Snapshot = SnakeSnapshot;
    type Deferred = Infallible;

    const KIND: GameKind = GameKind::Snake;

    fn cadence(&self) -> Cadence {
        Cadence::Fixed(Duration::from_millis(self.config.initial_interval_ms))
    }

    fn new_state<R: Rng>(&self, rng: &mut R) -> SnakeGame {
        SnakeGame::new(&self.config, rng)
    }

    fn handle_input(
        &self,
        state: &mut SnakeGame,
        input: Input,
        _tasks: &mut Deferrals<'_, Infallible>,
    ) {
        if let Input::Direction(direction) = input {
            process_direction(state, direction);
        }
    }

    fn advance<R: Rng>(&self, state: &mut SnakeGame, rng: &mut R) {
        move_snake(state, &self.config, rng);
    }

    fn collides(&self, state: &SnakeGame) -> bool {
        hit_something(state)
    }

    fn score(&self, state: &SnakeGame) -> u32 {
        state.score
    }

    fn snapshot(&self, state: &SnakeGame) -> SnakeSnapshot {
        SnakeSnapshot {
            grid_width: state.grid_width,
            grid_height: state.grid_height,
            head: state.head,
            trail: state.trail.iter().copied().collect(),
            food: state.food,
            direction: state.direction,
            move_interval_ms: state.move_interval_ms,
        }
    }

    fn tick_interval(&self, state: &SnakeGame) -> Option<Duration> {
        Some(Duration::from_millis(state.move_interval_ms))
    }
}

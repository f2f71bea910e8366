//! Snake game data structures.

use crate::core::input::Direction;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Snake tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    pub grid_width: i16,
    pub grid_height: i16,
    /// Movement interval at the start of a session.
    pub initial_interval_ms: u64,
    /// The interval never drops below this.
    pub min_interval_ms: u64,
    /// Interval reduction applied every `foods_per_speedup` foods.
    pub interval_step_ms: u64,
    pub foods_per_speedup: u32,
    pub points_per_food: u32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            initial_interval_ms: 150,
            min_interval_ms: 50,
            interval_step_ms: 10,
            foods_per_speedup: 5,
            points_per_food: 10,
        }
    }
}

/// A position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    pub grid_width: i16,
    pub grid_height: i16,

    pub head: Position,
    /// Cells behind the head, oldest first.
    pub trail: VecDeque<Position>,
    /// Target trail length. Raised on eating; the trail catches up on the
    /// following moves.
    pub length: usize,
    /// Direction of the last move.
    pub direction: Direction,
    /// Buffered direction for the next move (prevents reversal through two
    /// quick turns within one step).
    pub next_direction: Direction,

    pub food: Position,

    pub score: u32,
    pub foods_eaten: u32,

    /// Current movement interval in milliseconds.
    pub move_interval_ms: u64,
}

impl SnakeGame {
    /// Head at the origin moving right, empty trail.
    pub fn new<R: Rng>(config: &SnakeConfig, rng: &mut R) -> Self {
        let mut game = Self {
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            head: Position::new(0, 0),
            trail: VecDeque::new(),
            length: 0,
            direction: Direction::Right,
            next_direction: Direction::Right,
            // Temporary; overwritten by spawn_food
            food: Position::new(0, 0),
            score: 0,
            foods_eaten: 0,
            move_interval_ms: config.initial_interval_ms,
        };
        if let Some(food) = spawn_food(&game, rng) {
            game.food = food;
        }
        game
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.grid_width && pos.y >= 0 && pos.y < self.grid_height
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.trail.contains(&pos)
    }
}

/// Pick a random free cell for food, or `None` when the board is full.
pub fn spawn_food<R: Rng>(game: &SnakeGame, rng: &mut R) -> Option<Position> {
    let free: Vec<Position> = (0..game.grid_height)
        .flat_map(|y| (0..game.grid_width).map(move |x| Position::new(x, y)))
        .filter(|pos| !game.occupies(*pos))
        .collect();
    free.choose(rng).copied()
}

/// Plain data handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnakeSnapshot {
    pub grid_width: i16,
    pub grid_height: i16,
    pub head: Position,
    pub trail: Vec<Position>,
    pub food: Position,
    pub direction: Direction,
    pub move_interval_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_layout() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let game = SnakeGame::new(&SnakeConfig::default(), &mut rng);
        assert_eq!(game.head, Position::new(0, 0));
        assert!(game.trail.is_empty());
        assert_eq!(game.direction, Direction::Right);
        assert_eq!(game.move_interval_ms, 150);
        assert_ne!(game.food, game.head);
        assert!(game.in_bounds(game.food));
    }

    #[test]
    fn test_spawn_food_avoids_body() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let config = SnakeConfig {
            grid_width: 3,
            grid_height: 1,
            ..SnakeConfig::default()
        };
        let mut game = SnakeGame::new(&config, &mut rng);
        game.trail.push_back(Position::new(1, 0));
        for _ in 0..20 {
            assert_eq!(spawn_food(&game, &mut rng), Some(Position::new(2, 0)));
        }

        game.trail.push_back(Position::new(2, 0));
        assert_eq!(spawn_food(&game, &mut rng), None);
    }

    #[test]
    fn test_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let game = SnakeGame::new(&SnakeConfig::default(), &mut rng);
        assert!(game.in_bounds(Position::new(19, 19)));
        assert!(!game.in_bounds(Position::new(20, 0)));
        assert!(!game.in_bounds(Position::new(0, -1)));
    }
}

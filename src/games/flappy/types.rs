//! Flappy data structures.
//!
//! World units: the world is 400 wide and 600 tall, y grows downward. Pipes
//! come in pairs: an upper pipe from the ceiling down to the top of the gap
//! and a lower pipe from the bottom of the gap to the ground.

use crate::core::collision::Aabb;
use crate::core::kinematics::{BodyParams, VerticalBody};
use crate::core::spawner::{Obstacle, ObstacleSpawner, SpawnConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlappyConfig {
    pub world_width: f64,
    pub world_height: f64,
    /// Fixed left edge of the bird.
    pub bird_x: f64,
    /// The bird is a square of this side.
    pub bird_size: f64,
    pub start_y: f64,
    /// Velocity change per 16ms tick.
    pub gravity: f64,
    /// Velocity override on flap (negative = upward).
    pub flap_impulse: f64,
    pub pipe_width: f64,
    pub pipe_gap: f64,
    /// Bounds of the random upper pipe height.
    pub min_gap_top: f64,
    pub max_gap_top: f64,
    pub min_spawn_ms: u64,
    pub max_spawn_ms: u64,
    /// Scroll speed in world units per tick.
    pub scroll_speed: f64,
    pub speed_increment: f64,
    pub max_scroll_speed: f64,
    pub ticks_per_speed_step: u64,
}

impl Default for FlappyConfig {
    fn default() -> Self {
        Self {
            world_width: 400.0,
            world_height: 600.0,
            bird_x: 50.0,
            bird_size: 30.0,
            start_y: 250.0,
            gravity: 0.6,
            flap_impulse: -12.0,
            pipe_width: 50.0,
            pipe_gap: 150.0,
            min_gap_top: 100.0,
            max_gap_top: 400.0,
            min_spawn_ms: 800,
            max_spawn_ms: 2000,
            scroll_speed: 3.0,
            speed_increment: 0.25,
            max_scroll_speed: 5.0,
            ticks_per_speed_step: 900,
        }
    }
}

impl FlappyConfig {
    pub fn body_params(&self) -> BodyParams {
        BodyParams {
            gravity: self.gravity,
            impulse: self.flap_impulse,
            floor: self.world_height - self.bird_size,
        }
    }

    pub fn spawn_config(&self) -> SpawnConfig {
        SpawnConfig {
            spawn_x: self.world_width,
            width: self.pipe_width,
            min_size: self.min_gap_top,
            max_size: self.max_gap_top,
            min_interval_ms: self.min_spawn_ms,
            max_interval_ms: self.max_spawn_ms,
            initial_speed: self.scroll_speed,
            speed_increment: self.speed_increment,
            max_speed: self.max_scroll_speed,
            ticks_per_speed_step: self.ticks_per_speed_step,
        }
    }

    /// Upper and lower hitboxes of a pipe pair. The obstacle's `size` is the
    /// upper pipe's height, i.e. the top of the gap.
    pub fn pipe_boxes(&self, pipe: &Obstacle) -> [Aabb; 2] {
        let gap_bottom = pipe.size + self.pipe_gap;
        [
            Aabb::new(pipe.x, 0.0, pipe.width, pipe.size),
            Aabb::new(
                pipe.x,
                gap_bottom,
                pipe.width,
                (self.world_height - gap_bottom).max(0.0),
            ),
        ]
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub bird: VerticalBody,
    pub pipes: ObstacleSpawner,
    /// Pipes cleared.
    pub score: u32,
    /// Flaps since the start, for the render layer's wing animation.
    pub flaps: u32,
}

impl FlappyGame {
    pub fn new<R: Rng>(config: &FlappyConfig, rng: &mut R) -> Self {
        Self {
            bird: VerticalBody::at_rest(config.start_y),
            pipes: ObstacleSpawner::new(config.spawn_config(), rng),
            score: 0,
            flaps: 0,
        }
    }

    pub fn bird_box(&self, config: &FlappyConfig) -> Aabb {
        Aabb::new(config.bird_x, self.bird.y, config.bird_size, config.bird_size)
    }
}

/// One pipe pair as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipeView {
    pub x: f64,
    pub width: f64,
    pub gap_top: f64,
    pub gap_bottom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlappySnapshot {
    pub world_width: f64,
    pub world_height: f64,
    pub bird: Aabb,
    pub velocity: f64,
    pub pipes: Vec<PipeView>,
    pub speed: f64,
    pub flaps: u32,
}

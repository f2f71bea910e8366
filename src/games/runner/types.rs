//! Runner data structures.
//!
//! The world is 600 wide and 200 tall, y grows downward. Obstacles stand on
//! the ground (bottom edge at `world_height`) and scroll left.

use crate::core::collision::Aabb;
use crate::core::kinematics::{BodyParams, VerticalBody};
use crate::core::spawner::{Obstacle, ObstacleSpawner, SpawnConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub world_width: f64,
    pub world_height: f64,
    /// Fixed left edge of the runner.
    pub runner_x: f64,
    pub runner_width: f64,
    pub runner_height: f64,
    /// Velocity change per 16ms tick (positive = downward).
    pub gravity: f64,
    /// Velocity set by a jump (negative = upward).
    pub jump_impulse: f64,
    pub obstacle_width: f64,
    pub min_obstacle_height: f64,
    pub max_obstacle_height: f64,
    pub min_spawn_ms: u64,
    pub max_spawn_ms: u64,
    pub initial_speed: f64,
    pub speed_increment: f64,
    pub max_speed: f64,
    pub ticks_per_speed_step: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            world_width: 600.0,
            world_height: 200.0,
            runner_x: 40.0,
            runner_width: 20.0,
            runner_height: 40.0,
            gravity: 0.6,
            jump_impulse: -12.0,
            obstacle_width: 20.0,
            min_obstacle_height: 20.0,
            max_obstacle_height: 50.0,
            min_spawn_ms: 800,
            max_spawn_ms: 2000,
            initial_speed: 6.0,
            speed_increment: 0.5,
            max_speed: 13.0,
            ticks_per_speed_step: 300,
        }
    }
}

impl RunnerConfig {
    /// The floor is where the runner's top edge sits when standing.
    pub fn body_params(&self) -> BodyParams {
        BodyParams {
            gravity: self.gravity,
            impulse: self.jump_impulse,
            floor: self.world_height - self.runner_height,
        }
    }

    pub fn spawn_config(&self) -> SpawnConfig {
        SpawnConfig {
            spawn_x: self.world_width,
            width: self.obstacle_width,
            min_size: self.min_obstacle_height,
            max_size: self.max_obstacle_height,
            min_interval_ms: self.min_spawn_ms,
            max_interval_ms: self.max_spawn_ms,
            initial_speed: self.initial_speed,
            speed_increment: self.speed_increment,
            max_speed: self.max_speed,
            ticks_per_speed_step: self.ticks_per_speed_step,
        }
    }

    pub fn obstacle_box(&self, obstacle: &Obstacle) -> Aabb {
        Aabb::new(
            obstacle.x,
            self.world_height - obstacle.size,
            obstacle.width,
            obstacle.size,
        )
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct RunnerGame {
    pub runner: VerticalBody,
    pub obstacles: ObstacleSpawner,
    /// Obstacles cleared.
    pub score: u32,
    /// Jump requested since the last physics tick.
    pub jump_queued: bool,
    pub jumps: u32,
}

impl RunnerGame {
    pub fn new<R: Rng>(config: &RunnerConfig, rng: &mut R) -> Self {
        Self {
            runner: VerticalBody::at_rest(config.body_params().floor),
            obstacles: ObstacleSpawner::new(config.spawn_config(), rng),
            score: 0,
            jump_queued: false,
            jumps: 0,
        }
    }

    pub fn runner_box(&self, config: &RunnerConfig) -> Aabb {
        Aabb::new(
            config.runner_x,
            self.runner.y,
            config.runner_width,
            config.runner_height,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunnerSnapshot {
    pub world_width: f64,
    pub world_height: f64,
    pub runner: Aabb,
    pub grounded: bool,
    pub obstacles: Vec<Aabb>,
    pub speed: f64,
}

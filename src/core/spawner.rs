//! Obstacle spawner for the side-scrollers.
//!
//! Obstacles enter at the right edge of the world and scroll left at the
//! global scroll speed. The spawner draws a fresh interval after every spawn
//! and a fresh size for every obstacle; it never looks at the actor.

use crate::core::constants::REALTIME_FRAME_MS;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Spawn and scroll tuning for one game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// X coordinate new obstacles appear at (left edge).
    pub spawn_x: f64,
    /// Obstacle width in world units.
    pub width: f64,
    /// Bounds of the per-obstacle random size (height or gap position).
    pub min_size: f64,
    pub max_size: f64,
    /// Bounds of the random delay between spawns.
    pub min_interval_ms: u64,
    pub max_interval_ms: u64,
    /// Scroll speed in world units per tick.
    pub initial_speed: f64,
    pub speed_increment: f64,
    pub max_speed: f64,
    /// Speed goes up by `speed_increment` every this many ticks.
    pub ticks_per_speed_step: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Obstacle {
    /// Left edge.
    pub x: f64,
    pub width: f64,
    /// Random size drawn at spawn time, fixed for the obstacle's lifetime.
    pub size: f64,
    /// Tick index at which the obstacle spawned.
    pub spawned_at: u64,
    /// Whether the actor has already been scored for clearing it.
    pub passed: bool,
}

impl Obstacle {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Convert a millisecond delay to physics ticks, rounding up, at least one.
pub fn ms_to_ticks(ms: u64) -> u64 {
    ms.div_ceil(REALTIME_FRAME_MS).max(1)
}

#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    config: SpawnConfig,
    obstacles: Vec<Obstacle>,
    speed: f64,
    elapsed_ticks: u64,
    ticks_until_spawn: u64,
}

impl ObstacleSpawner {
    pub fn new<R: Rng>(config: SpawnConfig, rng: &mut R) -> Self {
        let mut spawner = Self {
            config,
            obstacles: Vec::new(),
            speed: config.initial_speed,
            elapsed_ticks: 0,
            ticks_until_spawn: 0,
        };
        spawner.ticks_until_spawn = spawner.draw_interval(rng);
        spawner
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    pub fn ticks_until_spawn(&self) -> u64 {
        self.ticks_until_spawn
    }

    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    /// Place an obstacle directly, bypassing the random draws.
    pub fn push(&mut self, x: f64, size: f64) {
        self.obstacles.push(Obstacle {
            x,
            width: self.config.width,
            size,
            spawned_at: self.elapsed_ticks,
            passed: false,
        });
    }

    /// One physics tick: scroll, recycle, spawn, then scale difficulty.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        self.elapsed_ticks += 1;

        for obstacle in &mut self.obstacles {
            obstacle.x -= self.speed;
        }

        // Trailing edge fully behind the left boundary. `retain` keeps order.
        self.obstacles.retain(|o| o.right() >= 0.0);

        self.ticks_until_spawn = self.ticks_until_spawn.saturating_sub(1);
        if self.ticks_until_spawn == 0 {
            if self.spawn_slot_free() {
                self.spawn(rng);
                self.ticks_until_spawn = self.draw_interval(rng);
            } else {
                self.ticks_until_spawn = 1;
            }
        }

        if self.config.ticks_per_speed_step > 0
            && self.elapsed_ticks % self.config.ticks_per_speed_step == 0
        {
            self.speed = (self.speed + self.config.speed_increment).min(self.config.max_speed);
        }
    }

    /// Mark every obstacle whose right edge is behind `actor_left` as passed.
    /// Returns how many were newly passed this call.
    pub fn mark_passed(&mut self, actor_left: f64) -> u32 {
        let mut newly = 0;
        for obstacle in &mut self.obstacles {
            if !obstacle.passed && obstacle.right() < actor_left {
                obstacle.passed = true;
                newly += 1;
            }
        }
        newly
    }

    fn spawn_slot_free(&self) -> bool {
        self.obstacles
            .last()
            .map_or(true, |o| o.x + o.width <= self.config.spawn_x)
    }

    fn spawn<R: Rng>(&mut self, rng: &mut R) {
        let size = if self.config.max_size > self.config.min_size {
            rng.gen_range(self.config.min_size..=self.config.max_size)
        } else {
            self.config.min_size
        };
        self.obstacles.push(Obstacle {
            x: self.config.spawn_x,
            width: self.config.width,
            size,
            spawned_at: self.elapsed_ticks,
            passed: false,
        });
    }

    fn draw_interval<R: Rng>(&self, rng: &mut R) -> u64 {
        let (lo, hi) = (self.config.min_interval_ms, self.config.max_interval_ms);
        let ms = if hi > lo { rng.gen_range(lo..=hi) } else { lo };
        ms_to_ticks(ms)
    }
}

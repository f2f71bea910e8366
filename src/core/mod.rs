//! Shared engine: timing, deferred tasks, physics, collision and the game loop.

pub mod collision;
pub mod constants;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod kinematics;
pub mod spawner;
pub mod tasks;
pub mod tick;

pub use error::{ArcadeError, Result};
pub use game_loop::{Deferrals, FrameSnapshot, GameLoop, Phase, Rules, Session};
pub use input::{Direction, Input};
pub use tick::{Cadence, TickScheduler};

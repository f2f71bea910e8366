//! Arcade - a shared real-time game loop and four games built on it.
//!
//! This crate exposes the engine and game logic for testing and external
//! front-ends. The terminal UI lives in the binary.

pub mod config;
pub mod core;
pub mod games;
pub mod utils;

pub use config::ArcadeConfig;
pub use self::core::{ArcadeError, Direction, GameLoop, Input, Phase, Rules};
pub use games::GameKind;

//! Utility modules.

pub mod persistence;

pub use persistence::{FileScoreStore, MemoryScoreStore, ScoreStore};

//! Flappy: a side-scroller where the bird flaps through gaps between pipes.
//! Touching a pipe, the floor or the ceiling ends the run.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;

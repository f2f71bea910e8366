//! Snake: a grid game where the head moves one cell per tick and eating
//! food makes the trail one cell longer.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;

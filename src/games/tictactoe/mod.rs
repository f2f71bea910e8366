//! Tic-Tac-Toe against a random opponent. The human plays X; the opponent
//! answers after a short thinking delay scheduled on the game loop.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;

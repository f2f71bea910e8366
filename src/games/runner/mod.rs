//! Runner: a ground-level side-scroller. The runner jumps over obstacles
//! rising from the floor while the scroll speed creeps up.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;

//! Obstacle-field controller.
//!
//! Spawns an obstacle pair every spawn interval at the right edge of the field,
//! scrolls every live pair left, and retires pairs once they have fully left
//! the field, counting each one as passed.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;

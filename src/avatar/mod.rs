//! Avatar controller.
//!
//! The avatar never moves horizontally. Each frame it either rises (inside the
//! jump window) or sinks, at the same constant speed, and nothing stops it from
//! leaving the field: the game loop detects that instead.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;

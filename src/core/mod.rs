//! Core simulation: constants, geometry and the frame-driven game loop.

pub mod constants;
pub mod game_loop;
pub mod geometry;

pub use constants::*;
pub use game_loop::*;
pub use geometry::*;

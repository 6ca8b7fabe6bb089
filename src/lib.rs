//! Flappy - a terminal side-scroller.
//!
//! Steer an avatar through gaps in scrolling obstacle pairs. The simulation
//! (`avatar`, `obstacles`, `core`) is independent of the terminal; `ui` and
//! `input` adapt it to ratatui and crossterm.

pub mod avatar;
pub mod config;
pub mod core;
pub mod input;
pub mod logging;
pub mod obstacles;
pub mod ui;

pub use config::GameConfig;
pub use crate::core::game_loop::{FrameOutcome, Game, LoopPhase, LossReason};
pub use input::GameInput;

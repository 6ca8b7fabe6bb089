pub mod field_scene;
pub mod game_common;

use crate::core::game_loop::Game;
use rand::Rng;
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw<R: Rng>(frame: &mut Frame, game: &Game<R>) {
    let area = frame.size();
    field_scene::render_game(frame, area, game);
}

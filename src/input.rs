//! Terminal key events to game input signals.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input signals understood by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Space: jumps while running, starts a session while idle.
    Flap,
    /// Leave the program (q, Esc, Ctrl-C).
    Quit,
    /// Any other key. Starts a session while idle, otherwise ignored.
    Other,
}

/// Map a key event, or `None` for releases and repeats.
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let input = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Char(' ') => GameInput::Flap,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    };
    Some(input)
}

//! Input handling for the game screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input actions the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Flap while playing, restart after a crash (Space, Up or Enter).
    Jump,
    /// Leave the program (q, Esc or Ctrl+C).
    Quit,
    /// Any other key.
    Other,
}

/// Map a terminal key event to a game input.
///
/// Only presses count: jump is edge-triggered, and terminals that report
/// key releases or repeats must not produce extra flaps.
pub fn map_key(event: KeyEvent) -> GameInput {
    if event.kind != KeyEventKind::Press {
        return GameInput::Other;
    }

    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => GameInput::Jump,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    }
}

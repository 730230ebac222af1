//! Key-to-action mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Decode a key code into a game action, if it maps to one.
pub fn decode_key(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameAction::Rotate),
        _ => None,
    }
}

/// Whether a key event asks to leave the game.
pub fn is_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

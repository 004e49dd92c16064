//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Digit keys click pieces directly: `1`..`9` are pieces 0..8 and `0` is piece 9.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Session
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::StartStop),
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(GameAction::TogglePause)
        }

        // Block count
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => Some(GameAction::MoreBlocks),
        KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('_') => Some(GameAction::FewerBlocks),

        // Catch
        KeyCode::Char('0') => Some(GameAction::Click(9)),
        KeyCode::Char(c @ '1'..='9') => Some(GameAction::Click(c as usize - '1' as usize)),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::AppState;

/// Rows moved by PageUp/PageDown.
const PAGE_SIZE: usize = 10;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Nothing that needs the app loop; repaint if state changed.
    None,
    /// Quit the application.
    Quit,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        KeyCode::Up | KeyCode::Char('k') => {
            state.select_up(1);
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_down(1);
            KeyAction::None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.select_left();
            KeyAction::None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.select_right();
            KeyAction::None
        }
        KeyCode::PageUp => {
            state.select_up(PAGE_SIZE);
            KeyAction::None
        }
        KeyCode::PageDown => {
            state.select_down(PAGE_SIZE);
            KeyAction::None
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.select_first();
            KeyAction::None
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.select_last();
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action resolved from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    Refresh,
    CreateDemo,
}

pub fn classify_key(key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        return InputAction::Quit;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputAction::Quit,
        KeyCode::Char('r') => InputAction::Refresh,
        KeyCode::Char('c') | KeyCode::Enter => InputAction::CreateDemo,
        _ => InputAction::None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    let action = classify_key(key);
    match action {
        InputAction::Quit => app.request_quit(),
        InputAction::Refresh => {
            app.request_refresh();
        }
        InputAction::CreateDemo => {
            app.request_create_demo();
        }
        InputAction::None => {}
    }
    action
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

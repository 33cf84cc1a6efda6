// Centralised keybind predicates for the application.
//
// Small, well-named helpers like `is_quit` and `is_down` so the handlers
// refer to key actions rather than raw `KeyCode` patterns, and a binding
// changes in exactly one place.

use crate::input::KeyCode;

pub fn is_quit(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('q'))
}

pub fn is_down(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Down | KeyCode::Char('j'))
}

pub fn is_up(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Up | KeyCode::Char('k'))
}

pub fn is_page_down(code: &KeyCode) -> bool {
    matches!(code, KeyCode::PageDown)
}

pub fn is_page_up(code: &KeyCode) -> bool {
    matches!(code, KeyCode::PageUp)
}

pub fn is_home(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Home | KeyCode::Char('g'))
}

pub fn is_end(code: &KeyCode) -> bool {
    matches!(code, KeyCode::End | KeyCode::Char('G'))
}

pub fn is_focus_next(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Tab)
}

pub fn is_focus_prev(code: &KeyCode) -> bool {
    matches!(code, KeyCode::BackTab)
}

/// Enter and Space both activate the focused sidebar link.
pub fn is_activate(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Char(' '))
}

pub fn is_reload(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('r'))
}

pub fn is_theme_toggle(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('t'))
}

pub fn is_mouse_toggle(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('m'))
}

pub fn is_spy_toggle(code: &KeyCode) -> bool {
    matches!(code, KeyCode::Char('s'))
}

// Mouse input: crate-local event type decoupled from the backend so tests
// can construct events without naming crossterm.
pub use crossterm::event::{MouseButton, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub column: u16,
    pub row: u16,
    pub kind: MouseEventKind,
}

impl From<crossterm::event::MouseEvent> for MouseEvent {
    fn from(me: crossterm::event::MouseEvent) -> Self {
        MouseEvent {
            column: me.column,
            row: me.row,
            kind: me.kind,
        }
    }
}

pub fn is_left_down(me: &MouseEvent) -> bool {
    matches!(me.kind, MouseEventKind::Down(MouseButton::Left))
}

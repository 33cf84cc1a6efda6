#[cfg(feature = "async-input")]
pub mod async_input;
pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use mouse::{MouseEvent, MouseEventKind};

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

/// Crate-local input event, decoupled from the backend event type so
/// handlers and tests never name crossterm directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Other,
}

pub fn poll(timeout: Duration) -> std::io::Result<bool> {
    event::poll(timeout)
}

pub fn read_event() -> std::io::Result<InputEvent> {
    Ok(map_event(event::read()?))
}

/// Key releases are dropped so platforms that report them don't double up
/// every press.
pub(crate) fn map_event(event: Event) -> InputEvent {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => InputEvent::Key(key),
        Event::Key(_) => InputEvent::Other,
        Event::Mouse(me) => InputEvent::Mouse(me.into()),
        Event::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind};

    #[test]
    fn key_release_is_filtered_out() {
        let press = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(map_event(Event::Key(press)), InputEvent::Key(_)));

        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event(Event::Key(release)), InputEvent::Other);
    }

    #[test]
    fn resize_maps_to_dimensions() {
        assert_eq!(map_event(Event::Resize(80, 24)), InputEvent::Resize(80, 24));
    }
}

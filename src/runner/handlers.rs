//! Split handlers: thin wrapper delegating to submodules to keep file sizes manageable.

pub mod mouse;
pub mod normal;

pub use mouse::handle_mouse;
pub use normal::handle_normal;

use ratatui::layout::Rect;

use crate::app::App;
use crate::input::KeyCode;
use crate::ui::AppLayout;

/// Top-level key handler. Returns `true` when the app should quit.
pub fn handle_key(app: &mut App, code: KeyCode, term: Rect) -> anyhow::Result<bool> {
    handle_normal(app, code, term)
}

/// Terminal resize: geometry changed under us, so the highlight is
/// recomputed in the same pass instead of waiting for a scheduled frame.
pub fn handle_resize(app: &mut App, width: u16, height: u16) {
    let layout = AppLayout::compute(Rect::new(0, 0, width, height));
    app.refresh_now(layout.content_inner());
}

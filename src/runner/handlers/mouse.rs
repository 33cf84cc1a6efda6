use std::time::Instant;

use ratatui::layout::Rect;

use crate::app::App;
use crate::input::mouse::{is_left_down, MouseEvent, MouseEventKind};
use crate::ui::AppLayout;

/// Route mouse events by screen region: the wheel scrolls the content
/// pane, a left click on a sidebar row activates that link.
pub fn handle_mouse(app: &mut App, me: MouseEvent, term: Rect) -> anyhow::Result<()> {
    let layout = AppLayout::compute(term);
    if is_left_down(&me) {
        if let Some(index) = layout.link_at(me.column, me.row) {
            click_link(app, &layout, index, (me.column, me.row));
        }
        return Ok(());
    }
    if layout.in_content(me.column, me.row) {
        let step = app.settings.scroll_step.max(1) as i16;
        match me.kind {
            MouseEventKind::ScrollDown => app.scroll_by_lines(step),
            MouseEventKind::ScrollUp => app.scroll_by_lines(-step),
            _ => {}
        }
    }
    Ok(())
}

/// A click both focuses and activates the link, with the pointer cell as
/// the ripple origin.
fn click_link(app: &mut App, layout: &AppLayout, index: usize, pointer: (u16, u16)) {
    let Some(link) = app.sidebar.link_at(index).cloned() else {
        return;
    };
    let Some(link_area) = layout.link_area(index) else {
        return;
    };
    app.sidebar.focus(index);
    app.activate_link(
        &link,
        link_area,
        Some(pointer),
        layout.content_inner(),
        Instant::now(),
    );
}

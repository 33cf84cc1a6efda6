use std::time::Instant;

use ratatui::{
    layout::{Margin, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::core::scrollspy::Scrollspy;
use crate::app::App;
use crate::ui::colors;

/// Render the link list. Each link occupies one row so the hit-testing in
/// `ui::layout` maps clicks straight to indices. The active link carries
/// the accent style, the focused one the focus marker, and live ripples
/// are painted over their rows last.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let palette = colors::current();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Sections ")
        .style(palette.sidebar_block_style);
    f.render_widget(block, area);

    let inner = area.inner(Margin::new(1, 1));
    let active = app.spy.as_ref().and_then(|spy| spy.active());
    for (i, link) in app.sidebar.links().iter().enumerate() {
        if i >= usize::from(inner.height) {
            break;
        }
        let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        let is_active = active == Some(&link.id);
        let is_focused = i == app.sidebar.focused();
        let style = if is_active {
            palette.link_active_style
        } else if is_focused {
            palette.link_focused_style
        } else {
            palette.link_style
        };
        let marker = if is_focused { "> " } else { "  " };
        let p = Paragraph::new(format!("{}{}", marker, link.label)).style(style);
        f.render_widget(p, row);
    }

    if let Some(spy) = app.spy.as_ref() {
        paint_ripples(f, spy, app.frame_now);
    }
}

fn paint_ripples(f: &mut Frame, spy: &Scrollspy, now: Instant) {
    let palette = colors::current();
    let buf = f.buffer_mut();
    for ripple in spy.ripples() {
        let area = ripple.area();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(alpha) = ripple.cell_intensity(x, y, now) {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_bg(colors::blend(
                            palette.ripple_base,
                            palette.ripple_accent,
                            alpha,
                        ));
                    }
                }
            }
        }
    }
}

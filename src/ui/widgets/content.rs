use ratatui::{
    layout::{Margin, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::app::core::geometry::wrap_body_line;
use crate::app::types::Document;
use crate::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = crate::ui::colors::current();
    let inner = area.inner(Margin::new(1, 1));
    let lines = document_lines(&app.doc, inner.width);
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.doc.title))
                .style(colors.content_block_style),
        )
        .style(colors.body_style)
        .scroll((app.viewport.row_offset(), 0));
    f.render_widget(paragraph, area);

    if app.viewport.is_scrollable() {
        let mut state = ScrollbarState::new(app.viewport.max_offset() as usize)
            .position(usize::from(app.viewport.row_offset()));
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_style(colors.scrollbar_thumb_style)
            .track_style(colors.scrollbar_track_style);
        f.render_stateful_widget(scrollbar, area.inner(Margin::new(0, 1)), &mut state);
    }
}

/// The document flattened into display rows: a heading row per section,
/// its body wrapped at the pane width, and a blank separator. Row counts
/// match `geometry::section_height` by construction.
pub fn document_lines(doc: &Document, width: u16) -> Vec<Line<'static>> {
    let colors = crate::ui::colors::current();
    let mut lines = Vec::new();
    for section in &doc.sections {
        lines.push(Line::styled(section.title.clone(), colors.heading_style));
        for raw in &section.body {
            for piece in wrap_body_line(raw, width) {
                lines.push(Line::raw(piece));
            }
        }
        lines.push(Line::raw(""));
    }
    lines
}

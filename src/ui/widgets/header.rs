use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = crate::ui::colors::current();
    let text = match &app.source {
        Some(path) => format!(" docSpy — {} ", path.display()),
        None => " docSpy — built-in sample ".to_string(),
    };
    let p = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).style(colors.header_style))
        .style(colors.header_style);
    f.render_widget(p, area);
}

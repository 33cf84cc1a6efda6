use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = crate::ui::colors::current();
    let content = match &app.status {
        Some(msg) => format!(" {} ", msg),
        None => {
            let spy = if app.spy.is_some() { "on" } else { "off" };
            format!(
                " ↑/↓ j/k:scroll  PgUp/PgDn:page  Tab:links  Enter/Space:open  t:theme  s:spy({})  r:reload  q:quit ",
                spy
            )
        }
    };
    let p = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).style(colors.footer_style))
        .style(colors.footer_style);
    f.render_widget(p, area);
}

use ratatui::Frame;

use crate::app::App;

pub mod colors;
pub mod layout;
pub mod themes;
pub mod widgets;

pub use layout::AppLayout;
pub use themes::Theme;

/// Draw one frame: header, sidebar with the scrollspy highlight, content
/// pane, footer.
pub fn ui(f: &mut Frame, app: &App) {
    let layout = AppLayout::compute(f.area());
    widgets::header::render(f, layout.header, app);
    widgets::sidebar::render(f, layout.sidebar, app);
    widgets::content::render(f, layout.content, app);
    widgets::footer::render(f, layout.footer, app);
}

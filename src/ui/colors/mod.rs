use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use std::sync::Mutex;

use crate::ui::themes::{self, Theme};

/// Concrete runtime styles derived from the current theme. Widgets read
/// these through [`current`] instead of carrying a theme around.
#[derive(Clone, Debug)]
pub struct Colors {
    pub header_style: Style,
    pub footer_style: Style,
    pub sidebar_block_style: Style,
    pub link_style: Style,
    pub link_active_style: Style,
    pub link_focused_style: Style,
    pub content_block_style: Style,
    pub heading_style: Style,
    pub body_style: Style,
    pub scrollbar_thumb_style: Style,
    pub scrollbar_track_style: Style,
    pub ripple_base: Color,
    pub ripple_accent: Color,
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(from_theme(&Theme::dark())));

/// Switch to a named theme: `dark`, `light`, or a custom palette file in
/// the config directory. Unknown names leave the colors untouched.
pub fn set_theme(name: &str) {
    match name {
        "dark" => set_from_theme(&Theme::dark()),
        "light" => set_from_theme(&Theme::light()),
        other => {
            if let Some(theme) = themes::load_custom(other) {
                set_from_theme(&theme);
            }
        }
    }
}

/// Derive concrete runtime Styles from the provided Theme and store them.
pub fn set_from_theme(theme: &Theme) {
    let mut g = CURRENT.lock().unwrap();
    *g = from_theme(theme);
}

pub fn current() -> Colors {
    CURRENT.lock().unwrap().clone()
}

fn from_theme(theme: &Theme) -> Colors {
    let base = Style::default().fg(theme.fg).bg(theme.bg);
    Colors {
        header_style: base.add_modifier(Modifier::BOLD),
        footer_style: Style::default().fg(theme.muted).bg(theme.bg),
        sidebar_block_style: base,
        link_style: base,
        link_active_style: Style::default()
            .fg(theme.bg)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD),
        link_focused_style: Style::default()
            .fg(theme.accent)
            .bg(theme.bg)
            .add_modifier(Modifier::UNDERLINED),
        content_block_style: base,
        heading_style: Style::default()
            .fg(theme.accent)
            .bg(theme.bg)
            .add_modifier(Modifier::BOLD),
        body_style: base,
        scrollbar_thumb_style: Style::default().bg(theme.accent),
        scrollbar_track_style: Style::default().bg(theme.bg),
        ripple_base: theme.bg,
        ripple_accent: theme.accent,
    }
}

/// Mix two colors; `t` = 0 gives `from`, `t` = 1 gives `to`. Indexed or
/// named colors cannot be mixed, so they switch over at the midpoint.
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => Color::Rgb(
            lerp(r1, r2, t),
            lerp(g1, g2, t),
            lerp(b1, b2, t),
        ),
        _ => {
            if t >= 0.5 {
                to
            } else {
                from
            }
        }
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
}

use std::time::Instant;

use ratatui::layout::Rect;

use crate::app::settings::{keybinds, save_settings};
use crate::app::App;
use crate::input::KeyCode;
use crate::ui::{colors, AppLayout};

/// Keys in the single (normal) input mode. Returns `true` to quit.
pub fn handle_normal(app: &mut App, code: KeyCode, term: Rect) -> anyhow::Result<bool> {
    if keybinds::is_quit(&code) {
        return Ok(true);
    }
    app.status = None;
    let layout = AppLayout::compute(term);

    if keybinds::is_down(&code) {
        app.scroll_by_lines(1);
    } else if keybinds::is_up(&code) {
        app.scroll_by_lines(-1);
    } else if keybinds::is_page_down(&code) {
        app.scroll_by_pages(1);
    } else if keybinds::is_page_up(&code) {
        app.scroll_by_pages(-1);
    } else if keybinds::is_home(&code) {
        app.scroll_home();
    } else if keybinds::is_end(&code) {
        app.scroll_end();
    } else if keybinds::is_focus_next(&code) {
        app.sidebar.focus_next();
        app.request_frame();
    } else if keybinds::is_focus_prev(&code) {
        app.sidebar.focus_prev();
        app.request_frame();
    } else if keybinds::is_activate(&code) {
        activate_focused(app, &layout);
    } else if keybinds::is_theme_toggle(&code) {
        toggle_theme(app);
    } else if keybinds::is_mouse_toggle(&code) {
        app.settings.mouse_enabled = !app.settings.mouse_enabled;
        persist_settings(app);
        app.request_frame();
    } else if keybinds::is_spy_toggle(&code) {
        toggle_spy(app);
    } else if keybinds::is_reload(&code) {
        reload(app);
    }
    Ok(false)
}

/// Enter/Space play the keyboard path of a click: no pointer position, so
/// the ripple starts from the link's center.
fn activate_focused(app: &mut App, layout: &AppLayout) {
    let Some(link) = app.sidebar.focused_link().cloned() else {
        return;
    };
    let Some(link_area) = layout.link_area(app.sidebar.focused()) else {
        return;
    };
    app.activate_link(&link, link_area, None, layout.content_inner(), Instant::now());
}

fn toggle_theme(app: &mut App) {
    let next = if app.settings.theme == "dark" { "light" } else { "dark" };
    app.settings.theme = next.to_string();
    colors::set_theme(next);
    persist_settings(app);
    app.status = Some(format!("theme: {}", next));
    app.request_frame();
}

fn toggle_spy(app: &mut App) {
    if app.spy.is_some() {
        app.detach_scrollspy();
        app.status = Some("tracking off".to_string());
    } else {
        app.attach_scrollspy();
        app.status = Some("tracking on".to_string());
    }
}

fn reload(app: &mut App) {
    match app.reload() {
        Ok(true) => app.status = Some("reloaded".to_string()),
        Ok(false) => app.status = Some("no file to reload".to_string()),
        Err(e) => {
            tracing::error!("reload failed: {}", e);
            app.status = Some(format!("reload failed: {}", e));
        }
    }
    app.request_frame();
}

fn persist_settings(app: &App) {
    if let Err(e) = save_settings(&app.settings) {
        tracing::warn!("could not save settings: {:#}", e);
    }
}

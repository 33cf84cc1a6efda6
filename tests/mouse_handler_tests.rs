use std::time::Instant;

use docSpy::app::settings::Settings;
use docSpy::app::App;
use docSpy::doc::loader::parse_document;
use docSpy::input::mouse::{MouseButton, MouseEvent, MouseEventKind};
use docSpy::runner::handlers;
use docSpy::ui::AppLayout;
use ratatui::layout::Rect;

fn sample_app() -> App {
    let doc = parse_document(
        "doc",
        "# Alpha\nline\nline\nline\nline\n# Beta\nline\nline\nline\nline\n# Gamma\nline\nline\nline\nline",
    );
    App::new(doc, None, Settings::default())
}

fn settled(app: &mut App, term: Rect) {
    let layout = AppLayout::compute(term);
    app.on_frame(layout.content_inner(), Instant::now());
}

#[test]
fn wheel_over_content_scrolls_and_schedules_a_refresh() {
    let mut app = sample_app();
    let term = Rect::new(0, 0, 80, 24);
    settled(&mut app, term);
    assert!(!app.spy.as_ref().unwrap().is_refresh_pending());

    let me = MouseEvent {
        column: 40,
        row: 10,
        kind: MouseEventKind::ScrollDown,
    };
    handlers::handle_mouse(&mut app, me, term).unwrap();

    assert_eq!(app.viewport.offset(), f32::from(app.settings.scroll_step));
    assert!(app.spy.as_ref().unwrap().is_refresh_pending());
}

#[test]
fn wheel_outside_the_content_pane_is_ignored() {
    let mut app = sample_app();
    let term = Rect::new(0, 0, 80, 24);
    settled(&mut app, term);

    // Column 10 is inside the sidebar.
    let me = MouseEvent {
        column: 10,
        row: 10,
        kind: MouseEventKind::ScrollDown,
    };
    handlers::handle_mouse(&mut app, me, term).unwrap();
    assert_eq!(app.viewport.offset(), 0.0);
}

#[test]
fn click_on_a_link_row_activates_that_link() {
    let mut app = sample_app();
    let term = Rect::new(0, 0, 80, 24);
    settled(&mut app, term);

    // Second link row: sidebar inner starts at row 4.
    let me = MouseEvent {
        column: 3,
        row: 5,
        kind: MouseEventKind::Down(MouseButton::Left),
    };
    handlers::handle_mouse(&mut app, me, term).unwrap();

    let spy = app.spy.as_ref().unwrap();
    assert_eq!(spy.active(), Some(&"beta".into()));
    assert_eq!(spy.ripples().len(), 1);
    assert_eq!(app.sidebar.focused(), 1);
    assert!(app.smooth.is_animating());
}

#[test]
fn click_on_an_empty_sidebar_row_does_nothing() {
    let mut app = sample_app();
    let term = Rect::new(0, 0, 80, 24);
    settled(&mut app, term);

    // Row 15 is inside the sidebar but has no link (only 3 links exist).
    let me = MouseEvent {
        column: 3,
        row: 15,
        kind: MouseEventKind::Down(MouseButton::Left),
    };
    handlers::handle_mouse(&mut app, me, term).unwrap();

    let spy = app.spy.as_ref().unwrap();
    assert!(spy.ripples().is_empty());
    assert_eq!(app.sidebar.focused(), 0);
}

#[test]
fn click_on_the_sidebar_border_does_nothing() {
    let mut app = sample_app();
    let term = Rect::new(0, 0, 80, 24);
    settled(&mut app, term);

    let me = MouseEvent {
        column: 0,
        row: 5,
        kind: MouseEventKind::Down(MouseButton::Left),
    };
    handlers::handle_mouse(&mut app, me, term).unwrap();
    assert!(app.spy.as_ref().unwrap().ripples().is_empty());
}

#[test]
fn wheel_cancels_a_glide_from_an_earlier_click() {
    let mut app = sample_app();
    let term = Rect::new(0, 0, 80, 24);
    settled(&mut app, term);

    let click = MouseEvent {
        column: 3,
        row: 6,
        kind: MouseEventKind::Down(MouseButton::Left),
    };
    handlers::handle_mouse(&mut app, click, term).unwrap();
    assert!(app.smooth.is_animating());

    let wheel = MouseEvent {
        column: 40,
        row: 10,
        kind: MouseEventKind::ScrollUp,
    };
    handlers::handle_mouse(&mut app, wheel, term).unwrap();
    assert!(!app.smooth.is_animating());
}

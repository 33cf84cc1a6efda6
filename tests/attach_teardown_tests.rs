use std::io::Write as _;
use std::time::Instant;

use docSpy::app::settings::Settings;
use docSpy::app::App;
use docSpy::doc::loader::{load_document, parse_document};
use docSpy::input::KeyCode;
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

#[test]
fn attach_holds_its_refresh_until_a_usable_frame() {
    let mut app = sample_app();
    assert!(app.wants_frame(), "attach asks for the first frame itself");

    // a zero-sized pane cannot produce geometry
    app.on_frame(Rect::new(0, 0, 0, 0), Instant::now());
    let spy = app.spy.as_ref().unwrap();
    assert!(spy.is_refresh_pending());
    assert!(spy.active().is_none());

    let content = AppLayout::compute(Rect::new(0, 0, 80, 24)).content_inner();
    app.on_frame(content, Instant::now());
    let spy = app.spy.as_ref().unwrap();
    assert!(!spy.is_refresh_pending());
    // the pane center falls inside the middle section
    assert_eq!(spy.active(), Some(&"beta".into()));
}

#[test]
fn detached_tracking_leaves_scrolling_alone() {
    let mut app = sample_app();
    let term = Rect::new(0, 0, 80, 24);
    let content = AppLayout::compute(term).content_inner();
    app.on_frame(content, Instant::now());

    handlers::handle_key(&mut app, KeyCode::Char('s'), term).unwrap();
    assert!(app.spy.is_none());

    handlers::handle_key(&mut app, KeyCode::Char('j'), term).unwrap();
    app.on_frame(content, Instant::now());
    assert_eq!(app.viewport.offset(), 1.0);
}

#[test]
fn reattach_recomputes_at_the_current_scroll_position() {
    let mut app = sample_app();
    let term = Rect::new(0, 0, 80, 24);
    let content = AppLayout::compute(term).content_inner();
    app.on_frame(content, Instant::now());

    handlers::handle_key(&mut app, KeyCode::Char('s'), term).unwrap();
    handlers::handle_key(&mut app, KeyCode::End, term).unwrap();
    handlers::handle_key(&mut app, KeyCode::Char('s'), term).unwrap();

    let spy = app.spy.as_ref().unwrap();
    assert!(spy.is_refresh_pending());
    assert!(spy.active().is_none(), "a fresh spy starts blank");
    assert!(app.wants_frame());

    app.on_frame(content, Instant::now());
    // at the bottom of this document the middle section sits nearest center
    assert_eq!(app.spy.as_ref().unwrap().active(), Some(&"beta".into()));
}

#[test]
fn reload_picks_up_edits_and_reattaches() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "# One\nbody\n# Two\nbody\n").unwrap();

    let doc = load_document(&path).unwrap();
    let mut app = App::new(doc, Some(path.clone()), Settings::default());
    let term = Rect::new(0, 0, 80, 24);
    let content = AppLayout::compute(term).content_inner();
    app.on_frame(content, Instant::now());
    assert_eq!(app.sidebar.len(), 2);

    let mut file = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
    writeln!(file, "# Three\nbody").unwrap();
    drop(file);

    handlers::handle_key(&mut app, KeyCode::Char('r'), term).unwrap();
    assert_eq!(app.status.as_deref(), Some("reloaded"));
    assert_eq!(app.sidebar.len(), 3);
    assert!(app.spy.as_ref().unwrap().is_refresh_pending());

    app.on_frame(content, Instant::now());
    assert!(app.spy.as_ref().unwrap().active().is_some());
}

#[test]
fn reload_without_a_source_file_reports_it() {
    let mut app = sample_app();
    let term = Rect::new(0, 0, 80, 24);
    app.on_frame(AppLayout::compute(term).content_inner(), Instant::now());

    handlers::handle_key(&mut app, KeyCode::Char('r'), term).unwrap();
    assert_eq!(app.status.as_deref(), Some("no file to reload"));
}

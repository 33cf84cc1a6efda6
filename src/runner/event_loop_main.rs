use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::app::App;
use crate::input::{keyboard, poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal, set_mouse_capture};
use crate::ui;

/// Delay between frames while an animation runs (about 30 fps).
const FRAME_BUDGET: Duration = Duration::from_millis(33);
/// Poll timeout when nothing is moving.
const IDLE_POLL: Duration = Duration::from_millis(100);

/// Main event loop: drain every queued input event, run the per-frame work
/// once, draw, then sleep until the next event or frame deadline. Any
/// number of scroll events between two draws collapses into the single
/// recomputation `App::on_frame` performs.
pub fn run_app(mut app: App) -> anyhow::Result<()> {
    crate::runner::terminal::install_panic_hook();
    let mut terminal = init_terminal()?;

    // init_terminal turns capture on; honor the persisted setting.
    let mut mouse_capture_enabled = true;
    if !app.settings.mouse_enabled {
        set_mouse_capture(&mut terminal, false)?;
        mouse_capture_enabled = false;
    }

    #[cfg(feature = "fs-watch")]
    let watch = crate::runner::watch_helpers::WatchHandle::spawn_for(&app);

    loop {
        let mut quit = false;
        while poll(Duration::ZERO)? {
            let size = terminal.size()?;
            let term_rect = Rect::new(0, 0, size.width, size.height);
            match read_event()? {
                InputEvent::Key(key) => {
                    if keyboard::is_ctrl_c(&key)
                        || handlers::handle_key(&mut app, key.code, term_rect)?
                    {
                        quit = true;
                        break;
                    }
                }
                InputEvent::Mouse(me) => {
                    if app.settings.mouse_enabled {
                        handlers::handle_mouse(&mut app, me, term_rect)?;
                    }
                }
                InputEvent::Resize(w, h) => handlers::handle_resize(&mut app, w, h),
                InputEvent::Other => {}
            }
        }
        if quit {
            break;
        }

        #[cfg(feature = "fs-watch")]
        if let Some(watch) = watch.as_ref() {
            watch.pump(&mut app);
        }

        // Reflect a runtime toggle of the mouse setting on the terminal.
        if app.settings.mouse_enabled != mouse_capture_enabled {
            mouse_capture_enabled = app.settings.mouse_enabled;
            let _ = set_mouse_capture(&mut terminal, mouse_capture_enabled);
        }

        let size = terminal.size()?;
        let layout = ui::AppLayout::compute(Rect::new(0, 0, size.width, size.height));
        app.on_frame(layout.content_inner(), Instant::now());
        terminal.draw(|f| ui::ui(f, &app))?;

        let timeout = if app.wants_frame() { FRAME_BUDGET } else { IDLE_POLL };
        poll(timeout)?;
    }

    #[cfg(feature = "fs-watch")]
    if let Some(watch) = watch {
        watch.stop();
    }

    restore_terminal(terminal)?;
    Ok(())
}

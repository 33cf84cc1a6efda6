// Glue between the filesystem watcher thread and the event loop. Kept
// feature-gated so the crate does not require watcher types when
// `fs-watch` is disabled.
#![cfg(feature = "fs-watch")]

use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::JoinHandle;

use crate::app::App;
use crate::doc::watcher::{spawn_watcher, DocEvent};

/// What a batch of file events amounts to for the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Reload,
    Removed,
}

/// Collapse queued events into at most one action per frame. Any content
/// change wins over a removal, since editors often remove and recreate the
/// file while saving.
fn reduce_events<I: IntoIterator<Item = DocEvent>>(events: I) -> Option<Pending> {
    let mut pending = None;
    for ev in events {
        match ev {
            DocEvent::Changed(_) => pending = Some(Pending::Reload),
            DocEvent::Removed(_) => {
                if pending.is_none() {
                    pending = Some(Pending::Removed);
                }
            }
            DocEvent::Other => {}
        }
    }
    pending
}

/// Owns the watcher thread and its channels for the lifetime of the loop.
pub struct WatchHandle {
    rx: Receiver<DocEvent>,
    stop_tx: Sender<()>,
    thread: Option<JoinHandle<()>>,
}

impl WatchHandle {
    /// Starts a watcher for the app's source file when `--watch` was given.
    /// Returns `None` for the built-in sample, which has no file to watch.
    pub fn spawn_for(app: &App) -> Option<WatchHandle> {
        if !app.watch {
            return None;
        }
        let path = app.source.clone()?;
        let (tx, rx) = channel();
        let (stop_tx, stop_rx) = channel();
        let thread = spawn_watcher(path, tx, stop_rx);
        Some(WatchHandle {
            rx,
            stop_tx,
            thread: Some(thread),
        })
    }

    /// Applies queued file events: one reload per frame no matter how many
    /// write events the editor produced.
    pub fn pump(&self, app: &mut App) {
        match reduce_events(self.rx.try_iter()) {
            Some(Pending::Reload) => {
                match app.reload() {
                    Ok(_) => app.status = Some("reloaded (file changed)".to_string()),
                    Err(e) => {
                        tracing::error!("watch reload failed: {}", e);
                        app.status = Some(format!("reload failed: {}", e));
                    }
                }
                app.request_frame();
            }
            Some(Pending::Removed) => {
                app.status = Some("file removed on disk".to_string());
                app.request_frame();
            }
            None => {}
        }
    }

    pub fn stop(mut self) {
        let _ = self.stop_tx.send(());
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

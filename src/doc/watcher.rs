#![cfg(feature = "fs-watch")]

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};

/// Filesystem event for the single watched document file.
///
/// All paths are owned (`PathBuf`) since the watcher runs on a dedicated
/// thread and must send owned data across channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocEvent {
    /// The file's content changed (including editor write-then-rename).
    Changed(PathBuf),
    /// The file was removed.
    Removed(PathBuf),
    /// Any other event we don't map explicitly.
    Other,
}

/// Convert a `notify::Event` into our crate-local `DocEvent`.
///
/// Editors commonly save by writing a temp file and renaming it over the
/// target, which arrives as a two-path event; that counts as a change to
/// the destination.
fn map_notify_event(event: &Event) -> DocEvent {
    match event.paths.as_slice() {
        [_, to, ..] => DocEvent::Changed(to.clone()),
        [p, ..] => match &event.kind {
            EventKind::Create(_) | EventKind::Modify(_) => DocEvent::Changed(p.clone()),
            EventKind::Remove(_) => DocEvent::Removed(p.clone()),
            _ => DocEvent::Other,
        },
        _ => DocEvent::Other,
    }
}

/// Spawn a background thread that watches `path` and sends mapped
/// [`DocEvent`] values into `tx`. The watcher lives on that thread until
/// `stop_rx` is signalled or its sender is dropped.
///
/// Errors are logged via `tracing` rather than propagated because the
/// watcher runs inside its own thread.
pub fn spawn_watcher(
    path: PathBuf,
    tx: Sender<DocEvent>,
    stop_rx: Receiver<()>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let res: notify::Result<RecommendedWatcher> = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let ev = map_notify_event(&event);
                    if let Err(e) = tx.send(ev) {
                        tracing::error!("failed to send doc event: {:#?}", e);
                    }
                }
                Err(e) => tracing::error!("file watcher error: {:#?}", e),
            },
            Config::default(),
        );

        match res {
            Ok(mut watcher) => {
                // A single file needs no recursion.
                if let Err(e) = watcher.watch(&path, RecursiveMode::NonRecursive) {
                    tracing::error!("failed to watch {}: {:#?}", path.display(), e);
                    return;
                }

                if stop_rx.recv().is_err() {
                    tracing::debug!(
                        "stop signal receiver closed, exiting watcher for {}",
                        path.display()
                    );
                }
            }
            Err(e) => {
                tracing::error!("failed to create watcher for {}: {:#?}", path.display(), e)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};

    fn make_event(kind: EventKind, paths: Vec<PathBuf>) -> Event {
        Event {
            kind,
            paths,
            attrs: Default::default(),
        }
    }

    #[test]
    fn map_modify() {
        let ev = make_event(
            EventKind::Modify(ModifyKind::Any),
            vec![PathBuf::from("/tmp/doc.txt")],
        );
        assert_eq!(
            map_notify_event(&ev),
            DocEvent::Changed(PathBuf::from("/tmp/doc.txt"))
        );
    }

    #[test]
    fn map_create() {
        let ev = make_event(
            EventKind::Create(CreateKind::Any),
            vec![PathBuf::from("/tmp/doc.txt")],
        );
        assert_eq!(
            map_notify_event(&ev),
            DocEvent::Changed(PathBuf::from("/tmp/doc.txt"))
        );
    }

    #[test]
    fn map_remove() {
        let ev = make_event(
            EventKind::Remove(RemoveKind::Any),
            vec![PathBuf::from("/tmp/doc.txt")],
        );
        assert_eq!(
            map_notify_event(&ev),
            DocEvent::Removed(PathBuf::from("/tmp/doc.txt"))
        );
    }

    #[test]
    fn map_rename_counts_as_change_to_destination() {
        let ev = make_event(
            EventKind::Modify(ModifyKind::Any),
            vec![PathBuf::from("/tmp/.doc.swp"), PathBuf::from("/tmp/doc.txt")],
        );
        assert_eq!(
            map_notify_event(&ev),
            DocEvent::Changed(PathBuf::from("/tmp/doc.txt"))
        );
    }
}

use anyhow::Result;
use crossterm::event::EventStream;
use futures_util::stream::StreamExt;
use tracing::warn;

use crate::input::{map_event, InputEvent};

/// Asynchronously listens for terminal events and invokes `on_event` for
/// each one, mapped to the crate-local [`InputEvent`].
///
/// This is a thin wrapper around `crossterm::event::EventStream` for hosts
/// that embed the viewer in an async runtime. The handler runs on the task
/// that awaits events; it should be quick and non-blocking.
///
/// Errors from the underlying stream are logged and the listener continues,
/// so transient terminal hiccups do not kill the input side.
pub async fn event_listener<F>(mut on_event: F) -> Result<()>
where
    F: FnMut(InputEvent) + Send + 'static,
{
    let mut stream = EventStream::new();

    while let Some(result) = stream.next().await {
        match result {
            Ok(event) => on_event(map_event(event)),
            Err(e) => warn!("async input event stream error (continuing): {}", e),
        }
    }

    Ok(())
}

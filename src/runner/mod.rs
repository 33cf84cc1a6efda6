pub mod event_loop_main;
pub mod handlers;
pub mod terminal;
#[cfg(feature = "fs-watch")]
pub mod watch_helpers;

pub use event_loop_main::run_app;

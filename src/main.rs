use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use docSpy::app::settings::{load_settings, Settings};
use docSpy::app::App;
use docSpy::doc::loader;
use docSpy::runner::run_app;
use docSpy::ui::colors;

/// Terminal document viewer with a scrollspy sidebar.
#[derive(Parser, Debug)]
#[command(name = "docSpy", version, about)]
struct Cli {
    /// Document file to view; the built-in sample when omitted.
    file: Option<PathBuf>,

    /// Theme to start with (dark, light, or a custom palette name).
    #[arg(long)]
    theme: Option<String>,

    /// Disable mouse capture for this run.
    #[arg(long)]
    no_mouse: bool,

    /// Append logs to this file (nothing is logged otherwise).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Reload automatically when the file changes on disk.
    #[cfg(feature = "fs-watch")]
    #[arg(long)]
    watch: bool,
}

/// File-only logging: a TUI owns stdout, so logs go nowhere unless a log
/// file was requested. The `log` records from dependencies are bridged
/// into the same subscriber.
fn init_tracing(path: &Path) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    Ok(guard)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log_guard = match cli.log_file.as_deref() {
        Some(path) => Some(init_tracing(path)?),
        None => None,
    };

    let mut settings = load_settings().unwrap_or_else(|e| {
        tracing::warn!("settings unavailable, using defaults: {:#}", e);
        Settings::default()
    });
    if let Some(theme) = cli.theme.as_deref() {
        settings.theme = theme.to_string();
    }
    if cli.no_mouse {
        settings.mouse_enabled = false;
    }
    colors::set_theme(&settings.theme);

    let (doc, source) = match cli.file.as_deref() {
        Some(path) => {
            let doc = loader::load_document(path)
                .with_context(|| format!("loading {}", path.display()))?;
            (doc, Some(path.to_path_buf()))
        }
        None => (loader::sample_document(), None),
    };

    tracing::info!("starting with {} sections", doc.sections.len());
    let mut app = App::new(doc, source, settings);
    app.watch = watch_requested(&cli);
    run_app(app)
}

#[cfg(feature = "fs-watch")]
fn watch_requested(cli: &Cli) -> bool {
    cli.watch
}

#[cfg(not(feature = "fs-watch"))]
fn watch_requested(_cli: &Cli) -> bool {
    false
}

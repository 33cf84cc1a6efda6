use std::io;
use std::path::PathBuf;

use directories_next::ProjectDirs;

/// Per-user configuration directory for the application, platform-resolved
/// (`~/.config/docSpy` on Linux). `None` when no home directory exists.
pub fn project_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "docSpy").map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn settings_path() -> Option<PathBuf> {
    project_config_dir().map(|dir| dir.join("settings.toml"))
}

/// Creates the config directory if it is missing.
pub fn ensure_dirs_exist() -> io::Result<()> {
    if let Some(dir) = project_config_dir() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

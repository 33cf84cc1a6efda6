use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::app::settings::config_dirs;

/// Persisted user settings, stored as TOML in the config directory.
///
/// `#[serde(default)]` keeps old settings files loadable when fields are
/// added later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme name, resolved by `ui::themes`.
    pub theme: String,
    pub mouse_enabled: bool,
    /// Glide to activated sections instead of jumping.
    pub smooth_scroll: bool,
    /// Lines per wheel notch.
    pub scroll_step: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: "dark".to_string(),
            mouse_enabled: true,
            smooth_scroll: true,
            scroll_step: 3,
        }
    }
}

/// Writes settings to the user config directory, creating it on first run.
pub fn save_settings(settings: &Settings) -> anyhow::Result<()> {
    config_dirs::ensure_dirs_exist()?;
    let path = config_dirs::settings_path()
        .context("no config directory available on this system")?;
    save_to(settings, &path)
}

pub fn save_to(settings: &Settings, path: &Path) -> anyhow::Result<()> {
    let text = toml::to_string_pretty(settings)?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

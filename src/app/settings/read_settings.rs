use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::app::settings::config_dirs;
use crate::app::settings::write_settings::Settings;

/// Loads settings from the user config directory. Missing or malformed
/// files surface as errors; callers typically fall back to defaults.
pub fn load_settings() -> anyhow::Result<Settings> {
    let path = config_dirs::settings_path()
        .context("no config directory available on this system")?;
    load_from(&path)
}

pub fn load_from(path: &Path) -> anyhow::Result<Settings> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let settings = toml::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(settings)
}

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::types::Config;

pub fn config_dir() -> PathBuf {
    // Prefer ~/.config/marktoggle on Unix-like systems so dotfile managers
    // find it next to other tools
    if let Some(home) = dirs::home_dir() {
        let xdg_config = home.join(".config").join("marktoggle");
        if xdg_config.exists() || cfg!(unix) {
            return xdg_config;
        }
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marktoggle")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load the user config, or defaults when there is none.
pub fn load_config() -> Result<Config> {
    let path = config_path();
    if !path.exists() {
        debug!("No config at {:?}, using defaults", path);
        return Ok(Config::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read config: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config: {:?}", path))?;

    debug!("Loaded config from {:?}", path);
    Ok(config)
}

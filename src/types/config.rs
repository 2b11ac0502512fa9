use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::StyleConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toolbar: ToolbarConfig,
    /// User-defined styles, merged over the built-in presets by name.
    #[serde(default)]
    pub styles: BTreeMap<String, StyleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolbarConfig {
    #[serde(default = "default_header_level")]
    pub header_level: u8,
    #[serde(default = "default_hotkeys")]
    pub hotkeys: bool,
    /// Override the platform shortcut modifier ("meta" or "control").
    #[serde(default)]
    pub modifier_key: Option<String>,
}

fn default_header_level() -> u8 {
    3
}

fn default_hotkeys() -> bool {
    true
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            header_level: default_header_level(),
            hotkeys: default_hotkeys(),
            modifier_key: None,
        }
    }
}

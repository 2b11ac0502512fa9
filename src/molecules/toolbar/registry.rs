use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::presets;
use crate::types::{Config, StyleConfig};

/// Modifier that turns a control's hotkey into a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKey {
    Meta,
    Control,
}

impl ModifierKey {
    /// `Meta` on macOS, `Control` everywhere else.
    pub fn platform() -> Self {
        if cfg!(target_os = "macos") {
            ModifierKey::Meta
        } else {
            ModifierKey::Control
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "meta" | "cmd" | "command" | "super" => Some(ModifierKey::Meta),
            "control" | "ctrl" => Some(ModifierKey::Control),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModifierKey::Meta => "Meta",
            ModifierKey::Control => "Control",
        }
    }
}

/// Styles registered per toolbar control, plus the controls' hotkeys.
///
/// A control exists only while registered; unregistering drops its style and
/// any hotkey bound to it.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: BTreeMap<String, StyleConfig>,
    hotkeys: BTreeMap<char, String>,
    modifier: ModifierKey,
}

impl StyleRegistry {
    pub fn new(modifier: ModifierKey) -> Self {
        Self {
            styles: BTreeMap::new(),
            hotkeys: BTreeMap::new(),
            modifier,
        }
    }

    /// Every built-in control, with the header at `header_level`.
    pub fn with_presets(header_level: u8) -> Self {
        let mut registry = Self::new(ModifierKey::platform());
        registry.register_header(presets::HEADER, header_level);
        registry.register(presets::BOLD, presets::bold());
        registry.register(presets::ITALIC, presets::italic());
        registry.register(presets::QUOTE, presets::quote());
        registry.register(presets::CODE, presets::code());
        registry.register(presets::LINK, presets::link());
        registry.register(presets::IMAGE, presets::image());
        registry.register(presets::UNORDERED_LIST, presets::unordered_list());
        registry.register(presets::ORDERED_LIST, presets::ordered_list());
        registry.register(presets::TASK_LIST, presets::task_list());
        registry.register(presets::MENTION, presets::mention());
        registry.register(presets::REFERENCE, presets::reference());

        registry.bind_hotkey('b', presets::BOLD);
        registry.bind_hotkey('i', presets::ITALIC);
        registry.bind_hotkey('k', presets::LINK);
        registry.bind_hotkey('L', presets::TASK_LIST);
        registry
    }

    /// Presets adjusted by the user's config; configured styles win over
    /// presets of the same name.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::with_presets(config.toolbar.header_level);

        if let Some(name) = config.toolbar.modifier_key.as_deref() {
            match ModifierKey::parse(name) {
                Some(modifier) => registry.modifier = modifier,
                None => warn!("Unknown modifier key {:?}, keeping {}", name, registry.modifier.as_str()),
            }
        }

        if !config.toolbar.hotkeys {
            registry.hotkeys.clear();
        }

        for (name, style) in &config.styles {
            registry.register(name, style.clone());
        }
        registry
    }

    pub fn register(&mut self, name: &str, style: StyleConfig) {
        debug!("Registered style control {:?}", name);
        self.styles.insert(name.to_string(), style);
    }

    /// Register a header control. Invalid levels register nothing.
    pub fn register_header(&mut self, name: &str, level: u8) -> bool {
        match presets::header(level) {
            Some(style) => {
                self.register(name, style);
                true
            }
            None => {
                warn!("Header level {} is outside 1-6, control {:?} not registered", level, name);
                false
            }
        }
    }

    pub fn unregister(&mut self, name: &str) -> Option<StyleConfig> {
        self.hotkeys.retain(|_, control| control != name);
        self.styles.remove(name)
    }

    /// Bind `key` to a registered control. Returns false for unknown controls.
    pub fn bind_hotkey(&mut self, key: char, name: &str) -> bool {
        if !self.styles.contains_key(name) {
            return false;
        }
        self.hotkeys.insert(key, name.to_string());
        true
    }

    pub fn get(&self, name: &str) -> Option<&StyleConfig> {
        self.styles.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn hotkey(&self, name: &str) -> Option<char> {
        self.hotkeys
            .iter()
            .find(|(_, control)| control.as_str() == name)
            .map(|(key, _)| *key)
    }

    pub fn modifier(&self) -> ModifierKey {
        self.modifier
    }

    /// The control triggered by a key press, if the platform modifier is held
    /// and `key` is bound. Keys are case-sensitive (`L` is not `l`).
    pub fn control_for_shortcut(&self, meta: bool, ctrl: bool, key: char) -> Option<&str> {
        let held = match self.modifier {
            ModifierKey::Meta => meta,
            ModifierKey::Control => ctrl,
        };
        if !held {
            return None;
        }
        self.hotkeys.get(&key).map(String::as_str)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

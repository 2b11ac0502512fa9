use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How a toolbar control styles the selected text.
///
/// All options default to empty / off, so a config only needs to name the
/// options it uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub prefix: String,
    pub suffix: String,
    /// Replaces `prefix` (followed by a newline) when the selection spans lines.
    pub block_prefix: String,
    /// Replaces `suffix` (preceded by a newline) when the selection spans lines.
    pub block_suffix: String,
    pub multiline: bool,
    pub ordered_list: bool,
    pub surround_with_newlines: bool,
    pub trim_first: bool,
    pub prefix_space: bool,
    #[serde(
        deserialize_with = "deserialize_scan_for",
        serialize_with = "serialize_scan_for",
        skip_serializing_if = "Option::is_none"
    )]
    pub scan_for: Option<Regex>,
    /// Placeholder inside `suffix` replaced by scanned selection text.
    pub replace_next: String,
    /// Placeholder inside `prefix` replaced by scanned selection text.
    pub replace_prev: String,
}

impl StyleConfig {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            ..Default::default()
        }
    }

    pub fn wrap(prefix: &str, suffix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
            ..Default::default()
        }
    }

    pub fn with_block(mut self, block_prefix: &str, block_suffix: &str) -> Self {
        self.block_prefix = block_prefix.to_string();
        self.block_suffix = block_suffix.to_string();
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn ordered_list(mut self) -> Self {
        self.ordered_list = true;
        self
    }

    pub fn surround_with_newlines(mut self) -> Self {
        self.surround_with_newlines = true;
        self
    }

    pub fn trim_first(mut self) -> Self {
        self.trim_first = true;
        self
    }

    pub fn prefix_space(mut self) -> Self {
        self.prefix_space = true;
        self
    }

    pub fn replace_next(mut self, placeholder: &str) -> Self {
        self.replace_next = placeholder.to_string();
        self
    }

    pub fn replace_prev(mut self, placeholder: &str) -> Self {
        self.replace_prev = placeholder.to_string();
        self
    }

    pub fn scan_for(mut self, pattern: Regex) -> Self {
        self.scan_for = Some(pattern);
        self
    }
}

impl PartialEq for StyleConfig {
    fn eq(&self, other: &Self) -> bool {
        self.prefix == other.prefix
            && self.suffix == other.suffix
            && self.block_prefix == other.block_prefix
            && self.block_suffix == other.block_suffix
            && self.multiline == other.multiline
            && self.ordered_list == other.ordered_list
            && self.surround_with_newlines == other.surround_with_newlines
            && self.trim_first == other.trim_first
            && self.prefix_space == other.prefix_space
            && self.scan_for.as_ref().map(Regex::as_str) == other.scan_for.as_ref().map(Regex::as_str)
            && self.replace_next == other.replace_next
            && self.replace_prev == other.replace_prev
    }
}

fn deserialize_scan_for<'de, D>(deserializer: D) -> Result<Option<Regex>, D::Error>
where
    D: Deserializer<'de>,
{
    // An empty pattern means "never scan", same as leaving it out
    let pattern = String::deserialize(deserializer)?;
    if pattern.is_empty() {
        return Ok(None);
    }
    Regex::new(&pattern)
        .map(Some)
        .map_err(serde::de::Error::custom)
}

fn serialize_scan_for<S>(value: &Option<Regex>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(re) => serializer.serialize_str(re.as_str()),
        None => serializer.serialize_str(""),
    }
}

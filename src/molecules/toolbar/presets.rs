//! Built-in toolbar styles.

use regex::Regex;

use crate::types::StyleConfig;

pub const HEADER: &str = "header";
pub const BOLD: &str = "bold";
pub const ITALIC: &str = "italic";
pub const QUOTE: &str = "quote";
pub const CODE: &str = "code";
pub const LINK: &str = "link";
pub const IMAGE: &str = "image";
pub const UNORDERED_LIST: &str = "unordered-list";
pub const ORDERED_LIST: &str = "ordered-list";
pub const TASK_LIST: &str = "task-list";
pub const MENTION: &str = "mention";
pub const REFERENCE: &str = "ref";

const URL_PATTERN: &str = "https?://";

/// `#` repeated `level` times plus a space. Levels outside 1-6 have no style.
pub fn header(level: u8) -> Option<StyleConfig> {
    if !(1..=6).contains(&level) {
        return None;
    }
    Some(StyleConfig::new(&format!("{} ", "#".repeat(level as usize))))
}

pub fn bold() -> StyleConfig {
    StyleConfig::wrap("**", "**").trim_first()
}

pub fn italic() -> StyleConfig {
    StyleConfig::wrap("_", "_").trim_first()
}

pub fn quote() -> StyleConfig {
    StyleConfig::new("> ").multiline().surround_with_newlines()
}

pub fn code() -> StyleConfig {
    StyleConfig::wrap("`", "`").with_block("```", "```")
}

pub fn link() -> StyleConfig {
    StyleConfig::wrap("[", "](url)")
        .replace_next("url")
        .scan_for(url_pattern())
}

pub fn image() -> StyleConfig {
    StyleConfig::wrap("![", "](url)")
        .replace_next("url")
        .scan_for(url_pattern())
}

pub fn unordered_list() -> StyleConfig {
    StyleConfig::new("- ").multiline().surround_with_newlines()
}

pub fn ordered_list() -> StyleConfig {
    StyleConfig::new("1. ").multiline().ordered_list()
}

pub fn task_list() -> StyleConfig {
    StyleConfig::new("- [ ] ").multiline().surround_with_newlines()
}

pub fn mention() -> StyleConfig {
    StyleConfig::new("@").prefix_space()
}

pub fn reference() -> StyleConfig {
    StyleConfig::new("#").prefix_space()
}

fn url_pattern() -> Regex {
    Regex::new(URL_PATTERN).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_levels() {
        assert_eq!(header(1).unwrap().prefix, "# ");
        assert_eq!(header(3).unwrap().prefix, "### ");
        assert_eq!(header(6).unwrap().prefix, "###### ");
    }

    #[test]
    fn test_header_invalid_levels() {
        assert!(header(0).is_none());
        assert!(header(7).is_none());
    }

    #[test]
    fn test_link_scans_urls() {
        let style = link();
        let scan = style.scan_for.unwrap();
        assert!(scan.is_match("http://x"));
        assert!(scan.is_match("https://x"));
        assert!(!scan.is_match("ftp://x"));
    }

    #[test]
    fn test_list_flags() {
        assert!(ordered_list().ordered_list);
        assert!(unordered_list().multiline);
        assert!(!unordered_list().ordered_list);
        assert!(task_list().surround_with_newlines);
    }
}

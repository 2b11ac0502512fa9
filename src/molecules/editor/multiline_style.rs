//! Per-line prefix/suffix toggling for multi-line selections (quotes, lists).

use crate::atoms::text::newlines_to_surround;
use crate::types::{Selection, SelectionRange, StyleConfig, StyleEdit};

/// Wrap every selected line in the style's prefix/suffix, or strip them when
/// every line already carries both.
pub fn multiline_style(text: &str, selection: Selection, style: &StyleConfig) -> StyleEdit {
    let selected = selection.slice(text);
    let lines: Vec<&str> = selected.split('\n').collect();
    let prefix = style.prefix.as_str();
    let suffix = style.suffix.as_str();

    let stripped: Option<Vec<&str>> = lines
        .iter()
        .map(|line| strip_line(line, prefix, suffix))
        .collect();

    let replacement = match stripped {
        Some(stripped) => {
            let unstyled = stripped.join("\n");
            let end = selection.start + unstyled.len();
            SelectionRange::new(unstyled, selection.start, end)
        }
        None => {
            let styled = lines
                .iter()
                .map(|line| format!("{}{}{}", prefix, line, suffix))
                .collect::<Vec<_>>()
                .join("\n");

            if style.surround_with_newlines {
                let newlines = newlines_to_surround(text, selection);
                let start = selection.start + newlines.to_append.len();
                let end = start + styled.len();
                SelectionRange::new(
                    format!("{}{}{}", newlines.to_append, styled, newlines.to_prepend),
                    start,
                    end,
                )
            } else {
                let end = selection.start + styled.len();
                SelectionRange::new(styled, selection.start, end)
            }
        }
    };

    StyleEdit {
        target: selection,
        replacement,
    }
}

fn strip_line<'a>(line: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    if line.len() < prefix.len() + suffix.len() {
        return None;
    }
    line.strip_prefix(prefix)?.strip_suffix(suffix)
}

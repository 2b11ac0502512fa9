//! Ordered list numbering: `1. `, `2. `, ... on every selected line.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::atoms::text::{line_end, line_start, newlines_to_surround, numbered_lines};
use crate::types::{Selection, SelectionRange, StyleEdit};

static ORDERED_LIST_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+").unwrap());

/// Number the selected lines, or strip the numbering when every line already
/// has one. A caret works on its whole line.
///
/// Existing numbers are never reused: numbering always restarts at 1.
pub fn ordered_list(text: &str, selection: Selection) -> StyleEdit {
    let caret = selection.is_caret();
    let target = if caret {
        Selection::new(
            line_start(text, selection.start),
            line_end(text, selection.start),
        )
    } else {
        selection
    };

    let selected = target.slice(text);
    let lines: Vec<&str> = selected.split('\n').collect();

    if lines.iter().all(|line| ORDERED_LIST_PREFIX.is_match(line)) {
        let stripped: Vec<Cow<'_, str>> = lines
            .iter()
            .map(|line| ORDERED_LIST_PREFIX.replace(line, ""))
            .collect();
        let unnumbered = stripped.join("\n");

        let replacement = if caret {
            let removed = lines[0].len() - stripped[0].len();
            let position = selection.start.saturating_sub(removed).max(target.start);
            SelectionRange::new(unnumbered, position, position)
        } else {
            SelectionRange::without_selection(unnumbered)
        };
        return StyleEdit { target, replacement };
    }

    let numbered = numbered_lines(&lines).join("\n");
    let newlines = newlines_to_surround(text, target);
    let mut start = target.start + newlines.to_append.len();
    let end = start + numbered.len();
    if caret {
        start = end;
    }

    StyleEdit {
        target,
        replacement: SelectionRange::new(
            format!("{}{}{}", newlines.to_append, numbered, newlines.to_prepend),
            start,
            end,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, sel: (usize, usize)) -> (String, StyleEdit) {
        let edit = ordered_list(text, Selection::new(sel.0, sel.1));
        (edit.apply_to(text), edit)
    }

    // ── numbering ─────────────────────────────────────────────────

    #[test]
    fn test_number_fresh_lines() {
        let (out, edit) = run("a\nb\nc", (0, 5));
        assert_eq!(out, "1. a\n2. b\n3. c");
        assert_eq!(edit.replacement.selection(), Some(Selection::new(0, 14)));
    }

    #[test]
    fn test_renumber_partially_numbered_lines() {
        let (out, _) = run("3. a\nb", (0, 6));
        assert_eq!(out, "1. 3. a\n2. b");
    }

    #[test]
    fn test_caret_numbers_whole_line() {
        let (out, edit) = run("hello", (2, 2));
        assert_eq!(edit.target, Selection::new(0, 5));
        assert_eq!(out, "1. hello");
        assert_eq!(edit.replacement.selection(), Some(Selection::caret(8)));
    }

    #[test]
    fn test_caret_on_empty_line() {
        let (out, edit) = run("", (0, 0));
        assert_eq!(out, "1. ");
        assert_eq!(edit.replacement.selection(), Some(Selection::caret(3)));
    }

    #[test]
    fn test_numbering_pads_against_paragraphs() {
        let (out, edit) = run("intro\na\nb\noutro", (6, 9));
        assert_eq!(out, "intro\n\n1. a\n2. b\n\noutro");
        let sel = edit.replacement.selection().unwrap();
        assert_eq!(&out[sel.start..sel.end], "1. a\n2. b");
    }

    // ── toggle-off ────────────────────────────────────────────────

    #[test]
    fn test_strip_numbering() {
        let (out, edit) = run("1. a\n2. b", (0, 9));
        assert_eq!(out, "a\nb");
        assert_eq!(edit.replacement.selection(), None);
    }

    #[test]
    fn test_strip_numbering_with_wide_numbers() {
        let (out, _) = run("9. a\n10.  b", (0, 11));
        assert_eq!(out, "a\nb");
    }

    #[test]
    fn test_caret_strips_its_line() {
        let text = "intro\n1. hello\noutro";
        let (out, edit) = run(text, (12, 12));
        assert_eq!(edit.target, Selection::new(6, 14));
        assert_eq!(out, "intro\nhello\noutro");
        assert_eq!(edit.replacement.selection(), Some(Selection::caret(9)));
    }

    #[test]
    fn test_caret_on_first_line_strips_whole_line() {
        let (out, edit) = run("1. hello", (5, 5));
        assert_eq!(edit.target, Selection::new(0, 8));
        assert_eq!(out, "hello");
        assert_eq!(edit.replacement.selection(), Some(Selection::caret(2)));
    }

    #[test]
    fn test_caret_inside_number_clamps_to_line_start() {
        let (out, edit) = run("12. x", (1, 1));
        assert_eq!(out, "x");
        assert_eq!(edit.replacement.selection(), Some(Selection::caret(0)));
    }
}

//! Word and line boundary scanning over byte offsets.
//!
//! Scans step by grapheme cluster so a returned offset never splits a
//! user-perceived character.

use unicode_segmentation::UnicodeSegmentation;

fn is_blank(grapheme: &str) -> bool {
    grapheme.chars().all(char::is_whitespace)
}

/// Walk backward from `index` while the preceding grapheme is not whitespace.
pub fn word_selection_start(text: &str, index: usize) -> usize {
    let index = index.min(text.len());
    let Some(head) = text.get(..index) else {
        return index;
    };

    let mut start = index;
    for (pos, grapheme) in head.grapheme_indices(true).rev() {
        if is_blank(grapheme) {
            break;
        }
        start = pos;
    }
    start
}

/// Walk forward from `index` until a break: a line break when `multiline`,
/// any whitespace otherwise. Stops at the end of `text`.
pub fn word_selection_end(text: &str, index: usize, multiline: bool) -> usize {
    let index = index.min(text.len());
    let Some(tail) = text.get(index..) else {
        return index;
    };

    let mut end = index;
    for grapheme in tail.graphemes(true) {
        let is_break = if multiline {
            grapheme.contains('\n')
        } else {
            is_blank(grapheme)
        };
        if is_break {
            break;
        }
        end += grapheme.len();
    }
    end
}

/// Offset of the first byte of the line containing `index`.
pub fn line_start(text: &str, index: usize) -> usize {
    let index = index.min(text.len());
    text.get(..index)
        .and_then(|head| head.rfind('\n'))
        .map(|pos| pos + 1)
        .unwrap_or(0)
}

/// Offset just past the last byte of the line containing `index`
/// (the position of its `\n`, or the end of `text`).
pub fn line_end(text: &str, index: usize) -> usize {
    word_selection_end(text, index, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── word_selection_start ──────────────────────────────────────

    #[test]
    fn test_word_start_mid_word() {
        assert_eq!(word_selection_start("hello world", 8), 6);
    }

    #[test]
    fn test_word_start_at_word_start() {
        assert_eq!(word_selection_start("hello world", 6), 6);
    }

    #[test]
    fn test_word_start_after_space() {
        // Caret right after "hello" belongs to that word
        assert_eq!(word_selection_start("hello world", 5), 0);
    }

    #[test]
    fn test_word_start_end_of_buffer() {
        assert_eq!(word_selection_start("hello", 5), 0);
    }

    #[test]
    fn test_word_start_stops_at_newline() {
        assert_eq!(word_selection_start("one\ntwo", 6), 4);
    }

    #[test]
    fn test_word_start_multibyte() {
        // "héllo wörld": 'é' and 'ö' are two bytes each
        let text = "héllo wörld";
        let caret = text.find('r').unwrap();
        assert_eq!(word_selection_start(text, caret), text.find('w').unwrap());
    }

    // ── word_selection_end ────────────────────────────────────────

    #[test]
    fn test_word_end_mid_word() {
        assert_eq!(word_selection_end("hello world", 7, false), 11);
    }

    #[test]
    fn test_word_end_stops_at_space() {
        assert_eq!(word_selection_end("hello world", 1, false), 5);
    }

    #[test]
    fn test_word_end_multiline_crosses_spaces() {
        assert_eq!(word_selection_end("a b c\nd", 0, true), 5);
    }

    #[test]
    fn test_word_end_crlf_is_a_break() {
        assert_eq!(word_selection_end("abc\r\ndef", 0, true), 3);
    }

    #[test]
    fn test_word_end_out_of_range_clamps() {
        assert_eq!(word_selection_end("abc", 10, false), 3);
    }

    // ── line_start / line_end ─────────────────────────────────────

    #[test]
    fn test_line_start_first_line() {
        assert_eq!(line_start("abc\ndef", 2), 0);
    }

    #[test]
    fn test_line_start_second_line() {
        assert_eq!(line_start("abc\ndef", 6), 4);
        assert_eq!(line_start("abc\ndef", 4), 4);
    }

    #[test]
    fn test_line_end() {
        assert_eq!(line_end("abc\ndef", 1), 3);
        assert_eq!(line_end("abc\ndef", 5), 7);
    }
}

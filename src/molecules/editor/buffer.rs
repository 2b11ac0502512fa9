use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use super::TextField;
use crate::types::Selection;

const MAX_UNDO_LEVELS: usize = 50;

#[derive(Debug, Clone)]
struct BufferSnapshot {
    content: String,
    selection: Selection,
}

#[derive(Debug, Clone, Default)]
struct UndoHistory {
    undo_stack: Vec<BufferSnapshot>,
    redo_stack: Vec<BufferSnapshot>,
}

/// In-memory text field with a selection and a bounded undo history.
///
/// Every style application is one undo step, whichever insertion path it
/// took.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    content: String,
    selection: Selection,
    history: UndoHistory,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_string(content: &str) -> Self {
        Self {
            content: content.to_string(),
            selection: Selection::default(),
            history: UndoHistory::default(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Currently selected text.
    pub fn selected_text(&self) -> &str {
        self.selection.slice(&self.content)
    }

    /// Byte offset of the grapheme at column `grapheme_idx`, clamped to the end.
    pub fn byte_offset(&self, grapheme_idx: usize) -> usize {
        self.content
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(pos, _)| pos)
            .unwrap_or(self.content.len())
    }

    /// Grapheme column of the byte offset `byte_idx`.
    pub fn grapheme_offset(&self, byte_idx: usize) -> usize {
        let byte_idx = byte_idx.min(self.content.len());
        self.content
            .grapheme_indices(true)
            .take_while(|(pos, _)| *pos < byte_idx)
            .count()
    }

    pub fn set_selection_graphemes(&mut self, start: usize, end: usize) {
        let selection = Selection::new(self.byte_offset(start), self.byte_offset(end));
        self.set_selection(selection);
    }

    pub fn selection_graphemes(&self) -> (usize, usize) {
        (
            self.grapheme_offset(self.selection.start),
            self.grapheme_offset(self.selection.end),
        )
    }

    fn clamp(&self, selection: Selection) -> Selection {
        let fit = |pos: usize| {
            let mut pos = pos.min(self.content.len());
            while !self.content.is_char_boundary(pos) {
                pos -= 1;
            }
            pos
        };
        Selection::new(fit(selection.start), fit(selection.end))
    }

    /// Save a snapshot of the current buffer state for undo.
    pub fn save_undo_snapshot(&mut self) {
        let snapshot = BufferSnapshot {
            content: self.content.clone(),
            selection: self.selection,
        };
        self.history.undo_stack.push(snapshot);
        if self.history.undo_stack.len() > MAX_UNDO_LEVELS {
            self.history.undo_stack.remove(0);
        }
        self.history.redo_stack.clear();
    }

    /// Undo the last change, returning true if successful.
    pub fn undo(&mut self) -> bool {
        if let Some(snapshot) = self.history.undo_stack.pop() {
            let current = BufferSnapshot {
                content: std::mem::take(&mut self.content),
                selection: self.selection,
            };
            self.history.redo_stack.push(current);
            self.content = snapshot.content;
            self.selection = snapshot.selection;
            true
        } else {
            false
        }
    }

    /// Redo the last undone change, returning true if successful.
    pub fn redo(&mut self) -> bool {
        if let Some(snapshot) = self.history.redo_stack.pop() {
            let current = BufferSnapshot {
                content: std::mem::take(&mut self.content),
                selection: self.selection,
            };
            self.history.undo_stack.push(current);
            self.content = snapshot.content;
            self.selection = snapshot.selection;
            true
        } else {
            false
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_stack.len()
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl TextField for TextBuffer {
    fn value(&self) -> &str {
        &self.content
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = self.clamp(selection);
    }

    fn set_value(&mut self, value: String) {
        self.content = value;
        self.selection = Selection::caret(self.content.len());
    }

    fn insert_native(&mut self, text: &str) -> bool {
        self.save_undo_snapshot();
        let Selection { start, end } = self.selection;
        self.content.replace_range(start..end, text);
        self.selection = Selection::caret(start + text.len());
        true
    }

    fn begin_undo_group(&mut self) {
        self.save_undo_snapshot();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_from_string() {
        let buffer = TextBuffer::from_string("Hello\nWorld");
        assert_eq!(buffer.to_string(), "Hello\nWorld");
        assert_eq!(buffer.selection(), Selection::caret(0));
    }

    #[test]
    fn test_selected_text() {
        let mut buffer = TextBuffer::from_string("hello world");
        buffer.set_selection(Selection::new(6, 11));
        assert_eq!(buffer.selected_text(), "world");
    }

    #[test]
    fn test_set_selection_clamps_to_content() {
        let mut buffer = TextBuffer::from_string("abc");
        buffer.set_selection(Selection::new(1, 99));
        assert_eq!(buffer.selection(), Selection::new(1, 3));
    }

    #[test]
    fn test_set_selection_snaps_to_char_boundary() {
        let mut buffer = TextBuffer::from_string("é!");
        buffer.set_selection(Selection::caret(1));
        assert_eq!(buffer.selection(), Selection::caret(0));
    }

    #[test]
    fn test_grapheme_conversions() {
        // "e\u{301}" is one grapheme of three bytes
        let buffer = TextBuffer::from_string("ae\u{301}b");
        assert_eq!(buffer.byte_offset(0), 0);
        assert_eq!(buffer.byte_offset(1), 1);
        assert_eq!(buffer.byte_offset(2), 4);
        assert_eq!(buffer.byte_offset(3), 5);
        assert_eq!(buffer.byte_offset(10), 5);
        assert_eq!(buffer.grapheme_offset(4), 2);
        assert_eq!(buffer.grapheme_offset(5), 3);
    }

    #[test]
    fn test_selection_graphemes_round_trip() {
        let mut buffer = TextBuffer::from_string("日本語 text");
        buffer.set_selection_graphemes(1, 3);
        assert_eq!(buffer.selected_text(), "本語");
        assert_eq!(buffer.selection_graphemes(), (1, 3));
    }

    #[test]
    fn test_insert_native_replaces_selection() {
        let mut buffer = TextBuffer::from_string("hello world");
        buffer.set_selection(Selection::new(6, 11));
        assert!(buffer.insert_native("**world**"));
        assert_eq!(buffer.content(), "hello **world**");
        assert_eq!(buffer.selection(), Selection::caret(15));
    }

    #[test]
    fn test_undo_redo() {
        let mut buffer = TextBuffer::from_string("abc");
        buffer.set_selection(Selection::new(0, 3));
        buffer.insert_native("xyz");
        assert_eq!(buffer.content(), "xyz");

        assert!(buffer.undo());
        assert_eq!(buffer.content(), "abc");
        assert_eq!(buffer.selection(), Selection::new(0, 3));

        assert!(buffer.redo());
        assert_eq!(buffer.content(), "xyz");
        assert!(!buffer.redo());
    }

    #[test]
    fn test_undo_empty_history() {
        let mut buffer = TextBuffer::new();
        assert!(!buffer.undo());
    }

    #[test]
    fn test_undo_history_is_bounded() {
        let mut buffer = TextBuffer::new();
        for _ in 0..(MAX_UNDO_LEVELS + 10) {
            buffer.insert_native("x");
        }
        assert_eq!(buffer.undo_depth(), MAX_UNDO_LEVELS);
    }
}

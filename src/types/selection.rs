/// A half-open byte range `[start, end)` inside a text field.
///
/// `start == end` is a caret. Offsets always sit on `char` boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    pub fn caret(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }

    /// The selected slice of `text`, or `""` when the range is out of bounds.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start..self.end).unwrap_or("")
    }
}

/// Replacement text for the current selection plus the selection to restore
/// afterwards, in offsets of the new buffer.
///
/// `None` offsets let the insertion fall back to selecting the inserted text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionRange {
    pub text: String,
    pub selection_start: Option<usize>,
    pub selection_end: Option<usize>,
}

impl SelectionRange {
    pub fn new(text: String, selection_start: usize, selection_end: usize) -> Self {
        Self {
            text,
            selection_start: Some(selection_start),
            selection_end: Some(selection_end),
        }
    }

    pub fn without_selection(text: String) -> Self {
        Self {
            text,
            selection_start: None,
            selection_end: None,
        }
    }

    /// Both offsets, when the strategy computed them.
    pub fn selection(&self) -> Option<Selection> {
        match (self.selection_start, self.selection_end) {
            (Some(start), Some(end)) => Some(Selection::new(start, end)),
            _ => None,
        }
    }
}

/// What a style strategy wants done to the buffer: replace `target` with
/// `replacement.text`.
///
/// `target` may be wider than the selection the user made (word expansion,
/// markup just outside the selection, full-line expansion for lists).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEdit {
    pub target: Selection,
    pub replacement: SelectionRange,
}

impl StyleEdit {
    /// Apply the edit to `text` and return the new content.
    pub fn apply_to(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + self.replacement.text.len());
        out.push_str(&text[..self.target.start]);
        out.push_str(&self.replacement.text);
        out.push_str(&text[self.target.end..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_new_orders_bounds() {
        let sel = Selection::new(7, 3);
        assert_eq!(sel, Selection { start: 3, end: 7 });
        assert_eq!(sel.len(), 4);
        assert!(!sel.is_caret());
    }

    #[test]
    fn test_selection_slice_out_of_bounds_is_empty() {
        assert_eq!(Selection::new(2, 40).slice("hello"), "");
        assert_eq!(Selection::new(1, 3).slice("hello"), "el");
    }

    #[test]
    fn test_selection_range_selection() {
        let range = SelectionRange::new("x".to_string(), 1, 2);
        assert_eq!(range.selection(), Some(Selection::new(1, 2)));
        assert_eq!(SelectionRange::without_selection("x".to_string()).selection(), None);
    }

    #[test]
    fn test_style_edit_apply_to() {
        let edit = StyleEdit {
            target: Selection::new(6, 11),
            replacement: SelectionRange::new("**world**".to_string(), 8, 13),
        };
        assert_eq!(edit.apply_to("hello world!"), "hello **world**!");
    }
}

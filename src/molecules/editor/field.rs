use crate::types::Selection;

/// A host text input: a mutable buffer plus a selection, in byte offsets.
///
/// Only `value`, `selection`, `set_selection` and `set_value` are required.
/// The remaining hooks default to no-ops for hosts without an undo history
/// or change notifications.
pub trait TextField {
    fn value(&self) -> &str;

    fn selection(&self) -> Selection;

    fn set_selection(&mut self, selection: Selection);

    /// Replace the whole buffer. Used when native insertion is unavailable.
    fn set_value(&mut self, value: String);

    /// Replace the current selection through the host's own editing path so
    /// the change joins its undo history, leaving the caret after `text`.
    ///
    /// Returns `false` when the host has no such path.
    fn insert_native(&mut self, _text: &str) -> bool {
        false
    }

    fn begin_undo_group(&mut self) {}

    fn end_undo_group(&mut self) {}

    /// Called after a direct `set_value` so the host can react to the change.
    fn notify_input(&mut self) {}
}

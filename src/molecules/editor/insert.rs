use std::sync::atomic::{AtomicU8, Ordering};

use tracing::debug;

use super::TextField;
use crate::types::{Selection, SelectionRange};

const UNKNOWN: u8 = 0;
const SUPPORTED: u8 = 1;
const UNSUPPORTED: u8 = 2;

/// Whether the host's native insertion can be trusted.
///
/// Starts unknown, is settled by the first insertion, and once proven
/// unsupported stays that way until `reset`.
#[derive(Debug)]
pub struct InsertCapability {
    state: AtomicU8,
}

impl InsertCapability {
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(UNKNOWN),
        }
    }

    /// `None` until the first insertion attempt.
    pub fn get(&self) -> Option<bool> {
        match self.state.load(Ordering::Relaxed) {
            SUPPORTED => Some(true),
            UNSUPPORTED => Some(false),
            _ => None,
        }
    }

    fn mark_supported(&self) {
        let _ = self.state.compare_exchange(
            UNKNOWN,
            SUPPORTED,
            Ordering::Relaxed,
            Ordering::Relaxed,
        );
    }

    fn mark_unsupported(&self) {
        self.state.store(UNSUPPORTED, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        self.state.store(UNKNOWN, Ordering::Relaxed);
    }
}

impl Default for InsertCapability {
    fn default() -> Self {
        Self::new()
    }
}

static NATIVE_INSERT: InsertCapability = InsertCapability::new();

/// The process-wide capability shared by every `insert_text` call.
pub fn native_insert_capability() -> &'static InsertCapability {
    &NATIVE_INSERT
}

/// Replace the field's selection with `range.text` and restore the selection
/// `range` asks for.
pub fn insert_text<F: TextField + ?Sized>(field: &mut F, range: &SelectionRange) {
    insert_text_with(field, range, native_insert_capability());
}

/// `insert_text` against an explicit capability cell.
pub fn insert_text_with<F: TextField + ?Sized>(
    field: &mut F,
    range: &SelectionRange,
    capability: &InsertCapability,
) {
    let original = field.selection();
    let value = field.value();
    let before = value.get(..original.start).unwrap_or(value).to_string();
    let after = value.get(original.end..).unwrap_or("").to_string();

    let mut inserted = false;
    if capability.get() != Some(false) {
        inserted = field.insert_native(&range.text);
        // Trust the host only if the text really landed before the caret
        if inserted {
            let caret = field.selection().start;
            inserted = field
                .value()
                .get(..caret)
                .is_some_and(|head| head.ends_with(&range.text));
        }
        if inserted {
            capability.mark_supported();
        } else {
            debug!("native insertion unavailable, falling back to direct replacement");
            capability.mark_unsupported();
        }
    }

    if !inserted {
        field.begin_undo_group();
        field.set_value(format!("{}{}{}", before, range.text, after));
        field.end_undo_group();
        field.notify_input();
    }

    let selection = range.selection().unwrap_or_else(|| {
        Selection::new(original.start, original.start + range.text.len())
    });
    field.set_selection(selection);
}

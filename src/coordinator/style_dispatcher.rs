use anyhow::{anyhow, Result};
use tracing::debug;

use crate::atoms::text::is_multiple_lines;
use crate::molecules::editor::{
    block_style, insert_text_with, multiline_style, native_insert_capability, ordered_list,
    InsertCapability, TextField,
};
use crate::molecules::toolbar::StyleRegistry;
use crate::types::{Selection, StyleConfig, StyleEdit};

pub struct StyleDispatcher;

impl StyleDispatcher {
    /// Pick the strategy for `style` and compute its edit without touching
    /// any field.
    pub fn plan(text: &str, selection: Selection, style: &StyleConfig) -> StyleEdit {
        if style.ordered_list {
            debug!(?selection, "ordered list");
            ordered_list(text, selection)
        } else if style.multiline && is_multiple_lines(selection.slice(text)) {
            debug!(?selection, prefix = %style.prefix, "per-line style");
            multiline_style(text, selection, style)
        } else {
            debug!(?selection, prefix = %style.prefix, "block style");
            block_style(text, selection, style)
        }
    }

    /// Toggle `style` on the field's current selection.
    pub fn apply<F: TextField + ?Sized>(field: &mut F, style: &StyleConfig) {
        Self::apply_with(field, style, native_insert_capability());
    }

    pub fn apply_with<F: TextField + ?Sized>(
        field: &mut F,
        style: &StyleConfig,
        capability: &InsertCapability,
    ) {
        let edit = Self::plan(field.value(), field.selection(), style);
        field.set_selection(edit.target);
        insert_text_with(field, &edit.replacement, capability);
    }

    /// Toggle the style registered for control `name`.
    pub fn apply_named<F: TextField + ?Sized>(
        field: &mut F,
        registry: &StyleRegistry,
        name: &str,
    ) -> Result<()> {
        let style = registry.get(name).ok_or_else(|| {
            let known: Vec<&str> = registry.names().collect();
            anyhow!("Unknown style {:?} (known: {})", name, known.join(", "))
        })?;
        Self::apply(field, style);
        Ok(())
    }
}

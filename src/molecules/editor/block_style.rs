//! Symmetric prefix/suffix wrapping of a (possibly empty) selection.
//!
//! Covers inline markup (bold, italic, code), block fences for multi-line
//! selections, links and images with placeholder substitution, and
//! mention-style triggers.

use crate::atoms::text::{
    is_multiple_lines, newlines_to_surround, word_selection_end, word_selection_start,
};
use crate::types::{Selection, SelectionRange, StyleConfig, StyleEdit};

/// Toggle `style` around `selection` in `text`.
///
/// The returned edit targets the selection after expansion: a caret grows to
/// the enclosing word, and a selection sitting just inside existing markup
/// grows to include it.
pub fn block_style(text: &str, selection: Selection, style: &StyleConfig) -> StyleEdit {
    let original = selection;
    let multiple = is_multiple_lines(original.slice(text));

    let mut prefix_to_use = if multiple && !style.block_prefix.is_empty() {
        format!("{}\n", style.block_prefix)
    } else {
        style.prefix.clone()
    };
    let mut suffix_to_use = if multiple && !style.block_suffix.is_empty() {
        format!("\n{}", style.block_suffix)
    } else {
        style.suffix.clone()
    };

    if style.prefix_space {
        let before = text.get(..original.start).and_then(|head| head.chars().next_back());
        if before.is_some_and(|c| !c.is_whitespace()) {
            prefix_to_use.insert(0, ' ');
        }
    }

    let target = expand_selection(text, original, &prefix_to_use, &suffix_to_use, style.multiline);
    let selected = target.slice(text);

    let has_replace_next = !style.replace_next.is_empty()
        && suffix_to_use.contains(&style.replace_next)
        && !selected.is_empty();
    let has_replace_prev = !style.replace_prev.is_empty()
        && prefix_to_use.contains(&style.replace_prev)
        && !selected.is_empty();

    if style.surround_with_newlines {
        let newlines = newlines_to_surround(text, target);
        prefix_to_use = format!("{}{}", newlines.to_append, style.prefix);
        suffix_to_use.push_str(&newlines.to_prepend);
    }

    let replacement = if let Some(inner) = strip_markup(selected, &prefix_to_use, &suffix_to_use) {
        unwrap_markup(inner, original, target, prefix_to_use.len())
    } else if !has_replace_next && !has_replace_prev {
        wrap_markup(selected, original, &prefix_to_use, &suffix_to_use, style.trim_first)
    } else if style.scan_for.as_ref().is_some_and(|re| re.is_match(selected)) {
        if has_replace_next {
            suffix_to_use = suffix_to_use.replacen(&style.replace_next, selected, 1);
        } else {
            prefix_to_use = prefix_to_use.replacen(&style.replace_prev, selected, 1);
        }
        let caret = target.start + prefix_to_use.len();
        SelectionRange::new(format!("{}{}", prefix_to_use, suffix_to_use), caret, caret)
    } else {
        let wrapped = format!("{}{}{}", prefix_to_use, selected, suffix_to_use);
        let placeholder = if has_replace_next {
            suffix_to_use
                .find(&style.replace_next)
                .map(|pos| (prefix_to_use.len() + selected.len() + pos, style.replace_next.len()))
        } else {
            prefix_to_use
                .find(&style.replace_prev)
                .map(|pos| (pos, style.replace_prev.len()))
        };
        match placeholder {
            Some((offset, len)) => {
                let start = target.start + offset;
                SelectionRange::new(wrapped, start, start + len)
            }
            None => {
                let caret = target.start + prefix_to_use.len();
                SelectionRange::new(wrapped, caret, caret)
            }
        }
    };

    StyleEdit { target, replacement }
}

/// Grow a caret to its word, or a range to include markup that sits right
/// outside it.
fn expand_selection(
    text: &str,
    selection: Selection,
    prefix: &str,
    suffix: &str,
    multiline: bool,
) -> Selection {
    if selection.is_caret() {
        return Selection::new(
            word_selection_start(text, selection.start),
            word_selection_end(text, selection.end, multiline),
        );
    }

    let Some(expanded_start) = selection.start.checked_sub(prefix.len()) else {
        return selection;
    };
    let expanded_end = selection.end + suffix.len();
    let begins_with_prefix = text.get(expanded_start..selection.start) == Some(prefix);
    let ends_with_suffix = text.get(selection.end..expanded_end) == Some(suffix);

    if begins_with_prefix && ends_with_suffix {
        Selection::new(expanded_start, expanded_end)
    } else {
        selection
    }
}

/// The payload between `prefix` and `suffix`, if `selected` carries both.
fn strip_markup<'a>(selected: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    if selected.len() < prefix.len() + suffix.len() {
        return None;
    }
    selected.strip_prefix(prefix)?.strip_suffix(suffix)
}

fn unwrap_markup(
    inner: &str,
    original: Selection,
    target: Selection,
    prefix_len: usize,
) -> SelectionRange {
    if original.is_caret() {
        // Keep the caret at the same spot inside the payload
        let position = original
            .start
            .saturating_sub(prefix_len)
            .clamp(target.start, target.start + inner.len());
        SelectionRange::new(inner.to_string(), position, position)
    } else {
        SelectionRange::new(inner.to_string(), target.start, target.start + inner.len())
    }
}

fn wrap_markup(
    selected: &str,
    original: Selection,
    prefix: &str,
    suffix: &str,
    trim_first: bool,
) -> SelectionRange {
    let mut start = original.start + prefix.len();
    let mut end = original.end + prefix.len();

    if !trim_first {
        return SelectionRange::new(format!("{}{}{}", prefix, selected, suffix), start, end);
    }

    let trimmed = selected.trim();
    let leading = &selected[..selected.len() - selected.trim_start().len()];
    // All-whitespace text is entirely "leading"
    let trailing = if trimmed.is_empty() {
        ""
    } else {
        &selected[selected.trim_end().len()..]
    };

    start += leading.len();
    end = end.saturating_sub(trailing.len()).max(start);
    SelectionRange::new(
        format!("{}{}{}{}{}", leading, prefix, trimmed, suffix, trailing),
        start,
        end,
    )
}

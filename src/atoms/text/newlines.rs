use crate::types::Selection;

/// Blank-line padding for a block inserted over a selection.
///
/// `to_append` goes before the opening markup (it extends the text before the
/// selection), `to_prepend` after the closing markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Newlines {
    pub to_append: String,
    pub to_prepend: String,
}

/// Compute the newlines needed so a block at `selection` sits one blank line
/// away from any adjacent non-blank text. Never pads against the buffer edges.
pub fn newlines_to_surround(text: &str, selection: Selection) -> Newlines {
    let before = text.get(..selection.start).unwrap_or("");
    let after = text.get(selection.end..).unwrap_or("");

    let breaks_before = before.len() - before.trim_end_matches('\n').len();
    let breaks_after = after.len() - after.trim_start_matches('\n').len();

    Newlines {
        to_append: padding(before, breaks_before),
        to_prepend: padding(after, breaks_after),
    }
}

fn padding(neighbour: &str, breaks: usize) -> String {
    if breaks < 2 && neighbour.chars().any(|c| !c.is_whitespace()) {
        "\n".repeat(2 - breaks)
    } else {
        String::new()
    }
}

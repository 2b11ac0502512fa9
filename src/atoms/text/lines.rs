/// True when `text`, ignoring leading and trailing whitespace, spans more
/// than one line. A selection of only surrounding blank lines is one line.
pub fn is_multiple_lines(text: &str) -> bool {
    text.trim().contains('\n')
}

/// Prefix each line with its 1-based position: `1. `, `2. `, ...
pub fn numbered_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line.as_ref()))
        .collect()
}

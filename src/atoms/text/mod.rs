mod boundary;
mod lines;
mod newlines;

pub use boundary::{line_end, line_start, word_selection_end, word_selection_start};
pub use lines::{is_multiple_lines, numbered_lines};
pub use newlines::{newlines_to_surround, Newlines};

mod block_style;
mod buffer;
mod field;
mod insert;
mod multiline_style;
mod ordered_list;

pub use block_style::block_style;
pub use buffer::TextBuffer;
pub use field::TextField;
pub use insert::{insert_text, insert_text_with, native_insert_capability, InsertCapability};
pub use multiline_style::multiline_style;
pub use ordered_list::ordered_list;

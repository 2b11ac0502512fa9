//! Selection-aware Markdown style toggling for plain-text fields.
//!
//! [`StyleDispatcher`] takes a field and a [`StyleConfig`], applies the style
//! to the current selection (or removes it when already present) and leaves
//! the selection on the styled payload.

pub mod atoms;
pub mod coordinator;
pub mod molecules;
pub mod types;

pub use coordinator::StyleDispatcher;
pub use molecules::editor::{TextBuffer, TextField};
pub use molecules::toolbar::StyleRegistry;
pub use types::{Config, Selection, SelectionRange, StyleConfig, StyleEdit};

mod config;
mod selection;
mod style;

pub use config::{Config, ToolbarConfig};
pub use selection::{Selection, SelectionRange, StyleEdit};
pub use style::StyleConfig;

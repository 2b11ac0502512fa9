pub mod presets;
mod registry;

pub use registry::{ModifierKey, StyleRegistry};

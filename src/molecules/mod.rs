pub mod editor;
pub mod toolbar;

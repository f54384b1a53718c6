pub mod grid;
pub mod theme;

pub use grid::{GridRenderer, numeric_json};
pub use theme::GridTheme;

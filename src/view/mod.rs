//! UI-agnostic view models.
//!
//! [`peers::render_snapshot`] fills a [`common::TableSurface`]; the TUI then maps
//! the grid to ratatui widgets for drawing.

pub mod common;
pub mod peers;

pub use common::{CellStyle, TableGrid, TableSurface, ViewCell};
pub use peers::render_snapshot;

//! Terminal User Interface for peertop.
//!
//! Owns the terminal and the foreground event loop. The table itself is
//! produced by the refresh thread and arrives here as repaint events.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;

pub use app::App;

//! peertop - live terminal view of a beacon node's connected peers.
//!
//! The library is split the same way the data flows:
//! - `provider` fetches the raw peer list
//! - `peers` extracts connected peers from it
//! - `view` writes them onto a table surface
//! - `refresh` runs that pipeline on a timer
//! - `tui` hosts the terminal and the event loop

pub mod config;
pub mod error;
pub mod peers;
pub mod provider;
pub mod refresh;
pub mod tui;
pub mod view;

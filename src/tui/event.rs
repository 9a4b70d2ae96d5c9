//! Event handling for TUI.
//!
//! Terminal input is polled on its own thread. The refresh thread and the
//! SIGINT handler push into the same channel, so the UI loop has a single
//! place to wait on.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

use crate::error::RefreshError;
use crate::view::{TableGrid, TableSurface, ViewCell};

/// How long the input thread blocks in a single poll.
const INPUT_POLL: Duration = Duration::from_millis(250);

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// Keyboard input.
    Key(KeyEvent),
    /// Terminal resize.
    Resize(u16, u16),
    /// Refresh loop finished a cycle; paint this table.
    Redraw(TableGrid),
    /// Refresh loop stopped on an error.
    Fatal(RefreshError),
    /// SIGINT received outside the terminal's raw-mode key path.
    Interrupt,
}

/// Event handler that polls for terminal events in a separate thread.
pub struct EventHandler {
    rx: Receiver<Event>,
    tx: Sender<Event>,
}

impl EventHandler {
    /// Creates the channel and starts the input thread.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            loop {
                if !event::poll(INPUT_POLL).unwrap_or(false) {
                    continue;
                }
                if let Ok(evt) = event::read() {
                    let event = match evt {
                        CrosstermEvent::Key(key) => Event::Key(key),
                        CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
                        _ => continue,
                    };
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, tx }
    }

    /// Sender for other producers (refresh thread, signal handler).
    pub fn sender(&self) -> Sender<Event> {
        self.tx.clone()
    }

    /// Receives the next event, blocking until one is available.
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Table surface owned by the refresh thread.
///
/// A repaint request ships a copy of the grid to the UI loop.
pub struct ChannelSurface {
    grid: TableGrid,
    tx: Sender<Event>,
}

impl ChannelSurface {
    pub fn new(tx: Sender<Event>) -> Self {
        Self {
            grid: TableGrid::new(),
            tx,
        }
    }
}

impl TableSurface for ChannelSurface {
    fn clear(&mut self) {
        self.grid.clear();
    }

    fn set_cell(&mut self, row: usize, col: usize, cell: ViewCell) {
        self.grid.set_cell(row, col, cell);
    }

    fn request_repaint(&mut self) -> Result<(), RefreshError> {
        self.tx
            .send(Event::Redraw(self.grid.clone()))
            .map_err(|_| RefreshError::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peers::PeerRecord;
    use crate::view::render_snapshot;

    #[test]
    fn repaint_sends_grid_copy() {
        let (tx, rx) = mpsc::channel();
        let mut surface = ChannelSurface::new(tx);
        render_snapshot(
            &mut surface,
            &vec![PeerRecord {
                peer_id: "a".to_string(),
                state: "connected".to_string(),
                ..PeerRecord::default()
            }],
        );
        surface.request_repaint().unwrap();

        match rx.try_recv() {
            Ok(Event::Redraw(grid)) => {
                assert_eq!(grid.row_count(), 2);
                assert_eq!(grid.row_texts(1), vec!["a", "", "connected", ""]);
            }
            other => panic!("expected redraw, got {:?}", other),
        }
    }

    #[test]
    fn repaint_fails_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut surface = ChannelSurface::new(tx);
        assert!(matches!(
            surface.request_repaint(),
            Err(RefreshError::Disconnected)
        ));
    }
}

//! Background refresh loop: fetch, extract, render, repaint, sleep.

use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::error::RefreshError;
use crate::peers::extract_peers;
use crate::provider::PeerSource;
use crate::view::{TableSurface, render_snapshot};

/// Pause between refresh cycles.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(2);

/// Drives one [`PeerSource`] into one [`TableSurface`].
///
/// The loop is the only writer of its surface.
pub struct RefreshLoop<P, S> {
    source: P,
    surface: S,
    interval: Duration,
    cycles: u64,
}

impl<P: PeerSource, S: TableSurface> RefreshLoop<P, S> {
    pub fn new(source: P, surface: S, interval: Duration) -> Self {
        Self {
            source,
            surface,
            interval,
            cycles: 0,
        }
    }

    /// Runs a single cycle without sleeping. Returns the number of peers rendered.
    ///
    /// A fetch or parse failure returns before the surface is touched.
    pub fn run_cycle(&mut self) -> Result<usize, RefreshError> {
        let body = self.source.fetch()?;
        let snapshot = extract_peers(&body)?;

        render_snapshot(&mut self.surface, &snapshot);
        self.surface.request_repaint()?;

        self.cycles += 1;
        debug!(
            cycle = self.cycles,
            peers = snapshot.len(),
            "refreshed peer table"
        );
        Ok(snapshot.len())
    }

    /// Runs cycles forever, sleeping `interval` between them.
    ///
    /// Only returns on the first error.
    pub fn run(mut self) -> RefreshError {
        loop {
            if let Err(e) = self.run_cycle() {
                return e;
            }
            thread::sleep(self.interval);
        }
    }

    /// Completed cycles so far.
    #[cfg(test)]
    fn cycles(&self) -> u64 {
        self.cycles
    }

    #[cfg(test)]
    fn surface(&self) -> &S {
        &self.surface
    }
}

//! Provider abstraction for peer list sources.
//!
//! The refresh loop only needs the raw response body, so a source is anything
//! that can produce one on demand: the node's HTTP API in production, a
//! scripted sequence of bodies in tests.

mod http;

pub use http::{HttpPeerSource, PEERS_PATH};

use crate::error::FetchError;

/// Source of raw peer list documents.
pub trait PeerSource {
    /// Fetches the current peer list body.
    ///
    /// Called once per refresh cycle. There is no retry: an error here ends the loop.
    fn fetch(&mut self) -> Result<String, FetchError>;

    /// Human-readable description of where peers come from (used in the table title).
    fn describe(&self) -> &str;
}

impl<P: PeerSource + ?Sized> PeerSource for Box<P> {
    fn fetch(&mut self) -> Result<String, FetchError> {
        (**self).fetch()
    }

    fn describe(&self) -> &str {
        (**self).describe()
    }
}

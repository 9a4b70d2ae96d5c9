//! Peer table: writes a [`PeerSnapshot`] onto a [`TableSurface`].

use super::common::{CellStyle, TableSurface, ViewCell};
use crate::peers::{PeerRecord, PeerSnapshot};

/// Fully rebuilds the surface from `snapshot`.
///
/// Row 0 is the header, rows `1..=len` are the peers in snapshot order.
/// No diffing against the previous contents.
pub fn render_snapshot<S: TableSurface + ?Sized>(surface: &mut S, snapshot: &PeerSnapshot) {
    surface.clear();

    for (col, label) in PeerRecord::headers().into_iter().enumerate() {
        surface.set_cell(0, col, ViewCell::new(label, CellStyle::Header));
    }

    for (idx, peer) in snapshot.iter().enumerate() {
        for (col, text) in peer.cells().into_iter().enumerate() {
            surface.set_cell(idx + 1, col, ViewCell::new(text, CellStyle::Data));
        }
    }
}

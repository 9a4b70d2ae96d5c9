//! Application state management.

use chrono::{DateTime, Local};
use ratatui::widgets::TableState;

use crate::view::TableGrid;

/// State shared between input handling and rendering.
#[derive(Debug)]
pub struct AppState {
    /// Last table received from the refresh loop. Empty until the first cycle.
    pub grid: TableGrid,
    /// Row/column selection and scroll offset of the table widget.
    pub table_state: TableState,
    /// Where peers come from, shown in the title.
    pub source: String,
    /// Local time of the last repaint request.
    pub last_update: Option<DateTime<Local>>,
}

impl AppState {
    /// Creates state with the selection parked on the origin cell.
    ///
    /// Selection is set only here; later refreshes keep the user's position.
    pub fn new(source: impl Into<String>) -> Self {
        let table_state = TableState::default()
            .with_selected(Some(0))
            .with_selected_column(Some(0));
        Self {
            grid: TableGrid::new(),
            table_state,
            source: source.into(),
            last_update: None,
        }
    }

    /// Replaces the table with a fresh one from the refresh loop.
    pub fn apply_grid(&mut self, grid: TableGrid) {
        self.grid = grid;
        self.last_update = Some(Local::now());
        self.clamp_selection();
    }

    /// Number of data rows (header excluded).
    pub fn peer_count(&self) -> usize {
        self.grid.row_count().saturating_sub(1)
    }

    fn clamp_selection(&mut self) {
        let count = self.peer_count();
        if let Some(selected) = self.table_state.selected()
            && count > 0
            && selected >= count
        {
            self.table_state.select(Some(count - 1));
        }
        let columns = self.grid.column_count();
        if let Some(col) = self.table_state.selected_column()
            && columns > 0
            && col >= columns
        {
            self.table_state.select_column(Some(columns - 1));
        }
    }

    /// Moves selection down by `n` rows.
    pub fn select_down(&mut self, n: usize) {
        let max = self.peer_count().saturating_sub(1);
        let selected = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some(selected.saturating_add(n).min(max)));
    }

    /// Moves selection up by `n` rows.
    pub fn select_up(&mut self, n: usize) {
        let selected = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some(selected.saturating_sub(n)));
    }

    pub fn select_first(&mut self) {
        self.table_state.select(Some(0));
    }

    pub fn select_last(&mut self) {
        self.table_state
            .select(Some(self.peer_count().saturating_sub(1)));
    }

    pub fn select_left(&mut self) {
        let col = self.table_state.selected_column().unwrap_or(0);
        self.table_state.select_column(Some(col.saturating_sub(1)));
    }

    pub fn select_right(&mut self) {
        let max = self.grid.column_count().saturating_sub(1);
        let col = self.table_state.selected_column().unwrap_or(0);
        self.table_state.select_column(Some((col + 1).min(max)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peers::PeerRecord;
    use crate::view::render_snapshot;

    fn grid_with(n: usize) -> TableGrid {
        let snapshot: Vec<PeerRecord> = (0..n)
            .map(|i| PeerRecord {
                peer_id: format!("peer-{}", i),
                state: "connected".to_string(),
                ..PeerRecord::default()
            })
            .collect();
        let mut grid = TableGrid::new();
        render_snapshot(&mut grid, &snapshot);
        grid
    }

    #[test]
    fn starts_at_origin_cell() {
        let state = AppState::new("http://127.0.0.1:3500");
        assert_eq!(state.table_state.selected(), Some(0));
        assert_eq!(state.table_state.selected_column(), Some(0));
        assert!(state.last_update.is_none());
    }

    #[test]
    fn refresh_keeps_user_selection() {
        let mut state = AppState::new("node");
        state.apply_grid(grid_with(5));
        state.select_down(3);
        state.select_right();

        state.apply_grid(grid_with(5));
        assert_eq!(state.table_state.selected(), Some(3));
        assert_eq!(state.table_state.selected_column(), Some(1));
        assert!(state.last_update.is_some());
    }

    #[test]
    fn shrinking_table_clamps_selection() {
        let mut state = AppState::new("node");
        state.apply_grid(grid_with(10));
        state.select_last();
        assert_eq!(state.table_state.selected(), Some(9));

        state.apply_grid(grid_with(4));
        assert_eq!(state.table_state.selected(), Some(3));
        assert_eq!(state.peer_count(), 4);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = AppState::new("node");
        state.apply_grid(grid_with(3));

        state.select_up(5);
        assert_eq!(state.table_state.selected(), Some(0));
        state.select_down(100);
        assert_eq!(state.table_state.selected(), Some(2));

        for _ in 0..10 {
            state.select_right();
        }
        assert_eq!(state.table_state.selected_column(), Some(3));
        for _ in 0..10 {
            state.select_left();
        }
        assert_eq!(state.table_state.selected_column(), Some(0));
    }
}

//! UI-agnostic table surface.
//!
//! The grid here carries text and a style class per cell without any dependency
//! on ratatui. The TUI maps [`CellStyle`] to concrete colors at draw time.

use crate::error::RefreshError;

/// Cell style classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellStyle {
    /// Header row (TUI: white on blue, bold).
    Header,
    /// Peer data rows (TUI: green on black).
    #[default]
    Data,
}

/// A single table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewCell {
    pub text: String,
    pub style: CellStyle,
}

impl ViewCell {
    pub fn new(text: impl Into<String>, style: CellStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Rendering surface the refresh loop writes into.
///
/// Anything that can clear itself, set a cell, and ask for a repaint works.
pub trait TableSurface {
    /// Removes every cell.
    fn clear(&mut self);

    /// Sets the cell at `(row, col)`, growing the grid as needed.
    fn set_cell(&mut self, row: usize, col: usize, cell: ViewCell);

    /// Asks the UI to paint the current contents.
    ///
    /// Fails only when nobody is listening any more.
    fn request_repaint(&mut self) -> Result<(), RefreshError>;
}

/// In-memory cell grid. Row 0 is the header once populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableGrid {
    rows: Vec<Vec<ViewCell>>,
}

impl TableGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row length.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn row(&self, row: usize) -> Option<&[ViewCell]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    #[cfg(test)]
    pub(crate) fn cell(&self, row: usize, col: usize) -> Option<&ViewCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Row texts, for assertions.
    #[cfg(test)]
    pub(crate) fn row_texts(&self, row: usize) -> Vec<&str> {
        self.row(row)
            .map(|cells| cells.iter().map(|c| c.text.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[ViewCell]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl TableSurface for TableGrid {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn set_cell(&mut self, row: usize, col: usize, cell: ViewCell) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize_with(col + 1, ViewCell::default);
        }
        cells[col] = cell;
    }

    fn request_repaint(&mut self) -> Result<(), RefreshError> {
        // Nothing to paint for a bare grid.
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_cell_grows_grid() {
        let mut grid = TableGrid::new();
        grid.set_cell(2, 1, ViewCell::new("x", CellStyle::Data));
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.cell(2, 1).unwrap().text, "x");
        assert_eq!(grid.cell(2, 0), Some(&ViewCell::default()));
        assert!(grid.row(0).unwrap().is_empty());
    }

    #[test]
    fn clear_removes_all_rows() {
        let mut grid = TableGrid::new();
        grid.set_cell(0, 0, ViewCell::new("h", CellStyle::Header));
        grid.clear();
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.column_count(), 0);
    }
}

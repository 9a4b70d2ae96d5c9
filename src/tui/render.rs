//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};

use super::state::AppState;
use super::style::Styles;
use crate::view::{TableGrid, ViewCell};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let mut block = Block::default()
        .title(format!(
            " Peers: {} connected @ {} ",
            state.peer_count(),
            state.source
        ))
        .title_bottom(Line::styled(
            " ^C quit  up/down select  left/right scroll ",
            Styles::dim(),
        ))
        .borders(Borders::ALL)
        .style(Styles::default());
    if let Some(ts) = state.last_update {
        block = block.title_bottom(
            Line::styled(format!(" updated {} ", ts.format("%H:%M:%S")), Styles::dim())
                .right_aligned(),
        );
    }

    let Some(header) = state.grid.row(0) else {
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(format!("Waiting for peers from {}", state.source)).block(block),
            area,
        );
        return;
    };

    let selected_column = state.table_state.selected_column().unwrap_or(0);
    let columns = visible_columns(state.grid.column_count(), selected_column);

    let header = Row::new(columns.iter().map(|&col| cell_at(header, col)))
        .style(Styles::table_header())
        .height(1);

    let rows: Vec<Row> = state
        .grid
        .rows()
        .skip(1)
        .map(|cells| Row::new(columns.iter().map(|&col| cell_at(cells, col))).height(1))
        .collect();

    let table = Table::new(rows, column_constraints(&state.grid, &columns, selected_column))
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Styles::selected())
        .cell_highlight_style(Styles::selected_cell());

    // The widget sees drawn-column indices; the selected column is the first
    // scrolled one (or `peer_id` at the origin).
    let mut view_state = state.table_state.clone();
    if state.table_state.selected_column().is_some() {
        view_state.select_column(Some(usize::from(selected_column > 0)));
    }

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(table, area, &mut view_state);
    *state.table_state.offset_mut() = view_state.offset();
}

fn cell_at(cells: &[ViewCell], col: usize) -> Cell<'_> {
    cells
        .get(col)
        .map(|cell| Cell::from(cell.text.as_str()).style(Styles::from_class(cell.style)))
        .unwrap_or_default()
}

/// Grid columns to draw: `peer_id` stays pinned on the left, the rest scroll
/// so the selected column comes right after it.
fn visible_columns(column_count: usize, selected: usize) -> Vec<usize> {
    if column_count == 0 {
        return Vec::new();
    }
    let first = selected.clamp(1, column_count);
    std::iter::once(0).chain(first..column_count).collect()
}

/// Columns keep their content width, except one that absorbs the leftover space:
/// the address column at the origin, the pinned `peer_id` once scrolled.
fn column_constraints(grid: &TableGrid, columns: &[usize], selected: usize) -> Vec<Constraint> {
    let mut widths = vec![0u16; grid.column_count()];
    for row in grid.rows() {
        for (col, cell) in row.iter().enumerate() {
            let w = u16::try_from(cell.text.chars().count()).unwrap_or(u16::MAX);
            widths[col] = widths[col].max(w);
        }
    }

    let flexible = if selected == 0 { 1 } else { 0 };
    columns
        .iter()
        .map(|&col| {
            if col == flexible {
                Constraint::Fill(1)
            } else {
                Constraint::Length(widths[col])
            }
        })
        .collect()
}

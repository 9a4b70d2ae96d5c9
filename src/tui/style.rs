//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::view::CellStyle;

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const DATA_BG: Color = Color::Black;
    pub const SELECTED_BG: Color = Color::DarkGray;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;
    pub const DATA_FG: Color = Color::Green;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Peer row style.
    pub fn data() -> Style {
        Style::default().fg(Theme::DATA_FG).bg(Theme::DATA_BG)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected cell within the selected row.
    pub fn selected_cell() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Maps a UI-agnostic [`CellStyle`] to a ratatui [`Style`].
    pub fn from_class(class: CellStyle) -> Style {
        match class {
            CellStyle::Header => Self::table_header(),
            CellStyle::Data => Self::data(),
        }
    }
}

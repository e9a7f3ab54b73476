//! Color theme for the dashboard

use ratatui::style::{Color, Modifier, Style};

/// Styles used across the dashboard panes
#[derive(Debug, Clone)]
pub struct Theme {
    /// Tab bar
    pub tabs: Style,
    /// Selected tab
    pub tab_selected: Style,
    /// Pane borders
    pub border: Style,
    /// Table headers
    pub header: Style,
    /// Selected table row
    pub selected: Style,
    /// Distribution bars
    pub bar: Style,
    /// De-emphasized text (captions, counts)
    pub dim: Style,
    /// Status bar
    pub status: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            tabs: Style::default().fg(Color::Gray),
            tab_selected: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            selected: Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            bar: Style::default().fg(Color::Yellow),
            dim: Style::default().fg(Color::DarkGray),
            status: Style::default().bg(Color::DarkGray).fg(Color::White),
        }
    }
}

//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the shortcuts that apply to the current view
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, hints: &str) {
        let status_bar = Paragraph::new(hints.to_string())
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));

        f.render_widget(status_bar, area);
    }
}

//! Section tab bar

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::controller::Section;

/// Tab bar over the three sections
pub struct TabBar;

impl TabBar {
    /// Title spans, with `active` highlighted. `None` highlights nothing.
    pub fn line(active: Option<Section>) -> Line<'static> {
        let mut spans = Vec::new();
        for (index, section) in Section::ALL.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            let label = format!("{} {}", index + 1, section.title());
            let style = if active == Some(*section) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", label), style));
        }
        Line::from(spans)
    }

    /// Render the tab bar
    pub fn render(f: &mut Frame, area: Rect, active: Option<Section>) {
        let tabs = Paragraph::new(Self::line(active)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Student Management System "),
        );
        f.render_widget(tabs, area);
    }
}

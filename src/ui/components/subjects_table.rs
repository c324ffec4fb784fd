use crate::controller::Section;
use crate::entities::Subject;
use crate::ui::core::{actions::Action, Component};
use crate::views::tables::{subject_rows, SubjectRow};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::list_navigation;

/// Subjects section: one row per cached subject.
pub struct SubjectsTableComponent {
    pub rows: Vec<SubjectRow>,
    pub selected_index: usize,
    table_state: TableState,
}

impl Default for SubjectsTableComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SubjectsTableComponent {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            selected_index: 0,
            table_state: TableState::default(),
        }
    }

    pub fn update_data(&mut self, subjects: &[Subject]) {
        self.rows = subject_rows(subjects);
        self.selected_index = list_navigation::clamp(self.selected_index, self.rows.len());
    }

    pub fn selected(&self) -> Option<&SubjectRow> {
        self.rows.get(self.selected_index)
    }
}

impl Component for SubjectsTableComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_index = list_navigation::next(self.selected_index, self.rows.len());
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = list_navigation::previous(self.selected_index, self.rows.len());
                Action::None
            }
            KeyCode::Char('a') => Action::NewSubject,
            KeyCode::Char('e') => self.selected().map_or(Action::None, |row| Action::EditSubject(row.id)),
            KeyCode::Char('d') => self.selected().map_or(Action::None, |row| Action::DeleteSubject(row.id)),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ({}) ", Section::Subjects.title(), self.rows.len()));

        if self.rows.is_empty() {
            let empty = Paragraph::new("No subjects found. Press 'a' to add one.").block(block);
            f.render_widget(empty, rect);
            return;
        }

        let header = Row::new(vec!["Code", "Name", "Credits", "Description"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.code.clone()),
                    Cell::from(row.name.clone()),
                    Cell::from(row.credits.clone()),
                    Cell::from(row.description.clone()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(10),
            Constraint::Percentage(30),
            Constraint::Length(8),
            Constraint::Min(20),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        self.table_state.select(Some(self.selected_index));
        f.render_stateful_widget(table, rect, &mut self.table_state);
    }
}

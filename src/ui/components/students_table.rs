use crate::controller::Section;
use crate::entities::Student;
use crate::ui::core::{actions::Action, Component};
use crate::views::tables::{student_rows, StudentRow};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::list_navigation;

/// Students section: one row per cached student.
pub struct StudentsTableComponent {
    pub rows: Vec<StudentRow>,
    pub selected_index: usize,
    table_state: TableState,
}

impl Default for StudentsTableComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentsTableComponent {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            selected_index: 0,
            table_state: TableState::default(),
        }
    }

    pub fn update_data(&mut self, students: &[Student], date_format: &str) {
        self.rows = student_rows(students, date_format);
        self.selected_index = list_navigation::clamp(self.selected_index, self.rows.len());
    }

    pub fn selected(&self) -> Option<&StudentRow> {
        self.rows.get(self.selected_index)
    }
}

impl Component for StudentsTableComponent {
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
            KeyCode::Char('a') => Action::NewStudent,
            KeyCode::Char('e') => self.selected().map_or(Action::None, |row| Action::EditStudent(row.id)),
            KeyCode::Char('d') => self.selected().map_or(Action::None, |row| Action::DeleteStudent(row.id)),
            KeyCode::Enter | KeyCode::Char('v') => self
                .selected()
                .map_or(Action::None, |row| Action::ViewStudentDetails(row.id)),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ({}) ", Section::Students.title(), self.rows.len()));

        if self.rows.is_empty() {
            let empty = Paragraph::new("No students found. Press 'a' to add one.").block(block);
            f.render_widget(empty, rect);
            return;
        }

        let header = Row::new(vec!["Student ID", "Name", "Email", "Phone", "Enrollment Date"])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.student_id.clone()),
                    Cell::from(row.full_name.clone()),
                    Cell::from(row.email.clone()),
                    Cell::from(row.phone.clone()),
                    Cell::from(row.enrollment_date.clone()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(12),
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Length(16),
            Constraint::Length(16),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        self.table_state.select(Some(self.selected_index));
        f.render_stateful_widget(table, rect, &mut self.table_state);
    }
}

//! Student detail overlay: personal info plus enrollment management.

use crate::constants::{MESSAGE_LOADING, MESSAGE_NO_AVAILABLE_SUBJECTS, MESSAGE_NO_ENROLLMENTS, MESSAGE_NO_SUMMARY};
use crate::controller::{DetailPane, StudentDetailState, SummaryPane};
use crate::entities::Subject;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crate::views::detail::{detail_view, summary_lines, DetailView};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::list_navigation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailFocus {
    #[default]
    Enrolled,
    Available,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailContent {
    Loading,
    Error(String),
    Loaded(DetailView),
}

pub struct StudentDetailComponent {
    pub student_id: Option<i64>,
    pub content: DetailContent,
    pub summary: Option<Vec<String>>,
    pub focus: DetailFocus,
    pub enrolled_index: usize,
    pub available_index: usize,
    enrolled_state: ListState,
    available_state: ListState,
}

impl Default for StudentDetailComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentDetailComponent {
    pub fn new() -> Self {
        Self {
            student_id: None,
            content: DetailContent::Loading,
            summary: None,
            focus: DetailFocus::default(),
            enrolled_index: 0,
            available_index: 0,
            enrolled_state: ListState::default(),
            available_state: ListState::default(),
        }
    }

    pub fn update_data(&mut self, detail: Option<&StudentDetailState>, subjects: &[Subject], date_format: &str) {
        let Some(detail) = detail else {
            *self = Self::new();
            return;
        };

        if self.student_id != Some(detail.student_id) {
            *self = Self::new();
            self.student_id = Some(detail.student_id);
        }

        self.content = match &detail.pane {
            DetailPane::Loading => DetailContent::Loading,
            DetailPane::Error(message) => DetailContent::Error(message.clone()),
            DetailPane::Loaded(student) => DetailContent::Loaded(detail_view(student, subjects, date_format)),
        };
        self.summary = detail.summary.as_ref().map(|summary| match summary {
            SummaryPane::Loaded(rows) if rows.is_empty() => vec![MESSAGE_NO_SUMMARY.to_string()],
            SummaryPane::Loaded(rows) => summary_lines(rows),
            SummaryPane::Error(message) => vec![message.clone()],
        });

        if let DetailContent::Loaded(view) = &self.content {
            self.enrolled_index = list_navigation::clamp(self.enrolled_index, view.enrolled.len());
            self.available_index = list_navigation::clamp(self.available_index, view.available.len());
        }
    }

    fn view(&self) -> Option<&DetailView> {
        match &self.content {
            DetailContent::Loaded(view) => Some(view),
            _ => None,
        }
    }

    fn move_selection(&mut self, forward: bool) {
        let (enrolled_len, available_len) = self
            .view()
            .map(|view| (view.enrolled.len(), view.available.len()))
            .unwrap_or((0, 0));
        let (index, len) = match self.focus {
            DetailFocus::Enrolled => (&mut self.enrolled_index, enrolled_len),
            DetailFocus::Available => (&mut self.available_index, available_len),
        };
        *index = if forward {
            list_navigation::next(*index, len)
        } else {
            list_navigation::previous(*index, len)
        };
    }

    fn unenroll_selected(&self) -> Action {
        self.view()
            .and_then(|view| {
                view.enrolled.get(self.enrolled_index).map(|entry| Action::UnenrollStudent {
                    enrollment_id: entry.enrollment_id,
                    student_id: view.student_id,
                })
            })
            .unwrap_or(Action::None)
    }

    fn enroll_selected(&self) -> Action {
        self.view()
            .and_then(|view| {
                view.available.get(self.available_index).map(|entry| Action::EnrollStudent {
                    student_id: view.student_id,
                    subject_id: entry.subject_id,
                })
            })
            .unwrap_or(Action::None)
    }

    fn render_lists(&mut self, f: &mut Frame, area: Rect, view: &DetailView) {
        let [left, right] = LayoutManager::two_columns(area, 50);
        let focused_style = Style::default().fg(Color::Cyan);

        let enrolled_items: Vec<ListItem> = if view.enrolled.is_empty() {
            vec![ListItem::new(Span::styled(
                MESSAGE_NO_ENROLLMENTS,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))]
        } else {
            view.enrolled
                .iter()
                .map(|entry| ListItem::new(entry.label.clone()))
                .collect()
        };
        let available_items: Vec<ListItem> = if view.available.is_empty() {
            vec![ListItem::new(Span::styled(
                MESSAGE_NO_AVAILABLE_SUBJECTS,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))]
        } else {
            view.available
                .iter()
                .map(|entry| ListItem::new(entry.label.clone()))
                .collect()
        };

        let enrolled_block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Enrolled Subjects ({}) ", view.enrolled.len()));
        let available_block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Available Subjects ({}) ", view.available.len()));
        let (enrolled_block, available_block) = match self.focus {
            DetailFocus::Enrolled => (enrolled_block.border_style(focused_style), available_block),
            DetailFocus::Available => (enrolled_block, available_block.border_style(focused_style)),
        };

        let highlight = Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD);
        let enrolled_list = List::new(enrolled_items)
            .block(enrolled_block)
            .highlight_style(highlight);
        let available_list = List::new(available_items)
            .block(available_block)
            .highlight_style(highlight);

        let enrolled_selection = (self.focus == DetailFocus::Enrolled && !view.enrolled.is_empty())
            .then_some(self.enrolled_index);
        let available_selection = (self.focus == DetailFocus::Available && !view.available.is_empty())
            .then_some(self.available_index);
        self.enrolled_state.select(enrolled_selection);
        self.available_state.select(available_selection);

        f.render_stateful_widget(enrolled_list, left, &mut self.enrolled_state);
        f.render_stateful_widget(available_list, right, &mut self.available_state);
    }
}

impl Component for StudentDetailComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Action::BackToStudents,
            KeyCode::Left | KeyCode::Char('h') => {
                self.focus = DetailFocus::Enrolled;
                Action::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.focus = DetailFocus::Available;
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(true);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(false);
                Action::None
            }
            KeyCode::Enter => match self.focus {
                DetailFocus::Available => self.enroll_selected(),
                DetailFocus::Enrolled => self.unenroll_selected(),
            },
            KeyCode::Char('u') => self.unenroll_selected(),
            KeyCode::Char('s') => Action::LoadGradeSummary,
            KeyCode::Char('e') => self.student_id.map_or(Action::None, Action::EditStudent),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let view = match &self.content {
            DetailContent::Loading => {
                let loading = Paragraph::new(MESSAGE_LOADING)
                    .block(Block::default().borders(Borders::ALL).title(" Student Details "));
                f.render_widget(loading, rect);
                return;
            }
            DetailContent::Error(message) => {
                let error = Paragraph::new(message.clone())
                    .style(Style::default().fg(Color::Red))
                    .block(Block::default().borders(Borders::ALL).title(" Student Details "))
                    .wrap(Wrap { trim: true });
                f.render_widget(error, rect);
                return;
            }
            DetailContent::Loaded(view) => view.clone(),
        };

        let info_height = u16::try_from(view.info.len()).unwrap_or(u16::MAX).saturating_add(2);
        let summary_height = self
            .summary
            .as_ref()
            .map(|lines| u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2))
            .unwrap_or(0);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(info_height),
                Constraint::Min(3),
                Constraint::Length(summary_height),
            ])
            .split(rect);

        let info_lines: Vec<Line> = view
            .info
            .iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{}: ", label), Style::default().fg(Color::Cyan)),
                    Span::raw(value.clone()),
                ])
            })
            .collect();
        let info = Paragraph::new(info_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", view.title))
                .title_style(Style::default().add_modifier(Modifier::BOLD)),
        );
        f.render_widget(info, chunks[0]);

        self.render_lists(f, chunks[1], &view);

        if let Some(lines) = &self.summary {
            let summary = Paragraph::new(lines.join("\n"))
                .block(Block::default().borders(Borders::ALL).title(" Grade Summary "))
                .wrap(Wrap { trim: true });
            f.render_widget(summary, chunks[2]);
        }
    }
}

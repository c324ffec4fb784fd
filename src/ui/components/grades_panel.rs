//! Grades section: two filter selectors above the filtered grade report.

use crate::constants::{MESSAGE_ERROR_LOADING_GRADES, MESSAGE_NOT_ENROLLED, PROMPT_SELECT_BOTH};
use crate::controller::{AppState, GradeFilter, GradesPane};
use crate::ui::components::dialogs::common;
use crate::ui::core::{actions::Action, Component};
use crate::views::report::{grade_report, GradeReportView, ScoreBand};
use crate::views::SelectOption;
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
pub enum GradesFocus {
    #[default]
    StudentFilter,
    SubjectFilter,
    GradeList,
}

impl GradesFocus {
    fn next(self) -> Self {
        match self {
            GradesFocus::StudentFilter => GradesFocus::SubjectFilter,
            GradesFocus::SubjectFilter => GradesFocus::GradeList,
            GradesFocus::GradeList => GradesFocus::StudentFilter,
        }
    }

    fn previous(self) -> Self {
        match self {
            GradesFocus::StudentFilter => GradesFocus::GradeList,
            GradesFocus::SubjectFilter => GradesFocus::StudentFilter,
            GradesFocus::GradeList => GradesFocus::SubjectFilter,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GradesContent {
    Message(&'static str),
    Report(GradeReportView),
}

/// Option after `current` in `options`, skipping disabled entries.
/// The placeholder maps to `None`.
pub fn step_option(options: &[SelectOption], current: Option<i64>, forward: bool) -> Option<i64> {
    let enabled: Vec<&SelectOption> = options.iter().filter(|option| !option.disabled).collect();
    if enabled.is_empty() {
        return None;
    }
    let current_value = current.map(|id| id.to_string()).unwrap_or_default();
    let position = enabled.iter().position(|option| option.value == current_value);
    let next = match (position, forward) {
        (None, _) => 0,
        (Some(index), true) => list_navigation::next(index, enabled.len()),
        (Some(index), false) => list_navigation::previous(index, enabled.len()),
    };
    enabled[next].value.parse::<i64>().ok()
}

fn selected_label(options: &[SelectOption], current: Option<i64>) -> String {
    let current_value = current.map(|id| id.to_string()).unwrap_or_default();
    options
        .iter()
        .find(|option| option.value == current_value)
        .map(|option| option.label.clone())
        .unwrap_or_default()
}

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Excellent => Color::Green,
        ScoreBand::Good => Color::Yellow,
        ScoreBand::Poor => Color::Red,
    }
}

pub struct GradesPanelComponent {
    pub student_options: Vec<SelectOption>,
    pub subject_options: Vec<SelectOption>,
    pub filter: GradeFilter,
    pub content: GradesContent,
    pub focus: GradesFocus,
    pub selected_index: usize,
    list_state: ListState,
}

impl Default for GradesPanelComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl GradesPanelComponent {
    pub fn new() -> Self {
        Self {
            student_options: Vec::new(),
            subject_options: Vec::new(),
            filter: GradeFilter::default(),
            content: GradesContent::Message(PROMPT_SELECT_BOTH),
            focus: GradesFocus::default(),
            selected_index: 0,
            list_state: ListState::default(),
        }
    }

    pub fn update_data(&mut self, state: &AppState, date_format: &str) {
        self.student_options = state.student_options.clone();
        self.subject_options = state.subject_options.clone();
        self.filter = state.grade_filter;
        self.content = match &state.grades_pane {
            GradesPane::Prompt => GradesContent::Message(PROMPT_SELECT_BOTH),
            GradesPane::NotEnrolled => GradesContent::Message(MESSAGE_NOT_ENROLLED),
            GradesPane::Error => GradesContent::Message(MESSAGE_ERROR_LOADING_GRADES),
            GradesPane::Report { enrollment, grades } => {
                GradesContent::Report(grade_report(enrollment, grades, date_format))
            }
        };
        self.selected_index = list_navigation::clamp(self.selected_index, self.grade_ids().len());
    }

    /// Grade ids in display order
    pub fn grade_ids(&self) -> Vec<i64> {
        match &self.content {
            GradesContent::Report(report) => report.entries().map(|entry| entry.id).collect(),
            GradesContent::Message(_) => Vec::new(),
        }
    }

    fn selected_grade(&self) -> Option<i64> {
        self.grade_ids().get(self.selected_index).copied()
    }

    fn step(&mut self, forward: bool) -> Action {
        match self.focus {
            GradesFocus::StudentFilter => {
                Action::SetStudentFilter(step_option(&self.student_options, self.filter.student_id, forward))
            }
            GradesFocus::SubjectFilter => {
                Action::SetSubjectFilter(step_option(&self.subject_options, self.filter.subject_id, forward))
            }
            GradesFocus::GradeList => {
                let len = self.grade_ids().len();
                self.selected_index = if forward {
                    list_navigation::next(self.selected_index, len)
                } else {
                    list_navigation::previous(self.selected_index, len)
                };
                Action::None
            }
        }
    }

    fn report_items(&self, report: &GradeReportView) -> (Vec<ListItem<'static>>, Option<usize>) {
        let mut items = Vec::new();
        let mut selected_row = None;
        let mut entry_index = 0;

        for section in &report.sections {
            items.push(ListItem::new(Line::from(Span::styled(
                section.heading.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))));
            if let Some(message) = section.empty_message {
                items.push(ListItem::new(Line::from(Span::styled(
                    format!("  {}", message),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                ))));
            }
            for entry in &section.entries {
                if entry_index == self.selected_index {
                    selected_row = Some(items.len());
                }
                entry_index += 1;

                let mut spans = vec![
                    Span::raw(format!("  {}  ", entry.title)),
                    Span::styled(entry.score.clone(), Style::default().fg(band_color(entry.band))),
                    Span::styled(
                        format!("  [{}] ", entry.letter_grade),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(entry.band.as_str(), Style::default().fg(band_color(entry.band))),
                    Span::styled(format!("  {}", entry.date), Style::default().fg(Color::Gray)),
                ];
                if let Some(notes) = &entry.notes {
                    spans.push(Span::styled(format!("  {}", notes), Style::default().fg(Color::DarkGray)));
                }
                items.push(ListItem::new(Line::from(spans)));
            }
        }

        (items, selected_row)
    }
}

impl Component for GradesPanelComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Right | KeyCode::Char('l') => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.focus = self.focus.previous();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => self.step(true),
            KeyCode::Up | KeyCode::Char('k') => self.step(false),
            KeyCode::Char('a') => Action::NewGrade,
            KeyCode::Char('e') if self.focus == GradesFocus::GradeList => {
                self.selected_grade().map_or(Action::None, Action::EditGrade)
            }
            KeyCode::Char('d') if self.focus == GradesFocus::GradeList => {
                self.selected_grade().map_or(Action::None, Action::DeleteGrade)
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(rect);
        let filters = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        let student = common::create_selection_paragraph(
            &selected_label(&self.student_options, self.filter.student_id),
            "Student",
            self.focus == GradesFocus::StudentFilter,
        );
        let subject = common::create_selection_paragraph(
            &selected_label(&self.subject_options, self.filter.subject_id),
            "Subject",
            self.focus == GradesFocus::SubjectFilter,
        );
        f.render_widget(student, filters[0]);
        f.render_widget(subject, filters[1]);

        let list_color = if self.focus == GradesFocus::GradeList {
            Color::Cyan
        } else {
            Color::White
        };

        match &self.content {
            GradesContent::Message(message) => {
                let paragraph = Paragraph::new(*message)
                    .block(Block::default().borders(Borders::ALL).title(" Grades "))
                    .style(Style::default().fg(Color::Gray))
                    .wrap(Wrap { trim: true });
                f.render_widget(paragraph, chunks[1]);
            }
            GradesContent::Report(report) => {
                let (items, selected_row) = self.report_items(report);
                let list = List::new(items)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(format!(" {} ", report.heading))
                            .border_style(Style::default().fg(list_color)),
                    )
                    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
                let selection = if self.focus == GradesFocus::GradeList {
                    selected_row
                } else {
                    None
                };
                self.list_state.select(selection);
                f.render_stateful_widget(list, chunks[1], &mut self.list_state);
            }
        }
    }
}

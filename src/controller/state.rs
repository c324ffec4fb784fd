//! Application state owned by the view controller.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use super::forms::FormState;
use crate::entities::{Enrollment, Grade, GradeSummary, Student, Subject};
use crate::views::SelectOption;

/// Top-level sections reachable from the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Section {
    #[default]
    Students,
    Subjects,
    Grades,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Students, Section::Subjects, Section::Grades];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Students => "students",
            Section::Subjects => "subjects",
            Section::Grades => "grades",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Students => "Students",
            Section::Subjects => "Subjects",
            Section::Grades => "Grades",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Section::Students => 0,
            Section::Subjects => 1,
            Section::Grades => 2,
        }
    }

    pub fn next(&self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    pub fn previous(&self) -> Section {
        Section::ALL[(self.index() + Section::ALL.len() - 1) % Section::ALL.len()]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "students" => Ok(Section::Students),
            "subjects" => Ok(Section::Subjects),
            "grades" => Ok(Section::Grades),
            other => Err(format!("unknown section '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailPane {
    Loading,
    Loaded(Box<Student>),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SummaryPane {
    Loaded(Vec<GradeSummary>),
    Error(String),
}

/// The student-detail overlay. Its presence hides the section tabs.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDetailState {
    pub student_id: i64,
    pub pane: DetailPane,
    pub summary: Option<SummaryPane>,
}

impl StudentDetailState {
    pub fn student(&self) -> Option<&Student> {
        match &self.pane {
            DetailPane::Loaded(student) => Some(student),
            _ => None,
        }
    }
}

/// Current selections of the grade report filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeFilter {
    pub student_id: Option<i64>,
    pub subject_id: Option<i64>,
}

impl GradeFilter {
    pub fn both(&self) -> Option<(i64, i64)> {
        self.student_id.zip(self.subject_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GradesPane {
    #[default]
    Prompt,
    NotEnrolled,
    Error,
    Report {
        enrollment: Box<Enrollment>,
        grades: Vec<Grade>,
    },
}

/// Destructive operations held until the user answers the confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmedAction {
    DeleteStudent(i64),
    DeleteSubject(i64),
    DeleteGrade(i64),
    EnrollStudent { student_id: i64, subject_id: i64 },
    UnenrollStudent { enrollment_id: i64, student_id: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    pub message: &'static str,
    pub action: ConfirmedAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Everything the controller knows. Collections are ephemeral copies of the
/// backend and are replaced wholesale on every reload.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_section: Section,
    pub students: Vec<Student>,
    pub subjects: Vec<Subject>,
    pub detail: Option<StudentDetailState>,
    pub grade_filter: GradeFilter,
    pub student_options: Vec<SelectOption>,
    pub subject_options: Vec<SelectOption>,
    pub grades_pane: GradesPane,
    pub modal: Option<FormState>,
    pub confirmation: Option<PendingConfirmation>,
    pub notifications: VecDeque<Notification>,
}

impl AppState {
    pub fn new(section: Section) -> Self {
        Self {
            current_section: section,
            ..Default::default()
        }
    }

    /// Tab highlighted in the tab bar; none while the detail overlay is open.
    pub fn active_tab(&self) -> Option<Section> {
        match self.detail {
            Some(_) => None,
            None => Some(self.current_section),
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    pub fn has_overlay(&self) -> bool {
        self.confirmation.is_some() || self.modal.is_some() || !self.notifications.is_empty()
    }
}

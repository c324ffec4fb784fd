//! Modal form model shared by the Student, Subject and Grade forms.
//!
//! A form is a list of fields with browser-style native validation:
//! required fields, number bounds, email and date shape. Submitting a form
//! yields a flat name → string map, exactly what gets sent to the backend.

use crate::constants::{OPTION_ENROLLMENTS_ERROR, OPTION_NO_ENROLLMENTS, OPTION_SELECT_ENROLLMENT, OPTION_SELECT_TYPE};
use crate::entities::grade::SCORE_DECIMALS;
use crate::entities::subject::{MAX_CREDITS, MIN_CREDITS};
use crate::entities::{Enrollment, Grade, GradeType, Student, Subject};
use crate::utils::datetime;
use crate::views::SelectOption;

pub use crate::api::FormData;

/// Which record the modal edits. `id` is `Some` in edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Student { id: Option<i64> },
    Subject { id: Option<i64> },
    Grade { id: Option<i64> },
}

impl FormKind {
    pub fn record_id(&self) -> Option<i64> {
        match self {
            FormKind::Student { id } | FormKind::Subject { id } | FormKind::Grade { id } => *id,
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            FormKind::Student { .. } => "Student",
            FormKind::Subject { .. } => "Subject",
            FormKind::Grade { .. } => "Grade",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Number {
        min: Option<f64>,
        max: Option<f64>,
        /// Allowed decimal places; zero for whole numbers.
        decimals: u32,
    },
    TextArea,
    Select(Vec<SelectOption>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl FormField {
    fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            label,
            kind,
            required,
            value: String::new(),
        }
    }

    fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn is_select(&self) -> bool {
        matches!(self.kind, FieldKind::Select(_))
    }

    /// Label of the currently selected option, for select fields
    pub fn selected_label(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Select(options) => options
                .iter()
                .find(|option| option.value == self.value && !option.disabled)
                .or_else(|| options.iter().find(|option| option.value == self.value))
                .map(|option| option.label.as_str()),
            _ => None,
        }
    }

    /// Native-style check of this field's value
    pub fn check(&self) -> Result<(), String> {
        let value = self.value.trim();
        if value.is_empty() {
            if self.required {
                let message = if self.is_select() {
                    "Please select an item in the list."
                } else {
                    "Please fill out this field."
                };
                return Err(format!("{}: {}", self.label, message));
            }
            return Ok(());
        }

        match &self.kind {
            FieldKind::Email => {
                let valid = value
                    .split_once('@')
                    .map(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'))
                    .unwrap_or(false);
                if !valid || value.contains(char::is_whitespace) {
                    return Err(format!("{}: Please enter an email address.", self.label));
                }
            }
            FieldKind::Date => {
                if datetime::parse_date(value).is_err() {
                    return Err(format!("{}: Please enter a valid date (YYYY-MM-DD).", self.label));
                }
            }
            FieldKind::Number { min, max, decimals } => {
                let number = value
                    .parse::<f64>()
                    .ok()
                    .filter(|number| number.is_finite())
                    .ok_or_else(|| format!("{}: Please enter a number.", self.label))?;
                let scaled = number * 10f64.powi(*decimals as i32);
                if (scaled - scaled.round()).abs() > 1e-6 {
                    return Err(if *decimals == 0 {
                        format!("{}: Please enter a whole number.", self.label)
                    } else {
                        format!("{}: Please enter a value with at most {} decimal places.", self.label, decimals)
                    });
                }
                if let Some(min) = min {
                    if number < *min {
                        return Err(format!("{}: Value must be greater than or equal to {}.", self.label, min));
                    }
                }
                if let Some(max) = max {
                    if number > *max {
                        return Err(format!("{}: Value must be less than or equal to {}.", self.label, max));
                    }
                }
            }
            FieldKind::Select(options) => {
                let selectable = options
                    .iter()
                    .any(|option| option.value == value && !option.disabled);
                if !selectable {
                    return Err(format!("{}: Please select an item in the list.", self.label));
                }
            }
            FieldKind::Text | FieldKind::Tel | FieldKind::TextArea => {}
        }
        Ok(())
    }
}

/// State of the shared modal.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub kind: FormKind,
    pub fields: Vec<FormField>,
    pub focused: usize,
    pub error: Option<String>,
}

impl FormState {
    fn new(kind: FormKind, fields: Vec<FormField>) -> Self {
        Self {
            kind,
            fields,
            focused: 0,
            error: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.kind.record_id().is_some()
    }

    pub fn title(&self) -> String {
        match (self.kind, self.is_edit()) {
            (FormKind::Grade { .. }, true) => "Edit Grade".to_string(),
            (FormKind::Grade { .. }, false) => "Add Grade".to_string(),
            (kind, true) => format!("Edit {}", kind.noun()),
            (kind, false) => format!("Add New {}", kind.noun()),
        }
    }

    pub fn submit_label(&self) -> String {
        format!("{} {}", if self.is_edit() { "Update" } else { "Add" }, self.kind.noun())
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|field| field.value.as_str())
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|field| field.name == name) {
            field.value = value.into();
        }
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Type into the focused field. Select fields ignore typing.
    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            if !field.is_select() {
                field.value.push(c);
                self.error = None;
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            if !field.is_select() {
                field.value.pop();
                self.error = None;
            }
        }
    }

    /// Move the focused select to the next/previous enabled option.
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.fields.get_mut(self.focused) else {
            return;
        };
        let FieldKind::Select(options) = &field.kind else {
            return;
        };
        let enabled: Vec<&SelectOption> = options.iter().filter(|option| !option.disabled).collect();
        if enabled.is_empty() {
            return;
        }
        let current = enabled.iter().position(|option| option.value == field.value);
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => enabled.len() - 1,
            (Some(index), true) => (index + 1) % enabled.len(),
            (Some(index), false) => (index + enabled.len() - 1) % enabled.len(),
        };
        field.value = enabled[next].value.clone();
        self.error = None;
    }

    /// Every field, trimmed of nothing, keyed by name.
    pub fn form_data(&self) -> FormData {
        self.fields
            .iter()
            .map(|field| (field.name.to_string(), field.value.clone()))
            .collect()
    }

    /// Run native validation; on failure report the first failing field.
    pub fn validate(&self) -> Result<FormData, (usize, String)> {
        for (index, field) in self.fields.iter().enumerate() {
            field.check().map_err(|message| (index, message))?;
        }
        Ok(self.form_data())
    }
}

pub fn student_form(existing: Option<&Student>) -> FormState {
    let fields = vec![
        FormField::new("student_id", "Student ID", FieldKind::Text, true)
            .with_value(existing.map(|s| s.student_id.clone()).unwrap_or_default()),
        FormField::new("first_name", "First Name", FieldKind::Text, true)
            .with_value(existing.map(|s| s.first_name.clone()).unwrap_or_default()),
        FormField::new("last_name", "Last Name", FieldKind::Text, true)
            .with_value(existing.map(|s| s.last_name.clone()).unwrap_or_default()),
        FormField::new("email", "Email", FieldKind::Email, true)
            .with_value(existing.map(|s| s.email.clone()).unwrap_or_default()),
        FormField::new("phone", "Phone", FieldKind::Tel, false)
            .with_value(existing.and_then(|s| s.phone.clone()).unwrap_or_default()),
        FormField::new("date_of_birth", "Date of Birth", FieldKind::Date, true).with_value(
            existing
                .map(|s| datetime::format_ymd(s.date_of_birth))
                .unwrap_or_default(),
        ),
        FormField::new("address", "Address", FieldKind::TextArea, false)
            .with_value(existing.and_then(|s| s.address.clone()).unwrap_or_default()),
    ];
    FormState::new(FormKind::Student { id: existing.map(|s| s.id) }, fields)
}

pub fn subject_form(existing: Option<&Subject>) -> FormState {
    let credits = FieldKind::Number {
        min: Some(f64::from(MIN_CREDITS)),
        max: Some(f64::from(MAX_CREDITS)),
        decimals: 0,
    };
    let fields = vec![
        FormField::new("code", "Subject Code", FieldKind::Text, true)
            .with_value(existing.map(|s| s.code.clone()).unwrap_or_default()),
        FormField::new("name", "Subject Name", FieldKind::Text, true)
            .with_value(existing.map(|s| s.name.clone()).unwrap_or_default()),
        FormField::new("credits", "Credits", credits, true)
            .with_value(existing.map(|s| s.credits.to_string()).unwrap_or_default()),
        FormField::new("description", "Description", FieldKind::TextArea, false)
            .with_value(existing.and_then(|s| s.description.clone()).unwrap_or_default()),
    ];
    FormState::new(FormKind::Subject { id: existing.map(|s| s.id) }, fields)
}

/// Label of one Student - Subject option, falling back to ids when the
/// backend left out a display field.
pub fn enrollment_option_label(enrollment: &Enrollment) -> String {
    let student = enrollment
        .student_name
        .clone()
        .unwrap_or_else(|| format!("Student (ID: {})", enrollment.student));
    let subject = match &enrollment.subject_code {
        Some(code) => format!(
            "{} ({})",
            code,
            enrollment
                .subject_name
                .clone()
                .unwrap_or_else(|| format!("Subject ID: {}", enrollment.subject))
        ),
        None => format!("Subject (ID: {})", enrollment.subject),
    };
    format!("{} - {}", student, subject)
}

/// Options for the grade form's enrollment selector.
///
/// `None` means the enrollment fetch failed; the selector then degrades to a
/// single explanatory option instead of blocking the form.
pub fn enrollment_options(enrollments: Option<&[Enrollment]>) -> Vec<SelectOption> {
    match enrollments {
        None => vec![SelectOption::disabled(OPTION_ENROLLMENTS_ERROR)],
        Some([]) => vec![SelectOption::disabled(OPTION_NO_ENROLLMENTS)],
        Some(enrollments) => std::iter::once(SelectOption::placeholder(OPTION_SELECT_ENROLLMENT))
            .chain(
                enrollments
                    .iter()
                    .map(|enrollment| SelectOption::new(enrollment.id.to_string(), enrollment_option_label(enrollment))),
            )
            .collect(),
    }
}

fn grade_type_options() -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(OPTION_SELECT_TYPE))
        .chain(
            GradeType::ALL
                .iter()
                .map(|grade_type| SelectOption::new(grade_type.as_str(), grade_type.label())),
        )
        .collect()
}

pub fn grade_form(existing: Option<&Grade>, enrollment_options: Vec<SelectOption>) -> FormState {
    let score = FieldKind::Number {
        min: Some(0.0),
        max: None,
        decimals: SCORE_DECIMALS,
    };
    let max_score = FieldKind::Number {
        min: Some(1.0),
        max: None,
        decimals: SCORE_DECIMALS,
    };
    let fields = vec![
        FormField::new("enrollment", "Student - Subject", FieldKind::Select(enrollment_options), true)
            .with_value(existing.map(|g| g.enrollment.to_string()).unwrap_or_default()),
        FormField::new("grade_type", "Grade Type", FieldKind::Select(grade_type_options()), true)
            .with_value(existing.map(|g| g.grade_type.as_str()).unwrap_or_default()),
        FormField::new("title", "Title", FieldKind::Text, true)
            .with_value(existing.map(|g| g.title.clone()).unwrap_or_default()),
        FormField::new("score", "Score", score, true)
            .with_value(existing.map(|g| format!("{:.2}", g.score)).unwrap_or_default()),
        FormField::new("max_score", "Max Score", max_score, true).with_value(
            existing
                .map(|g| format!("{:.2}", g.max_score))
                .unwrap_or_else(|| "100".to_string()),
        ),
        FormField::new("notes", "Notes", FieldKind::TextArea, false)
            .with_value(existing.and_then(|g| g.notes.clone()).unwrap_or_default()),
    ];
    FormState::new(FormKind::Grade { id: existing.map(|g| g.id) }, fields)
}

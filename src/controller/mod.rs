//! View controller for the gradebook.
//!
//! [`AppController`] owns the [`AppState`] and the [`SchoolApi`] handle. Each
//! handler awaits its requests one at a time and leaves the state ready to be
//! rendered. Every mutation is followed by a full reload of the affected
//! collection; nothing is patched locally.
//!
//! Failures follow two tiers:
//! - transport or HTTP failures raise the generic error notification and are
//!   logged, then the handler applies its own fallback;
//! - absence conditions (not enrolled, empty lists) become inline messages.

pub mod forms;
pub mod state;

use crate::api::{ApiError, SchoolApi};
use crate::constants::*;
use crate::entities::{Grade, NewEnrollment, Student, Subject};
use crate::views::report::{self, find_enrollment_for_subject};

use forms::{FormData, FormKind};
pub use state::{
    AppState, ConfirmedAction, DetailPane, GradeFilter, GradesPane, Notification, NotificationKind,
    PendingConfirmation, Section, StudentDetailState, SummaryPane,
};

pub struct AppController {
    pub state: AppState,
    api: SchoolApi,
    date_format: String,
}

impl AppController {
    pub fn new(api: SchoolApi, section: Section, date_format: impl Into<String>) -> Self {
        Self {
            state: AppState::new(section),
            api,
            date_format: date_format.into(),
        }
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Initial load: students first, then subjects.
    pub async fn init(&mut self) {
        log::info!("Controller: initial load, section {}", self.state.current_section);
        self.load_students().await;
        self.load_subjects().await;
        if self.state.current_section == Section::Grades {
            self.load_grade_filters();
        }
    }

    // Notifications

    fn notify_success(&mut self, message: &str) {
        log::info!("{}", message);
        self.state.notifications.push_back(Notification {
            kind: NotificationKind::Success,
            message: message.to_string(),
        });
    }

    fn notify_error(&mut self, message: &str) {
        self.state.notifications.push_back(Notification {
            kind: NotificationKind::Error,
            message: message.to_string(),
        });
    }

    /// Generic failure path shared by every API call.
    fn report(&mut self, context: &str, error: &ApiError) {
        log::error!("{}: {}", context, error);
        self.notify_error(ERROR_GENERIC_API);
    }

    pub fn dismiss_notification(&mut self) {
        self.state.notifications.pop_front();
    }

    // Navigation

    pub async fn show_section(&mut self, section: Section) {
        log::debug!("Navigation: showing section {}", section);
        self.state.detail = None;
        self.state.current_section = section;
        match section {
            Section::Students => self.load_students().await,
            Section::Subjects => self.load_subjects().await,
            Section::Grades => self.load_grade_filters(),
        }
    }

    pub async fn back_to_students(&mut self) {
        self.show_section(Section::Students).await;
    }

    // Collections

    pub async fn load_students(&mut self) {
        match self.api.list_students().await {
            Ok(students) => {
                log::debug!("Loaded {} students", students.len());
                self.state.students = students;
            }
            Err(e) => self.report("Error loading students", &e),
        }
    }

    pub async fn load_subjects(&mut self) {
        match self.api.list_subjects().await {
            Ok(subjects) => {
                log::debug!("Loaded {} subjects", subjects.len());
                self.state.subjects = subjects;
            }
            Err(e) => self.report("Error loading subjects", &e),
        }
    }

    // Students

    pub fn show_student_form(&mut self, existing: Option<&Student>) {
        self.state.modal = Some(forms::student_form(existing));
    }

    pub async fn edit_student(&mut self, id: i64) {
        match self.api.get_student(id).await {
            Ok(student) => self.show_student_form(Some(&student)),
            Err(e) => self.report("Error loading student", &e),
        }
    }

    pub async fn save_student(&mut self, id: Option<i64>, data: &FormData) {
        let result = match id {
            Some(id) => self.api.update_student(id, data).await,
            None => self.api.create_student(data).await,
        };
        match result {
            Ok(()) => {
                self.notify_success(if id.is_some() {
                    SUCCESS_STUDENT_UPDATED
                } else {
                    SUCCESS_STUDENT_ADDED
                });
                self.close_modal();
                self.load_students().await;
                // An edit started from the detail overlay must not leave it stale
                let open_detail = self.state.detail.as_ref().map(|detail| detail.student_id);
                if let (Some(id), Some(detail_id)) = (id, open_detail) {
                    if id == detail_id {
                        self.view_student_details(id).await;
                    }
                }
            }
            Err(e) => self.report("Error saving student", &e),
        }
    }

    pub fn delete_student(&mut self, id: i64) {
        self.request_confirmation(CONFIRM_DELETE_STUDENT, ConfirmedAction::DeleteStudent(id));
    }

    // Subjects

    pub fn show_subject_form(&mut self, existing: Option<&Subject>) {
        self.state.modal = Some(forms::subject_form(existing));
    }

    pub async fn edit_subject(&mut self, id: i64) {
        match self.api.get_subject(id).await {
            Ok(subject) => self.show_subject_form(Some(&subject)),
            Err(e) => self.report("Error loading subject", &e),
        }
    }

    pub async fn save_subject(&mut self, id: Option<i64>, data: &FormData) {
        let result = match id {
            Some(id) => self.api.update_subject(id, data).await,
            None => self.api.create_subject(data).await,
        };
        match result {
            Ok(()) => {
                self.notify_success(if id.is_some() {
                    SUCCESS_SUBJECT_UPDATED
                } else {
                    SUCCESS_SUBJECT_ADDED
                });
                self.close_modal();
                self.load_subjects().await;
            }
            Err(e) => self.report("Error saving subject", &e),
        }
    }

    pub fn delete_subject(&mut self, id: i64) {
        self.request_confirmation(CONFIRM_DELETE_SUBJECT, ConfirmedAction::DeleteSubject(id));
    }

    // Grades

    /// Opens the grade form. The enrollment selector degrades instead of
    /// blocking the form when enrollments cannot be fetched.
    pub async fn show_grade_form(&mut self, existing: Option<&Grade>) {
        let options = match self.api.list_enrollments(None).await {
            Ok(enrollments) => forms::enrollment_options(Some(&enrollments)),
            Err(e) => {
                self.report("Error loading enrollments for grade form", &e);
                self.notify_error(ERROR_LOAD_ENROLLMENT_OPTIONS);
                forms::enrollment_options(None)
            }
        };
        self.state.modal = Some(forms::grade_form(existing, options));
    }

    pub async fn edit_grade(&mut self, id: i64) {
        match self.api.get_grade(id).await {
            Ok(grade) => self.show_grade_form(Some(&grade)).await,
            Err(e) => self.report("Error loading grade", &e),
        }
    }

    pub async fn save_grade(&mut self, id: Option<i64>, data: &FormData) {
        let result = match id {
            Some(id) => self.api.update_grade(id, data).await,
            None => self.api.create_grade(data).await,
        };
        match result {
            Ok(()) => {
                self.notify_success(if id.is_some() {
                    SUCCESS_GRADE_UPDATED
                } else {
                    SUCCESS_GRADE_ADDED
                });
                self.close_modal();
                self.load_grades_for_student().await;
            }
            Err(e) => self.report("Error saving grade", &e),
        }
    }

    pub fn delete_grade(&mut self, id: i64) {
        self.request_confirmation(CONFIRM_DELETE_GRADE, ConfirmedAction::DeleteGrade(id));
    }

    // Grade report

    /// Rebuilds both selectors from the cached collections and clears the selections.
    pub fn load_grade_filters(&mut self) {
        self.state.student_options = report::student_filter_options(&self.state.students);
        self.state.subject_options = report::subject_filter_options(&self.state.subjects);
        self.state.grade_filter = GradeFilter::default();
        self.state.grades_pane = GradesPane::Prompt;
    }

    pub async fn set_student_filter(&mut self, student_id: Option<i64>) {
        self.state.grade_filter.student_id = student_id;
        self.load_grades_for_student().await;
    }

    pub async fn set_subject_filter(&mut self, subject_id: Option<i64>) {
        self.state.grade_filter.subject_id = subject_id;
        self.load_grades_for_student().await;
    }

    pub async fn load_grades_for_student(&mut self) {
        let Some((student_id, subject_id)) = self.state.grade_filter.both() else {
            self.state.grades_pane = GradesPane::Prompt;
            return;
        };

        let enrollments = match self.api.list_enrollments(Some(student_id)).await {
            Ok(enrollments) => enrollments,
            Err(e) => {
                self.report("Error loading enrollments", &e);
                self.state.grades_pane = GradesPane::Error;
                return;
            }
        };

        let Some(enrollment) = find_enrollment_for_subject(&enrollments, subject_id).cloned() else {
            self.state.grades_pane = GradesPane::NotEnrolled;
            return;
        };

        match self.api.list_grades(Some(enrollment.id)).await {
            Ok(grades) => {
                log::debug!("Loaded {} grades for enrollment {}", grades.len(), enrollment.id);
                self.state.grades_pane = GradesPane::Report {
                    enrollment: Box::new(enrollment),
                    grades,
                };
            }
            Err(e) => {
                self.report("Error loading grades", &e);
                self.state.grades_pane = GradesPane::Error;
            }
        }
    }

    // Student detail

    pub async fn view_student_details(&mut self, id: i64) {
        if self.state.subjects.is_empty() {
            self.load_subjects().await;
        }

        self.state.detail = Some(StudentDetailState {
            student_id: id,
            pane: DetailPane::Loading,
            summary: None,
        });

        let pane = match self.api.get_student(id).await {
            Ok(student) => DetailPane::Loaded(Box::new(student)),
            Err(e) => {
                self.report("Error loading student details", &e);
                self.notify_error(ERROR_LOAD_STUDENT_DETAILS);
                DetailPane::Error(MESSAGE_ERROR_LOADING_DETAILS.to_string())
            }
        };
        if let Some(detail) = self.state.detail.as_mut() {
            detail.pane = pane;
        }
    }

    pub async fn load_grade_summary(&mut self) {
        let Some(student_id) = self.state.detail.as_ref().map(|detail| detail.student_id) else {
            return;
        };

        let summary = match self.api.grades_summary(student_id).await {
            Ok(rows) => SummaryPane::Loaded(rows),
            Err(e) => {
                self.report("Error loading grade summary", &e);
                SummaryPane::Error(MESSAGE_ERROR_LOADING_SUMMARY.to_string())
            }
        };
        if let Some(detail) = self.state.detail.as_mut() {
            detail.summary = Some(summary);
        }
    }

    pub fn handle_enroll_student(&mut self, student_id: i64, subject_id: i64) {
        self.request_confirmation(
            CONFIRM_ENROLL_STUDENT,
            ConfirmedAction::EnrollStudent { student_id, subject_id },
        );
    }

    pub fn handle_unenroll_student(&mut self, enrollment_id: i64, student_id: i64) {
        self.request_confirmation(
            CONFIRM_UNENROLL_STUDENT,
            ConfirmedAction::UnenrollStudent {
                enrollment_id,
                student_id,
            },
        );
    }

    // Confirmation

    fn request_confirmation(&mut self, message: &'static str, action: ConfirmedAction) {
        log::debug!("Confirmation requested for {:?}", action);
        self.state.confirmation = Some(PendingConfirmation { message, action });
    }

    /// Answer the pending confirmation. Declining is a silent no-op.
    pub async fn resolve_confirmation(&mut self, accepted: bool) {
        let Some(pending) = self.state.confirmation.take() else {
            return;
        };
        if !accepted {
            log::debug!("Confirmation declined for {:?}", pending.action);
            return;
        }

        match pending.action {
            ConfirmedAction::DeleteStudent(id) => match self.api.delete_student(id).await {
                Ok(()) => {
                    self.notify_success(SUCCESS_STUDENT_DELETED);
                    self.load_students().await;
                }
                Err(e) => self.report("Error deleting student", &e),
            },
            ConfirmedAction::DeleteSubject(id) => match self.api.delete_subject(id).await {
                Ok(()) => {
                    self.notify_success(SUCCESS_SUBJECT_DELETED);
                    self.load_subjects().await;
                }
                Err(e) => self.report("Error deleting subject", &e),
            },
            ConfirmedAction::DeleteGrade(id) => match self.api.delete_grade(id).await {
                Ok(()) => {
                    self.notify_success(SUCCESS_GRADE_DELETED);
                    self.load_grades_for_student().await;
                }
                Err(e) => self.report("Error deleting grade", &e),
            },
            ConfirmedAction::EnrollStudent { student_id, subject_id } => {
                let enrollment = NewEnrollment {
                    student: student_id,
                    subject: subject_id,
                };
                match self.api.create_enrollment(enrollment).await {
                    Ok(()) => {
                        self.notify_success(SUCCESS_STUDENT_ENROLLED);
                        self.view_student_details(student_id).await;
                    }
                    Err(e) => self.report("Error enrolling student", &e),
                }
            }
            ConfirmedAction::UnenrollStudent {
                enrollment_id,
                student_id,
            } => match self.api.delete_enrollment(enrollment_id).await {
                Ok(()) => {
                    self.notify_success(SUCCESS_STUDENT_UNENROLLED);
                    self.view_student_details(student_id).await;
                }
                Err(e) => {
                    self.report("Error unenrolling student", &e);
                    self.notify_error(ERROR_UNENROLL_FAILED);
                }
            },
        }
    }

    // Modal form

    pub fn close_modal(&mut self) {
        self.state.modal = None;
    }

    pub fn form_input(&mut self, c: char) {
        if let Some(form) = self.state.modal.as_mut() {
            form.insert_char(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(form) = self.state.modal.as_mut() {
            form.backspace();
        }
    }

    pub fn form_next_field(&mut self) {
        if let Some(form) = self.state.modal.as_mut() {
            form.focus_next();
        }
    }

    pub fn form_previous_field(&mut self) {
        if let Some(form) = self.state.modal.as_mut() {
            form.focus_previous();
        }
    }

    pub fn form_cycle_option(&mut self, forward: bool) {
        if let Some(form) = self.state.modal.as_mut() {
            form.cycle_option(forward);
        }
    }

    /// Validate the open form and hand its fields to the matching save handler.
    /// A form that fails validation is not sent.
    pub async fn submit_modal(&mut self) {
        let Some(form) = self.state.modal.as_mut() else {
            return;
        };

        let data = match form.validate() {
            Ok(data) => data,
            Err((index, message)) => {
                log::debug!("Form validation failed: {}", message);
                form.focused = index;
                form.error = Some(message);
                return;
            }
        };

        let kind = form.kind;
        match kind {
            FormKind::Student { id } => self.save_student(id, &data).await,
            FormKind::Subject { id } => self.save_subject(id, &data).await,
            FormKind::Grade { id } => self.save_grade(id, &data).await,
        }
    }
}

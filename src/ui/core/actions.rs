use crate::controller::Section;

/// Everything a key press can ask the application to do.
///
/// Components translate keys into actions; [`crate::ui::AppComponent`]
/// dispatches them to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    ShowSection(Section),
    NextSection,
    PreviousSection,
    Refresh,
    ViewStudentDetails(i64),
    BackToStudents,
    LoadGradeSummary,

    // Student operations
    NewStudent,
    EditStudent(i64),
    DeleteStudent(i64),

    // Subject operations
    NewSubject,
    EditSubject(i64),
    DeleteSubject(i64),

    // Grade operations
    NewGrade,
    EditGrade(i64),
    DeleteGrade(i64),

    // Enrollment operations
    EnrollStudent {
        student_id: i64,
        subject_id: i64,
    },
    UnenrollStudent {
        enrollment_id: i64,
        student_id: i64,
    },

    // Grade report filters
    SetStudentFilter(Option<i64>),
    SetSubjectFilter(Option<i64>),

    // Modal form editing
    FormInput(char),
    FormBackspace,
    FormNextField,
    FormPreviousField,
    FormCycleOption {
        forward: bool,
    },
    SubmitForm,
    CloseModal,

    // Confirmation and notifications
    ResolveConfirmation(bool),
    DismissNotification,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

/// Informational dialogs owned by the UI rather than the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}

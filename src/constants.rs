//! Constants used throughout the application
//!
//! This module centralizes user-facing messages, prompts and layout values
//! so handlers and components agree on the exact wording.

// Success Messages
pub const SUCCESS_STUDENT_ADDED: &str = "Student added successfully!";
pub const SUCCESS_STUDENT_UPDATED: &str = "Student updated successfully!";
pub const SUCCESS_STUDENT_DELETED: &str = "Student deleted successfully!";
pub const SUCCESS_SUBJECT_ADDED: &str = "Subject added successfully!";
pub const SUCCESS_SUBJECT_UPDATED: &str = "Subject updated successfully!";
pub const SUCCESS_SUBJECT_DELETED: &str = "Subject deleted successfully!";
pub const SUCCESS_GRADE_ADDED: &str = "Grade added successfully!";
pub const SUCCESS_GRADE_UPDATED: &str = "Grade updated successfully!";
pub const SUCCESS_GRADE_DELETED: &str = "Grade deleted successfully!";
pub const SUCCESS_STUDENT_ENROLLED: &str = "Student enrolled successfully!";
pub const SUCCESS_STUDENT_UNENROLLED: &str = "Student unenrolled successfully. Related grades have been deleted.";

// Error Messages
pub const ERROR_GENERIC_API: &str = "An error occurred while communicating with the server.";
pub const ERROR_LOAD_STUDENT_DETAILS: &str =
    "Failed to load student details. The student might not exist or there was a server error.";
pub const ERROR_UNENROLL_FAILED: &str = "Failed to unenroll student. Please try again.";
pub const ERROR_LOAD_ENROLLMENT_OPTIONS: &str = "Could not load enrollment options for the grade form.";

// Confirmation Prompts
pub const CONFIRM_DELETE_STUDENT: &str = "Are you sure you want to delete this student?";
pub const CONFIRM_DELETE_SUBJECT: &str = "Are you sure you want to delete this subject?";
pub const CONFIRM_DELETE_GRADE: &str = "Are you sure you want to delete this grade?";
pub const CONFIRM_ENROLL_STUDENT: &str = "Are you sure you want to enroll this student in the selected subject?";
pub const CONFIRM_UNENROLL_STUDENT: &str = "Are you sure you want to unenroll this student from this subject? \
All related grades will be permanently deleted.";

// Inline Messages
pub const PROMPT_SELECT_BOTH: &str = "Select both student and subject to view grades";
pub const MESSAGE_NOT_ENROLLED: &str = "Student is not enrolled in this subject.";
pub const MESSAGE_ERROR_LOADING_GRADES: &str = "Error loading grades.";
pub const MESSAGE_NO_GRADES: &str = "No grades recorded yet.";
pub const MESSAGE_ERROR_LOADING_DETAILS: &str = "Error loading student details.";
pub const MESSAGE_NO_ENROLLMENTS: &str = "Not currently enrolled in any subjects.";
pub const MESSAGE_NO_AVAILABLE_SUBJECTS: &str =
    "No new subjects available for enrollment or already enrolled in all active subjects.";
pub const MESSAGE_LOADING: &str = "Loading...";
pub const MESSAGE_ERROR_LOADING_SUMMARY: &str = "Error loading grade summary.";
pub const MESSAGE_NO_SUMMARY: &str = "No grades recorded for any enrolled subject.";

// Selector Placeholders
pub const OPTION_SELECT_STUDENT: &str = "Select Student";
pub const OPTION_SELECT_SUBJECT: &str = "Select Subject";
pub const OPTION_SELECT_ENROLLMENT: &str = "Select Student - Subject";
pub const OPTION_SELECT_TYPE: &str = "Select Type";
pub const OPTION_NO_ENROLLMENTS: &str = "No enrollments found. Please enroll students in subjects first.";
pub const OPTION_ENROLLMENTS_ERROR: &str = "Error loading enrollments.";

/// Placeholder for optional fields with no value
pub const NOT_AVAILABLE: &str = "N/A";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";

// UI Layout Constants
/// Height of the tab bar in rows, including borders
pub const TAB_BAR_HEIGHT: u16 = 3;
/// Height of the status bar in rows
pub const STATUS_BAR_HEIGHT: u16 = 1;

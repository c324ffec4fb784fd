//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod grades_panel;
pub mod list_navigation;
pub mod status_bar;
pub mod student_detail;
pub mod students_table;
pub mod subjects_table;
pub mod tab_bar;

// Component exports
pub use dialog_component::DialogComponent;
pub use grades_panel::GradesPanelComponent;
pub use status_bar::StatusBar;
pub use student_detail::StudentDetailComponent;
pub use students_table::StudentsTableComponent;
pub use subjects_table::SubjectsTableComponent;
pub use tab_bar::TabBar;

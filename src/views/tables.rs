//! Rows for the Students and Subjects tables.

use super::or_not_available;
use crate::entities::{Student, Subject};
use crate::utils::datetime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub id: i64,
    pub student_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub enrollment_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRow {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub credits: String,
    pub description: String,
}

/// One row per student, in backend order.
pub fn student_rows(students: &[Student], date_format: &str) -> Vec<StudentRow> {
    students
        .iter()
        .map(|student| StudentRow {
            id: student.id,
            student_id: student.student_id.clone(),
            full_name: student.display_name(),
            email: student.email.clone(),
            phone: or_not_available(student.phone.as_deref()),
            enrollment_date: datetime::format_date(student.enrollment_date, date_format),
        })
        .collect()
}

/// One row per subject, in backend order.
pub fn subject_rows(subjects: &[Subject]) -> Vec<SubjectRow> {
    subjects
        .iter()
        .map(|subject| SubjectRow {
            id: subject.id,
            code: subject.code.clone(),
            name: subject.name.clone(),
            credits: subject.credits.to_string(),
            description: or_not_available(subject.description.as_deref()),
        })
        .collect()
}

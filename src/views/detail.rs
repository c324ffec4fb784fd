//! Student detail view: personal info plus the enrolled / available split.

use std::collections::HashSet;

use super::or_not_available;
use crate::entities::{GradeSummary, Student, Subject};
use crate::utils::datetime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrolledEntry {
    pub enrollment_id: i64,
    pub subject_id: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableEntry {
    pub subject_id: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub student_id: i64,
    pub title: String,
    pub info: Vec<(&'static str, String)>,
    pub enrolled: Vec<EnrolledEntry>,
    pub available: Vec<AvailableEntry>,
}

/// Subject ids the student is enrolled in, from the nested enrollments.
pub fn enrolled_subject_ids(student: &Student) -> HashSet<i64> {
    student.enrollments.iter().map(|enrollment| enrollment.subject).collect()
}

/// Active subjects the student is not yet enrolled in, in catalogue order.
pub fn available_subjects<'a>(student: &Student, subjects: &'a [Subject]) -> Vec<&'a Subject> {
    let enrolled = enrolled_subject_ids(student);
    subjects
        .iter()
        .filter(|subject| subject.is_active && !enrolled.contains(&subject.id))
        .collect()
}

pub fn personal_info(student: &Student, date_format: &str) -> Vec<(&'static str, String)> {
    vec![
        ("Student ID", student.student_id.clone()),
        ("Email", student.email.clone()),
        ("Phone", or_not_available(student.phone.as_deref())),
        ("Date of Birth", datetime::format_date(student.date_of_birth, date_format)),
        ("Address", or_not_available(student.address.as_deref())),
        ("Enrolled Since", datetime::format_date(student.enrollment_date, date_format)),
    ]
}

pub fn detail_view(student: &Student, subjects: &[Subject], date_format: &str) -> DetailView {
    let enrolled = student
        .enrollments
        .iter()
        .map(|enrollment| EnrolledEntry {
            enrollment_id: enrollment.id,
            subject_id: enrollment.subject,
            label: format!(
                "{} - {} (Enrolled: {})",
                enrollment.subject_code.as_deref().unwrap_or_default(),
                enrollment.subject_name.as_deref().unwrap_or_default(),
                datetime::format_date(enrollment.enrollment_date, date_format)
            ),
        })
        .collect();

    let available = available_subjects(student, subjects)
        .into_iter()
        .map(|subject| AvailableEntry {
            subject_id: subject.id,
            label: subject.label(),
        })
        .collect();

    DetailView {
        student_id: student.id,
        title: student.display_name(),
        info: personal_info(student, date_format),
        enrolled,
        available,
    }
}

/// One line per subject of the grade summary.
pub fn summary_lines(summary: &[GradeSummary]) -> Vec<String> {
    summary
        .iter()
        .map(|row| {
            format!(
                "{} - {}: activities {:.1}, quizzes {:.1}, exams {:.1} ({} grades)",
                row.subject_code, row.subject, row.activities_avg, row.quizzes_avg, row.exams_avg, row.total_grades
            )
        })
        .collect()
}

//! Grade report: filter selectors, enrollment lookup, bucketing and banding.

use super::SelectOption;
use crate::constants::{MESSAGE_NO_GRADES, OPTION_SELECT_STUDENT, OPTION_SELECT_SUBJECT};
use crate::entities::{Enrollment, Grade, GradeType, Student, Subject};
use crate::utils::datetime;

/// Display band of a grade. Presentation only; grading happens upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Poor,
}

impl ScoreBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::Poor => "poor",
        }
    }
}

pub fn score_band(percentage: f64) -> ScoreBand {
    if percentage >= 80.0 {
        ScoreBand::Excellent
    } else if percentage >= 60.0 {
        ScoreBand::Good
    } else {
        ScoreBand::Poor
    }
}

/// Grades split by type, each bucket keeping backend order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeBuckets {
    pub activity: Vec<Grade>,
    pub quiz: Vec<Grade>,
    pub exam: Vec<Grade>,
}

impl GradeBuckets {
    pub fn get(&self, grade_type: GradeType) -> &[Grade] {
        match grade_type {
            GradeType::Activity => &self.activity,
            GradeType::Quiz => &self.quiz,
            GradeType::Exam => &self.exam,
        }
    }
}

pub fn partition_grades(grades: &[Grade]) -> GradeBuckets {
    let mut buckets = GradeBuckets::default();
    for grade in grades {
        match grade.grade_type {
            GradeType::Activity => buckets.activity.push(grade.clone()),
            GradeType::Quiz => buckets.quiz.push(grade.clone()),
            GradeType::Exam => buckets.exam.push(grade.clone()),
        }
    }
    buckets
}

/// Linear search for the student's enrollment in `subject_id`.
pub fn find_enrollment_for_subject(enrollments: &[Enrollment], subject_id: i64) -> Option<&Enrollment> {
    enrollments.iter().find(|enrollment| enrollment.subject == subject_id)
}

pub fn student_filter_options(students: &[Student]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(OPTION_SELECT_STUDENT))
        .chain(students.iter().map(|student| {
            SelectOption::new(
                student.id.to_string(),
                format!("{} - {}", student.student_id, student.display_name()),
            )
        }))
        .collect()
}

pub fn subject_filter_options(subjects: &[Subject]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(OPTION_SELECT_SUBJECT))
        .chain(
            subjects
                .iter()
                .map(|subject| SelectOption::new(subject.id.to_string(), subject.label())),
        )
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeEntry {
    pub id: i64,
    pub title: String,
    pub score: String,
    pub band: ScoreBand,
    pub letter_grade: String,
    pub date: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeSection {
    pub grade_type: GradeType,
    pub heading: String,
    pub entries: Vec<GradeEntry>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeReportView {
    pub heading: String,
    pub sections: Vec<GradeSection>,
}

impl GradeReportView {
    /// Entries in display order, across sections
    pub fn entries(&self) -> impl Iterator<Item = &GradeEntry> {
        self.sections.iter().flat_map(|section| section.entries.iter())
    }
}

pub fn grade_entry(grade: &Grade, date_format: &str) -> GradeEntry {
    GradeEntry {
        id: grade.id,
        title: grade.title.clone(),
        score: format!("{:.2}/{:.2} ({:.1}%)", grade.score, grade.max_score, grade.percentage),
        band: score_band(grade.percentage),
        letter_grade: grade.letter_grade.clone(),
        date: datetime::format_timestamp_date(&grade.date_recorded, date_format),
        notes: grade.notes.clone(),
    }
}

pub fn grade_report(enrollment: &Enrollment, grades: &[Grade], date_format: &str) -> GradeReportView {
    let buckets = partition_grades(grades);
    let sections = GradeType::ALL
        .iter()
        .map(|grade_type| {
            let bucket = buckets.get(*grade_type);
            GradeSection {
                grade_type: *grade_type,
                heading: format!("{} ({})", grade_type.plural(), bucket.len()),
                entries: bucket.iter().map(|grade| grade_entry(grade, date_format)).collect(),
                empty_message: bucket.is_empty().then_some(MESSAGE_NO_GRADES),
            }
        })
        .collect();

    GradeReportView {
        heading: format!(
            "Grades for {} - {}",
            enrollment.student_name.as_deref().unwrap_or_default(),
            enrollment.subject_code.as_deref().unwrap_or_default()
        ),
        sections,
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::de;

/// Scores and maximums are recorded to the hundredth
pub const SCORE_DECIMALS: u32 = 2;

/// Kind of assessment a grade records. Closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeType {
    Activity,
    Quiz,
    Exam,
}

impl GradeType {
    pub const ALL: [GradeType; 3] = [GradeType::Activity, GradeType::Quiz, GradeType::Exam];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            GradeType::Activity => "activity",
            GradeType::Quiz => "quiz",
            GradeType::Exam => "exam",
        }
    }

    /// Singular label used in selectors
    pub fn label(&self) -> &'static str {
        match self {
            GradeType::Activity => "Activity",
            GradeType::Quiz => "Quiz",
            GradeType::Exam => "Exam",
        }
    }

    /// Plural heading used for report buckets
    pub fn plural(&self) -> &'static str {
        match self {
            GradeType::Activity => "Activities",
            GradeType::Quiz => "Quizzes",
            GradeType::Exam => "Exams",
        }
    }
}

impl fmt::Display for GradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activity" => Ok(GradeType::Activity),
            "quiz" => Ok(GradeType::Quiz),
            "exam" => Ok(GradeType::Exam),
            other => Err(format!("unknown grade type '{}'", other)),
        }
    }
}

/// A scored assessment attached to one enrollment.
///
/// `percentage` and `letter_grade` are computed server-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: i64,
    pub enrollment: i64,
    pub grade_type: GradeType,
    pub title: String,
    #[serde(deserialize_with = "de::decimal")]
    pub score: f64,
    #[serde(deserialize_with = "de::decimal")]
    pub max_score: f64,
    #[serde(deserialize_with = "de::decimal")]
    pub percentage: f64,
    pub letter_grade: String,
    pub date_recorded: DateTime<Utc>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub notes: Option<String>,
}

/// One row of `GET /students/{id}/grades_summary/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradeSummary {
    pub subject: String,
    pub subject_code: String,
    #[serde(deserialize_with = "de::decimal")]
    pub activities_avg: f64,
    #[serde(deserialize_with = "de::decimal")]
    pub quizzes_avg: f64,
    #[serde(deserialize_with = "de::decimal")]
    pub exams_avg: f64,
    pub total_grades: u32,
}

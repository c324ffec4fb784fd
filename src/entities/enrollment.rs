use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::de;
use super::grade;

/// Join record between one student and one subject; the unit of grading.
///
/// The display fields are computed by the backend and may be missing from
/// older payloads, so they are optional here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: i64,
    pub student: i64,
    pub subject: i64,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub student_name: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub subject_code: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub subject_name: Option<String>,
    pub enrollment_date: NaiveDate,
    #[serde(default = "de::default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub grades: Vec<grade::Model>,
}

/// Body of `POST /enrollments/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NewEnrollment {
    pub student: i64,
    pub subject: i64,
}

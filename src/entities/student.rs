use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::de;
use super::enrollment;

/// A student record.
///
/// List responses omit `enrollments`; the detail endpoint nests them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: i64,
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub full_name: String,
    pub email: String,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub phone: Option<String>,
    pub date_of_birth: NaiveDate,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub address: Option<String>,
    pub enrollment_date: NaiveDate,
    #[serde(default = "de::default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub enrollments: Vec<enrollment::Model>,
}

impl Model {
    /// Name shown in lists and headings. Falls back to the name parts when the
    /// backend did not send the computed `full_name`.
    pub fn display_name(&self) -> String {
        if self.full_name.trim().is_empty() {
            format!("{} {}", self.first_name, self.last_name)
        } else {
            self.full_name.clone()
        }
    }
}

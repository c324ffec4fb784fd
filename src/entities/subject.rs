use serde::{Deserialize, Serialize};

use super::de;

/// Lowest credit value a subject may carry
pub const MIN_CREDITS: i32 = 1;
/// Highest credit value a subject may carry
pub const MAX_CREDITS: i32 = 6;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub credits: i32,
    #[serde(default, deserialize_with = "de::blank_as_none")]
    pub description: Option<String>,
    #[serde(default = "de::default_true")]
    pub is_active: bool,
}

impl Model {
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

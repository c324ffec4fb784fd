//! Records served by the backend, as the client understands them.
//!
//! The backend is authoritative; these models are ephemeral copies that are
//! re-fetched after every mutation.

pub mod enrollment;
pub mod grade;
pub mod student;
pub mod subject;

pub use enrollment::Model as Enrollment;
pub use enrollment::NewEnrollment;
pub use grade::{GradeSummary, GradeType, Model as Grade};
pub use student::Model as Student;
pub use subject::Model as Subject;

/// Lenient field decoders for the backend's JSON.
pub(crate) mod de {
    use serde::{de::Error, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    /// Decimal columns arrive as strings ("85.50") while computed values arrive as numbers.
    pub fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(value) => Ok(value),
            NumberOrString::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|e| D::Error::custom(format!("invalid decimal '{}': {}", text, e))),
        }
    }

    /// Blank text fields are stored as "" by the backend; treat them as absent.
    pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.filter(|text| !text.trim().is_empty()))
    }

    pub fn default_true() -> bool {
        true
    }
}

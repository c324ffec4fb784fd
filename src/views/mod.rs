//! View descriptions derived from application state.
//!
//! Every function here is a pure mapping from a state snapshot to what the
//! terminal should show. The relational rules (which subjects a student can
//! still enroll in, how a grade report is bucketed) live here so they can be
//! tested without a terminal.

pub mod detail;
pub mod report;
pub mod tables;

use crate::constants::NOT_AVAILABLE;

/// One entry of a selector. `value` is what gets submitted; an empty value is
/// the "nothing selected" placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Leading option with an empty value
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new("", label)
    }

    /// Explanatory entry that cannot be chosen
    pub fn disabled(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            label: label.into(),
            disabled: true,
        }
    }
}

/// Text for an optional field, "N/A" when absent.
pub fn or_not_available(value: Option<&str>) -> String {
    value.map(str::to_string).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

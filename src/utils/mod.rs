//! Utility modules for the Gradebook application.
//!
//! - [`datetime`] - Date parsing and display formatting

pub mod datetime;

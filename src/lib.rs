//! Gradebook - A Terminal User Interface (TUI) for a student records service
//!
//! This library provides a complete terminal-based interface for managing
//! students, subjects, enrollments and grades stored behind a REST API. It
//! includes a typed API client, a view controller that keeps the rendered
//! state consistent with the backend, and an interactive UI built with
//! Ratatui.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`api`] - REST transport and typed endpoints
//! * [`controller`] - Application state and the handlers that mutate it
//! * [`views`] - Pure derivations from state to view descriptions
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// REST client for the students/subjects/enrollments/grades resources
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and user-facing messages
pub mod constants;

/// View controller: application state and handlers
pub mod controller;

/// Serde models for the records served by the backend
pub mod entities;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;

/// View descriptions derived from application state
pub mod views;

pub use entities::{enrollment, grade, student, subject};

//! Core UI functionality for the Gradebook application.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions produced by key handling
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//!
//! Components implement [`Component`], turn key events into [`Action`]s and
//! render from data pushed into them by the application component. They never
//! talk to the backend themselves.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};

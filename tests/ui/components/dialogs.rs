#[path = "dialogs/scroll_behavior.rs"]
mod scroll_behavior;

#[path = "dialogs/system_dialogs.rs"]
mod system_dialogs;

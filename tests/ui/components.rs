#[path = "components/dialog_component.rs"]
mod dialog_component;

#[path = "components/dialogs.rs"]
mod dialogs;

#[path = "components/grades_panel.rs"]
mod grades_panel;


#[path = "components/tables.rs"]
mod tables;

#[path = "components/tab_bar.rs"]
mod tab_bar;

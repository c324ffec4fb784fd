use crate::buffer_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gradebook::constants::CONFIRM_DELETE_GRADE;
use gradebook::controller::forms::{grade_form, student_form};
use gradebook::controller::{ConfirmedAction, Notification, NotificationKind, PendingConfirmation};
use gradebook::logger::Logger;
use gradebook::ui::components::DialogComponent;
use gradebook::ui::core::{Action, Component, DialogType};
use gradebook::views::SelectOption;
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn confirmation() -> PendingConfirmation {
    PendingConfirmation {
        message: CONFIRM_DELETE_GRADE,
        action: ConfirmedAction::DeleteGrade(4),
    }
}

fn render(dialog: &mut DialogComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    buffer_text(terminal.backend().buffer())
}

#[test]
fn test_hidden_by_default() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);
}

#[test]
fn test_confirmation_keys() {
    let mut dialog = DialogComponent::new();
    dialog.update_data(None, Some(confirmation()), None);
    assert!(dialog.is_visible());

    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::ResolveConfirmation(true));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('y'))), Action::ResolveConfirmation(true));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::ResolveConfirmation(false));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('n'))), Action::ResolveConfirmation(false));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None);
}

#[test]
fn test_confirmation_takes_priority_over_form() {
    let mut dialog = DialogComponent::new();
    dialog.update_data(Some(student_form(None)), Some(confirmation()), None);

    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::ResolveConfirmation(false));
}

#[test]
fn test_notification_dismissed_by_any_key() {
    let mut dialog = DialogComponent::new();
    let notification = Notification {
        kind: NotificationKind::Success,
        message: "Grade deleted successfully!".to_string(),
    };
    dialog.update_data(None, None, Some(notification));

    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('z'))), Action::DismissNotification);
    let screen = render(&mut dialog);
    assert!(screen.contains("Success"));
    assert!(screen.contains("Grade deleted successfully!"));
}

#[test]
fn test_form_keys() {
    let mut dialog = DialogComponent::new();
    dialog.update_data(Some(student_form(None)), None, None);

    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('S'))), Action::FormInput('S'));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Backspace)), Action::FormBackspace);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Tab)), Action::FormNextField);
    assert_eq!(dialog.handle_key_events(key(KeyCode::BackTab)), Action::FormPreviousField);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::SubmitForm);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::CloseModal);
    // Space is text on a text field
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char(' '))), Action::FormInput(' '));
}

#[test]
fn test_select_field_keys_cycle_options() {
    let mut dialog = DialogComponent::new();
    dialog.update_data(Some(grade_form(None, vec![SelectOption::new("4", "Ana - MATH101")])), None, None);

    assert_eq!(
        dialog.handle_key_events(key(KeyCode::Right)),
        Action::FormCycleOption { forward: true }
    );
    assert_eq!(
        dialog.handle_key_events(key(KeyCode::Left)),
        Action::FormCycleOption { forward: false }
    );
    assert_eq!(
        dialog.handle_key_events(key(KeyCode::Char(' '))),
        Action::FormCycleOption { forward: true }
    );
}

#[test]
fn test_render_form() {
    let mut form = student_form(None);
    form.set_value("first_name", "Ana");
    form.error = Some("Student ID: Please fill out this field.".to_string());
    let mut dialog = DialogComponent::new();
    dialog.update_data(Some(form), None, None);

    let screen = render(&mut dialog);
    assert!(screen.contains("Add New Student"));
    assert!(screen.contains("Student ID *"));
    assert!(screen.contains("Ana"));
    assert!(screen.contains("Student ID: Please fill out this field."));
    assert!(screen.contains("Add Student"));
}

#[test]
fn test_show_and_hide_info_dialogs() {
    let mut dialog = DialogComponent::new();
    assert_eq!(dialog.update(Action::ShowDialog(DialogType::Help)), Action::None);
    assert!(dialog.is_visible());

    // Scroll keys are consumed
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('j'))), Action::None);
    assert_eq!(dialog.scroll.offset, 1);

    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::HideDialog);
    assert_eq!(dialog.update(Action::HideDialog), Action::None);
    assert!(!dialog.is_visible());
    assert_eq!(dialog.scroll.offset, 0);

    // Other actions pass through
    assert_eq!(dialog.update(Action::Refresh), Action::Refresh);
}

#[test]
fn test_logs_dialog_shows_logger_entries() {
    let logger = Logger::new();
    logger.log("Loaded 2 students".to_string());
    let mut dialog = DialogComponent::new();
    dialog.set_logger(logger);
    dialog.update(Action::ShowDialog(DialogType::Logs));

    assert!(render(&mut dialog).contains("Loaded 2 students"));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('G'))), Action::HideDialog);
}

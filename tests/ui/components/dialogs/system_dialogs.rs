use crate::buffer_text;
use gradebook::constants::{CONFIRM_UNENROLL_STUDENT, ERROR_GENERIC_API};
use gradebook::controller::{Notification, NotificationKind};
use gradebook::ui::components::dialogs::scroll_behavior::ScrollState;
use gradebook::ui::components::dialogs::system_dialogs::{
    render_confirmation_dialog, render_help_dialog, render_logs_dialog, render_notification_dialog,
};
use ratatui::{backend::TestBackend, Terminal};

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 30)).unwrap()
}

#[test]
fn test_confirmation_dialog() {
    let mut terminal = terminal();
    terminal
        .draw(|f| render_confirmation_dialog(f, f.area(), CONFIRM_UNENROLL_STUDENT))
        .unwrap();

    let screen = buffer_text(terminal.backend().buffer());
    assert!(screen.contains("Confirm"));
    assert!(screen.contains("Enter/y"));
    assert!(screen.contains("Esc/n"));
}

#[test]
fn test_error_notification_dialog() {
    let notification = Notification {
        kind: NotificationKind::Error,
        message: ERROR_GENERIC_API.to_string(),
    };
    let mut terminal = terminal();
    terminal
        .draw(|f| render_notification_dialog(f, f.area(), &notification))
        .unwrap();

    let screen = buffer_text(terminal.backend().buffer());
    assert!(screen.contains(" Error "));
    assert!(screen.contains(ERROR_GENERIC_API));
    assert!(screen.contains("Any key"));
}

#[test]
fn test_help_dialog() {
    let mut terminal = terminal();
    let mut scroll = ScrollState::default();
    terminal.draw(|f| render_help_dialog(f, f.area(), &mut scroll)).unwrap();

    let screen = buffer_text(terminal.backend().buffer());
    assert!(screen.contains("GRADEBOOK"));
    assert!(screen.contains("Next section"));
}

#[test]
fn test_empty_logs_dialog() {
    let mut terminal = terminal();
    let mut scroll = ScrollState::default();
    terminal
        .draw(|f| render_logs_dialog(f, f.area(), &[], &mut scroll))
        .unwrap();

    assert!(buffer_text(terminal.backend().buffer()).contains("No logs available"));
}

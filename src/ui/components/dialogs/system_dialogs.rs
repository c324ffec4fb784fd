use crate::constants::DIALOG_TITLE_LOGS;
use crate::controller::{Notification, NotificationKind};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{self, shortcuts};
use super::scroll_behavior::{self, ScrollState};

pub fn render_confirmation_dialog(f: &mut Frame, area: Rect, message: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(" Confirm ", Color::Yellow);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let message_paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let instructions = common::create_instructions_paragraph(&[
        shortcuts::ENTER_CONFIRM,
        shortcuts::SEPARATOR,
        shortcuts::ESC_DECLINE,
    ]);

    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions, chunks[1]);
}

pub fn render_notification_dialog(f: &mut Frame, area: Rect, notification: &Notification) {
    let (title, color) = match notification.kind {
        NotificationKind::Success => (" Success ", Color::Green),
        NotificationKind::Error => (" Error ", Color::Red),
    };

    let dialog_area = LayoutManager::centered_rect_lines(60, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(title, color);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let message_paragraph = Paragraph::new(notification.message.clone())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(common::create_instructions_paragraph(&[shortcuts::ANY_KEY]), chunks[1]);
}

const HELP_CONTENT: &str = r"
GRADEBOOK - Student Records Terminal Client
===========================================

SECTIONS
--------
1 / 2 / 3   Students / Subjects / Grades
Tab         Next section
Shift+Tab   Previous section
r           Reload the current section

STUDENTS
--------
j/k ↑↓      Move selection
a           Add student
e           Edit selected student
d           Delete selected student (with confirmation)
Enter / v   Open student details

STUDENT DETAILS
---------------
h/l ←→      Switch between enrolled and available subjects
j/k ↑↓      Move selection
Enter       Enroll in the selected available subject
u           Unenroll from the selected subject
s           Show the grade summary
Esc / b     Back to students

SUBJECTS
--------
j/k ↑↓      Move selection
a           Add subject
e           Edit selected subject
d           Delete selected subject (with confirmation)

GRADES
------
h/l ←→      Move focus: student filter, subject filter, grade list
j/k ↑↓      Change the focused filter or move in the grade list
a           Add grade
e           Edit selected grade
d           Delete selected grade (with confirmation)

FORMS
-----
Tab / ↓     Next field
Shift+Tab/↑ Previous field
←/→ Space   Choose an option in a list field
Enter       Submit
Esc         Cancel

GENERAL
-------
?           Toggle this help
G           Show logs
q / Ctrl+C  Quit

Press 'Esc' or '?' to close this help panel
";

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut ScrollState) {
    let help_area = LayoutManager::centered_rect(80, 90, area);
    scroll_behavior::render_scrollable_text(f, help_area, "Help - Press 'Esc' or '?' to close", HELP_CONTENT, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String], scroll: &mut ScrollState) {
    let logs_area = LayoutManager::centered_rect(90, 90, area);

    let logs_content = if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    };

    scroll_behavior::render_scrollable_text(f, logs_area, DIALOG_TITLE_LOGS, &logs_content, scroll);
}

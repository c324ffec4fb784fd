use crate::buffer_text;
use crate::common::{student_json, subject_json};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gradebook::entities::{Student, Subject};
use gradebook::ui::components::{StudentsTableComponent, SubjectsTableComponent};
use gradebook::ui::core::{Action, Component};
use ratatui::{backend::TestBackend, Terminal};
use serde_json::json;

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn students() -> Vec<Student> {
    serde_json::from_value(json!([
        student_json(1, "S001", "Ana", "Lopez"),
        student_json(2, "S002", "Ben", "Okafor"),
    ]))
    .unwrap()
}

#[test]
fn test_students_table_actions_follow_selection() {
    let mut table = StudentsTableComponent::new();
    table.update_data(&students(), "%Y-%m-%d");

    assert_eq!(table.handle_key_events(key('e')), Action::EditStudent(1));
    assert_eq!(table.handle_key_events(key('j')), Action::None);
    assert_eq!(table.handle_key_events(key('d')), Action::DeleteStudent(2));
    assert_eq!(
        table.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
        Action::ViewStudentDetails(2)
    );

    // Wraps back to the top
    table.handle_key_events(key('j'));
    assert_eq!(table.selected().map(|row| row.id), Some(1));
    table.handle_key_events(key('k'));
    assert_eq!(table.selected().map(|row| row.id), Some(2));
}

#[test]
fn test_empty_table_only_offers_add() {
    let mut table = StudentsTableComponent::new();
    table.update_data(&[], "%Y-%m-%d");

    assert_eq!(table.handle_key_events(key('a')), Action::NewStudent);
    assert_eq!(table.handle_key_events(key('e')), Action::None);
    assert_eq!(table.handle_key_events(key('d')), Action::None);
    assert_eq!(table.handle_key_events(key('v')), Action::None);
}

#[test]
fn test_selection_clamped_after_reload() {
    let mut table = StudentsTableComponent::new();
    table.update_data(&students(), "%Y-%m-%d");
    table.handle_key_events(key('j'));

    let remaining: Vec<Student> = students().into_iter().take(1).collect();
    table.update_data(&remaining, "%Y-%m-%d");
    assert_eq!(table.selected().map(|row| row.id), Some(1));
}

#[test]
fn test_subjects_table_keys_and_render() {
    let subjects: Vec<Subject> = serde_json::from_value(json!([subject_json(10, "MATH101", "Algebra", true)])).unwrap();
    let mut table = SubjectsTableComponent::new();
    table.update_data(&subjects);

    assert_eq!(table.handle_key_events(key('a')), Action::NewSubject);
    assert_eq!(table.handle_key_events(key('e')), Action::EditSubject(10));
    assert_eq!(table.handle_key_events(key('d')), Action::DeleteSubject(10));

    let mut terminal = Terminal::new(TestBackend::new(100, 10)).unwrap();
    terminal.draw(|f| table.render(f, f.area())).unwrap();
    let screen = buffer_text(terminal.backend().buffer());
    assert!(screen.contains("MATH101"));
    assert!(screen.contains("Algebra"));
    assert!(screen.contains("N/A"));
}

#[test]
fn test_empty_students_table_renders_hint() {
    let mut table = StudentsTableComponent::new();
    let mut terminal = Terminal::new(TestBackend::new(80, 6)).unwrap();
    terminal.draw(|f| table.render(f, f.area())).unwrap();

    let screen = buffer_text(terminal.backend().buffer());
    assert!(screen.contains("No students found. Press 'a' to add one."));
}

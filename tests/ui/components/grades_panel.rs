use crate::buffer_text;
use crate::common::{enrollment_json, grade_json};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gradebook::constants::{MESSAGE_NOT_ENROLLED, OPTION_SELECT_STUDENT, PROMPT_SELECT_BOTH};
use gradebook::controller::{AppState, GradesPane, Section};
use gradebook::ui::components::grades_panel::{step_option, GradesContent, GradesFocus, GradesPanelComponent};
use gradebook::ui::core::{Action, Component};
use gradebook::views::SelectOption;
use ratatui::{backend::TestBackend, Terminal};
use serde_json::json;

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn options() -> Vec<SelectOption> {
    vec![
        SelectOption::placeholder(OPTION_SELECT_STUDENT),
        SelectOption::new("1", "S001 - Ana Lopez"),
        SelectOption::new("2", "S002 - Ben Okafor"),
    ]
}

fn report_state() -> AppState {
    let mut state = AppState::new(Section::Grades);
    state.student_options = options();
    state.grade_filter.student_id = Some(1);
    state.grade_filter.subject_id = Some(10);
    state.grades_pane = GradesPane::Report {
        enrollment: Box::new(serde_json::from_value(enrollment_json(7, 1, 10, "MATH101")).unwrap()),
        grades: serde_json::from_value(json!([
            grade_json(1, 7, "exam", 91.0),
            grade_json(2, 7, "activity", 45.0),
        ]))
        .unwrap(),
    };
    state
}

#[test]
fn test_step_option() {
    let options = options();
    assert_eq!(step_option(&options, None, true), Some(1));
    assert_eq!(step_option(&options, Some(1), true), Some(2));
    // Past the last option wraps to the placeholder
    assert_eq!(step_option(&options, Some(2), true), None);
    assert_eq!(step_option(&options, None, false), Some(2));
    assert_eq!(step_option(&options, Some(1), false), None);
    assert_eq!(step_option(&[], None, true), None);
}

#[test]
fn test_filter_keys_emit_filter_actions() {
    let mut panel = GradesPanelComponent::new();
    panel.update_data(&report_state(), "%Y-%m-%d");

    assert_eq!(panel.focus, GradesFocus::StudentFilter);
    assert_eq!(panel.handle_key_events(key('j')), Action::SetStudentFilter(Some(2)));

    panel.handle_key_events(key('l'));
    assert_eq!(panel.focus, GradesFocus::SubjectFilter);
    // No subject options were built, so the only choice is the cleared filter
    assert_eq!(panel.handle_key_events(key('j')), Action::SetSubjectFilter(None));
}

#[test]
fn test_grade_list_keys() {
    let mut panel = GradesPanelComponent::new();
    panel.update_data(&report_state(), "%Y-%m-%d");
    panel.handle_key_events(key('h'));
    assert_eq!(panel.focus, GradesFocus::GradeList);

    // Display order is activities, quizzes, exams
    assert_eq!(panel.grade_ids(), vec![2, 1]);
    assert_eq!(panel.handle_key_events(key('e')), Action::EditGrade(2));
    panel.handle_key_events(key('j'));
    assert_eq!(panel.handle_key_events(key('d')), Action::DeleteGrade(1));
    assert_eq!(panel.handle_key_events(key('a')), Action::NewGrade);
}

#[test]
fn test_edit_and_delete_need_list_focus() {
    let mut panel = GradesPanelComponent::new();
    panel.update_data(&report_state(), "%Y-%m-%d");

    assert_eq!(panel.handle_key_events(key('e')), Action::None);
    assert_eq!(panel.handle_key_events(key('d')), Action::None);
}

#[test]
fn test_inline_messages() {
    let mut panel = GradesPanelComponent::new();
    let mut state = AppState::new(Section::Grades);
    panel.update_data(&state, "%Y-%m-%d");
    assert_eq!(panel.content, GradesContent::Message(PROMPT_SELECT_BOTH));

    state.grades_pane = GradesPane::NotEnrolled;
    panel.update_data(&state, "%Y-%m-%d");
    assert_eq!(panel.content, GradesContent::Message(MESSAGE_NOT_ENROLLED));
    assert!(panel.grade_ids().is_empty());
}

#[test]
fn test_render_report() {
    let mut panel = GradesPanelComponent::new();
    panel.update_data(&report_state(), "%Y-%m-%d");

    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
    terminal.draw(|f| panel.render(f, f.area())).unwrap();
    let screen = buffer_text(terminal.backend().buffer());

    assert!(screen.contains("S001 - Ana Lopez"));
    assert!(screen.contains("Grades for Ana Lopez - MATH101"));
    assert!(screen.contains("Activities (1)"));
    assert!(screen.contains("Quizzes (0)"));
    assert!(screen.contains("Exams (1)"));
    assert!(screen.contains("91.00/100.00"));
}

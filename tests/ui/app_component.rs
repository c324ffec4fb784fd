use crate::buffer_text;
use crate::common::{controller, student_detail_json, student_json, subject_json, FakeTransport};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gradebook::api::Method;
use gradebook::constants::{CONFIRM_DELETE_STUDENT, ERROR_GENERIC_API};
use gradebook::controller::Section;
use gradebook::logger::Logger;
use gradebook::ui::core::{Component, EventType};
use gradebook::ui::AppComponent;
use ratatui::{backend::TestBackend, Terminal};
use serde_json::json;
use std::sync::Arc;

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn scripted() -> Arc<FakeTransport> {
    let transport = FakeTransport::new();
    transport.ok(Method::Get, "/students/", json!([student_json(1, "S001", "Ana", "Lopez")]));
    transport.ok(Method::Get, "/subjects/", json!([subject_json(10, "MATH101", "Algebra", true)]));
    transport.ok(Method::Get, "/students/1/", student_detail_json(1, vec![]));
    transport
}

async fn app(transport: &Arc<FakeTransport>) -> AppComponent {
    let mut app = AppComponent::new(controller(transport, Section::Students), Logger::new());
    app.init().await;
    app
}

fn render(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    buffer_text(terminal.backend().buffer())
}

#[tokio::test]
async fn test_render_students_section() {
    let transport = scripted();
    let mut app = app(&transport).await;

    let screen = render(&mut app);
    assert!(screen.contains("Student Management System"));
    assert!(screen.contains("1 Students"));
    assert!(screen.contains("Ana Lopez"));
    assert!(screen.contains("S001"));
}

#[tokio::test]
async fn test_number_keys_switch_sections() {
    let transport = scripted();
    let mut app = app(&transport).await;
    transport.take_requests();

    app.handle_event(key(KeyCode::Char('2'))).await.unwrap();
    assert_eq!(app.state().current_section, Section::Subjects);
    assert_eq!(transport.calls(), vec!["GET /subjects/"]);
    assert!(render(&mut app).contains("MATH101"));

    app.handle_event(key(KeyCode::Tab)).await.unwrap();
    assert_eq!(app.state().current_section, Section::Grades);
    assert!(render(&mut app).contains("Select both student and subject"));
}

#[tokio::test]
async fn test_quit_key() {
    let transport = scripted();
    let mut app = app(&transport).await;

    assert!(!app.should_quit());
    app.handle_event(key(KeyCode::Char('q'))).await.unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_open_and_close_student_detail() {
    let transport = scripted();
    let mut app = app(&transport).await;

    app.handle_event(key(KeyCode::Enter)).await.unwrap();
    assert_eq!(app.state().active_tab(), None);
    assert!(render(&mut app).contains("Available Subjects"));

    app.handle_event(key(KeyCode::Esc)).await.unwrap();
    assert_eq!(app.state().active_tab(), Some(Section::Students));
}

#[tokio::test]
async fn test_delete_key_asks_for_confirmation() {
    let transport = scripted();
    let mut app = app(&transport).await;
    transport.take_requests();

    app.handle_event(key(KeyCode::Char('d'))).await.unwrap();
    assert_eq!(
        app.state().confirmation.as_ref().map(|pending| pending.message),
        Some(CONFIRM_DELETE_STUDENT)
    );
    assert!(render(&mut app).contains("Are you sure"));

    app.handle_event(key(KeyCode::Char('n'))).await.unwrap();
    assert!(app.state().confirmation.is_none());
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_typing_goes_to_open_form() {
    let transport = scripted();
    let mut app = app(&transport).await;

    app.handle_event(key(KeyCode::Char('a'))).await.unwrap();
    assert!(render(&mut app).contains("Add New Student"));

    // Global shortcuts are suspended while the modal is open
    app.handle_event(key(KeyCode::Char('q'))).await.unwrap();
    app.handle_event(key(KeyCode::Char('2'))).await.unwrap();
    assert!(!app.should_quit());
    assert_eq!(app.state().current_section, Section::Students);
    let form = app.state().modal.as_ref().unwrap();
    assert_eq!(form.value("student_id"), Some("q2"));

    app.handle_event(key(KeyCode::Esc)).await.unwrap();
    assert!(app.state().modal.is_none());
}

#[tokio::test]
async fn test_ctrl_c_quits_from_modal() {
    let transport = scripted();
    let mut app = app(&transport).await;

    app.handle_event(key(KeyCode::Char('a'))).await.unwrap();
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)))
        .await
        .unwrap();
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_any_key_dismisses_notification() {
    let transport = FakeTransport::new();
    let mut app = app(&transport).await;

    // Both initial loads failed
    assert_eq!(app.state().notifications.len(), 2);
    assert!(render(&mut app).contains(ERROR_GENERIC_API));

    app.handle_event(key(KeyCode::Char('x'))).await.unwrap();
    assert_eq!(app.state().notifications.len(), 1);
    app.handle_event(key(KeyCode::Char('q'))).await.unwrap();
    assert!(app.state().notifications.is_empty());
    assert!(!app.should_quit());
}

#[tokio::test]
async fn test_help_dialog_toggles() {
    let transport = scripted();
    let mut app = app(&transport).await;

    app.handle_event(key(KeyCode::Char('?'))).await.unwrap();
    assert!(render(&mut app).contains("Help"));

    // Keys are swallowed by the dialog
    app.handle_event(key(KeyCode::Char('2'))).await.unwrap();
    assert_eq!(app.state().current_section, Section::Students);

    app.handle_event(key(KeyCode::Esc)).await.unwrap();
    app.handle_event(key(KeyCode::Char('2'))).await.unwrap();
    assert_eq!(app.state().current_section, Section::Subjects);
}

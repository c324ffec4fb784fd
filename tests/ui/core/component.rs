use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use gradebook::ui::components::SubjectsTableComponent;
use gradebook::ui::core::{Action, Component};

#[test]
fn test_handle_events_forwards_keys() {
    let mut table = SubjectsTableComponent::new();
    let event = Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
    assert_eq!(table.handle_events(Some(event)), Action::NewSubject);
}

#[test]
fn test_handle_events_ignores_non_key_events() {
    let mut table = SubjectsTableComponent::new();
    assert_eq!(table.handle_events(Some(Event::Resize(80, 24))), Action::None);
    assert_eq!(table.handle_events(None), Action::None);
}

#[test]
fn test_default_update_passes_action_through() {
    let mut table = SubjectsTableComponent::new();
    assert_eq!(table.update(Action::Refresh), Action::Refresh);
}

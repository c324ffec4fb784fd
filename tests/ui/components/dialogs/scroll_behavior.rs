use crate::buffer_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gradebook::ui::components::dialogs::scroll_behavior::{render_scrollable_text, ScrollState};
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_scroll_keys() {
    let mut scroll = ScrollState::default();

    assert!(scroll.handle_key(key(KeyCode::Down)));
    assert!(scroll.handle_key(key(KeyCode::Char('j'))));
    assert_eq!(scroll.offset, 2);

    assert!(scroll.handle_key(key(KeyCode::PageDown)));
    assert_eq!(scroll.offset, 12);
    assert!(scroll.handle_key(key(KeyCode::PageUp)));
    assert!(scroll.handle_key(key(KeyCode::Char('k'))));
    assert_eq!(scroll.offset, 1);

    assert!(scroll.handle_key(key(KeyCode::Home)));
    assert_eq!(scroll.offset, 0);

    // Never below zero
    scroll.scroll_up();
    scroll.page_up();
    assert_eq!(scroll.offset, 0);

    assert!(!scroll.handle_key(key(KeyCode::Char('x'))));
}

#[test]
fn test_scroll_clamped_to_content_on_render() {
    let content: String = (1..=30).map(|n| format!("line {}\n", n)).collect();
    let mut scroll = ScrollState::default();
    scroll.scroll_to_bottom();

    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
    terminal
        .draw(|f| render_scrollable_text(f, f.area(), "Logs", &content, &mut scroll))
        .unwrap();

    // 30 lines in a 10 line viewport
    assert_eq!(scroll.offset, 20);
    let screen = buffer_text(terminal.backend().buffer());
    assert!(screen.contains("line 30"));
    assert!(!screen.contains("line 20 "));

    scroll.reset();
    assert_eq!(scroll.offset, 0);
}

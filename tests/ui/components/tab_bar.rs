use gradebook::controller::Section;
use gradebook::ui::components::TabBar;
use ratatui::style::Color;

#[test]
fn test_tab_labels() {
    let line = TabBar::line(Some(Section::Students));
    let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
    assert_eq!(text, " 1 Students  │  2 Subjects  │  3 Grades ");
}

#[test]
fn test_only_active_tab_is_highlighted() {
    let line = TabBar::line(Some(Section::Subjects));
    let highlighted: Vec<&str> = line
        .spans
        .iter()
        .filter(|span| span.style.bg == Some(Color::Cyan))
        .map(|span| span.content.as_ref())
        .collect();
    assert_eq!(highlighted, vec![" 2 Subjects "]);
}

#[test]
fn test_no_tab_highlighted_in_detail_view() {
    let line = TabBar::line(None);
    assert!(line.spans.iter().all(|span| span.style.bg.is_none()));
}

use gradebook::ui::LayoutManager;
use ratatui::layout::Rect;

#[test]
fn test_main_layout_reserves_bars() {
    let [tabs, main, status] = LayoutManager::main_layout(Rect::new(0, 0, 100, 40));
    assert_eq!(tabs.height, 3);
    assert_eq!(status.height, 1);
    assert_eq!(main.height, 36);
    assert_eq!(status.y, 39);
}

#[test]
fn test_two_columns() {
    let [left, right] = LayoutManager::two_columns(Rect::new(0, 0, 100, 10), 50);
    assert_eq!(left.width + right.width, 100);
    assert_eq!(left.width, 50);
}

#[test]
fn test_centered_rect_lines_clamps_height() {
    let area = Rect::new(0, 0, 100, 5);
    let dialog = LayoutManager::centered_rect_lines(60, 20, area);
    assert_eq!(dialog.height, 5);
    assert_eq!(dialog.width, 60);
    assert_eq!(dialog.x, 20);
}

#[test]
fn test_form_dialog_height() {
    assert_eq!(LayoutManager::form_dialog_height(0), 5);
    assert_eq!(LayoutManager::form_dialog_height(7), 26);
}

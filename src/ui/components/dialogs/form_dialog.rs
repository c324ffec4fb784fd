use crate::controller::forms::{FieldKind, FormState};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common;

/// Draws the shared Student/Subject/Grade modal.
pub fn render_form_dialog(f: &mut Frame, area: Rect, form: &FormState) {
    let height = LayoutManager::form_dialog_height(form.fields.len());
    let dialog_area = LayoutManager::centered_rect_lines(70, height, area);
    f.render_widget(Clear, dialog_area);

    let title = format!(" {} ", form.title());
    let block = common::create_dialog_block(&title, Color::Cyan);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let mut constraints: Vec<Constraint> = form.fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Length(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (index, field) in form.fields.iter().enumerate() {
        let focused = index == form.focused;
        let title = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.to_string()
        };
        let paragraph = match &field.kind {
            FieldKind::Select(_) => {
                common::create_selection_paragraph(field.selected_label().unwrap_or_default(), &title, focused)
            }
            _ => common::create_input_paragraph(&field.value, &title, focused),
        };
        f.render_widget(paragraph, chunks[index]);
    }

    let message_area = chunks[form.fields.len()];
    if let Some(error) = &form.error {
        let error_paragraph = Paragraph::new(error.clone())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });
        f.render_widget(error_paragraph, message_area);
    }

    let instructions = common::create_form_instructions(&form.submit_label());
    f.render_widget(instructions, chunks[form.fields.len() + 1]);
}

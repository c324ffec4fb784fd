use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

fn field_block(field_title: &str, focused: bool) -> Block<'static> {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(border_color))
}

/// Creates an input field block; the focused field shows a visual cursor
pub fn create_input_paragraph(value: &str, field_title: &str, focused: bool) -> Paragraph<'static> {
    let display = if focused {
        format!("{}█", value)
    } else {
        value.to_string()
    };

    Paragraph::new(display)
        .block(field_block(field_title, focused))
        .style(Style::default().fg(Color::White))
}

/// Creates a selection field block showing the chosen option between arrows
pub fn create_selection_paragraph(value: &str, field_title: &str, focused: bool) -> Paragraph<'static> {
    let display = if focused {
        format!("◀ {} ▶", value)
    } else {
        value.to_string()
    };

    Paragraph::new(display)
        .block(field_block(field_title, focused))
        .style(Style::default().fg(Color::White))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Instructions line of a form dialog, naming its submit action
pub fn create_form_instructions(submit_label: &str) -> Paragraph<'static> {
    let mut spans = vec![
        Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {}", submit_label), Style::default().fg(Color::Gray)),
    ];
    for (key, color, desc) in [
        shortcuts::SEPARATOR,
        shortcuts::TAB_NEXT,
        shortcuts::SEPARATOR,
        shortcuts::ARROWS_CHOOSE,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ] {
        spans.push(Span::styled(key, Style::default().fg(color).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ENTER_CONFIRM: InstructionShortcut = ("Enter/y", Color::Green, " Confirm");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ESC_DECLINE: InstructionShortcut = ("Esc/n", Color::Red, " Cancel");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const ARROWS_CHOOSE: InstructionShortcut = ("←/→", Color::Cyan, " Choose");
    pub const ANY_KEY: InstructionShortcut = ("Any key", Color::Cyan, " Continue");
}

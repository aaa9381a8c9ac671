use crate::input::InputBuffer;
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

/// Creates an input field block with a visual cursor
pub fn create_input_paragraph<'a>(
    input: &'a InputBuffer,
    field_title: &str,
    text_color: Color,
    border_color: Color,
) -> Paragraph<'a> {
    let (before, after) = input.split_at_cursor();
    let text_style = Style::default().fg(text_color);

    let mut spans = vec![Span::styled(before, text_style)];
    let mut rest = after.chars();
    match rest.next() {
        Some(under_cursor) => {
            spans.push(Span::styled(
                under_cursor.to_string(),
                text_style.add_modifier(Modifier::REVERSED),
            ));
            spans.push(Span::styled(rest.as_str(), text_style));
        }
        None => spans.push(Span::styled("█", text_style)),
    }

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(text_color))
        .style(Style::default().fg(border_color));

    Paragraph::new(Line::from(spans)).block(input_block)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
///
/// `map_color` lets callers fade the colors along with their dialog.
pub fn create_instructions_paragraph<'a>(
    instructions: &[InstructionShortcut],
    map_color: impl Fn(Color) -> Color,
) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(map_color(*color)).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(map_color(Color::Gray))));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const SCROLL: InstructionShortcut = ("j/k", Color::Cyan, " Scroll");
}

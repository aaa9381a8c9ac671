use super::common::{self, shortcuts};
use crate::constants::{MODAL_DESCRIPTION, MODAL_FIELD_TITLE, MODAL_HEIGHT, MODAL_SUBMIT_LABEL, MODAL_TITLE};
use crate::icons::IconService;
use crate::input::InputBuffer;
use crate::ui::layout::LayoutManager;
use crate::utils::color::blend;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

/// Render the add-task modal at the given fade `opacity` and return its area.
pub fn render_add_task_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    input: &InputBuffer,
    opacity: f32,
    width: u16,
) -> Rect {
    let dialog_area = LayoutManager::centered_rect_fixed(width, MODAL_HEIGHT, area);
    f.render_widget(Clear, dialog_area);

    let fade = |color: Color| blend(color, Color::Black, opacity);

    let title = format!(" {} {} ", icons.add(), MODAL_TITLE);
    let main_block = common::create_dialog_block(&title, fade(Color::Cyan));

    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Length(3), // Input field (borders + content)
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let description = Paragraph::new(MODAL_DESCRIPTION)
        .style(Style::default().fg(fade(Color::White)))
        .wrap(Wrap { trim: true });

    let input_paragraph =
        common::create_input_paragraph(input, MODAL_FIELD_TITLE, fade(Color::White), fade(Color::Gray));

    let instructions = [
        ("Enter", Color::Green, MODAL_SUBMIT_LABEL),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ];
    let instructions_paragraph = common::create_instructions_paragraph(&instructions, fade);

    f.render_widget(main_block, dialog_area);
    f.render_widget(description, chunks[0]);
    f.render_widget(input_paragraph, chunks[1]);
    f.render_widget(instructions_paragraph, chunks[3]);

    dialog_area
}

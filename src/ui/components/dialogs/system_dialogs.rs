use super::common::{self, shortcuts};
use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

pub const HELP_TEXT: &str = r"
TICKBOX - Terminal To-Do List
=============================

TASKS
-----
a           Open the Add Task form
Space / x   Toggle task completion
d / Delete  Remove task
e           Edit task (not available)

NAVIGATION
----------
j / Down    Next task
k / Up      Previous task
g / Home    First task
End         Last task

ADD TASK FORM
-------------
Enter       Add the typed task
Esc         Dismiss (typed text is kept)
Left/Right  Move cursor
Backspace   Delete before cursor
Click       Outside the form to dismiss

GENERAL
-------
?           Toggle this help
G           Show logs
i           Change icon theme
q / Ctrl+C  Quit
";

/// Render a scrollable text dialog covering most of the screen.
///
/// Returns the scroll offset actually used, clamped to the content.
fn render_scrollable_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let dialog_area = LayoutManager::centered_rect(80, 80, area);
    f.render_widget(Clear, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(dialog_area);

    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    let visible_height = chunks[0].height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White));
    f.render_widget(paragraph, chunks[0]);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        f.render_stateful_widget(scrollbar, chunks[0], scrollbar_state);
    }

    let instructions = [shortcuts::SCROLL, shortcuts::SEPARATOR, shortcuts::ESC_CLOSE];
    f.render_widget(common::create_instructions_paragraph(&instructions, |c| c), chunks[1]);

    clamped_offset
}

pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let title = format!("{} {}", icons.info(), DIALOG_TITLE_HELP);
    render_scrollable_dialog(f, area, &title, HELP_TEXT, scroll_offset, scrollbar_state)
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    logger: &Logger,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let logs = logger.get_logs();
    let content = if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    };

    let title = format!("{} {}", icons.logs(), DIALOG_TITLE_LOGS);
    render_scrollable_dialog(f, area, &title, &content, scroll_offset, scrollbar_state)
}

//! Title bar with the "Add Task" button

use crate::constants::{ADD_TASK_BUTTON, APP_TITLE};
use crate::icons::IconService;
use crate::utils::color::blend;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct Header;

impl Header {
    pub fn render(f: &mut Frame, area: Rect, icons: &IconService, brightness: f32) {
        let shade = |color: Color| blend(color, Color::Black, brightness);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(shade(Color::Cyan)));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let button = format!(" [a] {} {} ", icons.add(), ADD_TASK_BUTTON);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(Span::raw(&button).width() as u16)])
            .split(inner);

        let title = Paragraph::new(Line::from(Span::styled(
            format!(" {}", APP_TITLE),
            Style::default().fg(shade(Color::White)).add_modifier(Modifier::BOLD),
        )));

        let button = Paragraph::new(Line::from(Span::styled(
            button,
            Style::default()
                .fg(shade(Color::Black))
                .bg(shade(Color::Cyan))
                .add_modifier(Modifier::BOLD),
        )));

        f.render_widget(title, chunks[0]);
        f.render_widget(button, chunks[1]);
    }
}

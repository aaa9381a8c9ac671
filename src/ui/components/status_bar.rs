//! Status bar component

use crate::modal::ModalState;
use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Text shown for the given state
    pub fn status_text(state: &AppState) -> String {
        let counts = format!(
            "{} tasks • {} completed",
            state.tasks.len(),
            state.tasks.completed_count()
        );

        let hints = match state.modal.state() {
            ModalState::Closed => "a: add • Space: toggle • d: delete • ?: help • q: quit",
            ModalState::Opening | ModalState::Open => "Enter: add todo • Esc: cancel",
            ModalState::Closing => "closing...",
        };

        format!("{} • {}", counts, hints)
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let status_color = if state.modal.is_visible() {
            Color::Yellow
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(Self::status_text(state))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}

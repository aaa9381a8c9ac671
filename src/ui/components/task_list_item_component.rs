use crate::icons::IconService;
use crate::store::Task;
use crate::utils::color::blend;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// One rendered row of the task list
///
/// Layout: `checkbox text ........ delete edit`
#[derive(Debug, Clone)]
pub struct TaskItem<'a> {
    pub task: &'a Task,
    pub icons: &'a IconService,
}

impl<'a> TaskItem<'a> {
    pub fn new(task: &'a Task, icons: &'a IconService) -> Self {
        Self { task, icons }
    }

    /// Build the row for a list of inner width `width`.
    ///
    /// `brightness` below 1.0 fades the row toward the background, used while
    /// the modal backdrop covers the list.
    pub fn render(&self, selected: bool, width: u16, brightness: f32) -> ListItem<'static> {
        let shade = |color: Color| blend(color, Color::Black, brightness);

        let checkbox_style = if self.task.completed {
            Style::default().fg(shade(Color::Green))
        } else if selected {
            Style::default().fg(shade(Color::Yellow)).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(shade(Color::White))
        };

        let mut text_style = if selected {
            Style::default().fg(shade(Color::Yellow)).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(shade(Color::White))
        };
        if self.task.completed {
            text_style = text_style.fg(shade(Color::DarkGray)).add_modifier(Modifier::CROSSED_OUT);
        }

        let mut spans = vec![
            Span::styled(format!("{} ", self.icons.checkbox(self.task.completed)), checkbox_style),
            Span::styled(self.task.text.clone(), text_style),
        ];

        let affordances = vec![
            Span::styled(self.icons.delete().to_string(), Style::default().fg(shade(Color::Red))),
            Span::raw(" "),
            Span::styled(self.icons.edit().to_string(), Style::default().fg(shade(Color::Cyan))),
        ];

        // Right-align the affordances; they are dropped when the row is too narrow
        let used: usize = spans.iter().chain(affordances.iter()).map(Span::width).sum();
        let free = (width as usize).saturating_sub(used);
        if free > 0 {
            spans.push(Span::raw(" ".repeat(free)));
            spans.extend(affordances);
        }

        ListItem::new(Line::from(spans))
    }
}

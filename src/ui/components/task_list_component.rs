use crate::constants::EMPTY_LIST_HINT;
use crate::icons::IconService;
use crate::store::{Task, TaskStore};
use crate::ui::components::task_list_item_component::TaskItem;
use crate::ui::core::{actions::Action, Component};
use crate::utils::color::blend;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct TaskListComponent {
    pub tasks: TaskStore,
    pub selected_index: usize,
    pub list_state: ListState,
    pub icons: IconService,
    /// 1.0 normally, lower while the modal backdrop dims the list
    pub brightness: f32,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: TaskStore::new(),
            selected_index: 0,
            list_state: ListState::default(),
            icons: IconService::default(),
            brightness: 1.0,
        }
    }

    pub fn update_data(&mut self, tasks: TaskStore, icons: IconService, brightness: f32) {
        self.tasks = tasks;
        self.icons = icons;
        self.brightness = brightness;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.tasks.len() {
                self.selected_index = self.tasks.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get_index(self.selected_index)
    }

    fn next_task(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.tasks.len();
            self.update_list_state();
        }
    }

    fn previous_task(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.tasks.len() - 1
            } else {
                self.selected_index - 1
            };
            self.update_list_state();
        }
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextTask,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousTask,
            KeyCode::Char('g') | KeyCode::Home => Action::FirstTask,
            KeyCode::End => Action::LastTask,
            KeyCode::Char(' ') | KeyCode::Char('x') => {
                self.selected_task().map_or(Action::None, |task| Action::ToggleTask(task.id))
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.selected_task().map_or(Action::None, |task| Action::RemoveTask(task.id))
            }
            KeyCode::Char('e') => self.selected_task().map_or(Action::None, |task| Action::EditTask(task.id)),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                self.next_task();
                Action::None
            }
            Action::PreviousTask => {
                self.previous_task();
                Action::None
            }
            Action::FirstTask => {
                self.selected_index = 0;
                self.update_list_state();
                Action::None
            }
            Action::LastTask => {
                self.selected_index = self.tasks.len().saturating_sub(1);
                self.update_list_state();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = blend(Color::Cyan, Color::Black, self.brightness);
        let title = format!(" {} Tasks ({}) ", self.icons.tasks_title(), self.tasks.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .style(Style::default().fg(border_color));

        // The list container only exists once there is something to show
        if self.tasks.is_empty() {
            let hint = Paragraph::new(EMPTY_LIST_HINT)
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(blend(Color::Gray, Color::Black, self.brightness)));
            f.render_widget(hint, rect);
            return;
        }

        let inner_width = rect.width.saturating_sub(2);
        let items: Vec<ListItem> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(index, task)| {
                TaskItem::new(task, &self.icons).render(index == self.selected_index, inner_width, self.brightness)
            })
            .collect();

        let list = List::new(items).block(block);
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}

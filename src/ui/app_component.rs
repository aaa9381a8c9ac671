use crate::config::Config;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::state::AppState;
use crate::store::{IdGenerator, UuidGenerator};
use crate::ui::components::{DialogComponent, Header, StatusBar, TaskListComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::time::Duration;

/// How far the backdrop darkens the screen behind a fully open modal
const BACKDROP_DIM: f32 = 0.6;

pub struct AppComponent {
    // Component composition
    task_list: TaskListComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,
    ids: Box<dyn IdGenerator>,
    icons: IconService,
    logger: Logger,

    // Simple UI state
    should_quit: bool,
    needs_render: bool,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> Self {
        Self::with_id_generator(config, logger, Box::new(UuidGenerator))
    }

    /// Build the app with a specific identifier source
    pub fn with_id_generator(config: &Config, logger: Logger, ids: Box<dyn IdGenerator>) -> Self {
        let mut dialog = DialogComponent::new();
        dialog.set_modal_width(config.ui.modal_width);
        dialog.set_logger(logger.clone());

        let mut app = Self {
            task_list: TaskListComponent::new(),
            dialog,
            state: AppState::from_config(config),
            ids,
            icons: IconService::new(config.ui.icon_theme),
            logger,
            should_quit: false,
            needs_render: true,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn selected_index(&self) -> usize {
        self.task_list.selected_index
    }

    /// Whether a render is pending, clearing the flag
    pub fn take_needs_render(&mut self) -> bool {
        std::mem::replace(&mut self.needs_render, false)
    }

    /// Brightness of everything behind the modal
    fn backdrop_brightness(&self) -> f32 {
        1.0 - BACKDROP_DIM * self.state.modal.opacity()
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.task_list
            .update_data(self.state.tasks.clone(), self.icons.clone(), self.backdrop_brightness());
        self.dialog
            .update_data(self.state.modal.clone(), self.state.input.clone(), self.icons.clone());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                log::debug!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('a') => {
                log::debug!("Global key: 'a' - opening add task form");
                Action::OpenModal
            }
            KeyCode::Char('i') => Action::CycleIconTheme,
            _ => Action::None,
        }
    }

    /// Route a key press to whichever layer owns input right now
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            log::debug!("Global key: Ctrl+C - quitting application");
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        match self.handle_global_key(key) {
            Action::None => self.task_list.handle_key_events(key),
            action => action,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        self.dialog.handle_mouse_events(mouse)
    }

    /// Feed a terminal event through the component tree
    pub fn handle_event(&mut self, event: EventType) {
        match event {
            EventType::Key(key) => {
                let action = self.handle_key(key);
                self.dispatch(action);
            }
            EventType::Mouse(mouse) => {
                let action = self.handle_mouse(mouse);
                self.dispatch(action);
            }
            EventType::Resize(_, _) => self.needs_render = true,
            EventType::Tick | EventType::Other => {}
        }
    }

    /// Advance animations by `elapsed`
    pub fn tick(&mut self, elapsed: Duration) {
        if self.state.modal.is_animating() {
            self.dispatch(Action::AnimationTick(elapsed));
        }
    }

    /// Apply an action to components and state
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::None => return,
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::ShowDialog(_) | Action::HideDialog => {
                self.dialog.update(action);
            }
            Action::NextTask | Action::PreviousTask | Action::FirstTask | Action::LastTask => {
                self.task_list.update(action);
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                log::info!("Icons: switched to {:?}", self.icons.theme());
            }
            other => {
                let state = std::mem::take(&mut self.state);
                self.state = state.reduce(&other, self.ids.as_mut());
            }
        }

        self.sync_component_data();
        self.needs_render = true;
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.dispatch(action);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);
        let brightness = self.backdrop_brightness();

        Header::render(f, chunks[0], &self.icons, brightness);
        self.task_list.render(f, chunks[1]);
        StatusBar::render(f, chunks[2], &self.state);

        // Overlays last so they sit on top
        self.dialog.render(f, rect);
    }
}

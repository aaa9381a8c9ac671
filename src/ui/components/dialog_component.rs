//! Modal dialog component.
//!
//! Owns the on-screen overlays: the add-task form, which fades in and out
//! with the [`ModalController`] state, and the help and log dialogs. The
//! form's state lives in [`crate::state::AppState`]; this component receives
//! a snapshot for rendering and turns keystrokes into actions.

use crate::constants::MODAL_DEFAULT_WIDTH;
use crate::icons::IconService;
use crate::input::InputBuffer;
use crate::logger::Logger;
use crate::modal::ModalController;
use crate::ui::components::dialogs::{system_dialogs, task_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    widgets::ScrollbarState,
    Frame,
};

pub struct DialogComponent {
    /// Help or log dialog shown above everything else
    pub dialog_type: Option<DialogType>,
    pub modal: ModalController,
    pub input: InputBuffer,
    pub icons: IconService,
    pub modal_width: u16,
    /// Where the form was drawn last frame, for backdrop clicks
    pub modal_area: Option<Rect>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    pub logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            modal: ModalController::default(),
            input: InputBuffer::new(),
            icons: IconService::default(),
            modal_width: MODAL_DEFAULT_WIDTH,
            modal_area: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger: None,
        }
    }

    pub fn update_data(&mut self, modal: ModalController, input: InputBuffer, icons: IconService) {
        self.modal = modal;
        self.input = input;
        self.icons = icons;
        if !self.modal.is_visible() {
            self.modal_area = None;
        }
    }

    pub fn set_modal_width(&mut self, width: u16) {
        self.modal_width = width;
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    /// Whether any overlay is on screen
    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some() || self.modal.is_visible()
    }

    fn handle_system_dialog_key(&mut self, dialog_type: DialogType, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::HideDialog,
            KeyCode::Char('?') if dialog_type == DialogType::Help => Action::HideDialog,
            KeyCode::Char('G') if dialog_type == DialogType::Logs => Action::HideDialog,
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                Action::None
            }
            KeyCode::End => {
                // Clamped to the content on the next render
                self.scroll_offset = usize::MAX;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::SubmitTask,
            KeyCode::Esc => Action::CloseModal,
            KeyCode::Backspace => Action::InputBackspace,
            KeyCode::Delete => Action::InputDelete,
            KeyCode::Left => Action::InputLeft,
            KeyCode::Right => Action::InputRight,
            KeyCode::Home => Action::InputHome,
            KeyCode::End => Action::InputEnd,
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Action::InputChar(c)
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if let Some(dialog_type) = self.dialog_type {
            return self.handle_system_dialog_key(dialog_type, key);
        }

        if self.modal.accepts_input() {
            return self.handle_form_key(key);
        }

        // Fading out: swallow keys until the form is gone
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.dialog_type.is_some() || !self.modal.accepts_input() {
            return Action::None;
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(area) = self.modal_area {
                if !area.contains(Position::new(mouse.column, mouse.row)) {
                    log::debug!("Dialog: backdrop click at ({}, {})", mouse.column, mouse.row);
                    return Action::CloseModal;
                }
            }
        }

        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll_offset = 0;
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.scroll_offset = 0;
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.modal_area = if self.modal.is_visible() {
            Some(task_dialogs::render_add_task_dialog(
                f,
                rect,
                &self.icons,
                &self.input,
                self.modal.opacity(),
                self.modal_width,
            ))
        } else {
            None
        };

        match self.dialog_type {
            Some(DialogType::Help) => {
                self.scroll_offset = system_dialogs::render_help_dialog(
                    f,
                    rect,
                    &self.icons,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            Some(DialogType::Logs) => {
                let logger = self.logger.clone().unwrap_or_default();
                self.scroll_offset = system_dialogs::render_logs_dialog(
                    f,
                    rect,
                    &self.icons,
                    &logger,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            None => {}
        }
    }
}

//! Application state and its reducer
//!
//! [`AppState`] gathers everything the widget mutates: the task store, the
//! modal state machine and the pending form text. [`AppState::reduce`] is the
//! only place where an [`Action`] changes that state.

use crate::config::{Config, UiConfig};
use crate::input::InputBuffer;
use crate::modal::{ModalController, ModalHook};
use crate::store::{IdGenerator, TaskStore};
use crate::ui::core::actions::Action;
use std::time::Duration;

/// How the add-task form behaves around submit and cancel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormPolicy {
    /// Close the modal after a task was added
    pub close_on_submit: bool,
    /// Forget typed text when the modal is dismissed without submitting
    pub clear_input_on_cancel: bool,
}

impl Default for FormPolicy {
    fn default() -> Self {
        Self {
            close_on_submit: true,
            clear_input_on_cancel: false,
        }
    }
}

impl From<&UiConfig> for FormPolicy {
    fn from(ui: &UiConfig) -> Self {
        Self {
            close_on_submit: ui.close_on_submit,
            clear_input_on_cancel: ui.clear_input_on_cancel,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub tasks: TaskStore,
    pub modal: ModalController,
    pub input: InputBuffer,
    pub policy: FormPolicy,
}

impl AppState {
    pub fn new(modal: ModalController, policy: FormPolicy) -> Self {
        Self {
            tasks: TaskStore::new(),
            modal,
            input: InputBuffer::new(),
            policy,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let fade = Duration::from_millis(config.animation.fade_duration_ms);
        Self::new(ModalController::new(fade), FormPolicy::from(&config.ui))
    }

    /// Apply `action` and return the next state.
    ///
    /// Actions that only concern presentation (navigation, dialogs, quitting)
    /// leave the state untouched.
    pub fn reduce(mut self, action: &Action, ids: &mut dyn IdGenerator) -> Self {
        match action {
            Action::OpenModal => {
                if let Some(hook) = self.modal.open() {
                    log_hook(hook);
                }
            }
            Action::CloseModal => {
                if self.modal.close() {
                    log::debug!("Modal: closing without submit");
                    if self.policy.clear_input_on_cancel {
                        self.input.clear();
                    }
                }
            }
            Action::SubmitTask => {
                if !self.modal.accepts_input() {
                    return self;
                }
                match self.tasks.try_add(self.input.as_str(), ids) {
                    Ok(next) => {
                        self.tasks = next;
                        if let Some(task) = self.tasks.entries().last() {
                            log::info!("Task: added '{}' ({})", task.text, task.id);
                        }
                        self.input.clear();
                        if self.policy.close_on_submit {
                            self.modal.close();
                        }
                    }
                    Err(e) => log::debug!("Task: submit ignored: {}", e),
                }
            }
            Action::InputChar(c) if self.modal.accepts_input() => self.input.insert_char(*c),
            Action::InputBackspace if self.modal.accepts_input() => self.input.backspace(),
            Action::InputDelete if self.modal.accepts_input() => self.input.delete(),
            Action::InputLeft if self.modal.accepts_input() => self.input.move_left(),
            Action::InputRight if self.modal.accepts_input() => self.input.move_right(),
            Action::InputHome if self.modal.accepts_input() => self.input.move_home(),
            Action::InputEnd if self.modal.accepts_input() => self.input.move_end(),
            Action::ToggleTask(id) => {
                self.tasks = self.tasks.toggle_complete(*id);
                if let Some(task) = self.tasks.get(*id) {
                    log::info!("Task: {} marked completed={}", id, task.completed);
                }
            }
            Action::RemoveTask(id) => {
                let before = self.tasks.len();
                self.tasks = self.tasks.remove(*id);
                if self.tasks.len() < before {
                    log::info!("Task: removed {}", id);
                }
            }
            Action::EditTask(id) => {
                log::info!("Task: edit requested for {}, editing is not available", id);
            }
            Action::AnimationTick(elapsed) => {
                if let Some(hook) = self.modal.tick(*elapsed) {
                    log_hook(hook);
                }
            }
            _ => {}
        }
        self
    }
}

fn log_hook(hook: ModalHook) {
    match hook {
        ModalHook::Enter => log::debug!("Modal: fade-in started"),
        ModalHook::Exited => log::debug!("Modal: fade-out finished"),
    }
}

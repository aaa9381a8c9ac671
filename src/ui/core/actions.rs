use crate::store::TaskId;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NextTask,
    PreviousTask,
    FirstTask,
    LastTask,

    // Task operations
    ToggleTask(TaskId),
    RemoveTask(TaskId),
    EditTask(TaskId), // Rendered affordance only, never mutates

    // Add-task modal
    OpenModal,
    CloseModal,
    SubmitTask,
    InputChar(char),
    InputBackspace,
    InputDelete,
    InputLeft,
    InputRight,
    InputHome,
    InputEnd,

    // Time
    AnimationTick(Duration),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}

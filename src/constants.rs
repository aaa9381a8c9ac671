//! Constants used throughout the application
//!
//! This module centralizes UI text, defaults and limits.

// UI Text
pub const APP_TITLE: &str = "TODO LIST";
pub const ADD_TASK_BUTTON: &str = "Add Task";
pub const MODAL_TITLE: &str = "New Task";
pub const MODAL_DESCRIPTION: &str = "You can add information to the todo app";
pub const MODAL_FIELD_TITLE: &str = "Task";
pub const MODAL_SUBMIT_LABEL: &str = " Add Todo";
pub const EMPTY_LIST_HINT: &str = "No tasks yet. Press 'a' to add one.";
pub const DIALOG_TITLE_HELP: &str = "Help - Press 'Esc' or '?' to close";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";

// Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// Files
pub const APP_DIR_NAME: &str = "tickbox";
pub const LOCAL_CONFIG_FILE: &str = "tickbox.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "tickbox.log";

// Animation
/// Default fade-in/fade-out duration of the modal
pub const DEFAULT_FADE_DURATION_MS: u64 = 250;
/// Longest accepted fade duration
pub const MAX_FADE_DURATION_MS: u64 = 5000;
/// Default delay between animation frames (~60 FPS)
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;
pub const MAX_FRAME_INTERVAL_MS: u64 = 1000;

// UI Layout Constants
/// Minimum modal width in columns
pub const MODAL_MIN_WIDTH: u16 = 30;
/// Maximum modal width in columns
pub const MODAL_MAX_WIDTH: u16 = 120;
/// Default modal width in columns
pub const MODAL_DEFAULT_WIDTH: u16 = 60;
/// Modal height in lines
pub const MODAL_HEIGHT: u16 = 11;

// Logging
/// Lines kept in memory for the log viewer
pub const MAX_LOG_LINES: usize = 1000;

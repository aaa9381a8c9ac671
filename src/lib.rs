//! tickbox - a single-screen terminal to-do list
//!
//! The widget keeps an ordered list of tasks that can be added, toggled and
//! removed. New tasks are typed into a modal form that fades in and out. There
//! is no persistence: every start begins with an empty list.
//!
//! # Modules
//!
//! * [`store`] - Tasks, identifiers and the task store operations
//! * [`modal`] - Fade state machine of the add-task overlay
//! * [`input`] - Pending text of the add-task form
//! * [`state`] - Application state and its reducer
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Text field buffer for the add-task form
pub mod input;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Add-task overlay state machine
pub mod modal;

/// Application state and reducer
pub mod state;

/// In-memory task store
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for colors and other helpers
pub mod utils;

pub use state::AppState;
pub use store::{Task, TaskId, TaskStore};

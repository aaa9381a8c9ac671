//! Core UI functionality for tickbox.
//!
//! This module contains the building blocks every component shares:
//!
//! - [`actions`] - Action definitions produced by input and consumed by the reducer
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling and frame ticks
//!
//! Components turn key and mouse events into [`Action`]s. The app component
//! feeds those actions to [`crate::state::AppState::reduce`] and then hands
//! the new state back to the components for rendering.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};

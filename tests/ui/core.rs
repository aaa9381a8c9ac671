#[path = "core/event_handler.rs"]
mod event_handler;

//! Reusable UI components

pub mod dialogs;
pub mod header;
pub mod status_bar;
pub mod task_list_item_component;

// Component architecture
pub mod dialog_component;
pub mod task_list_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use header::Header;
pub use status_bar::StatusBar;
pub use task_list_component::TaskListComponent;

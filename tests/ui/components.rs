#[path = "components/dialog_component.rs"]
mod dialog_component;

#[path = "components/task_list_component.rs"]
mod task_list_component;

#[path = "components/status_bar.rs"]
mod status_bar;

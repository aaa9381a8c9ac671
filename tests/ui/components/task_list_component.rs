use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tickbox::icons::IconService;
use tickbox::store::{SequentialIdGenerator, TaskStore};
use tickbox::ui::components::TaskListComponent;
use tickbox::ui::core::{Action, Component};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn component_with(texts: &[&str]) -> TaskListComponent {
    let mut ids = SequentialIdGenerator::new();
    let store = texts.iter().fold(TaskStore::new(), |store, text| store.add(text, &mut ids));
    let mut component = TaskListComponent::new();
    component.update_data(store, IconService::default(), 1.0);
    component
}

#[test]
fn test_empty_list_has_no_selection() {
    let mut component = component_with(&[]);
    assert!(component.selected_task().is_none());
    assert_eq!(component.list_state.selected(), None);
    assert_eq!(component.handle_key_events(key(KeyCode::Char(' '))), Action::None);
    assert_eq!(component.handle_key_events(key(KeyCode::Char('d'))), Action::None);
}

#[test]
fn test_row_keys_target_selected_task() {
    let mut component = component_with(&["a", "b"]);
    let first = component.selected_task().unwrap().id;

    assert_eq!(component.handle_key_events(key(KeyCode::Char(' '))), Action::ToggleTask(first));
    assert_eq!(component.handle_key_events(key(KeyCode::Char('x'))), Action::ToggleTask(first));
    assert_eq!(component.handle_key_events(key(KeyCode::Char('d'))), Action::RemoveTask(first));
    assert_eq!(component.handle_key_events(key(KeyCode::Delete)), Action::RemoveTask(first));
    assert_eq!(component.handle_key_events(key(KeyCode::Char('e'))), Action::EditTask(first));
}

#[test]
fn test_navigation_wraps() {
    let mut component = component_with(&["a", "b", "c"]);

    let action = component.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(action, Action::NextTask);
    assert_eq!(component.update(action), Action::None);
    assert_eq!(component.selected_index, 1);

    component.update(Action::LastTask);
    assert_eq!(component.selected_index, 2);

    component.update(Action::NextTask);
    assert_eq!(component.selected_index, 0);

    component.update(Action::PreviousTask);
    assert_eq!(component.selected_index, 2);

    component.update(Action::FirstTask);
    assert_eq!(component.selected_index, 0);
}

#[test]
fn test_selection_clamped_after_removal() {
    let mut component = component_with(&["a", "b", "c"]);
    component.update(Action::LastTask);
    let last = component.selected_task().unwrap().id;

    let store = component.tasks.remove(last);
    component.update_data(store, IconService::default(), 1.0);

    assert_eq!(component.selected_index, 1);
    assert_eq!(component.selected_task().unwrap().text, "b");
    assert_eq!(component.list_state.selected(), Some(1));
}

#[test]
fn test_unrelated_actions_pass_through() {
    let mut component = component_with(&["a"]);
    assert_eq!(component.update(Action::OpenModal), Action::OpenModal);
}

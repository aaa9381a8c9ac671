use tickbox::store::SequentialIdGenerator;
use tickbox::ui::components::StatusBar;
use tickbox::ui::core::Action;
use tickbox::AppState;

#[test]
fn test_status_counts_tasks() {
    let mut ids = SequentialIdGenerator::new();
    let mut state = AppState::default();
    assert!(StatusBar::status_text(&state).starts_with("0 tasks • 0 completed"));

    state.tasks = state.tasks.add("one", &mut ids).add("two", &mut ids);
    let first = state.tasks.get_index(0).unwrap().id;
    let state = state.reduce(&Action::ToggleTask(first), &mut ids);

    let text = StatusBar::status_text(&state);
    assert!(text.starts_with("2 tasks • 1 completed"));
    assert!(text.contains("a: add"));
}

#[test]
fn test_status_hints_follow_modal() {
    let mut ids = SequentialIdGenerator::new();
    let state = AppState::default().reduce(&Action::OpenModal, &mut ids);
    assert!(StatusBar::status_text(&state).contains("Esc: cancel"));

    let state = state.reduce(&Action::CloseModal, &mut ids);
    assert!(StatusBar::status_text(&state).ends_with("closing..."));
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, style::Modifier, Terminal};
use std::time::Duration;
use tickbox::config::Config;
use tickbox::logger::Logger;
use tickbox::modal::ModalState;
use tickbox::store::SequentialIdGenerator;
use tickbox::ui::core::{Component, EventType};
use tickbox::ui::AppComponent;

fn app() -> AppComponent {
    app_with(&Config::default())
}

fn app_with(config: &Config) -> AppComponent {
    AppComponent::with_id_generator(config, Logger::new(), Box::new(SequentialIdGenerator::new()))
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Let any running fade finish
fn settle(app: &mut AppComponent) {
    app.tick(Duration::from_secs(10));
}

fn add_task(app: &mut AppComponent, text: &str) {
    press(app, KeyCode::Char('a'));
    settle(app);
    type_text(app, text);
    press(app, KeyCode::Enter);
    settle(app);
}

fn draw(app: &mut AppComponent) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    terminal
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_add_task_through_form() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.state().modal.state(), ModalState::Opening);

    // Typing is accepted while the form fades in
    type_text(&mut app, "Buy milk");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state().tasks.len(), 1);
    assert_eq!(app.state().tasks.get_index(0).unwrap().text, "Buy milk");
    assert!(!app.state().tasks.get_index(0).unwrap().completed);
    assert!(app.state().input.is_empty());
    assert_eq!(app.state().modal.state(), ModalState::Closing);

    settle(&mut app);
    assert_eq!(app.state().modal.state(), ModalState::Closed);
}

#[test]
fn test_empty_submit_keeps_form_open() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    settle(&mut app);
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert!(app.state().tasks.is_empty());
    assert_eq!(app.state().modal.state(), ModalState::Open);
}

#[test]
fn test_cancel_keeps_stale_text() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "draft");
    press(&mut app, KeyCode::Esc);
    settle(&mut app);

    assert_eq!(app.state().modal.state(), ModalState::Closed);
    assert!(app.state().tasks.is_empty());

    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.state().input.as_str(), "draft");
}

#[test]
fn test_cancel_clears_text_when_configured() {
    let mut config = Config::default();
    config.ui.clear_input_on_cancel = true;
    let mut app = app_with(&config);

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "draft");
    press(&mut app, KeyCode::Esc);
    settle(&mut app);
    press(&mut app, KeyCode::Char('a'));

    assert!(app.state().input.is_empty());
}

#[test]
fn test_form_captures_global_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "quit?");

    assert!(!app.should_quit());
    assert_eq!(app.state().input.as_str(), "quit?");
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = self::app();
    press(&mut app, KeyCode::Char('a'));
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[test]
fn test_toggle_and_remove_selected() {
    let mut app = app();
    add_task(&mut app, "first");
    add_task(&mut app, "second");

    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.selected_index(), 1);

    press(&mut app, KeyCode::Char(' '));
    assert!(!app.state().tasks.get_index(0).unwrap().completed);
    assert!(app.state().tasks.get_index(1).unwrap().completed);

    press(&mut app, KeyCode::Char(' '));
    assert!(!app.state().tasks.get_index(1).unwrap().completed);

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.state().tasks.len(), 1);
    assert_eq!(app.state().tasks.get_index(0).unwrap().text, "first");
    assert_eq!(app.selected_index(), 0);
}

#[test]
fn test_edit_key_changes_nothing() {
    let mut app = app();
    add_task(&mut app, "keep me");
    let before = app.state().tasks.clone();

    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.state().tasks, before);
}

#[test]
fn test_help_dialog_blocks_list_keys() {
    let mut app = app();
    add_task(&mut app, "task");

    press(&mut app, KeyCode::Char('?'));
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.state().tasks.len(), 1);

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('d'));
    assert!(app.state().tasks.is_empty());
}

#[test]
fn test_render_only_after_changes() {
    let mut app = app();
    assert!(app.take_needs_render());
    assert!(!app.take_needs_render());

    // Idle ticks with a closed modal do nothing
    app.tick(Duration::from_millis(16));
    assert!(!app.take_needs_render());

    press(&mut app, KeyCode::Char('a'));
    assert!(app.take_needs_render());
    app.tick(Duration::from_millis(16));
    assert!(app.take_needs_render());
}

#[test]
fn test_render_empty_list() {
    let mut app = app();
    let text = screen_text(&draw(&mut app));

    assert!(text.contains("TODO LIST"));
    assert!(text.contains("Add Task"));
    assert!(text.contains("No tasks yet."));
    assert!(!text.contains("New Task"));
}

#[test]
fn test_render_open_form() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    settle(&mut app);
    type_text(&mut app, "hello");
    let text = screen_text(&draw(&mut app));

    assert!(text.contains("New Task"));
    assert!(text.contains("You can add information to the todo app"));
    assert!(text.contains("Add Todo"));
    assert!(text.contains("hello"));
}

#[test]
fn test_render_completed_task_crossed_out() {
    let mut app = app();
    add_task(&mut app, "Buy milk");
    press(&mut app, KeyCode::Char(' '));

    let terminal = draw(&mut app);
    assert!(screen_text(&terminal).contains("Buy milk"));

    let buffer = terminal.backend().buffer();
    let crossed = buffer
        .content
        .iter()
        .any(|cell| cell.symbol() == "B" && cell.modifier.contains(Modifier::CROSSED_OUT));
    assert!(crossed);
}

#[test]
fn test_backdrop_click_dismisses_form() {
    let mut config = Config::default();
    config.ui.mouse_enabled = true;
    let mut app = app_with(&config);

    press(&mut app, KeyCode::Char('a'));
    settle(&mut app);
    draw(&mut app);

    app.handle_event(EventType::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    }));
    assert_eq!(app.state().modal.state(), ModalState::Closing);
}

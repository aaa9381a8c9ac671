use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tickbox::icons::IconService;
use tickbox::input::InputBuffer;
use tickbox::modal::ModalController;
use tickbox::ui::components::DialogComponent;
use tickbox::ui::core::{Action, Component, DialogType};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn dialog_with_open_form() -> DialogComponent {
    let mut modal = ModalController::default();
    modal.open();
    modal.finish();

    let mut dialog = DialogComponent::new();
    dialog.update_data(modal, InputBuffer::new(), IconService::default());
    dialog
}

#[test]
fn test_hidden_by_default() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('a'))), Action::None);
}

#[test]
fn test_form_keys() {
    let mut dialog = dialog_with_open_form();
    assert!(dialog.is_visible());

    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('q'))), Action::InputChar('q'));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::SubmitTask);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::CloseModal);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Backspace)), Action::InputBackspace);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Left)), Action::InputLeft);
    assert_eq!(dialog.handle_key_events(key(KeyCode::End)), Action::InputEnd);
}

#[test]
fn test_form_ignores_control_chords() {
    let mut dialog = dialog_with_open_form();
    let chord = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
    assert_eq!(dialog.handle_key_events(chord), Action::None);

    let shifted = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
    assert_eq!(dialog.handle_key_events(shifted), Action::InputChar('W'));
}

#[test]
fn test_closing_form_swallows_keys() {
    let mut modal = ModalController::default();
    modal.open();
    modal.close();

    let mut dialog = DialogComponent::new();
    dialog.update_data(modal, InputBuffer::new(), IconService::default());

    assert!(dialog.is_visible());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);
}

#[test]
fn test_backdrop_click_closes_form() {
    let mut dialog = dialog_with_open_form();
    dialog.modal_area = Some(Rect::new(10, 5, 60, 11));

    assert_eq!(dialog.handle_mouse_events(click(20, 8)), Action::None);
    assert_eq!(dialog.handle_mouse_events(click(0, 0)), Action::CloseModal);
}

#[test]
fn test_system_dialog_lifecycle() {
    let mut dialog = DialogComponent::new();
    assert_eq!(dialog.update(Action::ShowDialog(DialogType::Help)), Action::None);
    assert!(dialog.is_visible());

    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('j'))), Action::None);
    assert_eq!(dialog.scroll_offset, 1);
    dialog.handle_key_events(key(KeyCode::Char('k')));
    dialog.handle_key_events(key(KeyCode::Char('k')));
    assert_eq!(dialog.scroll_offset, 0);

    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::HideDialog);
    dialog.update(Action::HideDialog);
    assert!(!dialog.is_visible());

    dialog.update(Action::ShowDialog(DialogType::Logs));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('?'))), Action::None);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('G'))), Action::HideDialog);
}

#[test]
fn test_system_dialog_takes_keys_over_form() {
    let mut dialog = dialog_with_open_form();
    dialog.update(Action::ShowDialog(DialogType::Help));
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog);
    assert_eq!(dialog.handle_mouse_events(click(0, 0)), Action::None);
}

use super::*;
use crossterm::event::KeyEventState;

#[test]
fn test_key_creation() {
    let key = Key::ctrl(KeyCode::Char('s'));
    assert_eq!(key.code, KeyCode::Char('s'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn test_uppercase_char_normalizes_to_shift() {
    let event = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::CONTROL);
    let key = Key::from(event);
    assert_eq!(key, Key::ctrl_shift(KeyCode::Char('s')));
}

#[test]
fn test_typed_char_ignores_ctrl_and_alt() {
    assert_eq!(Key::simple(KeyCode::Char('a')).typed_char(), Some('a'));
    assert_eq!(Key::shift(KeyCode::Char('A')).typed_char(), Some('A'));
    assert_eq!(Key::ctrl(KeyCode::Char('a')).typed_char(), None);
    assert_eq!(Key::alt(KeyCode::Char('a')).typed_char(), None);
    assert_eq!(Key::simple(KeyCode::Enter).typed_char(), None);
}

#[test]
fn test_release_events_are_not_presses() {
    let release = InputEvent::Key(KeyEvent {
        code: KeyCode::Char('a'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });
    assert!(release.as_key().is_some());
    assert!(release.as_key_press().is_none());

    let press = InputEvent::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
    assert!(press.as_key_press().is_some());
}

#[test]
fn test_from_crossterm_event() {
    let event = InputEvent::from(crossterm::event::Event::Paste("hi".to_string()));
    assert_eq!(event, InputEvent::Paste("hi".to_string()));
}

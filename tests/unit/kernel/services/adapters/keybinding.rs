use super::*;

fn resolve_global(service: &KeybindingService, key: Key) -> Option<Command> {
    service.resolve(KeybindingContext::Global, &key).cloned()
}

#[test]
fn document_shortcuts_are_bound() {
    let service = KeybindingService::new();
    assert_eq!(
        resolve_global(&service, Key::ctrl(KeyCode::Char('n'))),
        Some(Command::New)
    );
    assert_eq!(
        resolve_global(&service, Key::ctrl(KeyCode::Char('o'))),
        Some(Command::Open)
    );
    assert_eq!(
        resolve_global(&service, Key::ctrl(KeyCode::Char('s'))),
        Some(Command::Save)
    );
    assert_eq!(
        resolve_global(&service, Key::ctrl_shift(KeyCode::Char('s'))),
        Some(Command::SaveAs)
    );
    assert_eq!(
        resolve_global(&service, Key::ctrl(KeyCode::Char('q'))),
        Some(Command::Exit)
    );
    assert_eq!(
        resolve_global(&service, Key::simple(KeyCode::F(1))),
        Some(Command::About)
    );
}

#[test]
fn edit_shortcuts_are_bound() {
    let service = KeybindingService::new();
    let cases = [
        ('z', Command::Undo),
        ('y', Command::Redo),
        ('x', Command::Cut),
        ('c', Command::Copy),
        ('v', Command::Paste),
        ('a', Command::SelectAll),
    ];
    for (ch, command) in cases {
        assert_eq!(
            resolve_global(&service, Key::ctrl(KeyCode::Char(ch))),
            Some(command)
        );
    }
}

#[test]
fn editor_has_cursor_bindings() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::simple(KeyCode::Left)),
        Some(&Command::CursorLeft)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::shift(KeyCode::End)),
        Some(&Command::ExtendSelectionLineEnd)
    );
}

#[test]
fn global_commands_fall_through_in_editor() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &Key::ctrl(KeyCode::Char('s'))),
        Some(&Command::Save)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::simple(KeyCode::Left)),
        None
    );
}

#[test]
fn rules_rebind_and_unbind() {
    let mut service = KeybindingService::new();
    let rules = vec![
        KeybindingRule {
            key: "alt+s".to_string(),
            command: "saveAs".to_string(),
            context: None,
        },
        KeybindingRule {
            key: "ctrl+q".to_string(),
            command: String::new(),
            context: Some("global".to_string()),
        },
        KeybindingRule {
            key: "not a key".to_string(),
            command: "save".to_string(),
            context: None,
        },
    ];

    assert_eq!(service.apply_rules(&rules), 2);
    assert_eq!(
        resolve_global(&service, Key::alt(KeyCode::Char('s'))),
        Some(Command::SaveAs)
    );
    assert_eq!(resolve_global(&service, Key::ctrl(KeyCode::Char('q'))), None);
}

#[test]
fn editor_context_rule_only_applies_in_editor() {
    let mut service = KeybindingService::new();
    service.apply_rules(&[KeybindingRule {
        key: "ctrl+e".to_string(),
        command: "cursorLineEnd".to_string(),
        context: Some("editor".to_string()),
    }]);

    let key = Key::ctrl(KeyCode::Char('e'));
    assert_eq!(
        service.resolve(KeybindingContext::Editor, &key),
        Some(&Command::CursorLineEnd)
    );
    assert_eq!(service.resolve(KeybindingContext::Global, &key), None);
}

#[test]
fn shortcut_labels_for_menus() {
    let service = KeybindingService::new();
    assert_eq!(
        service.shortcut_label(&Command::SaveAs).as_deref(),
        Some("Ctrl+Shift+S")
    );
    assert_eq!(service.shortcut_label(&Command::About).as_deref(), Some("F1"));
    assert_eq!(service.shortcut_label(&Command::CursorLeft), None);
}

use super::*;
use tempfile::tempdir;

#[test]
fn parse_ctrl_shift_letter() {
    let key = parse_keybinding("ctrl+shift+s").unwrap();
    assert_eq!(key, Key::ctrl_shift(KeyCode::Char('s')));
}

#[test]
fn uppercase_letter_implies_shift() {
    let key = parse_keybinding("Ctrl+S").unwrap();
    assert_eq!(key, Key::ctrl_shift(KeyCode::Char('s')));
}

#[test]
fn parse_function_and_named_keys() {
    assert_eq!(parse_keybinding("f1"), Some(Key::simple(KeyCode::F(1))));
    assert_eq!(parse_keybinding("F10"), Some(Key::simple(KeyCode::F(10))));
    assert_eq!(
        parse_keybinding("shift+pagedown"),
        Some(Key::shift(KeyCode::PageDown))
    );
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
}

#[test]
fn invalid_keybindings_are_rejected() {
    assert_eq!(parse_keybinding(""), None);
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+abc"), None);
}

#[test]
fn parse_command_maps_known_names() {
    assert_eq!(parse_command("saveAs"), Command::SaveAs);
    assert_eq!(parse_command("quit"), Command::Exit);
    assert_eq!(
        parse_command("nope"),
        Command::Custom("nope".to_string())
    );
}

#[test]
fn write_default_settings_creates_parent_and_keeps_existing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".txtedit").join("settings.json");

    write_default_settings(&path).unwrap();
    let loaded = load_settings_from(&path).unwrap();
    assert_eq!(loaded, Settings::default());

    std::fs::write(&path, r#"{ "editor": { "tab_size": 2 } }"#).unwrap();
    write_default_settings(&path).unwrap();
    let loaded = load_settings_from(&path).unwrap();
    assert_eq!(loaded.editor.tab_size, 2);
    assert!(loaded.editor.notify_on_save);
}

#[test]
fn invalid_json_reports_parse_error() {
    let err = parse_settings("{ not json").unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
    assert!(err.to_string().starts_with("invalid settings file"));
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempdir().unwrap();
    let err = load_settings_from(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SettingsError::Io(_)));
}

#[test]
fn settings_path_lives_under_app_dir() {
    if let Some(path) = get_settings_path() {
        assert!(path.ends_with(".txtedit/settings.json"));
    }
}

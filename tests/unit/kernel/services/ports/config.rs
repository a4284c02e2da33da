use super::*;

#[test]
fn test_default_config() {
    let config = EditorConfig::default();
    assert_eq!(config.tab_size, 4);
    assert!(config.notify_on_save);
}

#[test]
fn test_scroll_step_never_zero() {
    let config = EditorConfig {
        scroll_lines: 0,
        ..EditorConfig::default()
    };
    assert_eq!(config.scroll_step(), 1);
}

#[test]
fn test_partial_json_uses_defaults() {
    let config: EditorConfig = serde_json::from_str(r#"{ "tab_size": 8 }"#).unwrap();
    assert_eq!(config.tab_size, 8);
    assert_eq!(config.tab_width(), 8);
    assert!(config.osc52_clipboard);
}

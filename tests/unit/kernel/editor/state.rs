use super::*;

fn editor_with(text: &str) -> EditorState {
    let mut editor = EditorState::default();
    editor.replace_text(text);
    editor
}

fn type_str(editor: &mut EditorState, text: &str) {
    for ch in text.chars() {
        let result = editor.dispatch(Command::InsertChar(ch));
        assert!(result.text_changed);
    }
}

#[test]
fn typing_inserts_and_reports_change() {
    let mut editor = EditorState::default();
    type_str(&mut editor, "hi");
    assert_eq!(editor.text(), "hi");
    assert_eq!(editor.buffer().cursor(), (0, 2));
}

#[test]
fn cursor_moves_do_not_change_text() {
    let mut editor = editor_with("abc\ndef");
    for cmd in [
        Command::CursorRight,
        Command::CursorDown,
        Command::CursorLineEnd,
        Command::CursorFileStart,
        Command::ExtendSelectionFileEnd,
        Command::SelectAll,
        Command::Copy,
    ] {
        assert!(!editor.dispatch(cmd).text_changed);
    }
    assert_eq!(editor.text(), "abc\ndef");
}

#[test]
fn undo_and_redo_round_trip() {
    let mut editor = EditorState::default();
    type_str(&mut editor, "hello");
    editor.dispatch(Command::InsertChar(' '));
    type_str(&mut editor, "world");
    assert_eq!(editor.text(), "hello world");

    assert!(editor.dispatch(Command::Undo).text_changed);
    assert_eq!(editor.text(), "hello ");
    assert!(editor.can_redo());

    assert!(editor.dispatch(Command::Redo).text_changed);
    assert_eq!(editor.text(), "hello world");
    assert_eq!(editor.buffer().cursor(), (0, 11));
}

#[test]
fn undo_on_empty_history_is_not_a_change() {
    let mut editor = editor_with("loaded");
    assert!(!editor.can_undo());
    assert!(!editor.dispatch(Command::Undo).text_changed);
    assert!(!editor.dispatch(Command::Redo).text_changed);
}

#[test]
fn replace_text_resets_history_and_cursor() {
    let mut editor = EditorState::default();
    type_str(&mut editor, "draft");
    editor.replace_text("from disk");
    assert_eq!(editor.text(), "from disk");
    assert_eq!(editor.buffer().cursor(), (0, 0));
    assert!(!editor.can_undo());
    assert!(!editor.has_selection());
}

#[test]
fn typing_replaces_selection() {
    let mut editor = editor_with("hello world");
    editor.dispatch(Command::CursorLineEnd);
    for _ in 0..5 {
        editor.dispatch(Command::ExtendSelectionLeft);
    }
    type_str(&mut editor, "there");
    assert_eq!(editor.text(), "hello there");

    // 替换选区的第一个字符是独立的撤销单元，之后的连续输入合并
    editor.dispatch(Command::Undo);
    assert_eq!(editor.text(), "hello t");
    editor.dispatch(Command::Undo);
    assert_eq!(editor.text(), "hello world");
}

#[test]
fn copy_emits_clipboard_effect_without_change() {
    let mut editor = editor_with("abc");
    editor.dispatch(Command::SelectAll);
    let result = editor.dispatch(Command::Copy);
    assert!(!result.text_changed);
    assert_eq!(
        result.effects,
        vec![Effect::SetClipboardText("abc".to_string())]
    );
}

#[test]
fn copy_without_selection_does_nothing() {
    let mut editor = editor_with("abc");
    assert_eq!(editor.dispatch(Command::Copy), EditorDispatch::default());
    assert_eq!(editor.dispatch(Command::Cut), EditorDispatch::default());
}

#[test]
fn cut_removes_selection_and_emits_effect() {
    let mut editor = editor_with("one two");
    editor.dispatch(Command::ExtendSelectionRight);
    editor.dispatch(Command::ExtendSelectionRight);
    editor.dispatch(Command::ExtendSelectionRight);
    let result = editor.dispatch(Command::Cut);
    assert!(result.text_changed);
    assert_eq!(
        result.effects,
        vec![Effect::SetClipboardText("one".to_string())]
    );
    assert_eq!(editor.text(), " two");
}

#[test]
fn paste_requests_clipboard_then_inserts() {
    let mut editor = editor_with("ab");
    editor.dispatch(Command::CursorRight);
    let result = editor.dispatch(Command::Paste);
    assert!(!result.text_changed);
    assert_eq!(result.effects, vec![Effect::RequestClipboardText]);

    assert!(editor.insert_text("XY"));
    assert_eq!(editor.text(), "aXYb");
    assert!(!editor.insert_text(""));
}

#[test]
fn backspace_and_delete() {
    let mut editor = editor_with("abc");
    editor.dispatch(Command::CursorFileEnd);
    assert!(editor.dispatch(Command::DeleteBackward).text_changed);
    assert_eq!(editor.text(), "ab");
    assert!(!editor.dispatch(Command::DeleteForward).text_changed);

    editor.dispatch(Command::CursorFileStart);
    assert!(!editor.dispatch(Command::DeleteBackward).text_changed);
    assert!(editor.dispatch(Command::DeleteForward).text_changed);
    assert_eq!(editor.text(), "b");
}

#[test]
fn newline_follows_document_line_ending() {
    let mut editor = editor_with("a\r\nb");
    editor.dispatch(Command::CursorFileEnd);
    editor.dispatch(Command::InsertNewline);
    assert_eq!(editor.text(), "a\r\nb\r\n");

    let mut editor = editor_with("a\nb");
    editor.dispatch(Command::CursorFileEnd);
    editor.dispatch(Command::InsertNewline);
    assert_eq!(editor.text(), "a\nb\n");
}

#[test]
fn tab_inserts_tab_character() {
    let mut editor = EditorState::default();
    assert!(editor.dispatch(Command::InsertTab).text_changed);
    assert_eq!(editor.text(), "\t");
}

#[test]
fn vertical_moves_keep_goal_column() {
    let mut editor = editor_with("abcdef\nab\nabcdef");
    editor.dispatch(Command::CursorLineEnd);
    editor.dispatch(Command::CursorDown);
    assert_eq!(editor.buffer().cursor(), (1, 2));
    editor.dispatch(Command::CursorDown);
    assert_eq!(editor.buffer().cursor(), (2, 6));
}

#[test]
fn cursor_left_collapses_selection_to_start() {
    let mut editor = editor_with("abcdef");
    editor.dispatch(Command::CursorRight);
    editor.dispatch(Command::ExtendSelectionRight);
    editor.dispatch(Command::ExtendSelectionRight);
    editor.dispatch(Command::CursorLeft);
    assert_eq!(editor.buffer().cursor(), (0, 1));
    assert!(!editor.has_selection());
}

#[test]
fn click_places_cursor_and_drag_extends() {
    let mut editor = editor_with("hello\nworld");
    editor.set_viewport_size(20, 5);
    assert!(editor.click(2, 1, false));
    assert_eq!(editor.buffer().cursor(), (1, 2));
    assert!(editor.click(4, 1, true));
    assert_eq!(editor.buffer().selected_text().as_deref(), Some("rl"));
    assert!(!editor.click(30, 0, false));
}

#[test]
fn scroll_lines_clamps_to_document() {
    let text = (0..30).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
    let mut editor = editor_with(&text);
    editor.set_viewport_size(10, 10);
    editor.scroll_lines(50);
    assert_eq!(editor.viewport().line_offset, 20);
    editor.scroll_lines(-3);
    assert_eq!(editor.viewport().line_offset, 17);
    editor.scroll_lines(-100);
    assert_eq!(editor.viewport().line_offset, 0);
}

use super::*;

#[test]
fn test_text_buffer_basic() {
    let mut buffer = TextBuffer::from_text("hello\nworld");

    assert_eq!(buffer.len_lines(), 2);
    assert_eq!(buffer.cursor(), (0, 0));

    buffer.set_cursor(1, 2);
    assert_eq!(buffer.cursor(), (1, 2));
}

#[test]
fn test_set_cursor_clamps() {
    let mut buffer = TextBuffer::from_text("ab\nc");
    buffer.set_cursor(9, 9);
    assert_eq!(buffer.cursor(), (1, 1));
}

#[test]
fn test_pos_to_char() {
    let buffer = TextBuffer::from_text("hello\nworld");

    assert_eq!(buffer.pos_to_char((0, 0)), 0);
    assert_eq!(buffer.pos_to_char((1, 0)), 6);
}

#[test]
fn test_char_to_pos_roundtrips_graphemes() {
    let buffer = TextBuffer::from_text("e\u{301}x\nyz");
    assert_eq!(buffer.char_to_pos(2), (0, 1));
    assert_eq!(buffer.char_to_pos(3), (0, 2));
    assert_eq!(buffer.char_to_pos(4), (1, 0));
    assert_eq!(buffer.pos_to_char((0, 1)), 2);
}

#[test]
fn test_insert_str_op_moves_cursor() {
    let mut buffer = TextBuffer::new();
    let op = buffer.insert_str_op("a");

    assert_eq!(buffer.text(), "a");
    assert_eq!(buffer.cursor(), (0, 1));
    assert_eq!(op.cursor_before(), (0, 0));
    assert_eq!(op.cursor_after(), (0, 1));

    buffer.insert_str_op("b\r\ncd");
    assert_eq!(buffer.text(), "ab\r\ncd");
    assert_eq!(buffer.cursor(), (1, 2));
}

#[test]
fn test_insert_combining_mark_keeps_cursor_grapheme_index() {
    let mut buffer = TextBuffer::new();

    buffer.insert_str_op("e");
    buffer.insert_str_op("\u{301}");

    assert_eq!(buffer.text(), "e\u{301}");
    assert_eq!(buffer.cursor(), (0, 1));

    buffer.delete_backward_op().expect("delete");
    assert_eq!(buffer.text(), "");
    assert_eq!(buffer.cursor(), (0, 0));
}

#[test]
fn test_delete_backward_joins_crlf_lines() {
    let mut buffer = TextBuffer::from_text("ab\r\ncd");
    buffer.set_cursor(1, 0);

    let op = buffer.delete_backward_op().expect("delete");
    assert_eq!(buffer.text(), "abcd");
    assert_eq!(buffer.cursor(), (0, 2));
    assert_eq!(
        op.kind,
        crate::models::OpKind::Delete {
            start: 2,
            end: 4,
            deleted: "\r\n".to_string(),
        }
    );
}

#[test]
fn test_delete_backward_at_start_is_noop() {
    let mut buffer = TextBuffer::from_text("abc");
    assert!(buffer.delete_backward_op().is_none());
    assert_eq!(buffer.text(), "abc");
}

#[test]
fn test_delete_forward() {
    let mut buffer = TextBuffer::from_text("ab\ncd");
    buffer.set_cursor(0, 2);
    buffer.delete_forward_op().expect("delete");
    assert_eq!(buffer.text(), "abcd");
    assert_eq!(buffer.cursor(), (0, 2));

    buffer.set_cursor(0, 4);
    assert!(buffer.delete_forward_op().is_none());
}

#[test]
fn test_delete_selection() {
    let mut buffer = TextBuffer::from_text("hello\nworld");
    buffer.set_cursor(1, 2);
    buffer.set_selection(Some(Selection::spanning((1, 2), (0, 3))));

    assert_eq!(buffer.selected_text().as_deref(), Some("lo\nwo"));
    buffer.delete_selection_op().expect("delete");
    assert_eq!(buffer.text(), "helrld");
    assert_eq!(buffer.cursor(), (0, 3));
    assert!(!buffer.has_selection());
}

#[test]
fn test_line_grapheme_len() {
    let buffer = TextBuffer::from_text("hello\r\nworld\n");

    assert_eq!(buffer.line_grapheme_len(0), 5);
    assert_eq!(buffer.line_grapheme_len(1), 5);
    assert_eq!(buffer.line_grapheme_len(2), 0);
}

#[test]
fn test_strip_line_ending() {
    assert_eq!(strip_line_ending("a\r\n"), "a");
    assert_eq!(strip_line_ending("a\n"), "a");
    assert_eq!(strip_line_ending("a\r"), "a");
    assert_eq!(strip_line_ending("a"), "a");
    assert_eq!(strip_line_ending(""), "");
}

#[test]
fn test_movement_wraps_lines() {
    let buffer = TextBuffer::from_text("ab\ncde");
    assert_eq!(buffer.pos_left((1, 0)), (0, 2));
    assert_eq!(buffer.pos_right((0, 2)), (1, 0));
    assert_eq!(buffer.pos_right((1, 3)), (1, 3));
    assert_eq!(buffer.pos_file_end(), (1, 3));
}

#[test]
fn test_set_text_resets_cursor_and_selection() {
    let mut buffer = TextBuffer::from_text("abc");
    buffer.set_cursor(0, 2);
    buffer.set_selection(Some(Selection::spanning((0, 0), (0, 2))));

    buffer.set_text("xyz\n");
    assert_eq!(buffer.cursor(), (0, 0));
    assert!(buffer.selection().is_none());
    assert_eq!(buffer.len_lines(), 2);
}

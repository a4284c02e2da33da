//! 文本缓冲区模型
//!
//! 职责：
//! - 文本存储（Rope）
//! - 光标和选区管理
//! - 行列 ↔ 字符偏移映射
//!
//! 列坐标以字素（grapheme）为单位，行尾换行符不计入列。

use super::edit_op::EditOp;
use super::selection::Selection;
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// 从 RopeSlice 获取字符串，优先零拷贝
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

/// 去掉行尾的换行符（与 ropey 的断行规则一致）
pub fn strip_line_ending(line: &str) -> &str {
    if let Some(stripped) = line.strip_suffix("\r\n") {
        return stripped;
    }
    match line.chars().last() {
        Some('\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}') => {
            let cut = line.char_indices().last().map(|(i, _)| i).unwrap_or(0);
            &line[..cut]
        }
        _ => line,
    }
}

#[derive(Clone)]
pub struct TextBuffer {
    rope: Rope,
    cursor: (usize, usize),
    selection: Option<Selection>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: (0, 0),
            selection: None,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
            selection: None,
        }
    }

    pub fn rope_mut(&mut self) -> &mut Rope {
        &mut self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// 整体替换文本，光标回到开头
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = (0, 0);
        self.selection = None;
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor = self.clamp_pos((row, col));
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn has_selection(&self) -> bool {
        self.selection
            .as_ref()
            .map(|s| !s.is_empty())
            .unwrap_or(false)
    }

    pub fn selected_text(&self) -> Option<String> {
        let selection = self.selection.as_ref().filter(|s| !s.is_empty())?;
        let (start, end) = selection.range();
        let start = self.pos_to_char(start);
        let end = self.pos_to_char(end);
        Some(self.rope.slice(start..end).to_string())
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line_slice(&self, row: usize) -> Option<RopeSlice<'_>> {
        if row < self.rope.len_lines() {
            Some(self.rope.line(row))
        } else {
            None
        }
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        match self.line_slice(row) {
            Some(slice) => {
                let line = slice_to_cow(slice);
                strip_line_ending(&line).graphemes(true).count()
            }
            None => 0,
        }
    }

    pub fn clamp_pos(&self, (row, col): (usize, usize)) -> (usize, usize) {
        let row = row.min(self.rope.len_lines().saturating_sub(1));
        (row, col.min(self.line_grapheme_len(row)))
    }

    pub fn pos_to_char(&self, pos: (usize, usize)) -> usize {
        let (row, col) = self.clamp_pos(pos);
        self.rope.line_to_char(row) + self.grapheme_to_char_index(row, col)
    }

    pub fn grapheme_to_char_index(&self, row: usize, grapheme_index: usize) -> usize {
        let Some(slice) = self.line_slice(row) else {
            return 0;
        };
        let line = slice_to_cow(slice);
        strip_line_ending(&line)
            .graphemes(true)
            .take(grapheme_index)
            .map(|g| g.chars().count())
            .sum()
    }

    pub fn char_to_pos(&self, char_idx: usize) -> (usize, usize) {
        let char_idx = char_idx.min(self.rope.len_chars());
        let row = self.rope.char_to_line(char_idx);
        let take = char_idx - self.rope.line_to_char(row);
        let line = slice_to_cow(self.rope.line(row));

        let mut chars = 0usize;
        let mut col = 0usize;
        for g in strip_line_ending(&line).graphemes(true) {
            if chars >= take {
                break;
            }
            chars += g.chars().count();
            col += 1;
        }
        (row, col)
    }

    // ==================== 光标移动 ====================

    pub fn pos_left(&self, (row, col): (usize, usize)) -> (usize, usize) {
        if col > 0 {
            (row, col - 1)
        } else if row > 0 {
            (row - 1, self.line_grapheme_len(row - 1))
        } else {
            (0, 0)
        }
    }

    pub fn pos_right(&self, (row, col): (usize, usize)) -> (usize, usize) {
        if col < self.line_grapheme_len(row) {
            (row, col + 1)
        } else if row + 1 < self.len_lines() {
            (row + 1, 0)
        } else {
            (row, col)
        }
    }

    pub fn pos_line_end(&self, row: usize) -> (usize, usize) {
        (row, self.line_grapheme_len(row))
    }

    pub fn pos_file_end(&self) -> (usize, usize) {
        let last = self.len_lines().saturating_sub(1);
        self.pos_line_end(last)
    }

    // ==================== 原子操作方法（返回 EditOp）====================

    /// 在光标处插入字符串，返回 EditOp
    pub fn insert_str_op(&mut self, s: &str) -> EditOp {
        let cursor_before = self.cursor;
        let char_offset = self.pos_to_char(cursor_before);

        self.rope.insert(char_offset, s);

        let cursor_after = self.char_to_pos(char_offset + s.chars().count());
        self.cursor = cursor_after;

        EditOp::insert(char_offset, s.to_string(), cursor_before, cursor_after)
    }

    /// 向后删除（Backspace），返回 EditOp
    pub fn delete_backward_op(&mut self) -> Option<EditOp> {
        let cursor_before = self.cursor;
        if cursor_before == (0, 0) {
            return None;
        }
        let target = self.pos_left(cursor_before);
        self.delete_range_op(target, cursor_before, cursor_before, target)
    }

    /// 向前删除（Delete），返回 EditOp
    pub fn delete_forward_op(&mut self) -> Option<EditOp> {
        let cursor_before = self.cursor;
        let target = self.pos_right(cursor_before);
        if target == cursor_before {
            return None;
        }
        self.delete_range_op(cursor_before, target, cursor_before, cursor_before)
    }

    /// 删除选区，返回 EditOp
    pub fn delete_selection_op(&mut self) -> Option<EditOp> {
        let selection = self.selection.take().filter(|s| !s.is_empty())?;
        let (start, end) = selection.range();
        self.delete_range_op(start, end, self.cursor, start)
    }

    fn delete_range_op(
        &mut self,
        start: (usize, usize),
        end: (usize, usize),
        cursor_before: (usize, usize),
        cursor_after: (usize, usize),
    ) -> Option<EditOp> {
        let start_char = self.pos_to_char(start);
        let end_char = self.pos_to_char(end);
        if start_char >= end_char {
            return None;
        }

        let deleted = self.rope.slice(start_char..end_char).to_string();
        self.rope.remove(start_char..end_char);
        self.cursor = self.clamp_pos(cursor_after);

        Some(EditOp::delete(
            start_char,
            end_char,
            deleted,
            cursor_before,
            self.cursor,
        ))
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;

use crate::core::Command;
use crate::kernel::effect::Effect;
use crate::kernel::services::ports::{EditorConfig, TextDocument};
use crate::models::{EditHistory, Selection, TextBuffer, Transaction};

use super::viewport::{self, EditorViewport};

/// 一条命令的执行结果：文本是否变化 + 需要宿主执行的副作用
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorDispatch {
    pub text_changed: bool,
    pub effects: Vec<Effect>,
}

impl EditorDispatch {
    fn changed(text_changed: bool) -> Self {
        Self {
            text_changed,
            effects: Vec::new(),
        }
    }

    fn effect(text_changed: bool, effect: Effect) -> Self {
        Self {
            text_changed,
            effects: vec![effect],
        }
    }
}

/// 多行文本控件：文本 + 光标 + 选区 + 撤销历史 + 视口
pub struct EditorState {
    buffer: TextBuffer,
    history: EditHistory,
    viewport: EditorViewport,
    goal_col: Option<usize>,
    tab_size: usize,
    line_ending: &'static str,
}

impl EditorState {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            buffer: TextBuffer::new(),
            history: EditHistory::with_limit(config.undo_limit),
            viewport: EditorViewport::default(),
            goal_col: None,
            tab_size: config.tab_width(),
            line_ending: "\n",
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn viewport(&self) -> &EditorViewport {
        &self.viewport
    }

    pub fn tab_size(&self) -> usize {
        self.tab_size
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn has_selection(&self) -> bool {
        self.buffer.has_selection()
    }

    pub fn set_viewport_size(&mut self, width: usize, height: usize) {
        if self.viewport.width == width && self.viewport.height == height {
            return;
        }
        self.viewport.width = width;
        self.viewport.height = height;
        self.follow_cursor();
    }

    /// 鼠标滚轮：只移动视口，不移动光标
    pub fn scroll_lines(&mut self, delta: isize) {
        let max_offset = self
            .buffer
            .len_lines()
            .saturating_sub(self.viewport.height.max(1));
        let offset = self.viewport.line_offset;
        self.viewport.line_offset = if delta < 0 {
            offset.saturating_sub(delta.unsigned_abs())
        } else {
            offset.saturating_add(delta.unsigned_abs()).min(max_offset)
        };
    }

    pub fn dispatch(&mut self, command: Command) -> EditorDispatch {
        let vertical = matches!(
            command,
            Command::CursorUp
                | Command::CursorDown
                | Command::PageUp
                | Command::PageDown
                | Command::ExtendSelectionUp
                | Command::ExtendSelectionDown
        );
        if !vertical {
            self.goal_col = None;
        }

        match command {
            Command::Undo => EditorDispatch::changed(self.undo()),
            Command::Redo => EditorDispatch::changed(self.redo()),
            Command::Copy => self.copy(),
            Command::Cut => self.cut(),
            Command::Paste => EditorDispatch::effect(false, Effect::RequestClipboardText),
            Command::SelectAll => {
                self.select_all();
                EditorDispatch::default()
            }
            Command::InsertChar(ch) => {
                let mut buf = [0u8; 4];
                EditorDispatch::changed(self.insert_text(ch.encode_utf8(&mut buf)))
            }
            Command::InsertNewline => EditorDispatch::changed(self.insert_text(self.line_ending)),
            Command::InsertTab => EditorDispatch::changed(self.insert_text("\t")),
            Command::DeleteBackward => EditorDispatch::changed(self.delete(false)),
            Command::DeleteForward => EditorDispatch::changed(self.delete(true)),
            Command::CursorLeft => {
                self.cursor_left();
                EditorDispatch::default()
            }
            Command::CursorRight => {
                self.cursor_right();
                EditorDispatch::default()
            }
            cmd => {
                if let Some((pos, extend)) = self.motion_target(&cmd) {
                    self.move_to(pos, extend);
                }
                EditorDispatch::default()
            }
        }
    }

    /// 在光标处插入文本（粘贴 / 输入）；有选区时先替换选区
    pub fn insert_text(&mut self, text: &str) -> bool {
        let mut tx = Transaction::new();
        if let Some(op) = self.buffer.delete_selection_op() {
            tx.push(op);
        }
        if !text.is_empty() {
            tx.push(self.buffer.insert_str_op(text));
        }
        self.commit(tx)
    }

    /// 鼠标点击文本区（相对坐标）；`extend` 为拖动扩展选区
    pub fn click(&mut self, x: u16, y: u16, extend: bool) -> bool {
        let Some(pos) = viewport::screen_to_pos(&self.viewport, &self.buffer, self.tab_size, x, y)
        else {
            return false;
        };
        self.goal_col = None;
        self.move_to(pos, extend);
        true
    }

    fn motion_target(&mut self, command: &Command) -> Option<((usize, usize), bool)> {
        let cursor = self.buffer.cursor();
        let page = self.viewport.height.saturating_sub(1).max(1);
        let target = match command {
            Command::CursorUp => (self.vertical_target(false, 1), false),
            Command::CursorDown => (self.vertical_target(true, 1), false),
            Command::PageUp => (self.vertical_target(false, page), false),
            Command::PageDown => (self.vertical_target(true, page), false),
            Command::CursorLineStart => ((cursor.0, 0), false),
            Command::CursorLineEnd => (self.buffer.pos_line_end(cursor.0), false),
            Command::CursorFileStart => ((0, 0), false),
            Command::CursorFileEnd => (self.buffer.pos_file_end(), false),
            Command::ExtendSelectionLeft => (self.buffer.pos_left(cursor), true),
            Command::ExtendSelectionRight => (self.buffer.pos_right(cursor), true),
            Command::ExtendSelectionUp => (self.vertical_target(false, 1), true),
            Command::ExtendSelectionDown => (self.vertical_target(true, 1), true),
            Command::ExtendSelectionLineStart => ((cursor.0, 0), true),
            Command::ExtendSelectionLineEnd => (self.buffer.pos_line_end(cursor.0), true),
            Command::ExtendSelectionFileStart => ((0, 0), true),
            Command::ExtendSelectionFileEnd => (self.buffer.pos_file_end(), true),
            _ => return None,
        };
        Some(target)
    }

    fn vertical_target(&mut self, down: bool, lines: usize) -> (usize, usize) {
        let (row, col) = self.buffer.cursor();
        let goal = *self.goal_col.get_or_insert(col);
        let row = if down {
            row.saturating_add(lines)
        } else {
            row.saturating_sub(lines)
        };
        self.buffer.clamp_pos((row, goal))
    }

    fn move_to(&mut self, pos: (usize, usize), extend: bool) {
        if extend {
            let anchor = self
                .buffer
                .selection()
                .map(Selection::anchor)
                .unwrap_or_else(|| self.buffer.cursor());
            self.buffer
                .set_selection(Some(Selection::spanning(anchor, pos)));
        } else {
            self.buffer.clear_selection();
        }
        self.buffer.set_cursor(pos.0, pos.1);
        self.follow_cursor();
    }

    /// 有选区时收拢到选区起点
    fn cursor_left(&mut self) {
        let target = match self.buffer.selection().filter(|s| !s.is_empty()) {
            Some(selection) => selection.range().0,
            None => self.buffer.pos_left(self.buffer.cursor()),
        };
        self.move_to(target, false);
    }

    fn cursor_right(&mut self) {
        let target = match self.buffer.selection().filter(|s| !s.is_empty()) {
            Some(selection) => selection.range().1,
            None => self.buffer.pos_right(self.buffer.cursor()),
        };
        self.move_to(target, false);
    }

    fn select_all(&mut self) {
        let end = self.buffer.pos_file_end();
        self.buffer
            .set_selection(Some(Selection::spanning((0, 0), end)));
        self.buffer.set_cursor(end.0, end.1);
        self.follow_cursor();
    }

    fn delete(&mut self, forward: bool) -> bool {
        let mut tx = Transaction::new();
        if self.buffer.has_selection() {
            if let Some(op) = self.buffer.delete_selection_op() {
                tx.push(op);
            }
        } else {
            self.buffer.clear_selection();
            let op = if forward {
                self.buffer.delete_forward_op()
            } else {
                self.buffer.delete_backward_op()
            };
            if let Some(op) = op {
                tx.push(op);
            }
        }
        self.commit(tx)
    }

    fn commit(&mut self, tx: Transaction) -> bool {
        if tx.is_empty() {
            return false;
        }
        self.history.push(tx);
        self.goal_col = None;
        self.follow_cursor();
        true
    }

    fn undo(&mut self) -> bool {
        let Some(cursor) = self.history.undo(self.buffer.rope_mut()) else {
            return false;
        };
        self.buffer.clear_selection();
        self.buffer.set_cursor(cursor.0, cursor.1);
        self.follow_cursor();
        true
    }

    fn redo(&mut self) -> bool {
        let Some(cursor) = self.history.redo(self.buffer.rope_mut()) else {
            return false;
        };
        self.buffer.clear_selection();
        self.buffer.set_cursor(cursor.0, cursor.1);
        self.follow_cursor();
        true
    }

    fn copy(&mut self) -> EditorDispatch {
        match self.buffer.selected_text() {
            Some(text) => EditorDispatch::effect(false, Effect::SetClipboardText(text)),
            None => EditorDispatch::default(),
        }
    }

    fn cut(&mut self) -> EditorDispatch {
        let Some(text) = self.buffer.selected_text() else {
            return EditorDispatch::default();
        };
        let changed = self.delete(false);
        EditorDispatch::effect(changed, Effect::SetClipboardText(text))
    }

    fn follow_cursor(&mut self) {
        viewport::follow_cursor(&mut self.viewport, &self.buffer, self.tab_size);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl TextDocument for EditorState {
    fn text(&self) -> String {
        self.buffer.text()
    }

    fn replace_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.history.clear();
        self.goal_col = None;
        self.line_ending = if text.contains("\r\n") { "\r\n" } else { "\n" };
        self.viewport.line_offset = 0;
        self.viewport.horiz_offset = 0;
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/state.rs"]
mod tests;

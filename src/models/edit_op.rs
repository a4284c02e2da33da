//! 原子编辑操作：插入 / 删除，可逆

use ropey::Rope;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpKind {
    Insert {
        char_offset: usize,
        text: String,
    },
    Delete {
        start: usize,
        end: usize,
        deleted: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOp {
    pub kind: OpKind,
    pub cursor_before: (usize, usize),
    pub cursor_after: (usize, usize),
}

impl EditOp {
    pub fn insert(
        char_offset: usize,
        text: String,
        cursor_before: (usize, usize),
        cursor_after: (usize, usize),
    ) -> Self {
        Self {
            kind: OpKind::Insert { char_offset, text },
            cursor_before,
            cursor_after,
        }
    }

    pub fn delete(
        start: usize,
        end: usize,
        deleted: String,
        cursor_before: (usize, usize),
        cursor_after: (usize, usize),
    ) -> Self {
        Self {
            kind: OpKind::Delete {
                start,
                end,
                deleted,
            },
            cursor_before,
            cursor_after,
        }
    }

    pub fn cursor_before(&self) -> (usize, usize) {
        self.cursor_before
    }

    pub fn cursor_after(&self) -> (usize, usize) {
        self.cursor_after
    }

    pub fn inverse(&self) -> OpKind {
        match &self.kind {
            OpKind::Insert { char_offset, text } => OpKind::Delete {
                start: *char_offset,
                end: char_offset + text.chars().count(),
                deleted: text.clone(),
            },
            OpKind::Delete { start, deleted, .. } => OpKind::Insert {
                char_offset: *start,
                text: deleted.clone(),
            },
        }
    }

    /// 把操作重放到 rope 上（Redo）
    pub fn apply(&self, rope: &mut Rope) {
        apply_kind(&self.kind, rope);
    }

    /// 在 rope 上撤销该操作（Undo）
    pub fn revert(&self, rope: &mut Rope) {
        apply_kind(&self.inverse(), rope);
    }

    /// 单个可见字符的插入，用于把连续输入合并成一个撤销单元
    pub fn is_typed_char(&self) -> bool {
        match &self.kind {
            OpKind::Insert { text, .. } => {
                let mut chars = text.chars();
                matches!((chars.next(), chars.next()), (Some(c), None) if !c.is_whitespace())
            }
            OpKind::Delete { .. } => false,
        }
    }

    pub fn insert_start(&self) -> Option<usize> {
        match &self.kind {
            OpKind::Insert { char_offset, .. } => Some(*char_offset),
            OpKind::Delete { .. } => None,
        }
    }

    /// 插入结束处的字符偏移
    pub fn insert_end(&self) -> Option<usize> {
        match &self.kind {
            OpKind::Insert { char_offset, text } => Some(char_offset + text.chars().count()),
            OpKind::Delete { .. } => None,
        }
    }
}

fn apply_kind(kind: &OpKind, rope: &mut Rope) {
    match kind {
        OpKind::Insert { char_offset, text } => {
            let at = (*char_offset).min(rope.len_chars());
            rope.insert(at, text);
        }
        OpKind::Delete { start, end, .. } => {
            let len = rope.len_chars();
            let start = (*start).min(len);
            let end = (*end).min(len);
            if start < end {
                rope.remove(start..end);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_op.rs"]
mod tests;

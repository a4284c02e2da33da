//! 编辑历史：撤销 / 重做栈
//!
//! - 每个撤销单元（Transaction）包含一次命令产生的全部 EditOp
//! - 连续输入的可见字符合并成一个单元
//! - 新编辑会清空重做栈

use super::edit_op::EditOp;
use ropey::Rope;

/// 撤销栈默认上限
pub const DEFAULT_UNDO_LIMIT: usize = 1000;

#[derive(Clone, Debug, Default)]
pub struct Transaction {
    ops: Vec<EditOp>,
}

impl Transaction {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn push(&mut self, op: EditOp) {
        self.ops.push(op);
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    fn is_typing(&self) -> bool {
        !self.ops.is_empty() && self.ops.iter().all(EditOp::is_typed_char)
    }
}

pub struct EditHistory {
    undo_stack: Vec<Transaction>,
    redo_stack: Vec<Transaction>,
    limit: usize,
}

impl EditHistory {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_UNDO_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// 记录一个撤销单元
    pub fn push(&mut self, tx: Transaction) {
        if tx.is_empty() {
            return;
        }
        self.redo_stack.clear();

        if tx.is_typing() {
            if let Some(last) = self.undo_stack.last_mut() {
                let contiguous = last.is_typing()
                    && last.ops.last().and_then(EditOp::insert_end)
                        == tx.ops.first().and_then(EditOp::insert_start);
                if contiguous {
                    last.ops.extend(tx.ops);
                    return;
                }
            }
        }

        self.undo_stack.push(tx);
        if self.undo_stack.len() > self.limit {
            self.undo_stack.remove(0);
        }
    }

    /// Undo：在 rope 上逆序撤销最近的单元，返回恢复后的光标
    pub fn undo(&mut self, rope: &mut Rope) -> Option<(usize, usize)> {
        let tx = self.undo_stack.pop()?;
        for op in tx.ops.iter().rev() {
            op.revert(rope);
        }
        let cursor = tx.ops.first().map(EditOp::cursor_before);
        self.redo_stack.push(tx);
        cursor
    }

    /// Redo：重放最近撤销的单元，返回重放后的光标
    pub fn redo(&mut self, rope: &mut Rope) -> Option<(usize, usize)> {
        let tx = self.redo_stack.pop()?;
        for op in &tx.ops {
            op.apply(rope);
        }
        let cursor = tx.ops.last().map(EditOp::cursor_after);
        self.undo_stack.push(tx);
        cursor
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_history.rs"]
mod tests;

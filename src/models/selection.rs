//! 选区模型：锚点 + 光标，坐标为 (行, 字素列)

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    anchor: (usize, usize),
    cursor: (usize, usize),
}

impl Selection {
    pub fn new(pos: (usize, usize)) -> Self {
        Self {
            anchor: pos,
            cursor: pos,
        }
    }

    pub fn spanning(anchor: (usize, usize), cursor: (usize, usize)) -> Self {
        Self { anchor, cursor }
    }

    pub fn anchor(&self) -> (usize, usize) {
        self.anchor
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn update_cursor(&mut self, pos: (usize, usize)) {
        self.cursor = pos;
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.cursor
    }

    /// 有序范围 (start, end)，end 不包含
    pub fn range(&self) -> ((usize, usize), (usize, usize)) {
        if self.anchor <= self.cursor {
            (self.anchor, self.cursor)
        } else {
            (self.cursor, self.anchor)
        }
    }

    pub fn contains(&self, pos: (usize, usize)) -> bool {
        let (start, end) = self.range();
        pos >= start && pos < end
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/selection.rs"]
mod tests;

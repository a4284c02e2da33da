use crate::models::{slice_to_cow, strip_line_ending, TextBuffer};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// 文本区的可见窗口（行偏移 + 水平偏移，单位为显示列）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorViewport {
    pub line_offset: usize,
    pub horiz_offset: usize,
    pub width: usize,
    pub height: usize,
}

impl Default for EditorViewport {
    fn default() -> Self {
        Self {
            line_offset: 0,
            horiz_offset: 0,
            width: 80,
            height: 20,
        }
    }
}

fn grapheme_width(g: &str, display_col: usize, tab_size: usize) -> usize {
    if g == "\t" {
        tab_size - display_col % tab_size
    } else {
        g.width()
    }
}

/// 光标在当前行的显示列（已展开 tab）
pub fn cursor_display_x(buffer: &TextBuffer, tab_size: usize) -> usize {
    let (row, col) = buffer.cursor();
    display_x_at(buffer, row, col, tab_size)
}

pub fn display_x_at(buffer: &TextBuffer, row: usize, col: usize, tab_size: usize) -> usize {
    let Some(slice) = buffer.line_slice(row) else {
        return 0;
    };
    let line = slice_to_cow(slice);
    let tab_size = tab_size.max(1);

    let mut display_col = 0usize;
    for g in strip_line_ending(&line).graphemes(true).take(col) {
        display_col += grapheme_width(g, display_col, tab_size);
    }
    display_col
}

/// 保证光标可见
pub fn follow_cursor(viewport: &mut EditorViewport, buffer: &TextBuffer, tab_size: usize) {
    let total_lines = buffer.len_lines().max(1);
    let height = viewport.height.max(1);

    let max_offset = total_lines.saturating_sub(height);
    viewport.line_offset = viewport.line_offset.min(max_offset);

    let (row, _) = buffer.cursor();
    if row < viewport.line_offset {
        viewport.line_offset = row;
    } else if row >= viewport.line_offset + height {
        viewport.line_offset = row + 1 - height;
    }

    let cursor_x = cursor_display_x(buffer, tab_size);
    let width = viewport.width.max(1);
    if cursor_x < viewport.horiz_offset {
        viewport.horiz_offset = cursor_x;
    } else if cursor_x >= viewport.horiz_offset + width {
        viewport.horiz_offset = cursor_x + 1 - width;
    }
}

/// 展开 tab，去掉行尾换行符
pub fn expand_tabs(line: &str, tab_size: usize) -> String {
    let tab_size = tab_size.max(1);
    let mut expanded = String::with_capacity(line.len());
    let mut display_col = 0usize;

    for g in strip_line_ending(line).graphemes(true) {
        if g == "\t" {
            let spaces = grapheme_width(g, display_col, tab_size);
            expanded.extend(std::iter::repeat(' ').take(spaces));
            display_col += spaces;
        } else {
            expanded.push_str(g);
            display_col += g.width();
        }
    }

    expanded
}

/// 从左侧裁掉 `skip` 个显示列，再截取 `width` 列
pub fn visible_slice(expanded: &str, skip: usize, width: usize) -> String {
    let mut out = String::new();
    let mut x = 0usize;
    let mut used = 0usize;
    for g in expanded.graphemes(true) {
        let w = g.width();
        if x < skip {
            x += w;
            continue;
        }
        if used + w > width {
            break;
        }
        out.push_str(g);
        used += w;
        x += w;
    }
    out
}

/// 文本区内的相对坐标 → (行, 字素列)
pub fn screen_to_pos(
    viewport: &EditorViewport,
    buffer: &TextBuffer,
    tab_size: usize,
    x: u16,
    y: u16,
) -> Option<(usize, usize)> {
    if viewport.width == 0 || viewport.height == 0 {
        return None;
    }
    if x as usize >= viewport.width || y as usize >= viewport.height {
        return None;
    }

    let row = (viewport.line_offset + y as usize).min(buffer.len_lines().saturating_sub(1));
    let slice = buffer.line_slice(row)?;
    let line = slice_to_cow(slice);
    let tab_size = tab_size.max(1);

    let target_x = viewport.horiz_offset + x as usize;
    let mut display_col = 0usize;
    let mut col = 0usize;
    for g in strip_line_ending(&line).graphemes(true) {
        let w = grapheme_width(g, display_col, tab_size);
        // 点中某个字素时光标落在它之前
        if display_col + w > target_x {
            break;
        }
        display_col += w;
        col += 1;
    }

    Some((row, col))
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/viewport.rs"]
mod tests;

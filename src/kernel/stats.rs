//! 标题与状态栏：纯函数，按需从 (路径, 修改标记, 文本) 推导

use std::path::Path;

pub const APP_NAME: &str = "Explorer TXT Editor";
pub const UNTITLED_NAME: &str = "untitled.txt";
pub const ENCODING_LABEL: &str = "UTF-8";

/// 单词分隔符：空格、制表符、回车、换行
const WORD_DELIMITERS: [char; 4] = [' ', '\t', '\r', '\n'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentStats {
    pub lines: usize,
    pub chars: usize,
    pub words: usize,
}

impl DocumentStats {
    pub fn of(text: &str) -> Self {
        Self {
            lines: line_count(text),
            chars: char_count(text),
            words: word_count(text),
        }
    }

    pub fn status_text(&self) -> String {
        format!(
            "Lines: {} | Chars: {} | Words: {} | Encoding: {}",
            self.lines, self.chars, self.words, ENCODING_LABEL
        )
    }
}

/// 空文本或全是空白 → 0；否则按分隔符切分并丢弃空片段
pub fn word_count(text: &str) -> usize {
    if text.chars().all(char::is_whitespace) {
        return 0;
    }
    text.split(WORD_DELIMITERS)
        .filter(|token| !token.is_empty())
        .count()
}

/// 换行分隔的行数；空文本为 0 行。\r\n、\r、\n 各算一次断行
pub fn line_count(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    let mut breaks = 0usize;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\n' => breaks += 1,
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                breaks += 1;
            }
            _ => {}
        }
    }
    breaks + 1
}

/// Unicode 标量值个数
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

pub fn display_name(path: Option<&Path>) -> String {
    path.and_then(|p| p.file_name())
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| UNTITLED_NAME.to_string())
}

pub fn window_title(path: Option<&Path>, modified: bool) -> String {
    let marker = if modified { "*" } else { "" };
    format!("{}{} - {}", display_name(path), marker, APP_NAME)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/stats.rs"]
mod tests;

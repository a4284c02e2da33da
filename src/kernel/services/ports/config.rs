use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub tab_size: u8,
    /// 保存成功后弹出提示
    pub notify_on_save: bool,
    /// 复制时通过 OSC 52 同步到终端剪贴板
    pub osc52_clipboard: bool,
    pub scroll_lines: usize,
    pub undo_limit: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_size: 4,
            notify_on_save: true,
            osc52_clipboard: true,
            scroll_lines: 3,
            undo_limit: 1000,
        }
    }
}

impl EditorConfig {
    pub fn scroll_step(&self) -> usize {
        self.scroll_lines.max(1)
    }

    pub fn tab_width(&self) -> usize {
        usize::from(self.tab_size.max(1))
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;

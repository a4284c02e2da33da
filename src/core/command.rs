//! 命令系统：语义命令定义
//!
//! - Command: 语义命令枚举（不关心具体按键）
//! - 文档命令由会话处理，编辑命令转发给文本控件

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 文件操作 ====================
    New,
    Open,
    Save,
    SaveAs,
    Exit,

    // ==================== 编辑菜单 ====================
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,

    // ==================== 帮助 ====================
    About,

    // ==================== 菜单栏 ====================
    ToggleMenu,

    // ==================== 光标移动 ====================
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    CursorFileStart,
    CursorFileEnd,
    PageUp,
    PageDown,

    // ==================== 选择扩展 ====================
    ExtendSelectionLeft,
    ExtendSelectionRight,
    ExtendSelectionUp,
    ExtendSelectionDown,
    ExtendSelectionLineStart,
    ExtendSelectionLineEnd,
    ExtendSelectionFileStart,
    ExtendSelectionFileEnd,

    // ==================== 输入 ====================
    InsertChar(char),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,

    // ==================== 扩展点 ====================
    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::New => "new",
            Command::Open => "open",
            Command::Save => "save",
            Command::SaveAs => "saveAs",
            Command::Exit => "exit",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::Cut => "cut",
            Command::Copy => "copy",
            Command::Paste => "paste",
            Command::SelectAll => "selectAll",
            Command::About => "about",
            Command::ToggleMenu => "toggleMenu",
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::CursorFileStart => "cursorFileStart",
            Command::CursorFileEnd => "cursorFileEnd",
            Command::PageUp => "pageUp",
            Command::PageDown => "pageDown",
            Command::ExtendSelectionLeft => "extendSelectionLeft",
            Command::ExtendSelectionRight => "extendSelectionRight",
            Command::ExtendSelectionUp => "extendSelectionUp",
            Command::ExtendSelectionDown => "extendSelectionDown",
            Command::ExtendSelectionLineStart => "extendSelectionLineStart",
            Command::ExtendSelectionLineEnd => "extendSelectionLineEnd",
            Command::ExtendSelectionFileStart => "extendSelectionFileStart",
            Command::ExtendSelectionFileEnd => "extendSelectionFileEnd",
            Command::InsertChar(_) => "insertChar",
            Command::InsertNewline => "insertNewline",
            Command::InsertTab => "insertTab",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::Custom(name) => name,
        }
    }

    /// 按名称解析（settings 中的 keybinding 使用）；未知名称返回 Custom
    pub fn from_name(name: &str) -> Command {
        match name.trim() {
            "new" => Command::New,
            "open" => Command::Open,
            "save" => Command::Save,
            "saveAs" => Command::SaveAs,
            "exit" | "quit" => Command::Exit,
            "undo" => Command::Undo,
            "redo" => Command::Redo,
            "cut" => Command::Cut,
            "copy" => Command::Copy,
            "paste" => Command::Paste,
            "selectAll" => Command::SelectAll,
            "about" => Command::About,
            "toggleMenu" => Command::ToggleMenu,
            "cursorLeft" => Command::CursorLeft,
            "cursorRight" => Command::CursorRight,
            "cursorUp" => Command::CursorUp,
            "cursorDown" => Command::CursorDown,
            "cursorLineStart" => Command::CursorLineStart,
            "cursorLineEnd" => Command::CursorLineEnd,
            "cursorFileStart" => Command::CursorFileStart,
            "cursorFileEnd" => Command::CursorFileEnd,
            "pageUp" => Command::PageUp,
            "pageDown" => Command::PageDown,
            "extendSelectionLeft" => Command::ExtendSelectionLeft,
            "extendSelectionRight" => Command::ExtendSelectionRight,
            "extendSelectionUp" => Command::ExtendSelectionUp,
            "extendSelectionDown" => Command::ExtendSelectionDown,
            "extendSelectionLineStart" => Command::ExtendSelectionLineStart,
            "extendSelectionLineEnd" => Command::ExtendSelectionLineEnd,
            "extendSelectionFileStart" => Command::ExtendSelectionFileStart,
            "extendSelectionFileEnd" => Command::ExtendSelectionFileEnd,
            "insertNewline" => Command::InsertNewline,
            "insertTab" => Command::InsertTab,
            "deleteBackward" => Command::DeleteBackward,
            "deleteForward" => Command::DeleteForward,
            other => Command::Custom(other.to_string()),
        }
    }

    /// 菜单 / 工具栏上显示的文字
    pub fn label(&self) -> &str {
        match self {
            Command::New => "New",
            Command::Open => "Open...",
            Command::Save => "Save",
            Command::SaveAs => "Save As...",
            Command::Exit => "Exit",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Cut => "Cut",
            Command::Copy => "Copy",
            Command::Paste => "Paste",
            Command::SelectAll => "Select All",
            Command::About => "About",
            other => other.name(),
        }
    }

    /// 由文档会话处理的命令（可能弹出模态对话框）
    pub fn is_document_command(&self) -> bool {
        matches!(
            self,
            Command::New
                | Command::Open
                | Command::Save
                | Command::SaveAs
                | Command::Exit
                | Command::About
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;

//! 模态对话框端口：确认框、消息框、路径选择
//!
//! 会话逻辑只依赖这里的 trait，具体实现由前端（TUI 或测试替身）提供。

use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "txt";

/// 确认框三选一的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Save,
    Discard,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub title: String,
    pub text: String,
}

impl Message {
    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            title: title.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFilter {
    #[default]
    TextDocuments,
    AllFiles,
}

impl FileFilter {
    pub fn label(self) -> &'static str {
        match self {
            FileFilter::TextDocuments => "Text documents (*.txt)",
            FileFilter::AllFiles => "All files (*.*)",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            FileFilter::TextDocuments => FileFilter::AllFiles,
            FileFilter::AllFiles => FileFilter::TextDocuments,
        }
    }

    pub fn matches(self, path: &Path) -> bool {
        match self {
            FileFilter::AllFiles => true,
            FileFilter::TextDocuments => path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case(DEFAULT_EXTENSION))
                .unwrap_or(false),
        }
    }

    /// 保存时补全默认扩展名：仅在 *.txt 过滤器下、且文件名没有扩展名时追加
    pub fn with_default_extension(self, path: PathBuf) -> PathBuf {
        if self != FileFilter::TextDocuments || path.extension().is_some() {
            return path;
        }
        if path.file_name().is_none() {
            return path;
        }
        let mut path = path;
        path.set_extension(DEFAULT_EXTENSION);
        path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPurpose {
    Open,
    Save,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRequest {
    pub purpose: PathPurpose,
    /// 预填的路径（当前文件或占位名）
    pub suggested: PathBuf,
    pub filter: FileFilter,
}

impl PathRequest {
    pub fn open(suggested: PathBuf) -> Self {
        Self {
            purpose: PathPurpose::Open,
            suggested,
            filter: FileFilter::default(),
        }
    }

    pub fn save(suggested: PathBuf) -> Self {
        Self {
            purpose: PathPurpose::Save,
            suggested,
            filter: FileFilter::default(),
        }
    }
}

pub trait Dialogs {
    /// 文档已修改时询问 保存 / 不保存 / 取消
    fn confirm_save_changes(&mut self, document_name: &str) -> ConfirmChoice;

    /// 返回用户选择的绝对路径；取消时返回 None
    fn choose_path(&mut self, request: &PathRequest) -> Option<PathBuf>;

    /// 阻塞直到用户确认
    fn show_message(&mut self, message: &Message);
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/dialog.rs"]
mod tests;

//! 文档会话：文件路径关联 + 修改标记
//!
//! 所有破坏性操作（新建 / 打开 / 关闭）都先经过 confirm-or-discard；
//! 对话框、文件读写、文本控件都通过端口注入，会话本身不接触终端。

use std::path::{Path, PathBuf};

use crate::kernel::services::ports::{
    ConfirmChoice, Dialogs, FileProvider, Message, PathRequest, TextDocument,
};
use crate::kernel::stats::{self, APP_NAME, UNTITLED_NAME};

/// 一次会话操作需要的协作者
pub struct SessionPorts<'a> {
    pub document: &'a mut dyn TextDocument,
    pub dialogs: &'a mut dyn Dialogs,
    pub files: &'a dyn FileProvider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// 用户在路径选择中取消
    Cancelled,
    Failed,
}

impl SaveOutcome {
    pub fn is_saved(self) -> bool {
        self == SaveOutcome::Saved
    }
}

#[derive(Debug, Clone)]
pub struct DocumentSession {
    file_path: Option<PathBuf>,
    modified: bool,
    notify_on_save: bool,
}

impl DocumentSession {
    /// 启动时的状态：无路径、未修改
    pub fn new() -> Self {
        Self {
            file_path: None,
            modified: false,
            notify_on_save: true,
        }
    }

    pub fn set_notify_on_save(&mut self, notify: bool) {
        self.notify_on_save = notify;
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn document_name(&self) -> String {
        stats::display_name(self.file_path())
    }

    pub fn title(&self) -> String {
        stats::window_title(self.file_path(), self.modified)
    }

    /// 文本控件报告了一次改动；返回是否由 Clean 变为 Dirty
    pub fn note_edit(&mut self) -> bool {
        let became_dirty = !self.modified;
        self.modified = true;
        became_dirty
    }

    /// Clean 直接放行；Dirty 时询问 保存 / 不保存 / 取消
    pub fn confirm_or_discard(&mut self, ports: &mut SessionPorts<'_>) -> bool {
        if !self.modified {
            return true;
        }

        let choice = ports.dialogs.confirm_save_changes(&self.document_name());
        tracing::debug!(?choice, "confirm save changes");
        match choice {
            ConfirmChoice::Save => self.save(ports).is_saved(),
            ConfirmChoice::Discard => true,
            ConfirmChoice::Cancel => false,
        }
    }

    pub fn new_document(&mut self, ports: &mut SessionPorts<'_>) -> bool {
        if !self.confirm_or_discard(ports) {
            return false;
        }

        ports.document.replace_text("");
        self.file_path = None;
        self.modified = false;
        tracing::info!("new document");
        true
    }

    pub fn open(&mut self, ports: &mut SessionPorts<'_>) -> bool {
        if !self.confirm_or_discard(ports) {
            return false;
        }

        let suggested = self
            .file_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let Some(path) = ports.dialogs.choose_path(&PathRequest::open(suggested)) else {
            tracing::debug!("open cancelled");
            return false;
        };

        self.open_path(&path, ports)
    }

    /// 读取成功才替换文本并关联路径；失败时文档保持原样
    pub fn open_path(&mut self, path: &Path, ports: &mut SessionPorts<'_>) -> bool {
        match ports.files.read_text(path) {
            Ok(text) => {
                ports.document.replace_text(&text);
                self.file_path = Some(path.to_path_buf());
                self.modified = false;
                tracing::info!(path = %path.display(), chars = text.chars().count(), "opened");
                true
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "open failed");
                ports.dialogs.show_message(&Message::error(
                    "Error",
                    format!("Error opening file: {}", err),
                ));
                false
            }
        }
    }

    pub fn save(&mut self, ports: &mut SessionPorts<'_>) -> SaveOutcome {
        match self.file_path.clone() {
            Some(path) => self.write_to(&path, ports),
            None => self.save_as(ports),
        }
    }

    pub fn save_as(&mut self, ports: &mut SessionPorts<'_>) -> SaveOutcome {
        let suggested = self
            .file_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(UNTITLED_NAME));
        let Some(path) = ports.dialogs.choose_path(&PathRequest::save(suggested)) else {
            tracing::debug!("save as cancelled");
            return SaveOutcome::Cancelled;
        };

        self.write_to(&path, ports)
    }

    /// 写入成功后才关联路径、清除修改标记
    fn write_to(&mut self, path: &Path, ports: &mut SessionPorts<'_>) -> SaveOutcome {
        let text = ports.document.text();
        match ports.files.write_text(path, &text) {
            Ok(()) => {
                self.file_path = Some(path.to_path_buf());
                self.modified = false;
                tracing::info!(path = %path.display(), bytes = text.len(), "saved");
                if self.notify_on_save {
                    ports
                        .dialogs
                        .show_message(&Message::info("Information", "File saved successfully."));
                }
                SaveOutcome::Saved
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "save failed");
                ports.dialogs.show_message(&Message::error(
                    "Error",
                    format!("Error saving file: {}", err),
                ));
                SaveOutcome::Failed
            }
        }
    }

    /// 关闭请求：只有 confirm-or-discard 放行时返回 true
    pub fn request_close(&mut self, ports: &mut SessionPorts<'_>) -> bool {
        let proceed = self.confirm_or_discard(ports);
        if proceed {
            tracing::info!("close confirmed");
        }
        proceed
    }

    pub fn about(&self, dialogs: &mut dyn Dialogs) {
        dialogs.show_message(&Message::info(
            "About",
            format!(
                "{} v{}\n\nA simple text editor for creating, editing and saving TXT files.",
                APP_NAME,
                env!("CARGO_PKG_VERSION")
            ),
        ));
    }
}

impl Default for DocumentSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;

//! 剪贴板服务
//!
//! 进程内寄存器保存最近一次复制/剪切的文本；可选导出器把文本同步到宿主终端（OSC 52）。

const CLIPBOARD_MAX_SIZE: usize = 10 * 1024 * 1024; // 10MB

pub type ClipboardExporter = Box<dyn FnMut(&str) -> Result<(), String>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    Empty,
    TooLarge(usize),
    ExportFailed(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Empty => write!(f, "clipboard is empty"),
            ClipboardError::TooLarge(size) => {
                write!(f, "text too large ({} MB), limit is 10 MB", size / 1024 / 1024)
            }
            ClipboardError::ExportFailed(e) => write!(f, "terminal clipboard export failed: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}

pub struct ClipboardService {
    register: Option<String>,
    exporter: Option<ClipboardExporter>,
}

impl ClipboardService {
    pub fn new() -> Self {
        Self {
            register: None,
            exporter: None,
        }
    }

    pub fn with_exporter(exporter: ClipboardExporter) -> Self {
        Self {
            register: None,
            exporter: Some(exporter),
        }
    }

    pub fn get_text(&self) -> Result<String, ClipboardError> {
        self.register.clone().ok_or(ClipboardError::Empty)
    }

    /// 寄存器总会更新；导出失败只作为错误返回，不影响进程内粘贴
    pub fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.len() > CLIPBOARD_MAX_SIZE {
            return Err(ClipboardError::TooLarge(text.len()));
        }
        self.register = Some(text.to_string());

        match self.exporter.as_mut() {
            Some(export) => export(text).map_err(ClipboardError::ExportFailed),
            None => Ok(()),
        }
    }
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/clipboard.rs"]
mod tests;

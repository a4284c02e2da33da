//! 路径选择对话框的状态机（无终端依赖）
//!
//! 输入框 + 当前目录列表；Tab 切换过滤器，上下选择，Enter 进入目录或确认。

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::core::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::kernel::services::ports::{
    DirEntry, FileFilter, FileProvider, PathPurpose, PathRequest,
};

pub const PARENT_ENTRY: &str = "..";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Pending,
    Accepted(PathBuf),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct PathPicker {
    purpose: PathPurpose,
    filter: FileFilter,
    input: String,
    base_dir: PathBuf,
    listed_dir: PathBuf,
    entries: Vec<DirEntry>,
    selected: Option<usize>,
    error: Option<String>,
}

impl PathPicker {
    /// `base_dir` 用于解析相对路径（通常是进程工作目录）
    pub fn new(request: &PathRequest, base_dir: PathBuf, files: &dyn FileProvider) -> Self {
        let mut input = request.suggested.to_string_lossy().to_string();
        if !input.is_empty() && files.is_dir(&resolve(&base_dir, &input)) && !ends_with_sep(&input) {
            input.push(MAIN_SEPARATOR);
        }

        let mut picker = Self {
            purpose: request.purpose,
            filter: request.filter,
            input,
            listed_dir: base_dir.clone(),
            base_dir,
            entries: Vec::new(),
            selected: None,
            error: None,
        };
        picker.refresh(files);
        picker
    }

    pub fn purpose(&self) -> PathPurpose {
        self.purpose
    }

    pub fn title(&self) -> &'static str {
        match self.purpose {
            PathPurpose::Open => "Open",
            PathPurpose::Save => "Save As",
        }
    }

    pub fn filter(&self) -> FileFilter {
        self.filter
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn listed_dir(&self) -> &Path {
        &self.listed_dir
    }

    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn handle_key(&mut self, key: &KeyEvent, files: &dyn FileProvider) -> PickerOutcome {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return PickerOutcome::Pending;
        }

        match key.code {
            KeyCode::Esc => return PickerOutcome::Cancelled,
            KeyCode::Tab | KeyCode::BackTab => {
                self.filter = self.filter.toggle();
                self.refresh(files);
            }
            KeyCode::Up => self.move_selection(false),
            KeyCode::Down => self.move_selection(true),
            KeyCode::Enter => return self.submit(files),
            KeyCode::Backspace => {
                if self.input.pop().is_some() {
                    self.input_changed(files);
                }
            }
            KeyCode::Char(ch) => {
                self.input.push(ch);
                self.input_changed(files);
            }
            _ => {}
        }
        PickerOutcome::Pending
    }

    /// 粘贴到输入框；换行被丢弃
    pub fn paste(&mut self, text: &str, files: &dyn FileProvider) {
        let cleaned: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if cleaned.is_empty() {
            return;
        }
        self.input.push_str(&cleaned);
        self.input_changed(files);
    }

    fn submit(&mut self, files: &dyn FileProvider) -> PickerOutcome {
        if let Some(entry) = self.selected.and_then(|idx| self.entries.get(idx)).cloned() {
            if entry.is_dir {
                self.enter_dir(&entry.path, files);
                return PickerOutcome::Pending;
            }
            return self.accept(entry.path);
        }

        if self.input.trim().is_empty() {
            return PickerOutcome::Pending;
        }
        let path = resolve(&self.base_dir, &self.input);
        if files.is_dir(&path) {
            self.enter_dir(&path, files);
            return PickerOutcome::Pending;
        }
        self.accept(path)
    }

    /// 另存为时目标已是现有文件，需要确认覆盖
    pub fn replaces_existing(&self, path: &Path, files: &dyn FileProvider) -> bool {
        self.purpose == PathPurpose::Save && files.is_file(path)
    }

    fn accept(&self, path: PathBuf) -> PickerOutcome {
        let path = match self.purpose {
            PathPurpose::Save => self.filter.with_default_extension(path),
            PathPurpose::Open => path,
        };
        tracing::debug!(path = %path.display(), "path picked");
        PickerOutcome::Accepted(path)
    }

    fn enter_dir(&mut self, dir: &Path, files: &dyn FileProvider) {
        // 保存时保留已输入的文件名
        let keep_name = match self.purpose {
            PathPurpose::Save if !ends_with_sep(&self.input) => Path::new(&self.input)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .filter(|name| {
                    name.as_str() != PARENT_ENTRY
                        && !files.is_dir(&resolve(&self.base_dir, &self.input))
                }),
            _ => None,
        };

        let mut input = dir.to_string_lossy().to_string();
        if !ends_with_sep(&input) {
            input.push(MAIN_SEPARATOR);
        }
        if let Some(name) = keep_name {
            input.push_str(&name);
        }
        self.input = input;
        self.refresh(files);
    }

    fn input_changed(&mut self, files: &dyn FileProvider) {
        self.selected = None;
        if self.listing_dir(files) != self.listed_dir {
            self.refresh(files);
        }
    }

    fn move_selection(&mut self, down: bool) {
        if self.entries.is_empty() {
            self.selected = None;
            return;
        }
        let last = self.entries.len() - 1;
        self.selected = Some(match (self.selected, down) {
            (None, true) => 0,
            (None, false) => last,
            (Some(idx), true) => (idx + 1).min(last),
            (Some(idx), false) => idx.saturating_sub(1),
        });
    }

    /// 输入以分隔符结尾或本身是目录时列出它，否则列出其父目录
    fn listing_dir(&self, files: &dyn FileProvider) -> PathBuf {
        if self.input.trim().is_empty() {
            return self.base_dir.clone();
        }
        let path = resolve(&self.base_dir, &self.input);
        if ends_with_sep(&self.input) || files.is_dir(&path) {
            return path;
        }
        path.parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.base_dir.clone())
    }

    fn refresh(&mut self, files: &dyn FileProvider) {
        let dir = self.listing_dir(files);
        self.selected = None;
        self.entries.clear();
        self.error = None;

        match files.read_dir(&dir) {
            Ok(entries) => {
                if let Some(parent) = dir.parent() {
                    self.entries.push(DirEntry {
                        name: PARENT_ENTRY.to_string(),
                        path: parent.to_path_buf(),
                        is_dir: true,
                    });
                }
                let filter = self.filter;
                self.entries.extend(
                    entries
                        .into_iter()
                        .filter(|entry| entry.is_dir || filter.matches(&entry.path)),
                );
            }
            Err(err) => {
                tracing::debug!(dir = %dir.display(), error = %err, "cannot list directory");
                self.error = Some(err.to_string());
            }
        }
        self.listed_dir = dir;
    }
}

/// 相对路径基于 `base`；`~/` 展开为 HOME
pub fn resolve(base: &Path, input: &str) -> PathBuf {
    let input = input.trim();
    if let Some(rest) = input.strip_prefix("~/").or_else(|| input.strip_prefix("~\\")) {
        if let Some(home) = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")) {
            return PathBuf::from(home).join(rest);
        }
    }
    let path = Path::new(input);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn ends_with_sep(input: &str) -> bool {
    input.ends_with('/') || input.ends_with(MAIN_SEPARATOR)
}

#[cfg(test)]
#[path = "../../tests/unit/app/picker.rs"]
mod tests;

//! 文件读写端口：整文件 UTF-8 读写 + 目录列举

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug)]
pub enum FileError {
    /// 读取失败：文件不存在、无权限、编码错误等
    Read { path: PathBuf, source: io::Error },
    /// 写入失败：目标不可写、磁盘已满、无权限等
    Write { path: PathBuf, source: io::Error },
    NotFound(PathBuf),
    NotAFile(PathBuf),
    InvalidEncoding(PathBuf),
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::Read { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            FileError::Write { path, source } => {
                write!(f, "cannot write {}: {}", path.display(), source)
            }
            FileError::NotFound(path) => write!(f, "file not found: {}", path.display()),
            FileError::NotAFile(path) => write!(f, "not a file: {}", path.display()),
            FileError::InvalidEncoding(path) => {
                write!(f, "{} is not valid UTF-8 text", path.display())
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Read { source, .. } | FileError::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { name, path, is_dir }
    }
}

pub trait FileProvider {
    /// 读取整个文件为文本
    fn read_text(&self, path: &Path) -> Result<String>;

    /// 以 UTF-8 写入整个文本（覆盖）
    fn write_text(&self, path: &Path, content: &str) -> Result<()>;

    /// 列出目录内容：目录在前，其余按名称排序
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/file.rs"]
mod tests;

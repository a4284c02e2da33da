//! 本地文件系统 Provider
//!
//! 实现 FileProvider trait：整文件 UTF-8 读写，不做换行符转换
//!
//! 读取时去掉一个开头的 BOM；文本本身以 U+FEFF 开头时写入一个 BOM，
//! 保证写入 T 再读回仍是 T。

use crate::kernel::services::ports::file::{DirEntry, FileError, FileProvider, Result};
use std::fs;
use std::path::Path;

const UTF8_BOM: &str = "\u{feff}";

pub struct LocalFileProvider;

impl LocalFileProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileProvider for LocalFileProvider {
    fn read_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(FileError::NotFound(path.to_path_buf()));
        }
        if !path.is_file() {
            return Err(FileError::NotAFile(path.to_path_buf()));
        }

        let bytes = fs::read(path).map_err(|source| FileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text =
            String::from_utf8(bytes).map_err(|_| FileError::InvalidEncoding(path.to_path_buf()))?;

        Ok(match text.strip_prefix(UTF8_BOM) {
            Some(stripped) => stripped.to_string(),
            None => text,
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        let bytes = if content.starts_with(UTF8_BOM) {
            let mut bytes = Vec::with_capacity(UTF8_BOM.len() + content.len());
            bytes.extend_from_slice(UTF8_BOM.as_bytes());
            bytes.extend_from_slice(content.as_bytes());
            bytes
        } else {
            content.as_bytes().to_vec()
        };
        fs::write(path, bytes).map_err(|source| FileError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let read_err = |source| FileError::Read {
            path: path.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let path = entry.path();
            // 跟随符号链接判断是否为目录
            let is_dir = path.is_dir();
            entries.push(DirEntry::new(path, is_dir));
        }

        entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        });

        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/local.rs"]
mod tests;

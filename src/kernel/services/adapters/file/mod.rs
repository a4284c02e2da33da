//! 本地文件系统上的 `FileProvider`

pub mod local;

pub use local::LocalFileProvider;

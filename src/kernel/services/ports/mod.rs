//! Service ports: traits + data contracts.

pub mod config;
pub mod dialog;
pub mod document;
pub mod file;
pub mod settings;

pub use config::EditorConfig;
pub use dialog::{
    ConfirmChoice, Dialogs, FileFilter, Message, MessageKind, PathPurpose, PathRequest,
};
pub use document::TextDocument;
pub use file::{DirEntry, FileError, FileProvider, Result as FileResult};
pub use settings::{KeybindingRule, Settings, ThemeSettings};

//! Service adapters: OS specific implementations (filesystem, clipboard, settings).

pub mod clipboard;
pub mod file;
pub mod keybinding;
pub mod paths;
pub mod settings;

pub use clipboard::{ClipboardError, ClipboardExporter, ClipboardService};
pub use file::LocalFileProvider;
pub use keybinding::{KeybindingContext, KeybindingService};
pub use paths::{ensure_log_dir, get_cache_dir, get_log_dir};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, parse_keybinding, SettingsError,
};

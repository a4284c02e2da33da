//! TUI integration layer (crossterm + ratatui).
//!
//! `kernel` / `models` 不依赖这里的任何终端类型。

pub mod event_source;
pub mod osc52;
pub mod terminal_guard;
pub mod view;

pub use event_source::{CrosstermEventSource, EventSource, ScriptedEventSource};
pub use terminal_guard::{
    install_termination_signals, TerminalGuard, TerminationSignal, UnsavedFlag,
};
pub use view::{EventResult, View};

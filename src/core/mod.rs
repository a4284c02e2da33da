//! 核心抽象：
//! - Event: 统一输入事件
//! - Command: 命令系统

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{InputEvent, Key};

//! txtedit - 单文档 TUI 文本编辑器库
//!
//! 模块结构：
//! - core: 命令与输入事件
//! - models: 数据模型（TextBuffer, Selection, EditHistory）
//! - kernel: 无终端依赖的核心（DocumentSession、文本控件、服务端口与适配器）
//! - tui: 终端生命周期、事件源、View 协议
//! - app: 应用层（Workbench、菜单、对话框、主循环）

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
pub mod tui;

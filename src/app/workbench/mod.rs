//! 工作台：文本区 + 菜单栏 + 工具栏 + 状态栏，负责输入分发
//!
//! 编辑类命令直接交给 [`EditorState`]；需要模态对话框的文档命令以
//! [`EventResult::Document`] 交还主循环，再由主循环带着对话框调用
//! [`Workbench::run_document_command`]。

use std::path::Path;
use std::rc::Rc;

use ratatui::layout::Rect;
use ratatui::Frame;

use super::menu::MenuBar;
use super::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::core::Command;
use crate::kernel::services::adapters::{ClipboardService, KeybindingService};
use crate::kernel::services::ports::{Dialogs, FileProvider, Settings, TextDocument};
use crate::kernel::stats::DocumentStats;
use crate::kernel::{DocumentSession, EditorState, SessionPorts};
use crate::tui::{EventResult, View};

mod input;
mod render;
pub(crate) mod util;

const TITLE_HEIGHT: u16 = 1;
const MENU_HEIGHT: u16 = 1;
const TOOLBAR_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

/// 工具栏按钮
const TOOLBAR_BUTTONS: [(&str, Command); 3] = [
    ("[New]", Command::New),
    ("[Open]", Command::Open),
    ("[Save]", Command::Save),
];

pub struct Workbench {
    editor: EditorState,
    session: DocumentSession,
    files: Rc<dyn FileProvider>,
    clipboard: ClipboardService,
    keybindings: KeybindingService,
    theme: UiTheme,
    menu: MenuBar,
    scroll_step: usize,
    dragging: bool,
    last_text_area: Option<Rect>,
    last_toolbar_buttons: Vec<(Rect, Command)>,
}

impl Workbench {
    pub fn new(settings: &Settings, files: Rc<dyn FileProvider>) -> Self {
        let mut keybindings = KeybindingService::with_defaults();
        let applied = keybindings.apply_rules(&settings.keybindings);
        if applied > 0 {
            tracing::info!(applied, "custom keybindings applied");
        }

        let mut theme = UiTheme::from_settings(&settings.theme);
        if !cfg!(test) {
            theme.adapt_to_terminal_capabilities();
        }

        let clipboard = if settings.editor.osc52_clipboard && !cfg!(test) {
            ClipboardService::with_exporter(crate::tui::osc52::exporter())
        } else {
            ClipboardService::new()
        };

        let mut session = DocumentSession::new();
        session.set_notify_on_save(settings.editor.notify_on_save);

        Self {
            editor: EditorState::new(&settings.editor),
            session,
            files,
            clipboard,
            keybindings,
            theme,
            menu: MenuBar::new(),
            scroll_step: settings.editor.scroll_step(),
            dragging: false,
            last_text_area: None,
            last_toolbar_buttons: Vec::new(),
        }
    }

    pub fn session(&self) -> &DocumentSession {
        &self.session
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// 文档读写与对话框列目录共用同一个 provider
    pub fn files(&self) -> Rc<dyn FileProvider> {
        Rc::clone(&self.files)
    }

    pub fn theme(&self) -> &UiTheme {
        &self.theme
    }

    pub fn menu(&self) -> &MenuBar {
        &self.menu
    }

    pub fn title(&self) -> String {
        self.session.title()
    }

    pub fn status_text(&self) -> String {
        DocumentStats::of(&self.editor.text()).status_text()
    }

    /// 执行文档命令；返回 true 表示确认退出
    pub fn run_document_command(&mut self, command: &Command, dialogs: &mut dyn Dialogs) -> bool {
        tracing::debug!(command = command.name(), "document command");
        let mut ports = SessionPorts {
            document: &mut self.editor,
            dialogs,
            files: self.files.as_ref(),
        };

        match command {
            Command::New => {
                self.session.new_document(&mut ports);
            }
            Command::Open => {
                self.session.open(&mut ports);
            }
            Command::Save => {
                self.session.save(&mut ports);
            }
            Command::SaveAs => {
                self.session.save_as(&mut ports);
            }
            Command::Exit => return self.session.request_close(&mut ports),
            Command::About => self.session.about(ports.dialogs),
            other => tracing::debug!(command = other.name(), "not a document command"),
        }
        false
    }

    /// 命令行参数指定的文件；不经过确认框
    pub fn open_path(&mut self, path: &Path, dialogs: &mut dyn Dialogs) -> bool {
        let mut ports = SessionPorts {
            document: &mut self.editor,
            dialogs,
            files: self.files.as_ref(),
        };
        self.session.open_path(path, &mut ports)
    }
}

impl View for Workbench {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Paste(text) => self.handle_paste(text),
            InputEvent::Resize(..) => EventResult::Consumed,
            InputEvent::FocusGained | InputEvent::FocusLost => EventResult::Ignored,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        render::render(self, frame, area);
    }

    fn cursor_position(&self) -> Option<(u16, u16)> {
        if self.menu.is_open() {
            return None;
        }
        render::cursor_screen_position(&self.editor, self.last_text_area?)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench/mod.rs"]
mod tests;

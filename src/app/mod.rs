//! 应用层：工作台、菜单、对话框和主循环

pub mod dialogs;
pub mod menu;
pub mod picker;
pub mod theme;
pub mod workbench;

pub use dialogs::TuiDialogs;
pub use theme::UiTheme;
pub use workbench::Workbench;

use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use crate::kernel::services::adapters::LocalFileProvider;
use crate::kernel::services::ports::Settings;
use crate::tui::{
    install_termination_signals, CrosstermEventSource, EventResult, EventSource, TerminalGuard,
    TerminationSignal, UnsavedFlag, View,
};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 主循环结束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    Signal(TerminationSignal),
    /// 事件源结束（stdin 关闭或终端挂断），已无法再询问；
    /// 未保存内容与信号退出一样丢弃，并记一条警告
    InputClosed,
}

impl ExitReason {
    pub fn exit_code(self) -> i32 {
        match self {
            ExitReason::Quit | ExitReason::InputClosed => 0,
            ExitReason::Signal(signal) => signal.exit_code(),
        }
    }
}

/// 在真实终端上运行编辑器，返回进程退出码
pub fn run(startup_file: Option<PathBuf>, settings: &Settings) -> io::Result<i32> {
    let guard = TerminalGuard::new()?;

    let (signal_tx, signal_rx) = mpsc::channel();
    let unsaved = UnsavedFlag::default();
    if let Err(err) = install_termination_signals(guard.restorer(), signal_tx, unsaved.clone()) {
        tracing::warn!(error = %err, "failed to install signal handlers");
    }

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut events = CrosstermEventSource;
    let mut workbench = Workbench::new(settings, Rc::new(LocalFileProvider::new()));

    let reason = run_loop(
        &mut terminal,
        &mut events,
        &mut workbench,
        &signal_rx,
        &unsaved,
        startup_file.as_deref(),
        set_terminal_title,
    )?;
    tracing::info!(?reason, "main loop finished");

    drop(terminal);
    guard.restorer().restore()?;
    Ok(reason.exit_code())
}

fn set_terminal_title(title: &str) {
    if let Err(err) = crossterm::execute!(io::stdout(), crossterm::terminal::SetTitle(title)) {
        tracing::debug!(error = %err, "set title failed");
    }
}

/// 主循环：绘制 → 读事件 → 分发；文档命令在这里接上模态对话框
pub fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    events: &mut dyn EventSource,
    workbench: &mut Workbench,
    signals: &Receiver<TerminationSignal>,
    unsaved: &UnsavedFlag,
    startup_file: Option<&Path>,
    mut set_title: impl FnMut(&str),
) -> io::Result<ExitReason> {
    let files = workbench.files();
    if let Some(path) = startup_file {
        let backdrop = draw(terminal, workbench)?;
        let mut dialogs = TuiDialogs::new(
            terminal,
            events,
            files.as_ref(),
            workbench.theme().clone(),
            backdrop,
        );
        if workbench.open_path(path, &mut dialogs) {
            tracing::info!(path = %path.display(), "opened startup file");
        }
    }

    let mut shown_title = String::new();
    loop {
        if let Ok(signal) = signals.try_recv() {
            if workbench.session().is_modified() {
                tracing::warn!(
                    signal = signal.name(),
                    document = %workbench.session().document_name(),
                    "termination signal, discarding unsaved changes"
                );
            } else {
                tracing::info!(signal = signal.name(), "termination signal, leaving without prompt");
            }
            return Ok(ExitReason::Signal(signal));
        }
        unsaved.set(workbench.session().is_modified());

        let title = workbench.title();
        if title != shown_title {
            set_title(&title);
            shown_title = title;
        }

        draw(terminal, workbench)?;

        let event = match events.next_event(POLL_INTERVAL) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                log_input_closed(workbench);
                return Ok(ExitReason::InputClosed);
            }
            Err(err) => return Err(err),
        };

        match workbench.handle_input(&event) {
            EventResult::Document(command) => {
                // 菜单可能刚被关闭，重画一帧作为对话框底图
                let backdrop = draw(terminal, workbench)?;
                let mut dialogs = TuiDialogs::new(
                    terminal,
                    events,
                    files.as_ref(),
                    workbench.theme().clone(),
                    backdrop,
                );
                if workbench.run_document_command(&command, &mut dialogs) {
                    return Ok(ExitReason::Quit);
                }
            }
            EventResult::Quit => return Ok(ExitReason::Quit),
            EventResult::Consumed | EventResult::Ignored => {}
        }
    }
}

fn log_input_closed(workbench: &Workbench) {
    let session = workbench.session();
    if session.is_modified() {
        tracing::warn!(
            document = %session.document_name(),
            "input closed with unsaved changes, discarding"
        );
    } else {
        tracing::info!("input closed");
    }
}

fn draw<B: Backend>(terminal: &mut Terminal<B>, workbench: &mut Workbench) -> io::Result<Buffer> {
    let frame = terminal.draw(|frame| {
        let area = frame.area();
        workbench.render(frame, area);
    })?;
    Ok(frame.buffer.clone())
}

#[cfg(test)]
#[path = "../../tests/unit/app/run_loop.rs"]
mod tests;

//! 终端生命周期：raw mode / 备用屏 / 鼠标 / 粘贴，以及终止信号
//!
//! 退出、panic、信号三条路径都经过同一个 [`TerminalRestorer`]，只恢复一次。

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

/// 信号到达后等待主循环自行退出的时间
pub const SIGNAL_GRACE: Duration = Duration::from_secs(2);

pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::{
            cursor,
            event::{EnableBracketedPaste, EnableMouseCapture},
            execute,
            terminal::{enable_raw_mode, EnterAlternateScreen},
        };

        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste,
            cursor::SetCursorStyle::SteadyBar
        )?;
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        use crossterm::{
            cursor,
            event::{DisableBracketedPaste, DisableMouseCapture},
            execute,
            terminal::{disable_raw_mode, LeaveAlternateScreen},
        };

        // 每一步都尝试，只报告第一个错误
        let mut first_err: Option<io::Error> = None;

        if let Err(err) = disable_raw_mode() {
            first_err.get_or_insert(err);
        }
        if let Err(err) = execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            cursor::SetCursorStyle::DefaultUserShape,
            cursor::Show
        ) {
            first_err.get_or_insert(err);
        }

        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }

    pub fn is_restored(&self) -> bool {
        self.restored.load(Ordering::SeqCst)
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    /// setup 失败时尽量撤销已生效的部分
    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        if let Err(err) = ops.setup() {
            let _ = ops.restore();
            return Err(err);
        }
        Ok(Self {
            restorer: TerminalRestorer {
                restored: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restorer.restore();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TerminationSignal::SigInt => "SIGINT",
            TerminationSignal::SigTerm => "SIGTERM",
        }
    }
}

/// 主循环每帧发布文档是否有未保存修改，信号线程强制退出前读取
#[derive(Debug, Clone, Default)]
pub struct UnsavedFlag(Arc<AtomicBool>);

impl UnsavedFlag {
    pub fn set(&self, unsaved: bool) {
        self.0.store(unsaved, Ordering::Release);
    }

    pub fn get(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[cfg(unix)]
fn log_forced_exit(signal: TerminationSignal, unsaved: &UnsavedFlag) {
    if unsaved.get() {
        tracing::warn!(
            signal = signal.name(),
            "main loop did not exit, forcing; unsaved changes are lost"
        );
    } else {
        tracing::warn!(signal = signal.name(), "main loop did not exit, forcing");
    }
}

/// 信号先转发给主循环；宽限期后主循环仍未退出则恢复终端并强制退出
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: Sender<TerminationSignal>,
    unsaved: UnsavedFlag,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("txtedit-signals".to_string())
        .spawn(move || {
            for sig in signals.forever() {
                let signal = match sig {
                    SIGINT => TerminationSignal::SigInt,
                    SIGTERM => TerminationSignal::SigTerm,
                    _ => continue,
                };

                let _ = tx.send(signal);

                std::thread::sleep(SIGNAL_GRACE);
                log_forced_exit(signal, &unsaved);
                let _ = restorer.restore();
                std::process::exit(signal.exit_code());
            }
        })
}

#[cfg(not(unix))]
pub fn install_termination_signals(
    _restorer: TerminalRestorer,
    _tx: Sender<TerminationSignal>,
    _unsaved: UnsavedFlag,
) -> io::Result<std::thread::JoinHandle<()>> {
    std::thread::Builder::new()
        .name("txtedit-signals".to_string())
        .spawn(|| {})
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;

//! txtedit：单文档终端文本编辑器

mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use txtedit::kernel::services::adapters::{ensure_settings_file, load_settings};
use txtedit::kernel::services::ports::Settings;
use txtedit::kernel::stats::APP_NAME;

const USAGE: &str = "Usage: txtedit [OPTIONS] [PATH]

Arguments:
  [PATH]  Text file to open at startup

Options:
  -h, --help     Print help
  -V, --version  Print version";

#[derive(Debug, PartialEq, Eq)]
enum CliAction {
    Run(Option<String>),
    Help,
    Version,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliAction, String> {
    let mut path = None;
    let mut only_paths = false;
    for arg in args {
        if !only_paths {
            match arg.as_str() {
                "-h" | "--help" => return Ok(CliAction::Help),
                "-V" | "--version" => return Ok(CliAction::Version),
                "--" => {
                    only_paths = true;
                    continue;
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(format!("unexpected argument '{}'", flag));
                }
                _ => {}
            }
        }
        if path.is_some() {
            return Err(format!("unexpected extra argument '{}'", arg));
        }
        path = Some(arg);
    }
    Ok(CliAction::Run(path))
}

/// 相对路径按当前目录解析；目录不能作为文档打开
fn resolve_startup_file(cwd: &Path, arg: Option<&str>) -> Result<Option<PathBuf>, String> {
    let Some(arg) = arg.map(str::trim).filter(|a| !a.is_empty()) else {
        return Ok(None);
    };
    let path = Path::new(arg);
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    if path.is_dir() {
        return Err(format!("'{}' is a directory", path.display()));
    }
    Ok(Some(path))
}

fn load_user_settings() -> Settings {
    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "failed to create settings file");
    }
    match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(error = %err, "failed to load settings, using defaults");
            Settings::default()
        }
    }
}

fn main() -> ExitCode {
    let arg = match parse_args(std::env::args().skip(1)) {
        Ok(CliAction::Help) => {
            println!("{} v{}\n\n{}", APP_NAME, env!("CARGO_PKG_VERSION"), USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(CliAction::Version) => {
            println!("txtedit {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Ok(CliAction::Run(arg)) => arg,
        Err(msg) => {
            eprintln!("error: {}\n\n{}", msg, USAGE);
            return ExitCode::from(2);
        }
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let startup_file = match resolve_startup_file(&cwd, arg.as_deref()) {
        Ok(path) => path,
        Err(msg) => {
            eprintln!("error: {}", msg);
            return ExitCode::from(2);
        }
    };

    let _logging = logging::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");
    let settings = load_user_settings();

    match txtedit::app::run(startup_file, &settings) {
        Ok(code) => ExitCode::from(code.clamp(0, 255) as u8),
        Err(err) => {
            tracing::error!(error = %err, "terminal error");
            eprintln!("error: {}", err);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli_startup_paths.rs"]
mod tests;

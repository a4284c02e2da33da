//! OSC 52：通过终端转义序列写系统剪贴板（本地 / SSH / tmux 均可用）

use std::io::{self, Write};

const OSC52_OPEN: &str = "\x1b]52;c;";
const OSC52_CLOSE: &str = "\x07";

const TMUX_OPEN: &str = "\x1bPtmux;\x1b\x1b]52;c;";
const TMUX_CLOSE: &str = "\x07\x1b\\";

pub const OSC52_MAX_BYTES: usize = 100 * 1024; // 100KB

const BASE64_TABLE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Osc52Error {
    TooLarge { bytes: usize },
    Io(String),
}

impl std::fmt::Display for Osc52Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Osc52Error::TooLarge { bytes } => write!(
                f,
                "text too large for OSC52 ({} KB, limit {} KB)",
                bytes / 1024,
                OSC52_MAX_BYTES / 1024
            ),
            Osc52Error::Io(msg) => write!(f, "io error: {}", msg),
        }
    }
}

impl std::error::Error for Osc52Error {}

/// tmux 需要 DCS passthrough 包裹
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Osc52Env {
    pub is_tmux: bool,
}

impl Osc52Env {
    pub fn detect() -> Self {
        Self {
            is_tmux: std::env::var_os("TMUX").is_some(),
        }
    }
}

pub fn build_sequence(text: &str, env: Osc52Env) -> Result<String, Osc52Error> {
    let bytes = text.as_bytes();
    if bytes.len() > OSC52_MAX_BYTES {
        return Err(Osc52Error::TooLarge { bytes: bytes.len() });
    }

    let (open, close) = if env.is_tmux {
        (TMUX_OPEN, TMUX_CLOSE)
    } else {
        (OSC52_OPEN, OSC52_CLOSE)
    };
    Ok(format!("{open}{}{close}", base64_encode(bytes)))
}

pub fn write_sequence<W: Write>(mut w: W, text: &str, env: Osc52Env) -> Result<(), Osc52Error> {
    let seq = build_sequence(text, env)?;
    w.write_all(seq.as_bytes())
        .and_then(|_| w.flush())
        .map_err(|e| Osc52Error::Io(e.to_string()))
}

/// 给 `ClipboardService` 用的导出器
pub fn exporter() -> crate::kernel::services::adapters::ClipboardExporter {
    let env = Osc52Env::detect();
    Box::new(move |text| write_sequence(io::stdout(), text, env).map_err(|e| e.to_string()))
}

fn base64_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(3) {
        let mut group = [0u8; 3];
        group[..chunk.len()].copy_from_slice(chunk);
        let n = u32::from(group[0]) << 16 | u32::from(group[1]) << 8 | u32::from(group[2]);

        let sextets = [(n >> 18) & 0x3f, (n >> 12) & 0x3f, (n >> 6) & 0x3f, n & 0x3f];
        // chunk 长度 1 → 2 个字符 + "=="，长度 2 → 3 个字符 + "="
        let emitted = chunk.len() + 1;
        for (i, sextet) in sextets.iter().enumerate() {
            if i < emitted {
                out.push(BASE64_TABLE[*sextet as usize] as char);
            } else {
                out.push('=');
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/tui/osc52.rs"]
mod tests;

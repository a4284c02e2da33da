//! 模态对话框的终端实现
//!
//! 每个对话框是一个嵌套事件循环：先把进入前的编辑器画面铺回去，再在上面画弹窗，
//! 直到用户做出选择才返回。

use std::path::{Path, PathBuf};
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use unicode_width::UnicodeWidthStr;

use super::picker::{PathPicker, PickerOutcome};
use super::theme::UiTheme;
use super::workbench::util::{centered_rect, inner_rect};
use crate::core::event::{InputEvent, KeyCode, KeyEvent, KeyModifiers};
use crate::kernel::services::ports::{
    ConfirmChoice, Dialogs, FileProvider, Message, MessageKind, PathRequest,
};
use crate::tui::EventSource;

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const DIALOG_WIDTH_PERCENT: u16 = 50;
const PICKER_WIDTH_PERCENT: u16 = 70;
const PICKER_HEIGHT: u16 = 18;

pub const CONFIRM_TITLE: &str = "Save Changes";
pub const CONFIRM_TEXT: &str = "The document has been modified. Save changes?";
pub const REPLACE_TITLE: &str = "Confirm Save As";
pub const REPLACE_TEXT: &str = "already exists. Replace existing file?";

enum DialogInput {
    Key(KeyEvent),
    Paste(String),
    Redraw,
}

pub struct TuiDialogs<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    events: &'a mut dyn EventSource,
    files: &'a dyn FileProvider,
    theme: UiTheme,
    backdrop: Buffer,
    base_dir: PathBuf,
}

impl<'a, B: Backend> TuiDialogs<'a, B> {
    /// `backdrop` 是进入对话框前最后一帧的画面
    pub fn new(
        terminal: &'a mut Terminal<B>,
        events: &'a mut dyn EventSource,
        files: &'a dyn FileProvider,
        theme: UiTheme,
        backdrop: Buffer,
    ) -> Self {
        Self {
            terminal,
            events,
            files,
            theme,
            backdrop,
            base_dir: std::env::current_dir().unwrap_or_default(),
        }
    }

    pub fn with_base_dir(mut self, base_dir: PathBuf) -> Self {
        self.base_dir = base_dir;
        self
    }

    /// 事件源出错（或脚本耗尽）时返回 None，调用方按取消处理
    fn next_input(&mut self) -> Option<DialogInput> {
        loop {
            match self.events.next_event(POLL_INTERVAL) {
                Ok(None) => continue,
                Ok(Some(event @ InputEvent::Key(_))) => {
                    if let Some(key) = event.as_key_press() {
                        return Some(DialogInput::Key(*key));
                    }
                }
                Ok(Some(InputEvent::Paste(text))) => return Some(DialogInput::Paste(text)),
                Ok(Some(InputEvent::Resize(..))) => return Some(DialogInput::Redraw),
                Ok(Some(_)) => continue,
                Err(err) => {
                    tracing::debug!(error = %err, "dialog input ended");
                    return None;
                }
            }
        }
    }
}

fn draw_over<B: Backend>(
    terminal: &mut Terminal<B>,
    backdrop: &Buffer,
    render: impl FnOnce(&mut Frame, Rect),
) -> bool {
    let result = terminal.draw(|frame| {
        if frame.buffer_mut().area == backdrop.area {
            *frame.buffer_mut() = backdrop.clone();
        }
        let area = frame.area();
        render(frame, area);
    });
    match result {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(error = %err, "dialog draw failed");
            false
        }
    }
}

impl<B: Backend> Dialogs for TuiDialogs<'_, B> {
    fn confirm_save_changes(&mut self, document_name: &str) -> ConfirmChoice {
        loop {
            if !draw_over(self.terminal, &self.backdrop, |frame, area| {
                render_confirm(frame, area, &self.theme, document_name)
            }) {
                return ConfirmChoice::Cancel;
            }

            let Some(input) = self.next_input() else {
                return ConfirmChoice::Cancel;
            };
            let DialogInput::Key(key) = input else {
                continue;
            };
            if let Some(choice) = confirm_choice_for(&key) {
                return choice;
            }
        }
    }

    fn choose_path(&mut self, request: &PathRequest) -> Option<PathBuf> {
        let mut picker = PathPicker::new(request, self.base_dir.clone(), self.files);
        loop {
            if !draw_over(self.terminal, &self.backdrop, |frame, area| {
                render_path_picker(frame, area, &self.theme, &picker)
            }) {
                return None;
            }

            match self.next_input()? {
                DialogInput::Key(key) => match picker.handle_key(&key, self.files) {
                    PickerOutcome::Accepted(path) if picker.replaces_existing(&path, self.files) => {
                        // No 回到选择框继续编辑
                        if self.confirm_replace(&path)? {
                            return Some(path);
                        }
                    }
                    PickerOutcome::Accepted(path) => return Some(path),
                    PickerOutcome::Cancelled => return None,
                    PickerOutcome::Pending => {}
                },
                DialogInput::Paste(text) => picker.paste(&text, self.files),
                DialogInput::Redraw => {}
            }
        }
    }

    fn show_message(&mut self, message: &Message) {
        loop {
            if !draw_over(self.terminal, &self.backdrop, |frame, area| {
                render_message(frame, area, &self.theme, message)
            }) {
                return;
            }

            match self.next_input() {
                None => return,
                Some(DialogInput::Key(key))
                    if matches!(
                        key.code,
                        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
                    ) =>
                {
                    return
                }
                Some(_) => {}
            }
        }
    }
}

impl<B: Backend> TuiDialogs<'_, B> {
    /// Yes → Some(true)，No → Some(false)，输入结束 → None
    fn confirm_replace(&mut self, path: &Path) -> Option<bool> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        loop {
            if !draw_over(self.terminal, &self.backdrop, |frame, area| {
                render_replace(frame, area, &self.theme, &name)
            }) {
                return None;
            }

            if let DialogInput::Key(key) = self.next_input()? {
                if let Some(replace) = replace_choice_for(&key) {
                    tracing::debug!(path = %path.display(), replace, "overwrite prompt");
                    return Some(replace);
                }
            }
        }
    }
}

pub(crate) fn replace_choice_for(key: &KeyEvent) -> Option<bool> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(true),
        KeyCode::Esc => Some(false),
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'y' => Some(true),
            'n' => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Enter 默认保存
pub(crate) fn confirm_choice_for(key: &KeyEvent) -> Option<ConfirmChoice> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(ConfirmChoice::Save),
        KeyCode::Esc => Some(ConfirmChoice::Cancel),
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'y' | 's' => Some(ConfirmChoice::Save),
            'n' | 'd' => Some(ConfirmChoice::Discard),
            'c' => Some(ConfirmChoice::Cancel),
            _ => None,
        },
        _ => None,
    }
}

fn dialog_frame(
    frame: &mut Frame,
    popup: Rect,
    title: &str,
    theme: &UiTheme,
    border_fg: Color,
) -> Rect {
    frame.render_widget(Clear, popup);
    let base_style = Style::default().bg(theme.dialog_bg).fg(theme.dialog_fg);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_fg))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(border_fg).add_modifier(Modifier::BOLD),
        ))
        .style(base_style);
    frame.render_widget(block, popup);
    inner_rect(popup)
}

fn hint(keys: &[(&'static str, &'static str)], theme: &UiTheme) -> Line<'static> {
    let mut spans = Vec::with_capacity(keys.len() * 2);
    for (idx, (key, label)) in keys.iter().enumerate() {
        let style = if idx == 0 {
            Style::default().fg(theme.accent_fg)
        } else {
            Style::default().fg(theme.muted_fg)
        };
        spans.push(Span::styled(*key, style));
        spans.push(Span::raw(format!(" {}  ", label)));
    }
    Line::from(spans)
}

/// 按宽度估算换行后的行数
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines()
        .map(|line| line.width().max(1).div_ceil(width))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

pub(crate) fn render_message(frame: &mut Frame, area: Rect, theme: &UiTheme, message: &Message) {
    let width = centered_rect(DIALOG_WIDTH_PERCENT, 0, area).width;
    let text_rows = wrapped_height(&message.text, width.saturating_sub(2));
    let popup = centered_rect(DIALOG_WIDTH_PERCENT, text_rows.saturating_add(4), area);
    if popup.width < 4 || popup.height < 3 {
        return;
    }

    let border_fg = match message.kind {
        MessageKind::Info => theme.dialog_border,
        MessageKind::Error => theme.error_fg,
    };
    let inner = dialog_frame(frame, popup, &message.title, theme, border_fg);

    let mut lines: Vec<Line> = message.text.lines().map(Line::from).collect();
    lines.push(Line::raw(""));
    lines.push(hint(&[("[Enter]", "OK")], theme));
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(theme.dialog_bg).fg(theme.dialog_fg))
            .wrap(Wrap { trim: false }),
        inner,
    );
}

pub(crate) fn render_confirm(frame: &mut Frame, area: Rect, theme: &UiTheme, document_name: &str) {
    let popup = centered_rect(DIALOG_WIDTH_PERCENT, 7, area);
    if popup.width < 4 || popup.height < 3 {
        return;
    }
    let inner = dialog_frame(frame, popup, CONFIRM_TITLE, theme, theme.dialog_border);

    let lines = vec![
        Line::from(CONFIRM_TEXT),
        Line::from(Span::styled(
            document_name.to_string(),
            Style::default().fg(theme.muted_fg),
        )),
        Line::raw(""),
        hint(
            &[("[Y]", "Save"), ("[N]", "Discard"), ("[Esc]", "Cancel")],
            theme,
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(theme.dialog_bg).fg(theme.dialog_fg))
            .wrap(Wrap { trim: true }),
        inner,
    );
}

pub(crate) fn render_replace(frame: &mut Frame, area: Rect, theme: &UiTheme, name: &str) {
    let popup = centered_rect(DIALOG_WIDTH_PERCENT, 6, area);
    if popup.width < 4 || popup.height < 3 {
        return;
    }
    let inner = dialog_frame(frame, popup, REPLACE_TITLE, theme, theme.dialog_border);

    let lines = vec![
        Line::from(format!("{} {}", name, REPLACE_TEXT)),
        Line::raw(""),
        hint(&[("[Y]", "Yes"), ("[N]", "No")], theme),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(theme.dialog_bg).fg(theme.dialog_fg))
            .wrap(Wrap { trim: true }),
        inner,
    );
}

pub(crate) fn render_path_picker(
    frame: &mut Frame,
    area: Rect,
    theme: &UiTheme,
    picker: &PathPicker,
) {
    let popup = centered_rect(PICKER_WIDTH_PERCENT, PICKER_HEIGHT, area);
    if popup.width < 10 || popup.height < 6 {
        return;
    }
    let inner = dialog_frame(frame, popup, picker.title(), theme, theme.dialog_border);
    let base_style = Style::default().bg(theme.dialog_bg).fg(theme.dialog_fg);
    let muted = Style::default().fg(theme.muted_fg);

    // 输入行 + 过滤器行 + 列表 + 提示行
    let list_height = inner.height.saturating_sub(4) as usize;
    let mut lines = Vec::with_capacity(list_height + 4);

    lines.push(Line::from(vec![
        Span::styled("File name: ", muted),
        Span::raw(tail_fit(picker.input(), (inner.width as usize).saturating_sub(12))),
        Span::styled("_", Style::default().fg(theme.accent_fg)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Filter: ", muted),
        Span::raw(picker.filter().label()),
        Span::styled("  [Tab] switch", muted),
    ]));

    if let Some(err) = picker.error() {
        lines.push(Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(theme.error_fg),
        )));
        for _ in 1..list_height {
            lines.push(Line::raw(""));
        }
    } else {
        let entries = picker.entries();
        let selected = picker.selected();
        let start = selected
            .map(|idx| (idx + 1).saturating_sub(list_height))
            .unwrap_or(0);
        let selected_style = Style::default()
            .bg(theme.menu_selected_bg)
            .fg(theme.menu_selected_fg);
        for row in 0..list_height {
            let Some(entry) = entries.get(start + row) else {
                lines.push(Line::raw(""));
                continue;
            };
            let is_selected = selected == Some(start + row);
            let marker = if is_selected { "▸ " } else { "  " };
            let suffix = if entry.is_dir && entry.name != super::picker::PARENT_ENTRY {
                std::path::MAIN_SEPARATOR.to_string()
            } else {
                String::new()
            };
            let text = format!("{marker}{}{suffix}", entry.name);
            let style = if is_selected { selected_style } else { base_style };
            lines.push(Line::from(Span::styled(text, style)));
        }
    }

    lines.push(hint(
        &[("[Enter]", "OK"), ("[Esc]", "Cancel"), ("[↑↓]", "Browse")],
        theme,
    ));
    frame.render_widget(Paragraph::new(lines).style(base_style), inner);
}

/// 超宽时保留末尾（文件名比前缀目录更重要）
fn tail_fit(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out: Vec<char> = Vec::new();
    let mut used = 1usize;
    for ch in text.chars().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out.into_iter().rev().collect()
}

#[cfg(test)]
#[path = "../../tests/unit/app/dialogs.rs"]
mod tests;

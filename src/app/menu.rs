//! 菜单栏：File / Edit / Help
//!
//! 下拉菜单的渲染沿用右键菜单的画法：Clear + 边框 + 选中行高亮。

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::theme::UiTheme;
use super::workbench::util::{inner_rect, rect_contains};
use crate::core::event::{KeyCode, KeyEvent, KeyModifiers};
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingService;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Action(Command),
    Separator,
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub title: &'static str,
    /// Alt+字母 打开
    pub hotkey: char,
    pub items: Vec<MenuItem>,
}

/// 菜单对一次输入的反应
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// 输入被菜单消费
    Handled,
    /// 菜单未处理
    Ignored,
    Run(Command),
}

pub fn default_menus() -> Vec<Menu> {
    use MenuItem::{Action, Separator};
    vec![
        Menu {
            title: "File",
            hotkey: 'f',
            items: vec![
                Action(Command::New),
                Action(Command::Open),
                Action(Command::Save),
                Action(Command::SaveAs),
                Separator,
                Action(Command::Exit),
            ],
        },
        Menu {
            title: "Edit",
            hotkey: 'e',
            items: vec![
                Action(Command::Undo),
                Action(Command::Redo),
                Separator,
                Action(Command::Cut),
                Action(Command::Copy),
                Action(Command::Paste),
                Separator,
                Action(Command::SelectAll),
            ],
        },
        Menu {
            title: "Help",
            hotkey: 'h',
            items: vec![Action(Command::About)],
        },
    ]
}

#[derive(Debug, Clone)]
pub struct MenuBar {
    menus: Vec<Menu>,
    open: Option<usize>,
    selected: usize,
    last_title_areas: Vec<Rect>,
    last_dropdown_area: Option<Rect>,
}

impl MenuBar {
    pub fn new() -> Self {
        Self {
            menus: default_menus(),
            open: None,
            selected: 0,
            last_title_areas: Vec::new(),
            last_dropdown_area: None,
        }
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn open_menu(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        let menu = self.menus.get(self.open?)?;
        menu.items.get(self.selected)
    }

    pub fn open(&mut self, index: usize) {
        if index >= self.menus.len() {
            return;
        }
        self.open = Some(index);
        self.selected = self.first_action(index).unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.open = None;
        self.selected = 0;
        self.last_dropdown_area = None;
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open(0);
        }
    }

    /// Alt+F / Alt+E / Alt+H
    pub fn hotkey_index(&self, key: &KeyEvent) -> Option<usize> {
        if !key.modifiers.contains(KeyModifiers::ALT)
            || key.modifiers.contains(KeyModifiers::CONTROL)
        {
            return None;
        }
        let KeyCode::Char(ch) = key.code else {
            return None;
        };
        let ch = ch.to_ascii_lowercase();
        self.menus.iter().position(|menu| menu.hotkey == ch)
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> MenuAction {
        if let Some(index) = self.hotkey_index(key) {
            if self.open == Some(index) {
                self.close();
            } else {
                self.open(index);
            }
            return MenuAction::Handled;
        }

        let Some(open) = self.open else {
            return MenuAction::Ignored;
        };

        match key.code {
            KeyCode::Esc | KeyCode::F(10) => self.close(),
            KeyCode::Left => {
                let count = self.menus.len();
                self.open((open + count - 1) % count);
            }
            KeyCode::Right => {
                let count = self.menus.len();
                self.open((open + 1) % count);
            }
            KeyCode::Up => self.step(false),
            KeyCode::Down => self.step(true),
            KeyCode::Enter => {
                if let Some(MenuItem::Action(command)) = self.selected_item().cloned() {
                    self.close();
                    return MenuAction::Run(command);
                }
            }
            _ => {}
        }
        MenuAction::Handled
    }

    /// 左键点击：标题切换菜单，下拉项执行命令，其它位置关闭菜单
    pub fn click(&mut self, x: u16, y: u16) -> MenuAction {
        if let Some(index) = self
            .last_title_areas
            .iter()
            .position(|area| rect_contains(*area, x, y))
        {
            if self.open == Some(index) {
                self.close();
            } else {
                self.open(index);
            }
            return MenuAction::Handled;
        }

        let Some(open) = self.open else {
            return MenuAction::Ignored;
        };
        let Some(dropdown) = self.last_dropdown_area else {
            self.close();
            return MenuAction::Ignored;
        };
        if !rect_contains(dropdown, x, y) {
            self.close();
            return MenuAction::Ignored;
        }

        let inner = inner_rect(dropdown);
        if y < inner.y || y >= inner.y + inner.height {
            return MenuAction::Handled;
        }
        let row = usize::from(y - inner.y);
        match self.menus[open].items.get(row).cloned() {
            Some(MenuItem::Action(command)) => {
                self.close();
                MenuAction::Run(command)
            }
            _ => MenuAction::Handled,
        }
    }

    fn first_action(&self, index: usize) -> Option<usize> {
        self.menus[index]
            .items
            .iter()
            .position(|item| matches!(item, MenuItem::Action(_)))
    }

    /// 跳过分隔线，循环移动
    fn step(&mut self, down: bool) {
        let Some(open) = self.open else {
            return;
        };
        let items = &self.menus[open].items;
        if items.is_empty() {
            return;
        }
        let len = items.len();
        let mut idx = self.selected;
        for _ in 0..len {
            idx = if down { (idx + 1) % len } else { (idx + len - 1) % len };
            if matches!(items[idx], MenuItem::Action(_)) {
                self.selected = idx;
                return;
            }
        }
    }

    pub fn render_bar(&mut self, frame: &mut Frame, area: Rect, theme: &UiTheme) {
        let base = Style::default().bg(theme.menu_bg).fg(theme.menu_fg);
        let selected = Style::default()
            .bg(theme.menu_selected_bg)
            .fg(theme.menu_selected_fg);

        self.last_title_areas.clear();
        let mut spans = Vec::with_capacity(self.menus.len());
        let mut x = area.x;
        for (idx, menu) in self.menus.iter().enumerate() {
            let label = format!(" {} ", menu.title);
            let width = label.width() as u16;
            self.last_title_areas
                .push(Rect::new(x, area.y, width.min(area.right().saturating_sub(x)), 1));
            x = x.saturating_add(width);
            let style = if self.open == Some(idx) { selected } else { base };
            spans.push(Span::styled(label, style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);
    }

    /// `bounds` 是下拉菜单可用的区域（菜单栏下方）
    pub fn render_dropdown(
        &mut self,
        frame: &mut Frame,
        bounds: Rect,
        theme: &UiTheme,
        keybindings: &KeybindingService,
    ) {
        self.last_dropdown_area = None;
        let Some(open) = self.open else {
            return;
        };
        let Some(anchor) = self.last_title_areas.get(open).copied() else {
            return;
        };
        let menu = &self.menus[open];

        let rows: Vec<(String, String)> = menu
            .items
            .iter()
            .map(|item| match item {
                MenuItem::Action(command) => (
                    command.label().to_string(),
                    keybindings.shortcut_label(command).unwrap_or_default(),
                ),
                MenuItem::Separator => (String::new(), String::new()),
            })
            .collect();
        let label_w = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
        let shortcut_w = rows.iter().map(|(_, s)| s.width()).max().unwrap_or(0);
        let inner_w = label_w + shortcut_w + 6;

        let width = (inner_w as u16).saturating_add(2).min(bounds.width);
        let height = (rows.len() as u16).saturating_add(2).min(bounds.height);
        if width < 3 || height < 3 {
            return;
        }
        let mut x = anchor.x.max(bounds.x);
        if x.saturating_add(width) > bounds.right() {
            x = bounds.right().saturating_sub(width);
        }
        let popup = Rect::new(x, bounds.y, width, height);
        self.last_dropdown_area = Some(popup);

        frame.render_widget(Clear, popup);
        let base = Style::default().bg(theme.menu_bg).fg(theme.menu_fg);
        let selected_style = Style::default()
            .bg(theme.menu_selected_bg)
            .fg(theme.menu_selected_fg);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(base)
                .style(base),
            popup,
        );

        let inner = inner_rect(popup);
        let pad_to = inner.width as usize;
        let lines: Vec<Line> = rows
            .iter()
            .zip(menu.items.iter())
            .enumerate()
            .take(inner.height as usize)
            .map(|(idx, ((label, shortcut), item))| {
                if matches!(item, MenuItem::Separator) {
                    return Line::from(Span::styled("─".repeat(pad_to), base));
                }
                let gap = pad_to
                    .saturating_sub(label.width() + shortcut.width() + 2)
                    .max(1);
                let text = format!(" {}{}{} ", label, " ".repeat(gap), shortcut);
                let style = if idx == self.selected { selected_style } else { base };
                Line::from(Span::styled(text, style))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).style(base), inner);
    }
}

impl Default for MenuBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/menu.rs"]
mod tests;

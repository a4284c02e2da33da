use super::Workbench;
use crate::kernel::editor::{cursor_display_x, display_x_at, expand_tabs, visible_slice};
use crate::kernel::EditorState;
use crate::models::slice_to_cow;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(super::TITLE_HEIGHT),
            Constraint::Length(super::MENU_HEIGHT),
            Constraint::Length(super::TOOLBAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(super::STATUS_HEIGHT),
        ])
        .split(area);

    workbench.render_title(frame, chunks[0]);
    workbench.menu.render_bar(frame, chunks[1], &workbench.theme);
    workbench.render_toolbar(frame, chunks[2]);
    workbench.render_text_area(frame, chunks[3]);
    workbench.render_status(frame, chunks[4]);

    // 下拉菜单盖在工具栏和文本区上
    let dropdown_bounds = Rect::new(
        area.x,
        chunks[2].y,
        area.width,
        chunks[2].height + chunks[3].height,
    );
    workbench.menu.render_dropdown(
        frame,
        dropdown_bounds,
        &workbench.theme,
        &workbench.keybindings,
    );

    if !workbench.menu.is_open() {
        if let Some(pos) = cursor_screen_position(&workbench.editor, chunks[3]) {
            frame.set_cursor_position(pos);
        }
    }
}

/// 光标在屏幕上的位置；不在文本区可见范围内时为 None
pub(super) fn cursor_screen_position(editor: &EditorState, area: Rect) -> Option<(u16, u16)> {
    let viewport = editor.viewport();
    let (row, _) = editor.buffer().cursor();
    let x = cursor_display_x(editor.buffer(), editor.tab_size());

    let rel_y = row.checked_sub(viewport.line_offset)?;
    let rel_x = x.checked_sub(viewport.horiz_offset)?;
    if rel_y >= area.height as usize || rel_x >= area.width as usize {
        return None;
    }
    Some((area.x + rel_x as u16, area.y + rel_y as u16))
}

impl Workbench {
    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .bg(self.theme.title_bg)
            .fg(self.theme.title_fg)
            .add_modifier(Modifier::BOLD);
        frame.render_widget(
            Paragraph::new(self.session.title())
                .alignment(Alignment::Center)
                .style(style),
            area,
        );
    }

    fn render_toolbar(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(self.theme.toolbar_fg);
        self.last_toolbar_buttons.clear();

        let mut spans = Vec::with_capacity(super::TOOLBAR_BUTTONS.len() * 2);
        let mut x = area.x.saturating_add(1);
        spans.push(Span::raw(" "));
        for (label, command) in super::TOOLBAR_BUTTONS.iter() {
            let width = label.width() as u16;
            if x.saturating_add(width) > area.right() {
                break;
            }
            self.last_toolbar_buttons
                .push((Rect::new(x, area.y, width, area.height.min(1)), command.clone()));
            spans.push(Span::styled(*label, style));
            spans.push(Span::raw(" "));
            x = x.saturating_add(width + 1);
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_text_area(&mut self, frame: &mut Frame, area: Rect) {
        self.last_text_area = Some(area);
        self.editor
            .set_viewport_size(area.width as usize, area.height as usize);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let editor = &self.editor;
        let buffer = editor.buffer();
        let viewport = editor.viewport();
        let tab_size = editor.tab_size();
        let width = area.width as usize;
        let selection = buffer
            .selection()
            .filter(|s| !s.is_empty())
            .map(|s| s.range());
        let selected_style = Style::default().bg(self.theme.selection_bg);

        let buf = frame.buffer_mut();
        for row in 0..area.height {
            let line_idx = viewport.line_offset + row as usize;
            let Some(slice) = buffer.line_slice(line_idx) else {
                break;
            };
            let y = area.y + row;
            let line = slice_to_cow(slice);
            let visible = visible_slice(&expand_tabs(&line, tab_size), viewport.horiz_offset, width);
            buf.set_stringn(area.x, y, &visible, width, Style::default());

            let Some((start, end)) = selection else {
                continue;
            };
            if line_idx < start.0 || line_idx > end.0 {
                continue;
            }
            let sel_start = if line_idx == start.0 {
                display_x_at(buffer, line_idx, start.1, tab_size)
            } else {
                0
            };
            // 跨行选区在行尾多画一格，表示换行也被选中
            let sel_end = if line_idx == end.0 {
                display_x_at(buffer, line_idx, end.1, tab_size)
            } else {
                display_x_at(buffer, line_idx, buffer.line_grapheme_len(line_idx), tab_size) + 1
            };
            let from = sel_start.max(viewport.horiz_offset) - viewport.horiz_offset;
            let to = sel_end.min(viewport.horiz_offset + width).saturating_sub(viewport.horiz_offset);
            if to > from {
                buf.set_style(
                    Rect::new(area.x + from as u16, y, (to - from) as u16, 1),
                    selected_style,
                );
            }
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg);
        let (row, col) = self.editor.buffer().cursor();
        let position = format!("Ln {}, Col {} ", row + 1, col + 1);
        let status = format!(" {}", self.status_text());

        let gap = (area.width as usize).saturating_sub(status.width() + position.width());
        let line = if gap > 0 {
            Line::from(vec![
                Span::raw(status),
                Span::raw(" ".repeat(gap)),
                Span::raw(position),
            ])
        } else {
            Line::from(status)
        };
        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}

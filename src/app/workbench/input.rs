use super::util::rect_contains;
use super::Workbench;
use crate::app::menu::MenuAction;
use crate::core::event::{
    Key, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::{EditorDispatch, Effect};
use crate::tui::EventResult;

impl Workbench {
    pub(super) fn handle_key(&mut self, event: &KeyEvent) -> EventResult {
        if event.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }

        match self.menu.handle_key(event) {
            MenuAction::Run(command) => return self.execute(command),
            MenuAction::Handled => return EventResult::Consumed,
            MenuAction::Ignored => {}
        }

        let key = Key::from(*event);
        if let Some(command) = self
            .keybindings
            .resolve(KeybindingContext::Editor, &key)
            .cloned()
        {
            return self.execute(command);
        }

        // 大小写以原始事件为准（Key::from 会把大写折叠成 shift+小写）
        match Key::new(event.code, event.modifiers).typed_char() {
            Some(ch) => self.execute(Command::InsertChar(ch)),
            None => EventResult::Ignored,
        }
    }

    pub(super) fn handle_mouse(&mut self, event: &MouseEvent) -> EventResult {
        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.menu.click(x, y) {
                    MenuAction::Run(command) => return self.execute(command),
                    MenuAction::Handled => return EventResult::Consumed,
                    MenuAction::Ignored => {}
                }

                if let Some(command) = self
                    .last_toolbar_buttons
                    .iter()
                    .find(|(area, _)| rect_contains(*area, x, y))
                    .map(|(_, command)| command.clone())
                {
                    return self.execute(command);
                }

                let Some(area) = self.last_text_area.filter(|a| rect_contains(*a, x, y)) else {
                    return EventResult::Ignored;
                };
                let extend = event.modifiers.contains(KeyModifiers::SHIFT);
                self.editor.click(x - area.x, y - area.y, extend);
                self.dragging = true;
                EventResult::Consumed
            }
            MouseEventKind::Drag(MouseButton::Left) if self.dragging => {
                let Some(area) = self.last_text_area else {
                    return EventResult::Ignored;
                };
                if area.width == 0 || area.height == 0 {
                    return EventResult::Ignored;
                }
                let rel_x = x.clamp(area.x, area.right() - 1) - area.x;
                let rel_y = y.clamp(area.y, area.bottom() - 1) - area.y;
                self.editor.click(rel_x, rel_y, true);
                EventResult::Consumed
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.dragging = false;
                EventResult::Consumed
            }
            MouseEventKind::ScrollUp => {
                self.editor.scroll_lines(-(self.scroll_step as isize));
                EventResult::Consumed
            }
            MouseEventKind::ScrollDown => {
                self.editor.scroll_lines(self.scroll_step as isize);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// 终端的括号粘贴；换行统一成 `\n`
    pub(super) fn handle_paste(&mut self, text: &str) -> EventResult {
        if self.menu.is_open() {
            return EventResult::Consumed;
        }
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        if self.editor.insert_text(&text) {
            self.note_edit();
        }
        EventResult::Consumed
    }

    pub(super) fn execute(&mut self, command: Command) -> EventResult {
        if command.is_document_command() {
            self.menu.close();
            return EventResult::Document(command);
        }

        match command {
            Command::ToggleMenu => {
                self.menu.toggle();
                EventResult::Consumed
            }
            Command::Custom(name) => {
                tracing::debug!(%name, "unknown command");
                EventResult::Ignored
            }
            command => {
                let dispatch = self.editor.dispatch(command);
                self.apply_dispatch(dispatch);
                EventResult::Consumed
            }
        }
    }

    fn apply_dispatch(&mut self, dispatch: EditorDispatch) {
        let mut changed = dispatch.text_changed;
        for effect in dispatch.effects {
            match effect {
                Effect::SetClipboardText(text) => {
                    if let Err(err) = self.clipboard.set_text(&text) {
                        tracing::warn!(error = %err, "clipboard export failed");
                    }
                }
                Effect::RequestClipboardText => match self.clipboard.get_text() {
                    Ok(text) => changed |= self.editor.insert_text(&text),
                    Err(err) => tracing::debug!(error = %err, "nothing to paste"),
                },
            }
        }
        if changed {
            self.note_edit();
        }
    }

    fn note_edit(&mut self) {
        if self.session.note_edit() {
            tracing::debug!("document modified");
        }
    }
}

//! 快捷键：按键 → 命令（支持上下文）

use crate::core::event::Key;
use crate::core::event::KeyCode;
use crate::core::Command;
use crate::kernel::services::adapters::settings::parse_keybinding;
use crate::kernel::services::ports::settings::KeybindingRule;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Editor,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "editor" | "textarea" | "text_area" => Some(Self::Editor),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    editor: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            editor: default_editor_keybindings(),
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Editor => self.editor.get(key).or_else(|| self.global.get(key)),
        }
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Editor => &self.editor,
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// 应用 settings 中的覆盖规则；空命令表示解绑，无法解析的按键被跳过
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) -> usize {
        let mut applied = 0usize;
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring unparsable keybinding");
                continue;
            };
            let context = rule
                .context
                .as_deref()
                .and_then(KeybindingContext::parse)
                .unwrap_or(KeybindingContext::Global);
            if rule.command.trim().is_empty() {
                let _ = self.unbind(context, &key);
            } else {
                self.bind(context, key, Command::from_name(&rule.command));
            }
            applied += 1;
        }
        applied
    }

    /// 菜单上显示的快捷键提示（取第一个匹配）
    pub fn shortcut_label(&self, command: &Command) -> Option<String> {
        let mut keys: Vec<&Key> = self
            .global
            .iter()
            .filter(|(_, c)| *c == command)
            .map(|(k, _)| k)
            .collect();
        keys.sort_by_key(|k| format_key(k));
        keys.first().map(|k| format_key(k))
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Editor => &mut self.editor,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_key(key: &Key) -> String {
    use crate::core::event::KeyModifiers;

    let mut out = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        out.push_str("Ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        out.push_str("Alt+");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        out.push_str("Shift+");
    }
    match key.code {
        KeyCode::Char(' ') => out.push_str("Space"),
        KeyCode::Char(ch) => out.push(ch.to_ascii_uppercase()),
        KeyCode::F(n) => out.push_str(&format!("F{}", n)),
        KeyCode::Enter => out.push_str("Enter"),
        KeyCode::Esc => out.push_str("Esc"),
        KeyCode::Tab => out.push_str("Tab"),
        other => out.push_str(&format!("{:?}", other)),
    }
    out
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::ctrl(KeyCode::Char('n')), Command::New);
    bindings.insert(Key::ctrl(KeyCode::Char('o')), Command::Open);
    bindings.insert(Key::ctrl(KeyCode::Char('s')), Command::Save);
    bindings.insert(Key::ctrl_shift(KeyCode::Char('s')), Command::SaveAs);
    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Exit);

    bindings.insert(Key::ctrl(KeyCode::Char('z')), Command::Undo);
    bindings.insert(Key::ctrl(KeyCode::Char('y')), Command::Redo);
    bindings.insert(Key::ctrl(KeyCode::Char('x')), Command::Cut);
    bindings.insert(Key::ctrl(KeyCode::Char('c')), Command::Copy);
    bindings.insert(Key::ctrl(KeyCode::Char('v')), Command::Paste);
    bindings.insert(Key::ctrl(KeyCode::Char('a')), Command::SelectAll);

    bindings.insert(Key::simple(KeyCode::F(1)), Command::About);
    bindings.insert(Key::simple(KeyCode::F(10)), Command::ToggleMenu);

    bindings
}

fn default_editor_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(32);

    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Up), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::CursorDown);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);
    bindings.insert(Key::ctrl(KeyCode::Home), Command::CursorFileStart);
    bindings.insert(Key::ctrl(KeyCode::End), Command::CursorFileEnd);
    bindings.insert(Key::simple(KeyCode::PageUp), Command::PageUp);
    bindings.insert(Key::simple(KeyCode::PageDown), Command::PageDown);

    bindings.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
    bindings.insert(Key::simple(KeyCode::Tab), Command::InsertTab);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);

    bindings.insert(Key::shift(KeyCode::Left), Command::ExtendSelectionLeft);
    bindings.insert(Key::shift(KeyCode::Right), Command::ExtendSelectionRight);
    bindings.insert(Key::shift(KeyCode::Up), Command::ExtendSelectionUp);
    bindings.insert(Key::shift(KeyCode::Down), Command::ExtendSelectionDown);
    bindings.insert(Key::shift(KeyCode::Home), Command::ExtendSelectionLineStart);
    bindings.insert(Key::shift(KeyCode::End), Command::ExtendSelectionLineEnd);
    bindings.insert(
        Key::ctrl_shift(KeyCode::Home),
        Command::ExtendSelectionFileStart,
    );
    bindings.insert(
        Key::ctrl_shift(KeyCode::End),
        Command::ExtendSelectionFileEnd,
    );

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;

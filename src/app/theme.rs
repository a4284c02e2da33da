//! UI 主题：把可配置的颜色集中管理，避免散落在渲染代码里。

use ratatui::style::Color;

use crate::kernel::services::ports::ThemeSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub title_fg: Color,
    pub title_bg: Color,
    pub menu_fg: Color,
    pub menu_bg: Color,
    pub menu_selected_fg: Color,
    pub menu_selected_bg: Color,
    pub toolbar_fg: Color,
    pub status_fg: Color,
    pub status_bg: Color,
    pub selection_bg: Color,
    pub dialog_border: Color,
    pub dialog_fg: Color,
    pub dialog_bg: Color,
    pub accent_fg: Color,
    pub error_fg: Color,
    pub muted_fg: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("TXTEDIT_COLOR_SUPPORT") {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return TerminalColorSupport::TrueColor;
    }
    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }
    TerminalColorSupport::Ansi16
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            title_fg: Color::Indexed(15),        // White
            title_bg: Color::Indexed(4),         // Blue
            menu_fg: Color::Indexed(0),          // Black
            menu_bg: Color::Indexed(7),          // Gray
            menu_selected_fg: Color::Indexed(15),
            menu_selected_bg: Color::Indexed(4),
            toolbar_fg: Color::Indexed(6),       // Cyan
            status_fg: Color::Indexed(0),
            status_bg: Color::Indexed(7),
            selection_bg: Color::Indexed(8),     // DarkGray
            dialog_border: Color::Indexed(6),
            dialog_fg: Color::Indexed(15),
            dialog_bg: Color::Reset,
            accent_fg: Color::Indexed(3),        // Yellow
            error_fg: Color::Indexed(9),         // LightRed
            muted_fg: Color::Indexed(8),
        }
    }
}

impl UiTheme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme
    }

    /// 无法解析的颜色保留默认值
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        override_color(&mut self.title_fg, &settings.title_fg);
        override_color(&mut self.title_bg, &settings.title_bg);
        override_color(&mut self.menu_fg, &settings.menu_fg);
        override_color(&mut self.menu_bg, &settings.menu_bg);
        override_color(&mut self.menu_selected_fg, &settings.menu_selected_fg);
        override_color(&mut self.menu_selected_bg, &settings.menu_selected_bg);
        override_color(&mut self.toolbar_fg, &settings.toolbar_fg);
        override_color(&mut self.status_fg, &settings.status_fg);
        override_color(&mut self.status_bg, &settings.status_bg);
        override_color(&mut self.selection_bg, &settings.selection_bg);
        override_color(&mut self.dialog_border, &settings.dialog_border);
        override_color(&mut self.dialog_fg, &settings.dialog_fg);
        override_color(&mut self.dialog_bg, &settings.dialog_bg);
        override_color(&mut self.accent_fg, &settings.accent_fg);
        override_color(&mut self.error_fg, &settings.error_fg);
        override_color(&mut self.muted_fg, &settings.muted_fg);
    }

    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    pub fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }
        for color in [
            &mut self.title_fg,
            &mut self.title_bg,
            &mut self.menu_fg,
            &mut self.menu_bg,
            &mut self.menu_selected_fg,
            &mut self.menu_selected_bg,
            &mut self.toolbar_fg,
            &mut self.status_fg,
            &mut self.status_bg,
            &mut self.selection_bg,
            &mut self.dialog_border,
            &mut self.dialog_fg,
            &mut self.dialog_bg,
            &mut self.accent_fg,
            &mut self.error_fg,
            &mut self.muted_fg,
        ] {
            *color = map_color_for_support(*color, support);
        }
    }
}

fn override_color(slot: &mut Color, value: &Option<String>) {
    if let Some(color) = value.as_deref().and_then(parse_color) {
        *slot = color;
    }
}

fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(nearest_index(r, g, b, 0..=255))
        }
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(nearest_index(r, g, b, 0..=15))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i > 15 => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(nearest_index(r, g, b, 0..=15))
        }
        (_, value) => value,
    }
}

fn nearest_index(r: u8, g: u8, b: u8, candidates: std::ops::RangeInclusive<u8>) -> u8 {
    candidates
        .min_by_key(|&index| {
            let (pr, pg, pb) = ansi256_index_to_rgb(index);
            color_distance_sq((r, g, b), (pr, pg, pb))
        })
        .unwrap_or(0)
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = i32::from(a.0) - i32::from(b.0);
    let dg = i32::from(a.1) - i32::from(b.1);
    let db = i32::from(a.2) - i32::from(b.2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// `#rrggbb` 或颜色名（black / red / ... / dark_gray / light_*）
pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    let c = match v.to_ascii_lowercase().as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" | "dark_grey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;

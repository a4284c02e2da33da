use super::config::EditorConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_selected_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_selected_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toolbar_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            title_fg: Some("white".to_string()),
            title_bg: Some("blue".to_string()),
            menu_fg: Some("black".to_string()),
            menu_bg: Some("gray".to_string()),
            menu_selected_fg: Some("white".to_string()),
            menu_selected_bg: Some("blue".to_string()),
            toolbar_fg: Some("cyan".to_string()),
            status_fg: Some("black".to_string()),
            status_bg: Some("gray".to_string()),
            selection_bg: Some("dark_gray".to_string()),
            dialog_border: Some("cyan".to_string()),
            dialog_fg: Some("white".to_string()),
            dialog_bg: None,
            accent_fg: Some("yellow".to_string()),
            error_fg: Some("light_red".to_string()),
            muted_fg: Some("dark_gray".to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;

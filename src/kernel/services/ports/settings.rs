use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub debounce_ms: u64,
}

impl SearchSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            highlight_fg: Some("black".to_string()),
            highlight_bg: Some("yellow".to_string()),
            accent_fg: Some("cyan".to_string()),
            border: Some("dark_gray".to_string()),
        }
    }
}
